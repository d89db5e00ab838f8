//! Host-side pin overrides applied between ticks.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Externally dictated position for one particle.
///
/// Applying a pin teleports the particle with zero velocity. With `pinned`
/// set it stays frozen there through integration and relaxation until a
/// later override releases it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pin<F: Float> {
    pub row: usize,
    pub column: usize,
    pub position: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Pin<F> {
    /// Freeze `(row, column)` at `position`.
    pub fn hold(row: usize, column: usize, position: Vec2<F>) -> Self {
        Pin { row, column, position, pinned: true }
    }

    /// Drop `(row, column)` at `position` and let it move freely.
    pub fn release(row: usize, column: usize, position: Vec2<F>) -> Self {
        Pin { row, column, position, pinned: false }
    }
}

/// Pins for the first, middle and last row of column 0, spread along x.
///
/// The particles are placed at `target`, `target + (span / 2, 0)` and
/// `target + (span, 0)`, which drags the cloth by one edge like a curtain
/// rod. Rows that coincide (grids with fewer than 3 rows) are pinned once.
pub fn edge_anchors<F: Float>(rows: usize, target: Vec2<F>, span: F) -> AllocVec<Pin<F>> {
    let mut pins: AllocVec<Pin<F>> = AllocVec::with_capacity(3);
    if rows == 0 {
        return pins;
    }

    let anchors = [
        (0, F::zero()),
        (rows / 2, span * F::half()),
        (rows - 1, span),
    ];
    for (row, dx) in anchors {
        if pins.iter().any(|p| p.row == row) {
            continue;
        }
        pins.push(Pin::hold(row, 0, Vec2::new(target.x + dx, target.y)));
    }
    pins
}
