//! Lattice coordinates and structural neighbor sets.
//!
//! Particles live in a row-major flat array: the particle at `(row, column)`
//! has index `row * columns + column`. Each particle is linked to at most four
//! structural neighbors (up, left, down, right). There are no diagonal links.

/// Identity of a particle in the lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub row: usize,
    pub column: usize,
}

impl GridCoord {
    pub fn new(row: usize, column: usize) -> Self {
        GridCoord { row, column }
    }

    /// Flat index in a grid with `columns` columns.
    pub fn index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Inverse of [`GridCoord::index`].
    pub fn from_index(index: usize, columns: usize) -> Self {
        GridCoord { row: index / columns, column: index % columns }
    }

    /// True if the coordinate names a cell of a `rows x columns` grid.
    pub fn in_bounds(self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }
}

/// Maximum number of structural neighbors a particle can have.
pub const MAX_NEIGHBORS: usize = 4;

/// Fixed-capacity list of neighbor indices, stored inline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    indices: [usize; MAX_NEIGHBORS],
    len: u8,
}

impl Neighbors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural neighbors of `coord` in a `rows x columns` grid.
    ///
    /// Candidates are visited in the order up, left, down, right; any that
    /// fall outside the grid are dropped. Corners end up with 2 neighbors,
    /// edges with 3, interior cells with 4.
    pub fn of(coord: GridCoord, rows: usize, columns: usize) -> Self {
        let mut neighbors = Neighbors::new();
        let GridCoord { row, column } = coord;

        let candidates = [
            row.checked_sub(1).map(|r| GridCoord::new(r, column)),
            column.checked_sub(1).map(|c| GridCoord::new(row, c)),
            Some(GridCoord::new(row + 1, column)),
            Some(GridCoord::new(row, column + 1)),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.in_bounds(rows, columns) {
                neighbors.push(candidate.index(columns));
            }
        }
        neighbors
    }

    fn push(&mut self, index: usize) {
        debug_assert!((self.len as usize) < MAX_NEIGHBORS);
        self.indices[self.len as usize] = index;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len as usize]
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}
