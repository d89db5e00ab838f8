use approx::assert_relative_eq;
use cloth2d::{ClothConfig, ClothGrid, ConstraintSolver, NoOpStepObserver, Simulation, Vec2};

#[test]
fn force_free_grid_at_rest_stays_put() {
    let config: ClothConfig<f64> = ClothConfig::new()
        .with_dimensions(4, 6)
        .with_acceleration(Vec2::zero());
    let mut grid = ClothGrid::new(&config).unwrap();
    let before = grid.positions();

    grid.integrate(1.5, &mut NoOpStepObserver);
    assert_eq!(grid.positions(), before);

    let mut sim = Simulation::new(config).unwrap();
    for _ in 0..20 {
        sim.tick();
    }
    assert_eq!(sim.grid().positions(), before);
}

#[test]
fn free_fall_follows_verlet_sum() {
    // A lone particle has no constraints, so it falls freely:
    // after n steps from rest, y = a * dt^2 * n(n + 1) / 2.
    let config: ClothConfig<f64> = ClothConfig::new()
        .with_dimensions(1, 1)
        .with_time_step(1.5)
        .with_gravity(0.005);
    let mut sim = Simulation::new(config).unwrap();
    for _ in 0..10 {
        sim.tick();
    }
    let pos = sim.grid().position_at(0, 0).unwrap();
    assert_relative_eq!(pos.x, 0.0);
    assert_relative_eq!(pos.y, 0.005 * 2.25 * 55.0, epsilon = 1e-12);
}

#[test]
fn pinned_particle_ignores_force_and_neighbors() {
    let config: ClothConfig<f32> = ClothConfig::new()
        .with_dimensions(3, 3)
        .with_gravity(1.0);
    let mut grid = ClothGrid::new(&config).unwrap();
    let hold = Vec2::new(-4.0, 7.0);
    grid.set_position(1, 1, hold, true).unwrap();

    for _ in 0..25 {
        grid.integrate(1.0, &mut NoOpStepObserver);
        let p = grid.particle(1, 1).unwrap();
        assert_eq!(p.pos, hold);
        assert_eq!(p.prev_pos, hold);

        for _ in 0..2 {
            ConstraintSolver::relax_pass(&mut grid, &mut NoOpStepObserver);
            let p = grid.particle(1, 1).unwrap();
            assert_eq!(p.pos, hold);
            assert_eq!(p.prev_pos, hold);
        }
    }
}

#[test]
fn unpinned_particle_resumes_from_rest() {
    let config: ClothConfig<f32> = ClothConfig::new()
        .with_dimensions(1, 1)
        .with_acceleration(Vec2::zero());
    let mut sim = Simulation::new(config).unwrap();
    sim.set_position(0, 0, Vec2::new(2.0, 2.0), true).unwrap();
    sim.tick();
    sim.unpin(0, 0).unwrap();
    sim.tick();
    assert_eq!(sim.grid().position_at(0, 0).unwrap(), Vec2::new(2.0, 2.0));
}
