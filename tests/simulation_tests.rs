use cloth2d::hull::contains;
use cloth2d::{
    edge_anchors, ClothConfig, ClothError, CountingObserver, OutlineSampling, Simulation,
    SimulationState, Vec2,
};

#[test]
fn outline_of_resting_grid_is_its_scaled_rectangle() {
    let sim: Simulation<f64> = Simulation::new(
        ClothConfig::new().with_dimensions(3, 5).with_output_scale(10.0),
    )
    .unwrap();
    let outline = sim.compute_outline();
    assert_eq!(
        outline,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 40.0),
            Vec2::new(0.0, 40.0),
        ]
    );
}

#[test]
fn outline_query_has_no_side_effects() {
    let mut sim: Simulation<f32> = Simulation::new(ClothConfig::new()).unwrap();
    sim.tick();
    let before = sim.grid().positions();
    let _ = sim.compute_outline();
    let _ = sim.outline_polygon(OutlineSampling::PerLink);
    let _ = sim.snapshot();
    assert_eq!(sim.grid().positions(), before);
    assert_eq!(sim.tick_count(), 1);
}

#[test]
fn outline_encloses_every_particle_while_moving() {
    let mut sim: Simulation<f64> = Simulation::new(ClothConfig::new()).unwrap();
    let anchors = edge_anchors(sim.grid().rows(), Vec2::new(0.0, 0.0), 20.0);
    for _ in 0..200 {
        sim.apply_pins(&anchors).unwrap();
        sim.tick();

        let outline = sim.outline_polygon(OutlineSampling::Particles).unwrap();
        for p in sim.output_positions() {
            assert!(contains(&outline, p, 1e-6), "{:?} escaped the outline", p);
        }
    }
    assert_eq!(sim.state(), SimulationState::Running);
}

#[test]
fn single_row_cloth_cannot_close_an_outline() {
    let mut sim: Simulation<f32> = Simulation::new(
        ClothConfig::new().with_dimensions(1, 6).with_acceleration(Vec2::zero()),
    )
    .unwrap();
    sim.tick();
    assert_eq!(sim.compute_outline().len(), 2);
    assert_eq!(
        sim.outline_polygon(OutlineSampling::Particles),
        Err(ClothError::DegenerateGeometry { hull_points: 2 })
    );
}

#[test]
fn relaxation_pass_count_is_configurable() {
    let mut sim: Simulation<f32> =
        Simulation::new(ClothConfig::new().with_relaxation_passes(5)).unwrap();
    let mut observer = CountingObserver::default();
    sim.tick_observed(&mut observer);
    assert_eq!(observer.integrations, 1);
    assert_eq!(observer.relaxation_passes, 5);
}

#[test]
fn cursor_in_output_space_drives_anchors() {
    let mut sim: Simulation<f32> = Simulation::new(ClothConfig::new()).unwrap();
    let cursor = Vec2::new(150.0, 75.0);
    let target = sim.to_simulation_space(cursor);
    let anchors = edge_anchors(sim.grid().rows(), target, 300.0 / sim.output_scale());
    sim.apply_pins(&anchors).unwrap();
    sim.tick();

    let first = sim.to_output_space(sim.grid().position_at(0, 0).unwrap());
    assert!((first.x - 150.0).abs() < 1e-3 && (first.y - 75.0).abs() < 1e-3);
    let last = sim.to_output_space(sim.grid().position_at(3, 0).unwrap());
    assert!((last.x - 450.0).abs() < 1e-3 && (last.y - 75.0).abs() < 1e-3);
}

#[test]
fn snapshot_can_be_read_on_another_thread() {
    let mut sim: Simulation<f32> = Simulation::new(ClothConfig::new()).unwrap();
    for _ in 0..10 {
        sim.tick();
    }
    let snapshot = sim.snapshot();
    let expected = sim.compute_outline();

    let outline = std::thread::spawn(move || snapshot.outline(OutlineSampling::Particles))
        .join()
        .unwrap();
    assert_eq!(outline, expected);
}

#[test]
fn changing_gravity_applies_to_every_particle() {
    let mut sim: Simulation<f64> = Simulation::new(
        ClothConfig::new().with_dimensions(2, 2).with_acceleration(Vec2::zero()),
    )
    .unwrap();
    sim.set_acceleration(Vec2::new(0.1, 0.0));
    sim.tick();
    for p in sim.grid().particles() {
        assert!(p.pos.x > p.prev_pos.x);
    }
}
