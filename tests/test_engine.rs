use braitenberg_sim::simulation::error::FieldError;
use braitenberg_sim::simulation::params::{ARENA_HEIGHT, ARENA_WIDTH, TIME_QUANTUM};
use braitenberg_sim::simulation::{Side, Simulation};

const EPSILON: f64 = 1e-9;

fn assert_float_eq(a: f64, b: f64, msg: &str) {
    assert!((a - b).abs() < EPSILON, "{msg}: expected {b}, got {a}");
}

/// Run a started simulation for N quantum ticks and return it.
fn run_simulation(mut sim: Simulation, ticks: u64) -> Simulation {
    sim.start();
    for _ in 0..ticks {
        let snapshot = sim.tick().expect("running simulation must tick");
        assert!(snapshot.center.x.is_finite(), "center x became non-finite");
        assert!(snapshot.center.y.is_finite(), "center y became non-finite");
    }
    sim
}

#[test]
fn test_initial_state() {
    let sim = Simulation::new();
    assert!(!sim.is_running());
    assert!(sim.field.sources().is_empty());
    assert_float_eq(sim.vehicle.center().x, ARENA_WIDTH / 2.0, "center x");
    assert_float_eq(sim.vehicle.center().y, ARENA_HEIGHT / 2.0, "center y");
}

#[test]
fn test_start_pause_transitions() {
    let mut sim = Simulation::new();
    assert!(sim.tick().is_none(), "idle simulation must not tick");

    sim.start();
    assert!(sim.is_running());
    assert!(sim.tick().is_some());

    sim.pause();
    assert!(!sim.is_running());
    assert!(sim.tick().is_none());
}

#[test]
fn test_reset_discards_sources_and_recenters() {
    let mut sim = Simulation::new();
    sim.add_source_at_cell(1, 2).unwrap();
    sim.add_source_at_cell(4, 4).unwrap();
    sim.start();
    for _ in 0..50 {
        sim.tick();
    }

    sim.reset();

    assert!(!sim.is_running());
    assert!(sim.field.sources().is_empty());
    assert_float_eq(sim.vehicle.center().x, ARENA_WIDTH / 2.0, "center x");
    assert_float_eq(sim.vehicle.center().y, ARENA_HEIGHT / 2.0, "center y");
    assert!(!sim.vehicle.left_sensor.inhibitory, "wiring back to default");
}

#[test]
fn test_empty_field_keeps_vehicle_still() {
    let mut sim = Simulation::new();
    let before = sim.snapshot();
    let after = sim.step(TIME_QUANTUM);
    assert_float_eq(after.center.x, before.center.x, "center x");
    assert_float_eq(after.center.y, before.center.y, "center y");
}

#[test]
fn test_symmetric_sources_translate_only() {
    let mut sim = Simulation::new();
    // Cells (1, 1) and (5, 1) are mirror images about the vehicle's
    // longitudinal axis at x = 256.
    sim.add_source_at_cell(1, 1).unwrap();
    sim.add_source_at_cell(5, 1).unwrap();

    let start_x = sim.vehicle.center().x;
    let sim = run_simulation(sim, 20);

    assert_float_eq(
        sim.vehicle.center().x,
        start_x,
        "symmetric field leaves no lateral drift",
    );
}

#[test]
fn test_sensors_travel_with_vehicle() {
    let mut sim = Simulation::new();
    sim.add_source_at_cell(3, 1).unwrap();

    let before = sim.snapshot();
    let after = sim.step(TIME_QUANTUM);

    let moved = (after.center.x - before.center.x).hypot(after.center.y - before.center.y);
    assert!(moved > 0.0, "a lone source must move the vehicle");

    let offset_before = (
        before.left_sensor.x - before.center.x,
        before.left_sensor.y - before.center.y,
    );
    let offset_after = (
        after.left_sensor.x - after.center.x,
        after.left_sensor.y - after.center.y,
    );
    let offset_norm_before = offset_before.0.hypot(offset_before.1);
    let offset_norm_after = offset_after.0.hypot(offset_after.1);
    assert_float_eq(
        offset_norm_after,
        offset_norm_before,
        "sensor offset length preserved",
    );
}

#[test]
fn test_wraparound_is_idempotent() {
    let mut sim = Simulation::new();
    sim.vehicle.relocate(ARENA_WIDTH + 5.0, 256.0);

    sim.step(0.0);
    assert_float_eq(sim.vehicle.center().x, 5.0, "wrapped x");
    assert_float_eq(sim.vehicle.center().y, 256.0, "y untouched");

    // Already in bounds: a second step must not move the center again.
    sim.step(0.0);
    assert_float_eq(sim.vehicle.center().x, 5.0, "wrap is idempotent");
}

#[test]
fn test_wraparound_negative_axes() {
    let mut sim = Simulation::new();
    sim.vehicle.relocate(-3.0, -10.0);

    sim.step(0.0);
    assert_float_eq(sim.vehicle.center().x, ARENA_WIDTH - 3.0, "wrapped x");
    assert_float_eq(sim.vehicle.center().y, ARENA_HEIGHT - 10.0, "wrapped y");
}

#[test]
fn test_configure_sensor_and_wheel() {
    let mut sim = Simulation::new();
    sim.configure_sensor(Side::Left, Side::Right, true);
    sim.configure_wheel(Side::Right, true);

    assert_eq!(sim.vehicle.left_sensor.attachment, Side::Right);
    assert!(sim.vehicle.left_sensor.inhibitory);
    assert_eq!(sim.vehicle.right_sensor.attachment, Side::Right);
    assert!(sim.vehicle.right_wheel.inhibitory);
    assert!(!sim.vehicle.left_wheel.inhibitory);
}

#[test]
fn test_placement_errors_propagate() {
    let mut sim = Simulation::new();
    sim.add_source(64.0, 64.0).unwrap();
    assert_eq!(
        sim.add_source(64.0, 64.0),
        Err(FieldError::DuplicateLocation { x: 64.0, y: 64.0 })
    );
    assert!(matches!(
        sim.add_source(-5.0, 0.0),
        Err(FieldError::OutOfRange { .. })
    ));
    assert!(matches!(
        sim.add_source_at_cell(0, 9),
        Err(FieldError::CellOutOfRange { .. })
    ));
    assert_eq!(sim.field.sources().len(), 1);
}

#[test]
fn test_inhibited_run_crosses_boundary() {
    let mut sim = Simulation::new();
    // No sources, both sensors inhibitory: the vehicle drives forward at
    // max speed and must eventually wrap instead of escaping the arena.
    sim.configure_sensor(Side::Left, Side::Left, true);
    sim.configure_sensor(Side::Right, Side::Right, true);

    let sim = run_simulation(sim, 60);

    let center = sim.vehicle.center();
    assert!(
        center.x >= 0.0 && center.x <= ARENA_WIDTH,
        "x stayed in bounds: {}",
        center.x
    );
    assert!(
        center.y >= 0.0 && center.y <= ARENA_HEIGHT,
        "y stayed in bounds: {}",
        center.y
    );
}

#[test]
fn test_long_run_stays_finite() {
    let mut sim = Simulation::new();
    sim.add_source_at_cell(2, 2).unwrap();
    sim.add_source_at_cell(5, 4).unwrap();
    sim.configure_sensor(Side::Right, Side::Left, false);
    sim.configure_sensor(Side::Left, Side::Right, false);

    let sim = run_simulation(sim, 1000);

    let snapshot = sim.snapshot();
    for vertex in &snapshot.vertices {
        assert!(vertex.x.is_finite() && vertex.y.is_finite());
    }
}
