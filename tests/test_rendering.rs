use braitenberg_sim::simulation::field::SensorField;
use braitenberg_sim::simulation::params::{ARENA_HEIGHT, ARENA_WIDTH};
use braitenberg_sim::ui::field::{compute_field_grid, overlay_marker, world_to_grid_coords};

#[test]
fn test_grid_dimensions() {
    let field = SensorField::new(ARENA_WIDTH, ARENA_HEIGHT);
    let grid = compute_field_grid(&field, 24, 80);
    assert_eq!(grid.len(), 24);
    for line in &grid {
        assert_eq!(line.chars().count(), 80);
    }
}

#[test]
fn test_empty_grid_dimensions() {
    let field = SensorField::new(ARENA_WIDTH, ARENA_HEIGHT);
    assert!(compute_field_grid(&field, 0, 80).is_empty());
    assert!(compute_field_grid(&field, 24, 0).is_empty());
}

#[test]
fn test_zero_field_renders_blank() {
    let field = SensorField::new(ARENA_WIDTH, ARENA_HEIGHT);
    let grid = compute_field_grid(&field, 16, 16);
    for line in &grid {
        assert!(
            line.chars().all(|c| c == ' '),
            "expected blank line, got {line:?}"
        );
    }
}

#[test]
fn test_source_renders_full_intensity() {
    let mut field = SensorField::new(ARENA_WIDTH, ARENA_HEIGHT);
    field.add_source_at_cell(0, 0).unwrap();

    // With an 8x8 raster over a 512-unit arena, sample (1, 1) lands
    // exactly on the source at (64, 64); the singular value must render
    // as the top of the ramp, not crash.
    let grid = compute_field_grid(&field, 8, 8);
    let cell = grid[1].chars().nth(1).unwrap();
    assert_eq!(cell, '@');
}

#[test]
fn test_intensity_falls_off_with_distance() {
    let mut field = SensorField::new(ARENA_WIDTH, ARENA_HEIGHT);
    field.add_source_at_cell(3, 3).unwrap();

    let grid = compute_field_grid(&field, 8, 8);
    let ramp = |ch: char| " .:-=+*#%@".find(ch).unwrap();

    let near = ramp(grid[4].chars().nth(4).unwrap());
    let far = ramp(grid[7].chars().nth(7).unwrap());
    assert!(
        near > far,
        "intensity near the source ({near}) must exceed the far corner ({far})"
    );
}

#[test]
fn test_world_to_grid_coords_bounds() {
    let (r, c) = world_to_grid_coords(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, 24, 80);
    assert_eq!((r, c), (0, 0));

    let (r, c) = world_to_grid_coords(
        ARENA_WIDTH - 0.1,
        ARENA_HEIGHT - 0.1,
        ARENA_WIDTH,
        ARENA_HEIGHT,
        24,
        80,
    );
    assert_eq!((r, c), (23, 79));

    // Positions past the edge clamp onto the grid.
    let (r, c) = world_to_grid_coords(
        ARENA_WIDTH * 2.0,
        ARENA_HEIGHT * 2.0,
        ARENA_WIDTH,
        ARENA_HEIGHT,
        24,
        80,
    );
    assert_eq!((r, c), (23, 79));
}

#[test]
fn test_overlay_marker() {
    let mut grid = vec!["....".to_string(), "....".to_string()];
    overlay_marker(&mut grid, 1, 2, 'V');
    assert_eq!(grid[1], "..V.");

    // Out-of-range coordinates are ignored.
    overlay_marker(&mut grid, 5, 0, 'V');
    overlay_marker(&mut grid, 0, 9, 'V');
    assert_eq!(grid[0], "....");
}
