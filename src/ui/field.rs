use crate::simulation::field::SensorField;
use rayon::prelude::*;

const CHARS: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Rasterizes the scalar field into an ASCII intensity grid.
///
/// The field is unbounded above, so each value is squashed through
/// `v / (v + 1)` before indexing the character ramp; a singularity renders
/// as full intensity.
#[must_use]
pub fn compute_field_grid(field: &SensorField, rows: usize, cols: usize) -> Vec<String> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let scale_y = field.height / rows as f64;
    let scale_x = field.width / cols as f64;

    // Use rayon to compute rows in parallel
    (0..rows)
        .into_par_iter()
        .map(|r| {
            let mut line = String::with_capacity(cols);
            for c in 0..cols {
                let world_y = r as f64 * scale_y;
                let world_x = c as f64 * scale_x;

                let val = field.evaluate(world_x, world_y);
                let squashed = if val.is_finite() { val / (val + 1.0) } else { 1.0 };

                // Map 0.0..1.0 to index 0..9
                let idx = (squashed * (CHARS.len() - 1) as f64).round() as usize;
                let idx = idx.min(CHARS.len() - 1); // Safety clamp

                line.push(CHARS[idx]);
            }
            line
        })
        .collect()
}

/// Converts an arena position to a (row, col) cell of the grid, clamped to
/// the grid edges.
#[must_use]
pub fn world_to_grid_coords(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rows: usize,
    cols: usize,
) -> (usize, usize) {
    let r = (y / height * rows as f64) as usize;
    let c = (x / width * cols as f64) as usize;
    (
        r.min(rows.saturating_sub(1)),
        c.min(cols.saturating_sub(1)),
    )
}

/// Stamps a single marker character into the grid.
pub fn overlay_marker(grid: &mut [String], r: usize, c: usize, marker: char) {
    if let Some(line) = grid.get_mut(r) {
        if c < line.len() {
            line.replace_range(c..=c, &marker.to_string());
        }
    }
}
