#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use braitenberg_sim::simulation::params::MAX_CELL_INDEX;
use braitenberg_sim::simulation::{Side, Simulation};
use braitenberg_sim::ui::field::{compute_field_grid, overlay_marker, world_to_grid_coords};
use braitenberg_sim::ui::render::draw_ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App State: the driver owns the simulation and threads it explicitly.
    let mut sim = Simulation::new();
    let tick_rate = Duration::from_millis(10);

    let res = run_app(&mut terminal, &mut sim, tick_rate);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    sim: &mut Simulation,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    // A committed column index waiting for its row digit.
    let mut pending_col: Option<u32> = None;
    let mut status = String::from("place a source (column digit, then row digit), then space");

    loop {
        // 1. Update
        if last_tick.elapsed() >= tick_rate {
            sim.tick();
            last_tick = Instant::now();
        }

        // 2. Render
        terminal.draw(|f| {
            let area = f.area();
            let rows = (area.height as usize).saturating_sub(2); // HUD + help
            let cols = area.width as usize;

            let mut grid = compute_field_grid(&sim.field, rows, cols);

            if rows > 0 && cols > 0 {
                let width = sim.field.width;
                let height = sim.field.height;

                for source in sim.field.sources() {
                    let (r, c) =
                        world_to_grid_coords(source.x, source.y, width, height, rows, cols);
                    overlay_marker(&mut grid, r, c, 'O');
                }

                let snapshot = sim.snapshot();
                for vertex in &snapshot.vertices {
                    let (r, c) =
                        world_to_grid_coords(vertex.x, vertex.y, width, height, rows, cols);
                    overlay_marker(&mut grid, r, c, '#');
                }
                for sensor in [snapshot.left_sensor, snapshot.right_sensor] {
                    let (r, c) =
                        world_to_grid_coords(sensor.x, sensor.y, width, height, rows, cols);
                    overlay_marker(&mut grid, r, c, '*');
                }
            }

            let hud = hud_line(sim, pending_col, &status);
            draw_ui(f, grid, &hud);
        })?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char(' ') => {
                        if sim.is_running() {
                            sim.pause();
                            status = "paused".to_string();
                        } else {
                            sim.start();
                            status = "running".to_string();
                        }
                    }
                    KeyCode::Char('r') => {
                        sim.reset();
                        pending_col = None;
                        status = "reset".to_string();
                    }
                    KeyCode::Char(ch @ '0'..='9') => {
                        let index = u32::from(ch as u8 - b'0');
                        if index > MAX_CELL_INDEX {
                            status = "column and row must be between 0 and 6".to_string();
                        } else if let Some(col) = pending_col.take() {
                            status = match sim.add_source_at_cell(col, index) {
                                Ok(source) => {
                                    format!("source placed at ({:.0}, {:.0})", source.x, source.y)
                                }
                                Err(err) => err.to_string(),
                            };
                        } else {
                            pending_col = Some(index);
                        }
                    }
                    KeyCode::Char('g') => {
                        status = add_random_source(sim);
                    }
                    KeyCode::Char('z') => {
                        let attachment = sim.vehicle.left_sensor.attachment.opposite();
                        let inhibitory = sim.vehicle.left_sensor.inhibitory;
                        sim.configure_sensor(Side::Left, attachment, inhibitory);
                        status = format!("left sensor drives {attachment:?} wheel");
                    }
                    KeyCode::Char('x') => {
                        let attachment = sim.vehicle.left_sensor.attachment;
                        let inhibitory = !sim.vehicle.left_sensor.inhibitory;
                        sim.configure_sensor(Side::Left, attachment, inhibitory);
                        status = format!("left sensor inhibitory: {inhibitory}");
                    }
                    KeyCode::Char('n') => {
                        let attachment = sim.vehicle.right_sensor.attachment.opposite();
                        let inhibitory = sim.vehicle.right_sensor.inhibitory;
                        sim.configure_sensor(Side::Right, attachment, inhibitory);
                        status = format!("right sensor drives {attachment:?} wheel");
                    }
                    KeyCode::Char('m') => {
                        let attachment = sim.vehicle.right_sensor.attachment;
                        let inhibitory = !sim.vehicle.right_sensor.inhibitory;
                        sim.configure_sensor(Side::Right, attachment, inhibitory);
                        status = format!("right sensor inhibitory: {inhibitory}");
                    }
                    KeyCode::Char('k') => {
                        let inhibitory = !sim.vehicle.left_wheel.inhibitory;
                        sim.configure_wheel(Side::Left, inhibitory);
                        status = format!("left wheel inhibitory: {inhibitory}");
                    }
                    KeyCode::Char('l') => {
                        let inhibitory = !sim.vehicle.right_wheel.inhibitory;
                        sim.configure_wheel(Side::Right, inhibitory);
                        status = format!("right wheel inhibitory: {inhibitory}");
                    }
                    KeyCode::Esc => {
                        pending_col = None;
                        status = "entry cleared".to_string();
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Places a source in a randomly chosen free grid cell.
fn add_random_source(sim: &mut Simulation) -> String {
    let mut rng = rand::rng();
    for _ in 0..64 {
        let col = rng.random_range(0..=MAX_CELL_INDEX);
        let row = rng.random_range(0..=MAX_CELL_INDEX);
        if let Ok(source) = sim.add_source_at_cell(col, row) {
            return format!("source placed at ({:.0}, {:.0})", source.x, source.y);
        }
    }
    "no free cell found".to_string()
}

fn hud_line(sim: &Simulation, pending_col: Option<u32>, status: &str) -> String {
    let state = if sim.is_running() { "RUN" } else { "IDLE" };
    let wire = |attachment: Side, inhibitory: bool| {
        let inv = if inhibitory { "~" } else { "" };
        match attachment {
            Side::Left => format!("{inv}L"),
            Side::Right => format!("{inv}R"),
        }
    };
    let wheel = |inhibitory: bool| if inhibitory { "~" } else { "=" };
    let pending = pending_col.map_or(String::new(), |col| format!(" | col {col}, row?"));

    format!(
        "[{state}] sources:{} | sensors L>{} R>{} | wheels L{} R{}{pending} | {status}",
        sim.field.sources().len(),
        wire(
            sim.vehicle.left_sensor.attachment,
            sim.vehicle.left_sensor.inhibitory
        ),
        wire(
            sim.vehicle.right_sensor.attachment,
            sim.vehicle.right_sensor.inhibitory
        ),
        wheel(sim.vehicle.left_wheel.inhibitory),
        wheel(sim.vehicle.right_wheel.inhibitory),
    )
}
