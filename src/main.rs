use std::process::ExitCode;
use std::time::Instant;

use entity_evolution::{Result, SimConfig, SimError, Simulation, report};
use log::{error, info};
use piston_window::*;

const WINDOW_TITLE: &str = "AI Entity Evolution";

fn run() -> Result<()> {
    let mut sim = Simulation::new(SimConfig::default())?;

    let mut window: PistonWindow = WindowSettings::new(
        WINDOW_TITLE,
        [sim.arena.width as u32, sim.arena.height as u32],
    )
    .exit_on_esc(false)
    .resizable(false)
    .build()
    .map_err(|e| SimError::Window(e.to_string()))?;
    window.set_ups(sim.config.timing.frame_rate);
    window.set_max_fps(sim.config.timing.frame_rate);

    while sim.is_running() {
        let Some(e) = window.next() else {
            sim.stop();
            break;
        };

        if e.close_args().is_some() {
            sim.stop();
        }
        if let Some(Button::Keyboard(key)) = e.press_args() {
            sim.handle_key(key);
        }
        if e.update_args().is_some() {
            sim.tick(Instant::now());
        }

        window.draw_2d(&e, |c, g, _| sim.draw(c.transform, g));
    }
    drop(window);

    let period = sim.config.timing.report_period;
    let log = sim.into_log();
    info!("recorded {} reporting periods", log.snapshots().len());
    report::show(log.snapshots(), period)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
