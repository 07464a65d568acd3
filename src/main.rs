//! Elastic Pit headless driver
//!
//! Builds the default scene and steps it, logging system totals. Set
//! `RUST_LOG=info` (or `debug` for per-contact detail) to see output.

use elastic_pit::SimSettings;
use elastic_pit::sim::Simulation;

/// Ticks to run (one minute at 60 fps)
const TICKS: u64 = 3600;
/// Log totals every this many ticks
const REPORT_EVERY: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Elastic Pit (headless) starting...");

    let settings = SimSettings::default();
    let mut sim = match Simulation::new(settings) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Failed to build simulation: {}", e);
            std::process::exit(1);
        }
    };

    let initial = sim.world.system_totals();
    let mut contacts = 0usize;
    for _ in 0..TICKS {
        let report = sim.step();
        contacts += report.contacts.len();
        if report.tick % REPORT_EVERY == 0 {
            log::info!(
                "tick {}: energy={:.3} momentum=({:.3}, {:.3}) overlap={:.4}",
                report.tick,
                report.total_kinetic_energy,
                report.total_momentum.x(),
                report.total_momentum.y(),
                sim.world.max_overlap()
            );
        }
    }

    let last = sim.world.system_totals();
    log::info!(
        "Done: {} contacts, energy drift {:.3e}",
        contacts,
        (last.kinetic_energy - initial.kinetic_energy).abs()
    );
}
