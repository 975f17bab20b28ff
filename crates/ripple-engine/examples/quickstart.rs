//! Ripple Quickstart: a headless wave pool driven at a fixed tick rate.
//!
//! Demonstrates:
//!   1. Building a `WaveLaw` and a `SimConfig`
//!   2. Registering a droplet stamp decoded from 8-bit luminance
//!   3. Pacing steps with `FixedTicker` against a millisecond clock
//!   4. Dropping perturbations and reading frames in each view mode
//!
//! Run with:
//!   RUST_LOG=ripple_engine=debug cargo run --example quickstart

use ripple_engine::{FixedTicker, Perturbation, Sample, SimConfig, Simulation, ViewMode};
use ripple_propagators::WaveLaw;
use ripple_space::Stamp;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ─── Pool parameters ────────────────────────────────────────────

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;
const CELERITY_SQ: f32 = 1.0;
const DAMPING: f32 = 0.002;

/// Simulated wall-clock duration of the run.
const RUN_MS: u64 = 4_000;
/// Simulated time between frames: a ~60 Hz presenter.
const FRAME_MS: u64 = 16;

/// A 5x5 soft droplet, brightest in the middle.
#[rustfmt::skip]
const DROPLET: [u8; 25] = [
      0,  32,  64,  32,   0,
     32, 128, 192, 128,  32,
     64, 192, 255, 192,  64,
     32, 128, 192, 128,  32,
      0,  32,  64,  32,   0,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let law = WaveLaw::builder()
        .celerity_sq(CELERITY_SQ)
        .damping(DAMPING)
        .build()?;
    let mut sim = Simulation::new(SimConfig::new(WIDTH, HEIGHT, law))?;
    let droplet = sim.add_stamp("droplet", Stamp::from_luma8(5, 5, &DROPLET)?);

    let mut ticker = FixedTicker::new(sim.tick_period_ms(), 0)?;
    let mut mode = ViewMode::Height;
    let mut now_ms = 0;

    while now_ms < RUN_MS {
        if ticker.poll(now_ms) {
            let tick = sim.tick().0 as i32;
            // A drop every 25 ticks, walking diagonally across the pool.
            let batch = if tick % 25 == 0 {
                vec![Perturbation::new(droplet, tick * 3, tick * 2)]
            } else {
                Vec::new()
            };
            sim.step_sync(batch)?;
        }

        // Cycle the view every second, as a user pressing 1/2/3 would.
        let key = char::from(b'1' + ((now_ms / 1000) % 3) as u8);
        if let Some(next) = ViewMode::from_key(key) {
            mode = next;
        }
        present(&sim, mode);

        now_ms += FRAME_MS;
    }

    let stats = sim.stats();
    println!(
        "{} steps, {} drops, mean step {:.3} ms, state hash {:016x}",
        stats.steps,
        stats.perturbations,
        stats.mean_step_ms().unwrap_or(0.0),
        sim.state_hash()
    );
    Ok(())
}

/// Reduce a frame to one line, standing in for a renderer.
fn present(sim: &Simulation<WaveLaw>, mode: ViewMode) {
    let frame = sim.frame();
    let mut peak = 0.0f32;
    for sample in frame.samples(mode) {
        let magnitude = match sample {
            Sample::Height(h) => h.abs(),
            Sample::Divergence(d) => d.abs(),
            Sample::Gradient { dx, dy, .. } => (dx * dx + dy * dy).sqrt(),
        };
        peak = peak.max(magnitude);
    }
    if frame.tick().0 % 50 == 0 {
        tracing::debug!(tick = %frame.tick(), ?mode, peak, "frame");
    }
}
