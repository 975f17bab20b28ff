//! Integration tests for the lockstep driver with the wave law.
//!
//! These exercise the full pipeline through `Simulation`, not just the
//! integrator in isolation.

use proptest::prelude::*;
use ripple_core::{StampId, StepError, TickId};
use ripple_engine::{
    field_hash, ConfigError, Perturbation, Sample, SimConfig, Simulation, StabilityPolicy,
    ViewMode,
};
use ripple_propagator::{RateLaw, ZeroLaw};
use ripple_propagators::WaveLaw;
use ripple_space::Stamp;
use ripple_test_utils::random_stamp;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("ripple_engine=debug")
        .try_init();
}

fn wave_sim(width: u32, height: u32, celerity_sq: f32) -> Simulation<WaveLaw> {
    let law = WaveLaw::new(celerity_sq).unwrap();
    Simulation::new(SimConfig::new(width, height, law)).unwrap()
}

/// Drive a 32x24 pool with a scripted rain of stamps and return its hash.
fn scripted_rain(steps: u32) -> u64 {
    let mut sim = wave_sim(32, 24, 1.0);
    let drop = sim.add_stamp("drop", random_stamp(5, 5, 5));
    let dot = sim.add_stamp("dot", Stamp::point(1.0).unwrap());
    for n in 0..steps as i32 {
        let batch = match n % 7 {
            0 => vec![Perturbation::new(drop, n * 3, n)],
            3 => vec![
                Perturbation::new(dot, -n, 2 * n),
                Perturbation::new(drop, 7, 40 - n),
            ],
            _ => Vec::new(),
        };
        sim.step_sync(batch).unwrap();
    }
    sim.state_hash()
}

#[test]
fn single_droplet_through_the_driver() {
    init_tracing();
    let law = WaveLaw::new(0.1).unwrap();
    let cfg = SimConfig::new(8, 8, law)
        .with_injection(1.0, -1.0, 1.0)
        .unwrap();
    let mut sim = Simulation::new(cfg).unwrap();
    let drop = sim.add_stamp("drop", Stamp::point(1.0).unwrap());

    let result = sim.step_sync([Perturbation::new(drop, 4, 4)]).unwrap();
    let frame = result.frame;
    assert_eq!(frame.tick(), TickId(1));
    assert!((frame.height_at(4, 4) - 0.9).abs() < 1e-6);
    assert!((frame.height_at(3, 4) - 0.025).abs() < 1e-6);
    assert_eq!(frame.height_at(4, 6), 0.0);
    assert!(sim.law().velocity(4, 4) < 0.0);

    let frame = sim.step_sync(Vec::new()).unwrap().frame;
    assert!(frame.height_at(4, 6) > 0.0);
    assert!(frame.height_at(5, 5) > 0.0);
}

#[test]
fn identical_inputs_hash_identically() {
    assert_eq!(scripted_rain(200), scripted_rain(200));
}

#[test]
fn different_inputs_hash_differently() {
    let mut a = wave_sim(16, 16, 1.0);
    let mut b = wave_sim(16, 16, 1.0);
    let da = a.add_stamp("drop", Stamp::point(1.0).unwrap());
    let db = b.add_stamp("drop", Stamp::point(1.0).unwrap());
    a.step_sync([Perturbation::new(da, 3, 3)]).unwrap();
    b.step_sync([Perturbation::new(db, 3, 4)]).unwrap();
    assert_ne!(a.state_hash(), b.state_hash());
}

#[test]
fn velocity_is_part_of_state_hash() {
    // After one step of a still pool with a drop, heights alone differ
    // from heights plus velocity.
    let mut sim = wave_sim(8, 8, 1.0);
    let drop = sim.add_stamp("drop", Stamp::point(1.0).unwrap());
    sim.step_sync([Perturbation::new(drop, 2, 2)]).unwrap();
    assert_ne!(sim.state_hash(), field_hash(sim.frame().field()));
}

#[test]
fn thousand_steps_with_rain_stay_finite() {
    let mut sim = wave_sim(24, 24, 1.0);
    let drop = sim.add_stamp("drop", random_stamp(11, 7, 7));
    for n in 0..1000 {
        let batch = if n % 50 == 0 {
            vec![Perturbation::new(drop, n, n / 3)]
        } else {
            Vec::new()
        };
        let result = sim.step_sync(batch).unwrap();
        if n % 100 == 99 {
            assert!(result
                .frame
                .samples(ViewMode::Height)
                .all(|s| matches!(s, Sample::Height(h) if h.is_finite())));
        }
    }
    assert_eq!(sim.tick(), TickId(1000));
    assert_eq!(sim.stats().steps, 1000);
    assert_eq!(sim.stats().perturbations, 20);
    assert!(sim.stats().mean_step_ms().is_some());
}

#[test]
fn unknown_stamp_is_reported() {
    let mut sim = wave_sim(8, 8, 1.0);
    let err = sim
        .step_sync([Perturbation::new(StampId(0), 0, 0)])
        .err()
        .unwrap();
    assert_eq!(err, StepError::UnknownStamp { id: StampId(0) });
    assert_eq!(err.to_string(), "unknown stamp 0");
}

#[test]
fn strict_policy_rejects_fast_waves() {
    init_tracing();
    let fast = WaveLaw::new(4.0).unwrap();
    let cfg = SimConfig::new(8, 8, fast).with_stability(StabilityPolicy::Reject);
    let err = Simulation::new(cfg).unwrap_err();
    assert!(matches!(err, ConfigError::Unstable { dt, .. } if dt == 0.5));

    let edge = WaveLaw::new(2.0).unwrap();
    let cfg = SimConfig::new(8, 8, edge).with_stability(StabilityPolicy::Reject);
    assert!(Simulation::new(cfg).is_ok());

    // The default policy only warns.
    let fast = WaveLaw::new(4.0).unwrap();
    assert!(Simulation::new(SimConfig::new(8, 8, fast)).is_ok());
}

#[test]
fn resize_then_continue() {
    let mut sim = wave_sim(10, 10, 1.0);
    let drop = sim.add_stamp("drop", Stamp::point(1.0).unwrap());
    for _ in 0..5 {
        sim.step_sync([Perturbation::new(drop, 5, 5)]).unwrap();
    }
    sim.resize(0, 6);
    assert_eq!((sim.width(), sim.height()), (1, 6));
    assert_eq!(sim.law().auxiliary().len(), 6);
    let result = sim.step_sync([Perturbation::new(drop, 0, 3)]).unwrap();
    assert_eq!(result.frame.tick(), TickId(1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn injected_heights_respect_clamp(
        w in 1u32..16,
        h in 1u32..16,
        seed in any::<u64>(),
        damping in -4.0f32..4.0,
        hits in proptest::collection::vec((any::<i32>(), any::<i32>()), 1..8),
    ) {
        let cfg = SimConfig::new(w, h, ZeroLaw)
            .with_injection(damping, -1.0, 1.0)
            .unwrap();
        let mut sim = Simulation::new(cfg).unwrap();
        let stamp = sim.add_stamp("noise", random_stamp(seed, 4, 3));
        let batch: Vec<_> = hits
            .into_iter()
            .map(|(x, y)| Perturbation::new(stamp, x, y))
            .collect();
        let result = sim.step_sync(batch).unwrap();
        prop_assert!(result
            .frame
            .field()
            .as_slice()
            .iter()
            .all(|v| (-1.0..=1.0).contains(v)));
    }
}
