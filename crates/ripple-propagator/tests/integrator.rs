//! Integration tests: driving `TimeIntegrator` with mock laws.

use ripple_core::{TickId, DT};
use ripple_propagator::{Injection, TimeIntegrator, ZeroLaw};
use ripple_space::Stamp;
use ripple_test_utils::{load_field, random_stamp, ConstantLaw, RecordingLaw};

#[test]
fn zero_law_leaves_random_field_untouched() {
    let stamp = random_stamp(42, 12, 9);
    let mut sim = TimeIntegrator::new(12, 9, ZeroLaw);
    load_field(&mut sim, &stamp, 1.0);
    let before = sim.current().clone();
    for _ in 0..50 {
        sim.step();
    }
    assert_eq!(sim.current(), &before);
}

#[test]
fn constant_rate_accumulates_linearly() {
    let mut sim = TimeIntegrator::new(3, 3, ConstantLaw::new(1.0));
    for n in 1..=4u8 {
        sim.step();
        let expected = f32::from(n) * DT;
        assert!(
            sim.current().as_slice().iter().all(|&v| v == expected),
            "after {n} steps expected {expected}"
        );
    }
}

#[test]
fn law_sees_current_and_previous_in_order() {
    let stamp = Stamp::uniform(4, 4, 0.5).unwrap();
    let mut sim = TimeIntegrator::new(4, 4, RecordingLaw::new());
    load_field(&mut sim, &stamp, 1.0);

    sim.step();
    sim.step();

    let obs = &sim.law().observations;
    assert_eq!(obs.len(), 2);

    assert_eq!(obs[0].tick_id, TickId(0));
    assert_eq!(obs[0].dt, DT);
    assert_eq!(obs[0].current_sum, 8.0);
    assert_eq!(obs[0].previous_sum, 0.0);

    assert_eq!(obs[1].tick_id, TickId(1));
    assert_eq!(obs[1].current_sum, 8.0);
    assert_eq!(obs[1].previous_sum, 8.0);
}

#[test]
fn law_is_allocated_at_construction_and_resize() {
    let mut sim = TimeIntegrator::new(0, 5, RecordingLaw::new());
    sim.resize(7, 2);
    assert_eq!(sim.law().allocations, vec![(1, 5), (7, 2)]);
}

#[test]
fn starting_buffer_is_current_again_after_three_steps() {
    let mut sim = TimeIntegrator::new(5, 5, ConstantLaw::new(0.25));
    let start = sim.roles().current();
    let mut seen = vec![start];
    for _ in 0..3 {
        sim.step();
        seen.push(sim.roles().current());
    }
    assert_eq!(seen[3], start);
    assert_ne!(seen[1], start);
    assert_ne!(seen[2], start);
    assert_ne!(seen[1], seen[2]);
}

#[test]
fn boxed_law_drives_integrator() {
    let law: Box<dyn ripple_propagator::RateLaw> = Box::new(ConstantLaw::new(2.0));
    let mut sim = TimeIntegrator::new(2, 2, law);
    sim.step();
    assert_eq!(sim.value(1, 1), 1.0);
    assert_eq!(sim.law().name(), "ConstantLaw");
}

#[test]
fn injected_cells_take_part_in_next_step() {
    let mut sim = TimeIntegrator::new(6, 6, ConstantLaw::new(1.0));
    sim.inject(
        &Stamp::point(1.0).unwrap(),
        3,
        3,
        &Injection::new(0.5, -1.0, 1.0).unwrap(),
    );
    sim.step();
    assert_eq!(sim.value(3, 3), 1.0);
    assert_eq!(sim.value(0, 0), 0.5);
}
