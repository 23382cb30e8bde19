//! Property tests for scale and range invariants.
//!
//! Uses proptest to verify:
//! 1. Round trip - `inverse(convert(x)) ≈ x` for every built-in scale
//!    (Sine only on its rising half, `[0, ½]`)
//! 2. Endpoints and monotonicity of every monotonic built-in scale
//! 3. Inverse wrapper - directions swap exactly, kind is always Custom
//! 4. Selection ordering - thumbs stay sorted and in bounds under any edits
//! 5. Snapping - snapped values sit on the step grid or at the maximum

use proptest::prelude::*;
use rangescale::{AnyScale, Scale, ScaleKind, ScaledRange, Selection, scale::Sine};

const TOLERANCE: f64 = 1e-9;

// ── Strategies (proptest) ────────────────────────────────────────────

fn monotonic_presets() -> Vec<ScaleKind> {
    ScaleKind::PRESETS
        .into_iter()
        .filter(|&kind| kind != ScaleKind::Sine)
        .collect()
}

fn arb_preset() -> impl Strategy<Value = AnyScale<f64>> {
    prop::sample::select(monotonic_presets())
        .prop_map(|kind| AnyScale::from_kind(kind).expect("preset kind"))
}

// Monotonic scales that pin both ends.
fn arb_scale() -> impl Strategy<Value = AnyScale<f64>> {
    prop_oneof![
        arb_preset(),
        (0.2..8.0_f64).prop_map(|p| AnyScale::power(p).expect("positive power")),
        (1.1..50.0_f64).prop_map(|m| AnyScale::hyperbolic(m).expect("max above one")),
    ]
}

// Every built-in, Sine included.
fn arb_any_scale() -> impl Strategy<Value = AnyScale<f64>> {
    prop_oneof![arb_scale(), Just(AnyScale::Sine)]
}

fn arb_unit() -> impl Strategy<Value = f64> {
    0.0..=1.0_f64
}

// Circle and Power get steep near 1; stay clear of that edge for round trips.
fn arb_round_trip_x() -> impl Strategy<Value = f64> {
    0.0..=0.999_f64
}

// Rising half of the sine wave, clear of the flat peak.
fn arb_sine_x() -> impl Strategy<Value = f64> {
    0.0..=0.499_f64
}

// ── 1. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn round_trip(scale in arb_scale(), x in arb_round_trip_x()) {
        let back = scale.inverse(scale.convert(x));
        prop_assert!(
            (back - x).abs() < TOLERANCE,
            "{}: inverse(convert({})) = {}", scale, x, back
        );
    }
}

proptest! {
    #[test]
    fn sine_round_trip_on_rising_half(x in arb_sine_x()) {
        let back = Sine.inverse(Sine.convert(x));
        prop_assert!((back - x).abs() < TOLERANCE, "inverse(convert({})) = {}", x, back);
    }

    #[test]
    fn sine_is_symmetric_about_peak(x in arb_sine_x()) {
        prop_assert!((Sine.convert(x) - Sine.convert(1.0 - x)).abs() < TOLERANCE);
    }
}

#[test]
fn round_trip_dense_grid() {
    for kind in ScaleKind::PRESETS {
        let scale = AnyScale::<f64>::from_kind(kind).unwrap();
        let upper = if kind == ScaleKind::Sine { 5_000 } else { 10_000 };
        for i in 0..=upper {
            let x = i as f64 / 10_000.0;
            let back = scale.inverse(scale.convert(x));
            assert!((back - x).abs() < TOLERANCE, "{kind}: {x} -> {back}");
        }
    }
}

// ── 2. Endpoints and monotonicity ────────────────────────────────────

proptest! {
    #[test]
    fn endpoints_are_fixed(scale in arb_scale()) {
        prop_assert!(scale.convert(0.0).abs() < TOLERANCE);
        prop_assert!((scale.convert(1.0) - 1.0).abs() < TOLERANCE);
        prop_assert!(scale.inverse(0.0).abs() < TOLERANCE);
        prop_assert!((scale.inverse(1.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn convert_is_monotonic(scale in arb_scale(), a in arb_unit(), b in arb_unit()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.convert(lo) <= scale.convert(hi));
        prop_assert!(scale.inverse(lo) <= scale.inverse(hi));
    }

    #[test]
    fn sine_rises_on_first_half(a in 0.0..=0.5_f64, b in 0.0..=0.5_f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Sine.convert(lo) <= Sine.convert(hi));
    }

    #[test]
    fn output_stays_in_unit_interval(scale in arb_any_scale(), x in arb_unit()) {
        let y = scale.convert(x);
        prop_assert!((0.0..=1.0).contains(&y), "{}: convert({}) = {}", scale, x, y);
    }
}

// ── 3. Inverse wrapper ───────────────────────────────────────────────

proptest! {
    #[test]
    fn inverse_wrapper_swaps(scale in arb_any_scale(), y in arb_unit()) {
        let wrapped = scale.clone().invert();
        prop_assert_eq!(wrapped.convert(y), scale.inverse(y));
        prop_assert_eq!(wrapped.inverse(y), scale.convert(y));
        prop_assert_eq!(wrapped.kind(), ScaleKind::Custom);
    }
}

// ── 4. Selection ordering ────────────────────────────────────────────

fn arb_edits() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0..4_usize, -50.0..150.0_f64), 1..30)
}

proptest! {
    #[test]
    fn selection_stays_sorted(scale in arb_any_scale(), edits in arb_edits()) {
        let range = ScaledRange::with_scale(0.0, 100.0, scale);
        let mut selection = Selection::new(range, 4).unwrap();
        for (thumb, value) in edits {
            let change = selection.set(thumb, value).unwrap();
            if let Some(change) = change {
                prop_assert_eq!(change.thumb, thumb);
                prop_assert_eq!(selection.value(thumb), Some(change.new));
            }
            let values = selection.values();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
            prop_assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
        }
    }

    #[test]
    fn drag_keeps_positions_in_unit_interval(
        scale in arb_any_scale(),
        drags in prop::collection::vec((0..3_usize, -0.5..1.5_f64), 1..20),
    ) {
        let range = ScaledRange::with_scale(-10.0, 10.0, scale);
        let mut selection = Selection::new(range, 3).unwrap();
        for (thumb, position) in drags {
            selection.drag_to(thumb, position).unwrap();
        }
        for position in selection.positions() {
            prop_assert!((0.0..=1.0).contains(&position));
        }
    }
}

// ── 5. Snapping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn snap_lands_on_grid_or_maximum(step in 0.5..20.0_f64, value in -50.0..150.0_f64) {
        let range = ScaledRange::<f64>::new(0.0, 100.0).with_step(step).unwrap();
        let snapped = range.snap(value);
        prop_assert!((0.0..=100.0).contains(&snapped));
        if snapped != 100.0 {
            let steps = snapped / step;
            prop_assert!((steps - steps.round()).abs() < 1e-9);
        }
    }
}
