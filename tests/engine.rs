use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use epicycles::data::epicycle::compute;
use epicycles::{Amplitudes, EngineError, WaveKind, MAX_TERMS};

#[test]
fn term_count_and_finite_endpoint_over_full_range() {
    let amps = Amplitudes::default();
    for kind in WaveKind::ALL {
        for phase in [0.0, 0.05, -3.7, 1234.5, 1.0e6] {
            for n in 1..=MAX_TERMS {
                let e = compute(n, kind, phase, &amps).unwrap();
                assert_eq!(e.terms.len(), n);
                assert!(
                    e.endpoint[0].is_finite() && e.endpoint[1].is_finite(),
                    "{kind} n={n} phase={phase} gave {:?}",
                    e.endpoint
                );
            }
        }
    }
}

#[test]
fn odd_harmonics_for_square_and_triangle() {
    let amps = Amplitudes::default();
    for kind in [WaveKind::Square, WaveKind::Triangle] {
        let e = compute(6, kind, 0.3, &amps).unwrap();
        let ns: Vec<u32> = e.terms.iter().map(|t| t.harmonic).collect();
        assert_eq!(ns, vec![1, 3, 5, 7, 9, 11]);
    }
}

#[test]
fn all_harmonics_for_sawtooth() {
    let e = compute(5, WaveKind::Sawtooth, 0.3, &Amplitudes::default()).unwrap();
    let ns: Vec<u32> = e.terms.iter().map(|t| t.harmonic).collect();
    assert_eq!(ns, vec![1, 2, 3, 4, 5]);
}

#[test]
fn single_square_term_at_phase_zero() {
    let amps = Amplitudes::default();
    let e = compute(1, WaveKind::Square, 0.0, &amps).unwrap();
    let expected = amps.square * 4.0 / PI;
    assert_eq!(e.terms.len(), 1);
    assert_eq!(e.terms[0].harmonic, 1);
    assert_abs_diff_eq!(e.terms[0].radius, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(e.terms[0].diameter(), expected * 2.0, epsilon = 1e-12);
    assert_eq!(e.terms[0].center, [0.0, 0.0]);
    assert_abs_diff_eq!(e.endpoint[0], expected, epsilon = 1e-12);
    assert_abs_diff_eq!(e.endpoint[1], 0.0, epsilon = 1e-12);
}

#[test]
fn three_sawtooth_terms_at_quarter_turn() {
    let amps = Amplitudes::default();
    let e = compute(3, WaveKind::Sawtooth, FRAC_PI_2, &amps).unwrap();

    let radii: Vec<f64> = e.terms.iter().map(|t| t.radius).collect();
    assert_abs_diff_eq!(radii[0], -2.0 * amps.sawtooth / PI, epsilon = 1e-12);
    assert_abs_diff_eq!(radii[1], amps.sawtooth / PI, epsilon = 1e-12);
    assert_abs_diff_eq!(radii[2], -2.0 * amps.sawtooth / (3.0 * PI), epsilon = 1e-12);

    // cos/sin of (pi/2, pi, 3pi/2) are (0, 1), (-1, 0), (0, -1).
    let a = amps.sawtooth;
    assert_abs_diff_eq!(e.endpoint[0], -a / PI, epsilon = 1e-9);
    assert_abs_diff_eq!(e.endpoint[1], -4.0 * a / (3.0 * PI), epsilon = 1e-9);
}

#[test]
fn custom_amplitudes_scale_linearly() {
    let base = compute(4, WaveKind::Triangle, 0.9, &Amplitudes::default()).unwrap();
    let doubled = Amplitudes {
        triangle: Amplitudes::default().triangle * 2.0,
        ..Amplitudes::default()
    };
    let scaled = compute(4, WaveKind::Triangle, 0.9, &doubled).unwrap();
    assert_abs_diff_eq!(scaled.endpoint[0], base.endpoint[0] * 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scaled.endpoint[1], base.endpoint[1] * 2.0, epsilon = 1e-9);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let amps = Amplitudes::default();
    for kind in WaveKind::ALL {
        let a = compute(250, kind, 17.25, &amps).unwrap();
        let b = compute(250, kind, 17.25, &amps).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.endpoint[0].to_bits(), b.endpoint[0].to_bits());
        assert_eq!(a.endpoint[1].to_bits(), b.endpoint[1].to_bits());
    }
}

#[test]
fn out_of_range_term_counts_are_invalid_arguments() {
    let amps = Amplitudes::default();
    assert!(matches!(
        compute(0, WaveKind::Square, 0.0, &amps),
        Err(EngineError::InvalidTermCount { got: 0, .. })
    ));
    assert!(matches!(
        compute(1001, WaveKind::Sawtooth, 0.0, &amps),
        Err(EngineError::InvalidTermCount { got: 1001, .. })
    ));
}

#[test]
fn unknown_wave_names_are_rejected() {
    assert_eq!(
        "zigzag".parse::<WaveKind>(),
        Err(EngineError::UnknownWaveKind("zigzag".to_string()))
    );
}
