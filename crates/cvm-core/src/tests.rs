use crate::{
    neg_tot, neg_x_entropy, neg_xz, neg_y_entropy, neg_yw, neg_z_entropy, Accumulation,
    Coefficients, CvmError, Field, SampleSet, Sweep, SweepConfig,
};
use rand::Rng;

const LN_HALF: f64 = -std::f64::consts::LN_2;

fn canonical() -> Sweep {
    Sweep::evaluate(&SweepConfig::default()).expect("canonical sweep")
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}

#[test]
fn entropies_are_non_positive_inside_unit_interval() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let x = rng.gen_range(1e-6..1.0 - 1e-6);
        assert!(neg_x_entropy(x) <= 0.0, "negX positive at {x}");
        assert!(neg_y_entropy(x) <= 0.0, "negY positive at {x}");
        assert!(neg_z_entropy(x) <= 0.0, "negZ positive at {x}");
    }
}

#[test]
fn entropies_are_symmetric_about_one_half() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let x = rng.gen_range(1e-3..1.0 - 1e-3);
        let q = 1.0 - x;
        assert_close(neg_x_entropy(x), neg_x_entropy(q), 1e-12);
        assert_close(neg_y_entropy(x), neg_y_entropy(q), 1e-12);
        assert_close(neg_z_entropy(x), neg_z_entropy(q), 1e-12);
    }
}

#[test]
fn midpoint_values_match_closed_form() {
    assert_close(neg_x_entropy(0.5), LN_HALF, 1e-15);
    // four pair configurations at 1/4 each
    assert_close(neg_y_entropy(0.5), 2.0 * LN_HALF, 1e-15);
    // eight triplet configurations at 1/8 each, counting multiplicities
    assert_close(neg_z_entropy(0.5), 3.0 * LN_HALF, 1e-14);
}

#[test]
fn triplet_entropy_keeps_unfolded_z3_term() {
    let x: f64 = 0.3;
    let q = 1.0 - x;
    let p_lnp = |p: f64| p * p.ln();
    let expected = p_lnp(x * x * x)
        + 3.0 * p_lnp(x * x * q)
        + p_lnp(q * x * q)
        + 2.0 * p_lnp(q * q * x)
        + p_lnp(q * q * q);
    assert_close(neg_z_entropy(x), expected, 1e-12);
}

#[test]
fn aggregation_identities_hold() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let x = rng.gen_range(1e-3..1.0 - 1e-3);
        let (sx, sy, sz) = (neg_x_entropy(x), neg_y_entropy(x), neg_z_entropy(x));
        assert_close(neg_yw(sy), 3.0 * sy, 1e-14);
        assert_close(neg_xz(sx, sz), 2.0 * sz + sx, 0.0);
        assert_close(neg_tot(neg_yw(sy), neg_xz(sx, sz)), -(3.0 * sy - (2.0 * sz + sx)), 1e-14);
    }
}

#[test]
fn canonical_sweep_matches_published_midpoint() {
    let sweep = canonical();
    assert_eq!(sweep.len(), 99);
    for field in Field::ALL {
        assert_eq!(sweep.field(field).len(), 99, "{} misaligned", field.name());
    }

    let mid = sweep.row(49).expect("index 49");
    assert_close(mid.x, 0.50, 1e-12);
    assert_close(mid.neg_x, -0.6931, 1e-4);
    assert_close(mid.activation, 0.50, 1e-12);
    assert_close(mid.interaction, -0.25, 1e-12);
    assert_close(mid.free_energy, -0.4431, 1e-4);
    assert_close(mid.free_energy, mid.activation + mid.interaction + mid.neg_x, 0.0);
    assert_close(mid.neg_yw, 3.0 * mid.neg_y, 1e-14);
    assert_close(mid.neg_xz, 2.0 * mid.neg_z + mid.neg_x, 0.0);
}

#[test]
fn sweep_endpoints_are_smaller_in_magnitude_than_midpoint() {
    let sweep = canonical();
    let last = sweep.len() - 1;
    for field in [Field::NegX, Field::NegY, Field::NegZ] {
        let values = sweep.field(field);
        assert!(values[0].abs() < values[49].abs(), "{} first", field.name());
        assert!(values[last].abs() < values[49].abs(), "{} last", field.name());
    }
}

#[test]
fn samples_start_one_increment_above_zero_and_increase() {
    let samples = SampleSet::generate(&SweepConfig::default()).unwrap();
    assert_eq!(samples.values()[0], 0.01);
    assert!(samples.values().windows(2).all(|w| w[0] < w[1]));
    assert!(samples.iter().all(|x| x > 0.0 && x < 1.0));
}

#[test]
fn strided_sampling_visits_every_step_th_index() {
    let config = SweepConfig::default().with_step(2);
    let samples = SampleSet::generate(&config).unwrap();
    assert_eq!(samples.len(), 50);
    assert_eq!(samples.step(), 2);
    assert_eq!(samples.count(), 99);
    assert_close(samples.values()[1], 0.02, 1e-15);
    assert_close(samples.values()[49], 0.50, 1e-12);
}

#[test]
fn additive_and_scaled_accumulation_agree_closely() {
    let additive = canonical();
    let scaled = Sweep::evaluate(&SweepConfig::default().with_accumulation(Accumulation::Scaled))
        .unwrap();
    let deviation = additive.max_deviation(&scaled).unwrap();
    assert!(deviation < 1e-12, "deviation {deviation}");
    assert_eq!(additive.max_deviation(&additive).unwrap(), 0.0);
}

#[test]
fn rejects_non_positive_configuration() {
    let bad = [
        SweepConfig::default().with_count(0),
        SweepConfig::default().with_step(0),
        SweepConfig::default().with_increment(0.0),
        SweepConfig::default().with_increment(-0.01),
        SweepConfig::default().with_increment(f64::NAN),
        SweepConfig::default().with_coefficients(Coefficients::new(f64::INFINITY, 1.0)),
        SweepConfig::default().with_coefficients(Coefficients::new(1.0, f64::NAN)),
    ];
    for config in bad {
        assert!(
            matches!(Sweep::evaluate(&config), Err(CvmError::InvalidConfig(_))),
            "{config:?} accepted"
        );
        assert!(SampleSet::generate(&config).is_err());
    }
}

#[test]
fn accepts_negative_and_zero_coefficients() {
    let config = SweepConfig::default().with_coefficients(Coefficients::new(-2.5, 0.0));
    let sweep = Sweep::evaluate(&config).unwrap();
    let mid = sweep.row(49).unwrap();
    assert_close(mid.activation, -1.25, 1e-12);
    assert_eq!(mid.interaction, 0.0);
}

#[test]
fn sampling_past_one_is_a_domain_violation() {
    let scaled = SweepConfig::default()
        .with_count(100)
        .with_accumulation(Accumulation::Scaled);
    assert_eq!(
        Sweep::evaluate(&scaled),
        Err(CvmError::DomainViolation { index: 99, x: 1.0 })
    );

    let additive = SweepConfig::default().with_count(150);
    match Sweep::evaluate(&additive) {
        Err(CvmError::DomainViolation { index, x }) => {
            assert!(index >= 99);
            assert!(x >= 1.0);
        }
        other => panic!("expected domain violation, got {other:?}"),
    }
}

#[test]
fn underflowing_triplet_probability_fails_the_run() {
    let config = SweepConfig::default().with_count(1).with_increment(1e-120);
    assert!(matches!(
        Sweep::evaluate(&config),
        Err(CvmError::NonFinite {
            field: "neg_z",
            index: 0,
            ..
        })
    ));
}

#[test]
fn overflowing_enthalpy_fails_the_run() {
    let config = SweepConfig::default()
        .with_coefficients(Coefficients::new(f64::MAX, -f64::MAX));
    assert!(matches!(
        Sweep::evaluate(&config),
        Err(CvmError::NonFinite {
            field: "free_energy",
            ..
        })
    ));
}

#[test]
fn equilibrium_coefficients_follow_h() {
    let flat = Coefficients::equilibrium(1.0).unwrap();
    assert_eq!(flat, Coefficients::new(0.0, 0.0));
    let e = Coefficients::equilibrium(std::f64::consts::E).unwrap();
    assert_close(e.eps1, 4.0, 1e-15);
    assert_eq!(e.eps0, 0.0);
    assert!(Coefficients::equilibrium(0.0).is_err());
    assert!(Coefficients::equilibrium(-1.0).is_err());
}

#[test]
fn misaligned_sweeps_cannot_be_compared() {
    let full = canonical();
    let short = Sweep::evaluate(&SweepConfig::default().with_count(10)).unwrap();
    assert_eq!(
        full.max_deviation(&short),
        Err(CvmError::LengthMismatch {
            expected: 99,
            found: 10
        })
    );
    assert!(full.row(99).is_none());
    assert_eq!(full.rows().count(), 99);
}

#[test]
fn total_entropy_reduces_to_single_site_for_product_probabilities() {
    // With every cluster probability a product of site fractions, the pair
    // and triplet terms are 2x and 3x the single-site term.
    let sweep = canonical();
    for row in sweep.rows() {
        assert_close(row.neg_y, 2.0 * row.neg_x, 1e-12);
        assert_close(row.neg_z, 3.0 * row.neg_x, 1e-12);
        assert_close(row.neg_tot, row.neg_x, 1e-12);
    }
}

#[test]
fn serialized_sweep_reloads_unchanged() {
    let sweep = canonical();
    let json = serde_json::to_value(&sweep).unwrap();
    let reloaded: Sweep = serde_json::from_value(json).unwrap();
    assert_eq!(reloaded, sweep);
}

#[test]
fn reloading_rejects_misaligned_arrays() {
    let mut json = serde_json::to_value(canonical()).unwrap();
    json["entropy"]["neg_x"]
        .as_array_mut()
        .unwrap()
        .truncate(3);
    let err = serde_json::from_value::<Sweep>(json).unwrap_err();
    assert!(err.to_string().contains("not index-aligned"), "{err}");
}

#[test]
fn reloading_rejects_samples_outside_unit_interval() {
    let mut json = serde_json::to_value(canonical()).unwrap();
    json["samples"]["values"][0] = serde_json::json!(1.5);
    let err = serde_json::from_value::<Sweep>(json).unwrap_err();
    assert!(err.to_string().contains("outside the open interval"), "{err}");

    let mut json = serde_json::to_value(canonical()).unwrap();
    json["samples"]["values"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<SampleSet>(json["samples"].clone()).is_err());
}

#[test]
fn reloading_rejects_samples_from_another_configuration() {
    let mut json = serde_json::to_value(canonical()).unwrap();
    json["config"]["increment"] = serde_json::json!(0.02);
    let err = serde_json::from_value::<Sweep>(json).unwrap_err();
    assert!(err.to_string().contains("recorded configuration"), "{err}");
}

#[test]
fn row_lookup_matches_field_arrays() {
    let sweep = canonical();
    for row in sweep.rows() {
        for field in Field::ALL {
            assert_eq!(row.get(field), sweep.field(field)[row.index]);
        }
    }
}
