use nalgebra::DVector;

use super::*;
use crate::geom::Cfg;

fn v(xs: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(xs)
}

#[test]
fn point_set_oracle_minimizes_with_lex_tie_break() {
    let oracle = PointSetOracle::new(
        vec![v(&[0.0, 3.0]), v(&[1.0, 1.0]), v(&[3.0, 0.0])],
        1e-9,
    );
    let e = oracle.evaluate(&v(&[1.0, 0.0])).unwrap();
    assert_eq!(e.point, v(&[0.0, 3.0]));
    assert!((e.value - 0.0).abs() < 1e-12);

    // (0,2) and (1,1) score the same under (0.5,0.5); lex order decides
    let oracle = PointSetOracle::new(vec![v(&[1.0, 1.0]), v(&[0.0, 2.0])], 1e-9);
    let e = oracle.evaluate(&v(&[0.5, 0.5])).unwrap();
    assert_eq!(e.point, v(&[0.0, 2.0]));
}

#[test]
fn empty_point_set_is_infeasible() {
    let oracle = PointSetOracle::new(Vec::new(), 1e-9);
    let err = oracle.evaluate(&v(&[1.0, 0.0])).unwrap_err();
    assert!(matches!(err, OracleFailure::Infeasible { .. }));
}

#[test]
fn reciprocal_oracle_inverts_weights() {
    let oracle = ReciprocalOracle::default();
    let e = oracle.evaluate(&v(&[0.5, 0.5])).unwrap();
    assert_eq!(e.point, v(&[2.0, 2.0]));
    assert!((e.value - 2.0).abs() < 1e-12);

    // corner weight floored, value stays finite
    let e = oracle.evaluate(&v(&[1.0, 0.0])).unwrap();
    assert!((e.point[0] - 1.0).abs() < 1e-12);
    assert!(e.point[1].is_finite());
    assert!((e.value - 1.0).abs() < 1e-9);

    let err = oracle.evaluate(&v(&[0.3, 0.3, 0.4])).unwrap_err();
    assert!(matches!(err, OracleFailure::Infeasible { .. }));
}

#[test]
fn weight_space_direction_embeds_the_last_weight() {
    let cfg = Cfg::new(2);
    let variant = Variant::WeightSpace { ideal: v(&[0.0, 0.0]) };
    let d = variant.direction(&cfg, &v(&[0.25, 1.5]));
    assert_eq!(d, v(&[0.25, 0.75]));
    // slightly negative reduced weight is clamped
    let d = variant.direction(&cfg, &v(&[-1e-12, 1.5]));
    assert_eq!(d, v(&[0.0, 1.0]));
}

#[test]
fn weight_space_cut_matches_the_supporting_inequality() {
    let cfg = Cfg::new(2);
    let variant = Variant::WeightSpace { ideal: v(&[0.0, 0.0]) };
    let dir = v(&[1.0, 0.0]);
    let eval = Evaluation {
        point: v(&[3.0, 0.0]),
        value: 3.0,
    };
    let cut = variant.cut(&cfg, &dir, &eval);
    assert_eq!(cut.normal, v(&[3.0, -1.0]));
    assert!((cut.offset - 0.0).abs() < 1e-12);
    // the cut holds with equality on the envelope at the answering point:
    // w = 1 gives z = 3
    assert!(cut.eval(&v(&[1.0, 3.0])).abs() < 1e-12);
}

#[test]
fn weight_space_gap_is_overestimate_minus_value() {
    let variant = Variant::WeightSpace { ideal: v(&[0.0, 0.0]) };
    assert!((variant.gap(2.0, 1.5) - 0.5).abs() < 1e-12);
    assert!(variant.gap(1.0, 1.0).abs() < 1e-12);
}

#[test]
fn upper_image_direction_points_at_the_anti_ideal_corner() {
    let cfg = Cfg::new(2);
    let variant = Variant::UpperImage {
        ideal: v(&[0.0, 0.0]),
        total_bound: 8.0,
    };
    let d = variant.direction(&cfg, &v(&[0.0, 2.0]));
    assert!((d[0] - 4.0 / 7.0).abs() < 1e-12);
    assert!((d[1] - 3.0 / 7.0).abs() < 1e-12);
    // at the corner itself the uniform fallback applies
    let d = variant.direction(&cfg, &v(&[8.0, 8.0]));
    assert_eq!(d, v(&[0.5, 0.5]));
    // gap orientation flips relative to weight space
    assert!((variant.gap(1.5, 2.0) - 0.5).abs() < 1e-12);
}

#[test]
fn initial_bounds_include_the_seeding_cut() {
    let cfg = Cfg::new(2);
    let variant = Variant::WeightSpace { ideal: v(&[0.0, 0.0]) };
    let d0 = variant.initial_direction(&cfg);
    assert_eq!(d0, v(&[1.0, 0.0]));
    let eval0 = Evaluation {
        point: v(&[0.0, 3.0]),
        value: 0.0,
    };
    let bounds = variant.initial_bounds(&cfg, &d0, &eval0);
    // w0 >= 0, sum <= 1, floor, seed cut
    assert_eq!(bounds.len(), 4);
    let floor = &bounds[2];
    assert_eq!(floor.normal, v(&[0.0, 1.0]));
    assert!((floor.offset - (-1.0)).abs() < 1e-12);
    // the seed cut caps z at w·p over the simplex
    let cut = &bounds[3];
    assert!(cut.eval(&v(&[0.0, 3.0])).abs() < 1e-12);
    assert!(cut.eval(&v(&[0.0, 4.0])) < 0.0);

    let variant = Variant::UpperImage {
        ideal: v(&[0.0, 0.0]),
        total_bound: 8.0,
    };
    let d0 = variant.initial_direction(&cfg);
    assert_eq!(d0, v(&[0.5, 0.5]));
    let eval0 = Evaluation {
        point: v(&[1.0, 1.0]),
        value: 1.0,
    };
    let bounds = variant.initial_bounds(&cfg, &d0, &eval0);
    assert_eq!(bounds.len(), 4);
}
