use super::point::{dominates, eq_eps, lex_cmp};
use super::*;
use nalgebra::DVector;
use std::cmp::Ordering;

fn v(xs: &[f64]) -> DVector<f64> {
    DVector::from_row_slice(xs)
}

#[test]
fn hyperplane_eval_and_classification() {
    // x + y >= 1
    let h = Hyperplane::new(v(&[1.0, 1.0]), 1.0);
    assert_eq!(h.dimension(), 2);
    assert!((h.eval(&v(&[1.0, 1.0])) - 1.0).abs() < 1e-12);
    assert_eq!(h.classify(&v(&[1.0, 1.0]), 1e-8), Sign::Positive);
    assert_eq!(h.classify(&v(&[0.0, 0.0]), 1e-8), Sign::Negative);
    assert_eq!(h.classify(&v(&[0.5, 0.5]), 1e-8), Sign::Boundary);
    assert!(h.satisfies_eps(&v(&[0.5, 0.5]), 1e-8));
    assert!(!h.satisfies_eps(&v(&[0.0, 0.0]), 1e-8));
}

#[test]
fn lex_order_with_eps_ties() {
    let eps = 1e-6;
    assert_eq!(lex_cmp(&v(&[0.0, 1.0]), &v(&[0.0, 2.0]), eps), Ordering::Less);
    assert_eq!(lex_cmp(&v(&[1.0, 0.0]), &v(&[0.0, 9.0]), eps), Ordering::Greater);
    // first coordinates within eps: the second decides
    assert_eq!(
        lex_cmp(&v(&[1.0 + 1e-9, 0.0]), &v(&[1.0, 1.0]), eps),
        Ordering::Less
    );
    assert_eq!(
        lex_cmp(&v(&[1.0 + 1e-9, 2.0]), &v(&[1.0, 2.0 - 1e-9]), eps),
        Ordering::Equal
    );
}

#[test]
fn eq_eps_componentwise() {
    assert!(eq_eps(&v(&[1.0, 2.0]), &v(&[1.0 + 1e-10, 2.0 - 1e-10]), 1e-8));
    assert!(!eq_eps(&v(&[1.0, 2.0]), &v(&[1.0, 2.1]), 1e-8));
    assert!(!eq_eps(&v(&[1.0]), &v(&[1.0, 2.0]), 1e-8));
}

#[test]
fn dominance_is_weak_pareto() {
    let eps = 1e-8;
    // strictly better in one coordinate, equal in the other
    assert!(dominates(&v(&[1.0, 2.0]), &v(&[1.0, 3.0]), eps));
    // equal points do not dominate
    assert!(!dominates(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), eps));
    // incomparable
    assert!(!dominates(&v(&[0.0, 3.0]), &v(&[3.0, 0.0]), eps));
    assert!(!dominates(&v(&[3.0, 0.0]), &v(&[0.0, 3.0]), eps));
    // worse in one coordinate blocks dominance
    assert!(!dominates(&v(&[0.0, 4.0]), &v(&[1.0, 3.0]), eps));
}

#[test]
fn cfg_defaults_and_builders() {
    let cfg = Cfg::new(3);
    assert_eq!(cfg.dimension, 3);
    assert!((cfg.epsilon - 1e-8).abs() < 1e-20);
    assert!(cfg.max_iterations.is_none());
    let cfg = cfg.with_epsilon(1e-6).with_max_iterations(100);
    assert!((cfg.epsilon - 1e-6).abs() < 1e-20);
    assert_eq!(cfg.max_iterations, Some(100));
}
