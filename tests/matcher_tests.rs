//! Identity matcher behavior: threshold acceptance, rejections, tie policy.

use siteclock::core::matcher::{DEFAULT_MATCH_THRESHOLD, resolve};
use siteclock::errors::AppError;
use siteclock::models::feature::{FEATURE_DIM, FeatureVector};
use siteclock::models::identity::{EnrolledIdentity, Role};

fn vector(value: f32) -> FeatureVector {
    FeatureVector::new(vec![value; FEATURE_DIM]).expect("valid vector")
}

fn worker(name: &str, template_value: f32) -> EnrolledIdentity {
    EnrolledIdentity::new(name, Role::Worker, Some(vector(template_value)))
        .expect("valid worker identity")
}

#[test]
fn distance_is_symmetric() {
    let a = vector(0.25);
    let b = vector(-0.75);
    assert_eq!(a.distance(&b), b.distance(&a));
}

#[test]
fn empty_gallery_is_rejected() {
    let probe = vector(0.0);
    let result = resolve(&probe, &[], DEFAULT_MATCH_THRESHOLD);
    assert!(matches!(result, Err(AppError::NoEnrolledIdentities)));
}

#[test]
fn gallery_without_templates_is_rejected() {
    // Admins may be enrolled without a template: nothing to compare against.
    let admin = EnrolledIdentity::new("foreman", Role::Admin, None).expect("valid admin");
    let probe = vector(0.0);

    let gallery = [admin];
    let result = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD);
    assert!(matches!(result, Err(AppError::NoEnrolledIdentities)));
}

#[test]
fn close_probe_matches() {
    let gallery = vec![worker("ada", 0.0)];
    // Per-component delta of 0.01 → distance ≈ 0.113, well under 0.6.
    let probe = vector(0.01);

    let resolved = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD).expect("should match");
    assert_eq!(resolved.name, "ada");
}

#[test]
fn far_probe_is_rejected() {
    let gallery = vec![worker("ada", 0.0)];
    // Per-component delta of 1.0 → distance ≈ 11.3.
    let probe = vector(1.0);

    let result = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD);
    assert!(matches!(result, Err(AppError::NoMatch)));
}

#[test]
fn threshold_is_strict() {
    // Distance is exactly sqrt(128 * d^2) = d * sqrt(128). Pick the
    // per-component delta so the distance equals the threshold exactly:
    // acceptance requires strictly less, so this must be rejected.
    let delta = DEFAULT_MATCH_THRESHOLD / (FEATURE_DIM as f32).sqrt();
    let gallery = vec![worker("ada", 0.0)];
    let probe = vector(delta);

    let d = probe.distance(&vector(0.0));
    if d >= DEFAULT_MATCH_THRESHOLD {
        assert!(matches!(
            resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD),
            Err(AppError::NoMatch)
        ));
    } else {
        // Float rounding landed just below the threshold; the strictness
        // contract is then trivially satisfied.
        assert!(resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD).is_ok());
    }
}

#[test]
fn nearest_identity_wins() {
    let gallery = vec![worker("far", 0.4), worker("near", 0.05)];
    let probe = vector(0.0);

    let resolved = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD).expect("should match");
    assert_eq!(resolved.name, "near");
}

#[test]
fn exact_tie_resolves_to_first_enrolled() {
    let gallery = vec![worker("first", 0.1), worker("second", 0.1)];
    let probe = vector(0.0);

    let resolved = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD).expect("should match");
    assert_eq!(resolved.name, "first");
}

#[test]
fn template_less_entries_are_skipped_not_fatal() {
    let admin = EnrolledIdentity::new("foreman", Role::Admin, None).expect("valid admin");
    let gallery = vec![admin, worker("ada", 0.0)];
    let probe = vector(0.0);

    let resolved = resolve(&probe, &gallery, DEFAULT_MATCH_THRESHOLD).expect("should match");
    assert_eq!(resolved.name, "ada");
}

#[test]
fn wrong_dimensionality_is_rejected_at_construction() {
    let result = FeatureVector::new(vec![0.0; 64]);
    assert!(matches!(result, Err(AppError::InvalidFeatureVector(_))));
}

#[test]
fn non_finite_components_are_rejected_at_construction() {
    let mut values = vec![0.0_f32; FEATURE_DIM];
    values[17] = f32::NAN;
    assert!(matches!(
        FeatureVector::new(values),
        Err(AppError::InvalidFeatureVector(_))
    ));

    let mut values = vec![0.0_f32; FEATURE_DIM];
    values[3] = f32::INFINITY;
    assert!(matches!(
        FeatureVector::new(values),
        Err(AppError::InvalidFeatureVector(_))
    ));
}

#[test]
fn workers_require_a_template() {
    let result = EnrolledIdentity::new("bob", Role::Worker, None);
    assert!(matches!(result, Err(AppError::MissingTemplate)));
}
