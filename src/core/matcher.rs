//! Biometric identity resolution: nearest-neighbor search over the
//! enrolled gallery under a fixed acceptance threshold.

use crate::errors::{AppError, AppResult};
use crate::models::feature::FeatureVector;
use crate::models::identity::EnrolledIdentity;

/// Default acceptance threshold on Euclidean distance between a probe and
/// an enrolled template. Single tunable value, never per-identity.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.6;

/// Resolve a probe against the gallery.
///
/// Linear scan over every identity that carries a template (admins without
/// one are skipped); the gallery is workforce-scale, so no index is needed.
/// Accepts iff the minimum distance is strictly below `threshold`; ties at
/// the minimum resolve to the first-encountered entry.
///
/// Pure function: no caching, no mutation, called fresh on every attempt.
/// The result is a single resolved identity or a rejection; there are no
/// partial matches and no retry with a relaxed threshold.
pub fn resolve<'a>(
    probe: &FeatureVector,
    gallery: &'a [EnrolledIdentity],
    threshold: f32,
) -> AppResult<&'a EnrolledIdentity> {
    let mut best: Option<(&EnrolledIdentity, f32)> = None;

    for ident in gallery {
        let Some(template) = &ident.template else {
            continue;
        };

        let d = probe.distance(template);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((ident, d)),
        }
    }

    match best {
        None => Err(AppError::NoEnrolledIdentities),
        Some((ident, d)) if d < threshold => Ok(ident),
        Some(_) => Err(AppError::NoMatch),
    }
}
