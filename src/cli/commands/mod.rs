pub mod backup;
pub mod brk;
pub mod config;
pub mod db;
pub mod enroll;
pub mod export;
pub mod identify;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;
pub mod timesheet;

use crate::config::Config;
use crate::core::matcher;
use crate::db::identities::{find_identity, load_gallery};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::feature::FeatureVector;
use crate::models::identity::EnrolledIdentity;

/// Read a feature-vector file (JSON array of 128 floats).
pub(crate) fn read_feature_file(path: &str) -> AppResult<FeatureVector> {
    let raw = std::fs::read_to_string(path)?;
    FeatureVector::from_json(&raw)
}

/// Resolve the acting subject from `--subject` or `--probe`.
///
/// The probe path runs the matcher against the whole gallery; the audit
/// log records the outcome only, never the probe's components.
pub(crate) fn resolve_subject(
    pool: &DbPool,
    cfg: &Config,
    subject: &Option<String>,
    probe: &Option<String>,
) -> AppResult<EnrolledIdentity> {
    match (subject, probe) {
        (Some(id), _) => find_identity(&pool.conn, id),
        (None, Some(probe_path)) => {
            let probe = read_feature_file(probe_path)?;
            let gallery = load_gallery(&pool.conn)?;

            match matcher::resolve(&probe, &gallery, cfg.match_threshold) {
                Ok(ident) => {
                    let _ = ttlog(&pool.conn, "auth_ok", &ident.name, "Face match accepted");
                    Ok(ident.clone())
                }
                Err(e) => {
                    let _ = ttlog(&pool.conn, "auth_rejected", "", "Face match rejected");
                    Err(e)
                }
            }
        }
        (None, None) => Err(AppError::Other(
            "Provide either --subject or --probe".to_string(),
        )),
    }
}
