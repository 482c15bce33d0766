use crate::cli::commands::read_feature_file;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matcher;
use crate::db::identities::load_gallery;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Resolve a captured probe against the gallery and print the subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Identify { probe } = cmd {
        let probe = read_feature_file(probe)?;

        let pool = DbPool::new(&cfg.database)?;
        let gallery = load_gallery(&pool.conn)?;

        match matcher::resolve(&probe, &gallery, cfg.match_threshold) {
            Ok(ident) => {
                let _ = ttlog(&pool.conn, "auth_ok", &ident.name, "Face match accepted");

                success(format!("Matched subject: {}", ident.name));
                println!("Subject ID: {}", ident.subject_id);
            }
            Err(e) => {
                // Outcome only: the probe itself is never logged.
                let _ = ttlog(&pool.conn, "auth_rejected", "", "Face match rejected");
                return Err(e);
            }
        }
    }

    Ok(())
}
