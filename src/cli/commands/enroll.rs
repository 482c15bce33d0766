use crate::cli::commands::read_feature_file;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::identities::{identity_exists_by_name, insert_identity};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::identity::{EnrolledIdentity, Role};
use crate::ui::messages::success;

/// Enroll a new subject into the gallery.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Enroll {
        name,
        role,
        template,
    } = cmd
    {
        //
        // 1. Parse role
        //
        let role = Role::parse(role)?;

        //
        // 2. Load the face template, when given.
        //    Workers without one are rejected by the identity constructor.
        //
        let template = match template {
            Some(path) => Some(read_feature_file(path)?),
            None => None,
        };

        //
        // 3. Open DB
        //
        let pool = DbPool::new(&cfg.database)?;

        //
        // 4. Reject duplicate names (subject ids are generated, the name
        //    is what a foreman would type twice by mistake)
        //
        if identity_exists_by_name(&pool.conn, name)? {
            return Err(AppError::DuplicateSubject(name.clone()));
        }

        //
        // 5. Create and persist the identity
        //
        let ident = EnrolledIdentity::new(name.clone(), role, template)?;
        insert_identity(&pool.conn, &ident)?;

        let _ = ttlog(
            &pool.conn,
            "enroll",
            name,
            &format!("Enrolled {} as {}", name, role.to_db_str()),
        );

        success(format!("Subject enrolled: {}", name));
        println!("Subject ID: {}", ident.subject_id);
    }

    Ok(())
}
