//! Gallery queries: the enrolled-identity set the matcher scans.

use crate::errors::{AppError, AppResult};
use crate::models::feature::FeatureVector;
use crate::models::identity::{EnrolledIdentity, Role};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn insert_identity(conn: &Connection, ident: &EnrolledIdentity) -> AppResult<()> {
    conn.execute(
        "INSERT INTO identities (subject_id, name, role, template, enrolled_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ident.subject_id,
            ident.name,
            ident.role.to_db_str(),
            ident.template.as_ref().map(|t| t.to_json()),
            ident.enrolled_at,
        ],
    )?;
    Ok(())
}

/// The whole gallery, in enrollment order. Matcher ties resolve to the
/// first-encountered entry, so the order must be stable.
pub fn load_gallery(conn: &Connection) -> AppResult<Vec<EnrolledIdentity>> {
    let mut stmt = conn.prepare(
        "SELECT subject_id, name, role, template, enrolled_at
         FROM identities
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([], map_identity_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_identity(conn: &Connection, subject_id: &str) -> AppResult<EnrolledIdentity> {
    let mut stmt = conn.prepare(
        "SELECT subject_id, name, role, template, enrolled_at
         FROM identities
         WHERE subject_id = ?1",
    )?;

    stmt.query_row([subject_id], map_identity_row)
        .optional()?
        .ok_or_else(|| AppError::SubjectNotFound(subject_id.to_string()))
}

pub fn identity_exists_by_name(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM identities WHERE name = ?1 LIMIT 1")?;
    Ok(stmt.exists([name])?)
}

fn map_identity_row(row: &Row) -> rusqlite::Result<EnrolledIdentity> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    let template_raw: Option<String> = row.get("template")?;
    let template = match template_raw {
        Some(raw) => Some(FeatureVector::from_json(&raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?),
        None => None,
    };

    Ok(EnrolledIdentity {
        subject_id: row.get("subject_id")?,
        name: row.get("name")?,
        role,
        template,
        enrolled_at: row.get("enrolled_at")?,
    })
}
