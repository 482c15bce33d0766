use super::feature::FeatureVector;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Admin,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Admin => "admin",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "worker" => Some(Role::Worker),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_db_str(&s.to_lowercase()).ok_or_else(|| AppError::InvalidRole(s.to_string()))
    }
}

/// An enrolled subject. Workers carry exactly one face template captured at
/// enrollment; admins may have none (their password path lives outside this
/// core). Immutable after creation.
#[derive(Debug, Clone)]
pub struct EnrolledIdentity {
    pub subject_id: String,
    pub name: String,
    pub role: Role,
    pub template: Option<FeatureVector>,
    pub enrolled_at: String,
}

impl EnrolledIdentity {
    /// Create a new identity with a generated subject id.
    /// Workers without a template are rejected.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        template: Option<FeatureVector>,
    ) -> AppResult<Self> {
        if role == Role::Worker && template.is_none() {
            return Err(AppError::MissingTemplate);
        }

        Ok(Self {
            subject_id: Uuid::new_v4().to_string(),
            name: name.into(),
            role,
            template,
            enrolled_at: Local::now().to_rfc3339(),
        })
    }
}
