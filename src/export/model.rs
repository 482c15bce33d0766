use serde::Serialize;

/// Flat event row for export: the ledger joined with the subject's name,
/// the shape admins feed into spreadsheets.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub subject_id: String,
    pub name: String,
    pub kind: String,
    pub timestamp: String,
    pub source: String,
}
