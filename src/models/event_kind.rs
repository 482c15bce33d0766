use serde::Serialize;

/// The four typed events the ledger records. Punch and break events form
/// two independent sequences; pairing never mixes the categories.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PunchIn,
    PunchOut,
    BreakStart,
    BreakEnd,
}

/// Category of an event kind: the pairing and projection algorithms always
/// operate on one category at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Punch,
    Break,
}

impl EventKind {
    pub fn category(&self) -> EventCategory {
        match self {
            EventKind::PunchIn | EventKind::PunchOut => EventCategory::Punch,
            EventKind::BreakStart | EventKind::BreakEnd => EventCategory::Break,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::PunchIn => "punch_in",
            EventKind::PunchOut => "punch_out",
            EventKind::BreakStart => "break_start",
            EventKind::BreakEnd => "break_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "punch_in" => Some(EventKind::PunchIn),
            "punch_out" => Some(EventKind::PunchOut),
            "break_start" => Some(EventKind::BreakStart),
            "break_end" => Some(EventKind::BreakEnd),
            _ => None,
        }
    }
}

impl EventCategory {
    /// The kind that opens an interval in this category.
    pub fn open_kind(&self) -> EventKind {
        match self {
            EventCategory::Punch => EventKind::PunchIn,
            EventCategory::Break => EventKind::BreakStart,
        }
    }

    /// The kind that closes an interval in this category.
    pub fn close_kind(&self) -> EventKind {
        match self {
            EventCategory::Punch => EventKind::PunchOut,
            EventCategory::Break => EventKind::BreakEnd,
        }
    }

    /// DB strings of both kinds, for `kind IN (?, ?)` filters.
    pub fn db_strs(&self) -> (&'static str, &'static str) {
        (self.open_kind().to_db_str(), self.close_kind().to_db_str())
    }
}
