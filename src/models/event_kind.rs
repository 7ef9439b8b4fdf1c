use serde::Serialize;

/// Attendance event kind, one row per capture.
/// Login and logout are classified independently; they are never paired
/// into sessions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Login,
    Logout,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Login => "login",
            EventKind::Logout => "logout",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "login" => Some(EventKind::Login),
            "logout" => Some(EventKind::Logout),
            _ => None,
        }
    }

    /// Parse a raw status string as it arrives from the CLI or an import.
    /// Case-insensitive; anything unrecognized yields None and is reported
    /// as the "-" remark downstream instead of failing the whole row.
    pub fn from_status(s: &str) -> Option<Self> {
        Self::from_db_str(&s.to_lowercase())
    }

    /// Human label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Login => "Login",
            EventKind::Logout => "Logout",
        }
    }

}
