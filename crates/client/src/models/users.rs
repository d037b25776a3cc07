//! User attributes as returned by `/api/application/users`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A panel account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub root_admin: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

impl User {
    /// Most recent sign of life: `last_activity`, falling back to `updated_at`.
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_activity.or(self.updated_at)
    }
}
