//! Server attributes as returned by `/api/application/servers`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A game server hosted on the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub name: String,
    /// Lifecycle status; `null` on the wire for a server that is installed and idle.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub suspended: bool,
    /// Owning user id.
    #[serde(default)]
    pub user: Option<u64>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
