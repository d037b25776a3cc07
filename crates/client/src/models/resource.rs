//! Resource kinds exposed by the application API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two collections the cleanup engine touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Server,
    User,
}

impl ResourceKind {
    /// Path segment under `/api/application/`.
    pub const fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Server => "servers",
            ResourceKind::User => "users",
        }
    }

    /// Collection path relative to the panel base URL.
    pub fn collection_path(&self) -> String {
        format!("/api/application/{}", self.path_segment())
    }

    /// Item path relative to the panel base URL.
    pub fn item_path(&self, id: u64) -> String {
        format!("/api/application/{}/{}", self.path_segment(), id)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(ResourceKind::Server.collection_path(), "/api/application/servers");
        assert_eq!(ResourceKind::User.item_path(42), "/api/application/users/42");
        assert_eq!(ResourceKind::User.to_string(), "users");
    }
}
