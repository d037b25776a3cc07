//! Inbound cleanup request and its validation.
//!
//! Responsibilities:
//! - Deserialize the camelCase request body, accepting legacy field and action names.
//! - Validate every field, collecting all violations rather than stopping at the first.
//! - Produce [`Credentials`] and [`RunOptions`] for a valid request.
//!
//! Does NOT handle:
//! - Rate limiting or any network access.

use std::fmt;
use std::str::FromStr;

use ptero_config::constants::{API_TOKEN_PREFIX, DEFAULT_INACTIVITY_THRESHOLD_DAYS, MIN_API_TOKEN_LEN};
use ptero_config::{Credentials, validate_and_normalize_base_url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// A cleanup action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Delete every server classified as offline.
    #[serde(alias = "deleteOfflineServers")]
    RemoveOfflineServers,
    /// Delete every server.
    #[serde(alias = "deleteAllServers")]
    RemoveAllServers,
    /// Delete non-admin users that own no servers.
    #[serde(alias = "deleteEmptyUsers")]
    RemoveEmptyUsers,
    /// Delete non-admin users not seen within the inactivity threshold.
    #[serde(alias = "deleteInactiveUsers")]
    RemoveInactiveUsers,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 4] = [
        Action::RemoveOfflineServers,
        Action::RemoveAllServers,
        Action::RemoveEmptyUsers,
        Action::RemoveInactiveUsers,
    ];

    /// Canonical wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::RemoveOfflineServers => "removeOfflineServers",
            Action::RemoveAllServers => "removeAllServers",
            Action::RemoveEmptyUsers => "removeEmptyUsers",
            Action::RemoveInactiveUsers => "removeInactiveUsers",
        }
    }

    const fn legacy_name(&self) -> &'static str {
        match self {
            Action::RemoveOfflineServers => "deleteOfflineServers",
            Action::RemoveAllServers => "deleteAllServers",
            Action::RemoveEmptyUsers => "deleteEmptyUsers",
            Action::RemoveInactiveUsers => "deleteInactiveUsers",
        }
    }

    /// Resolve a canonical or legacy action name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == name || a.legacy_name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid action: {s}"))
    }
}

/// Tuning options nested under `options`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupOptions {
    /// Days without activity after which a user is inactive; kept raw until validated.
    #[serde(default, alias = "inactiveDays")]
    pub inactivity_threshold_days: Option<Value>,
}

/// A cleanup request as received.
///
/// Fields are loosely typed so that validation can report every problem at once.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupRequest {
    #[serde(default, alias = "panelUrl")]
    pub panel_base_url: Option<String>,
    #[serde(default, alias = "apiKey", deserialize_with = "secret_string::deserialize")]
    pub api_token: Option<SecretString>,
    #[serde(default)]
    pub actions: Option<Value>,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub options: CleanupOptions,
}

/// Validated options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Actions in execution order; duplicates run independently.
    pub actions: Vec<Action>,
    pub dry_run: bool,
    pub inactivity_threshold_days: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            actions: vec![Action::RemoveOfflineServers],
            dry_run: false,
            inactivity_threshold_days: DEFAULT_INACTIVITY_THRESHOLD_DAYS,
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub credentials: Credentials,
    pub options: RunOptions,
}

/// Whether `token` looks like a panel application API key.
pub fn is_valid_api_token(token: &str) -> bool {
    token.starts_with(API_TOKEN_PREFIX) && token.len() > MIN_API_TOKEN_LEN
}

impl CleanupRequest {
    /// Validate the request credentials only, as the connection test does.
    pub fn validate_credentials(&self) -> Result<Credentials, Vec<String>> {
        let mut errors = Vec::new();
        let base_url = self.check_base_url(&mut errors);
        let token = self.check_api_token(&mut errors);
        match (base_url, token) {
            (Some(base_url), Some(token)) if errors.is_empty() => {
                Ok(Credentials::new(base_url, token))
            }
            _ => Err(errors),
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in field order.
    pub fn validate(&self) -> Result<ValidatedRequest, Vec<String>> {
        let mut errors = Vec::new();
        let base_url = self.check_base_url(&mut errors);
        let token = self.check_api_token(&mut errors);
        let actions = self.check_actions(&mut errors);
        let days = self.check_inactivity_days(&mut errors);

        match (base_url, token, actions, days) {
            (Some(base_url), Some(token), Some(actions), Some(days)) if errors.is_empty() => {
                Ok(ValidatedRequest {
                    credentials: Credentials::new(base_url, token),
                    options: RunOptions {
                        actions,
                        dry_run: self.dry_run,
                        inactivity_threshold_days: days,
                    },
                })
            }
            _ => Err(errors),
        }
    }

    fn check_base_url(&self, errors: &mut Vec<String>) -> Option<String> {
        match self.panel_base_url.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push("panelBaseUrl is required".to_string());
                None
            }
            Some(raw) => match validate_and_normalize_base_url(raw) {
                Ok(url) => Some(url),
                Err(_) => {
                    errors.push("panelBaseUrl must be a valid http(s) URL".to_string());
                    None
                }
            },
        }
    }

    fn check_api_token(&self, errors: &mut Vec<String>) -> Option<SecretString> {
        match &self.api_token {
            Some(token) if !token.expose_secret().trim().is_empty() => {
                if is_valid_api_token(token.expose_secret()) {
                    Some(token.clone())
                } else {
                    errors.push("apiToken must be a valid Pterodactyl application API key".to_string());
                    None
                }
            }
            _ => {
                errors.push("apiToken is required".to_string());
                None
            }
        }
    }

    fn check_actions(&self, errors: &mut Vec<String>) -> Option<Vec<Action>> {
        let items = match &self.actions {
            None | Some(Value::Null) => return Some(RunOptions::default().actions),
            Some(Value::Array(items)) => items,
            Some(_) => {
                errors.push("actions must be an array".to_string());
                return None;
            }
        };

        let mut actions = Vec::with_capacity(items.len());
        let mut valid = true;
        for item in items {
            match item.as_str().and_then(Action::parse) {
                Some(action) => actions.push(action),
                None => {
                    let shown = item.as_str().map_or_else(|| item.to_string(), str::to_string);
                    errors.push(format!("Invalid action: {shown}"));
                    valid = false;
                }
            }
        }
        valid.then_some(actions)
    }

    fn check_inactivity_days(&self, errors: &mut Vec<String>) -> Option<u32> {
        match &self.options.inactivity_threshold_days {
            None | Some(Value::Null) => Some(DEFAULT_INACTIVITY_THRESHOLD_DAYS),
            Some(value) => {
                let days = value
                    .as_u64()
                    .filter(|d| *d > 0)
                    .and_then(|d| u32::try_from(d).ok());
                if days.is_none() {
                    errors.push(
                        "options.inactivityThresholdDays must be a positive integer".to_string(),
                    );
                }
                days
            }
        }
    }
}
