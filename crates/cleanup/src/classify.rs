//! Pure predicates deciding which resources a cleanup action targets.
//!
//! Classifiers never touch the network; the caller passes in a `now`
//! captured once per run so every resource is judged against the same clock.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use ptero_client::{Server, User};
use ptero_config::constants::OFFLINE_ACTIVITY_THRESHOLD_HOURS;
use serde::Serialize;

/// Why a resource was selected for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    /// The server is suspended.
    Suspended,
    /// The server is still installing.
    Installing,
    /// The server's installation failed.
    InstallFailed,
    /// The server reports a status other than running.
    NotRunning,
    /// The server has had no activity for over a day.
    StaleActivity,
    /// The action targets every resource.
    All,
    /// The user owns no servers.
    NoServers,
    /// The user has not been seen within the inactivity threshold.
    Inactive,
}

impl MatchReason {
    /// Returns the string label for this reason.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MatchReason::Suspended => "suspended",
            MatchReason::Installing => "installing",
            MatchReason::InstallFailed => "install_failed",
            MatchReason::NotRunning => "not_running",
            MatchReason::StaleActivity => "stale_activity",
            MatchReason::All => "all",
            MatchReason::NoServers => "no_servers",
            MatchReason::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First rule under which `server` counts as offline, checked in order:
/// suspended, installing, install failed, any other non-running status,
/// then activity older than the offline threshold.
pub fn offline_reason(server: &Server, now: DateTime<Utc>) -> Option<MatchReason> {
    if server.suspended {
        return Some(MatchReason::Suspended);
    }

    match server.status.as_deref() {
        Some("installing") => return Some(MatchReason::Installing),
        Some("install_failed") => return Some(MatchReason::InstallFailed),
        Some(status) if status != "running" => return Some(MatchReason::NotRunning),
        _ => {}
    }

    let threshold = Duration::hours(OFFLINE_ACTIVITY_THRESHOLD_HOURS);
    match server.last_activity {
        Some(last) if now - last > threshold => Some(MatchReason::StaleActivity),
        _ => None,
    }
}

/// Whether `server` should be treated as offline.
pub fn is_offline(server: &Server, now: DateTime<Utc>) -> bool {
    offline_reason(server, now).is_some()
}

/// Whether `user` is a non-admin account owning none of `owned_servers`.
pub fn is_empty(user: &User, owned_servers: &[Server]) -> bool {
    !user.root_admin && owned_servers.is_empty()
}

/// Whether `user` is a non-admin account last seen more than
/// `threshold_days` before `now`.
///
/// The last sighting is `last_activity`, falling back to `updated_at`;
/// a user with neither is never inactive.
pub fn is_inactive(user: &User, threshold_days: u32, now: DateTime<Utc>) -> bool {
    if user.root_admin {
        return false;
    }
    let threshold = Duration::days(i64::from(threshold_days));
    user.last_seen().is_some_and(|seen| now - seen > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn server(status: Option<&str>, suspended: bool, last_activity: Option<DateTime<Utc>>) -> Server {
        serde_json::from_value(json!({
            "id": 1,
            "name": "srv",
            "status": status,
            "suspended": suspended,
            "last_activity": last_activity,
        }))
        .unwrap()
    }

    fn user(root_admin: bool, last_activity: Option<DateTime<Utc>>, updated_at: Option<DateTime<Utc>>) -> User {
        serde_json::from_value(json!({
            "id": 7,
            "username": "alex",
            "email": "alex@example.com",
            "root_admin": root_admin,
            "last_activity": last_activity,
            "updated_at": updated_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_suspended_is_offline() {
        let s = server(Some("running"), true, None);
        assert_eq!(offline_reason(&s, now()), Some(MatchReason::Suspended));
    }

    #[test]
    fn test_install_states_are_offline() {
        assert_eq!(
            offline_reason(&server(Some("installing"), false, None), now()),
            Some(MatchReason::Installing)
        );
        assert_eq!(
            offline_reason(&server(Some("install_failed"), false, None), now()),
            Some(MatchReason::InstallFailed)
        );
    }

    #[test]
    fn test_stopped_is_offline() {
        assert_eq!(
            offline_reason(&server(Some("stopped"), false, None), now()),
            Some(MatchReason::NotRunning)
        );
    }

    #[test]
    fn test_stale_activity_is_offline() {
        let s = server(None, false, Some(now() - Duration::hours(25)));
        assert_eq!(offline_reason(&s, now()), Some(MatchReason::StaleActivity));
    }

    #[test]
    fn test_running_recent_server_is_online() {
        let s = server(Some("running"), false, Some(now() - Duration::hours(1)));
        assert!(!is_offline(&s, now()));
    }

    #[test]
    fn test_null_status_without_activity_is_online() {
        assert!(!is_offline(&server(None, false, None), now()));
    }

    #[test]
    fn test_activity_exactly_at_threshold_is_online() {
        let s = server(None, false, Some(now() - Duration::hours(24)));
        assert!(!is_offline(&s, now()));
    }

    #[test]
    fn test_suspension_checked_before_status() {
        let s = server(Some("installing"), true, None);
        assert_eq!(offline_reason(&s, now()), Some(MatchReason::Suspended));
    }

    #[test]
    fn test_empty_user() {
        let u = user(false, None, None);
        assert!(is_empty(&u, &[]));
        assert!(!is_empty(&u, &[server(None, false, None)]));
    }

    #[test]
    fn test_admin_is_never_empty() {
        assert!(!is_empty(&user(true, None, None), &[]));
    }

    #[test]
    fn test_inactive_user() {
        let u = user(false, Some(now() - Duration::days(31)), None);
        assert!(is_inactive(&u, 30, now()));
        assert!(!is_inactive(&u, 60, now()));
    }

    #[test]
    fn test_inactive_falls_back_to_updated_at() {
        let u = user(false, None, Some(now() - Duration::days(90)));
        assert!(is_inactive(&u, 30, now()));
    }

    #[test]
    fn test_user_without_timestamps_is_never_inactive() {
        assert!(!is_inactive(&user(false, None, None), 1, now()));
    }

    #[test]
    fn test_admin_is_never_inactive() {
        let u = user(true, Some(now() - Duration::days(365)), None);
        assert!(!is_inactive(&u, 30, now()));
    }
}
