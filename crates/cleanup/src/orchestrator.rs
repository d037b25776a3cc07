//! Per-action sweeps over the panel's collections.
//!
//! Responsibilities:
//! - Run each requested action in order against one [`PanelClient`].
//! - Fetch each collection once per action, classify, and delete or simulate.
//! - Record every matched item and every failed listing in the [`Report`].
//!
//! Does NOT handle:
//! - Validation, rate limiting or the connectivity check (see [`crate::service`]).
//!
//! Invariants:
//! - A failed listing aborts only its own action; later actions still run.
//! - A failed delete aborts nothing; it is recorded on its item.
//! - On a dry run no delete call is issued.

use chrono::{DateTime, Utc};
use ptero_client::{ClientError, PanelClient, ResourceKind, Server};
use tracing::{debug, info, warn};

use crate::classify::{self, MatchReason};
use crate::report::{ItemOutcome, Report};
use crate::request::{Action, RunOptions};

/// Execute `options.actions` in order and return the accumulated report.
///
/// `now` is the reference time for every classifier in the run.
pub async fn run_cleanup(client: &PanelClient, options: &RunOptions, now: DateTime<Utc>) -> Report {
    let mut report = Report::new(now, options.dry_run, options.actions.clone());
    let sweep = Sweep {
        client,
        dry_run: options.dry_run,
        now,
    };

    for action in &options.actions {
        info!(action = %action, dry_run = options.dry_run, "Running cleanup action");
        let result = match action {
            Action::RemoveOfflineServers => {
                sweep
                    .servers(&mut report, |s| classify::offline_reason(s, now))
                    .await
            }
            Action::RemoveAllServers => {
                sweep
                    .servers(&mut report, |_| Some(MatchReason::All))
                    .await
            }
            Action::RemoveEmptyUsers => sweep.empty_users(&mut report).await,
            Action::RemoveInactiveUsers => {
                sweep
                    .inactive_users(&mut report, options.inactivity_threshold_days)
                    .await
            }
        };

        if let Err(e) = result {
            warn!(action = %action, error = %e, "Cleanup action failed");
            report.record_error(*action, e.to_string());
        }
    }

    let summary = report.summary();
    info!(
        servers_processed = summary.servers.processed,
        servers_deleted = summary.servers.deleted,
        users_processed = summary.users.processed,
        users_deleted = summary.users.deleted,
        errors = report.errors().len(),
        "Cleanup finished"
    );
    report
}

struct Sweep<'a> {
    client: &'a PanelClient,
    dry_run: bool,
    now: DateTime<Utc>,
}

impl Sweep<'_> {
    async fn servers(
        &self,
        report: &mut Report,
        matcher: impl Fn(&Server) -> Option<MatchReason>,
    ) -> Result<(), ClientError> {
        let servers = self.client.fetch_all_servers().await?;
        report.record_fetched(ResourceKind::Server, servers.len());

        for server in &servers {
            let Some(reason) = matcher(server) else {
                continue;
            };
            let item = self
                .apply(ResourceKind::Server, server.id, ItemOutcome::server(server, reason))
                .await;
            report.record_item(ResourceKind::Server, item);
        }
        Ok(())
    }

    async fn empty_users(&self, report: &mut Report) -> Result<(), ClientError> {
        let users = self.client.fetch_all_users().await?;
        report.record_fetched(ResourceKind::User, users.len());

        for user in users.iter().filter(|u| !u.root_admin) {
            let owned = self.client.fetch_user_servers(user.id).await;
            if !classify::is_empty(user, &owned) {
                continue;
            }
            let item = ItemOutcome::user(user, Some(owned.len()), MatchReason::NoServers);
            let item = self.apply(ResourceKind::User, user.id, item).await;
            report.record_item(ResourceKind::User, item);
        }
        Ok(())
    }

    async fn inactive_users(&self, report: &mut Report, threshold_days: u32) -> Result<(), ClientError> {
        let users = self.client.fetch_all_users().await?;
        report.record_fetched(ResourceKind::User, users.len());

        for user in &users {
            if !classify::is_inactive(user, threshold_days, self.now) {
                continue;
            }
            let item = ItemOutcome::user(user, None, MatchReason::Inactive);
            let item = self.apply(ResourceKind::User, user.id, item).await;
            report.record_item(ResourceKind::User, item);
        }
        Ok(())
    }

    async fn apply(&self, kind: ResourceKind, id: u64, item: ItemOutcome) -> ItemOutcome {
        if self.dry_run {
            debug!(resource = %kind, id, reason = %item.reason, "Would delete");
            return item.simulated();
        }

        let outcome = self.client.delete_resource(kind, id).await;
        match outcome.failure_message() {
            None => info!(resource = %kind, id, reason = %item.reason, "Deleted"),
            Some(ref message) => warn!(resource = %kind, id, error = %message, "Delete failed"),
        }
        item.deleted(&outcome)
    }
}
