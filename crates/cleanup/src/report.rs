//! The cleanup report.
//!
//! Responsibilities:
//! - Accumulate per-category totals, per-item outcomes and action-level errors.
//! - Serialize to the camelCase JSON returned by every surface.
//!
//! Invariants:
//! - A report is created empty and only appended to.
//! - `deleted <= processed <= total` for each category.
//! - On a dry run no item carries `mutated: true` and `deleted` stays 0.

use chrono::{DateTime, Utc};
use ptero_client::{CallOutcome, ResourceKind, Server, User};
use serde::Serialize;

use crate::classify::MatchReason;
use crate::request::Action;

/// Counters for one resource category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Resources fetched across all actions touching this category.
    pub total: usize,
    /// Resources that matched an action.
    pub processed: usize,
    /// Resources actually deleted.
    pub deleted: usize,
}

/// Counters for both categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub servers: CategorySummary,
    pub users: CategorySummary,
}

impl Summary {
    fn category_mut(&mut self, kind: ResourceKind) -> &mut CategorySummary {
        match kind {
            ResourceKind::Server => &mut self.servers,
            ResourceKind::User => &mut self.users,
        }
    }
}

/// Identifying fields of the matched resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Subject {
    Server {
        name: String,
        status: Option<String>,
        suspended: bool,
    },
    User {
        email: String,
        username: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        server_count: Option<usize>,
    },
}

/// What happened to one matched resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome {
    pub id: u64,
    #[serde(flatten)]
    pub subject: Subject,
    /// Rule that selected this resource.
    pub reason: MatchReason,
    pub action: &'static str,
    /// Whether a delete call was issued.
    pub mutated: bool,
    /// Result of the delete call; absent on a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemOutcome {
    const DELETE: &'static str = "delete";

    fn new(id: u64, subject: Subject, reason: MatchReason) -> Self {
        Self {
            id,
            subject,
            reason,
            action: Self::DELETE,
            mutated: false,
            success: None,
            dry_run: false,
            error: None,
        }
    }

    /// Outcome for a matched server.
    pub fn server(server: &Server, reason: MatchReason) -> Self {
        Self::new(
            server.id,
            Subject::Server {
                name: server.name.clone(),
                status: server.status.clone(),
                suspended: server.suspended,
            },
            reason,
        )
    }

    /// Outcome for a matched user; `server_count` is known only when it was looked up.
    pub fn user(user: &User, server_count: Option<usize>, reason: MatchReason) -> Self {
        Self::new(
            user.id,
            Subject::User {
                email: user.email.clone(),
                username: user.username.clone(),
                server_count,
            },
            reason,
        )
    }

    /// Mark as simulated: no call was made.
    pub fn simulated(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Record the result of the delete call.
    pub fn deleted(mut self, outcome: &CallOutcome<()>) -> Self {
        self.mutated = true;
        self.success = Some(outcome.is_ok());
        self.error = outcome.failure_message();
        self
    }

    /// Whether the resource is now gone.
    pub fn is_deleted(&self) -> bool {
        self.success == Some(true)
    }
}

/// Items recorded per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Details {
    pub servers: Vec<ItemOutcome>,
    pub users: Vec<ItemOutcome>,
}

/// An action that could not complete its listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionError {
    pub action: Action,
    pub error: String,
}

/// Report of one cleanup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    timestamp: DateTime<Utc>,
    dry_run: bool,
    actions: Vec<Action>,
    summary: Summary,
    details: Details,
    errors: Vec<ActionError>,
}

impl Report {
    /// An empty report for a run starting at `timestamp`.
    pub fn new(timestamp: DateTime<Utc>, dry_run: bool, actions: Vec<Action>) -> Self {
        Self {
            timestamp,
            dry_run,
            actions,
            summary: Summary::default(),
            details: Details::default(),
            errors: Vec::new(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn errors(&self) -> &[ActionError] {
        &self.errors
    }

    /// Add a fetched collection's size to the category total.
    pub fn record_fetched(&mut self, kind: ResourceKind, count: usize) {
        self.summary.category_mut(kind).total += count;
    }

    /// Append a matched item and update the counters.
    pub fn record_item(&mut self, kind: ResourceKind, item: ItemOutcome) {
        let category = self.summary.category_mut(kind);
        category.processed += 1;
        if item.is_deleted() {
            category.deleted += 1;
        }
        match kind {
            ResourceKind::Server => self.details.servers.push(item),
            ResourceKind::User => self.details.users.push(item),
        }
    }

    /// Append an action-level failure.
    pub fn record_error(&mut self, action: Action, error: impl Into<String>) {
        self.errors.push(ActionError {
            action,
            error: error.into(),
        });
    }
}
