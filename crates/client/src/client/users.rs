//! User API methods for [`PanelClient`].
//!
//! # What this module handles:
//! - Listing users
//! - Looking up the servers a user owns
//!
//! # What this module does NOT handle:
//! - Deciding which users to remove (see the cleanup crate's classifiers)

use secrecy::ExposeSecret;

use crate::client::PanelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Server, User};

impl PanelClient {
    /// Fetch every user on the panel, walking all pages.
    pub async fn fetch_all_users(&self) -> Result<Vec<User>> {
        endpoints::list_all_users(
            &self.http,
            &self.base_url,
            self.api_token.expose_secret(),
            self.page_size,
            self.max_pages,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Fetch the servers owned by one user; empty when the lookup fails.
    pub async fn fetch_user_servers(&self, user_id: u64) -> Vec<Server> {
        endpoints::list_user_servers(
            &self.http,
            &self.base_url,
            self.api_token.expose_secret(),
            user_id,
            self.metrics.as_ref(),
        )
        .await
    }
}
