//! Server API methods for [`PanelClient`].

use secrecy::ExposeSecret;

use crate::client::PanelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Server;

impl PanelClient {
    /// Fetch every server on the panel, walking all pages.
    pub async fn fetch_all_servers(&self) -> Result<Vec<Server>> {
        endpoints::list_all_servers(
            &self.http,
            &self.base_url,
            self.api_token.expose_secret(),
            self.page_size,
            self.max_pages,
            self.metrics.as_ref(),
        )
        .await
    }
}
