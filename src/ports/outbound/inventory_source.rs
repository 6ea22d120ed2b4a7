use crate::compliance::domain::InventoryObservation;
use crate::shared::Result;
use async_trait::async_trait;

/// InventorySource port for enumerating managed instances
///
/// Pagination is an implementation detail; callers always receive the
/// complete list or an error.
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Returns every instance currently known to the agent inventory
    ///
    /// # Errors
    /// Returns [`crate::shared::error::ComplianceError::InventoryFetch`] if
    /// any underlying request fails. No partial results are returned.
    async fn fetch_all(&self) -> Result<Vec<InventoryObservation>>;
}

/// One page of the inventory enumeration
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    pub observations: Vec<InventoryObservation>,
    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl InventoryPage {
    pub fn new(observations: Vec<InventoryObservation>, next_token: Option<String>) -> Self {
        Self {
            observations,
            next_token,
        }
    }
}

/// InventoryPageFetcher port for a single paginated inventory request
#[async_trait]
pub trait InventoryPageFetcher: Send + Sync {
    /// Fetches the page that follows `next_token` (the first page when `None`)
    async fn fetch_page(&self, next_token: Option<&str>) -> Result<InventoryPage>;
}
