use crate::compliance::domain::{InstanceId, InventoryObservation};
use crate::ports::outbound::{InventoryPage, InventoryPageFetcher, InventorySource};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::InstanceInformation;
use aws_sdk_ssm::Client;
use tracing::{debug, error, warn};

/// SsmInventoryPageFetcher adapter for `DescribeInstanceInformation`
///
/// Fetches one page of SSM-managed instances per call.
pub struct SsmInventoryPageFetcher {
    client: Client,
}

impl SsmInventoryPageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn to_observation(info: &InstanceInformation) -> Option<InventoryObservation> {
        let raw_id = info.instance_id()?;
        match InstanceId::new(raw_id.to_string()) {
            Ok(instance_id) => Some(InventoryObservation::new(
                instance_id,
                info.platform_type().map(|p| p.as_str().to_string()),
                info.platform_name().map(str::to_string),
            )),
            Err(e) => {
                warn!(instance_id = raw_id, error = %e, "Skipping instance with unusable id");
                None
            }
        }
    }
}

#[async_trait]
impl InventoryPageFetcher for SsmInventoryPageFetcher {
    async fn fetch_page(&self, next_token: Option<&str>) -> Result<InventoryPage> {
        let output = self
            .client
            .describe_instance_information()
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "DescribeInstanceInformation failed: {}",
                    DisplayErrorContext(&e)
                )
            })?;

        let observations = output
            .instance_information_list()
            .iter()
            .filter_map(Self::to_observation)
            .collect();

        Ok(InventoryPage::new(
            observations,
            output.next_token().map(str::to_string),
        ))
    }
}

/// PaginatedInventorySource collapses a paginated fetcher into one list.
///
/// Requests pages until no continuation token is returned. Any failing page
/// aborts the whole enumeration and discards what was collected so far.
pub struct PaginatedInventorySource<F: InventoryPageFetcher> {
    fetcher: F,
}

impl<F: InventoryPageFetcher> PaginatedInventorySource<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: InventoryPageFetcher> InventorySource for PaginatedInventorySource<F> {
    async fn fetch_all(&self) -> Result<Vec<InventoryObservation>> {
        let mut observations = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = match self.fetcher.fetch_page(next_token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    error!(page = pages + 1, error = %format!("{:#}", e), "Error fetching instances");
                    return Err(ComplianceError::InventoryFetch {
                        details: format!("{:#}", e),
                    }
                    .into());
                }
            };

            pages += 1;
            observations.extend(page.observations);

            match page.next_token {
                Some(token) if !token.is_empty() => next_token = Some(token),
                _ => break,
            }
        }

        debug!(pages, instances = observations.len(), "Fetched inventory");
        Ok(observations)
    }
}
