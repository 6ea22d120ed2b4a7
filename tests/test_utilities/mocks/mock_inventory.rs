use async_trait::async_trait;
use instance_compliance::ports::outbound::{InventoryPage, InventoryPageFetcher};
use instance_compliance::prelude::*;
use std::sync::Mutex;

/// Mock InventoryPageFetcher serving scripted pages in request order
///
/// A page added with `with_failure` makes that request fail.
#[derive(Default)]
pub struct MockInventoryPageFetcher {
    pages: Vec<Option<InventoryPage>>,
    requested_tokens: Mutex<Vec<Option<String>>>,
}

impl MockInventoryPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page of `(instance id, platform name)` pairs
    pub fn with_page(mut self, instances: &[(&str, &str)], next_token: Option<&str>) -> Self {
        let observations = instances
            .iter()
            .map(|(id, name)| {
                InventoryObservation::new(
                    InstanceId::new(id.to_string()).unwrap(),
                    Some("Linux".to_string()),
                    Some(name.to_string()),
                )
            })
            .collect();
        self.pages.push(Some(InventoryPage::new(
            observations,
            next_token.map(str::to_string),
        )));
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.pages.push(None);
        self
    }

    pub fn requested_tokens(&self) -> Vec<Option<String>> {
        self.requested_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryPageFetcher for MockInventoryPageFetcher {
    async fn fetch_page(&self, next_token: Option<&str>) -> Result<InventoryPage> {
        let index = {
            let mut tokens = self.requested_tokens.lock().unwrap();
            tokens.push(next_token.map(str::to_string));
            tokens.len() - 1
        };

        match self.pages.get(index) {
            Some(Some(page)) => Ok(page.clone()),
            Some(None) => anyhow::bail!("DescribeInstanceInformation failed: ThrottlingException"),
            None => anyhow::bail!("unexpected page request #{}", index + 1),
        }
    }
}
