use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::Client;
use tracing::debug;

/// Connection settings for the Systems Manager API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsmSettings {
    /// Region override; falls back to the SDK default provider chain
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
}

/// Builds the shared SSM client
///
/// Called once from `main`; the client is cheap to clone and every adapter
/// receives its own handle.
pub async fn build_ssm_client(settings: &SsmSettings) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;
    debug!(
        region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
        "Loaded AWS configuration"
    );

    Client::new(&sdk_config)
}
