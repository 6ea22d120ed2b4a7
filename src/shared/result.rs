/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Typed failures are raised as [`crate::shared::error::ComplianceError`] and
/// converted on the way out; callers that need to classify them use `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
