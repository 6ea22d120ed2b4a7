/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the use cases are driven directly by
/// the CLI, while inventory, command invocation, catalog storage and output
/// sit behind the traits declared here.
pub mod outbound;
