/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the SSM API, the
/// instance catalog stores, console output and the catalog formatters.
pub mod outbound;
