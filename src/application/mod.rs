/// Application layer - Use cases and DTOs
///
/// Orchestrates the domain services and reaches infrastructure only
/// through the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
