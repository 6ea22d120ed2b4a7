/// Domain layer for instance compliance
///
/// Pure models and rules with no knowledge of AWS, files or the terminal.
pub mod domain;
pub mod policies;
pub mod services;
