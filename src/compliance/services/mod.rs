pub mod invocation_validator;

pub use invocation_validator::InvocationValidator;
