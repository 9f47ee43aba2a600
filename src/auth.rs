//! Application credentials, redacted secrets, and OAuth token payloads.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
