//! Authorized-client context models: identifiers, scopes, tokens, and registrations.

pub mod client;
pub mod id;
pub mod scope;
pub mod token;

pub use client::*;
pub use id::*;
pub use scope::*;
pub use token::*;
