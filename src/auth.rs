//! Token-resolution capability: redacted bearer secrets and pluggable resolver strategies.
//!
//! Every authentication method ends in the same place: a [`TokenResolver`] that the
//! execution context invokes once per authenticated request cycle. The static variant
//! echoes a pre-validated token; the delegate variant defers to a user-supplied async
//! callback, which is the extensibility seam for custom credential flows.

pub mod delegate;
pub mod resolver;
pub mod static_token;
pub mod token;

pub use delegate::*;
pub use resolver::*;
pub use static_token::*;
pub use token::*;
