//! External collaborators: the headless content source, the payment
//! provider's checkout sessions and the sign-in provider.
//!
//! Each is an async trait so the storefront can be driven by real services
//! or by the in-memory fixtures used by the CLI and tests.

mod content;
mod error;
mod identity;
mod payment;

pub use content::*;
pub use error::*;
pub use identity::*;
pub use payment::*;
