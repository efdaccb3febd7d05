//! Internal records for all entities handled by gauge.
//!
//! Records are created and updated by the persistence layer. They can carry
//! secrets, so none of them implements `Serialize`; API responses are built
//! from them by explicit conversion functions.

mod data_source;
mod signed_in_user;

pub use data_source::{DataSource, TlsMaterial};
pub use signed_in_user::SignedInUser;
