//! Convenient re-exports for common use.

pub use crate::model::{DataSource, SignedInUser, TlsMaterial};
pub use crate::query::DataSourceRepository;
pub use crate::types::{DataSourceAccess, HelpFlags1, OrgRole};
pub use crate::{MemoryStore, StoreError, StoreResult};
