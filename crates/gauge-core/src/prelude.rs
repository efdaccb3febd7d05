//! Convenient re-exports for common use.

pub use crate::avatar::{AvatarConfig, AvatarUrl};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::identity::{IdentityToken, identity_token};
pub use crate::secret::SecretValue;
