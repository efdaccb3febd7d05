use gauge_core::avatar::AvatarConfig;
use gauge_store::MemoryStore;

use crate::service::{Result, ServiceConfig};
use crate::utility::tracing_targets::TRACING_TARGET_SERVICE;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    store: MemoryStore,
    avatar: AvatarConfig,
}

impl ServiceState {
    /// Creates the state from already constructed parts.
    pub fn new(store: MemoryStore, avatar: AvatarConfig) -> Self {
        Self { store, avatar }
    }

    /// Initializes application state from configuration.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let avatar = config.avatar_config()?;
        let store = config.open_store().await?;
        let data_source_count = store.len().await;

        tracing::info!(
            target: TRACING_TARGET_SERVICE,
            app_sub_url = avatar.app_sub_url(),
            data_source_count,
            "Service state initialized"
        );

        Ok(Self::new(store, avatar))
    }

    /// Returns the data source store.
    #[inline]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns the avatar configuration.
    #[inline]
    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(store: MemoryStore);
impl_di!(avatar: AvatarConfig);
