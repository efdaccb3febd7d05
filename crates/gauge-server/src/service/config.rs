use std::path::PathBuf;

use derive_builder::Builder;
use gauge_core::avatar::AvatarConfig;
use gauge_store::MemoryStore;
use serde::{Deserialize, Serialize};

use crate::service::Result;
use crate::utility::tracing_targets::TRACING_TARGET_SERVICE;

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// Sub-path the application is served under, e.g. `/grafana`.
    ///
    /// Avatar URLs are built beneath it.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "APP_SUB_URL", default_value = "")
    )]
    #[builder(default)]
    #[serde(default)]
    pub app_sub_url: String,

    /// JSON file with the data source records to serve.
    ///
    /// Without it the store starts empty.
    #[cfg_attr(feature = "config", arg(long, env = "GAUGE_FIXTURE_PATH"))]
    #[builder(default)]
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Validates the sub-path and returns the avatar configuration.
    pub fn avatar_config(&self) -> Result<AvatarConfig> {
        Ok(AvatarConfig::new(self.app_sub_url.as_str())?)
    }

    /// Opens the data source store, loading the fixture file if one is set.
    pub async fn open_store(&self) -> Result<MemoryStore> {
        let Some(fixture_path) = &self.fixture_path else {
            tracing::info!(
                target: TRACING_TARGET_SERVICE,
                "No fixture file configured, starting with an empty store"
            );
            return Ok(MemoryStore::new());
        };

        let store = MemoryStore::from_fixture_file(fixture_path).await?;
        Ok(store)
    }
}

impl ServiceConfigBuilder {
    /// Wrapper for builder validation that returns String errors.
    fn validate(builder: &ServiceConfigBuilder) -> Result<(), String> {
        if let Some(app_sub_url) = &builder.app_sub_url {
            AvatarConfig::new(app_sub_url.as_str()).map_err(|e| e.to_string())?;
        }

        if let Some(Some(fixture_path)) = &builder.fixture_path
            && fixture_path.as_os_str().is_empty()
        {
            return Err("Fixture path cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use gauge_store::query::DataSourceRepository;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn builder_defaults() {
        let config = ServiceConfig::builder().build().unwrap();
        assert_eq!(config.app_sub_url, "");
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn builder_rejects_relative_sub_url() {
        let result = ServiceConfig::builder()
            .with_app_sub_url("grafana")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_empty_fixture_path() {
        let result = ServiceConfig::builder().with_fixture_path("").build();
        assert!(result.is_err());
    }

    #[test]
    fn avatar_config_is_normalized() {
        let config = ServiceConfig::builder()
            .with_app_sub_url("/grafana/")
            .build()
            .unwrap();

        let avatar = config.avatar_config().unwrap();
        assert_eq!(avatar.base_path(), "/grafana/avatar");
    }

    #[test]
    fn invalid_sub_url_is_a_config_error() {
        let config = ServiceConfig {
            app_sub_url: "not a path".into(),
            fixture_path: None,
        };

        let error = config.avatar_config().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn open_store_without_fixture() {
        let store = ServiceConfig::default().open_store().await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn open_store_from_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "orgId": 1, "name": "metrics", "type": "prometheus"}}]"#
        )
        .unwrap();

        let config = ServiceConfig::builder()
            .with_fixture_path(file.path())
            .build()
            .unwrap();

        let store = config.open_store().await.unwrap();
        let found = store.find_data_source_by_id(1, 1).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn open_store_with_missing_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig::builder()
            .with_fixture_path(dir.path().join("missing.json"))
            .build()
            .unwrap();

        let error = config.open_store().await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Store);
    }
}
