//! Data sources repository.

use std::future::Future;

use crate::model::DataSource;
use crate::{MemoryStore, StoreResult, TRACING_TARGET_QUERY};

/// Repository for data source lookups.
///
/// Every lookup is scoped to an organization; a record from another
/// organization is reported as absent.
pub trait DataSourceRepository {
    /// Finds a data source by its identifier.
    ///
    /// Returns `Ok(None)` if no such data source exists in the organization.
    fn find_data_source_by_id(
        &self,
        org_id: i64,
        data_source_id: i64,
    ) -> impl Future<Output = StoreResult<Option<DataSource>>> + Send;

    /// Finds a data source by its exact (case-sensitive) name.
    fn find_data_source_by_name(
        &self,
        org_id: i64,
        name: &str,
    ) -> impl Future<Output = StoreResult<Option<DataSource>>> + Send;

    /// Finds the organization's default data source.
    fn find_default_data_source(
        &self,
        org_id: i64,
    ) -> impl Future<Output = StoreResult<Option<DataSource>>> + Send;

    /// Lists all data sources of an organization in storage order.
    fn list_data_sources(
        &self,
        org_id: i64,
    ) -> impl Future<Output = StoreResult<Vec<DataSource>>> + Send;
}

impl DataSourceRepository for MemoryStore {
    async fn find_data_source_by_id(
        &self,
        org_id: i64,
        data_source_id: i64,
    ) -> StoreResult<Option<DataSource>> {
        let data_sources = self.data_sources.read().await;
        let data_source = data_sources.get(&(org_id, data_source_id)).cloned();

        tracing::trace!(
            target: TRACING_TARGET_QUERY,
            org_id,
            data_source_id,
            found = data_source.is_some(),
            "find data source by id"
        );

        Ok(data_source)
    }

    async fn find_data_source_by_name(
        &self,
        org_id: i64,
        name: &str,
    ) -> StoreResult<Option<DataSource>> {
        let data_sources = self.data_sources.read().await;
        let data_source = data_sources
            .range((org_id, i64::MIN)..=(org_id, i64::MAX))
            .map(|(_, data_source)| data_source)
            .find(|data_source| data_source.name == name)
            .cloned();

        Ok(data_source)
    }

    async fn find_default_data_source(&self, org_id: i64) -> StoreResult<Option<DataSource>> {
        let data_sources = self.data_sources.read().await;
        let data_source = data_sources
            .range((org_id, i64::MIN)..=(org_id, i64::MAX))
            .map(|(_, data_source)| data_source)
            .find(|data_source| data_source.is_default)
            .cloned();

        Ok(data_source)
    }

    async fn list_data_sources(&self, org_id: i64) -> StoreResult<Vec<DataSource>> {
        let data_sources = self.data_sources.read().await;
        let data_sources: Vec<_> = data_sources
            .range((org_id, i64::MIN)..=(org_id, i64::MAX))
            .map(|(_, data_source)| data_source.clone())
            .collect();

        tracing::trace!(
            target: TRACING_TARGET_QUERY,
            org_id,
            data_source_count = data_sources.len(),
            "list data sources"
        );

        Ok(data_sources)
    }
}
