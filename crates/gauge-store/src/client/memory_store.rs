//! In-memory record store.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::DataSource;
use crate::{StoreError, StoreResult, TRACING_TARGET_CLIENT};

/// Records keyed by `(org_id, id)`.
pub(crate) type DataSourceMap = BTreeMap<(i64, i64), DataSource>;

/// In-memory data source store.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) data_sources: Arc<RwLock<DataSourceMap>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`.
    ///
    /// Fails if two records share an organization and identifier.
    pub fn from_records(records: impl IntoIterator<Item = DataSource>) -> StoreResult<Self> {
        let mut data_sources = DataSourceMap::new();
        for record in records {
            insert_unique(&mut data_sources, record)?;
        }

        Ok(Self {
            data_sources: Arc::new(RwLock::new(data_sources)),
        })
    }

    /// Loads a store from a JSON file containing an array of data source records.
    pub async fn from_fixture_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            path = %path.display(),
            "loading data source fixture"
        );

        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let records: Vec<DataSource> =
            serde_json::from_slice(&contents).map_err(|source| StoreError::Fixture {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_records(records)?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            path = %path.display(),
            data_source_count = store.data_sources.read().await.len(),
            "data source fixture loaded"
        );

        Ok(store)
    }

    /// Adds a record.
    ///
    /// Fails if a record with the same organization and identifier exists.
    pub async fn insert(&self, record: DataSource) -> StoreResult<()> {
        let mut data_sources = self.data_sources.write().await;
        insert_unique(&mut data_sources, record)
    }

    /// Replaces the record with the same organization and identifier, or adds it.
    ///
    /// Returns the previous record, if any.
    pub async fn upsert(&self, record: DataSource) -> Option<DataSource> {
        let mut data_sources = self.data_sources.write().await;
        data_sources.insert((record.org_id, record.id), record)
    }

    /// Returns the number of stored records across all organizations.
    pub async fn len(&self) -> usize {
        self.data_sources.read().await.len()
    }

    /// Returns whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.data_sources.read().await.is_empty()
    }
}

fn insert_unique(data_sources: &mut DataSourceMap, record: DataSource) -> StoreResult<()> {
    match data_sources.entry((record.org_id, record.id)) {
        Entry::Occupied(_) => Err(StoreError::Duplicate {
            org_id: record.org_id,
            id: record.id,
        }),
        Entry::Vacant(entry) => {
            entry.insert(record);
            Ok(())
        }
    }
}
