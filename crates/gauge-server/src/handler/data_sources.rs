//! Data source handlers.
//!
//! Every data source leaves these handlers as a [`DataSource`] view, so
//! stored secrets are reduced to presence flags before serialization.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use gauge_store::MemoryStore;
use gauge_store::query::DataSourceRepository;

use crate::handler::request::{DataSourceNamePathParams, DataSourcePathParams, OrgPathParams};
use crate::handler::response::{DataSource, DataSources};
use crate::handler::{ErrorKind, Result};
use crate::utility::tracing_targets::TRACING_TARGET_DATA_SOURCES;

/// Returns a single data source of an organization.
#[tracing::instrument(
    skip_all,
    fields(
        org_id = path_params.org_id,
        data_source_id = path_params.data_source_id,
    )
)]
pub async fn read_data_source(
    State(store): State<MemoryStore>,
    Path(path_params): Path<DataSourcePathParams>,
) -> Result<(StatusCode, Json<DataSource>)> {
    tracing::debug!(target: TRACING_TARGET_DATA_SOURCES, "Reading data source");

    let Some(data_source) = store
        .find_data_source_by_id(path_params.org_id, path_params.data_source_id)
        .await?
    else {
        return Err(ErrorKind::NotFound
            .with_message("Data source not found")
            .with_resource("data_source"));
    };

    let data_source = DataSource::from_model(data_source);

    tracing::debug!(
        target: TRACING_TARGET_DATA_SOURCES,
        encrypted_fields = ?data_source.encrypted_fields,
        "Data source read",
    );

    Ok((StatusCode::OK, Json(data_source)))
}

/// Returns a data source of an organization by its exact name.
#[tracing::instrument(skip_all, fields(org_id = path_params.org_id))]
pub async fn read_data_source_by_name(
    State(store): State<MemoryStore>,
    Path(path_params): Path<DataSourceNamePathParams>,
) -> Result<(StatusCode, Json<DataSource>)> {
    tracing::debug!(target: TRACING_TARGET_DATA_SOURCES, "Reading data source by name");

    let data_source = store
        .find_data_source_by_name(path_params.org_id, &path_params.name)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Data source not found")
                .with_resource("data_source")
        })?;

    Ok((StatusCode::OK, Json(DataSource::from_model(data_source))))
}

/// Returns the default data source of an organization.
#[tracing::instrument(skip_all, fields(org_id = path_params.org_id))]
pub async fn read_default_data_source(
    State(store): State<MemoryStore>,
    Path(path_params): Path<OrgPathParams>,
) -> Result<(StatusCode, Json<DataSource>)> {
    tracing::debug!(target: TRACING_TARGET_DATA_SOURCES, "Reading default data source");

    let data_source = store
        .find_default_data_source(path_params.org_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("No default data source")
                .with_resource("data_source")
        })?;

    Ok((StatusCode::OK, Json(DataSource::from_model(data_source))))
}

/// Lists all data sources of an organization ordered by name.
#[tracing::instrument(skip_all, fields(org_id = path_params.org_id))]
pub async fn list_data_sources(
    State(store): State<MemoryStore>,
    Path(path_params): Path<OrgPathParams>,
) -> Result<(StatusCode, Json<DataSources>)> {
    tracing::debug!(target: TRACING_TARGET_DATA_SOURCES, "Listing data sources");

    let data_sources = store.list_data_sources(path_params.org_id).await?;
    let data_sources = DataSources::from_models(data_sources);

    tracing::debug!(
        target: TRACING_TARGET_DATA_SOURCES,
        data_source_count = data_sources.len(),
        "Data sources listed",
    );

    Ok((StatusCode::OK, Json(data_sources)))
}
