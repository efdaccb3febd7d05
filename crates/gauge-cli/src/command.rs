//! Command execution.
//!
//! Data source commands go through the same handlers an HTTP router would
//! mount, so the printed JSON is exactly what a client would receive.

use anyhow::Context;
use axum::Json;
use axum::extract::{Path, State};
use gauge_core::avatar::AvatarUrl;
use gauge_server::handler::request::{DataSourcePathParams, OrgPathParams};
use gauge_server::handler::{
    list_data_sources, read_data_source, read_default_data_source,
};
use gauge_server::service::ServiceState;
use serde::Serialize;

use crate::TRACING_TARGET_COMMAND;
use crate::config::{Command, DataSourceCommand};

/// Avatar command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AvatarOutput {
    identity_token: String,
    url: String,
    has_identity: bool,
}

impl From<AvatarUrl> for AvatarOutput {
    fn from(url: AvatarUrl) -> Self {
        Self {
            identity_token: url.token().to_string(),
            has_identity: url.has_identity(),
            url: url.into(),
        }
    }
}

/// Runs a command and returns its pretty-printed JSON output.
pub async fn execute(state: &ServiceState, command: Command) -> anyhow::Result<String> {
    match command {
        Command::DataSource(command) => execute_data_source(state, command).await,
        Command::Avatar { identity } => {
            let url = state.avatar().avatar_url(&identity);
            if !url.has_identity() {
                tracing::warn!(
                    target: TRACING_TARGET_COMMAND,
                    "empty identity, the avatar url has no token"
                );
            }

            to_json(&AvatarOutput::from(url))
        }
    }
}

async fn execute_data_source(
    state: &ServiceState,
    command: DataSourceCommand,
) -> anyhow::Result<String> {
    let store = State(state.store().clone());

    match command {
        DataSourceCommand::Show {
            org_id,
            data_source_id,
        } => {
            let params = DataSourcePathParams {
                org_id,
                data_source_id,
            };
            let (_, Json(data_source)) = read_data_source(store, Path(params))
                .await
                .with_context(|| format!("cannot show data source {data_source_id}"))?;
            to_json(&data_source)
        }
        DataSourceCommand::ShowDefault { org_id } => {
            let (_, Json(data_source)) =
                read_default_data_source(store, Path(OrgPathParams { org_id }))
                    .await
                    .with_context(|| format!("cannot show default data source of org {org_id}"))?;
            to_json(&data_source)
        }
        DataSourceCommand::List { org_id } => {
            let (_, Json(data_sources)) = list_data_sources(store, Path(OrgPathParams { org_id }))
                .await
                .with_context(|| format!("cannot list data sources of org {org_id}"))?;
            to_json(&data_sources)
        }
    }
}

fn to_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
