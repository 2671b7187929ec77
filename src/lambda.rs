//! Lambda request handling for the `ragx-lambda` binary
//!
//! The event payload carries no settings; every run is configured from the
//! `RAGX_*` environment variables of the function.

use crate::config::PipelineConfig;
use crate::job::{RunStatus, run_with_config};
use lambda_runtime::{Error, LambdaEvent};

/// Handle one invocation with configuration read from the environment
pub async fn handle_request(event: LambdaEvent<serde_json::Value>) -> Result<RunStatus, Error> {
    let config = PipelineConfig::from_env()
        .map_err(|error| Error::from(format!("invalid configuration: {error:#}")))?;
    handle_with_config(event, config).await
}

/// Handle one invocation with an explicit configuration
pub async fn handle_with_config(
    event: LambdaEvent<serde_json::Value>,
    config: PipelineConfig,
) -> Result<RunStatus, Error> {
    log::info!("Handling request {}", event.context.request_id);

    let status = run_with_config(config)
        .await
        .map_err(|error| Error::from(format!("export failed: {error:#}")))?;

    log::info!("Finished with status: {}", status.status());
    Ok(status)
}
