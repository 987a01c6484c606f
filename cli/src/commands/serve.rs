use anyhow::{anyhow, Result};
use api::ApiConfig;
use authz::Authorizer;
use tracing::info;

/// Run the HTTP authorizer service until interrupted
pub async fn execute(authorizer: Authorizer, host: String, port: u16) -> Result<()> {
    let config = ApiConfig::new().with_host(host).with_port(port);
    info!("Starting authorizer service on {}", config.bind_address());

    api::start_server_with_config(authorizer, config)
        .await
        .map_err(|e| anyhow!("API server error: {}", e))
}
