use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};
use zabbix_rpc::config::Config;
use zabbix_rpc::telemetry::init_tracing;
use zabbix_rpc::zbx_client::{Params, ZbxClient};

use super::cli::{Cli, Command};

const DEFAULT_CONFIG: &str = "zbx.toml";

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = Config::from_env_and_file(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    if cli.insecure {
        config.insecure_tls = true;
    }

    let mut client = ZbxClient::from_config(&config)?;

    match cli.command {
        Command::Version => {
            println!("{}", client.api_version().await?);
        }
        Command::Hosts { groups } => {
            authenticate(&mut client, &config).await?;
            let mut params = Params::new();
            if !groups.is_empty() {
                params.insert("groupids", groups);
            }
            print_json(&client.hosts_get(params).await?)?;
        }
        Command::Call { method, params } => {
            authenticate(&mut client, &config).await?;
            let result = client
                .call_raw(&method, &params)
                .await?
                .into_result()
                .with_context(|| format!("calling {method}"))?;
            print_json(&result)?;
        }
    }
    Ok(())
}

/// Logs in unless a token is already configured.
async fn authenticate(client: &mut ZbxClient, config: &Config) -> Result<()> {
    if client.auth_token().is_some() {
        debug!("using configured API token");
        if let Err(err) = client.discover_version().await {
            warn!(error = %err, "API version discovery failed");
        }
        return Ok(());
    }
    let (user, password) = config
        .credentials()
        .context("no API token or user/password configured")?;
    client.login(user, password).await?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
