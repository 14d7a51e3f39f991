use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Zabbix JSON-RPC API", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    #[arg(long, action = ArgAction::SetTrue)]
    pub insecure: bool,

    /// Emit logs as JSON (requires `--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue)]
    pub json_logs: bool,

    /// Explicit log filter, e.g. "zabbix_rpc::wire=debug".
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the server API version.
    Version,
    /// List hosts as JSON.
    Hosts {
        /// Only hosts in this host group (repeatable).
        #[arg(long = "group", value_name = "ID")]
        groups: Vec<String>,
    },
    /// Call any API method with raw JSON parameters and print the result.
    Call {
        method: String,
        #[arg(default_value = "{}")]
        params: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_raw_call() {
        let cli = match Cli::try_parse_from(["zbx", "call", "host.get", r#"{"limit":1}"#]) {
            Ok(cli) => cli,
            Err(err) => panic!("arguments should parse: {err}"),
        };
        match cli.command {
            Command::Call { method, params } => {
                assert_eq!(method, "host.get");
                assert_eq!(params, r#"{"limit":1}"#);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn hosts_accepts_repeated_groups() {
        let cli = match Cli::try_parse_from(["zbx", "--insecure", "hosts", "--group", "2", "--group", "4"]) {
            Ok(cli) => cli,
            Err(err) => panic!("arguments should parse: {err}"),
        };
        assert!(cli.insecure);
        assert!(matches!(cli.command, Command::Hosts { ref groups } if groups.len() == 2));
    }
}
