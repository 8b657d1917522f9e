use clap::{Parser, ValueEnum};
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "SNIP_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "SNIP_GATEWAY_STORAGE_BACKEND";
pub const AWS_REGION_ENV: &str = "SNIP_GATEWAY_AWS_REGION";
pub const DYNAMODB_ENDPOINT_ENV: &str = "SNIP_GATEWAY_DYNAMODB_ENDPOINT";
pub const TABLE_ENV: &str = "SNIP_GATEWAY_TABLE";
pub const CREATE_TABLE_ENV: &str = "SNIP_GATEWAY_CREATE_TABLE";
pub const STORE_TIMEOUT_MS_ENV: &str = "SNIP_GATEWAY_STORE_TIMEOUT_MS";
pub const CODE_LENGTH_ENV: &str = "SNIP_GATEWAY_CODE_LENGTH";
pub const LOG_FORMAT_ENV: &str = "SNIP_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_AWS_REGION: &str = "us-east-2";
pub const DEFAULT_TABLE: &str = "Links";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "dynamodb")]
    DynamoDb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::DynamoDb => write!(f, "dynamodb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip-gateway", version, about = "URL shortener HTTP gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::DynamoDb
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = AWS_REGION_ENV, default_value = DEFAULT_AWS_REGION)]
    pub aws_region: String,

    /// Overrides the DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local.
    #[arg(long, env = DYNAMODB_ENDPOINT_ENV)]
    pub dynamodb_endpoint: Option<String>,

    #[arg(long, env = TABLE_ENV, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Creates the links table on startup when it does not exist.
    #[arg(long, env = CREATE_TABLE_ENV)]
    pub create_table: bool,

    /// Per-call store timeout in milliseconds; 0 disables it.
    #[arg(long, env = STORE_TIMEOUT_MS_ENV, default_value_t = 3000)]
    pub store_timeout_ms: u64,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value_t = 8,
        value_parser = clap::value_parser!(u16).range(4..=32)
    )]
    pub code_length: u16,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn store_timeout(&self) -> Option<Duration> {
        (self.store_timeout_ms > 0).then(|| Duration::from_millis(self.store_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["snip-gateway"]).unwrap();

        assert_eq!(cli.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(cli.storage, StorageBackendArg::DynamoDb);
        assert_eq!(cli.aws_region, "us-east-2");
        assert_eq!(cli.table, "Links");
        assert!(!cli.create_table);
        assert_eq!(cli.store_timeout(), Some(Duration::from_millis(3000)));
        assert_eq!(cli.code_length, 8);
    }

    #[test]
    fn zero_timeout_disables_it() {
        let cli = CLI::try_parse_from(["snip-gateway", "--store-timeout-ms", "0"]).unwrap();
        assert_eq!(cli.store_timeout(), None);
    }

    #[test]
    fn in_memory_backend() {
        let cli = CLI::try_parse_from(["snip-gateway", "--storage", "in-memory"]).unwrap();
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
    }

    #[test]
    fn code_length_out_of_range() {
        assert!(CLI::try_parse_from(["snip-gateway", "--code-length", "2"]).is_err());
    }
}
