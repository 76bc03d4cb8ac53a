use burrow_generator::SeqGenerator;
use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "BURROW_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "BURROW_GATEWAY_PUBLIC_BASE_URL";
pub const GENERATOR_ENV: &str = "BURROW_GATEWAY_GENERATOR";
pub const CODE_LENGTH_ENV: &str = "BURROW_GATEWAY_CODE_LENGTH";
pub const GENERATOR_PREFIX_ENV: &str = "BURROW_GATEWAY_GENERATOR_PREFIX";
pub const LOG_FORMAT_ENV: &str = "BURROW_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CODE_LENGTH: &str = "6";
pub const DEFAULT_GENERATOR_PREFIX: &str = "bw";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "burrow-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix for returned short URLs; derived from the Host header when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value = DEFAULT_CODE_LENGTH,
        value_parser = clap::value_parser!(u8).range(3..=32),
    )]
    pub code_length: u8,

    #[arg(
        long,
        env = GENERATOR_PREFIX_ENV,
        default_value = DEFAULT_GENERATOR_PREFIX,
        value_parser = parse_generator_prefix,
    )]
    pub generator_prefix: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

/// Rejects prefixes that would make the sequential generator emit codes
/// that cannot be looked up again.
fn parse_generator_prefix(prefix: &str) -> Result<String, String> {
    SeqGenerator::with_prefix(prefix)
        .map(|_| prefix.to_string())
        .map_err(|err| err.to_string())
}
