pub mod lookup;

use std::time::Duration;

use clap::{CommandFactory, Parser};
use macq_common::config::{self, Config, ConfigError, DEFAULT_API_URL, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "macq", version)]
#[command(about = "Search for MAC address OUI and return the company name.")]
pub struct CommandLine {
    /// MAC address, must be at least 3 octets
    #[arg(value_name = "MACADDRS")]
    pub macaddrs: Vec<String>,

    /// Set verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show debugging output
    #[arg(short, long)]
    pub debug: bool,

    /// Use a specific API key instead of $MACADDR_API_KEY
    #[arg(short = 'A', long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Print the raw API key in debugging output
    #[arg(long, requires = "debug")]
    pub reveal_secrets: bool,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = config::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    #[arg(long, hide = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }

    /// Writes the usage text to `out`.
    pub fn write_help<W: std::io::Write>(out: &mut W) -> std::io::Result<()> {
        Self::command().write_help(out)
    }

    /// Resolves the API key and gathers everything a run needs.
    pub fn into_config(self) -> Result<(Config, Vec<String>), ConfigError> {
        let verbosity = self.verbosity();
        let api_key = config::resolve_api_key(self.api_key)?;

        let cfg = Config {
            api_key,
            api_url: self.api_url,
            timeout: Duration::from_secs(self.timeout),
            verbosity,
            reveal_secrets: self.reveal_secrets,
        };
        Ok((cfg, self.macaddrs))
    }
}
