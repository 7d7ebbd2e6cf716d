mod commands;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use commands::{CommandLine, lookup};
use terminal::logging;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbosity());

    match run(commands, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Usage text when no address is given; otherwise resolve the key and look everything up.
async fn run<W: Write>(commands: CommandLine, out: &mut W) -> anyhow::Result<()> {
    if commands.macaddrs.is_empty() {
        CommandLine::write_help(out)?;
        return Ok(());
    }

    let (cfg, macaddrs) = commands.into_config()?;
    lookup::lookup(macaddrs, &cfg, out).await
}
