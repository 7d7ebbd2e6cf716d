use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::{Instrument, debug, info, info_span};

use crate::terminal::print;
use macq_common::config::Config;
use macq_core::lookup::{self as pipeline, Lookup};
use macq_core::vendors::{ApiConfig, MacAddressIoClient};

pub async fn lookup<W: Write>(
    macaddrs: Vec<String>,
    cfg: &Config,
    out: &mut W,
) -> anyhow::Result<()> {
    debug!("api_key: {}", cfg.api_key.shown(cfg.reveals_key()));
    debug!("endpoint: {} (timeout {}s)", cfg.api_url, cfg.timeout.as_secs());

    let client = MacAddressIoClient::with_config(cfg.api_key.clone(), ApiConfig::from(cfg))
        .context("failed to build HTTP client")?;

    let start_time: Instant = Instant::now();
    let results: Vec<Lookup> = pipeline::run(&client, macaddrs.as_slice())
        .instrument(info_span!("batch", size = macaddrs.len()))
        .await?;

    print::write_results(out, &results)?;
    lookup_ends(results.len(), start_time.elapsed());
    Ok(())
}

fn lookup_ends(count: usize, total_time: Duration) {
    let vendors: ColoredString = format!("{count} vendor(s)").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    info!("Lookup complete: {vendors} identified in {total_time}");
}
