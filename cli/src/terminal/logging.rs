use colored::*;
use macq_common::config::Verbosity;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Crates whose events follow `-v`/`-d`; everything else stays at `warn`.
const OWN_TARGETS: &[&str] = &["macq", "macq_core", "macq_common"];

pub struct MacqFormatter;

impl<S, N> FormatEvent<S, N> for MacqFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter directives for the requested verbosity.
pub fn directives(verbosity: Verbosity) -> String {
    let level = verbosity.as_filter();
    let mut parts = vec!["warn".to_string()];
    parts.extend(OWN_TARGETS.iter().map(|target| format!("{target}={level}")));
    parts.join(",")
}

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the flag-derived filter.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .event_format(MacqFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
