
use std::io;
use std::ops::Deref;

use anyhow::{Context, Result};
use display_error_chain::ErrorChainExt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::UtcOffset;
use tracing::error;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tracing_subscriber::fmt::format::{Format, Full};
use tracing_subscriber::fmt::time::OffsetTime;


/// filter used by the tests, everything this crate emits
const TEST_FILTER: &'static str = "image_fixtures=trace";

type EventFormat = Format<Full,OffsetTime<&'static [FormatItem<'static>]>>;


/// Installs the process-wide subscriber, writing to stderr.
/// stdout belongs to the progress report.
pub fn init(filter: impl AsRef<str>) -> Result<()> {
	let subscriber = FmtSubscriber::builder()
		.with_env_filter(parse_filter(filter.as_ref())?)
		.event_format(event_format())
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)
		.context("Failed to install the log subscriber")
}


pub fn init_test() -> DefaultGuard {
	let filter = parse_filter(TEST_FILTER)
		.expect("test log filter should parse");
	let subscriber = FmtSubscriber::builder()
		.with_env_filter(filter)
		.event_format(event_format())
		.with_test_writer()
		.finish();
	tracing::subscriber::set_default(subscriber)
}


fn parse_filter(filter: &str) -> Result<EnvFilter> {
	EnvFilter::builder()
		.parse(filter)
		.context(format!("Invalid log filter: {}", filter))
}


fn event_format() -> EventFormat {

	// fixture runs are short, the time of day is enough
	let time_format = format_description!(
		version = 2,
		"[hour]:[minute]:[second].[subsecond digits:3]"
	);
	let offset = UtcOffset::current_local_offset()
		.unwrap_or(UtcOffset::UTC);

	Format::default()
		.with_timer(OffsetTime::new(offset, time_format))
		.with_target(false)
}


pub trait ResultExt<T> {
	fn log_err(self) -> Result<T,()>;
}

impl<T> ResultExt<T> for Result<T> {
	fn log_err(self) -> Result<T,()> {
		self.map_err(|e| error!("{}", e.deref().chain()))
	}
}
