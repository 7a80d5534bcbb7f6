#![cfg(feature = "std")]

use std::env;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "WORD_SEARCH_LOG";

const CRATE_TARGET: &str = "word_search";

/// Writes to stderr so log lines never mix with the board on stdout.
struct StderrLogger;

static STARTED: OnceLock<Instant> = OnceLock::new();

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = STARTED.get_or_init(Instant::now).elapsed();
        eprintln!(
            "[{:>4}.{:03}s {:<5} {}] {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a log filter such as `debug` or `tokio=warn,word_search=trace`.
///
/// A bare level applies to everything; a `word_search=` entry wins over it.
/// Entries for other targets are ignored. Returns `None` when nothing in
/// `spec` is usable.
pub fn parse_filter(spec: &str) -> Option<LevelFilter> {
    let mut bare = None;
    let mut scoped = None;
    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('=') {
            Some((target, level)) if target.trim() == CRATE_TARGET => {
                scoped = level.trim().parse().ok().or(scoped);
            }
            Some(_) => {}
            None => bare = part.parse().ok().or(bare),
        }
    }
    scoped.or(bare)
}

/// Install the stderr logger with the filter from [`LOG_ENV`].
/// Defaults to `warn` so routine events stay out of the interactive board.
pub fn init_logging() {
    STARTED.get_or_init(Instant::now);
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|spec| parse_filter(&spec))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
