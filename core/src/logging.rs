//! File logging for the transport lifecycle.
//!
//! Lines look like `14:03:27,512 sse_transport::transport INFO Start transport`:
//! local wall-clock time with milliseconds, the event target, the level, then
//! the message. `init` installs this format process-wide exactly once;
//! `layer` gives the same format over any writer.

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{ChronoLocal, FormatTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::error::LoggingError;

const TIME_FORMAT: &str = "%H:%M:%S,%3f";

static INSTALLED: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Event formatter producing `HH:MM:SS,mmm <target> <LEVEL> <message>`.
#[derive(Debug, Clone)]
pub struct LineFormat {
    timer: ChronoLocal,
}

impl LineFormat {
    pub fn new() -> Self {
        Self {
            timer: ChronoLocal::new(TIME_FORMAT.to_string()),
        }
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        let meta = event.metadata();
        write!(writer, " {} {} ", meta.target(), meta.level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// A formatting layer writing `LineFormat` lines to `make_writer`.
pub fn layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LineFormat::new())
        .with_writer(make_writer)
}

/// Install the global INFO-level subscriber appending to `path`.
///
/// Only the first successful call has any effect; later calls, concurrent
/// ones included, return the path that was installed, whatever `path` they
/// pass.
pub fn init(path: &Path) -> Result<PathBuf, LoggingError> {
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = installed.as_ref() {
        return Ok(existing.clone());
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(layer(Mutex::new(file)))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;

    *installed = Some(path.to_path_buf());
    Ok(path.to_path_buf())
}
