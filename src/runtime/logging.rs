use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Plain-text subscriber writing to `log_path`, which is truncated first.
fn subscriber(
    log_path: &Path,
    filter: EnvFilter,
) -> io::Result<impl Subscriber + Send + Sync + 'static> {
    let file = File::create(log_path)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish())
}

/// Send `tracing` output to `log_path`, truncating it first.
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn init(log_path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    subscriber(log_path, filter)?.try_init()?;
    Ok(())
}
