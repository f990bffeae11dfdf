// Application context
// Immutable per-process state shared read-only across all connections.

use std::io;
use std::path::PathBuf;

use super::types::Config;

/// Everything a request handler needs, fixed at startup.
///
/// The root directory is canonicalized here so that per-request path
/// resolution can compare canonical paths against it. Holding the root as
/// an explicit value (instead of chdir-ing the process) keeps instances
/// self-contained, so tests can run several servers with different roots
/// in one process.
pub struct AppContext {
    pub config: Config,
    pub root: PathBuf,
}

impl AppContext {
    /// Validate the configured root and build the context.
    ///
    /// Fails with a diagnostic naming the root when it does not exist, is
    /// not readable, or is not a directory.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = std::fs::canonicalize(&config.files.root).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!(
                    "root directory '{}' not found or inaccessible: {e}",
                    config.files.root
                ),
            )
        })?;

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("root path '{}' is not a directory", config.files.root),
            ));
        }

        Ok(Self { config, root })
    }
}
