//! Failures that can end a generation run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every variant is fatal; the CLI prints it as `Error: <cause>` and exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("flush failed: {0}")]
    Flush(#[source] io::Error),

    #[error("close failed: {0}")]
    Close(#[source] io::Error),
}
