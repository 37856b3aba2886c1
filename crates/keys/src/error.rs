use std::{io, path::PathBuf, process::ExitStatus};

/// Expected markers missing from `genkeys` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    #[error("cant find private key start")]
    MissingPrivateStart,
    #[error("cant find private key end")]
    MissingPrivateEnd,
    #[error("cant find public key start")]
    MissingPublicStart,
    #[error("cant find public key end")]
    MissingPublicEnd,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Cannot start genkeys: {0}")]
    Spawn(#[source] io::Error),
    #[error("genkeys run error: exited before timeout with {0}")]
    ExitedEarly(ExitStatus),
    #[error("Cannot stop genkeys: {0}")]
    Signal(#[source] io::Error),
    #[error("Cannot read genkeys output: {0}")]
    Collect(#[source] io::Error),
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot write config file {}: {source}", .path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
