//! Input file location.
//!
//! The two capture logs live in a data directory next to the crate. Command
//! line flags (or `BITSCOPE_DATA_DIR`) move the directory or point at other
//! files; with no arguments the default pair is used.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Default transmitter log file name
pub const TRANSMITTER_FILE: &str = "Transmitter_Sequence.txt";

/// Default receiver log file name
pub const RECEIVER_FILE: &str = "Receiver_Sequence.txt";

/// Data directory shipped with the crate
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Log level used when `RUST_LOG` is not set
pub const LOG_LEVEL: &str = "info";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "View and decode transmitter/receiver data+clock logs")]
pub struct Args {
    /// Directory containing the capture logs
    #[arg(long, env = "BITSCOPE_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Transmitter log, relative to the data directory unless absolute
    #[arg(long, default_value = TRANSMITTER_FILE)]
    pub tx: PathBuf,

    /// Receiver log, relative to the data directory unless absolute
    #[arg(long, default_value = RECEIVER_FILE)]
    pub rx: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            tx: PathBuf::from(TRANSMITTER_FILE),
            rx: PathBuf::from(RECEIVER_FILE),
        }
    }
}

/// Resolved paths of the transmitter and receiver logs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPaths {
    pub transmitter: PathBuf,
    pub receiver: PathBuf,
}

impl InputPaths {
    /// Resolve both logs against the data directory.
    ///
    /// The directory must exist when either file is relative to it.
    pub fn resolve(args: &Args) -> Result<Self, LoadError> {
        let needs_dir = args.tx.is_relative() || args.rx.is_relative();
        if needs_dir && !args.data_dir.is_dir() {
            return Err(LoadError::DataDirMissing(args.data_dir.clone()));
        }

        let paths = Self {
            transmitter: join_relative(&args.data_dir, &args.tx),
            receiver: join_relative(&args.data_dir, &args.rx),
        };

        tracing::debug!(
            "Resolved inputs: tx={}, rx={}",
            paths.transmitter.display(),
            paths.receiver.display()
        );

        Ok(paths)
    }
}

fn join_relative(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_into_data_dir() {
        let dir = std::env::temp_dir();
        let args = Args {
            data_dir: dir.clone(),
            ..Args::default()
        };

        let paths = InputPaths::resolve(&args).unwrap();
        assert_eq!(paths.transmitter, dir.join(TRANSMITTER_FILE));
        assert_eq!(paths.receiver, dir.join(RECEIVER_FILE));
    }

    #[test]
    fn test_resolve_absolute_overrides() {
        let tx = std::env::temp_dir().join("tx.txt");
        let rx = std::env::temp_dir().join("rx.txt");
        let args = Args {
            data_dir: PathBuf::from("/nonexistent/bitscope-data"),
            tx: tx.clone(),
            rx: rx.clone(),
        };

        let paths = InputPaths::resolve(&args).unwrap();
        assert_eq!(paths.transmitter, tx);
        assert_eq!(paths.receiver, rx);
    }

    #[test]
    fn test_resolve_missing_data_dir() {
        let args = Args {
            data_dir: PathBuf::from("/nonexistent/bitscope-data"),
            ..Args::default()
        };

        assert!(matches!(
            InputPaths::resolve(&args),
            Err(LoadError::DataDirMissing(_))
        ));
    }

    #[test]
    fn test_args_parse_without_arguments() {
        let args = Args::parse_from(["bitscope"]);
        assert_eq!(args.tx, PathBuf::from(TRANSMITTER_FILE));
        assert_eq!(args.rx, PathBuf::from(RECEIVER_FILE));
    }
}
