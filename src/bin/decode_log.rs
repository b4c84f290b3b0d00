use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use bitscope::config::{Args, InputPaths};
use bitscope::decoder::decode;
use bitscope::logging::init_logging;
use bitscope::parsers::SignalLog;
use bitscope::waveform::format_time;

/// Print parse and decode results without opening the viewer
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Log files to decode; defaults to the configured transmitter and receiver logs
    files: Vec<PathBuf>,

    #[command(flatten)]
    inputs: Args,
}

fn print_report(label: &str, path: &Path) -> Result<()> {
    let log = SignalLog::parse_file(path).with_context(|| format!("failed to load {}", label))?;
    let decoded = decode(log.data());

    println!("\n=== {} ===", label);
    println!("File: {}", path.display());
    println!("Records: {}", log.len());
    match log.time_span() {
        Some((first, last)) => println!(
            "Time range: {} to {} ({:.3} s)",
            format_time(first),
            format_time(last),
            last - first
        ),
        None => println!("Time range: none"),
    }

    let leftover = log.data().len() % 8;
    println!("Decoded ({} chars): {}", decoded.len(), decoded);
    if !decoded.is_empty() {
        println!("Bytes: {}", decoded.to_hex());
    }
    if leftover > 0 {
        println!("Trailing bits ignored: {}", leftover);
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        let paths = InputPaths::resolve(&cli.inputs).context("failed to locate capture logs")?;
        print_report("TX", &paths.transmitter)?;
        print_report("RX", &paths.receiver)?;
    } else {
        for path in &cli.files {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            print_report(&label, path)?;
        }
    }

    Ok(())
}
