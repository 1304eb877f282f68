//! mkdict entry point: regenerates the codeword word lists.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use codewords_mkdict::{BuildConfig, WordFilter};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    build: BuildConfig,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut min_len = config.build.filter.min_len();
    let mut max_len = config.build.filter.max_len();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or(format!("{flag} requires a value"));
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--save-archive" => config.build.save_archive = true,
            "--url" => config.build.url = value("--url")?,
            "--cache-dir" => config.build.cache_dir = PathBuf::from(value("--cache-dir")?),
            "--out-dir" => config.build.out_dir = PathBuf::from(value("--out-dir")?),
            "--min-len" => min_len = parse_number("--min-len", &value("--min-len")?)?,
            "--max-len" => max_len = parse_number("--max-len", &value("--max-len")?)?,
            "--timeout" => {
                let secs = parse_number("--timeout", &value("--timeout")?)?;
                config.build.timeout = Duration::from_secs(secs);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    config.build.filter = WordFilter::new(min_len, max_len)?;
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {flag} value: {value}"))
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mkdict {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    codewords_mkdict::run(&config.build)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mmkdict\x1b[0m - Regenerate the codeword word lists from Princeton WordNet

\x1b[1mUSAGE:\x1b[0m
    mkdict [OPTIONS]

Run from the workspace root. Looks for the WordNet tarball in the cache
directory first and downloads it otherwise, then writes adjectives.rs and
nouns.rs into the output directory.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    --url URL           WordNet tarball URL
                        (default http://wordnetcode.princeton.edu/wn3.1.dict.tar.gz)
    --cache-dir DIR     Where to look for a cached tarball (default .)
    --out-dir DIR       Where to write the lists (default crates/codewords_core/src/words)
    --min-len N         Shortest word kept (default 4)
    --max-len N         Longest word kept (default and upper limit 15)
    --timeout SECS      Download timeout in seconds (default 60)
    --save-archive      Keep a downloaded tarball in the cache directory

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG            Log filter (default info)"
    );
}
