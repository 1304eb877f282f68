//! Codewords CLI entry point.

use codewords_core::Generator;
use std::env;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
struct CliConfig {
    count: usize,
    seed: Option<u64>,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            count: 16,
            seed: None,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-n" | "--count" => {
                let value = args.next().ok_or("--count requires a value")?;
                config.count = value
                    .parse()
                    .map_err(|_| format!("invalid --count value: {value}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("codewords {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut generator = match config.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    for _ in 0..config.count {
        println!("{}", generator.generate()?);
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mcodewords\x1b[0m - Print random adjective-noun codewords

\x1b[1mUSAGE:\x1b[0m
    codewords [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -n, --count N       Number of codewords to print (default 16)
    --seed SEED         Seed the generator for a reproducible sequence

\x1b[1mEXAMPLES:\x1b[0m
    codewords                  Print 16 codewords
    codewords -n 1             Print a single codeword
    codewords --seed 42 -n 4   Print the same 4 codewords every time"
    );
}
