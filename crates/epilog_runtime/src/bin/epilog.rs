//! Epilog CLI entry point.

use epilog_runtime::Driver;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
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

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-n" | "--dry-run" => config.dry_run = true,
            "-v" | "--verbose" => config.verbose = true,
            "-q" | "--quiet" => config.quiet = true,
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a directory".into());
                }
                config.output = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.input.is_some() {
                    return Err("only one input directory may be given".into());
                }
                config.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
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
        println!("epilog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&config);

    let input = config
        .input
        .or_else(|| env::var("EPILOG_IN").ok().map(PathBuf::from))
        .ok_or("no input directory (argument or EPILOG_IN)")?;
    let output = config
        .output
        .or_else(|| env::var("EPILOG_OUT").ok().map(PathBuf::from))
        .unwrap_or_else(|| input.with_file_name("src-instrumented"));

    if !input.is_dir() {
        return Err(format!("input is not a directory: {}", input.display()).into());
    }

    let driver = Driver {
        input,
        output,
        dry_run: config.dry_run,
    };
    let report = driver.run()?;

    if !config.quiet {
        println!("{}", report.stats.report());
        println!(
            "files: {} parsed, {} skipped, {} written -> {}",
            report.parsed,
            report.skipped_files,
            report.written,
            driver.output.display()
        );
    }

    Ok(())
}

fn init_logging(config: &CliConfig) {
    let default = if config.quiet {
        "warn"
    } else if config.verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "epilog {} - annotation-driven endpoint instrumentation

USAGE:
    epilog [OPTIONS] [INPUT_DIR]

ARGS:
    INPUT_DIR    Directory holding Java sources (default: $EPILOG_IN)

OPTIONS:
    -o, --output DIR   Output directory (default: $EPILOG_OUT, else
                       a sibling 'src-instrumented' directory)
    -n, --dry-run      Run the pass and report without writing output
    -v, --verbose      Per-method decision logging
    -q, --quiet        Suppress the summary report
    -h, --help         Show this help
    -V, --version      Show version",
        env!("CARGO_PKG_VERSION")
    );
}
