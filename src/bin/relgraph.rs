use cancel_this::Cancellable;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};
use relgraph::GraphError;
use relgraph::api::{Reply, Request, Response, handle};
use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "relgraph")]
#[command(about = "Answer a JSON request about a binary relation or a graph")]
struct Args {
    /// Path to the JSON request, or "-" to read it from standard input
    #[arg(value_name = "FILE", default_value = "-")]
    file: String,

    /// Pretty-print the JSON reply
    #[arg(long)]
    pretty: bool,

    /// Cancel the computation after this many seconds (0 means no limit)
    #[arg(long, default_value_t = 0, require_equals = true)]
    timeout: u64,

    /// Verbose logging level: "trace", "debug", or "info"
    /// If specified without a value (--verbose or -v), defaults to "info"
    /// Use --verbose=LEVEL or -v=LEVEL to specify a level, or just --verbose/-v for info
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn read_input(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(file)
    }
}

fn run(request: Request, timeout: u64) -> Result<Response, GraphError> {
    if timeout == 0 {
        return handle(request);
    }
    let limit = Duration::from_secs(timeout);
    let result: Cancellable<Result<Response, GraphError>> =
        cancel_this::on_timeout(limit, || Ok(handle(request.clone())));
    result.unwrap_or_else(|cancelled| Err(GraphError::from(cancelled)))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Configure logging:
    // None = not specified, Some(None) = specified without value (info), Some(Some(level)) = explicit level
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let reply = match read_input(&args.file) {
        Err(e) => Reply::invalid_request(format!("Failed to read {}: {}", args.file, e)),
        Ok(text) => match serde_json::from_str::<Request>(&text) {
            Err(e) => Reply::invalid_request(format!("Malformed request: {}", e)),
            Ok(request) => {
                info!("Loaded `{}` request from {}.", request.operation(), args.file);
                Reply::from(run(request, args.timeout))
            }
        },
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&reply)
    } else {
        serde_json::to_string(&reply)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize reply: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if reply.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
