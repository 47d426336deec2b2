use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use futures_util::StreamExt;
use hibp_check::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, Error, RangeClient,
    check_all,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-check", version)]
#[command(about = "Check passwords against Have I Been Pwned without sending them anywhere")]
struct Args {
    /// Passwords to check, one per argument. Put them after `--` when one may
    /// start with `-`, e.g. `hibp-check -- -secret`
    passwords: Vec<String>,

    /// Base URL of the range API
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    connect_timeout: u64,

    /// Number of concurrent lookups (results are still printed in order)
    #[arg(short = 'j', long, default_value_t = 1)]
    jobs: usize,

    /// Ask the service to pad responses with decoy records
    #[arg(long)]
    padding: bool,

    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

async fn run(args: Args) -> Result<(), Error> {
    if args.jobs == 0 {
        return Err(Error::InvalidArgs { flag: "jobs" });
    }
    if args.timeout == 0 {
        return Err(Error::InvalidArgs { flag: "timeout" });
    }
    if args.connect_timeout == 0 {
        return Err(Error::InvalidArgs { flag: "connect-timeout" });
    }

    let config = ClientConfig {
        endpoint: args.endpoint,
        timeout: Duration::from_secs(args.timeout),
        connect_timeout: Duration::from_secs(args.connect_timeout),
        padding: args.padding,
    };
    let client = RangeClient::new(&config)?;

    info!(
        passwords = args.passwords.len(),
        jobs = args.jobs,
        endpoint = client.endpoint(),
        "checking passwords"
    );

    let mut stdout = io::stdout().lock();
    let mut reports = std::pin::pin!(check_all(&client, &args.passwords, args.jobs));
    while let Some(report) = reports.next().await {
        let report = report?;
        // a closed stdout (e.g. piped into `head`) just ends the run
        if writeln!(stdout, "{report}").is_err() {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
