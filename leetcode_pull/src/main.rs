mod cmd;
mod modules;

use crate::cmd::pull::{self, PullArgs};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, process::ExitCode, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{
        self,
        time::{FormatTime, OffsetTime, UtcTime},
    },
};

#[derive(Debug, Parser)]
#[command(name = "leetcode_pull")]
#[command(about = "Save your accepted LeetCode solutions as local files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Pull(PullArgs),
}

fn init_tracing<T>(timer: T)
where
    T: FormatTime + Send + Sync + 'static,
{
    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(timer);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");
}

fn main() -> ExitCode {
    dotenv().ok();

    // The local offset can only be determined while the process is single threaded.
    match OffsetTime::local_rfc_3339() {
        Ok(timer) => init_tracing(timer),
        Err(_) => init_tracing(UtcTime::rfc_3339()),
    }

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to build the runtime: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match Cli::parse().command {
        Commands::Pull(args) => runtime.block_on(pull::run(args)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("An error occurred: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
