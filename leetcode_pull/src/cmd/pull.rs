use crate::modules::{
    exporter::{ExportReport, SolutionExporter},
    session,
    submissions::{crawler::SubmissionCrawler, filter::filter_most_recent_accepted},
};
use anyhow::{Context, Result};
use clap::Args;
use leetcode_pull_libs::{graphql::core::DEFAULT_ENDPOINT, LeetCodeClient, SessionToken};
use std::{
    env,
    ffi::OsString,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tokio::time::Duration;

pub const SAVE_DIR_NAME: &str = "LEETCODE";

#[derive(Debug, Args)]
pub struct PullArgs {
    /// Value of the LEETCODE_SESSION cookie. Falls back to the environment, then to a prompt.
    #[arg(long)]
    session: Option<String>,
    #[arg(long)]
    output_dir: Option<OsString>,
    #[arg(long)]
    endpoint: Option<String>,
    /// Wait between submission list pages, in milliseconds.
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,
}

/// `<parent of the directory holding the executable>/LEETCODE`
fn default_save_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("couldn't determine the location of the executable")?;
    let exe_dir = exe
        .parent()
        .context("the executable has no parent directory")?;
    let base = exe_dir.parent().unwrap_or(exe_dir);
    Ok(base.join(SAVE_DIR_NAME))
}

fn resolve_save_dir(args: &PullArgs) -> Result<PathBuf> {
    match &args.output_dir {
        Some(path) => Ok(PathBuf::from(path)),
        None => match env::var("LEETCODE_OUTPUT_DIR") {
            Ok(path) => Ok(PathBuf::from(path)),
            Err(_) => default_save_dir(),
        },
    }
}

/// Lists, filters and exports the submissions with an already resolved session.
pub async fn pull(
    session: &SessionToken,
    endpoint: &str,
    save_dir: PathBuf,
    interval: Duration,
) -> Result<ExportReport> {
    let client = LeetCodeClient::new(endpoint, session).with_context(|| {
        let message = format!("failed to create a client for {}", endpoint);
        tracing::error!(message);
        message
    })?;

    tracing::info!("Fetching submissions from {}...", client.endpoint());
    let submissions = SubmissionCrawler::new(&client, interval).crawl().await;
    if submissions.is_empty() {
        tracing::info!("No submissions found.");
        return Ok(ExportReport::default());
    }

    tracing::info!("Filtering most recent accepted solutions...");
    let solutions = filter_most_recent_accepted(submissions);
    if solutions.is_empty() {
        tracing::info!("No accepted solutions found.");
        return Ok(ExportReport::default());
    }

    tracing::info!("Saving solutions to files in {}...", save_dir.display());
    let report = SolutionExporter::new(&client, &save_dir)
        .export(solutions)
        .await;

    Ok(report)
}

async fn run_with<R: BufRead, W: Write>(
    args: PullArgs,
    session_from_env: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    tracing::info!("Starting LeetCode Pull...");

    let session = session::resolve_session(
        args.session.as_deref(),
        session_from_env.as_deref(),
        input,
        output,
    )
    .context("failed to read the session cookie")?;
    let session = match session {
        Some(session) => session,
        None => {
            let message = "Session cookie not provided. Exiting...";
            tracing::error!(message);
            anyhow::bail!(message)
        }
    };

    let endpoint = match &args.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => env::var("LEETCODE_ENDPOINT").unwrap_or(String::from(DEFAULT_ENDPOINT)),
    };
    let save_dir = resolve_save_dir(&args)?;

    let interval = Duration::from_millis(args.interval_ms);
    let report = pull(&session, &endpoint, save_dir, interval).await?;
    if report.failed.is_empty() {
        tracing::info!("All solutions saved successfully!");
    } else {
        tracing::warn!("{} solutions couldn't be saved.", report.failed.len());
    }

    Ok(())
}

pub async fn run(args: PullArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(args, env::var("LEETCODE_SESSION").ok(), &mut input, &mut output).await
}
