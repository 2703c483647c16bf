use crate::modules::{
    submissions::fetcher::fetch_code,
    utils::{extension_for, solution_filename},
};
use leetcode_pull_libs::{SubmissionApi, SubmissionSummary};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Skipped { title: String, reason: String },
    Failed { title: String, reason: String },
}

/// Saved files, and `"<title>: <reason>"` for every skipped or failed solution.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub saved: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl ExportReport {
    fn record(mut self, outcome: ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Saved(path) => self.saved.push(path),
            ExportOutcome::Skipped { title, reason } => {
                self.skipped.push(format!("{}: {}", title, reason))
            }
            ExportOutcome::Failed { title, reason } => {
                self.failed.push(format!("{}: {}", title, reason))
            }
        }
        self
    }

    pub fn total(&self) -> usize {
        self.saved.len() + self.skipped.len() + self.failed.len()
    }
}

async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.exists() {
        return Ok(());
    }

    tracing::warn!(
        "The directory {} doesn't exists, so attempt to create it",
        dir.display()
    );
    tokio::fs::create_dir_all(dir).await?;
    tracing::info!("The directory {} was successfully created", dir.display());
    Ok(())
}

pub struct SolutionExporter<'a, A: SubmissionApi> {
    api: &'a A,
    save_dir: PathBuf,
}

impl<'a, A: SubmissionApi> SolutionExporter<'a, A> {
    pub fn new(api: &'a A, save_dir: &Path) -> Self {
        Self {
            api,
            save_dir: save_dir.to_path_buf(),
        }
    }

    /// 1件の提出のコードを取得してファイルに保存するメソッド
    pub async fn export_one(&self, solution: &SubmissionSummary) -> ExportOutcome {
        tracing::info!(
            "Processing submission: {}, Language: {}",
            solution.title,
            solution.lang
        );

        let detail = match fetch_code(self.api, solution.id).await {
            Some(detail) => detail,
            None => {
                tracing::warn!(
                    "Skipping solution for {}: Code or question ID not available.",
                    solution.title
                );
                return ExportOutcome::Skipped {
                    title: solution.title.clone(),
                    reason: String::from("code or question id not available"),
                };
            }
        };

        let extension = extension_for(&solution.lang, &solution.title);
        let filename = solution_filename(&detail.question_frontend_id, &solution.title, extension);
        let filepath = self.save_dir.join(&filename);

        if let Err(e) = ensure_dir(&self.save_dir).await {
            let message = format!(
                "failed to create the directory {} cause {:?}",
                self.save_dir.display(),
                e
            );
            tracing::error!(message);
            return ExportOutcome::Failed {
                title: solution.title.clone(),
                reason: message,
            };
        }

        match tokio::fs::write(&filepath, detail.code.as_bytes()).await {
            Ok(_) => {
                tracing::info!("Saved: {}", filepath.display());
                ExportOutcome::Saved(filepath)
            }
            Err(e) => {
                let message = format!("Failed to save {}: {}", filename, e);
                tracing::error!(message);
                ExportOutcome::Failed {
                    title: solution.title.clone(),
                    reason: message,
                }
            }
        }
    }

    /// 全ての提出を順番に保存し、結果を集計して返すメソッド
    ///
    /// 個々の失敗は集計に含めるだけで処理は継続する。
    pub async fn export<I>(&self, solutions: I) -> ExportReport
    where
        I: IntoIterator<Item = SubmissionSummary>,
    {
        tracing::info!("Saving solutions to: {}", self.save_dir.display());

        let mut report = ExportReport::default();
        for solution in solutions {
            let outcome = self.export_one(&solution).await;
            report = report.record(outcome);
        }

        tracing::info!(
            "{} solutions processed: {} saved, {} skipped, {} failed.",
            report.total(),
            report.saved.len(),
            report.skipped.len(),
            report.failed.len()
        );
        for issue in report.skipped.iter().chain(report.failed.iter()) {
            tracing::warn!("Not saved: {}", issue);
        }
        report
    }
}
