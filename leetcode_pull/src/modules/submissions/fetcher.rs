use leetcode_pull_libs::{SubmissionApi, SubmissionDetail};

/// Fetches the source code and question id of a submission.
///
/// Every failure is logged and reported as `None` so that the caller can skip the item.
pub async fn fetch_code<A: SubmissionApi>(api: &A, submission_id: i64) -> Option<SubmissionDetail> {
    tracing::info!("Fetching code for submission ID: {}", submission_id);
    match api.submission_details(submission_id).await {
        Ok(detail) => Some(detail),
        Err(e) => {
            tracing::error!(
                "Failed to fetch code for submission ID {}: {}",
                submission_id,
                e
            );
            None
        }
    }
}
