use crate::graphql::{model::*, query::*};
use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt;
use thiserror::Error;
use tokio::time::Duration;

type Result<T> = std::result::Result<T, LeetCodeClientError>;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";

#[derive(Debug, Error)]
pub enum LeetCodeClientError {
    #[error("failed to request to graphql endpoint")]
    RequestError(#[from] reqwest::Error),
    #[error("invalid endpoint url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("session cookie can't be used as a header value")]
    InvalidHeaderError(#[from] header::InvalidHeaderValue),
    #[error("session expired or invalid [{0}]")]
    Unauthorized(StatusCode),
    #[error("unexpected status [{status}] with body [{body}]")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("unexpected response structure: {0}")]
    UnexpectedShape(String),
}

/// Value of the `LEETCODE_SESSION` cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns `None` when the given value is empty after trimming.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(SessionToken(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SessionToken(***)")
    }
}

#[async_trait]
pub trait SubmissionApi {
    async fn submission_list(&self, offset: usize) -> Result<Vec<SubmissionSummary>>;
    async fn submission_details(&self, submission_id: i64) -> Result<SubmissionDetail>;
}

pub struct LeetCodeClient {
    endpoint: Url,
    client: Client,
}

impl LeetCodeClient {
    pub fn new(endpoint: &str, session: &SessionToken) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;

        let mut cookie = HeaderValue::from_str(&format!("LEETCODE_SESSION={}", session.as_str()))?;
        cookie.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::COOKIE, cookie);

        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(LeetCodeClient { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn query<D>(&self, query: &str, variables: serde_json::Value) -> Result<GraphQLResponse<D>>
    where
        D: DeserializeOwned,
    {
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = res.status();
        tracing::debug!("graphql endpoint responded with status {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LeetCodeClientError::Unauthorized(status));
        }

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(LeetCodeClientError::UnexpectedStatus { status, body });
        }

        let body = res.text().await?;
        let response: GraphQLResponse<D> = serde_json::from_str(&body).map_err(|e| {
            LeetCodeClientError::UnexpectedShape(format!("{} in body [{}]", e, body))
        })?;
        Ok(response)
    }
}

#[async_trait]
impl SubmissionApi for LeetCodeClient {
    async fn submission_list(&self, offset: usize) -> Result<Vec<SubmissionSummary>> {
        let response: GraphQLResponse<SubmissionListData> = self
            .query(
                SUBMISSION_LIST_QUERY,
                json!({ "offset": offset, "limit": PAGE_SIZE }),
            )
            .await?;

        let message = response.error_message();
        response
            .data
            .and_then(|data| data.submission_list)
            .and_then(|list| list.submissions)
            .ok_or(LeetCodeClientError::UnexpectedShape(format!(
                "data.submissionList.submissions is missing [{}]",
                message
            )))
    }

    async fn submission_details(&self, submission_id: i64) -> Result<SubmissionDetail> {
        let response: GraphQLResponse<SubmissionDetailsData> = self
            .query(SUBMISSION_DETAILS_QUERY, json!({ "id": submission_id }))
            .await?;

        let message = response.error_message();
        let details = response
            .data
            .and_then(|data| data.submission_details)
            .ok_or(LeetCodeClientError::UnexpectedShape(format!(
                "data.submissionDetails is missing [{}]",
                message
            )))?;

        // Empty strings are as useless as missing fields for naming and saving a file.
        let code = details
            .code
            .filter(|code| !code.is_empty())
            .ok_or(LeetCodeClientError::UnexpectedShape(String::from(
                "submissionDetails.code is missing or empty",
            )))?;
        let question_frontend_id = details
            .question
            .and_then(|question| question.question_frontend_id)
            .filter(|id| !id.is_empty())
            .ok_or(LeetCodeClientError::UnexpectedShape(String::from(
                "submissionDetails.question.questionFrontendId is missing or empty",
            )))?;

        Ok(SubmissionDetail {
            code,
            question_frontend_id,
        })
    }
}
