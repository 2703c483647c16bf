pub mod graphql;

pub use graphql::core::{LeetCodeClient, LeetCodeClientError, SessionToken, SubmissionApi};
pub use graphql::model::{SubmissionDetail, SubmissionSummary};
