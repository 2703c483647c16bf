/// Number of submissions requested per page, sent as the `$limit` variable.
/// The service caps `limit` at 20.
pub const PAGE_SIZE: usize = 20;

pub const SUBMISSION_LIST_QUERY: &str = r#"
query submissions($offset: Int!, $limit: Int!) {
  submissionList(offset: $offset, limit: $limit) {
    submissions {
      id
      title
      lang
      statusDisplay
      timestamp
    }
  }
}
"#;

pub const SUBMISSION_DETAILS_QUERY: &str = r#"
query submissionDetails($id: Int!) {
  submissionDetails(submissionId: $id) {
    code
    question {
      questionFrontendId
    }
  }
}
"#;
