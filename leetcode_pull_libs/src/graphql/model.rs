use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Request body sent to the GraphQL endpoint.
#[derive(Serialize, Debug)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GraphQLError {
    pub message: String,
}

/// Envelope of every GraphQL response.
///
/// `data` is absent (or `null`) when the query failed on the server side, in which case
/// `errors` usually carries the reason.
#[derive(Serialize, Deserialize, Debug)]
pub struct GraphQLResponse<D> {
    pub data: Option<D>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<D> GraphQLResponse<D> {
    pub fn error_message(&self) -> String {
        self.errors
            .as_ref()
            .map(|errors| {
                errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .collect::<Vec<&str>>()
                    .join("; ")
            })
            .unwrap_or_default()
    }
}

/// One row of the submission history. The service encodes `id` and `timestamp` as strings,
/// so both string and number forms are accepted.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSummary {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    pub title: String,
    pub lang: String,
    #[serde(alias = "statusDisplay")]
    pub status_display: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionList {
    pub submissions: Option<Vec<SubmissionSummary>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionListData {
    #[serde(alias = "submissionList")]
    pub submission_list: Option<SubmissionList>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuestionInfo {
    #[serde(alias = "questionFrontendId")]
    pub question_frontend_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionDetails {
    pub code: Option<String>,
    pub question: Option<QuestionInfo>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionDetailsData {
    #[serde(alias = "submissionDetails")]
    pub submission_details: Option<SubmissionDetails>,
}

/// Source code of a submission together with the public identifier of its problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDetail {
    pub code: String,
    pub question_frontend_id: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_summary_with_string_encoded_numbers() {
        let json = r#"{"id":"1024","title":"Two Sum","lang":"python3","statusDisplay":"Accepted","timestamp":"1690000000"}"#;
        let summary: SubmissionSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.id, 1024);
        assert_eq!(summary.timestamp, 1690000000);
        assert_eq!(summary.status_display, "Accepted");
    }

    #[test]
    fn deserialize_summary_with_numbers() {
        let json = r#"{"id":1024,"title":"Two Sum","lang":"python3","statusDisplay":"Accepted","timestamp":1690000000}"#;
        let summary: SubmissionSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.id, 1024);
        assert_eq!(summary.timestamp, 1690000000);
    }

    #[test]
    fn deserialize_response_without_data() {
        let json = r#"{"data":null,"errors":[{"message":"not logged in"},{"message":"retry"}]}"#;
        let response: GraphQLResponse<SubmissionListData> = serde_json::from_str(json).unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.error_message(), "not logged in; retry");
    }
}
