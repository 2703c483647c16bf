use leetcode_pull_libs::{
    graphql::query::PAGE_SIZE, LeetCodeClientError, SubmissionApi, SubmissionSummary,
};
use tokio::time::{self, Duration};

pub struct SubmissionCrawler<'a, A: SubmissionApi> {
    api: &'a A,
    interval: Duration,
}

impl<'a, A: SubmissionApi> SubmissionCrawler<'a, A> {
    pub fn new(api: &'a A, interval: Duration) -> Self {
        SubmissionCrawler { api, interval }
    }

    /// 提出履歴を先頭から全ページ取得するメソッド
    ///
    /// ページの取得に失敗した時点でクロールを打ち切り、それまでに取得できた分を返す。
    pub async fn crawl(&self) -> Vec<SubmissionSummary> {
        let mut submissions: Vec<SubmissionSummary> = Vec::new();
        let mut offset: usize = 0;

        loop {
            tracing::info!("Fetching submissions with offset {}...", offset);
            let page = match self.api.submission_list(offset).await {
                Ok(page) => page,
                Err(LeetCodeClientError::Unauthorized(status)) => {
                    tracing::error!(
                        "Session expired or invalid [{}]. Please try again with a valid session cookie.",
                        status
                    );
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to fetch submissions at offset {}: {}", offset, e);
                    break;
                }
            };

            let fetched = page.len();
            tracing::info!("Fetched {} submissions.", fetched);
            submissions.extend(page);

            if fetched < PAGE_SIZE {
                break;
            }

            offset += PAGE_SIZE;
            if !self.interval.is_zero() {
                time::sleep(self.interval).await;
            }
        }

        tracing::info!("Total submissions fetched: {}", submissions.len());
        submissions
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use leetcode_pull_libs::{LeetCodeClient, SessionToken};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(start: usize, count: usize) -> Value {
        let submissions: Vec<Value> = (start..start + count)
            .map(|id| {
                json!({
                    "id": id.to_string(),
                    "title": format!("Problem {}", id),
                    "lang": "python3",
                    "statusDisplay": "Accepted",
                    "timestamp": "1000"
                })
            })
            .collect();
        json!({ "data": { "submissionList": { "submissions": submissions } } })
    }

    async fn mount_page(server: &MockServer, offset: usize, body: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": { "offset": offset } })))
            .respond_with(body)
            .expect(1)
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> LeetCodeClient {
        let token = SessionToken::parse("cookie").unwrap();
        LeetCodeClient::new(&server.uri(), &token).unwrap()
    }

    #[tokio::test]
    async fn crawl_stops_on_short_page() {
        let server = MockServer::start().await;
        mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page(0, 20))).await;
        mount_page(&server, 20, ResponseTemplate::new(200).set_body_json(page(20, 20))).await;
        mount_page(&server, 40, ResponseTemplate::new(200).set_body_json(page(40, 5))).await;

        let client = client(&server);
        let crawler = SubmissionCrawler::new(&client, Duration::ZERO);
        let submissions = crawler.crawl().await;

        assert_eq!(submissions.len(), 45);
        assert_eq!(submissions.first().unwrap().id, 0);
        assert_eq!(submissions.last().unwrap().id, 44);
    }

    #[tokio::test]
    async fn crawl_requests_one_more_page_after_full_page() {
        let server = MockServer::start().await;
        mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page(0, 20))).await;
        mount_page(&server, 20, ResponseTemplate::new(200).set_body_json(page(20, 0))).await;

        let client = client(&server);
        let submissions = SubmissionCrawler::new(&client, Duration::ZERO).crawl().await;

        assert_eq!(submissions.len(), 20);
    }

    #[tokio::test]
    async fn crawl_keeps_collected_pages_on_unauthorized() {
        let server = MockServer::start().await;
        mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page(0, 20))).await;
        mount_page(&server, 20, ResponseTemplate::new(401)).await;

        let client = client(&server);
        let submissions = SubmissionCrawler::new(&client, Duration::ZERO).crawl().await;

        assert_eq!(submissions.len(), 20);
    }

    #[tokio::test]
    async fn crawl_returns_empty_on_first_page_failure() {
        let server = MockServer::start().await;
        mount_page(&server, 0, ResponseTemplate::new(502)).await;

        let client = client(&server);
        let submissions = SubmissionCrawler::new(&client, Duration::ZERO).crawl().await;

        assert!(submissions.is_empty());
    }

    #[tokio::test]
    async fn crawl_stops_on_unexpected_structure() {
        let server = MockServer::start().await;
        mount_page(&server, 0, ResponseTemplate::new(200).set_body_json(page(0, 20))).await;
        mount_page(
            &server,
            20,
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "submissionList": null } })),
        )
        .await;

        let client = client(&server);
        let submissions = SubmissionCrawler::new(&client, Duration::ZERO).crawl().await;

        assert_eq!(submissions.len(), 20);
    }
}
