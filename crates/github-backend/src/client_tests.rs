//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use explorer_core::{ExplorerError, GitHubApi};
    use std::time::Duration;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock GitHub repo response
    fn mock_github_repo(full_name: &str) -> serde_json::Value {
        let (owner, name) = full_name.split_once('/').unwrap();
        serde_json::json!({
            "id": 12345,
            "name": name,
            "full_name": full_name,
            "description": "Test repository",
            "html_url": format!("https://github.com/{}", full_name),
            "owner": {
                "login": owner,
                "id": 1,
                "avatar_url": format!("https://avatars.githubusercontent.com/{}", owner)
            },
            "stargazers_count": 1500,
            "forks_count": 230,
            "open_issues": 42
        })
    }

    /// Helper to create a mock GitHub issue response
    fn mock_github_issue(number: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 1000 + number,
            "number": number,
            "title": title,
            "html_url": format!("https://github.com/owner/repo/issues/{}", number),
            "state": "open",
            "user": {"login": "reporter", "id": 2},
            "pull_request": null
        })
    }

    /// Helper to create a pull request as returned by the issues endpoint
    fn mock_github_pr(number: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 2000 + number,
            "number": number,
            "title": title,
            "html_url": format!("https://github.com/owner/repo/pull/{}", number),
            "state": "open",
            "user": {"login": "developer", "id": 3},
            "pull_request": {
                "url": "https://api.github.com/repos/owner/repo/pulls/99"
            }
        })
    }

    #[tokio::test]
    async fn test_get_repo() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .and(header("Accept", "application/vnd.github+json"))
            .and(header_exists("User-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_github_repo("vuejs/vue")))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let repo = client.get_repo("vuejs/vue").unwrap();

        assert_eq!(repo.full_name, "vuejs/vue");
        assert_eq!(repo.owner.login, "vuejs");
        assert_eq!(repo.stargazers_count, 1500);
        assert_eq!(repo.forks_count, 230);
        assert_eq!(repo.open_issues, 42);
    }

    #[tokio::test]
    async fn test_no_authorization_header_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_github_repo("vuejs/vue")))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        client.get_repo("vuejs/vue").unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_github_repo("vuejs/vue")))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&format!("{}/", mock_server.uri()));
        assert!(client.get_repo("vuejs/vue").is_ok());
    }

    #[tokio::test]
    async fn test_list_issues_keeps_pull_requests() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_issue(1, "Real issue"),
                mock_github_pr(99, "A pull request"),
                mock_github_issue(2, "Another issue")
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let issues = client.list_issues("owner/repo").unwrap();

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].number, 1);
        assert_eq!(issues[1].number, 99);
        assert_eq!(issues[1].title, "A pull request");
        assert_eq!(issues[2].number, 2);
    }

    #[tokio::test]
    async fn test_trait_list_issues_returns_every_entry() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_issue(1, "Real issue"),
                mock_github_pr(5, "A pull request")
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let issues = GitHubApi::list_issues(&client, "owner/repo").unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].html_url, "https://github.com/owner/repo/pull/5");
        assert_eq!(issues[1].user.login, "developer");
    }

    #[tokio::test]
    async fn test_slow_response_is_awaited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(1500))
                    .set_body_json(mock_github_repo("vuejs/vue")),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        assert_eq!(client.get_repo("vuejs/vue").unwrap().full_name, "vuejs/vue");
    }

    #[tokio::test]
    async fn test_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/nobody/nothing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.get_repo("nobody/nothing");

        assert!(matches!(result, Err(GitHubError::NotFound(p)) if p == "repos/nobody/nothing"));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({"message": "API rate limit exceeded"})),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.get_repo("vuejs/vue");

        assert!(matches!(result, Err(GitHubError::RateLimited)));
    }

    #[tokio::test]
    async fn test_api_error_uses_github_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "Server Error"})),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.get_repo("vuejs/vue");

        match result {
            Err(GitHubError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.full_name)),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/vuejs/vue"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.get_repo("vuejs/vue");

        assert!(matches!(result, Err(GitHubError::Parse(_))));
    }

    #[tokio::test]
    async fn test_trait_get_repository_returns_summary() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mock_github_repo("facebook/react")),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let api: &dyn GitHubApi = &client;

        let repo = api.get_repository("facebook/react").unwrap();
        assert_eq!(repo.full_name, "facebook/react");
        assert_eq!(repo.description.as_deref(), Some("Test repository"));

        let details = api.get_repository_details("facebook/react").unwrap();
        assert_eq!(details.stargazers_count, 1500);
        assert_eq!(details.html_url, "https://github.com/facebook/react");
    }

    #[tokio::test]
    async fn test_trait_list_issues_converts_authors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_issue(7, "Crash on start")
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let issues = GitHubApi::list_issues(&client, "owner/repo").unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, 1007);
        assert_eq!(issues[0].user.login, "reporter");
        assert_eq!(issues[0].html_url, "https://github.com/owner/repo/issues/7");
    }

    #[tokio::test]
    async fn test_trait_maps_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.get_repository("not-a-repo");

        assert!(matches!(result, Err(ExplorerError::RepositoryNotFound(_))));
    }
}
