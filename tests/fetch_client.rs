use github_repo_browser::error::RepoBrowserError;
use github_repo_browser::fetch::GitHubClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one canned HTTP response on an ephemeral port and return
/// the base URL to point the client at.
async fn serve_once(status_line: &'static str, body: &'static str) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_client_creation() {
    let client = GitHubClient::new();
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_fetch_decodes_repository_array() -> anyhow::Result<()> {
    let body = r#"[
        {"name":"Hello-World","description":"My first repository","stargazers_count":80},
        {"name":"Spoon-Knife","description":null,"stargazers_count":12}
    ]"#;
    let base_url = serve_once("200 OK", body).await?;
    let client = GitHubClient::with_base_url(base_url)?;

    let repos = client.fetch_user_repos("octocat").await?;

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "Hello-World");
    assert_eq!(repos[0].stargazers_count, 80);
    assert_eq!(repos[1].name, "Spoon-Knife");
    assert!(repos[1].description.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetch_object_body_is_json_error() -> anyhow::Result<()> {
    // A 200 with a non-array body must surface as a decode failure.
    let base_url = serve_once("200 OK", r#"{"message":"unexpected"}"#).await?;
    let client = GitHubClient::with_base_url(base_url)?;

    let result = client.fetch_user_repos("octocat").await;

    match result.unwrap_err() {
        RepoBrowserError::JsonError(_) => {}
        other => panic!("Expected JsonError, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_unknown_user_is_not_found() -> anyhow::Result<()> {
    let base_url = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await?;
    let client = GitHubClient::with_base_url(base_url)?;

    let result = client.fetch_user_repos("no-such-user-xyz").await;

    match result.unwrap_err() {
        RepoBrowserError::NotFound(username) => assert_eq!(username, "no-such-user-xyz"),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_server_error_is_api_error() -> anyhow::Result<()> {
    let base_url = serve_once("500 Internal Server Error", "boom").await?;
    let client = GitHubClient::with_base_url(base_url)?;

    let result = client.fetch_user_repos("octocat").await;

    match result.unwrap_err() {
        RepoBrowserError::ApiError(message) => {
            assert!(message.contains("500"), "message was: {}", message);
            assert!(message.contains("boom"), "message was: {}", message);
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() -> anyhow::Result<()> {
    // Bind then drop the listener so the port is closed by the time the
    // client connects.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = GitHubClient::with_base_url(format!("http://{}", addr))?;
    let result = client.fetch_user_repos("octocat").await;

    match result.unwrap_err() {
        RepoBrowserError::NetworkError(_) => {}
        other => panic!("Expected NetworkError, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_fetch_live_github_user() {
    let client = GitHubClient::new().expect("Failed to create client");

    let repos = client
        .fetch_user_repos("octocat")
        .await
        .expect("Failed to fetch repositories");

    assert!(!repos.is_empty(), "octocat has public repositories");
}
