mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
#[ignore = "needs the built binary and a reachable DATABASE_URL"]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = reqwest::get(server.url("/health")).await?;

    let status = res.status();
    assert!(
        status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        status
    );

    let body = res.json::<serde_json::Value>().await?;
    if status == StatusCode::OK {
        assert_eq!(body["data"]["database"], "ok", "health body: {}", body);
    } else {
        assert_eq!(body["code"], "SERVICE_UNAVAILABLE", "health body: {}", body);
    }
    Ok(())
}

#[tokio::test]
#[ignore = "needs the built binary and a reachable DATABASE_URL"]
async fn root_lists_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;

    let body = reqwest::get(server.url("/")).await?.json::<serde_json::Value>().await?;

    assert_eq!(body["success"], true);
    assert!(body["data"]["endpoints"]["forms"].is_string());
    Ok(())
}
