mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_reports_missing_database() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // The test server points at a closed port
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], 503);
    assert_eq!(body["data"]["database"], "unavailable");
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"]["name"], "campus-api");
    assert!(body["data"]["endpoints"]["universities"].is_string());
    Ok(())
}

#[tokio::test]
async fn data_endpoints_fail_cleanly_without_database() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/universities", server.base_url))
        .bearer_auth(common::token_for(1))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], 503);
    assert_eq!(body["data"], serde_json::json!([]));
    Ok(())
}
