#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/quiz-api-rust");
        cmd.arg("serve")
            .env("API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // DATABASE_URL comes from the inherited environment or .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Login that will not collide with earlier runs against the same database
pub fn unique_login(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Sign up a fresh user and return a bearer token for it
pub async fn signed_in_user(server: &TestServer, prefix: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let credentials = json!({ "login": unique_login(prefix), "password": "e2e-password" });

    let res = client
        .post(server.url("/api/v1/auth/signup"))
        .json(&credentials)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "signup failed: {}", res.status());

    let body: Value = client
        .post(server.url("/api/v1/auth/signin"))
        .json(&credentials)
        .send()
        .await?
        .json()
        .await?;

    body["data"]["token"]
        .as_str()
        .map(str::to_string)
        .context("signin response carried no token")
}
