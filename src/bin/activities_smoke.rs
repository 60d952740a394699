use anyhow::{Context, Result};
use clap::Parser;
use mergington_activities::domain::model::{Directory, ErrorResponse, MessageResponse};
use mergington_activities::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use url::Url;

#[derive(Parser)]
#[command(name = "activities-smoke")]
#[command(about = "Exercise a running activities API: list, sign up, remove")]
struct Args {
    /// Base URL of the running server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Activity to sign up for
    #[arg(long, default_value = "Chess Club")]
    activity: String,

    /// Email used for the signup round trip
    #[arg(long, default_value = "smoke-test@mergington.edu")]
    email: String,
}

/// 以 path segment 方式組 URL，空白等字元會被編碼（例如 `%20`）
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("base URL cannot be a base: {}", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn report(step: &str, response: reqwest::Response, expected: StatusCode) -> Result<bool> {
    let status = response.status();
    let body = response.text().await.context("reading response body")?;
    let text = if status.is_success() {
        serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or(body)
    } else {
        serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.detail)
            .unwrap_or(body)
    };

    let ok = status == expected;
    let mark = if ok { "✅" } else { "❌" };
    println!("{} {:<28} {} {}", mark, step, status.as_u16(), text);
    Ok(ok)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let base = validate_url("base_url", &args.base_url)?;
    let client = Client::new();

    println!("🚀 Smoke testing {}", base);

    let list_url = endpoint(&base, &["activities"])?;
    let activities: Directory = client
        .get(list_url)
        .send()
        .await
        .context("GET /activities")?
        .error_for_status()?
        .json()
        .await?;
    println!("📋 {} activities:", activities.len());
    for (name, activity) in &activities {
        println!(
            "  - {}: {}/{} participants",
            name,
            activity.participants.len(),
            activity.max_participants
        );
    }

    let signup_url = endpoint(&base, &["activities", &args.activity, "signup"])?;
    let remove_url = endpoint(
        &base,
        &["activities", &args.activity, "participants", &args.email],
    )?;

    let mut all_ok = true;

    let response = client
        .post(signup_url.clone())
        .query(&[("email", &args.email)])
        .send()
        .await?;
    all_ok &= report("sign up", response, StatusCode::OK).await?;

    let response = client
        .post(signup_url)
        .query(&[("email", &args.email)])
        .send()
        .await?;
    all_ok &= report("sign up again", response, StatusCode::BAD_REQUEST).await?;

    let response = client.delete(remove_url.clone()).send().await?;
    all_ok &= report("remove", response, StatusCode::OK).await?;

    let response = client.delete(remove_url).send().await?;
    all_ok &= report("remove again", response, StatusCode::NOT_FOUND).await?;

    if !all_ok {
        anyhow::bail!("one or more smoke checks failed");
    }

    println!("🎉 All smoke checks passed");
    Ok(())
}
