//! Submits a createPost write against the recorded deployment.

use std::path::PathBuf;

use clap::Parser;
use uuid::Uuid;

use statefold_demo::{Post, PostAction};
use statefold_sdk::{ClientConfig, DeploymentRecord, Statefold, DEFAULT_DEPLOYMENT_PATH};

#[derive(Debug, Parser)]
#[clap(name = "create-post", about = "Create a post on the deployed handler")]
struct Args {
    /// Post identifier; generated when omitted
    #[clap(name = "POST_ID")]
    post_id: Option<String>,

    /// Deployment record written by the deploy script
    #[clap(long, default_value = DEFAULT_DEPLOYMENT_PATH)]
    deployment: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let post_id = args
        .post_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let record = DeploymentRecord::load(&args.deployment)?;
    let client = Statefold::new(ClientConfig::from_env())?;

    let action = PostAction::Create {
        post: Post {
            id: post_id,
            title: "Hello world".to_string(),
            content: "My first post".to_string(),
            author: "demo".to_string(),
        },
    };
    let response = client
        .functions()
        .write(&record.function_id, &[action])
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
