//! Submits an updatePost write for an existing post id.

use std::path::PathBuf;

use clap::Parser;

use statefold_demo::{Post, PostAction};
use statefold_sdk::{ClientConfig, DeploymentRecord, Statefold, DEFAULT_DEPLOYMENT_PATH};

#[derive(Debug, Parser)]
#[clap(name = "update-post", about = "Update a post on the deployed handler")]
struct Args {
    /// Identifier of the post to update
    #[clap(name = "POST_ID")]
    post_id: String,

    /// Deployment record written by the deploy script
    #[clap(long, default_value = DEFAULT_DEPLOYMENT_PATH)]
    deployment: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let record = DeploymentRecord::load(&args.deployment)?;
    let client = Statefold::new(ClientConfig::from_env())?;

    let action = PostAction::Update {
        post: Post {
            id: args.post_id,
            title: "Hello world V2".to_string(),
            content: "My updated post".to_string(),
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
