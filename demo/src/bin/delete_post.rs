//! Submits a deletePost write for an existing post id.

use std::path::PathBuf;

use clap::Parser;

use statefold_demo::PostAction;
use statefold_sdk::{ClientConfig, DeploymentRecord, Statefold, DEFAULT_DEPLOYMENT_PATH};

#[derive(Debug, Parser)]
#[clap(name = "delete-post", about = "Delete a post on the deployed handler")]
struct Args {
    /// Identifier of the post to delete
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

    let action = PostAction::Delete {
        post_id: args.post_id,
    };
    let response = client
        .functions()
        .write(&record.function_id, &[action])
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
