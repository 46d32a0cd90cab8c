//! Fetches and prints the deployment's current post state.

use std::path::PathBuf;

use clap::Parser;

use statefold_demo::PostState;
use statefold_sdk::{ClientConfig, DeploymentRecord, Statefold, DEFAULT_DEPLOYMENT_PATH};

#[derive(Debug, Parser)]
#[clap(name = "read-posts", about = "Print the deployed handler's post state")]
struct Args {
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

    let state: PostState = client.functions().read(&record.function_id).await?;
    tracing::info!(posts = state.posts.len(), "state snapshot fetched");

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
