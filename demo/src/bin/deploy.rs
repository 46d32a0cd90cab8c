//! Deploys the post handler source and records the returned function id
//! for the other scripts to use.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use statefold_demo::PostState;
use statefold_sdk::{
    ClientConfig, DeploymentRecord, FunctionType, Statefold, DEFAULT_DEPLOYMENT_PATH,
};

#[derive(Debug, Parser)]
#[clap(name = "deploy", about = "Deploy the post handler and persist its function id")]
struct Args {
    /// Handler source to register with the service
    #[clap(long, default_value = "demo/handler.js")]
    source: PathBuf,

    /// Where to write the deployment record
    #[clap(long, default_value = DEFAULT_DEPLOYMENT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let source = fs::read(&args.source)
        .with_context(|| format!("failed to read handler source {}", args.source.display()))?;

    let client = Statefold::new(ClientConfig::from_env())?;
    let response = client
        .functions()
        .deploy(&source, &PostState::default(), FunctionType::JavaScript)
        .await?;

    DeploymentRecord::new(response.id.clone()).save(&args.output)?;
    tracing::info!(
        function_id = %response.id,
        record = %args.output.display(),
        "handler deployed"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
