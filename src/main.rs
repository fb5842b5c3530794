use clap::Parser;
use sg_audit::{run, Cli, Ec2Provider, Result};
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match audit(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn audit(cli: &Cli) -> Result<()> {
    let provider = Ec2Provider::connect(cli.profile.as_deref(), cli.region.as_deref()).await;
    let groups = provider.security_groups().await?;
    let instances = provider.instances().await?;

    let mut stdout = io::stdout().lock();
    run::audit_all(&groups, &instances, cli.output_format(), &mut stdout)?;
    Ok(())
}
