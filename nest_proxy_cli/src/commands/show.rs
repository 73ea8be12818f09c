use anyhow::Result;
use clap::Args;
use nest_proxy_lib::{validation, ProxyClient};

use crate::output::{print_record, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Resource type, e.g. chapter or project
    pub resource: String,

    /// Record identifier (chapter or project key)
    pub id: String,
}

pub async fn run(args: &ShowArgs, client: &ProxyClient, format: &OutputFormat) -> Result<()> {
    let resource = validation::validate_resource(&args.resource)?;
    let record = client.detail(resource, &args.id).await?;
    print_record(&record, format);
    Ok(())
}
