use anyhow::Result;
use clap::Args;
use nest_proxy_lib::ProxyClient;

use super::list::print_summary;
use super::params;
use crate::output::{print_items, OutputFormat};

#[derive(Args)]
pub struct OrganizationsArgs {
    /// Maximum number of organizations
    #[arg(long, default_value = "50")]
    pub limit: u64,

    /// Number of organizations to skip
    #[arg(long, default_value = "0")]
    pub offset: u64,
}

pub async fn run(
    args: &OrganizationsArgs,
    client: &ProxyClient,
    format: &OutputFormat,
) -> Result<()> {
    let p = params([
        ("limit", Some(args.limit.to_string())),
        ("offset", Some(args.offset.to_string())),
    ]);

    let listing = client.organizations(&p).await?;
    print_summary(&listing, "organizations");
    print_items(&listing.items, format);
    Ok(())
}
