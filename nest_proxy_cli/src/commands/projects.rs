use anyhow::Result;
use clap::Args;
use nest_proxy_lib::ProxyClient;

use super::list::print_summary;
use super::params;
use crate::output::{print_items, OutputFormat};

#[derive(Args)]
pub struct ProjectsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u64,

    /// Sort field: created_at, -created_at, updated_at, -updated_at
    #[arg(long, default_value = "-created_at")]
    pub ordering: String,

    /// Project level: other, incubator, lab, production, flagship
    #[arg(long)]
    pub level: Option<String>,
}

pub async fn run(args: &ProjectsArgs, client: &ProxyClient, format: &OutputFormat) -> Result<()> {
    let p = params([
        ("page", Some(args.page.to_string())),
        ("page_size", Some(args.page_size.to_string())),
        ("ordering", Some(args.ordering.clone())),
        ("level", args.level.clone()),
    ]);

    let listing = client.projects(&p).await?;
    print_summary(&listing, "projects");
    print_items(&listing.items, format);
    Ok(())
}
