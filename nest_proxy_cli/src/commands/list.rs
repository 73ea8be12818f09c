use anyhow::{bail, Result};
use clap::Args;
use nest_proxy_lib::types::PagedListing;
use nest_proxy_lib::{validation, ProxyClient, Resource};
use serde_json::Value;

use super::params;
use crate::output::{print_items, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Resource to list: chapters, members, events, issues, releases, sponsors, repositories
    pub resource: String,

    /// Page number
    #[arg(long)]
    pub page: Option<u64>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Upstream ordering, e.g. -created_at or name
    #[arg(long)]
    pub ordering: Option<String>,

    /// Resource filter as key=value (repeatable), e.g. --filter country=Peru
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

pub async fn run(args: &ListArgs, client: &ProxyClient, format: &OutputFormat) -> Result<()> {
    let resource = list_resource(&args.resource)?;

    let mut p = params([
        ("page", args.page.map(|n| n.to_string())),
        ("page_size", args.page_size.map(|n| n.to_string())),
        ("ordering", args.ordering.clone()),
    ]);
    for filter in &args.filters {
        let (key, value) = parse_filter(resource, filter)?;
        p.insert(key.to_string(), value.to_string());
    }

    let listing = client.list(resource, &p).await?;
    print_summary(&listing, resource.plural());
    print_items(&listing.items, format);
    Ok(())
}

fn list_resource(name: &str) -> Result<Resource> {
    let resource = validation::validate_resource(name)?;
    if !resource.is_pass_through() {
        bail!(
            "{} are not listed page by page; use `nest-proxy {}` instead",
            resource.plural(),
            resource.plural()
        );
    }
    Ok(resource)
}

fn parse_filter(resource: Resource, raw: &str) -> Result<(&str, &str)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("filter '{}' must look like key=value", raw);
    };
    let allowed = resource.filters();
    if !allowed.iter().any(|f| *f == key) {
        if allowed.is_empty() {
            bail!("{} cannot be filtered", resource.plural());
        }
        bail!(
            "unknown filter '{}' for {}. Valid filters: {}",
            key,
            resource.plural(),
            allowed.join(", ")
        );
    }
    Ok((key, value))
}

pub(crate) fn print_summary(listing: &PagedListing<Value>, label: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        listing.current_page.unwrap_or(1),
        listing.total_pages.unwrap_or(1),
        listing.total_count,
        label
    );
}
