use anyhow::Result;
use clap::Args;
use nest_proxy_lib::{ProxyClient, SearchRequest};

use super::params;
use crate::output::{print_items, print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in project names and descriptions
    pub query: Option<String>,

    /// Comma-separated topics; a project matches if it has any of them
    #[arg(long)]
    pub tags: Option<String>,

    /// Sort order: relevance, popularity, recent
    #[arg(long, default_value = "relevance")]
    pub sort: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u64,
}

pub async fn run(args: &SearchArgs, client: &ProxyClient, format: &OutputFormat) -> Result<()> {
    let request = SearchRequest::from_params(&params([
        ("q", args.query.clone()),
        ("tags", args.tags.clone()),
        ("sort", Some(args.sort.clone())),
        ("page", Some(args.page.to_string())),
        ("limit", Some(args.limit.to_string())),
    ]));

    let results = client.search_projects(&request).await?;
    match format {
        OutputFormat::Json => print_json(&results),
        _ => {
            eprintln!(
                "Page {} ({} matching projects, showing {})",
                results.page,
                results.total,
                results.data.len()
            );
            print_items(&results.data, format);
        }
    }
    Ok(())
}
