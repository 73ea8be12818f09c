use anyhow::Result;
use nest_proxy_lib::{LandingStats, ProxyClient};

use crate::output::{print_stats, OutputFormat};

pub async fn run(client: &ProxyClient, format: &OutputFormat) -> Result<()> {
    let stats = LandingStats::fetch(client).await;
    print_stats(&stats, format);
    Ok(())
}
