//! Landing-page statistics: record counts for a few headline resources.

use nest_api::Resource;
use serde::{Deserialize, Serialize};

use crate::client::ProxyClient;

/// Headline counts shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingStats {
    pub projects: u64,
    pub members: u64,
    pub chapters: u64,
}

impl LandingStats {
    /// Reported whenever any of the counts cannot be fetched.
    pub const FALLBACK: LandingStats = LandingStats {
        projects: 100,
        members: 1000,
        chapters: 200,
    };

    /// Fetches all three counts concurrently. Never fails: a single failed
    /// lookup makes the whole result fall back to [`LandingStats::FALLBACK`].
    pub async fn fetch(client: &ProxyClient) -> LandingStats {
        let (projects, members, chapters) = tokio::join!(
            client.count(Resource::Projects),
            client.count(Resource::Members),
            client.count(Resource::Chapters),
        );

        match (projects, members, chapters) {
            (Ok(projects), Ok(members), Ok(chapters)) => LandingStats {
                projects,
                members,
                chapters,
            },
            (projects, members, chapters) => {
                for err in [projects.err(), members.err(), chapters.err()]
                    .into_iter()
                    .flatten()
                {
                    tracing::warn!("Stats lookup failed, using fallback: {}", err);
                }
                LandingStats::FALLBACK
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_object() {
        let json = serde_json::to_value(LandingStats::FALLBACK).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"projects": 100, "members": 1000, "chapters": 200})
        );
    }
}
