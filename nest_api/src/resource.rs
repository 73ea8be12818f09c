//! The catalogue of upstream resources and their per-resource defaults.

use std::str::FromStr;

/// A collection exposed by the Nest API.
///
/// Each variant carries everything a list proxy needs: the upstream path,
/// the ordering applied when the caller gives none, and the filters that may
/// be forwarded (in the order they are appended to the upstream URL).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Chapters,
    Members,
    Events,
    Issues,
    Releases,
    Sponsors,
    Repositories,
    Projects,
    Organizations,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Chapters,
        Resource::Members,
        Resource::Events,
        Resource::Issues,
        Resource::Releases,
        Resource::Sponsors,
        Resource::Repositories,
        Resource::Projects,
        Resource::Organizations,
    ];

    /// Whether the resource is listed by relaying `page` / `page_size` as given.
    ///
    /// Projects go through a validated query and organizations through a
    /// `limit` / `offset` window instead.
    pub fn is_pass_through(self) -> bool {
        !matches!(self, Resource::Projects | Resource::Organizations)
    }

    /// Upstream path relative to the versioned API root, with trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Chapters => "/chapters/",
            Resource::Members => "/members/",
            Resource::Events => "/events/",
            Resource::Issues => "/issues/",
            Resource::Releases => "/releases/",
            Resource::Sponsors => "/sponsors/",
            Resource::Repositories => "/repositories/",
            Resource::Projects => "/projects/",
            Resource::Organizations => "/organizations/",
        }
    }

    /// Ordering sent upstream when the caller supplies none.
    pub fn default_ordering(self) -> Option<&'static str> {
        match self {
            Resource::Chapters
            | Resource::Members
            | Resource::Issues
            | Resource::Repositories
            | Resource::Projects => Some("-created_at"),
            Resource::Events => Some("-start_date"),
            Resource::Releases => Some("-published_at"),
            Resource::Sponsors => Some("name"),
            Resource::Organizations => None,
        }
    }

    /// Filter keys forwarded for this resource, in URL order.
    pub fn filters(self) -> &'static [&'static str] {
        match self {
            Resource::Chapters => &["country"],
            Resource::Members => &["chapter"],
            Resource::Events => &[],
            Resource::Issues => &["organization", "repository", "state"],
            Resource::Releases => &["organization", "repository"],
            Resource::Sponsors => &["sponsor_type", "is_member"],
            Resource::Repositories => &["organization"],
            Resource::Projects => &["level"],
            Resource::Organizations => &[],
        }
    }

    /// Plural name, used in routes and list error messages.
    pub fn plural(self) -> &'static str {
        match self {
            Resource::Chapters => "chapters",
            Resource::Members => "members",
            Resource::Events => "events",
            Resource::Issues => "issues",
            Resource::Releases => "releases",
            Resource::Sponsors => "sponsors",
            Resource::Repositories => "repositories",
            Resource::Projects => "projects",
            Resource::Organizations => "organizations",
        }
    }

    /// Singular name, used in detail error messages.
    pub fn singular(self) -> &'static str {
        match self {
            Resource::Chapters => "chapter",
            Resource::Members => "member",
            Resource::Events => "event",
            Resource::Issues => "issue",
            Resource::Releases => "release",
            Resource::Sponsors => "sponsor",
            Resource::Repositories => "repository",
            Resource::Projects => "project",
            Resource::Organizations => "organization",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for Resource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Resource::ALL
            .into_iter()
            .find(|r| r.plural() == s || r.singular() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plural_and_singular_names() {
        assert_eq!("chapters".parse(), Ok(Resource::Chapters));
        assert_eq!("Repository".parse(), Ok(Resource::Repositories));
        assert_eq!("widgets".parse::<Resource>(), Err(()));
    }

    #[test]
    fn pass_through_resources() {
        let pass_through: Vec<_> = Resource::ALL
            .into_iter()
            .filter(|r| r.is_pass_through())
            .map(Resource::plural)
            .collect();
        assert_eq!(
            pass_through,
            vec!["chapters", "members", "events", "issues", "releases", "sponsors", "repositories"]
        );
    }

    #[test]
    fn every_path_is_slash_delimited() {
        for resource in Resource::ALL {
            let path = resource.path();
            assert!(path.starts_with('/') && path.ends_with('/'), "{path}");
        }
    }
}
