//! Project-specific enumerations accepted by the `/projects/` endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// OWASP project maturity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLevel {
    Other,
    Incubator,
    Lab,
    Production,
    Flagship,
}

impl std::fmt::Display for ProjectLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProjectLevel::Other => "other",
                ProjectLevel::Incubator => "incubator",
                ProjectLevel::Lab => "lab",
                ProjectLevel::Production => "production",
                ProjectLevel::Flagship => "flagship",
            }
        )
    }
}

impl FromStr for ProjectLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "other" => Ok(ProjectLevel::Other),
            "incubator" => Ok(ProjectLevel::Incubator),
            "lab" => Ok(ProjectLevel::Lab),
            "production" => Ok(ProjectLevel::Production),
            "flagship" => Ok(ProjectLevel::Flagship),
            _ => Err(()),
        }
    }
}

/// Sort keys the `/projects/` endpoint accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectOrdering {
    CreatedAt,
    /// Newest first. This is the default.
    #[default]
    MinusCreatedAt,
    UpdatedAt,
    MinusUpdatedAt,
}

impl std::fmt::Display for ProjectOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProjectOrdering::CreatedAt => "created_at",
                ProjectOrdering::MinusCreatedAt => "-created_at",
                ProjectOrdering::UpdatedAt => "updated_at",
                ProjectOrdering::MinusUpdatedAt => "-updated_at",
            }
        )
    }
}

impl FromStr for ProjectOrdering {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(ProjectOrdering::CreatedAt),
            "-created_at" => Ok(ProjectOrdering::MinusCreatedAt),
            "updated_at" => Ok(ProjectOrdering::UpdatedAt),
            "-updated_at" => Ok(ProjectOrdering::MinusUpdatedAt),
            _ => Err(()),
        }
    }
}
