use nest_api::types::{ProjectLevel, ProjectOrdering};
use nest_api::Resource;

use crate::error::ProxyError;

/// Parse a strictly positive integer, falling back to `default` when the input
/// is missing, empty, zero, or not a number.
pub fn parse_positive(input: Option<&str>, default: u64) -> u64 {
    input
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Parse a non-negative integer, falling back to `default` when the input is
/// missing, empty, or not a number.
pub fn parse_count(input: Option<&str>, default: u64) -> u64 {
    input
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Accept a project ordering the API knows, otherwise newest-first.
pub fn project_ordering(input: Option<&str>) -> ProjectOrdering {
    match input {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!("Unsupported project ordering '{}', using default", raw);
            ProjectOrdering::default()
        }),
        None => ProjectOrdering::default(),
    }
}

/// Accept a known project level (case-insensitive); anything else is dropped.
pub fn project_level(input: Option<&str>) -> Option<ProjectLevel> {
    let raw = input?;
    let level = raw.parse().ok();
    if level.is_none() {
        tracing::debug!("Ignoring unknown project level '{}'", raw);
    }
    level
}

/// Split a comma-separated tag list, dropping empty entries.
pub fn parse_tags(input: Option<&str>) -> Vec<String> {
    input
        .map(|s| {
            s.split(',')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Validate a resource name (plural or singular, case-insensitive).
pub fn validate_resource(input: &str) -> Result<Resource, ProxyError> {
    input.parse().map_err(|_| {
        let valid: Vec<&str> = Resource::ALL.iter().map(|r| r.plural()).collect();
        ProxyError::InvalidInput(format!(
            "unknown resource '{}'. Valid resources: {}",
            input,
            valid.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_falls_back_on_bad_input() {
        assert_eq!(parse_positive(Some("3"), 1), 3);
        assert_eq!(parse_positive(Some("0"), 1), 1);
        assert_eq!(parse_positive(Some("-2"), 1), 1);
        assert_eq!(parse_positive(Some("abc"), 20), 20);
        assert_eq!(parse_positive(None, 20), 20);
    }

    #[test]
    fn count_accepts_zero() {
        assert_eq!(parse_count(Some("0"), 50), 0);
        assert_eq!(parse_count(Some("x"), 50), 50);
    }

    #[test]
    fn ordering_outside_allowed_set_uses_default() {
        assert_eq!(project_ordering(Some("updated_at")), ProjectOrdering::UpdatedAt);
        assert_eq!(project_ordering(Some("-stars")), ProjectOrdering::MinusCreatedAt);
        assert_eq!(project_ordering(None), ProjectOrdering::MinusCreatedAt);
    }

    #[test]
    fn level_is_case_insensitive_and_optional() {
        assert_eq!(project_level(Some("LAB")), Some(ProjectLevel::Lab));
        assert_eq!(project_level(Some("platinum")), None);
        assert_eq!(project_level(None), None);
    }

    #[test]
    fn tags_drop_empty_entries_without_trimming() {
        assert_eq!(parse_tags(Some("dast,,ctf,")), vec!["dast", "ctf"]);
        assert_eq!(parse_tags(Some("a, b")), vec!["a", " b"]);
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn resource_names() {
        assert_eq!(validate_resource("Chapters").unwrap(), Resource::Chapters);
        let err = validate_resource("widgets").unwrap_err();
        assert!(err.to_string().contains("Valid resources: chapters"));
    }
}
