//! CLI subcommand implementations.

pub mod list;
pub mod organizations;
pub mod projects;
pub mod search;
pub mod serve;
pub mod show;
pub mod stats;

use nest_proxy_lib::Params;

/// Collects the options that were given into proxy parameters.
pub(crate) fn params<'a, I>(pairs: I) -> Params
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_skip_missing_options() {
        let p = params([("page", Some("2".to_string())), ("ordering", None)]);
        assert_eq!(p.len(), 1);
        assert_eq!(p["page"], "2");
    }
}
