use url::Url;

use crate::Resource;

use super::{
    common::{PagedQuery, QueryCommon},
    Query,
};

/// Pass-through list query for any [`Resource`].
///
/// Produces `page`, `page_size`, `ordering`, then the resource's filters in
/// declaration order. Filters that are empty or not declared for the
/// resource are never sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    resource: Resource,
    pub common: QueryCommon,
    pub ordering: Option<String>,
    filters: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            common: QueryCommon::default(),
            ordering: resource.default_ordering().map(str::to_string),
            filters: Vec::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Overrides the resource's default ordering. Empty values are ignored.
    pub fn with_ordering(mut self, ordering: &str) -> Self {
        if !ordering.is_empty() {
            self.ordering = Some(ordering.to_string());
        }
        self
    }

    /// Sets a filter value. Unknown keys and empty values are dropped.
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        let Some(slot) = self.resource.filters().iter().find(|k| **k == key) else {
            tracing::debug!("Dropping filter '{}' not declared for {}", key, self.resource);
            return self;
        };
        self.filters.retain(|(k, _)| k != slot);
        self.filters.push((slot, value.to_string()));
        self
    }

    /// Returns the value set for a filter, if any.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl PagedQuery for ListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(ordering) = &self.ordering {
            url.query_pairs_mut().append_pair("ordering", ordering);
        }
        for key in self.resource.filters() {
            if let Some(value) = self.filter(key) {
                url.query_pairs_mut().append_pair(key, value);
            }
        }
        url
    }
}
