use url::Url;

use crate::types::{ProjectLevel, ProjectOrdering};

use super::{
    common::{PagedQuery, QueryCommon},
    Query,
};

/// Typed query for the `/projects/` listing.
///
/// Unlike [`super::ListQuery`] the ordering and level can only hold values
/// the API accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub common: QueryCommon,
    pub ordering: ProjectOrdering,
    pub level: Option<ProjectLevel>,
}

impl PagedQuery for ProjectQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
}

impl Query for ProjectQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("ordering", &self.ordering.to_string());
        if let Some(level) = self.level {
            url.query_pairs_mut()
                .append_pair("level", &level.to_string());
        }
        url
    }
}

impl ProjectQuery {
    pub fn with_ordering(mut self, ordering: ProjectOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_level(mut self, level: ProjectLevel) -> Self {
        self.level = Some(level);
        self
    }
}
