mod client;
mod errors;
mod query;
mod resource;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{
    ListQuery, PagedQuery, ProjectQuery, Query, QueryCommon, Window, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
pub use self::resource::Resource;
