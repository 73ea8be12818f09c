mod listing;
pub use self::listing::{PagedListing, Paging};

mod project;
pub use self::project::{ProjectLevel, ProjectOrdering};
