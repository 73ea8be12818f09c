mod common;
pub use self::common::{PagedQuery, Query, QueryCommon, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

mod list;
pub use self::list::ListQuery;

mod project;
pub use self::project::ProjectQuery;

mod window;
pub use self::window::Window;
