//! Front-end side of the blog: the paginated list controller and the
//! channels it talks through.

pub mod api;
pub mod console;
pub mod controller;
pub mod detail;
pub mod excerpt;
pub mod notify;

pub use api::{ApiError, ApiResult, BlogApi, HttpBlogApi};
pub use controller::{DeleteOutcome, DisplayState, ListController, LoadOutcome, PageOperation};
pub use excerpt::{excerpt, excerpt_with_limit};
pub use notify::{Confirm, Level, Notifier};
