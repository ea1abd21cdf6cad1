//! Single blog lookup for the detail view.

use crate::client::api::BlogApi;
use crate::client::notify::{GENERIC_FAILURE_MESSAGE, Level, Notifier};
use crate::domain::blog::Blog;
use crate::domain::types::BlogId;

/// Fetches one blog; on failure the user is notified and nothing is returned.
pub async fn load_detail<A, N>(api: &A, notifier: &N, id: BlogId) -> Option<Blog>
where
    A: BlogApi + ?Sized,
    N: Notifier + ?Sized,
{
    match api.fetch_one(id).await {
        Ok(blog) => Some(blog),
        Err(err) => {
            log::warn!("Failed to fetch blog {id}: {err}");
            notifier.notify(Level::Error, GENERIC_FAILURE_MESSAGE);
            None
        }
    }
}
