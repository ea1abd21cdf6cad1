use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::db::DbPool;
use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::types::BlogId;
use crate::repository::errors::RepositoryResult;

pub mod blog;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Half-open window `[start, end)` over the blogs ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Number of records the window can hold.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListQuery {
    pub range: Option<Range>,
}

impl BlogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, start: usize, end: usize) -> Self {
        self.range = Some(Range { start, end });
        self
    }
}

pub trait BlogReader {
    fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>>;
    /// Returns the total number of blogs together with the requested window.
    fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<(usize, Vec<Blog>)>;
}

pub trait BlogWriter {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
    fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
    fn delete_blog(&self, id: BlogId) -> RepositoryResult<()>;
}

/// Diesel backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<PooledConnection<ConnectionManager<SqliteConnection>>> {
        Ok(self.pool.get()?)
    }
}
