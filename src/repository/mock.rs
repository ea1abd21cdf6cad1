//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::types::BlogId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BlogListQuery, BlogReader, BlogWriter};

mock! {
    pub Repository {}

    impl BlogReader for Repository {
        fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>>;
        fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<(usize, Vec<Blog>)>;
    }

    impl BlogWriter for Repository {
        fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
        fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
        fn delete_blog(&self, id: BlogId) -> RepositoryResult<()>;
    }
}
