//! Services backing the `/Blogs` collection.

use chrono::Utc;

use crate::domain::blog::Blog;
use crate::domain::types::BlogId;
use crate::dto::api::{BlogsQuery, BlogsResponse};
use crate::forms::blog::{BlogForm, BlogPayload};
use crate::repository::{BlogListQuery, BlogReader, BlogWriter};
use crate::services::{ServiceError, ServiceResult};

/// Translates json-server window parameters into a repository query.
fn build_list_query(params: &BlogsQuery) -> BlogListQuery {
    let end = params.end.or_else(|| {
        params
            .limit
            .map(|limit| params.start.unwrap_or(0).saturating_add(limit))
    });

    match (params.start, end) {
        (None, None) => BlogListQuery::new(),
        (start, end) => BlogListQuery::new().range(start.unwrap_or(0), end.unwrap_or(usize::MAX)),
    }
}

/// Parses a path identifier, treating non-positive values as missing records.
fn parse_id(id: i32) -> ServiceResult<BlogId> {
    BlogId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Returns the requested window of blogs along with the collection size.
pub fn list_blogs<R>(repo: &R, params: BlogsQuery) -> ServiceResult<BlogsResponse>
where
    R: BlogReader + ?Sized,
{
    let (total, blogs) = repo.list_blogs(build_list_query(&params))?;

    Ok(BlogsResponse { total, blogs })
}

/// Loads a single blog for the detail view.
pub fn get_blog<R>(repo: &R, id: i32) -> ServiceResult<Blog>
where
    R: BlogReader + ?Sized,
{
    let id = parse_id(id)?;

    repo.get_blog_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the form and stores a new blog.
pub fn create_blog<R>(repo: &R, form: BlogForm) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    let payload = BlogPayload::try_from(form)?;
    let new_blog = payload.into_new_blog(Utc::now().date_naive())?;

    repo.create_blog(&new_blog).map_err(|err| {
        log::error!("Failed to create a blog: {err}");
        ServiceError::from(err)
    })
}

/// Validates the form and replaces the content of an existing blog.
pub fn update_blog<R>(repo: &R, id: i32, form: BlogForm) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    let id = parse_id(id)?;
    let updates = BlogPayload::try_from(form)?.into_update_blog();

    repo.update_blog(id, &updates).map_err(ServiceError::from)
}

/// Removes a blog from the collection.
pub fn delete_blog<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: BlogWriter + ?Sized,
{
    let id = parse_id(id)?;

    repo.delete_blog(id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{BlogDescription, BlogTitle};
    use crate::repository::Range;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn build_blog(id: i32) -> Blog {
        Blog {
            id: BlogId::new(id).expect("valid blog id"),
            title: BlogTitle::new(format!("Blog #{id}")).expect("valid title"),
            description: BlogDescription::new(format!("Body #{id}")).expect("valid body"),
            image_url: None,
            date: None,
        }
    }

    fn form(title: &str) -> BlogForm {
        BlogForm {
            title: title.to_string(),
            description: "Body".to_string(),
            image_url: None,
            date: None,
        }
    }

    #[test]
    fn list_without_window_requests_whole_collection() {
        let mut repo = MockRepository::new();
        repo.expect_list_blogs()
            .withf(|query| query.range.is_none())
            .times(1)
            .returning(|_| Ok((2, vec![build_blog(1), build_blog(2)])));

        let response = list_blogs(&repo, BlogsQuery::default()).expect("should list");

        assert_eq!(response.total, 2);
        assert_eq!(response.blogs.len(), 2);
    }

    #[test]
    fn list_passes_start_and_end() {
        let mut repo = MockRepository::new();
        repo.expect_list_blogs()
            .withf(|query| query.range == Some(Range { start: 5, end: 10 }))
            .times(1)
            .returning(|_| Ok((12, vec![build_blog(6)])));

        let params = BlogsQuery {
            start: Some(5),
            end: Some(10),
            limit: None,
        };
        let response = list_blogs(&repo, params).expect("should list");

        assert_eq!(response.total, 12);
    }

    #[test]
    fn limit_replaces_missing_end() {
        let params = BlogsQuery {
            start: Some(3),
            end: None,
            limit: Some(4),
        };
        assert_eq!(
            build_list_query(&params).range,
            Some(Range { start: 3, end: 7 })
        );
    }

    #[test]
    fn end_without_start_counts_from_zero() {
        let params = BlogsQuery {
            start: None,
            end: Some(5),
            limit: None,
        };
        assert_eq!(
            build_list_query(&params).range,
            Some(Range { start: 0, end: 5 })
        );
    }

    #[test]
    fn start_without_end_is_open_ended() {
        let params = BlogsQuery {
            start: Some(8),
            end: None,
            limit: None,
        };
        assert_eq!(
            build_list_query(&params).range,
            Some(Range {
                start: 8,
                end: usize::MAX
            })
        );
    }

    #[test]
    fn get_missing_blog_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_blog_by_id().times(1).returning(|_| Ok(None));

        assert!(matches!(get_blog(&repo, 42), Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_with_non_positive_id_skips_repository() {
        let mut repo = MockRepository::new();
        repo.expect_get_blog_by_id().times(0);

        assert!(matches!(get_blog(&repo, 0), Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_rejects_invalid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_blog().times(0);

        let result = create_blog(&repo, form(""));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_stamps_date_and_persists() {
        let mut repo = MockRepository::new();
        repo.expect_create_blog()
            .withf(|new_blog| new_blog.title.as_str() == "Fresh" && !new_blog.date.is_empty())
            .times(1)
            .returning(|_| Ok(build_blog(9)));

        let created = create_blog(&repo, form("Fresh")).expect("should create");

        assert_eq!(created.id.get(), 9);
    }

    #[test]
    fn update_missing_blog_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_blog()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        assert!(matches!(
            update_blog(&repo, 3, form("Renamed")),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn delete_forwards_identifier() {
        let mut repo = MockRepository::new();
        repo.expect_delete_blog()
            .withf(|id| id.get() == 7)
            .times(1)
            .returning(|_| Ok(()));

        delete_blog(&repo, 7).expect("should delete");
    }

    #[test]
    fn delete_database_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_delete_blog()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("locked".to_string())));

        assert!(matches!(
            delete_blog(&repo, 7),
            Err(ServiceError::Internal(_))
        ));
    }
}
