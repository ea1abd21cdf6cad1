//! Repository implementation for blog posts.

use diesel::prelude::*;

use crate::{
    domain::{
        blog::{Blog, NewBlog, UpdateBlog},
        types::BlogId,
    },
    models::blog::{Blog as DbBlog, NewBlog as DbNewBlog, UpdateBlog as DbUpdateBlog},
    repository::{
        BlogListQuery, BlogReader, BlogWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(rows: Vec<DbBlog>) -> RepositoryResult<Vec<Blog>> {
    rows.into_iter()
        .map(|row| Blog::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl BlogReader for DieselRepository {
    fn get_blog_by_id(&self, id: BlogId) -> RepositoryResult<Option<Blog>> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let blog = blogs::table
            .find(id.get())
            .first::<DbBlog>(&mut conn)
            .optional()?;

        blog.map(|blog| Blog::try_from(blog).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_blogs(&self, query: BlogListQuery) -> RepositoryResult<(usize, Vec<Blog>)> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;

        let total: i64 = blogs::table.count().get_result(&mut conn)?;

        let rows = match query.range {
            Some(range) if range.is_empty() => Vec::new(),
            Some(range) => blogs::table
                .order(blogs::id.asc())
                .limit(i64::try_from(range.len()).unwrap_or(i64::MAX))
                .offset(i64::try_from(range.start).unwrap_or(i64::MAX))
                .load::<DbBlog>(&mut conn)?,
            None => blogs::table
                .order(blogs::id.asc())
                .load::<DbBlog>(&mut conn)?,
        };

        Ok((total as usize, into_domain(rows)?))
    }
}

impl BlogWriter for DieselRepository {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let insertable: DbNewBlog = new_blog.into();

        let created = diesel::insert_into(blogs::table)
            .values(&insertable)
            .get_result::<DbBlog>(&mut conn)?;

        Ok(Blog::try_from(created)?)
    }

    fn update_blog(&self, id: BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateBlog = updates.into();

        let updated = diesel::update(blogs::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbBlog>(&mut conn)?;

        Ok(Blog::try_from(updated)?)
    }

    fn delete_blog(&self, id: BlogId) -> RepositoryResult<()> {
        use crate::schema::blogs;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(blogs::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
