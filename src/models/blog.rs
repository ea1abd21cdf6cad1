//! Diesel models representing stored blog posts.

use diesel::prelude::*;

use crate::domain::blog::{
    Blog as DomainBlog, NewBlog as DomainNewBlog, UpdateBlog as DomainUpdateBlog,
};
use crate::domain::types::{
    BlogDate, BlogDescription, BlogId, BlogTitle, ImageUrl, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::blogs)]
/// Diesel model for [`crate::domain::blog::Blog`].
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub date: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blogs)]
/// Insertable form of [`Blog`].
pub struct NewBlog<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub date: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::blogs)]
#[diesel(treat_none_as_null = true)]
/// Data used when replacing a [`Blog`] record.
pub struct UpdateBlog<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl TryFrom<Blog> for DomainBlog {
    type Error = TypeConstraintError;

    fn try_from(blog: Blog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BlogId::new(blog.id)?,
            title: BlogTitle::new(blog.title)?,
            description: BlogDescription::new(blog.description)?,
            image_url: blog.image_url.map(ImageUrl::new).transpose()?,
            date: blog.date.map(BlogDate::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewBlog> for NewBlog<'a> {
    fn from(blog: &'a DomainNewBlog) -> Self {
        Self {
            title: blog.title.as_str(),
            description: blog.description.as_str(),
            image_url: blog.image_url.as_ref().map(ImageUrl::as_str),
            date: Some(blog.date.as_str()),
        }
    }
}

impl<'a> From<&'a DomainUpdateBlog> for UpdateBlog<'a> {
    fn from(blog: &'a DomainUpdateBlog) -> Self {
        Self {
            title: blog.title.as_str(),
            description: blog.description.as_str(),
            image_url: blog.image_url.as_ref().map(ImageUrl::as_str),
            date: blog.date.as_ref().map(BlogDate::as_str),
        }
    }
}
