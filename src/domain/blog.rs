//! Blog post aggregate shared by the backend and the list controller.

use serde::{Deserialize, Serialize};

use crate::domain::types::{BlogDate, BlogDescription, BlogId, BlogTitle, ImageUrl};

/// A single blog post as stored by the backend and rendered by the front end.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub title: BlogTitle,
    pub description: BlogDescription,
    /// Optional cover image.
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<BlogDate>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewBlog {
    pub title: BlogTitle,
    pub description: BlogDescription,
    pub image_url: Option<ImageUrl>,
    pub date: BlogDate,
}

impl NewBlog {
    #[must_use]
    pub fn new(
        title: BlogTitle,
        description: BlogDescription,
        image_url: Option<ImageUrl>,
        date: BlogDate,
    ) -> Self {
        Self {
            title,
            description,
            image_url,
            date,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBlog {
    pub title: BlogTitle,
    pub description: BlogDescription,
    pub image_url: Option<ImageUrl>,
    pub date: Option<BlogDate>,
}

impl UpdateBlog {
    #[must_use]
    pub fn new(
        title: BlogTitle,
        description: BlogDescription,
        image_url: Option<ImageUrl>,
        date: Option<BlogDate>,
    ) -> Self {
        Self {
            title,
            description,
            image_url,
            date,
        }
    }
}
