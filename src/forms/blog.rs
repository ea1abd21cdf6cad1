//! JSON payloads accepted by the `/Blogs` endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::blog::{NewBlog, UpdateBlog};
use crate::domain::types::{BlogDate, BlogDescription, BlogTitle, ImageUrl};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Body of a create or replace request.
pub struct BlogForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Optional cover image; an empty string means no image.
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Validated form content converted into domain value objects.
#[derive(Debug)]
pub struct BlogPayload {
    pub title: BlogTitle,
    pub description: BlogDescription,
    pub image_url: Option<ImageUrl>,
    pub date: Option<BlogDate>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<BlogForm> for BlogPayload {
    type Error = FormError;

    fn try_from(form: BlogForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = BlogTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?;
        let description =
            BlogDescription::new(form.description).map_err(|_| FormError::InvalidDescription)?;
        let image_url = non_blank(form.image_url)
            .map(ImageUrl::new)
            .transpose()
            .map_err(|_| FormError::InvalidImageUrl)?;
        let date = non_blank(form.date)
            .map(BlogDate::new)
            .transpose()
            .map_err(|_| FormError::InvalidDate)?;

        Ok(Self {
            title,
            description,
            image_url,
            date,
        })
    }
}

impl BlogPayload {
    /// Builds a new blog, stamping `today` when no date was supplied.
    pub fn into_new_blog(self, today: NaiveDate) -> Result<NewBlog, FormError> {
        let date = match self.date {
            Some(date) => date,
            None => BlogDate::new(today.format("%Y-%m-%d").to_string())
                .map_err(|_| FormError::InvalidDate)?,
        };
        Ok(NewBlog::new(self.title, self.description, self.image_url, date))
    }

    pub fn into_update_blog(self) -> UpdateBlog {
        UpdateBlog::new(self.title, self.description, self.image_url, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str) -> BlogForm {
        BlogForm {
            title: title.to_string(),
            description: description.to_string(),
            image_url: None,
            date: None,
        }
    }

    #[test]
    fn new_blog_defaults_date_to_today() {
        let payload = BlogPayload::try_from(form("Title", "Body")).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let blog = payload.into_new_blog(today).unwrap();

        assert_eq!(blog.date.as_str(), "2024-03-09");
        assert_eq!(blog.title.as_str(), "Title");
    }

    #[test]
    fn explicit_date_is_kept() {
        let mut input = form("Title", "Body");
        input.date = Some("March 1, 2024".to_string());
        let payload = BlogPayload::try_from(input).unwrap();

        let blog = payload
            .into_new_blog(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .unwrap();

        assert_eq!(blog.date.as_str(), "March 1, 2024");
    }

    #[test]
    fn blank_image_url_means_no_image() {
        let mut input = form("Title", "Body");
        input.image_url = Some("   ".to_string());

        let payload = BlogPayload::try_from(input).unwrap();

        assert!(payload.image_url.is_none());
    }

    #[test]
    fn invalid_image_url_is_rejected() {
        let mut input = form("Title", "Body");
        input.image_url = Some("cover.png".to_string());

        let result = BlogPayload::try_from(input);

        assert!(matches!(result, Err(FormError::InvalidImageUrl)));
    }

    #[test]
    fn empty_title_fails_validation() {
        let result = BlogPayload::try_from(form("", "Body"));
        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn whitespace_title_is_invalid() {
        let result = BlogPayload::try_from(form("   ", "Body"));
        assert!(matches!(result, Err(FormError::InvalidTitle)));
    }

    #[test]
    fn deserializes_front_end_field_names() {
        let form: BlogForm = serde_json::from_str(
            r#"{"title": "T", "description": "D", "imageURL": "https://example.com/x.png"}"#,
        )
        .unwrap();
        assert_eq!(form.image_url.as_deref(), Some("https://example.com/x.png"));
    }
}
