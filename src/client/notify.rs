//! Side channels the list controller reports through.

/// Shown after a blog was removed.
pub const DELETE_SUCCESS_MESSAGE: &str = "Blog Deleted Successfullly!!";
/// Shown when a page load or a delete fails.
pub const GENERIC_FAILURE_MESSAGE: &str = "Somerthing Went Wrong Boy";
/// Shown when the collection size cannot be loaded.
pub const FETCH_FAILURE_MESSAGE: &str = "Unable to fetch blogs";
/// Asked before a blog is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this blog?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    /// CSS-style alert class for the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "danger",
        }
    }
}

/// Toast-like notification sink.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait Notifier {
    fn notify(&self, level: Level, message: &str);
}

/// Blocking yes/no prompt.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, level: Level, message: &str) {
        (**self).notify(level, message);
    }
}

impl<T: Confirm + ?Sized> Confirm for &T {
    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}
