//! Paginated blog list with delete-and-refresh.
//!
//! The controller lives on a single task. State sits in `Cell`/`RefCell` and
//! is never borrowed across an `.await`, so independent requests (the total
//! count and a page, or several page clicks) may be in flight at once. Every
//! page request takes a sequence number when issued and its result is dropped
//! if a newer page request was issued before it completed.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};

use crate::client::api::BlogApi;
use crate::client::detail;
use crate::client::excerpt::excerpt;
use crate::client::notify::{
    Confirm, DELETE_CONFIRMATION, DELETE_SUCCESS_MESSAGE, FETCH_FAILURE_MESSAGE,
    GENERIC_FAILURE_MESSAGE, Level, Notifier,
};
use crate::domain::blog::Blog;
use crate::domain::types::BlogId;
use crate::pagination::Paginated;

/// What the list currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// 0-based index of the shown page.
    pub current_page: usize,
    pub page_limit: usize,
    /// Size of the whole collection, `None` until it was loaded once.
    pub total_count: Option<usize>,
    /// Set once a total-count request has completed, successfully or not.
    pub count_settled: bool,
    pub items: Vec<Blog>,
}

impl PageState {
    fn new(page_limit: usize) -> Self {
        Self {
            current_page: 0,
            page_limit,
            total_count: None,
            count_settled: false,
            items: Vec::new(),
        }
    }
}

/// Why a page is being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOperation {
    /// Move by the given page delta.
    Navigate,
    /// Refresh after a delete; always lands on the first page.
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued while this one was in flight.
    Stale,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

/// Mutually exclusive states of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Empty,
    Populated,
}

pub struct ListController<A, C, N> {
    api: A,
    confirm: C,
    notifier: N,
    state: RefCell<PageState>,
    page_seq: Cell<u64>,
    count_seq: Cell<u64>,
}

impl<A, C, N> ListController<A, C, N>
where
    A: BlogApi,
    C: Confirm,
    N: Notifier,
{
    /// Creates a controller showing nothing yet; call [`Self::mount`] next.
    pub fn new(api: A, confirm: C, notifier: N, page_limit: usize) -> Self {
        Self {
            api,
            confirm,
            notifier,
            state: RefCell::new(PageState::new(page_limit.max(1))),
            page_seq: Cell::new(0),
            count_seq: Cell::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn current_page(&self) -> usize {
        self.state.borrow().current_page
    }

    pub fn items(&self) -> Vec<Blog> {
        self.state.borrow().items.clone()
    }

    /// A failed count request does not hide a page that did load.
    pub fn display_state(&self) -> DisplayState {
        let state = self.state.borrow();
        match state.total_count {
            Some(0) => DisplayState::Empty,
            Some(_) => DisplayState::Populated,
            None if !state.items.is_empty() => DisplayState::Populated,
            None if state.count_settled => DisplayState::Empty,
            None => DisplayState::Loading,
        }
    }

    /// The current page together with its page strip.
    pub fn page_view(&self) -> Paginated<Blog> {
        let state = self.state.borrow();
        let total_pages = match state.total_count {
            Some(total) => total.div_ceil(state.page_limit),
            // Without a count only the pages visited so far are known.
            None if !state.items.is_empty() => state.current_page + 1,
            None => 0,
        };
        Paginated::new(state.items.clone(), state.current_page + 1, total_pages)
    }

    /// Shortened description for list rows.
    pub fn excerpt<'t>(&self, text: &'t str) -> Cow<'t, str> {
        excerpt(text)
    }

    /// Loads the collection size and the first page concurrently.
    pub async fn mount(&self) -> (LoadOutcome, LoadOutcome) {
        let limit = self.state.borrow().page_limit;
        tokio::join!(
            self.load_total_count(),
            self.load_page(0, limit, 0, PageOperation::Navigate)
        )
    }

    /// Fetches the whole collection and keeps its length as the total count.
    pub async fn load_total_count(&self) -> LoadOutcome {
        let seq = self.count_seq.get() + 1;
        self.count_seq.set(seq);

        let result = self.api.fetch_all().await;

        if self.count_seq.get() != seq {
            log::debug!("Dropping stale total count");
            return LoadOutcome::Stale;
        }
        self.state.borrow_mut().count_settled = true;

        match result {
            Ok(blogs) => {
                self.state.borrow_mut().total_count = Some(blogs.len());
                LoadOutcome::Applied
            }
            Err(err) => {
                log::warn!("Failed to fetch blogs: {err}");
                self.notifier.notify(Level::Error, FETCH_FAILURE_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    /// Fetches the records in `[offset_start, offset_end)` and makes them the
    /// shown page. The page index moves by `page_delta`, or resets to 0 for
    /// [`PageOperation::Delete`]. Failures leave the state untouched.
    pub async fn load_page(
        &self,
        offset_start: usize,
        offset_end: usize,
        page_delta: isize,
        operation: PageOperation,
    ) -> LoadOutcome {
        self.fetch_page(offset_start, offset_end, page_delta, operation, true)
            .await
            .unwrap_or(LoadOutcome::Applied)
    }

    /// Shared body of [`Self::load_page`]. With `accept_empty` unset an empty
    /// window is not applied and `None` is returned.
    async fn fetch_page(
        &self,
        offset_start: usize,
        offset_end: usize,
        page_delta: isize,
        operation: PageOperation,
        accept_empty: bool,
    ) -> Option<LoadOutcome> {
        let seq = self.page_seq.get() + 1;
        self.page_seq.set(seq);

        let result = self.api.fetch_range(offset_start, offset_end).await;

        if self.page_seq.get() != seq {
            log::debug!("Dropping stale page [{offset_start}, {offset_end})");
            return Some(LoadOutcome::Stale);
        }

        match result {
            Ok(blogs) if blogs.is_empty() && !accept_empty => None,
            Ok(mut blogs) => {
                let mut state = self.state.borrow_mut();
                blogs.truncate(state.page_limit);
                state.items = blogs;
                state.current_page = match operation {
                    PageOperation::Delete => 0,
                    PageOperation::Navigate => {
                        state.current_page.saturating_add_signed(page_delta)
                    }
                };
                Some(LoadOutcome::Applied)
            }
            Err(err) => {
                log::warn!("Failed to fetch page [{offset_start}, {offset_end}): {err}");
                self.notifier.notify(Level::Error, GENERIC_FAILURE_MESSAGE);
                Some(LoadOutcome::Failed)
            }
        }
    }

    /// Moves one page forward. Returns `None` when already on the last page.
    /// While the total is unknown, an empty next window marks the last page.
    pub async fn next_page(&self) -> Option<LoadOutcome> {
        let (current, limit, total) = {
            let state = self.state.borrow();
            (state.current_page, state.page_limit, state.total_count)
        };

        let start = (current + 1) * limit;
        if total.is_some_and(|total| start >= total) {
            return None;
        }
        self.fetch_page(
            start,
            start + limit,
            1,
            PageOperation::Navigate,
            total.is_some(),
        )
        .await
    }

    /// Moves one page back. Returns `None` on the first page.
    pub async fn previous_page(&self) -> Option<LoadOutcome> {
        let (current, limit) = {
            let state = self.state.borrow();
            (state.current_page, state.page_limit)
        };

        let previous = current.checked_sub(1)?;
        let start = previous * limit;
        Some(
            self.load_page(start, start + limit, -1, PageOperation::Navigate)
                .await,
        )
    }

    /// Reloads the collection size and the shown page in place.
    pub async fn reload(&self) -> (LoadOutcome, LoadOutcome) {
        let (current, limit) = {
            let state = self.state.borrow();
            (state.current_page, state.page_limit)
        };
        let start = current * limit;
        tokio::join!(
            self.load_total_count(),
            self.load_page(start, start + limit, 0, PageOperation::Navigate)
        )
    }

    /// Asks for confirmation, deletes the blog and goes back to the first page.
    ///
    /// The refresh window is one record wider than a page; the extra record
    /// is not kept.
    pub async fn handle_delete(&self, id: BlogId) -> DeleteOutcome {
        if !self.confirm.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Declined;
        }

        if let Err(err) = self.api.delete(id).await {
            log::warn!("Failed to delete blog {id}: {err}");
            self.notifier.notify(Level::Error, GENERIC_FAILURE_MESSAGE);
            return DeleteOutcome::Failed;
        }

        self.notifier.notify(Level::Success, DELETE_SUCCESS_MESSAGE);

        let limit = self.state.borrow().page_limit;
        tokio::join!(
            self.load_page(0, limit + 1, 0, PageOperation::Delete),
            self.load_total_count()
        );
        DeleteOutcome::Deleted
    }

    /// Loads one blog for the detail view.
    pub async fn open(&self, id: BlogId) -> Option<Blog> {
        detail::load_detail(&self.api, &self.notifier, id).await
    }
}
