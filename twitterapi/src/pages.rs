use std::time::Duration;

use futures::Stream;

use crate::error::TwitterApiError;
use crate::search::{SearchPage, SearchQuery};
use crate::source::SearchSource;

struct FetchState {
    cursor: Option<String>,
    first: bool,
    done: bool,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            cursor: None,
            first: true,
            done: false,
        }
    }
}

/// Walk every page of `query`, following the cursor until the server reports
/// no further pages.
///
/// `delay` is slept before each request except the first. The stream ends
/// right after yielding an error.
pub fn search_pages<'a, S>(
    source: &'a S,
    query: &'a SearchQuery,
    delay: Duration,
) -> impl Stream<Item = Result<SearchPage, TwitterApiError>> + 'a
where
    S: SearchSource + ?Sized,
{
    futures::stream::unfold(FetchState::default(), move |mut state| async move {
        if state.done {
            return None;
        }

        if !state.first && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        state.first = false;

        match source.search_page(query, state.cursor.as_deref()).await {
            Ok(page) => {
                state.cursor = page.next_cursor().map(str::to_owned);
                state.done = state.cursor.is_none();
                Some((Ok(page), state))
            }
            Err(e) => {
                state.done = true;
                Some((Err(e), state))
            }
        }
    })
}
