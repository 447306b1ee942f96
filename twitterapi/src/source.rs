use async_trait::async_trait;

use crate::error::TwitterApiError;
use crate::search::{SearchPage, SearchQuery};

/// Anything that can answer a single page of an advanced search
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search_page(
        &self,
        query: &SearchQuery,
        cursor: Option<&str>,
    ) -> Result<SearchPage, TwitterApiError>;
}
