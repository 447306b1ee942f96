use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, ClientBuilder, Request, StatusCode, Url};

use crate::error::TwitterApiError;
use crate::search::{SearchPage, SearchQuery};
use crate::source::SearchSource;

pub static DEFAULT_BASE_URL: &str = "https://api.twitterapi.io";
static SEARCH_PATH: &str = "twitter/tweet/advanced_search";
static API_KEY_HEADER: &str = "x-api-key";

pub struct TwitterApiClient {
    client: Client,
    api_key: HeaderValue,
    search_url: Url,
}

impl TwitterApiClient {
    /// Create a client against the default twitterapi.io host
    pub fn new(api_key: &str) -> Result<Self, TwitterApiError> {
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|_| TwitterApiError::InvalidBaseUrl {
            url: DEFAULT_BASE_URL.to_string(),
        })?;
        Self::with_base_url(api_key, &base_url)
    }

    pub fn with_base_url(api_key: &str, base_url: &Url) -> Result<Self, TwitterApiError> {
        let mut api_key =
            HeaderValue::from_str(api_key).map_err(|_| TwitterApiError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(TwitterApiError::Client)?;

        let url = format!("{}/{}", base_url.as_str().trim_end_matches('/'), SEARCH_PATH);
        let search_url = Url::parse(&url).map_err(|_| TwitterApiError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;

        Ok(Self {
            client,
            api_key,
            search_url,
        })
    }

    fn search_request(
        &self,
        query_string: &str,
        cursor: Option<&str>,
    ) -> Result<Request, TwitterApiError> {
        let mut params = vec![("query", query_string), ("queryType", "Latest")];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor));
        }

        self.client
            .get(self.search_url.clone())
            .header(API_KEY_HEADER, self.api_key.clone())
            .query(&params)
            .build()
            .map_err(|error| TwitterApiError::Request {
                query: query_string.to_string(),
                error,
            })
    }
}

fn check_status(query_string: &str, status: StatusCode) -> Result<(), TwitterApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(TwitterApiError::Status {
            query: query_string.to_string(),
            status,
        })
    }
}

fn decode_page(query_string: &str, body: &str) -> Result<SearchPage, TwitterApiError> {
    serde_json::from_str(body).map_err(|e| TwitterApiError::Decode {
        query: query_string.to_string(),
        msg: e.to_string(),
    })
}

#[async_trait]
impl SearchSource for TwitterApiClient {
    async fn search_page(
        &self,
        query: &SearchQuery,
        cursor: Option<&str>,
    ) -> Result<SearchPage, TwitterApiError> {
        let query_string = query.to_query_string();
        let request = self.search_request(&query_string, cursor)?;

        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|error| TwitterApiError::Request {
                query: query_string.clone(),
                error,
            })?;
        check_status(&query_string, resp.status())?;

        let body = resp.text().await.map_err(|error| TwitterApiError::Request {
            query: query_string.clone(),
            error,
        })?;
        decode_page(&query_string, &body)
    }
}
