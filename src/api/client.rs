//! HTTP client for the mobile returns API.

use std::time::Duration;

use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{Result, ReturnsError};
use crate::list::{Page, Query};

use super::types::{
    Channel, ChannelList, CreateReturnRequest, ReturnRecord, ReturnsPage, Store, StoreList,
    decode_created, decode_envelope,
};
use super::{CatalogSource, PageSource};

/// Client for the returns, stores and channels endpoints
#[derive(Debug, Clone)]
pub struct ReturnsClient {
    client: Client,
    base_url: String,
}

impl ReturnsClient {
    /// Create a client from configuration
    ///
    /// Honors `RETURNS_API_URL` and the configured timeouts.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeouts(
            &config.base_url(),
            config.timeout(),
            config.connect_timeout(),
        )
    }

    /// Create a client with 30s connect timeout and 60s total timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeouts(base_url, Duration::from_secs(60), Duration::from_secs(30))
    }

    fn with_timeouts(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        Url::parse(base_url).map_err(|e| ReturnsError::InvalidUrl(base_url.to_string(), e))?;

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /returns?page=&limit=&search=`
    pub fn returns_url(&self, query: &Query) -> Result<Url> {
        let mut url = self.endpoint("returns")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(search) = query.search() {
                pairs.append_pair("search", search);
            }
        }
        Ok(url)
    }

    /// `GET /stores?search=` or `GET /channels?search=`
    pub fn catalog_url(&self, resource: &str, search: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint(resource)?;
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("search", search);
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ReturnsError::InvalidUrl(raw, e))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, "request failed: {e}"))?;
        let body = Self::read_body(&url, response).await?;
        decode_envelope(&body).inspect_err(|e| tracing::warn!(%url, "{e}"))
    }

    /// Body of a 2xx response; any other status is [`ReturnsError::HttpStatus`].
    async fn read_body(url: &Url, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "HTTP error");
            return Err(ReturnsError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch one page of return records
    pub async fn fetch_returns(&self, query: &Query) -> Result<ReturnsPage> {
        let url = self.returns_url(query)?;
        self.get(url).await
    }

    /// Create a return record
    ///
    /// `Ok(None)` means the server accepted the record but echoed it back in
    /// an unexpected shape.
    pub async fn create_return(
        &self,
        request: &CreateReturnRequest,
    ) -> Result<Option<ReturnRecord>> {
        let url = self.endpoint("returns")?;
        tracing::debug!(%url, tracking = %request.tracking, "POST");
        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, "request failed: {e}"))?;
        let body = Self::read_body(&url, response).await?;
        decode_created(&body).inspect_err(|e| tracing::warn!(%url, "{e}"))
    }

    pub async fn fetch_stores(&self, search: Option<&str>) -> Result<Vec<Store>> {
        let url = self.catalog_url("stores", search)?;
        let list: StoreList = self.get(url).await?;
        Ok(list.stores)
    }

    pub async fn fetch_channels(&self, search: Option<&str>) -> Result<Vec<Channel>> {
        let url = self.catalog_url("channels", search)?;
        let list: ChannelList = self.get(url).await?;
        Ok(list.channels)
    }
}

impl PageSource<ReturnRecord> for ReturnsClient {
    async fn fetch_page(&self, query: &Query) -> Result<Page<ReturnRecord>> {
        let data = self.fetch_returns(query).await?;
        Ok(Page::new(data.return_mobiles, data.pagination.total))
    }
}

impl CatalogSource<Store> for ReturnsClient {
    async fn fetch_all(&self) -> Result<Vec<Store>> {
        self.fetch_stores(None).await
    }
}

impl CatalogSource<Channel> for ReturnsClient {
    async fn fetch_all(&self) -> Result<Vec<Channel>> {
        self.fetch_channels(None).await
    }
}
