use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    category::RequestCategory,
    error::{TransportError, WugError},
    model::{Conditions, Forecast, ForecastTenDay, Hourly, HourlyTenDay},
    query::Query,
    transport::{DEFAULT_TIMEOUT, HttpTransport, ReqwestTransport},
};

pub const DEFAULT_BASE_URL: &str = "http://api.wunderground.com/api";

/// Weather Underground API client.
///
/// Every call is a single GET through the transport. Nothing is cached or
/// retried; failures come back to the caller as they happen.
#[derive(Debug, Clone)]
pub struct WugClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl WugClient<ReqwestTransport> {
    /// Client with a default pooled transport and the public API base URL.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_transport(ReqwestTransport::new(DEFAULT_TIMEOUT)?))
    }
}

impl<T: HttpTransport> WugClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replace the base URL, e.g. to point at a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL: `{base}/{apiKey}/{category}/q{path}`.
    pub fn request_url(&self, category: RequestCategory, query: &Query) -> String {
        self.url_with_key(category, query, query.api_key())
    }

    /// Request URL with the API key slot masked, for logging.
    fn redacted_url(&self, category: RequestCategory, query: &Query) -> String {
        self.url_with_key(category, query, "<api-key>")
    }

    fn url_with_key(&self, category: RequestCategory, query: &Query, api_key: &str) -> String {
        query.format(&format!(
            "{}/{}/{}/q%s",
            self.base_url,
            api_key,
            category.as_segment()
        ))
    }

    /// Fetch the raw body for `category`. A non-2xx status is a transport
    /// error.
    #[instrument(skip(self, query), fields(mode = %query.mode()))]
    pub async fn get(&self, category: RequestCategory, query: &Query) -> Result<Vec<u8>, WugError> {
        let url = self.request_url(category, query);
        debug!(url = %self.redacted_url(category, query), "sending request");

        let res = self
            .transport
            .get(&url)
            .await
            .map_err(|source| WugError::Transport { category, source })?;

        if !res.is_success() {
            warn!(status = res.status, "request was not successful");
            return Err(WugError::Transport {
                category,
                source: TransportError::Status {
                    status: res.status,
                    body: truncate_body(&res.body),
                },
            });
        }

        debug!(status = res.status, bytes = res.body.len(), "received response");
        Ok(res.body)
    }

    pub async fn get_raw_conditions(&self, query: &Query) -> Result<Vec<u8>, WugError> {
        self.get(RequestCategory::Conditions, query).await
    }

    pub async fn get_raw_forecast(&self, query: &Query) -> Result<Vec<u8>, WugError> {
        self.get(RequestCategory::Forecast, query).await
    }

    pub async fn get_raw_forecast_ten_day(&self, query: &Query) -> Result<Vec<u8>, WugError> {
        self.get(RequestCategory::ForecastTenDay, query).await
    }

    pub async fn get_raw_hourly(&self, query: &Query) -> Result<Vec<u8>, WugError> {
        self.get(RequestCategory::Hourly, query).await
    }

    pub async fn get_raw_hourly_ten_day(&self, query: &Query) -> Result<Vec<u8>, WugError> {
        self.get(RequestCategory::HourlyTenDay, query).await
    }

    pub async fn get_conditions(&self, query: &Query) -> Result<Conditions, WugError> {
        self.fetch(RequestCategory::Conditions, query).await
    }

    pub async fn get_forecast(&self, query: &Query) -> Result<Forecast, WugError> {
        self.fetch(RequestCategory::Forecast, query).await
    }

    pub async fn get_forecast_ten_day(&self, query: &Query) -> Result<ForecastTenDay, WugError> {
        self.fetch(RequestCategory::ForecastTenDay, query).await
    }

    pub async fn get_hourly(&self, query: &Query) -> Result<Hourly, WugError> {
        self.fetch(RequestCategory::Hourly, query).await
    }

    pub async fn get_hourly_ten_day(&self, query: &Query) -> Result<HourlyTenDay, WugError> {
        self.fetch(RequestCategory::HourlyTenDay, query).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        category: RequestCategory,
        query: &Query,
    ) -> Result<R, WugError> {
        let body = self.get(category, query).await?;
        serde_json::from_slice(&body).map_err(|source| WugError::Decode { category, source })
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 200;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > MAX {
        format!("{}...", text.chars().take(MAX).collect::<String>())
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::transport::HttpResponse;

    #[derive(Debug)]
    struct StubTransport {
        reply: Result<HttpResponse, String>,
        seen: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(url.to_string());
            match &self.reply {
                Ok(res) => Ok(res.clone()),
                Err(message) => Err(TransportError::Request(message.clone().into())),
            }
        }
    }

    #[test]
    fn request_url_layout() {
        let client = WugClient::with_transport(StubTransport::replying(200, "{}"))
            .with_base_url("http://host/api/");
        let query = Query::by_us_state_city("KEY", "ca", "san francisco");

        assert_eq!(
            client.request_url(RequestCategory::Conditions, &query),
            "http://host/api/KEY/conditions/q/CA/san_francisco.json"
        );
        assert_eq!(
            client.request_url(RequestCategory::HourlyTenDay, &Query::by_auto_ip("KEY")),
            "http://host/api/KEY/hourly10day/q/autoip.json"
        );
    }

    #[test]
    fn default_base_url_is_public_api() {
        let client = WugClient::with_transport(StubTransport::replying(200, "{}"));
        assert_eq!(
            client.request_url(RequestCategory::ForecastTenDay, &Query::by_us_zip("K", "90210")),
            "http://api.wunderground.com/api/K/forecast10day/q/90210.json"
        );
    }

    #[tokio::test]
    async fn raw_accessors_use_their_category() {
        let client = WugClient::with_transport(StubTransport::replying(200, "body"));
        let query = Query::by_airport_code("K", "SFO");

        assert_eq!(client.get_raw_conditions(&query).await.unwrap(), b"body");
        client.get_raw_forecast(&query).await.unwrap();
        client.get_raw_forecast_ten_day(&query).await.unwrap();
        client.get_raw_hourly(&query).await.unwrap();
        client.get_raw_hourly_ten_day(&query).await.unwrap();

        let segments: Vec<String> = client
            .transport
            .urls()
            .iter()
            .map(|u| u.split('/').nth(5).unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            segments,
            ["conditions", "forecast", "forecast10day", "hourly", "hourly10day"]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let client = WugClient::with_transport(StubTransport::replying(503, "unavailable"));
        let query = Query::by_auto_ip("K");

        let err = client.get_conditions(&query).await.unwrap_err();
        match err {
            WugError::Transport {
                category: RequestCategory::Conditions,
                source: TransportError::Status { status, body },
            } => {
                assert_eq!(status, 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            client.get_hourly_ten_day(&query).await,
            Err(WugError::Transport { .. })
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error_for_every_accessor() {
        let client = WugClient::with_transport(StubTransport::failing("connection refused"));
        let query = Query::by_pws_id("K", "KCASANFR70");

        assert!(matches!(client.get_conditions(&query).await, Err(WugError::Transport { .. })));
        assert!(matches!(client.get_forecast(&query).await, Err(WugError::Transport { .. })));
        assert!(matches!(
            client.get_forecast_ten_day(&query).await,
            Err(WugError::Transport { .. })
        ));
        assert!(matches!(client.get_hourly(&query).await, Err(WugError::Transport { .. })));
        assert!(matches!(
            client.get_hourly_ten_day(&query).await,
            Err(WugError::Transport { .. })
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error_but_raw_still_works() {
        let client = WugClient::with_transport(StubTransport::replying(200, "<html>nope</html>"));
        let query = Query::by_us_zip("K", "90210");

        let err = client.get_forecast(&query).await.unwrap_err();
        assert!(matches!(
            err,
            WugError::Decode {
                category: RequestCategory::Forecast,
                ..
            }
        ));
        assert_eq!(err.category(), RequestCategory::Forecast);

        let raw = client.get_raw_forecast(&query).await.unwrap();
        assert_eq!(raw, b"<html>nope</html>");
    }

    #[tokio::test]
    async fn empty_object_decodes_to_defaults() {
        let client = WugClient::with_transport(StubTransport::replying(200, "{}"));
        let query = Query::by_us_zip("K", "90210");

        let hourly = client.get_hourly(&query).await.unwrap();
        assert_eq!(hourly, Hourly::default());
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(body.as_bytes());
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn logged_url_masks_only_the_key_slot() {
        let client = WugClient::with_transport(StubTransport::replying(200, "{}"))
            .with_base_url("http://api.example.com/api");
        let query = Query::by_auto_ip("api");

        assert_eq!(
            client.request_url(RequestCategory::Conditions, &query),
            "http://api.example.com/api/api/conditions/q/autoip.json"
        );
        assert_eq!(
            client.redacted_url(RequestCategory::Conditions, &query),
            "http://api.example.com/api/<api-key>/conditions/q/autoip.json"
        );
    }

    #[test]
    fn logged_url_never_contains_the_key() {
        let client = WugClient::with_transport(StubTransport::replying(200, "{}"))
            .with_base_url("http://h/api");
        let query = Query::by_us_zip("SECRET", "90210");

        let logged = client.redacted_url(RequestCategory::Hourly, &query);
        assert_eq!(logged, "http://h/api/<api-key>/hourly/q/90210.json");
        assert!(!logged.contains("SECRET"));
    }
}
