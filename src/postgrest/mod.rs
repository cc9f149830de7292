pub(crate) mod matches;
pub(crate) mod members;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Result, RotaError};

const REST_PATH: &str = "rest/v1";
const MAX_ERROR_BODY: usize = 200;

/// Read-only PostgREST access to one hosted backend.
#[derive(Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Query-string parameters of a PostgREST read.
#[derive(Debug, Clone, Default)]
pub(crate) struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn select(columns: &str) -> Self {
        Self {
            params: vec![("select", columns.to_string())],
        }
    }

    fn filter(mut self, column: &'static str, op: &str, value: impl std::fmt::Display) -> Self {
        self.params.push((column, format!("{op}.{value}")));
        self
    }

    pub(crate) fn eq(self, column: &'static str, value: &str) -> Self {
        self.filter(column, "eq", value)
    }

    /// Case-sensitive substring match.
    pub(crate) fn contains(self, column: &'static str, needle: &str) -> Self {
        self.filter(column, "like", format!("*{needle}*"))
    }

    /// Case-insensitive substring match.
    pub(crate) fn icontains(self, column: &'static str, needle: &str) -> Self {
        self.filter(column, "ilike", format!("*{needle}*"))
    }

    pub(crate) fn gte(self, column: &'static str, value: impl std::fmt::Display) -> Self {
        self.filter(column, "gte", value)
    }

    pub(crate) fn lte(self, column: &'static str, value: impl std::fmt::Display) -> Self {
        self.filter(column, "lte", value)
    }

    pub(crate) fn order(mut self, spec: &str) -> Self {
        self.params.push(("order", spec.to_string()));
        self
    }

    pub(crate) fn limit(mut self, limit: usize) -> Self {
        self.params.push(("limit", limit.to_string()));
        self
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    hint: Option<String>,
}

impl RestClient {
    pub(crate) fn new(http: reqwest::Client, credentials: &Credentials) -> Self {
        Self {
            http,
            base_url: credentials.url.clone(),
            api_key: credentials.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str, query: &Query) -> Result<Url> {
        let raw = format!("{}/{REST_PATH}/{table}", self.base_url);
        Url::parse_with_params(&raw, &query.params).map_err(|e| RotaError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
    }

    /// Fetch the rows of `table` matching `query`.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, query)?;
        debug!(%url, "fetching rows");

        let response = self
            .authorize(self.http.get(url.clone()))
            .send()
            .await
            .map_err(|e| RotaError::Http {
                url: url.to_string(),
                source: e,
            })?;
        let response = check_status(url.as_str(), response).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RotaError::ResponseBody {
                url: url.to_string(),
                source: e,
            })
    }

    /// Exact row count of `table`, without transferring rows.
    ///
    /// Returns `None` when the backend does not report a total.
    pub(crate) async fn count(&self, table: &str) -> Result<Option<u64>> {
        let url = self.table_url(table, &Query::select("*").limit(1))?;
        debug!(%url, "counting rows");

        let response = self
            .authorize(self.http.head(url.clone()))
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| RotaError::Http {
                url: url.to_string(),
                source: e,
            })?;
        let response = check_status(url.as_str(), response).await?;

        Ok(response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total))
    }
}

async fn check_status(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(url, error = %err, "failed to read error body");
            String::new()
        }
    };
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            message,
            hint: Some(hint),
        }) => format!("{message} ({hint})"),
        Ok(ErrorBody { message, .. }) => message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        Err(_) => body.chars().take(MAX_ERROR_BODY).collect(),
    };

    Err(RotaError::UnexpectedStatus {
        url: url.to_owned(),
        status,
        message,
    })
}

/// Total from a `Content-Range` header such as `0-24/3573` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}
