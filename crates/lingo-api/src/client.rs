//! Async HTTP client for the Transifex REST API (JSON:API, v3).
//!
//! Auth: `Authorization: Bearer <token>`
//! Every operation is a single GET decoded into `Document<T>` or `Page<T>`.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::jsonapi::{Document, ErrorDocument, Page};
use crate::query::{self, Field, QueryParams};
use crate::transport::TransportConfig;

pub const DEFAULT_API_URL: &str = "https://rest.api.transifex.com";
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

const BODY_PREVIEW_CHARS: usize = 200;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Transifex REST API.
///
/// Immutable after construction; share it behind `&` or `Arc` across
/// tasks. Each call issues exactly one request and never retries.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization` and `Accept` as default headers on every
    /// request.
    pub fn new(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::InvalidToken {
                message: format!("invalid bearer token header value: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        // Validate early so a bad base URL fails at construction.
        Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Fetcher ──────────────────────────────────────────────────────

    /// GET `{base_url}{path}{query}` and decode a single-entity envelope.
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<Document<T>, Error> {
        self.fetch(path, query).await
    }

    /// GET `{base_url}{path}{query}` and decode a collection envelope.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<Page<T>, Error> {
        self.fetch(path, query).await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, Error> {
        let result = self.execute(path, query).await;
        if let Err(ref e) = result {
            warn!(path, error = %e, "request failed");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, Error> {
        let url = Url::parse(&format!("{}{path}{query}", self.base_url))?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        decode(status, body)
    }

    // ── Resource adapters ────────────────────────────────────────────

    /// Validate `params` and fetch one page of `path`.
    pub(crate) async fn list<T, P>(&self, path: &str, params: &P) -> Result<Page<T>, Error>
    where
        T: DeserializeOwned,
        P: QueryParams + ?Sized,
    {
        let query = params.to_query()?;
        self.get_page(path, &query).await
    }

    /// Fetch `{collection}/{id}` and unwrap the entity.
    pub(crate) async fn get_by_id<T: DeserializeOwned>(
        &self,
        collection: &str,
        field: &'static str,
        id: &str,
    ) -> Result<T, Error> {
        let path = item_path(collection, field, id)?;
        Ok(self.get_document(&path, "").await?.data)
    }

    /// Fetch `{collection}/{id}{suffix}` as a page.
    pub(crate) async fn list_related<T: DeserializeOwned>(
        &self,
        collection: &str,
        field: &'static str,
        id: &str,
        suffix: &str,
    ) -> Result<Page<T>, Error> {
        let path = item_path(collection, field, id)?;
        self.get_page(&format!("{path}{suffix}"), "").await
    }

    /// Fetch `{collection}/{id}` with extra fields (e.g. `include`).
    pub(crate) async fn get_with<T: DeserializeOwned>(
        &self,
        collection: &str,
        id_field: &'static str,
        fields: &[Field<'_>],
        id: &str,
    ) -> Result<Document<T>, Error> {
        let path = item_path(collection, id_field, id)?;
        let query = query::build(fields)?;
        self.get_document(&path, &query).await
    }
}

/// `{collection}/{id}`, rejecting an empty id before any I/O.
pub(crate) fn item_path(collection: &str, field: &'static str, id: &str) -> Result<String, Error> {
    if id.is_empty() {
        return Err(Error::MissingParameter { field });
    }
    Ok(format!("{collection}/{id}"))
}

// ── Response handling ────────────────────────────────────────────────

fn decode<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<T, Error> {
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Ok(doc) = serde_json::from_str::<ErrorDocument>(&body) {
                return Err(api_error(status, doc));
            }
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
            Err(Error::Deserialization {
                message: format!("{e} (HTTP {status}, body preview: {preview:?})"),
                body,
            })
        }
    }
}

fn api_error(status: StatusCode, doc: ErrorDocument) -> Error {
    let message = doc
        .errors
        .iter()
        .find_map(|e| e.message())
        .map_or_else(|| status.to_string(), ToOwned::to_owned);
    Error::Api {
        status: status.as_u16(),
        message,
        errors: doc.errors,
    }
}
