//! Fleet Integration API client
//!
//! Token lifecycle:
//! 1. `new` fetches a token eagerly so bad credentials fail at construction
//! 2. `ensure_token` refetches only when no token is held
//! 3. `needs_refresh` replaces the token when a response signals it is stale
//! 4. The request is retried exactly once with the new token
//!
//! Staleness is discovered reactively from responses; the token's expiry is
//! never tracked.

use common::Secret;
use fleet_schema::{Driver, FleetOrder, FleetStateLog, PortalFilter, Record, Vehicle};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::classify::{ResponseClass, classify};
use crate::config::{Credentials, CredentialsProvider};
use crate::error::{Error, Result};
use crate::request::{
    CompanyQuery, DRIVERS, Endpoint, FLEET_ORDERS, FLEET_STATE_LOGS, FleetOrdersQuery, TimeWindow,
    VEHICLES, extract_items, now_unix,
};

/// Client for the Bolt Fleet Integration API.
///
/// Owns its credentials and the current access token. Methods that may
/// replace the token take `&mut self`; one instance must not be shared
/// between concurrent tasks.
#[derive(Debug)]
pub struct FleetClient {
    http: reqwest::Client,
    credentials: Credentials,
    access_token: Option<Secret<String>>,
}

impl FleetClient {
    /// Build a client and fetch the first token.
    pub async fn new(credentials: Credentials) -> Result<Self> {
        Self::with_http_client(credentials, reqwest::Client::new()).await
    }

    /// Build a client from an injected credentials provider.
    pub async fn from_provider(provider: &impl CredentialsProvider) -> Result<Self> {
        Self::new(provider.credentials()?).await
    }

    /// Build a client on a caller-configured transport (timeouts, proxies).
    pub async fn with_http_client(credentials: Credentials, http: reqwest::Client) -> Result<Self> {
        let mut client = Self {
            http,
            credentials: credentials.validated()?,
            access_token: None,
        };
        client.ensure_token().await?;
        Ok(client)
    }

    /// The token currently held, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|token| token.expose().as_str())
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Request a fresh token. Does not store it.
    pub async fn fetch_token(&self) -> Result<String> {
        let token = fleet_auth::fetch_token(
            &self.http,
            &self.credentials.token_url,
            &self.credentials.client_id,
            &self.credentials.client_secret,
        )
        .await?;
        Ok(token)
    }

    /// Fetch and store a token if none is held. Never checks freshness.
    pub async fn ensure_token(&mut self) -> Result<()> {
        if self.access_token.is_none() {
            self.access_token = Some(Secret::new(self.fetch_token().await?));
        }
        Ok(())
    }

    /// Whether a response signals a stale token. When it does, the held
    /// token is replaced before returning.
    pub async fn needs_refresh(&mut self, status: u16, body: &str) -> Result<bool> {
        if classify(status, body) != ResponseClass::NeedsRefresh {
            return Ok(false);
        }
        warn!(status, "access token expired or invalid, refreshing");
        self.access_token = Some(Secret::new(self.fetch_token().await?));
        Ok(true)
    }

    /// Fleet orders for `company_ids`, filtered by price-review time.
    ///
    /// Missing bounds default independently: `end_ts` to now, `start_ts` to
    /// 24 hours before now.
    pub async fn get_fleet_orders(
        &mut self,
        offset: u32,
        limit: u32,
        company_ids: &[i64],
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> Result<Vec<FleetOrder>> {
        self.ensure_token().await?;
        let window = TimeWindow::resolve(start_ts, end_ts, now_unix());
        let query = FleetOrdersQuery::new(offset, limit, company_ids, window);
        self.query(FLEET_ORDERS, &query).await
    }

    /// Vehicles of one company with the given portal status.
    ///
    /// `portal_status` takes a `PortalStatus` or a raw string.
    pub async fn get_vehicles(
        &mut self,
        offset: u32,
        limit: u32,
        company_id: i64,
        portal_status: impl Into<PortalFilter>,
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> Result<Vec<Vehicle>> {
        self.ensure_token().await?;
        let window = TimeWindow::resolve(start_ts, end_ts, now_unix());
        let query = CompanyQuery::new(
            offset,
            limit,
            company_id,
            Some(portal_status.into()),
            window,
        );
        self.query(VEHICLES, &query).await
    }

    /// Drivers of one company with the given portal status.
    pub async fn get_drivers(
        &mut self,
        offset: u32,
        limit: u32,
        company_id: i64,
        portal_status: impl Into<PortalFilter>,
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> Result<Vec<Driver>> {
        self.ensure_token().await?;
        let window = TimeWindow::resolve(start_ts, end_ts, now_unix());
        let query = CompanyQuery::new(
            offset,
            limit,
            company_id,
            Some(portal_status.into()),
            window,
        );
        self.query(DRIVERS, &query).await
    }

    /// State change logs of one company. Filtered by `company_id` only,
    /// no portal status.
    pub async fn get_fleet_state_logs(
        &mut self,
        offset: u32,
        limit: u32,
        company_id: i64,
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> Result<Vec<FleetStateLog>> {
        self.ensure_token().await?;
        let window = TimeWindow::resolve(start_ts, end_ts, now_unix());
        let query = CompanyQuery::new(offset, limit, company_id, None, window);
        self.query(FLEET_STATE_LOGS, &query).await
    }

    /// POST, refresh-and-retry once, check status, map records.
    #[instrument(skip_all, fields(endpoint = endpoint.path))]
    async fn query<B, R>(&mut self, endpoint: Endpoint, body: &B) -> Result<Vec<R>>
    where
        B: Serialize + ?Sized,
        R: Record,
    {
        let (mut status, mut text) = self.post(endpoint, body).await?;

        if self.needs_refresh(status, &text).await? {
            info!("retrying request with new token");
            (status, text) = self.post(endpoint, body).await?;
        }

        if !(200..300).contains(&status) {
            error!(status, "resource request failed");
            return Err(Error::Api {
                endpoint: endpoint.path,
                status,
                body: text,
            });
        }

        let records = extract_items(&text, endpoint.list_field)
            .into_iter()
            .map(R::from_value)
            .collect::<fleet_schema::Result<Vec<R>>>()?;
        debug!(count = records.len(), "parsed records");
        Ok(records)
    }

    /// One authenticated POST. Returns status and raw body text.
    async fn post<B>(&self, endpoint: Endpoint, body: &B) -> Result<(u16, String)>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.credentials.api_url, endpoint.path);
        let token = self.access_token().unwrap_or_default();

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("{} request failed: {e}", endpoint.path)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("{} response read failed: {e}", endpoint.path)))?;
        Ok((status, text))
    }
}
