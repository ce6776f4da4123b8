// crates/scalar-terminal/src/network.rs

//! Backend access.
//!
//! The UI thread never awaits a request. It sends an [`ApiRequest`] to
//! the [`ApiWorker`] over a channel; the worker runs each request on its
//! own task and sends the classified [`ApiEvent`] back. In-flight
//! requests are never aborted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use scalar_core::{
    CancelOutcome, LeveragedOrder, MarketSnapshot, OrderId, PlaceOutcome, ScalarOrder,
};
use scalar_protocol::wire_types::{
    cancel_path, LeveragedOrderWire, ScalarOrderWire, MARKET_PATH, PLACE_PATH,
};
use scalar_protocol::{cancel_outcome, decode_market, place_outcome, ProtocolError};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

/// Requests from the app to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchMarket,
    PlaceLeveraged(LeveragedOrder),
    PlaceScalar(ScalarOrder),
    Cancel(OrderId),
}

/// Results from the worker back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    /// `Err` carries a display string; the app never retries.
    Market(Result<MarketSnapshot, String>),
    Placed(PlaceOutcome),
    Cancelled(CancelOutcome),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("market endpoint returned HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// The three backend endpoints.
///
/// Order calls never fail: transport problems are part of the outcome.
#[async_trait]
pub trait MarketApi: Send + Sync + 'static {
    async fn fetch_market(&self) -> Result<MarketSnapshot, ApiError>;
    async fn place_leveraged(&self, order: &LeveragedOrder) -> PlaceOutcome;
    async fn place_scalar(&self, order: &ScalarOrder) -> PlaceOutcome;
    async fn cancel(&self, order_id: &OrderId) -> CancelOutcome;
}

/// `reqwest`-backed implementation.
pub struct HttpMarketApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMarketApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(u16, String), reqwest::Error> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }

    async fn post_empty(&self, path: &str) -> Result<(u16, String), reqwest::Error> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }

    async fn place<T: Serialize + Sync>(&self, body: &T) -> PlaceOutcome {
        match self.post_json(PLACE_PATH, body).await {
            Ok((status, text)) => {
                debug!("place reply: HTTP {} {}", status, text);
                place_outcome(status, &text)
            }
            Err(e) => {
                warn!("place request failed: {}", e);
                PlaceOutcome::Unreachable
            }
        }
    }
}

#[async_trait]
impl MarketApi for HttpMarketApi {
    async fn fetch_market(&self) -> Result<MarketSnapshot, ApiError> {
        let response = self.client.get(self.url(MARKET_PATH)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(decode_market(&body)?)
    }

    async fn place_leveraged(&self, order: &LeveragedOrder) -> PlaceOutcome {
        self.place(&LeveragedOrderWire::from(order)).await
    }

    async fn place_scalar(&self, order: &ScalarOrder) -> PlaceOutcome {
        self.place(&ScalarOrderWire::from(order)).await
    }

    async fn cancel(&self, order_id: &OrderId) -> CancelOutcome {
        match self.post_empty(&cancel_path(order_id)).await {
            Ok((status, text)) => {
                debug!("cancel reply: HTTP {} {}", status, text);
                cancel_outcome(status, &text)
            }
            Err(e) => {
                warn!("cancel request for {} failed: {}", order_id, e);
                CancelOutcome::Unreachable
            }
        }
    }
}

/// Run one request to completion.
pub async fn execute<A: MarketApi + ?Sized>(api: &A, request: ApiRequest) -> ApiEvent {
    match request {
        ApiRequest::FetchMarket => {
            info!("Fetching market snapshot...");
            ApiEvent::Market(api.fetch_market().await.map_err(|e| e.to_string()))
        }
        ApiRequest::PlaceLeveraged(order) => {
            info!("Placing leveraged order: {:?}", order);
            ApiEvent::Placed(api.place_leveraged(&order).await)
        }
        ApiRequest::PlaceScalar(order) => {
            info!("Placing scalar order: {:?}", order);
            ApiEvent::Placed(api.place_scalar(&order).await)
        }
        ApiRequest::Cancel(order_id) => {
            info!("Cancelling order {}", order_id);
            ApiEvent::Cancelled(api.cancel(&order_id).await)
        }
    }
}

pub struct ApiWorker<A> {
    api: Arc<A>,
    tx: UnboundedSender<ApiEvent>,
}

impl<A: MarketApi> ApiWorker<A> {
    pub fn new(api: A, tx: UnboundedSender<ApiEvent>) -> Self {
        Self {
            api: Arc::new(api),
            tx,
        }
    }

    /// Serve requests until the app drops its sender.
    pub async fn run(self, mut rx: UnboundedReceiver<ApiRequest>) {
        while let Some(request) = rx.recv().await {
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();

            tokio::spawn(async move {
                let event = execute(api.as_ref(), request).await;
                debug!("API event: {:?}", event);
                if let Err(e) = tx.send(event) {
                    error!("Failed to deliver API event to app: {}", e);
                }
            });
        }
        debug!("request channel closed, API worker exiting");
    }
}
