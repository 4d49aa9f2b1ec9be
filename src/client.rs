//! One blocking HTTP GET per render cycle against the recorder's status
//! endpoint, decoded and validated into room records.

use crate::{
    error::DashboardError,
    model::{RoomInfo, RoomRecord},
};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// Fetches one `/api/infos` snapshot per render cycle.
///
/// There is intentionally no request timeout: the recorder is co-located and
/// expected to be always available, and a hung upstream hangs the loop
/// rather than producing a half-rendered frame.
pub struct InfoClient {
    http: Client,
    endpoint: Url,
}

impl InfoClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Issues the GET and validates the body. Records come back in the
    /// upstream JSON object's key order, which is what row ids are assigned
    /// from.
    pub fn fetch_rooms(&self) -> Result<Vec<RoomRecord>, DashboardError> {
        let body = self
            .http
            .get(self.endpoint.clone())
            .send()?
            .error_for_status()?
            .text()?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            DashboardError::MalformedUpstreamResponse(format!("body is not valid JSON: {e}"))
        })?;
        parse_rooms(&value)
    }
}

/// Extracts `RoomInfos` and validates every entry against the wire schema.
/// Relies on serde_json's order-preserving object representation so that row
/// ids follow the payload's key order.
pub fn parse_rooms(body: &serde_json::Value) -> Result<Vec<RoomRecord>, DashboardError> {
    let rooms = body
        .get("RoomInfos")
        .ok_or_else(|| {
            DashboardError::MalformedUpstreamResponse(
                "missing top-level field `RoomInfos`".to_string(),
            )
        })?
        .as_object()
        .ok_or_else(|| {
            DashboardError::MalformedUpstreamResponse("`RoomInfos` is not an object".to_string())
        })?;

    let mut records = Vec::with_capacity(rooms.len());
    for (row_id, (key, value)) in rooms.iter().enumerate() {
        let info: RoomInfo = serde_json::from_value(value.clone()).map_err(|e| {
            DashboardError::MalformedUpstreamResponse(format!("room entry `{key}`: {e}"))
        })?;
        records.push(RoomRecord { row_id, info });
    }
    debug!(rooms = records.len(), "fetched room snapshot");
    Ok(records)
}
