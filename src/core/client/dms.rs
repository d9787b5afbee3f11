//! Client for the monitoring backend (DMS).
//!
//! `DmsClient` is the seam the report services are written against; the
//! reqwest-backed `HttpDmsClient` is the production implementation and
//! tests substitute a mock. A failed or malformed response is always a
//! tagged `ReportError`, never a silent null.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use tracing::debug;

use crate::core::client::messages::{
    AlarmCountResponse, AlarmDistributionRequest, AlarmDistributionResponse, AlarmStateResponse,
    ElementInfo, ServiceInfo, TopAlarmRequest,
};
use crate::errors::ReportError;

#[async_trait]
pub trait DmsClient: Send + Sync {
    /// Executes one planned historical query and returns its series.
    async fn alarm_distribution(
        &self,
        req: &AlarmDistributionRequest,
    ) -> Result<AlarmDistributionResponse, ReportError>;

    /// Broadcast query: top alarm-event counts, one response per object.
    async fn top_alarm_counts(
        &self,
        req: &TopAlarmRequest,
    ) -> Result<Vec<AlarmCountResponse>, ReportError>;

    /// Broadcast query: top alarm-state percentages, one response per object.
    async fn top_alarm_states(
        &self,
        req: &TopAlarmRequest,
    ) -> Result<Vec<AlarmStateResponse>, ReportError>;

    async fn element_info(
        &self,
        agent_id: i32,
        element_id: i32,
    ) -> Result<ElementInfo, ReportError>;

    async fn service_info(
        &self,
        agent_id: i32,
        service_id: i32,
    ) -> Result<ServiceInfo, ReportError>;
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct HttpDmsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDmsClient {
    /// Builds a client from `ALARMREPORT_DMS_URL` and the optional
    /// `ALARMREPORT_DMS_TIMEOUT_SECS` override.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("ALARMREPORT_DMS_URL")?;
        let timeout = env::var("ALARMREPORT_DMS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url, Duration::from_secs(timeout))
    }

    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        debug!("DMS client initialized for {base_url}");
        Ok(HttpDmsClient { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ReportError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| ReportError::Backend(err.to_string()))?;
        Self::decode(path, response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ReportError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| ReportError::Backend(err.to_string()))?;
        Self::decode(path, response).await
    }

    async fn decode<R: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<R, ReportError> {
        match response.status() {
            StatusCode::NOT_FOUND => Err(ReportError::NotFound(path.to_string())),
            status if !status.is_success() => Err(ReportError::Backend(format!(
                "{path} returned {status}"
            ))),
            _ => response
                .json()
                .await
                .map_err(|err| ReportError::Backend(format!("{path}: {err}"))),
        }
    }
}

#[async_trait]
impl DmsClient for HttpDmsClient {
    async fn alarm_distribution(
        &self,
        req: &AlarmDistributionRequest,
    ) -> Result<AlarmDistributionResponse, ReportError> {
        self.post_json("reports/alarms/distribution", req).await
    }

    async fn top_alarm_counts(
        &self,
        req: &TopAlarmRequest,
    ) -> Result<Vec<AlarmCountResponse>, ReportError> {
        self.post_json("reports/alarms/counts", req).await
    }

    async fn top_alarm_states(
        &self,
        req: &TopAlarmRequest,
    ) -> Result<Vec<AlarmStateResponse>, ReportError> {
        self.post_json("reports/alarms/states", req).await
    }

    async fn element_info(
        &self,
        agent_id: i32,
        element_id: i32,
    ) -> Result<ElementInfo, ReportError> {
        self.get_json(&format!("elements/{agent_id}/{element_id}"))
            .await
    }

    async fn service_info(
        &self,
        agent_id: i32,
        service_id: i32,
    ) -> Result<ServiceInfo, ReportError> {
        self.get_json(&format!("services/{agent_id}/{service_id}"))
            .await
    }
}
