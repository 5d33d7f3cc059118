use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info, warn};

use nc_core::inspect::VisualLayers;
use nc_core::model_info::ModelInfo;
use nc_core::ports::{
    ClassificationPort, ModelInfoPort, ReferenceImage, ReferenceImagePort, ServerHistoryPort,
    TransportError, VisualLayersPort,
};
use nc_core::scan::MimeType;
use nc_core::{ClassificationResult, ScanRequest};

use super::dto::{ErrorDto, PredictDto, VisualsDto};

const USER_AGENT: &str = concat!("notecheck/", env!("CARGO_PKG_VERSION"));

const PREDICT_PATH: &str = "/predict";
const ANALYZE_VISUALS_PATH: &str = "/analyze_visuals";
const MODEL_INFO_PATH: &str = "/model_info";
const HISTORY_PATH: &str = "/history";
/// Older service builds only expose this name.
const LEGACY_HISTORY_PATH: &str = "/get_history";
const CLEAR_HISTORY_PATH: &str = "/clear_history";
const REFERENCE_IMAGE_PATH: &str = "/static/reference.jpg";

/// One client for every endpoint the classification service exposes.
pub struct HttpScanService {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpScanService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("build http client failed")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(%base_url, ?timeout, "classification service client ready");

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Network(err.to_string())
        }
    }

    /// Non-2xx becomes `Endpoint`, carrying the `{error}` text when present.
    async fn check_status(response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorDto>(&body)
            .map(|dto| dto.error)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    body
                }
            });

        Err(TransportError::Endpoint {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, TransportError> {
        let response = Self::check_status(response).await?;
        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }

    async fn get(&self, path: &str) -> Result<Response, TransportError> {
        self.client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))
    }
}

#[async_trait]
impl ClassificationPort for HttpScanService {
    async fn classify(&self, request: &ScanRequest) -> Result<ClassificationResult, TransportError> {
        let part = Part::bytes(request.image().to_vec())
            .file_name(request.file_name().to_string())
            .mime_str(request.mime_type().as_str())
            .map_err(|e| TransportError::Rejected(format!("invalid content type: {e}")))?;
        let form = Form::new()
            .part("file", part)
            .text("context", request.context().to_string());

        debug!(
            file_name = request.file_name(),
            size_bytes = request.size_bytes(),
            context = %request.context(),
            "posting image for classification"
        );

        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let dto: PredictDto = self.read_json(response).await?;
        let result = dto.into_result()?;
        info!(
            label = result.label.as_str(),
            confidence = result.confidence.value(),
            server_filename = %result.server_filename,
            "classification received"
        );
        Ok(result)
    }
}

#[async_trait]
impl VisualLayersPort for HttpScanService {
    async fn analyze_visuals(&self, server_filename: &str) -> Result<VisualLayers, TransportError> {
        let response = self
            .client
            .post(self.url(ANALYZE_VISUALS_PATH))
            .json(&json!({ "filename": server_filename }))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let dto: VisualsDto = self.read_json(response).await?;
        dto.into_layers()
    }
}

#[async_trait]
impl ModelInfoPort for HttpScanService {
    async fn model_info(&self) -> Result<ModelInfo, TransportError> {
        let response = self.get(MODEL_INFO_PATH).await?;
        self.read_json(response).await
    }
}

#[async_trait]
impl ServerHistoryPort for HttpScanService {
    async fn list(&self) -> Result<Vec<ClassificationResult>, TransportError> {
        let mut response = self.get(HISTORY_PATH).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("history endpoint missing, trying legacy path");
            response = self.get(LEGACY_HISTORY_PATH).await?;
        }

        let dtos: Vec<PredictDto> = self.read_json(response).await?;
        let total = dtos.len();
        let entries: Vec<ClassificationResult> = dtos
            .into_iter()
            .filter_map(|dto| match dto.into_result() {
                Ok(result) => Some(result),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable server history entry");
                    None
                }
            })
            .collect();

        debug!(total, kept = entries.len(), "server history fetched");
        Ok(entries)
    }

    async fn clear(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.url(CLEAR_HISTORY_PATH))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::check_status(response).await?;
        info!("server history cleared");
        Ok(())
    }
}

#[async_trait]
impl ReferenceImagePort for HttpScanService {
    async fn load_reference(&self) -> Result<ReferenceImage, TransportError> {
        let response = Self::check_status(self.get(REFERENCE_IMAGE_PATH).await?).await?;

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
            .filter(|value| value.starts_with("image/"))
            .map(MimeType::from)
            .unwrap_or_else(|| MimeType::from(MimeType::JPEG));

        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        if bytes.is_empty() {
            return Err(TransportError::MalformedResponse(
                "reference image is empty".to_string(),
            ));
        }

        Ok(ReferenceImage { bytes, mime_type })
    }
}
