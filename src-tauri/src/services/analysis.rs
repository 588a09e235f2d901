use crate::error::AppError;
use crate::models::upload_types::{AnalysisResult, RiskLevel};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MODEL_TYPE: &str = "cnn_lung_cancer";

const PREDICTIONS: &[&str] = &["No Cancer Detected", "Suspicious Nodule", "Cancer Detected"];
const RISK_LEVELS: &[RiskLevel] = &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

/// Client for the remote CNN analysis backend. `analyze` never fails: when no
/// endpoint is configured, or the request errors out in any way, it degrades
/// to a synthesized demo result.
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: Arc<Mutex<Option<String>>>,
}

impl AnalysisClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: Arc::new(Mutex::new(endpoint)),
        }
    }

    pub async fn set_endpoint(&self, endpoint: Option<String>) {
        *self.endpoint.lock().await = endpoint;
    }

    pub async fn analyze(&self, file_name: &str, bytes: Vec<u8>) -> AnalysisResult {
        let endpoint = self.endpoint.lock().await.clone();

        if let Some(url) = endpoint {
            match self.request_analysis(&url, file_name, bytes).await {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!(
                        "analysis request for {} failed, falling back to mock: {}",
                        file_name,
                        e.message
                    );
                }
            }
        }

        mock_result(&mut rand::thread_rng())
    }

    async fn request_analysis(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("model_type", MODEL_TYPE);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("API Error: {}", response.status()).into());
        }

        Ok(response.json::<AnalysisResult>().await?)
    }
}

/// Demo result used whenever the backend is unavailable. Prediction,
/// confidence and risk level are drawn independently, matching the observed
/// demo behavior (a "Cancer Detected" label can report "low" risk).
pub fn mock_result<R: Rng>(rng: &mut R) -> AnalysisResult {
    AnalysisResult {
        prediction: PREDICTIONS[rng.gen_range(0..PREDICTIONS.len())].to_string(),
        confidence: rng.gen_range(70.0..100.0),
        risk_level: RISK_LEVELS[rng.gen_range(0..RISK_LEVELS.len())],
        processing_time: rng.gen_range(1.0..3.0),
    }
}
