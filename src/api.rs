use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::thread;
use thiserror::Error;

/// Wire body of `POST /api/predict/`. Field names follow the service schema,
/// which is why they diverge from the catalog's (`battery_kwh` travels as
/// `battery_capacity_kWh` and so on). Integer-ish values stay floats; the
/// service accepts them and the original client never sent anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub brand: String,
    pub model: String,
    pub country: String,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    pub electric_range_km: f64,
    pub torque_nm: f64,
    pub top_speed_kmh: f64,
    pub seats: f64,
    pub drivetrain: String,
    pub car_body_type: String,
    pub age_years: f64,
    pub km: f64,
}

/// Country name → estimated price. Keys are whatever the service returns;
/// nothing here validates them.
pub type PredictionResponse = BTreeMap<String, f64>;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("connection failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictStatus {
    Idle,
    Sending,
    Ready(PredictionResponse),
    Failed(String),
}

/// Submits prediction requests off the UI thread. The worker publishes into
/// `status`; the event loop polls it every tick. Repeated submissions are not
/// debounced, matching the original client: the status is simply
/// last-write-wins if two requests ever race.
#[derive(Clone)]
pub struct PredictionClient {
    base_url: String,
    pub status: Arc<Mutex<PredictStatus>>,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            status: Arc::new(Mutex::new(PredictStatus::Idle)),
        }
    }

    /// The CSRF token is passed per submission: the cookie file is re-read
    /// each time, like the browser original re-read `document.cookie`.
    pub fn submit(&self, request: PredictionRequest, csrf_token: Option<String>) {
        let status = self.status.clone();
        let url = format!("{}/api/predict/", self.base_url);
        *status.lock().unwrap() = PredictStatus::Sending;

        thread::spawn(move || {
            tracing::info!(%url, country = %request.country, "sending prediction request");
            let outcome = send(&url, csrf_token.as_deref(), &request);
            let mut state = status.lock().unwrap();
            *state = match outcome {
                Ok(resp) => {
                    tracing::info!(countries = resp.len(), "prediction received");
                    PredictStatus::Ready(resp)
                }
                Err(err) => {
                    tracing::warn!(%err, "prediction request failed");
                    PredictStatus::Failed(err.to_string())
                }
            };
        });
    }

    /// Takes a finished request's outcome, resetting the status to idle.
    /// Returns `None` while idle or still in flight.
    pub fn poll_finished(&self) -> Option<Result<PredictionResponse, String>> {
        let mut state = self.status.lock().unwrap();
        match &*state {
            PredictStatus::Idle | PredictStatus::Sending => None,
            PredictStatus::Ready(_) | PredictStatus::Failed(_) => {
                let done = std::mem::replace(&mut *state, PredictStatus::Idle);
                match done {
                    PredictStatus::Ready(resp) => Some(Ok(resp)),
                    PredictStatus::Failed(msg) => Some(Err(msg)),
                    _ => unreachable!(),
                }
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(&*self.status.lock().unwrap(), PredictStatus::Sending)
    }
}

fn send(
    url: &str,
    token: Option<&str>,
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictError> {
    let client = reqwest::blocking::Client::new();
    let mut req = client.post(url).json(request);
    // No cookie on disk means no header at all; the server rejects the
    // request and that rejection surfaces through the normal error path.
    if let Some(token) = token {
        req = req.header("X-CSRFToken", token);
    }

    let resp = req
        .send()
        .map_err(|e| PredictError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PredictError::Http(status.as_u16()));
    }

    resp.json::<PredictionResponse>()
        .map_err(|e| PredictError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            brand: "TESLA".to_string(),
            model: "MODEL 3 LONG RANGE".to_string(),
            country: "Finland".to_string(),
            battery_capacity_kwh: 75.0,
            electric_range_km: 500.0,
            torque_nm: 450.0,
            top_speed_kmh: 233.0,
            seats: 5.0,
            drivetrain: "AWD".to_string(),
            car_body_type: "Sedan".to_string(),
            age_years: 2.0,
            km: 30000.0,
        }
    }

    #[test]
    fn test_request_wire_field_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "brand",
            "model",
            "country",
            "battery_capacity_kWh",
            "electric_range_km",
            "torque_nm",
            "top_speed_kmh",
            "seats",
            "drivetrain",
            "car_body_type",
            "age_years",
            "km",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(obj.len(), 12);
        assert_eq!(obj["battery_capacity_kWh"], 75.0);
        assert_eq!(obj["country"], "Finland");
    }

    #[test]
    fn test_nan_serializes_as_null() {
        // Unparseable form input becomes NaN and goes out unguarded;
        // serde_json writes null, same as JSON.stringify in a browser.
        let mut req = sample_request();
        req.seats = f64::NAN;
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"seats\":null"), "{json}");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PredictError::Http(500).to_string(),
            "HTTP error! status: 500"
        );
        assert!(PredictError::Transport("refused".to_string())
            .to_string()
            .contains("refused"));
        assert!(PredictError::Parse("eof".to_string())
            .to_string()
            .contains("eof"));
    }

    #[test]
    fn test_response_parses_country_map() {
        let resp: PredictionResponse =
            serde_json::from_str("{\"Germany\": 24500.5, \"Spain\": 19000.0}").unwrap();
        assert_eq!(resp.len(), 2);
        assert_eq!(resp["Germany"], 24500.5);
    }

    #[test]
    fn test_poll_finished_takes_outcome_once() {
        let client = PredictionClient::new("http://localhost:8000/");
        assert!(client.poll_finished().is_none());

        *client.status.lock().unwrap() = PredictStatus::Failed("boom".to_string());
        assert_eq!(client.poll_finished(), Some(Err("boom".to_string())));
        assert!(client.poll_finished().is_none());
        assert!(!client.is_sending());
    }
}
