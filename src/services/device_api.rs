use serde::de::DeserializeOwned;

use crate::models::{
    error::AppError,
    schedule::ScheduleList,
    session::MotorTest,
    settings::SettingsMap,
};

// CONSTANTS
/// Used when the page origin cannot be read (outside a browser window).
const FALLBACK_BASE_URL: &str = "http://192.168.4.1";

const SCHEDULES_GET: &str = "/getSchedules";
const SCHEDULES_SAVE: &str = "/saveSchedules";
const SETTINGS_GET: &str = "/getSettings";
const SETTINGS_SAVE: &str = "/saveSettings";
const CLOCK_GET: &str = "/getRTCTime";
const MOTOR_TEST: &str = "/testMotor";

// API CONFIGURATION
/// Where the dispenser's HTTP API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for one of the device endpoints.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Motor test URL with the slider values as query parameters.
    pub fn motor_test_url(&self, test: &MotorTest) -> String {
        format!(
            "{}?container={}&motorSpeed={}&triggerThreshold={}",
            self.endpoint(MOTOR_TEST),
            test.container.number(),
            test.motor_speed,
            test.trigger_threshold
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL. Defaults to the origin the page was served from.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .or_else(page_origin)
            .unwrap_or_else(|| FALLBACK_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

// DEVICE CLIENT
/// HTTP client for the dispenser's REST endpoints.
pub struct DeviceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DeviceClient {
    /// Creates a new client talking to the page origin.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_schedules(&self) -> Result<ScheduleList, AppError> {
        let body = self.get_text(&self.config.endpoint(SCHEDULES_GET)).await?;
        decode_body(&body, "schedules")
    }

    /// Overwrites the device's schedule list with `schedules`.
    pub async fn store_schedules(&self, schedules: &ScheduleList) -> Result<(), AppError> {
        self.post_json(&self.config.endpoint(SCHEDULES_SAVE), schedules)
            .await
    }

    pub async fn fetch_settings(&self) -> Result<SettingsMap, AppError> {
        let body = self.get_text(&self.config.endpoint(SETTINGS_GET)).await?;
        decode_body(&body, "settings")
    }

    /// Overwrites the device's settings object with `settings`.
    pub async fn store_settings(&self, settings: &SettingsMap) -> Result<(), AppError> {
        self.post_json(&self.config.endpoint(SETTINGS_SAVE), settings)
            .await
    }

    /// Reads the device's real-time clock as preformatted text.
    pub async fn fetch_clock(&self) -> Result<String, AppError> {
        self.get_text(&self.config.endpoint(CLOCK_GET)).await
    }

    /// Runs the container's motor once with the given values and returns the
    /// device's status text.
    pub async fn run_motor_test(&self, test: &MotorTest) -> Result<String, AppError> {
        self.get_text(&self.config.motor_test_url(test)).await
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.check_status(response).await
    }

    async fn get_text(&self, url: &str) -> Result<String, AppError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to read response: {e}")))
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<(), AppError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.check_status(response).await.map(drop)
    }

    async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read error body>".to_string());
        Err(error_for_status(status, &body))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Parses a JSON response body, reporting failures as data errors.
fn decode_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse {what}: {e}")))
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        404 => AppError::NotFound(format!("Endpoint not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Device error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
// Best-effort wrappers: failures are logged to the console and turned into
// empty results so the panel keeps working against a flaky device.

/// Loads all schedules, or an empty list if the device cannot be read.
pub async fn load_schedules() -> ScheduleList {
    let result =
        fetch_with_default_client(|client| async move { client.fetch_schedules().await }).await;
    or_logged(result, "loading schedules", ScheduleList::default)
}

/// Persists the full schedule list; failures are only logged.
pub async fn save_schedules(schedules: ScheduleList) {
    let result = fetch_with_default_client(|client| async move {
        client.store_schedules(&schedules).await
    })
    .await;
    or_logged(result, "saving schedules", || ());
}

/// Loads the settings object, or an empty map if the device cannot be read.
pub async fn load_settings() -> SettingsMap {
    let result =
        fetch_with_default_client(|client| async move { client.fetch_settings().await }).await;
    or_logged(result, "loading settings", SettingsMap::default)
}

/// Persists the full settings object; failures are only logged.
pub async fn save_settings(settings: SettingsMap) {
    let result = fetch_with_default_client(|client| async move {
        client.store_settings(&settings).await
    })
    .await;
    or_logged(result, "saving settings", || ());
}

/// Current device time, or `None` when the clock could not be read.
pub async fn get_clock() -> Option<String> {
    let result =
        fetch_with_default_client(|client| async move { client.fetch_clock().await }).await;
    or_logged(result.map(Some), "fetching RTC time", || None)
}

/// Fires a motor test and logs whatever the device answers.
pub async fn test_motor(test: MotorTest) {
    let result =
        fetch_with_default_client(|client| async move { client.run_motor_test(&test).await })
            .await;
    if let Some(status) = or_logged(result.map(Some), "testing motor", || None) {
        gloo::console::log!(&status);
    }
}

/// Splits a best-effort result into the value to use and the message to log.
fn recover<T>(
    result: Result<T, AppError>,
    doing: &str,
    fallback: impl FnOnce() -> T,
) -> (T, Option<String>) {
    match result {
        Ok(value) => (value, None),
        Err(e) => (fallback(), Some(format!("Error {doing}: {e}"))),
    }
}

fn or_logged<T>(result: Result<T, AppError>, doing: &str, fallback: impl FnOnce() -> T) -> T {
    let (value, message) = recover(result, doing, fallback);
    if let Some(message) = message {
        gloo::console::error!(&message);
    }
    value
}

async fn fetch_with_default_client<T, F, Fut>(operation: F) -> Result<T, AppError>
where
    F: FnOnce(DeviceClient) -> Fut,
    Fut: std::future::Future<Output = Result<T, AppError>>,
{
    operation(DeviceClient::new()?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::container::Container;

    #[test]
    fn test_config_builder_trims_trailing_slash() {
        let config = ApiConfig::builder().base_url("http://10.0.0.7/").build();
        assert_eq!(config.base_url(), "http://10.0.0.7");
        assert_eq!(
            config.endpoint(SCHEDULES_GET),
            "http://10.0.0.7/getSchedules"
        );
    }

    #[test]
    fn test_config_default_falls_back_off_browser() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), FALLBACK_BASE_URL);
    }

    #[test]
    fn test_motor_test_url_construction() {
        let config = ApiConfig::builder().base_url("http://pills.local").build();
        let url = config.motor_test_url(&MotorTest {
            container: Container::Three,
            motor_speed: 200,
            trigger_threshold: 1500,
        });

        assert_eq!(
            url,
            "http://pills.local/testMotor?container=3&motorSpeed=200&triggerThreshold=1500"
        );
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            error_for_status(reqwest::StatusCode::NOT_FOUND, ""),
            AppError::NotFound(_)
        ));
        let err = error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.to_string(), "API error: Device error 500 Internal Server Error: boom");
    }

    #[test]
    fn test_non_json_body_is_a_data_error() {
        let result = decode_body::<ScheduleList>("<html>busy</html>", "schedules");
        assert!(matches!(result, Err(AppError::DataError(ref m)) if m.starts_with("Failed to parse schedules")));

        let result = decode_body::<SettingsMap>("[1, 2]", "settings");
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    #[test]
    fn test_failed_loads_fall_back_to_empty() {
        fn unreachable<T>() -> Result<T, AppError> {
            Err(AppError::ApiError("Network error: refused".to_string()))
        }

        let (schedules, message) = recover(unreachable(), "loading schedules", ScheduleList::default);
        assert_eq!(schedules, ScheduleList::default());
        assert_eq!(
            message.as_deref(),
            Some("Error loading schedules: API error: Network error: refused")
        );

        let (settings, message) = recover(unreachable(), "loading settings", SettingsMap::default);
        assert!(settings.is_empty());
        assert!(message.is_some());

        let garbled = decode_body::<ScheduleList>("not json", "schedules");
        let (schedules, message) = recover(garbled, "loading schedules", ScheduleList::default);
        assert!(schedules.records.is_empty());
        assert!(message.unwrap().contains("Data error"));
    }

    #[test]
    fn test_failed_save_is_only_reported() {
        let failed: Result<(), AppError> = Err(AppError::ApiError("Device error 500".to_string()));
        let ((), message) = recover(failed, "saving settings", || ());
        assert_eq!(
            message.as_deref(),
            Some("Error saving settings: API error: Device error 500")
        );
    }

    #[test]
    fn test_clock_failure_gives_none() {
        let failed: Result<String, AppError> = Err(AppError::NotFound("getRTCTime".to_string()));
        let (time, message) = recover(failed.map(Some), "fetching RTC time", || None);
        assert_eq!(time, None);
        assert!(message.is_some());

        let (time, message) = recover(Ok(Some("12:34:56".to_string())), "fetching RTC time", || None);
        assert_eq!(time.as_deref(), Some("12:34:56"));
        assert_eq!(message, None);
    }

    #[test]
    fn test_decoded_body_keeps_valid_data() {
        let list: ScheduleList = decode_body(
            r#"[{"id": 3, "container": 2, "days": ["Monday"], "pillCount": 1, "times": ["08:00"]}]"#,
            "schedules",
        )
        .unwrap();
        assert_eq!(list.records[0].container, Container::Two);
    }
}
