// SPDX-License-Identifier: MIT

//! W3C WebDriver wire client
//!
//! Speaks the JSON-over-HTTP protocol to a driver server such as
//! geckodriver. Only the endpoints needed for login and page scraping are
//! implemented; responses arrive wrapped in a `{"value": ...}` envelope and
//! failures carry an `error`/`message` pair.

use serde_json::{Value, json};

use crate::browser::{Driver, Element, Locator};
use crate::error::{AppError, Result};

/// Key identifying element references in protocol responses
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// WebDriver error code for a failed element lookup
const NO_SUCH_ELEMENT: &str = "no such element";

/// One browser session on a WebDriver server
#[derive(Debug)]
pub struct WebDriverSession {
    http: reqwest::Client,
    base_url: String,
    session_id: String,
}

impl WebDriverSession {
    /// Starts a new headless Firefox session on the given driver server.
    pub async fn start(webdriver_url: &str) -> Result<Self> {
        let http = reqwest::Client::new();
        let base_url = webdriver_url.trim_end_matches('/').to_string();

        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "firefox",
                    "moz:firefoxOptions": { "args": ["-headless"] }
                }
            }
        });
        let response = http
            .post(format!("{base_url}/session"))
            .json(&capabilities)
            .send()
            .await?;
        let value = unwrap_value(response).await?;

        let session_id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::WebDriver("session response missing sessionId".to_string())
            })?
            .to_string();

        tracing::debug!("Started WebDriver session {}", session_id);
        Ok(Self {
            http,
            base_url,
            session_id,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/session/{}{}", self.base_url, self.session_id, path)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let response = self.http.post(self.endpoint(path)).json(&body).send().await?;
        unwrap_value(response).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let response = self.http.get(self.endpoint(path)).send().await?;
        unwrap_value(response).await
    }
}

/// Unwraps the protocol's `{"value": ...}` envelope, mapping error bodies to
/// [`AppError`].
async fn unwrap_value(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().await?;
    let value = body.get("value").cloned().unwrap_or(Value::Null);

    if status.is_success() {
        return Ok(value);
    }

    let error = value
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if error == NO_SUCH_ELEMENT {
        Err(AppError::ElementNotFound(message))
    } else {
        Err(AppError::WebDriver(format!("{error}: {message}")))
    }
}

impl Driver for WebDriverSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.post("/url", json!({ "url": url })).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let value = self.get("/url").await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::WebDriver("current url response was not a string".to_string()))
    }

    async fn find_element(&self, locator: &Locator) -> Result<Element> {
        let body = json!({ "using": "css selector", "value": locator.as_css() });
        let value = self.post("/element", body).await.map_err(|e| match e {
            // Replace the driver's message with the locator we asked for
            AppError::ElementNotFound(_) => AppError::ElementNotFound(locator.to_string()),
            other => other,
        })?;

        let element_id = value
            .get(ELEMENT_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::WebDriver(format!("element response missing reference for {locator}"))
            })?;
        Ok(Element(element_id.to_string()))
    }

    async fn read_attribute(&self, element: &Element, name: &str) -> Result<Option<String>> {
        // Get Element Property rather than Attribute so computed values like
        // innerHTML resolve.
        let value = self
            .get(&format!("/element/{}/property/{}", element.0, name))
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    async fn clear(&self, element: &Element) -> Result<()> {
        self.post(&format!("/element/{}/clear", element.0), json!({}))
            .await?;
        Ok(())
    }

    async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        self.post(
            &format!("/element/{}/value", element.0),
            json!({ "text": text }),
        )
        .await?;
        Ok(())
    }

    async fn click(&self, element: &Element) -> Result<()> {
        self.post(&format!("/element/{}/click", element.0), json!({}))
            .await?;
        Ok(())
    }

    async fn quit(&self) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/session/{}", self.base_url, self.session_id))
            .send()
            .await?;
        unwrap_value(response).await?;
        tracing::debug!("Ended WebDriver session {}", self.session_id);
        Ok(())
    }
}
