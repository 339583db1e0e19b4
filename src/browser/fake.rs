// SPDX-License-Identifier: MIT

//! Scripted in-memory driver for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::browser::{Driver, Element, Locator};
use crate::error::{AppError, Result};

/// One recorded driver invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Navigate(String),
    CurrentUrl,
    Find(String),
    ReadAttribute(String, String),
    Clear(String),
    SendKeys(String, String),
    Click(String),
    Quit,
}

/// In-memory [`Driver`] that records calls and serves scripted responses.
///
/// Elements are identified by their locator's CSS form. `navigate` updates
/// the current URL; a click moves to `url_after_click` when set, emulating a
/// post-login redirect.
#[derive(Default)]
pub(crate) struct FakeDriver {
    pub calls: Mutex<Vec<Call>>,
    pub current_url: Mutex<String>,
    pub url_after_click: Mutex<Option<String>>,
    /// (element, property) -> value
    pub properties: Mutex<HashMap<(String, String), String>>,
    /// CSS forms of locators that fail lookup
    pub missing: Mutex<Vec<String>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&self, element: &str, name: &str, value: &str) {
        self.properties
            .lock()
            .unwrap()
            .insert((element.to_string(), name.to_string()), value.to_string());
    }

    pub fn set_missing(&self, css: &str) {
        self.missing.lock().unwrap().push(css.to_string());
    }

    pub fn set_url_after_click(&self, url: &str) {
        *self.url_after_click.lock().unwrap() = Some(url.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Driver for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.record(Call::Navigate(url.to_string()));
        *self.current_url.lock().unwrap() = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        self.record(Call::CurrentUrl);
        Ok(self.current_url.lock().unwrap().clone())
    }

    async fn find_element(&self, locator: &Locator) -> Result<Element> {
        let css = locator.as_css();
        self.record(Call::Find(css.clone()));
        if self.missing.lock().unwrap().contains(&css) {
            return Err(AppError::ElementNotFound(locator.to_string()));
        }
        Ok(Element(css))
    }

    async fn read_attribute(&self, element: &Element, name: &str) -> Result<Option<String>> {
        self.record(Call::ReadAttribute(element.0.clone(), name.to_string()));
        Ok(self
            .properties
            .lock()
            .unwrap()
            .get(&(element.0.clone(), name.to_string()))
            .cloned())
    }

    async fn clear(&self, element: &Element) -> Result<()> {
        self.record(Call::Clear(element.0.clone()));
        Ok(())
    }

    async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        self.record(Call::SendKeys(element.0.clone(), text.to_string()));
        Ok(())
    }

    async fn click(&self, element: &Element) -> Result<()> {
        self.record(Call::Click(element.0.clone()));
        if let Some(url) = self.url_after_click.lock().unwrap().clone() {
            *self.current_url.lock().unwrap() = url;
        }
        Ok(())
    }

    async fn quit(&self) -> Result<()> {
        self.record(Call::Quit);
        Ok(())
    }
}
