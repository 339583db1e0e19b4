//! Browser automation capability layer
//!
//! The scrape pipeline only needs a handful of operations: navigate, locate
//! an element, read an attribute, type into it, click it. [`Driver`]
//! captures exactly that surface; [`WebDriverSession`] binds it to the W3C
//! WebDriver wire protocol, and tests substitute scripted fakes.

mod webdriver;

#[cfg(test)]
pub(crate) mod fake;

pub use webdriver::WebDriverSession;

use crate::error::Result;

/// Locator strategy for finding a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Element id attribute
    Id(String),
    /// CSS selector
    Css(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    /// CSS selector equivalent used on the wire
    pub fn as_css(&self) -> String {
        match self {
            Locator::Id(id) => format!("#{id}"),
            Locator::Css(selector) => selector.clone(),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id={id}"),
            Locator::Css(selector) => write!(f, "css={selector}"),
        }
    }
}

/// Handle to a located DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element(pub(crate) String);

/// Minimal browser automation capability used by the scrape loop
pub trait Driver: Send + Sync {
    fn navigate(&self, url: &str) -> impl Future<Output = Result<()>> + Send;

    fn current_url(&self) -> impl Future<Output = Result<String>> + Send;

    fn find_element(&self, locator: &Locator) -> impl Future<Output = Result<Element>> + Send;

    /// Reads an element property such as `innerHTML`; `None` when unset
    fn read_attribute(
        &self,
        element: &Element,
        name: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    fn clear(&self, element: &Element) -> impl Future<Output = Result<()>> + Send;

    fn send_keys(&self, element: &Element, text: &str)
    -> impl Future<Output = Result<()>> + Send;

    fn click(&self, element: &Element) -> impl Future<Output = Result<()>> + Send;

    /// Ends the browser session
    fn quit(&self) -> impl Future<Output = Result<()>> + Send;
}
