// SPDX-License-Identifier: MIT

//! Router login flow
//!
//! Establishes one authenticated browser session against the router's web
//! administration interface: navigate to the login page, fill the credential
//! fields, click sign-in, wait out the redirect, then verify the landing
//! page.

use std::time::Duration;

use crate::browser::{Driver, Locator};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Element ids and selectors on the router's login page
mod login_page {
    pub const USERNAME_FIELD: &str = "usernameNormal";
    pub const PASSWORD_FIELD: &str = "passwordNormal";
    pub const SIGN_IN_BUTTON: &str = "img[alt=\"sign in\"]";
}

/// Logs into the router admin interface.
///
/// The post-submit wait is a fixed delay (`sleep_after_login`); the login
/// page offers no readiness signal to poll. Any failed element lookup
/// propagates as fatal. A landing URL other than the home page is a
/// [`AppError::LoginVerification`] error, which terminates the process with
/// exit status 1.
pub async fn login<D: Driver>(driver: &D, config: &Config) -> Result<()> {
    let login_url = config.login_url();
    tracing::info!("Navigating to login page {}", login_url);
    driver.navigate(&login_url).await?;

    let username = driver
        .find_element(&Locator::id(login_page::USERNAME_FIELD))
        .await?;
    driver.clear(&username).await?;
    driver.send_keys(&username, &config.router_username).await?;
    tracing::debug!("Entered username");

    let password = driver
        .find_element(&Locator::id(login_page::PASSWORD_FIELD))
        .await?;
    driver.clear(&password).await?;
    driver.send_keys(&password, &config.router_password).await?;
    tracing::debug!("Entered password");

    let sign_in = driver
        .find_element(&Locator::css(login_page::SIGN_IN_BUTTON))
        .await?;
    driver.click(&sign_in).await?;
    tracing::debug!("Clicked sign-in");

    tokio::time::sleep(Duration::from_secs_f64(config.sleep_after_login)).await;

    verify_home_page(driver, config).await
}

async fn verify_home_page<D: Driver>(driver: &D, config: &Config) -> Result<()> {
    let expected = config.home_url();
    let actual = driver.current_url().await?;
    if actual != expected {
        return Err(AppError::LoginVerification { expected, actual });
    }
    tracing::info!("Login verified, at {}", actual);
    Ok(())
}
