use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use super::{FetchOptions, PageSource};
use crate::error::{Error, Result};

const BODY_POLL_INTERVAL: Duration = Duration::from_millis(250);

fn render_error(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// Headless Chrome renderer.
///
/// Owns a private Tokio runtime so callers stay synchronous. Each fetch
/// launches a fresh browser and shuts it down before returning.
pub struct BrowserFetcher {
    options: FetchOptions,
    runtime: Runtime,
}

impl std::fmt::Debug for BrowserFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserFetcher")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl BrowserFetcher {
    /// Create a fetcher with its own runtime.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the runtime cannot be started.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            options: options.clone(),
            runtime,
        })
    }
}

impl PageSource for BrowserFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.runtime.block_on(render(url, &self.options))
    }
}

async fn render(url: &str, options: &FetchOptions) -> Result<String> {
    let config = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .arg(format!("--user-agent={}", options.user_agent))
        .window_size(1920, 1080)
        .request_timeout(options.page_load_timeout)
        .build()
        .map_err(Error::Render)?;

    let (mut browser, mut handler) = Browser::launch(config).await.map_err(render_error)?;
    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(err) = event {
                debug!(%err, "CDP handler stopped");
                break;
            }
        }
    });

    let result = load(&browser, url, options).await;

    if let Err(err) = browser.close().await {
        warn!(%err, "failed to close browser");
    }
    if let Err(err) = browser.wait().await {
        warn!(%err, "failed to reap browser process");
    }
    if let Err(err) = handler_task.await {
        warn!(%err, "CDP handler task failed");
    }

    if let Err(err) = &result {
        warn!(url, %err, "browser rendering failed");
    }
    result
}

async fn load(browser: &Browser, url: &str, options: &FetchOptions) -> Result<String> {
    let page = browser.new_page("about:blank").await.map_err(render_error)?;

    tokio::time::timeout(options.page_load_timeout, page.goto(url))
        .await
        .map_err(|_| {
            Error::Render(format!(
                "navigation timed out after {}s",
                options.page_load_timeout.as_secs()
            ))
        })?
        .map_err(render_error)?;

    wait_for_body(&page, options.body_wait).await?;
    tokio::time::sleep(options.settle_delay).await;

    let html = page.content().await.map_err(render_error)?;
    debug!(url, bytes = html.len(), "page rendered");
    Ok(html)
}

async fn wait_for_body(page: &Page, limit: Duration) -> Result<()> {
    let deadline = Instant::now() + limit;
    loop {
        if page.find_element("body").await.is_ok() {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::Render(format!(
                "<body> did not appear within {}s",
                limit.as_secs()
            )));
        }
        tokio::time::sleep(BODY_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_runtime() {
        let fetcher = BrowserFetcher::new(&FetchOptions::default());
        assert!(fetcher.is_ok());
    }
}
