//! Headless Chromium rendering with scroll-triggered lazy loading.
//!
//! The front page only materializes most of its cards once they scroll into
//! view. Rendering therefore navigates, waits for the first paint, then keeps
//! scrolling to the bottom until the document height stops growing.
//!
//! # Bounds
//!
//! Pages with a continuously animating height never settle. The scroll loop
//! stops after `max_scroll_rounds` and the markup at that point is used; the
//! whole render is additionally capped by `render_timeout_secs`.

use super::PageSource;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::{Stream, StreamExt};
use std::fmt::{Debug, Display};
use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

const HEIGHT_SCRIPT: &str = "document.body.scrollHeight";
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";
const MARKUP_SCRIPT: &str = "document.documentElement.outerHTML";

/// The two page operations the stabilization loop needs.
pub trait ScrollDriver {
    async fn page_height(&self) -> Result<i64>;
    async fn scroll_to_bottom(&self) -> Result<()>;
}

/// How the stabilization loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stabilization {
    /// Scroll rounds performed.
    pub rounds: u32,
    /// Whether two consecutive height measurements matched.
    pub settled: bool,
}

/// Scroll until the page height stops changing, at most `max_rounds` times.
///
/// Each round scrolls to the bottom, sleeps `delay`, and measures again. The
/// loop ends as soon as a measurement equals the previous one. Running out of
/// rounds is not an error.
pub async fn stabilize<D: ScrollDriver>(
    driver: &D,
    delay: Duration,
    max_rounds: u32,
) -> Result<Stabilization> {
    let mut last_height = driver.page_height().await?;

    for round in 1..=max_rounds {
        driver.scroll_to_bottom().await?;
        sleep(delay).await;
        let height = driver.page_height().await?;
        debug!(round, last_height, height, "Measured page height");

        if height == last_height {
            return Ok(Stabilization {
                rounds: round,
                settled: true,
            });
        }
        last_height = height;
    }

    warn!(
        max_rounds,
        last_height, "Page height still changing; using markup as-is"
    );
    Ok(Stabilization {
        rounds: max_rounds,
        settled: false,
    })
}

/// Drive the browser's event stream to its end, logging failed events.
///
/// Returns the number of failed events.
async fn drain_events<S, E>(mut events: S) -> usize
where
    S: Stream<Item = std::result::Result<(), E>> + Unpin,
    E: Display,
{
    let mut failures = 0;
    while let Some(event) = events.next().await {
        if let Err(e) = event {
            failures += 1;
            debug!(error = %e, "Chromium handler event failed");
        }
    }
    failures
}

/// Wait for the browser process to exit, at most `limit`.
///
/// Returns whether the process was reaped.
async fn await_exit<F, T>(exit: F, limit: Duration) -> bool
where
    F: Future<Output = std::io::Result<T>>,
    T: Debug,
{
    match tokio::time::timeout(limit, exit).await {
        Ok(Ok(status)) => {
            debug!(?status, "Chromium exited");
            true
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Failed to wait for Chromium to exit");
            false
        }
        Err(_) => {
            warn!(timeout = ?limit, "Chromium did not exit in time");
            false
        }
    }
}

fn render_error(context: &str, e: impl Display) -> ScrapeError {
    ScrapeError::Render(format!("{context}: {e}"))
}

/// [`ScrollDriver`] backed by a live Chromium page.
struct PageScroller<'a> {
    page: &'a Page,
}

impl PageScroller<'_> {
    async fn eval<T: serde::de::DeserializeOwned>(&self, script: &str) -> Result<T> {
        self.page
            .evaluate(script)
            .await
            .map_err(|e| render_error("JS execution failed", e))?
            .into_value()
            .map_err(|e| ScrapeError::Render(format!("failed to convert JS result: {e:?}")))
    }
}

impl ScrollDriver for PageScroller<'_> {
    async fn page_height(&self) -> Result<i64> {
        self.eval(HEIGHT_SCRIPT).await
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.page
            .evaluate(SCROLL_SCRIPT)
            .await
            .map_err(|e| render_error("scroll failed", e))?;
        Ok(())
    }
}

/// Renders pages in a fresh headless Chromium per call.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    chrome_executable: Option<PathBuf>,
    initial_wait: Duration,
    scroll_delay: Duration,
    max_scroll_rounds: u32,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            chrome_executable: config.chrome_executable.clone(),
            initial_wait: config.initial_wait(),
            scroll_delay: config.scroll_delay(),
            max_scroll_rounds: config.max_scroll_rounds,
            timeout: config.render_timeout(),
        }
    }

    fn browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions");
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder
            .build()
            .map_err(|e| render_error("failed to build browser config", e))
    }

    async fn render(&self, browser: &Browser, url: &str) -> Result<String> {
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| render_error("navigation failed", e))?;
        page.wait_for_navigation()
            .await
            .map_err(|e| render_error("navigation failed", e))?;

        debug!(wait = ?self.initial_wait, "Waiting for initial content");
        sleep(self.initial_wait).await;

        let scroller = PageScroller { page: &page };
        let outcome = stabilize(&scroller, self.scroll_delay, self.max_scroll_rounds).await?;
        info!(
            rounds = outcome.rounds,
            settled = outcome.settled,
            "Lazy loading finished"
        );

        scroller.eval::<String>(MARKUP_SCRIPT).await
    }
}

impl PageSource for ChromiumRenderer {
    #[instrument(level = "info", skip(self))]
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let t0 = Instant::now();
        let (mut browser, mut handler) = Browser::launch(self.browser_config()?)
            .await
            .map_err(|e| render_error("failed to launch Chromium", e))?;

        let handler_task = tokio::spawn(async move { drain_events(&mut handler).await });

        let result = match tokio::time::timeout(self.timeout, self.render(&browser, url)).await {
            Ok(rendered) => rendered,
            Err(_) => Err(ScrapeError::Timeout(self.timeout)),
        };

        match browser.close().await {
            Ok(_) => {
                await_exit(browser.wait(), self.timeout).await;
            }
            Err(e) => warn!(error = %e, "Failed to close Chromium cleanly"),
        }
        handler_task.abort();

        let html = result?;
        info!(
            bytes = html.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Rendered page"
        );
        Ok(html)
    }
}
