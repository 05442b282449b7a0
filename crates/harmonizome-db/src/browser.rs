//! Opening gene pages in a web browser

use std::io;
use tracing::debug;

/// Something that can show a URL to the user
pub trait BrowserOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default browser, via the `open` crate.
///
/// Whether the page lands in a new tab or a new window is up to the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        debug!(url = %url, "Opening browser");
        open::that(url)
    }
}
