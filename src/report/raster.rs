// Screenshots of the pages.

use crate::report::chart::{CHART_HEIGHT, CHART_MARGIN};
use crate::report::config_reader::ScreenshotConfig;
use crate::report::*;

use std::process::Command;

/// Renders a page into an image.
pub trait Rasterizer {
    /// Captures the page at `url` in a window tall enough for `height` pixels.
    fn capture(&self, url: &str, height: u32, quality: u8) -> RasterResult<Vec<u8>>;
}

/// The height of a page holding `num_charts` charts.
pub fn page_height(num_charts: usize) -> u32 {
    (num_charts.max(1) as u32) * (CHART_HEIGHT + CHART_MARGIN) + CHART_MARGIN
}

/// Captures pages with a Chromium-compatible browser in headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessBrowser {
    browser: String,
    window_width: u32,
}

impl HeadlessBrowser {
    pub fn new(config: &ScreenshotConfig) -> HeadlessBrowser {
        HeadlessBrowser {
            browser: config.browser.clone(),
            window_width: config.window_width,
        }
    }

    fn command(&self, url: &str, height: u32, output: &Path) -> Command {
        let mut cmd = Command::new(&self.browser);
        cmd.arg("--headless")
            .arg("--disable-gpu")
            .arg("--hide-scrollbars")
            .arg(format!("--window-size={},{}", self.window_width, height))
            .arg(format!("--screenshot={}", output.display()))
            .arg(url);
        cmd
    }
}

impl Rasterizer for HeadlessBrowser {
    fn capture(&self, url: &str, height: u32, quality: u8) -> RasterResult<Vec<u8>> {
        // The command line of the browser only writes PNG images, which are lossless.
        debug!(
            "capture: {} with {} (height {}, quality {})",
            url, self.browser, height, quality
        );
        let scratch = tempfile::Builder::new()
            .prefix("llresults")
            .tempdir()
            .context(ScratchDirSnafu {})?;
        let shot = scratch.path().join("screenshot.png");
        let output = self
            .command(url, height, &shot)
            .output()
            .context(LaunchingBrowserSnafu {
                browser: self.browser.as_str(),
            })?;
        if !output.status.success() {
            return BrowserFailedSnafu {
                url,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }
            .fail();
        }
        fs::read(&shot).context(ReadingScreenshotSnafu { path: &shot })
    }
}
