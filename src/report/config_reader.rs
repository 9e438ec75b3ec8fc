use crate::args::Args;
use crate::report::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "./local-level-election/raw/alldata.json";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "local-level-election/result";
pub const DEFAULT_CHART_SCRIPT_URL: &str =
    "https://go-echarts.github.io/go-echarts-assets/assets/echarts.min.js";
pub const DEFAULT_BROWSER: &str = "chromium";
pub const DEFAULT_QUALITY: u8 = 90;
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// The content of the configuration file. All the fields are optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(rename = "inputPath")]
    pub input_path: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
    #[serde(rename = "chartScriptUrl")]
    pub chart_script_url: Option<String>,
    pub screenshot: Option<ScreenshotSettings>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenshotSettings {
    pub browser: Option<String>,
    /// When set, pages are addressed through this server instead of as files.
    #[serde(rename = "baseUrl")]
    pub base_url: Option<String>,
    pub quality: Option<u8>,
    #[serde(rename = "windowWidth")]
    pub window_width: Option<u32>,
}

/// The configuration of a run, after merging the file and the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReportConfig {
    pub input_path: String,
    pub output_directory: String,
    pub chart_script_url: String,
    /// No screenshots are taken when missing.
    pub screenshot: Option<ScreenshotConfig>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScreenshotConfig {
    pub browser: String,
    pub base_url: Option<String>,
    pub quality: u8,
    pub window_width: u32,
}

pub fn read_settings(path: &str) -> Result<ReportSettings, ConfigError> {
    info!("Attempting to read configuration file {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })
}

/// Builds the configuration of the run.
///
/// The command line takes precedence over the configuration file. Screenshots are
/// enabled by `--screenshot` or by a `screenshot` section in the file.
pub fn resolve_config(args: &Args) -> ReportResult<ReportConfig> {
    let settings = match &args.config {
        Some(p) => read_settings(p)?,
        None => ReportSettings::default(),
    };
    Ok(merge(args, settings))
}

fn merge(args: &Args, settings: ReportSettings) -> ReportConfig {
    let screenshot_settings = match settings.screenshot {
        Some(s) => Some(s),
        None if args.screenshot => Some(ScreenshotSettings::default()),
        None => None,
    };
    let screenshot = screenshot_settings.map(|s| ScreenshotConfig {
        browser: args
            .browser
            .clone()
            .or(s.browser)
            .unwrap_or_else(|| DEFAULT_BROWSER.to_string()),
        base_url: s.base_url.filter(|u| !u.is_empty()),
        quality: s.quality.unwrap_or(DEFAULT_QUALITY),
        window_width: s.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH),
    });

    let res = ReportConfig {
        input_path: args
            .input
            .clone()
            .or(settings.input_path)
            .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()),
        output_directory: args
            .out
            .clone()
            .or(settings.output_directory)
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIRECTORY.to_string()),
        chart_script_url: settings
            .chart_script_url
            .unwrap_or_else(|| DEFAULT_CHART_SCRIPT_URL.to_string()),
        screenshot,
    };
    debug!("merge: {:?}", res);
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_arguments() {
        let c = resolve_config(&Args::default()).unwrap();
        assert_eq!(c.input_path, DEFAULT_INPUT_PATH);
        assert_eq!(c.output_directory, DEFAULT_OUTPUT_DIRECTORY);
        assert_eq!(c.chart_script_url, DEFAULT_CHART_SCRIPT_URL);
        assert_eq!(c.screenshot, None);
    }

    #[test]
    fn arguments_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "inputPath": "data/all.json",
                "outputDirectory": "out",
                "screenshot": {"baseUrl": "http://127.0.0.1:5500", "quality": 80}
            }"#,
        )
        .unwrap();
        let args = Args {
            config: Some(path.display().to_string()),
            out: Some("elsewhere".to_string()),
            browser: Some("/usr/bin/google-chrome".to_string()),
            ..Args::default()
        };
        let c = resolve_config(&args).unwrap();
        assert_eq!(c.input_path, "data/all.json");
        assert_eq!(c.output_directory, "elsewhere");
        assert_eq!(
            c.screenshot,
            Some(ScreenshotConfig {
                browser: "/usr/bin/google-chrome".to_string(),
                base_url: Some("http://127.0.0.1:5500".to_string()),
                quality: 80,
                window_width: DEFAULT_WINDOW_WIDTH,
            })
        );
    }

    #[test]
    fn screenshot_flag_enables_defaults() {
        let args = Args {
            screenshot: true,
            ..Args::default()
        };
        let c = resolve_config(&args).unwrap();
        let s = c.screenshot.unwrap();
        assert_eq!(s.browser, DEFAULT_BROWSER);
        assert_eq!(s.quality, DEFAULT_QUALITY);
        assert_eq!(s.base_url, None);
    }

    #[test]
    fn bad_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"inputPath\": 3}").unwrap();
        let args = Args {
            config: Some(path.display().to_string()),
            ..Args::default()
        };
        assert!(matches!(
            resolve_config(&args),
            Err(ReportError::Config {
                source: ConfigError::ParsingConfig { .. }
            })
        ));
        let args = Args {
            config: Some(dir.path().join("missing.json").display().to_string()),
            ..Args::default()
        };
        assert!(matches!(
            resolve_config(&args),
            Err(ReportError::Config {
                source: ConfigError::OpeningConfig { .. }
            })
        ));
    }
}
