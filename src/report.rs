use log::{debug, info, warn};

use local_election::*;
use snafu::{prelude::*, Snafu};

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

pub mod chart;
pub mod config_reader;
mod io_common;
mod io_csv;
mod io_json;
pub mod raster;

use crate::report::chart::{Page, PieChart, SliceMode};
use crate::report::config_reader::ReportConfig;
use crate::report::io_common::{folder, make_folder, page_url};
use crate::report::raster::{page_height, HeadlessBrowser, Rasterizer};

const PAGE_FILE: &str = "result.html";
const IMAGE_FILE: &str = "result.png";

/// The election data could not be read. Nothing is written in that case.
#[derive(Debug, Snafu)]
pub enum LoadError {
    #[snafu(display("Error opening election data {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing election data {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Error opening configuration file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration file {path}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },
}

/// One output could not be written. The other outputs are still produced.
#[derive(Debug, Snafu)]
pub enum WriteError {
    #[snafu(display("Could not create directory {}", path.display()))]
    CreatingDir {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Could not write CSV file {}", path.display()))]
    WritingCsv { source: csv::Error, path: PathBuf },
    #[snafu(display("Could not flush CSV file {}", path.display()))]
    FlushingCsv {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Could not serialize the charts of {}", path.display()))]
    SerializingChart {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[snafu(display("Could not write page {}", path.display()))]
    WritingPage {
        source: std::io::Error,
        path: PathBuf,
    },
}

/// A page could not be captured as an image. This never fails the run.
#[derive(Debug, Snafu)]
pub enum RasterizeError {
    #[snafu(display("Could not create a scratch directory for the screenshot"))]
    ScratchDir { source: std::io::Error },
    #[snafu(display("Could not launch browser {browser}"))]
    LaunchingBrowser {
        source: std::io::Error,
        browser: String,
    },
    #[snafu(display("Browser failed to capture {url} ({status}): {stderr}"))]
    BrowserFailed {
        url: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[snafu(display("Could not read screenshot {}", path.display()))]
    ReadingScreenshot {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Could not write image {}", path.display()))]
    WritingImage {
        source: std::io::Error,
        path: PathBuf,
    },
}

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Could not load the election data"), context(false))]
    Load { source: LoadError },
    #[snafu(display("Invalid configuration"), context(false))]
    Config { source: ConfigError },
}

pub type LoadResult<T> = Result<T, LoadError>;
pub type WriteResult<T> = Result<T, WriteError>;
pub type RasterResult<T> = Result<T, RasterizeError>;
pub type ReportResult<T> = Result<T, ReportError>;

/// What a run produced.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RunSummary {
    pub records: usize,
    pub csv_written: usize,
    pub pages_written: usize,
    pub images_written: usize,
    /// Outputs skipped because they could not be written.
    pub failures: usize,
    pub screenshot_failures: usize,
}

/// Reads the election data and writes all the reports.
pub fn run_report(config: &ReportConfig) -> ReportResult<RunSummary> {
    match &config.screenshot {
        Some(sc) => {
            let browser = HeadlessBrowser::new(sc);
            run_report_with(config, Some(&browser))
        }
        None => run_report_with(config, None),
    }
}

pub fn run_report_with(
    config: &ReportConfig,
    rasterizer: Option<&dyn Rasterizer>,
) -> ReportResult<RunSummary> {
    info!("config: {:?}", config);
    let records = io_json::read_records(&config.input_path)?;
    let groupings = group_records(&records);
    warn_unknown_provinces(&groupings);

    let mut summary = RunSummary {
        records: records.len(),
        ..RunSummary::default()
    };
    let root = Path::new(&config.output_directory);

    write_csv_files(root, &groupings.main, &mut summary);

    let pages = assemble_pages(&groupings);
    info!("Writing {} pages under {:?}", pages.len(), root);
    for (unit, charts) in pages.iter() {
        let html_path = match write_page(root, unit, charts, &config.chart_script_url) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping page of {}: {}", unit, e);
                summary.failures += 1;
                continue;
            }
        };
        summary.pages_written += 1;

        if let Some(r) = rasterizer {
            let base_url = config.screenshot.as_ref().and_then(|s| s.base_url.as_deref());
            let quality = config.screenshot.as_ref().map(|s| s.quality).unwrap_or(90);
            match capture_page(r, &html_path, base_url, charts.len(), quality) {
                Ok(()) => summary.images_written += 1,
                Err(e) => {
                    warn!("Screenshot of {} failed: {}", unit, e);
                    summary.screenshot_failures += 1;
                }
            }
        }
    }

    info!("Run summary: {:?}", summary);
    Ok(summary)
}

fn warn_unknown_provinces(groupings: &Groupings) {
    let unknown: BTreeSet<ProvinceId> = groupings
        .main
        .keys()
        .map(|k| k.local_body.province())
        .filter(|p| p.name().is_none())
        .collect();
    for p in unknown.iter() {
        warn!("Unknown province id {}, its folder keeps the id as name", p.0);
    }
}

fn write_csv_files(root: &Path, groups: &Groups<MainKey>, summary: &mut RunSummary) {
    info!("Writing {} CSV files under {:?}", groups.len(), root);
    for (key, records) in groups.iter() {
        let dir = folder(root, &key.components());
        let res = make_folder(&dir).and_then(|_| {
            let path = dir.join(key.file_name());
            io_csv::write_records(&path, records)
        });
        match res {
            Ok(()) => summary.csv_written += 1,
            Err(e) => {
                warn!("Skipping CSV file for {}: {}", key.title(), e);
                summary.failures += 1;
            }
        }
    }
}

/// Collects the charts of every page.
///
/// A chart may appear on more than one page, for example the head of a local
/// body is shown on the page of the local body and on the page of its district.
pub fn assemble_pages(groupings: &Groupings) -> BTreeMap<PageUnit, Vec<PieChart>> {
    let mut pages: BTreeMap<PageUnit, Vec<PieChart>> = BTreeMap::new();
    add_charts(&mut pages, &groupings.win_country, SliceMode::PerParty);
    add_charts(&mut pages, &groupings.win_province, SliceMode::PerParty);
    add_charts(&mut pages, &groupings.win_district, SliceMode::PerParty);
    add_charts(&mut pages, &groupings.main, SliceMode::PerCandidate);
    add_charts(&mut pages, &groupings.win_local_body, SliceMode::PerParty);
    add_charts(&mut pages, &groupings.ward, SliceMode::PerCandidate);
    pages
}

fn add_charts<K: ChartKey>(
    pages: &mut BTreeMap<PageUnit, Vec<PieChart>>,
    groups: &Groups<K>,
    mode: SliceMode,
) {
    for (key, records) in groups.iter() {
        let units = key.pages();
        if units.is_empty() {
            continue;
        }
        let chart = PieChart::from_records(key.title(), records, mode);
        for unit in units {
            pages.entry(unit).or_default().push(chart.clone());
        }
    }
}

fn write_page(
    root: &Path,
    unit: &PageUnit,
    charts: &[PieChart],
    script_url: &str,
) -> WriteResult<PathBuf> {
    let dir = folder(root, &unit.components());
    make_folder(&dir)?;
    let path = dir.join(PAGE_FILE);
    let page = Page {
        title: unit.to_string(),
        charts,
        script_url,
    };
    page.write(&path)?;
    debug!("write_page: {:?} ({} charts)", path, charts.len());
    Ok(path)
}

fn capture_page(
    rasterizer: &dyn Rasterizer,
    html_path: &Path,
    base_url: Option<&str>,
    num_charts: usize,
    quality: u8,
) -> RasterResult<()> {
    let url = page_url(html_path, base_url);
    let bytes = rasterizer.capture(&url, page_height(num_charts), quality)?;
    let image_path = html_path.with_file_name(IMAGE_FILE);
    fs::write(&image_path, bytes).context(WritingImageSnafu { path: &image_path })?;
    debug!("capture_page: wrote {:?}", image_path);
    Ok(())
}
