// Pie charts and the pages that gather them.
//
// A page is an HTML document drawing every chart with ECharts. The charts are
// embedded as ECharts options, serialized as JSON.

use crate::report::*;

use serde::Serialize;
use serde_json::json;
use serde_json::Value as JSValue;

pub const CHART_WIDTH: u32 = 900;
pub const CHART_HEIGHT: u32 = 500;
/// Space above each chart on the page.
pub const CHART_MARGIN: u32 = 30;

/// What a slice of a chart stands for.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SliceMode {
    /// One slice per candidate, sized by the votes received.
    PerCandidate,
    /// One slice per party, sized by the number of records of the party.
    PerParty,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: u64,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl PieChart {
    pub fn from_records(title: String, records: &[Record], mode: SliceMode) -> PieChart {
        match mode {
            SliceMode::PerCandidate => PieChart {
                title,
                slices: records
                    .iter()
                    .map(|r| Slice {
                        name: format!("{}- {}", r.candidate_name, r.party_name),
                        value: r.total_votes,
                    })
                    .collect(),
            },
            SliceMode::PerParty => PieChart::from_tally(title, &Tally::from_records(records)),
        }
    }

    pub fn from_tally(title: String, tally: &Tally) -> PieChart {
        let slices = tally
            .iter()
            .map(|(party, count)| Slice {
                name: party.to_string(),
                value: count,
            })
            .collect();
        PieChart { title, slices }
    }

    /// The ECharts option drawing this chart.
    pub fn option(&self) -> JSValue {
        json!({
            "title": {"text": self.title, "right": "20"},
            "tooltip": {"show": true},
            "legend": {"show": false},
            "series": [{
                "name": "pie",
                "type": "pie",
                "data": self.slices,
                "label": {"show": true, "formatter": "{b}: {c}"}
            }]
        })
    }
}

/// A document gathering the charts of one administrative unit.
pub struct Page<'a> {
    pub title: String,
    pub charts: &'a [PieChart],
    pub script_url: &'a str,
}

impl<'a> Page<'a> {
    pub fn to_html(&self) -> Result<String, serde_json::Error> {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "    <title>{}</title>\n",
            html_escape::encode_text(&self.title)
        ));
        html.push_str(&format!(
            "    <script src=\"{}\"></script>\n",
            html_escape::encode_double_quoted_attribute(self.script_url)
        ));
        html.push_str("</head>\n<body>\n<style>\n");
        html.push_str(&format!(
            "    .container {{margin-top: {}px; display: flex; justify-content: center; align-items: center;}}\n",
            CHART_MARGIN
        ));
        html.push_str("    .item {margin: auto;}\n</style>\n");
        for (idx, chart) in self.charts.iter().enumerate() {
            let option = serde_json::to_string(&chart.option())?;
            html.push_str(&format!(
                "<div class=\"container\">\n    <div class=\"item\" id=\"chart_{idx}\" style=\"width:{w}px;height:{h}px;\"></div>\n</div>\n",
                idx = idx,
                w = CHART_WIDTH,
                h = CHART_HEIGHT
            ));
            html.push_str("<script type=\"text/javascript\">\n    \"use strict\";\n");
            html.push_str(&format!(
                "    let chart_{idx} = echarts.init(document.getElementById('chart_{idx}'), \"white\");\n",
                idx = idx
            ));
            // The data must not be able to close the script element.
            html.push_str(&format!(
                "    chart_{}.setOption({});\n</script>\n",
                idx,
                option.replace("</", "<\\/")
            ));
        }
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    pub fn write(&self, path: &Path) -> WriteResult<()> {
        let html = self.to_html().context(SerializingChartSnafu { path })?;
        fs::write(path, html).context(WritingPageSnafu { path })
    }
}
