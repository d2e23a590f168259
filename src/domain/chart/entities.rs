use serde::Serialize;
use serde_json::{Value, json};

use super::services::{ChartFormattingService, TickFormat, TooltipFormat};
use super::value_objects::{ChartKind, Color, ColorPair, LegendPosition, palette_color};
use crate::domain::errors::{ChartError, ChartResult};

/// Parallel label/value sequences describing one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::SeriesLengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn get(&self, index: usize) -> Option<(&str, f64)> {
        Some((self.labels.get(index)?.as_str(), *self.values.get(index)?))
    }
}

/// One color for the whole dataset, or one per item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSetting {
    Single(String),
    PerItem(Vec<String>),
}

impl ColorSetting {
    pub fn for_index(&self, index: usize) -> Option<&str> {
        match self {
            ColorSetting::Single(color) => Some(color),
            ColorSetting::PerItem(colors) => colors.get(index).map(String::as_str),
        }
    }
}

/// Dataset styling
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStyle {
    pub label: Option<String>,
    pub background: ColorSetting,
    pub border: Option<ColorSetting>,
    pub border_width: u32,
    pub tension: f64,
    pub fill: bool,
}

/// Presentation rules shared by every chart kind
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: Option<LegendPosition>,
    pub legend_font_size: Option<u32>,
    pub begin_at_zero: bool,
    pub tooltip: TooltipFormat,
    pub ticks: TickFormat,
}

impl ChartOptions {
    fn new(tooltip: TooltipFormat, ticks: TickFormat) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: None,
            legend_font_size: None,
            begin_at_zero: false,
            tooltip,
            ticks,
        }
    }
}

/// A configured chart bound to a display surface
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub surface_id: String,
    pub kind: ChartKind,
    pub series: Series,
    pub style: DatasetStyle,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Portfolio composition pie. An empty `colors` cycles the default palette.
    pub fn allocation(surface_id: &str, series: Series, colors: Vec<String>) -> ChartResult<Self> {
        let colors = if colors.is_empty() {
            (0..series.len()).map(|i| palette_color(i).to_hex_string()).collect()
        } else if colors.len() != series.len() {
            return Err(ChartError::ColorCountMismatch {
                expected: series.len(),
                actual: colors.len(),
            });
        } else {
            colors
        };

        let mut options = ChartOptions::new(TooltipFormat::AllocationShare, TickFormat::None);
        options.legend = Some(LegendPosition::Right);
        options.legend_font_size = Some(12);

        Ok(Self {
            surface_id: surface_id.to_string(),
            kind: ChartKind::Pie,
            series,
            style: DatasetStyle {
                label: None,
                background: ColorSetting::PerItem(colors),
                border: None,
                border_width: 1,
                tension: 0.0,
                fill: false,
            },
            options,
        })
    }

    /// Portfolio value over time
    pub fn performance(surface_id: &str, series: Series) -> Self {
        Self {
            surface_id: surface_id.to_string(),
            kind: ChartKind::Line,
            series,
            style: DatasetStyle {
                label: Some("Portfolio Value".to_string()),
                background: ColorSetting::Single(Color::PERFORMANCE_LINE.with_alpha(0.1).to_css()),
                border: Some(ColorSetting::Single(Color::PERFORMANCE_LINE.to_hex_string())),
                border_width: 2,
                tension: 0.4,
                fill: true,
            },
            options: ChartOptions::new(TooltipFormat::CurrencyValue, TickFormat::Currency),
        }
    }

    /// Per-stock returns, colored by sign
    pub fn returns(surface_id: &str, series: Series) -> Self {
        let (fills, borders): (Vec<String>, Vec<String>) = series
            .values()
            .iter()
            .map(|&value| {
                let pair = ColorPair::for_return(value);
                (pair.fill, pair.border)
            })
            .unzip();

        // Bars grow from the zero baseline
        let mut options = ChartOptions::new(TooltipFormat::PercentReturn, TickFormat::Percent);
        options.begin_at_zero = true;

        Self {
            surface_id: surface_id.to_string(),
            kind: ChartKind::Bar,
            series,
            style: DatasetStyle {
                label: Some("Return %".to_string()),
                background: ColorSetting::PerItem(fills),
                border: Some(ColorSetting::PerItem(borders)),
                border_width: 1,
                tension: 0.0,
                fill: false,
            },
            options,
        }
    }

    /// Tooltip text for item `index`
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let (label, value) = self.series.get(index)?;
        let text = match self.options.tooltip {
            TooltipFormat::AllocationShare => {
                ChartFormattingService::allocation_tooltip(label, value, self.series.total())
            }
            TooltipFormat::CurrencyValue => ChartFormattingService::performance_tooltip(value),
            TooltipFormat::PercentReturn => ChartFormattingService::returns_tooltip(value),
        };
        Some(text)
    }

    /// Y-axis tick text; `None` for charts without a value axis
    pub fn tick_label(&self, value: f64) -> Option<String> {
        ChartFormattingService::tick_label(self.options.ticks, value)
    }

    pub fn fill_color(&self, index: usize) -> Option<&str> {
        self.style.background.for_index(index)
    }

    pub fn border_color(&self, index: usize) -> Option<&str> {
        self.style.border.as_ref().and_then(|border| border.for_index(index))
    }

    /// Chart.js-shaped configuration object (formatters excluded)
    pub fn to_config(&self) -> Value {
        let mut dataset = json!({
            "data": self.series.values(),
            "backgroundColor": self.style.background,
            "borderWidth": self.style.border_width,
        });
        if let Some(label) = &self.style.label {
            dataset["label"] = json!(label);
        }
        if let Some(border) = &self.style.border {
            dataset["borderColor"] = json!(border);
        }
        if self.kind == ChartKind::Line {
            dataset["tension"] = json!(self.style.tension);
            dataset["fill"] = json!(self.style.fill);
        }

        let mut options = json!({
            "responsive": self.options.responsive,
            "maintainAspectRatio": self.options.maintain_aspect_ratio,
        });
        if let Some(position) = self.options.legend {
            options["plugins"] = json!({
                "legend": {
                    "position": position,
                    "labels": { "font": { "size": self.options.legend_font_size } }
                }
            });
        }
        if self.options.ticks != TickFormat::None {
            options["scales"] = json!({ "y": { "beginAtZero": self.options.begin_at_zero } });
        }

        json!({
            "type": self.kind,
            "data": {
                "labels": self.series.labels(),
                "datasets": [dataset],
            },
            "options": options,
        })
    }
}
