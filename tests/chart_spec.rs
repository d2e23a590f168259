use insta::assert_snapshot;
use portfolio_ui_wasm::domain::chart::{ChartKind, ChartSpec, ColorPair, Series, palette_color};
use portfolio_ui_wasm::domain::errors::ChartError;

fn series(labels: &[&str], values: &[f64]) -> Series {
    Series::new(labels.iter().map(|l| l.to_string()).collect(), values.to_vec()).unwrap()
}

fn holdings() -> Series {
    series(&["AAPL", "MSFT", "CASH"], &[600.0, 300.0, 100.0])
}

#[test]
fn allocation_tooltips_show_value_and_share() {
    let spec = ChartSpec::allocation("portfolioPieChart", holdings(), Vec::new()).unwrap();
    let labels: Vec<String> = (0..3).filter_map(|i| spec.tooltip_label(i)).collect();

    assert_snapshot!(labels.join("\n"), @r"
    AAPL: $600.00 (60%)
    MSFT: $300.00 (30%)
    CASH: $100.00 (10%)
    ");
    assert_eq!(spec.tooltip_label(3), None);
}

#[test]
fn allocation_share_rounds_like_the_browser() {
    let spec = ChartSpec::allocation("pie", series(&["A", "B", "C"], &[1.0, 1.0, 1.0]), Vec::new()).unwrap();
    assert_eq!(spec.tooltip_label(0).unwrap(), "A: $1.00 (33%)");

    let halves = ChartSpec::allocation("pie", series(&["A", "B"], &[1.0, 7.0]), Vec::new()).unwrap();
    // 12.5 rounds up
    assert_eq!(halves.tooltip_label(0).unwrap(), "A: $1.00 (13%)");
}

#[test]
fn zero_sum_allocation_reports_zero_share() {
    let spec = ChartSpec::allocation("pie", series(&["A", "B"], &[0.0, 0.0]), Vec::new()).unwrap();
    assert_eq!(spec.tooltip_label(1).unwrap(), "B: $0.00 (0%)");
}

#[test]
fn allocation_without_colors_cycles_palette() {
    let labels: Vec<&str> = vec!["S"; 17];
    let values = vec![1.0; 17];
    let spec = ChartSpec::allocation("pie", series(&labels, &values), Vec::new()).unwrap();

    assert_eq!(spec.fill_color(0), Some("#4dc9f6"));
    assert_eq!(spec.fill_color(15).map(str::to_string), Some(palette_color(0).to_hex_string()));
    assert_eq!(spec.fill_color(16).map(str::to_string), Some(palette_color(1).to_hex_string()));
}

#[test]
fn allocation_keeps_caller_colors() {
    let colors = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
    let spec = ChartSpec::allocation("pie", holdings(), colors).unwrap();
    assert_eq!(spec.fill_color(2), Some("blue"));
    assert_eq!(spec.border_color(0), None);
}

#[test]
fn mismatched_colors_are_rejected() {
    let err = ChartSpec::allocation("pie", holdings(), vec!["red".to_string()]).unwrap_err();
    assert_eq!(err, ChartError::ColorCountMismatch { expected: 3, actual: 1 });
}

#[test]
fn mismatched_series_is_rejected() {
    let err = Series::new(vec!["A".to_string()], vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err, ChartError::SeriesLengthMismatch { labels: 1, values: 2 });
}

#[test]
fn performance_chart_formats_currency() {
    let spec = ChartSpec::performance("performanceChart", series(&["Jan", "Feb"], &[1000.0, 1234.5]));

    assert_eq!(spec.kind, ChartKind::Line);
    assert_eq!(spec.tooltip_label(1).unwrap(), "Value: $1234.50");
    assert_eq!(spec.tick_label(250.0).unwrap(), "$250.00");
    assert_eq!(spec.fill_color(0), Some("rgba(77, 201, 246, 0.1)"));
    assert_eq!(spec.border_color(5), Some("#4dc9f6"));
}

#[test]
fn half_cent_tooltips_round_away_from_zero() {
    let line = ChartSpec::performance("line", series(&["Jan"], &[0.125]));
    assert_eq!(line.tooltip_label(0).unwrap(), "Value: $0.13");

    let bars = ChartSpec::returns("bars", series(&["UP", "DOWN"], &[0.125, -0.125]));
    assert_eq!(bars.tooltip_label(0).unwrap(), "Return: 0.13%");
    assert_eq!(bars.tooltip_label(1).unwrap(), "Return: -0.13%");
}

#[test]
fn returns_chart_colors_follow_sign() {
    let spec = ChartSpec::returns("stockPerformanceChart", series(&["UP", "FLAT", "DOWN"], &[12.5, 0.0, -3.25]));

    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.fill_color(0).unwrap(), ColorPair::positive().fill);
    assert_eq!(spec.fill_color(1).unwrap(), ColorPair::positive().fill);
    assert_eq!(spec.border_color(2).unwrap(), ColorPair::negative().border);
    assert_eq!(spec.fill_color(2), Some("rgba(220, 53, 69, 0.7)"));
}

#[test]
fn returns_chart_formats_percentages() {
    let spec = ChartSpec::returns("bars", series(&["UP", "DOWN"], &[12.5, -3.0]));

    assert_eq!(spec.tooltip_label(0).unwrap(), "Return: 12.50%");
    assert_eq!(spec.tooltip_label(1).unwrap(), "Return: -3.00%");
    assert_eq!(spec.tick_label(-5.0).unwrap(), "-5%");
    assert_eq!(spec.tick_label(2.5).unwrap(), "2.5%");
}

#[test]
fn pie_has_no_tick_labels() {
    let spec = ChartSpec::allocation("pie", holdings(), Vec::new()).unwrap();
    assert_eq!(spec.tick_label(10.0), None);
}

#[test]
fn config_mirrors_chart_options() {
    let pie = ChartSpec::allocation("pie", holdings(), Vec::new()).unwrap().to_config();
    assert_eq!(pie["type"], "pie");
    assert_eq!(pie["options"]["responsive"], true);
    assert_eq!(pie["options"]["maintainAspectRatio"], false);
    assert_eq!(pie["options"]["plugins"]["legend"]["position"], "right");
    assert_eq!(pie["options"]["plugins"]["legend"]["labels"]["font"]["size"], 12);
    assert_eq!(pie["data"]["labels"][1], "MSFT");
    assert_eq!(pie["data"]["datasets"][0]["borderWidth"], 1);

    let line = ChartSpec::performance("line", series(&["Jan"], &[1.0])).to_config();
    assert_eq!(line["data"]["datasets"][0]["label"], "Portfolio Value");
    assert_eq!(line["data"]["datasets"][0]["tension"], 0.4);
    assert_eq!(line["data"]["datasets"][0]["fill"], true);
    assert_eq!(line["options"]["scales"]["y"]["beginAtZero"], false);

    let bar = ChartSpec::returns("bar", series(&["A"], &[-1.0])).to_config();
    assert_eq!(bar["type"], "bar");
    assert_eq!(bar["data"]["datasets"][0]["label"], "Return %");
    assert_eq!(bar["data"]["datasets"][0]["borderColor"][0], "rgb(220, 53, 69)");
    assert!(bar["data"]["datasets"][0].get("tension").is_none());
}
