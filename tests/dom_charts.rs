#![cfg(target_arch = "wasm32")]

use portfolio_ui_wasm::application::ChartBuilder;
use portfolio_ui_wasm::domain::chart::ChartKind;
use portfolio_ui_wasm::domain::errors::ChartError;
use portfolio_ui_wasm::presentation::wasm_api::{
    create_performance_line_chart, create_stock_performance_bar_chart, format_total,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_canvas(id: &str) -> Element {
    let canvas = document().create_element("canvas").unwrap();
    canvas.set_id(id);
    canvas.set_attribute("width", "320").unwrap();
    canvas.set_attribute("height", "200").unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[wasm_bindgen_test]
fn missing_surface_is_reported() {
    let err = ChartBuilder::build_allocation_chart(&document(), "noSuchCanvas", strings(&["A"]), vec![1.0], Vec::new())
        .err()
        .unwrap();
    assert_eq!(err, ChartError::SurfaceNotFound("noSuchCanvas".to_string()));
}

#[wasm_bindgen_test]
fn non_canvas_surface_is_reported() {
    let div = document().create_element("div").unwrap();
    div.set_id("notACanvas");
    document().body().unwrap().append_child(&div).unwrap();

    let err = ChartBuilder::build_performance_chart(&document(), "notACanvas", strings(&["Jan"]), vec![1.0])
        .err()
        .unwrap();
    assert_eq!(err, ChartError::SurfaceNotFound("notACanvas".to_string()));
    div.remove();
}

#[wasm_bindgen_test]
fn surface_is_checked_before_series() {
    let err = ChartBuilder::build_returns_chart(&document(), "absentBars", strings(&["A", "B"]), vec![1.0])
        .err()
        .unwrap();
    assert_eq!(err, ChartError::SurfaceNotFound("absentBars".to_string()));

    let canvas = mount_canvas("presentBars");
    let err = ChartBuilder::build_returns_chart(&document(), "presentBars", strings(&["A", "B"]), vec![1.0])
        .err()
        .unwrap();
    assert_eq!(err, ChartError::SeriesLengthMismatch { labels: 2, values: 1 });
    canvas.remove();
}

#[wasm_bindgen_test]
fn pie_chart_draws_and_redraws() {
    let canvas = mount_canvas("portfolioPieChart");
    let chart = ChartBuilder::build_allocation_chart(
        &document(),
        "portfolioPieChart",
        strings(&["AAPL", "CASH"]),
        vec![750.0, 250.0],
        Vec::new(),
    )
    .unwrap();

    assert_eq!(chart.kind(), ChartKind::Pie);
    assert_eq!(chart.tooltip_label(0).unwrap(), "AAPL: $750.00 (75%)");
    chart.redraw().unwrap();
    canvas.remove();
}

#[wasm_bindgen_test]
fn empty_series_still_draws() {
    let canvas = mount_canvas("emptyLine");
    let chart = ChartBuilder::build_performance_chart(&document(), "emptyLine", Vec::new(), Vec::new()).unwrap();
    assert_eq!(chart.tooltip_label(0), None);
    canvas.remove();
}

#[wasm_bindgen_test]
fn exported_handles_expose_kind_and_config() {
    let line_canvas = mount_canvas("performanceChart");
    let line = create_performance_line_chart("performanceChart", strings(&["Jan", "Feb"]), vec![100.0, 120.0]).unwrap();
    assert_eq!(line.kind(), "line");
    assert_eq!(line.tick_label(50.0).unwrap(), "$50.00");

    let config = line.to_config().unwrap();
    let kind = js_sys::Reflect::get(&config, &JsValue::from_str("type")).unwrap();
    assert_eq!(kind.as_string().unwrap(), "line");

    let bar_canvas = mount_canvas("stockPerformanceChart");
    let bars = create_stock_performance_bar_chart("stockPerformanceChart", strings(&["UP", "DOWN"]), vec![4.0, -2.0]).unwrap();
    assert_eq!(bars.kind(), "bar");
    assert_eq!(bars.tooltip_label(1).unwrap(), "Return: -2.00%");
    bars.redraw().unwrap();

    line_canvas.remove();
    bar_canvas.remove();
}

#[wasm_bindgen_test]
fn exported_total_formatter() {
    assert_eq!(format_total("3", "2.5"), "$7.50");
    assert_eq!(format_total("", "4"), "$0.00");
}
