use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::geometry::{
    PlotArea, ValueScale, bar_rect, category_center, control_points, point_x, slice_angles,
    tick_values, value_range,
};
use crate::domain::{
    chart::{ChartKind, ChartSpec},
    errors::{ChartError, ChartResult},
    logging::{LogComponent, get_logger},
};

const BACKGROUND: &str = "#ffffff";
const AXIS_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const LABEL_COLOR: &str = "#666666";
const FONT: &str = "12px sans-serif";
const PADDING: f64 = 10.0;
const AXIS_LABEL_WIDTH: f64 = 60.0;
const CATEGORY_LABEL_HEIGHT: f64 = 24.0;
const LEGEND_WIDTH: f64 = 140.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_ROW: f64 = 20.0;

/// Canvas 2D renderer bound to one display surface
pub struct CanvasRenderer {
    surface_id: String,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Resolve `surface_id` to a canvas and its 2D context
    pub fn attach(document: &Document, surface_id: &str) -> ChartResult<Self> {
        let canvas = document
            .get_element_by_id(surface_id)
            .ok_or_else(|| ChartError::SurfaceNotFound(surface_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::SurfaceNotFound(surface_id.to_string()))?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| ChartError::ContextUnavailable(surface_id.to_string()))?
            .ok_or_else(|| ChartError::ContextUnavailable(surface_id.to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::ContextUnavailable(surface_id.to_string()))?;

        Ok(Self { surface_id: surface_id.to_string(), canvas, context })
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Clear the surface and draw `spec`
    pub fn render(&self, spec: &ChartSpec) -> ChartResult<()> {
        let (width, height) = self.size();
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);
        ctx.set_font(FONT);

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Drawing {} chart with {} items on '{}'", spec.kind, spec.series.len(), self.surface_id),
        );

        match spec.kind {
            ChartKind::Pie => self.render_pie(spec, width, height),
            ChartKind::Line => self.render_line(spec, width, height),
            ChartKind::Bar => self.render_bar(spec, width, height),
        }
    }

    fn render_pie(&self, spec: &ChartSpec, width: f64, height: f64) -> ChartResult<()> {
        let ctx = &self.context;
        let area = PlotArea::inset(width, height, PADDING, LEGEND_WIDTH + PADDING, PADDING, PADDING);
        let radius = (area.width.min(area.height) / 2.0).max(0.0);
        let (cx, cy) = (area.x + area.width / 2.0, area.y + area.height / 2.0);

        for (index, (start, end)) in slice_angles(spec.series.values()).into_iter().enumerate() {
            if end <= start {
                continue;
            }
            ctx.begin_path();
            ctx.move_to(cx, cy);
            ctx.arc(cx, cy, radius, start, end).map_err(drawing_error)?;
            ctx.close_path();
            ctx.set_fill_style_str(spec.fill_color(index).unwrap_or(LABEL_COLOR));
            ctx.fill();
            ctx.set_stroke_style_str(BACKGROUND);
            ctx.set_line_width(spec.style.border_width as f64);
            ctx.stroke();
        }

        self.render_legend(spec, area.right() + PADDING, area.y)
    }

    fn render_legend(&self, spec: &ChartSpec, x: f64, y: f64) -> ChartResult<()> {
        let ctx = &self.context;
        if let Some(size) = spec.options.legend_font_size {
            ctx.set_font(&format!("{}px sans-serif", size));
        }
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");

        for (index, label) in spec.series.labels().iter().enumerate() {
            let row_y = y + index as f64 * LEGEND_ROW;
            ctx.set_fill_style_str(spec.fill_color(index).unwrap_or(LABEL_COLOR));
            ctx.fill_rect(x, row_y, LEGEND_SWATCH, LEGEND_SWATCH);
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.fill_text(label, x + LEGEND_SWATCH + 6.0, row_y + LEGEND_SWATCH / 2.0)
                .map_err(drawing_error)?;
        }
        Ok(())
    }

    /// Plot area, y scale and gridlines shared by line and bar charts
    fn render_value_axis(&self, spec: &ChartSpec, width: f64, height: f64) -> ChartResult<(PlotArea, ValueScale)> {
        let ctx = &self.context;
        let area = PlotArea::inset(width, height, AXIS_LABEL_WIDTH, PADDING, PADDING, CATEGORY_LABEL_HEIGHT);
        let (min, max) = value_range(spec.series.values(), spec.options.begin_at_zero);
        let ticks = tick_values(min, max);
        let scale = ValueScale::for_ticks(&ticks, &area);

        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_line_width(1.0);
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for tick in ticks {
            let y = scale.value_to_y(tick);
            ctx.begin_path();
            ctx.move_to(area.x, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            if let Some(label) = spec.tick_label(tick) {
                ctx.fill_text(&label, area.x - 6.0, y).map_err(drawing_error)?;
            }
        }

        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        let len = spec.series.len();
        for (index, label) in spec.series.labels().iter().enumerate() {
            let x = match spec.kind {
                ChartKind::Line => point_x(index, len, &area),
                _ => category_center(index, len, &area),
            };
            ctx.fill_text(label, x, area.bottom() + 6.0).map_err(drawing_error)?;
        }

        Ok((area, scale))
    }

    fn render_line(&self, spec: &ChartSpec, width: f64, height: f64) -> ChartResult<()> {
        let ctx = &self.context;
        let (area, scale) = self.render_value_axis(spec, width, height)?;
        let values = spec.series.values();
        if values.is_empty() {
            return Ok(());
        }

        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (point_x(i, values.len(), &area), scale.value_to_y(v)))
            .collect();
        let controls = control_points(&points, spec.style.tension);

        let trace = |ctx: &CanvasRenderingContext2d| {
            ctx.move_to(points[0].0, points[0].1);
            for i in 1..points.len() {
                let (_, after) = controls[i - 1];
                let (before, _) = controls[i];
                ctx.bezier_curve_to(after.0, after.1, before.0, before.1, points[i].0, points[i].1);
            }
        };

        if spec.style.fill {
            ctx.begin_path();
            trace(ctx);
            let baseline = area.bottom();
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                ctx.line_to(last.0, baseline);
                ctx.line_to(first.0, baseline);
            }
            ctx.close_path();
            ctx.set_fill_style_str(spec.fill_color(0).unwrap_or(AXIS_COLOR));
            ctx.fill();
        }

        ctx.begin_path();
        trace(ctx);
        ctx.set_stroke_style_str(spec.border_color(0).unwrap_or(LABEL_COLOR));
        ctx.set_line_width(spec.style.border_width as f64);
        ctx.stroke();
        Ok(())
    }

    fn render_bar(&self, spec: &ChartSpec, width: f64, height: f64) -> ChartResult<()> {
        let ctx = &self.context;
        let (area, scale) = self.render_value_axis(spec, width, height)?;
        let values = spec.series.values();

        ctx.set_line_width(spec.style.border_width as f64);
        for (index, &value) in values.iter().enumerate() {
            let (x, y, w, h) = bar_rect(index, values.len(), value, &area, &scale);
            ctx.set_fill_style_str(spec.fill_color(index).unwrap_or(LABEL_COLOR));
            ctx.fill_rect(x, y, w, h);
            ctx.set_stroke_style_str(spec.border_color(index).unwrap_or(LABEL_COLOR));
            ctx.stroke_rect(x, y, w, h);
        }
        Ok(())
    }
}

fn drawing_error(value: wasm_bindgen::JsValue) -> ChartError {
    ChartError::DrawingFailed(format!("{:?}", value))
}
