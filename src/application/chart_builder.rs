use web_sys::Document;

use crate::domain::{
    chart::{ChartKind, ChartSpec, Series},
    errors::ChartResult,
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::rendering::CanvasRenderer;

/// A chart drawn on its display surface
pub struct PortfolioChart {
    spec: ChartSpec,
    renderer: CanvasRenderer,
}

impl PortfolioChart {
    fn draw(spec: ChartSpec, renderer: CanvasRenderer) -> ChartResult<Self> {
        renderer.render(&spec)?;
        get_logger().info(
            LogComponent::Application("ChartBuilder"),
            &format!("{} chart ready on '{}' ({} items)", spec.kind, spec.surface_id, spec.series.len()),
        );
        Ok(Self { spec, renderer })
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn kind(&self) -> ChartKind {
        self.spec.kind
    }

    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.spec.tooltip_label(index)
    }

    pub fn tick_label(&self, value: f64) -> Option<String> {
        self.spec.tick_label(value)
    }

    /// Draw again, e.g. after the canvas was resized
    pub fn redraw(&self) -> ChartResult<()> {
        self.renderer.render(&self.spec)
    }
}

/// Builds the portfolio charts. The surface is resolved before the data is
/// looked at, so a missing canvas is always reported as such.
pub struct ChartBuilder;

impl ChartBuilder {
    /// Composition pie: one slice per holding
    pub fn build_allocation_chart(
        document: &Document,
        surface_id: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<String>,
    ) -> ChartResult<PortfolioChart> {
        let renderer = CanvasRenderer::attach(document, surface_id)?;
        let spec = ChartSpec::allocation(surface_id, Series::new(labels, values)?, colors)?;
        PortfolioChart::draw(spec, renderer)
    }

    /// Portfolio value over time
    pub fn build_performance_chart(
        document: &Document,
        surface_id: &str,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> ChartResult<PortfolioChart> {
        let renderer = CanvasRenderer::attach(document, surface_id)?;
        let spec = ChartSpec::performance(surface_id, Series::new(labels, values)?);
        PortfolioChart::draw(spec, renderer)
    }

    /// Per-stock percentage returns
    pub fn build_returns_chart(
        document: &Document,
        surface_id: &str,
        labels: Vec<String>,
        returns: Vec<f64>,
    ) -> ChartResult<PortfolioChart> {
        let renderer = CanvasRenderer::attach(document, surface_id)?;
        let spec = ChartSpec::returns(surface_id, Series::new(labels, returns)?);
        PortfolioChart::draw(spec, renderer)
    }
}
