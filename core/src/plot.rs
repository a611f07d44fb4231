//! SVG line charts for a single series over its step index.

use crate::{
    config::PlotConfig,
    error::{SimError, SimResult},
    series::TimeSeries,
};
use std::path::Path as FsPath;
use svg::{
    node::{
        element::{Line, Path, Rectangle, Text},
        Text as TextNode,
    },
    Document,
};

pub struct LineChart {
    pub title:   String,
    pub y_label: String,
    pub config:  PlotConfig,
}

impl LineChart {
    pub fn new(title: impl Into<String>, y_label: impl Into<String>, config: PlotConfig) -> Self {
        Self {
            title:   title.into(),
            y_label: y_label.into(),
            config,
        }
    }

    /// Pixel coordinates of every point, one per step, in step order.
    pub fn points(&self, series: &TimeSeries) -> SimResult<Vec<(f64, f64)>> {
        if series.is_empty() {
            return Err(SimError::EmptySeries);
        }
        self.config.validate()?;
        if let Some((step, value)) = series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::NonFiniteValue { step, value });
        }
        let (y_min, y_max) = y_range(series);
        let margin = self.config.margin as f64;
        let plot_w = self.config.width as f64 - 2.0 * margin;
        let plot_h = self.config.height as f64 - 2.0 * margin;
        let last = (series.len() - 1).max(1) as f64;

        Ok(series
            .iter()
            .enumerate()
            .map(|(step, v)| {
                let x = margin + plot_w * step as f64 / last;
                let y = margin + plot_h * (1.0 - (v - y_min) / (y_max - y_min));
                (x, y)
            })
            .collect())
    }

    pub fn document(&self, series: &TimeSeries) -> SimResult<Document> {
        let points = self.points(series)?;
        let (y_min, y_max) = y_range(series);
        let c = &self.config;
        let m = c.margin as f64;
        let (w, h) = (c.width as f64, c.height as f64);

        let line = Path::new()
            .set("d", points_to_svg(&points))
            .set("fill", "none")
            .set("stroke", c.stroke.as_str())
            .set("stroke-width", c.stroke_width);

        let frame = Rectangle::new()
            .set("x", m)
            .set("y", m)
            .set("width", w - 2.0 * m)
            .set("height", h - 2.0 * m)
            .set("fill", "none")
            .set("stroke", "#cccccc");

        let x_axis = axis_line((m, h - m), (w - m, h - m));
        let y_axis = axis_line((m, m), (m, h - m));

        let document = Document::new()
            .set("viewBox", (0u32, 0u32, c.width, c.height))
            .set("width", c.width)
            .set("height", c.height)
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            )
            .add(frame)
            .add(x_axis)
            .add(y_axis)
            .add(label(w / 2.0, m / 2.0, "middle", &self.title))
            .add(label(w / 2.0, h - m / 4.0, "middle", "Time step"))
            .add(label(m / 4.0, h / 2.0, "start", &self.y_label))
            .add(label(m - 4.0, m, "end", &format!("{y_max:.2}")))
            .add(label(m - 4.0, h - m, "end", &format!("{y_min:.2}")))
            .add(label(w - m, h - m / 2.0, "end", &format!("{}", series.len() - 1)))
            .add(line);

        Ok(document)
    }

    pub fn save(&self, series: &TimeSeries, path: impl AsRef<FsPath>) -> SimResult<()> {
        let document = self.document(series)?;
        svg::save(path.as_ref(), &document)?;
        log::debug!("chart '{}' saved to {}", self.title, path.as_ref().display());
        Ok(())
    }
}

/// Vertical range shown on the chart. Always includes zero; a flat series
/// gets a unit span so the mapping stays finite.
fn y_range(series: &TimeSeries) -> (f64, f64) {
    let lo = series.iter().fold(0.0_f64, f64::min);
    let hi = series.iter().fold(0.0_f64, f64::max);
    if hi - lo > f64::EPSILON {
        (lo, hi)
    } else {
        (lo, lo + 1.0)
    }
}

fn points_to_svg(points: &[(f64, f64)]) -> String {
    let body = points
        .iter()
        .map(|(x, y)| format!("{x:.2} {y:.2}"))
        .collect::<Vec<String>>()
        .join("L");
    format!("M{body}")
}

fn axis_line(from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", "black")
}

fn label(x: f64, y: f64, anchor: &str, text: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .set("font-size", 14)
        .add(TextNode::new(text))
}
