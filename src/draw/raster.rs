//! Cairo-based raster surface for shaded density figures.

use super::color::{BLACK, Color};
use super::surface::{
    AxisSide, BoxStyle, CurveMode, GraphicsSurface, PlotLabels, Stroke, SurfaceError,
};
use crate::util;
use std::f64::consts::FRAC_PI_2;
use std::fs::File;
use std::path::Path;

const FONT_FAMILY: &str = "Sans";

/// Fraction of the data range added on each side of the plot window.
const AXIS_PADDING: f64 = 0.04;

/// Figure margins in text lines: bottom, left, top, right.
const MARGIN_LINES: [f64; 4] = [5.1, 4.1, 4.1, 2.1];

/// Approximate number of intervals between axis ticks.
const TICK_TARGET: usize = 5;

/// Data-to-device mapping established by the first curve of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Plot region in device pixels
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotWindow {
    fn fit(x: (f64, f64), y: (f64, f64), region: (f64, f64, f64, f64)) -> Self {
        let pad_x = (x.1 - x.0) * AXIS_PADDING;
        let pad_y = (y.1 - y.0) * AXIS_PADDING;
        let (left, top, width, height) = region;
        Self {
            x_min: x.0 - pad_x,
            x_max: x.1 + pad_x,
            y_min: y.0 - pad_y,
            y_max: y.1 + pad_y,
            left,
            top,
            width,
            height,
        }
    }

    /// Maps a data-space point to device pixels.
    pub fn to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = self.left + (x - self.x_min) / (self.x_max - self.x_min) * self.width;
        let dy = self.top + self.height - (y - self.y_min) / (self.y_max - self.y_min) * self.height;
        (dx, dy)
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Renders onto an in-memory ARGB image.
///
/// The first [`CurveMode::NewPlot`] curve clears the image to the background,
/// fits the plot window to the curve and draws the titles. Every other call
/// needs that window and fails with [`SurfaceError::NoPlotWindow`] without it.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: i32,
    height: i32,
    background: Color,
    font_size: f64,
    window: Option<PlotWindow>,
}

impl CairoSurface {
    /// Creates a `width` x `height` image surface.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `background` - Color painted when a new plot starts
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&surface)?;

        ctx.set_antialias(cairo::Antialias::Best);
        ctx.select_font_face(
            FONT_FAMILY,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        let font_size = (width.min(height) as f64 / 40.0).clamp(10.0, 24.0);
        ctx.set_font_size(font_size);

        Ok(Self {
            surface,
            ctx,
            width,
            height,
            background,
            font_size,
            window: None,
        })
    }

    pub fn window(&self) -> Option<&PlotWindow> {
        self.window.as_ref()
    }

    /// Encodes the current image as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        log::info!(
            "Wrote {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Releases the drawing context and returns the image for inspection.
    pub fn into_image(self) -> cairo::ImageSurface {
        let Self { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }

    fn line_height(&self) -> f64 {
        self.font_size * 1.2
    }

    fn require_window(&self) -> Result<PlotWindow, SurfaceError> {
        self.window.ok_or(SurfaceError::NoPlotWindow)
    }

    /// Clears the image, fits the window to `points` and draws the titles.
    fn start_plot(
        &mut self,
        points: &[(f64, f64)],
        labels: &PlotLabels,
    ) -> Result<PlotWindow, SurfaceError> {
        self.ctx.reset_clip();
        self.background.apply(&self.ctx);
        self.ctx.paint()?;

        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        // The baseline stays visible so fills close against it on screen
        let (mut y_min, mut y_max) = (0.0f64, f64::NEG_INFINITY);
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !(x_max > x_min) {
            x_max = x_min + 1.0;
        }
        if !(y_max > y_min) {
            y_max = y_min + 1.0;
        }

        let lh = self.line_height();
        let left = MARGIN_LINES[1] * lh;
        let top = MARGIN_LINES[2] * lh;
        let width = (self.width as f64 - left - MARGIN_LINES[3] * lh).max(1.0);
        let height = (self.height as f64 - top - MARGIN_LINES[0] * lh).max(1.0);
        let window = PlotWindow::fit((x_min, x_max), (y_min, y_max), (left, top, width, height));

        BLACK.apply(&self.ctx);
        let center_x = window.left + window.width / 2.0;
        render_text(
            &self.ctx,
            &labels.x_label,
            center_x,
            window.bottom() + 2.6 * lh,
            (0.5, 0.0),
            0.0,
        )?;
        render_text(
            &self.ctx,
            &labels.y_label,
            window.left - 2.6 * lh,
            window.top + window.height / 2.0,
            (0.5, 1.0),
            -FRAC_PI_2,
        )?;
        if let Some(title) = labels.title.as_deref() {
            self.ctx.set_font_size(self.font_size * 1.2);
            let drawn = render_text(&self.ctx, title, center_x, window.top - 1.5 * lh, (0.5, 1.0), 0.0);
            self.ctx.set_font_size(self.font_size);
            drawn?;
        }

        log::debug!(
            "Plot window x=[{:.3}, {:.3}] y=[{:.3}, {:.3}]",
            window.x_min,
            window.x_max,
            window.y_min,
            window.y_max
        );
        self.window = Some(window);
        Ok(window)
    }

    /// Restricts drawing to the plot region until the matching restore.
    fn clip_to(&self, window: &PlotWindow) -> Result<(), SurfaceError> {
        self.ctx.save()?;
        self.ctx
            .rectangle(window.left, window.top, window.width, window.height);
        self.ctx.clip();
        Ok(())
    }
}

impl GraphicsSurface for CairoSurface {
    fn draw_curve(
        &mut self,
        points: &[(f64, f64)],
        stroke: &Stroke,
        mode: &CurveMode,
    ) -> Result<(), SurfaceError> {
        let window = match mode {
            CurveMode::NewPlot(labels) => self.start_plot(points, labels)?,
            CurveMode::Overlay => self.require_window()?,
        };

        self.clip_to(&window)?;
        let drawn = render_polyline(
            &self.ctx,
            points.iter().map(|&(x, y)| window.to_device(x, y)),
            stroke.color,
            stroke.width,
        );
        self.ctx.restore()?;
        Ok(drawn?)
    }

    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], color: Color) -> Result<(), SurfaceError> {
        let window = self.require_window()?;
        self.clip_to(&window)?;
        let drawn = render_polygon(
            &self.ctx,
            xs.iter().zip(ys).map(|(&x, &y)| window.to_device(x, y)),
            color,
        );
        self.ctx.restore()?;
        Ok(drawn?)
    }

    fn draw_axis(&mut self, side: AxisSide) -> Result<(), SurfaceError> {
        let window = self.require_window()?;
        let lh = self.line_height();
        let tick_length = 0.5 * lh;

        let (range_min, range_max) = if side.is_horizontal() {
            (window.x_min, window.x_max)
        } else {
            (window.y_min, window.y_max)
        };
        let (ticks, step) = util::pretty_ticks(range_min, range_max, TICK_TARGET);
        let ticks: Vec<f64> = ticks
            .into_iter()
            .filter(|t| (range_min..=range_max).contains(t))
            .collect();
        let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) else {
            return Ok(());
        };

        BLACK.apply(&self.ctx);
        self.ctx.set_line_width(1.0);
        self.ctx.set_line_cap(cairo::LineCap::Butt);

        match side {
            AxisSide::Bottom => {
                let y = window.bottom();
                let (x0, _) = window.to_device(first, 0.0);
                let (x1, _) = window.to_device(last, 0.0);
                self.ctx.move_to(x0, y);
                self.ctx.line_to(x1, y);
                for &tick in &ticks {
                    let (x, _) = window.to_device(tick, 0.0);
                    self.ctx.move_to(x, y);
                    self.ctx.line_to(x, y + tick_length);
                }
                self.ctx.stroke()?;
                for &tick in &ticks {
                    let (x, _) = window.to_device(tick, 0.0);
                    let label = util::format_tick(tick, step);
                    render_text(&self.ctx, &label, x, y + tick_length + 0.3 * lh, (0.5, 0.0), 0.0)?;
                }
            }
            AxisSide::Left => {
                let x = window.left;
                let (_, y0) = window.to_device(0.0, first);
                let (_, y1) = window.to_device(0.0, last);
                self.ctx.move_to(x, y0);
                self.ctx.line_to(x, y1);
                for &tick in &ticks {
                    let (_, y) = window.to_device(0.0, tick);
                    self.ctx.move_to(x, y);
                    self.ctx.line_to(x - tick_length, y);
                }
                self.ctx.stroke()?;
                for &tick in &ticks {
                    let (_, y) = window.to_device(0.0, tick);
                    let label = util::format_tick(tick, step);
                    render_text(
                        &self.ctx,
                        &label,
                        x - tick_length - 0.3 * lh,
                        y,
                        (0.5, 1.0),
                        -FRAC_PI_2,
                    )?;
                }
            }
        }
        Ok(())
    }

    fn draw_box(&mut self, style: BoxStyle) -> Result<(), SurfaceError> {
        let window = self.require_window()?;
        BLACK.apply(&self.ctx);
        self.ctx.set_line_width(1.0);
        self.ctx.set_line_join(cairo::LineJoin::Miter);

        match style {
            BoxStyle::Outline => {
                self.ctx
                    .rectangle(window.left, window.top, window.width, window.height);
            }
            BoxStyle::LShape => {
                self.ctx.move_to(window.left, window.top);
                self.ctx.line_to(window.left, window.bottom());
                self.ctx.line_to(window.right(), window.bottom());
            }
        }
        self.ctx.stroke()?;
        Ok(())
    }
}

/// Strokes a polyline through device-space points.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `points` - Vertices in device pixels
/// * `color` - Stroke color
/// * `width` - Line width in pixels
fn render_polyline(
    ctx: &cairo::Context,
    points: impl IntoIterator<Item = (f64, f64)>,
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    let mut points = points.into_iter();
    let Some((x0, y0)) = points.next() else {
        return Ok(());
    };

    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(x0, y0);
    for (x, y) in points {
        ctx.line_to(x, y);
    }
    ctx.stroke()
}

/// Fills a closed polygon through device-space points (no outline).
fn render_polygon(
    ctx: &cairo::Context,
    points: impl IntoIterator<Item = (f64, f64)>,
    color: Color,
) -> Result<(), cairo::Error> {
    let mut points = points.into_iter();
    let Some((x0, y0)) = points.next() else {
        return Ok(());
    };

    color.apply(ctx);
    ctx.new_path();
    ctx.move_to(x0, y0);
    for (x, y) in points {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    ctx.fill()
}

/// Draws `text` anchored at `(x, y)` with the cairo toy font API.
///
/// `align` positions the ink box relative to the anchor in the rotated frame:
/// `(0, 0)` puts its top-left corner there, `(0.5, 1)` its bottom centre.
fn render_text(
    ctx: &cairo::Context,
    text: &str,
    x: f64,
    y: f64,
    align: (f64, f64),
    angle: f64,
) -> Result<(), cairo::Error> {
    if text.is_empty() {
        return Ok(());
    }
    let extents = ctx.text_extents(text)?;

    ctx.save()?;
    ctx.translate(x, y);
    ctx.rotate(angle);
    ctx.move_to(
        -extents.x_bearing() - extents.width() * align.0,
        -extents.y_bearing() - extents.height() * align.1,
    );
    let shown = ctx.show_text(text);
    ctx.new_path();
    ctx.restore()?;
    shown
}
