use std::io::{self, Write};

use crate::{ast::Expr, evaluator::evaluate, limits::Limits};

/// Page width in PostScript points (A4).
pub const PAGE_WIDTH: f64 = 595.0;
/// Page height in PostScript points (A4).
pub const PAGE_HEIGHT: f64 = 842.0;
/// Blank border kept between the plot window and the page edges.
pub const PAGE_MARGIN: f64 = 100.0;
/// How far the axis lines extend past the plot window, in points.
pub const AXIS_OVERHANG: f64 = 25.0;
/// Half-length of a tick mark and size of the axis arrowheads, in points.
pub const TICK_SIZE: f64 = 5.0;
/// Point size of the Courier font used for labels.
pub const FONT_SIZE: f64 = 12.0;
/// Distance between consecutive sample points on the x axis, in plot units.
pub const SAMPLE_STEP: f64 = 0.01;

/// Precomputed page geometry for one plot.
///
/// Holds the per-axis scale factors that map plot units to PostScript points
/// and the page positions of the two axis lines. An axis normally sits at
/// zero; when zero lies outside the visible window it is pinned to the nearer
/// window edge instead.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    limits:  Limits,
    scale_x: f64,
    scale_y: f64,
    /// Page x coordinate of the y-axis line.
    axis_x:  f64,
    /// Page y coordinate of the x-axis line.
    axis_y:  f64,
}

impl Canvas {
    /// Computes the page geometry for the given window.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        let scale_x = (PAGE_WIDTH - PAGE_MARGIN) / limits.x_span();
        let scale_y = (PAGE_HEIGHT - PAGE_MARGIN) / limits.y_span();

        let axis_x = if limits.x_min > 0.0 {
            limits.x_min * scale_x
        } else if limits.x_max < 0.0 {
            limits.x_max * scale_x
        } else {
            0.0
        };
        let axis_y = if limits.y_min > 0.0 {
            limits.y_min * scale_y
        } else if limits.y_max < 0.0 {
            limits.y_max * scale_y
        } else {
            0.0
        };

        Self { limits,
               scale_x,
               scale_y,
               axis_x,
               axis_y }
    }

    /// Writes the document prologue.
    ///
    /// Sets up the font, the A4 page size, and a translation that centers the
    /// plot window on the page, then switches to red for the axes.
    fn prologue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "%!PS")?;
        writeln!(out, "%PageSetup")?;
        writeln!(out, "/Courier findfont {FONT_SIZE:.6} scalefont setfont")?;
        writeln!(out, "<< /PageSize [{PAGE_WIDTH:.6} {PAGE_HEIGHT:.6}] >> setpagedevice")?;
        writeln!(out, "/inch {{72 mul}} def")?;

        let translate_x =
            PAGE_WIDTH / 2.0 - self.scale_x * (self.limits.x_max + self.limits.x_min) / 2.0;
        let translate_y =
            PAGE_HEIGHT / 2.0 - self.scale_y * (self.limits.y_max + self.limits.y_min) / 2.0;
        writeln!(out, "{translate_x:.6} {translate_y:.6} translate")?;

        writeln!(out, "1 0 0 setrgbcolor")
    }

    /// Draws the axis lines, their arrowheads, and the `x`/`y` labels.
    fn axes<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let x_start = self.limits.x_min * self.scale_x - AXIS_OVERHANG;
        let x_end = self.limits.x_max * self.scale_x + AXIS_OVERHANG;
        let y_start = self.limits.y_min * self.scale_y - AXIS_OVERHANG;
        let y_end = self.limits.y_max * self.scale_y + AXIS_OVERHANG;

        writeln!(out, "{x_start:.6} {:.6} moveto", self.axis_y)?;
        writeln!(out, "{x_end:.6} {:.6} lineto", self.axis_y)?;
        writeln!(out, "stroke")?;

        writeln!(out,
                 "{:.6} {:.6} moveto",
                 x_end - TICK_SIZE,
                 TICK_SIZE + self.axis_y)?;
        writeln!(out, "{x_end:.6} {:.6} lineto", self.axis_y)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 x_end - TICK_SIZE,
                 -TICK_SIZE + self.axis_y)?;
        writeln!(out, "stroke")?;

        writeln!(out,
                 "{:.6} {:.6} moveto",
                 x_end - TICK_SIZE,
                 -FONT_SIZE + self.axis_y)?;
        writeln!(out, "(x) show")?;

        writeln!(out, "{:.6} {y_start:.6} moveto", self.axis_x)?;
        writeln!(out, "{:.6} {y_end:.6} lineto", self.axis_x)?;
        writeln!(out, "stroke")?;

        writeln!(out,
                 "{:.6} {:.6} moveto",
                 -TICK_SIZE + self.axis_x,
                 y_end - TICK_SIZE)?;
        writeln!(out, "{:.6} {y_end:.6} lineto", self.axis_x)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 TICK_SIZE + self.axis_x,
                 y_end - TICK_SIZE)?;
        writeln!(out, "stroke")?;

        writeln!(out,
                 "{:.6} {:.6} moveto",
                 TICK_SIZE + self.axis_x,
                 y_end - TICK_SIZE)?;
        writeln!(out, "(y) show")
    }

    /// Draws the plot-window boundary as dashed blue lines.
    fn boundary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "0 0 0.5 setrgbcolor")?;
        writeln!(out, "[5 15] 0 setdash")?;

        for x in [self.limits.x_max, self.limits.x_min] {
            writeln!(out, "{:.6} {:.6} moveto", x * self.scale_x, -PAGE_HEIGHT * 2.0)?;
            writeln!(out, "{:.6} {:.6} lineto", x * self.scale_x, PAGE_HEIGHT * 2.0)?;
        }
        for y in [self.limits.y_max, self.limits.y_min] {
            writeln!(out, "{:.6} {:.6} moveto", -PAGE_WIDTH * 2.0, y * self.scale_y)?;
            writeln!(out, "{:.6} {:.6} lineto", PAGE_WIDTH * 2.0, y * self.scale_y)?;
        }

        writeln!(out, "stroke")?;
        writeln!(out, "[] 0 setdash")
    }

    /// Draws the support grid: grey unit lines, black tick marks, and number
    /// labels along both axes.
    ///
    /// Grid lines sit on integer plot coordinates only. A grey line is
    /// suppressed where it would coincide with an axis or with the window
    /// boundary; ticks and labels are drawn everywhere, except that zero is
    /// never labelled.
    #[allow(clippy::float_cmp)] // boundary coincidence is an exact check
    fn grid<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let x_right = self.limits.x_max;
        let x_left = self.limits.x_min.abs();
        let y_up = self.limits.y_max;
        let y_down = self.limits.y_min.abs();

        // Counters stay f64 so windows wider than i32 can never overflow
        // them; steps of 1.0 are exact well past any plottable range.
        let mut i = 0.0;
        while i <= x_right {
            if i > 0.0 && i != x_right {
                self.vertical_grey_line(out, i)?;
            }
            self.vertical_tick(out, i)?;
            writeln!(out,
                     "{:.6} {:.6} moveto",
                     i * self.scale_x - FONT_SIZE / 4.0,
                     -FONT_SIZE - TICK_SIZE + self.axis_y)?;
            if i > 0.0 {
                writeln!(out, "({i}) show")?;
            }
            i += 1.0;
        }

        let mut i = -1.0;
        while i >= -x_left {
            if i != -x_left {
                self.vertical_grey_line(out, i)?;
            }
            self.vertical_tick(out, i)?;
            // Negative labels are one character wider, so they sit further left.
            writeln!(out,
                     "{:.6} {:.6} moveto",
                     i * self.scale_x - FONT_SIZE + FONT_SIZE / 10.0,
                     -FONT_SIZE - TICK_SIZE + self.axis_y)?;
            writeln!(out, "({i}) show")?;
            i -= 1.0;
        }

        let mut i = 0.0;
        while i <= y_up {
            if i > 0.0 && i != y_up {
                self.horizontal_grey_line(out, i)?;
            }
            self.horizontal_tick(out, i)?;
            if i > 0.0 {
                writeln!(out,
                         "{:.6} {:.6} moveto",
                         TICK_SIZE + 1.0 + self.axis_x,
                         i * self.scale_y - FONT_SIZE / 4.0)?;
                writeln!(out, "({i}) show")?;
            }
            i += 1.0;
        }

        let mut i = -1.0;
        while i >= -y_down {
            if i != -y_down {
                self.horizontal_grey_line(out, i)?;
            }
            self.horizontal_tick(out, i)?;
            writeln!(out,
                     "{:.6} {:.6} moveto",
                     TICK_SIZE + 1.0 + self.axis_x,
                     i * self.scale_y - FONT_SIZE / 4.0)?;
            writeln!(out, "({i}) show")?;
            i -= 1.0;
        }

        Ok(())
    }

    fn vertical_grey_line<W: Write>(&self, out: &mut W, i: f64) -> io::Result<()> {
        writeln!(out, "0.8 0.8 0.8 setrgbcolor")?;
        writeln!(out,
                 "{:.6} {:.6} moveto",
                 i * self.scale_x,
                 -PAGE_HEIGHT * 2.0 + self.axis_y)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 i * self.scale_x,
                 PAGE_HEIGHT * 2.0 + self.axis_y)?;
        writeln!(out, "stroke")
    }

    fn vertical_tick<W: Write>(&self, out: &mut W, i: f64) -> io::Result<()> {
        writeln!(out, "0 0 0 setrgbcolor")?;
        writeln!(out,
                 "{:.6} {:.6} moveto",
                 i * self.scale_x,
                 TICK_SIZE + self.axis_y)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 i * self.scale_x,
                 -TICK_SIZE + self.axis_y)?;
        writeln!(out, "stroke")
    }

    fn horizontal_grey_line<W: Write>(&self, out: &mut W, i: f64) -> io::Result<()> {
        writeln!(out, "0.8 0.8 0.8 setrgbcolor")?;
        writeln!(out,
                 "{:.6} {:.6} moveto",
                 -PAGE_WIDTH * 2.0 + self.axis_x,
                 i * self.scale_y)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 PAGE_WIDTH * 2.0 + self.axis_x,
                 i * self.scale_y)?;
        writeln!(out, "stroke")
    }

    fn horizontal_tick<W: Write>(&self, out: &mut W, i: f64) -> io::Result<()> {
        writeln!(out, "0 0 0 setrgbcolor")?;
        writeln!(out,
                 "{:.6} {:.6} moveto",
                 -TICK_SIZE + self.axis_x,
                 i * self.scale_y)?;
        writeln!(out,
                 "{:.6} {:.6} lineto",
                 TICK_SIZE + self.axis_x,
                 i * self.scale_y)?;
        writeln!(out, "stroke")
    }

    /// Samples the expression across the x range and draws the curve.
    ///
    /// Samples are taken every [`SAMPLE_STEP`] plot units. The current path
    /// is closed and a new one started whenever a sample is NaN or falls
    /// outside the y range, so poles and domain gaps leave visible breaks in
    /// the curve instead of spurious vertical lines.
    fn curve<W: Write>(&self, out: &mut W, expression: &Expr) -> io::Result<()> {
        let mut first_point = true;
        let mut out_of_range = false;

        let mut x = self.limits.x_min;
        while x <= self.limits.x_max {
            let y = evaluate(expression, x);

            if y.is_nan() {
                if !first_point {
                    writeln!(out, "stroke")?;
                }
                first_point = true;
                out_of_range = true;
            } else if y > self.limits.y_max || y < self.limits.y_min {
                if !out_of_range {
                    first_point = true;
                    out_of_range = true;
                    writeln!(out, "stroke")?;
                }
            } else {
                let ps_x = x * self.scale_x;
                let ps_y = y * self.scale_y;
                out_of_range = false;
                if first_point {
                    writeln!(out, "{ps_x:.6} {ps_y:.6} moveto")?;
                    first_point = false;
                } else {
                    writeln!(out, "{ps_x:.6} {ps_y:.6} lineto")?;
                }
            }

            x += SAMPLE_STEP;
        }

        Ok(())
    }

    /// Writes the document epilogue: the final stroke and `showpage`.
    fn epilogue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "stroke")?;
        writeln!(out, "showpage")
    }
}

/// Renders a complete one-page PostScript plot of an expression.
///
/// Draws, in order: the document prologue, the axes, the dashed window
/// boundary, the support grid, and finally the function curve.
///
/// # Parameters
/// - `out`: Destination for the PostScript text.
/// - `limits`: The visible window of the coordinate plane.
/// - `expression`: Root of the expression tree to plot.
///
/// # Errors
/// Returns any I/O error raised by the writer.
///
/// # Example
/// ```
/// use fplot::{limits::Limits, parse_expression, plot::render_graph};
///
/// let expr = parse_expression("sin(x)").unwrap();
/// let mut out = Vec::new();
/// render_graph(&mut out, &Limits::default(), &expr).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("%!PS"));
/// assert!(text.ends_with("showpage\n"));
/// ```
pub fn render_graph<W: Write>(out: &mut W, limits: &Limits, expression: &Expr) -> io::Result<()> {
    let canvas = Canvas::new(*limits);

    canvas.prologue(out)?;
    canvas.axes(out)?;
    canvas.boundary(out)?;
    canvas.grid(out)?;
    canvas.curve(out, expression)?;
    canvas.epilogue(out)
}
