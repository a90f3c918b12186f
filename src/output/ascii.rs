//! ASCII previews of rasterizer output.
//!
//! A [`Framebuffer`] is sampled down to a target size. A [`PixelTrace`] is
//! drawn over the bounding box of its plots so negative coordinates remain
//! visible, shaded either by coverage or, for debug renderings, by the gray
//! each plot carries.

use crate::color::{Ink, Rgba};
use crate::framebuffer::Framebuffer;
use crate::sink::PixelTrace;
use std::collections::BTreeMap;

/// ASCII preview renderer.
#[derive(Debug, Clone)]
pub struct AsciiPreview {
    width: Option<u32>,
    height: Option<u32>,
    char_aspect: f32,
    invert: bool,
}

impl Default for AsciiPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiPreview {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Widest default preview, in characters.
    const MAX_DEFAULT_WIDTH: u32 = 80;

    /// Create a preview renderer: one character per pixel up to 80 columns.
    #[must_use]
    pub fn new() -> Self {
        Self { width: None, height: None, char_aspect: 1.0, invert: false }
    }

    /// Set the target width in characters.
    /// If not set, uses the framebuffer width capped at 80.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Set the target height in lines.
    /// If not set, calculates from width to preserve aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height.max(1));
        self
    }

    /// Width/height ratio of a terminal cell; 2.0 approximates a monospace
    /// font. Only affects framebuffer previews with a derived dimension.
    #[must_use]
    pub fn char_aspect(mut self, aspect: f32) -> Self {
        self.char_aspect = if aspect > 0.0 { aspect } else { 1.0 };
        self
    }

    /// Invert the ramp (dark on light instead of light on dark).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a framebuffer by nearest-neighbour sampling.
    ///
    /// Brightness is luminance scaled by alpha, so untouched transparent
    /// pixels are dark.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(fb);
        let mut output = String::with_capacity((target_w + 1) as usize * target_h as usize);

        let scale_x = fb.width() as f32 / target_w as f32;
        let scale_y = fb.height() as f32 / target_h as f32;

        for y in 0..target_h {
            for x in 0..target_w {
                let fx = ((x as f32 * scale_x) as u32).min(fb.width() - 1);
                let fy = ((y as f32 * scale_y) as u32).min(fb.height() - 1);
                let level = fb.get_pixel(fx, fy).map_or(0.0, visible_level);
                output.push(self.ramp(level));
            }
            output.push('\n');
        }

        output
    }

    /// Render every plotted position of a trace, one character per pixel,
    /// shaded by coverage.
    ///
    /// A pixel plotted more than once shows its highest coverage. Unplotted
    /// cells inside the bounding box are blank. An empty trace renders as an
    /// empty string.
    #[must_use]
    pub fn render_trace(&self, trace: &PixelTrace) -> String {
        self.render_cells(trace, |ink| ink.coverage)
    }

    /// Render a debug trace, shaded by the intensity each plot would show
    /// over black: luminance times alpha after coverage.
    ///
    /// Debug renderings encode their diagnostic in a full-coverage gray, so
    /// [`render_trace`](Self::render_trace) would show them as solid.
    #[must_use]
    pub fn render_debug_trace(&self, trace: &PixelTrace) -> String {
        self.render_cells(trace, |ink| visible_level(ink.blended()))
    }

    fn render_cells(&self, trace: &PixelTrace, level: impl Fn(&Ink) -> f64) -> String {
        let mut cells: BTreeMap<(i32, i32), f64> = BTreeMap::new();
        for plot in trace.plots() {
            let cell = cells.entry((plot.point.y, plot.point.x)).or_insert(0.0);
            *cell = cell.max(level(&plot.ink));
        }

        let Some(((min_x, max_x), (min_y, max_y))) = bounds(trace) else {
            return String::new();
        };

        let mut output = String::new();
        for y in min_y..=max_y {
            let row: String = (min_x..=max_x)
                .map(|x| match cells.get(&(y, x)) {
                    Some(&level) => self.ramp(level.max(f64::EPSILON)),
                    None => ' ',
                })
                .collect();
            output.push_str(row.trim_end());
            output.push('\n');
        }

        output
    }

    /// Compute target dimensions preserving aspect ratio.
    fn compute_dimensions(&self, fb: &Framebuffer) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;

        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f32 / fb_aspect / self.char_aspect).round() as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * fb_aspect * self.char_aspect).round() as u32;
                (w.max(1), h)
            }
            (None, None) => {
                let w = Self::MAX_DEFAULT_WIDTH.min(fb.width());
                let h = (w as f32 / fb_aspect / self.char_aspect).round() as u32;
                (w, h.max(1))
            }
        }
    }

    /// Map a level in `[0, 1]` to a ramp character. Any positive level maps
    /// to at least the first visible character.
    fn ramp(&self, level: f64) -> char {
        let level = if self.invert { 1.0 - level } else { level };
        let top = Self::ASCII_RAMP.len() - 1;
        let mut idx = ((level.clamp(0.0, 1.0) * top as f64).round() as usize).min(top);
        if idx == 0 && level > 0.0 {
            idx = 1;
        }
        Self::ASCII_RAMP[idx]
    }
}

/// Luminance scaled by alpha: what a pixel shows composited over black.
fn visible_level(px: Rgba) -> f64 {
    px.luminance() * f64::from(px.a) / 255.0
}

fn bounds(trace: &PixelTrace) -> Option<((i32, i32), (i32, i32))> {
    let first = trace.first()?.point;
    let init = ((first.x, first.x), (first.y, first.y));
    Some(trace.points().into_iter().fold(init, |((lx, hx), (ly, hy)), p| {
        ((lx.min(p.x), hx.max(p.x)), (ly.min(p.y), hy.max(p.y)))
    }))
}
