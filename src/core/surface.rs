//! Drawing seam between the simulations and the host canvas.
//!
//! The simulations only ever talk to a [`Surface`]: a 2D path/fill API in the
//! shape of `CanvasRenderingContext2d` plus the geometry of the container the
//! overlay is stretched over. The browser implementation lives in the web
//! glue; tests use a recording double.

use glam::Vec2;

/// Axis-aligned rectangle in container pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

pub trait Surface {
    /// Current backing size of the overlay in container pixels.
    fn size(&self) -> Vec2;

    /// Resize the overlay to match its container. Called on start and on
    /// every debounced window resize.
    fn fit_to_container(&mut self) {}

    /// Bounding box of the container's headline, relative to the container.
    fn headline_rect(&self) -> Option<Rect> {
        None
    }

    /// Map a viewport (client) point into container coordinates.
    fn to_local(&self, client: Vec2) -> Vec2 {
        client
    }

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_line_join(&mut self, join: &str);
    fn set_font(&mut self, font: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn arc(&mut self, x: f32, y: f32, radius: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// CSS `rgba()` string for an 8-bit RGB triplet.
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({},{},{},{})", rgb[0], rgb[1], rgb[2], alpha)
}

/// Trace a closed polygon through `points` (does not fill or stroke).
pub fn polygon<S: Surface + ?Sized>(surface: &mut S, points: &[(f32, f32)]) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(x0, y0);
    for &(x, y) in rest {
        surface.line_to(x, y);
    }
    surface.close_path();
}

/// Wrap `v` into `[0, extent)`. Degenerate extents leave `v` untouched.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        let w = v.rem_euclid(extent);
        // rem_euclid can round up to exactly `extent` for tiny negative inputs
        if w >= extent {
            0.0
        } else {
            w
        }
    } else {
        v
    }
}
