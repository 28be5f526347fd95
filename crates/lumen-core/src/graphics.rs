//! Camera-relative integer rasterizer.
//!
//! Every primitive takes world coordinates and subtracts the camera offset
//! before writing to the canvas. Nothing here clips; the canvas drops
//! out-of-range pixels.

use crate::{geometry::Point, surface::Canvas};

pub struct Graphics<'a> {
    canvas: &'a mut dyn Canvas,
    offset: Point,
}

impl<'a> Graphics<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Self {
            canvas,
            offset: Point::default(),
        }
    }

    pub fn with_offset(canvas: &'a mut dyn Canvas, offset: Point) -> Self {
        Self { canvas, offset }
    }

    pub fn set_camera_offset(&mut self, x: i32, y: i32) {
        self.offset = Point::new(x, y);
    }

    pub fn camera_offset(&self) -> Point {
        self.offset
    }

    /// Read-only access for text measurement.
    pub fn canvas(&self) -> &dyn Canvas {
        &*self.canvas
    }

    /// Runs `f` with a zero offset, for HUD elements pinned to the screen.
    pub fn with_screen_space<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.offset;
        self.offset = Point::default();
        let result = f(self);
        self.offset = saved;
        result
    }

    #[inline]
    fn to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.offset.x, y - self.offset.y)
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        self.canvas.set_pixel(x, y, true);
    }

    #[inline]
    fn span(&mut self, x0: i32, x1: i32, y: i32) {
        for x in x0..=x1 {
            self.plot(x, y);
        }
    }

    pub fn pixel(&mut self, x: i32, y: i32) {
        let (x, y) = self.to_screen(x, y);
        self.plot(x, y);
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        // Always walk from the lexicographically smaller endpoint so that
        // swapping the arguments yields the same pixel set.
        let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };
        let (mut x, mut y) = self.to_screen(x0, y0);
        let (x_end, y_end) = self.to_screen(x1, y1);

        let dx = (x_end - x).abs();
        let dy = (y_end - y).abs();
        let sx = if x < x_end { 1 } else { -1 };
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y);
            if x == x_end && y == y_end {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        self.line(x, y, right, y);
        self.line(x, bottom, right, bottom);
        self.line(x, y, x, bottom);
        self.line(right, y, right, bottom);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (sx, sy) = self.to_screen(x, y);
        for row in sy..sy + h {
            self.span(sx, sx + w - 1, row);
        }
    }

    /// Midpoint circle outline.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32) {
        if r < 0 {
            return;
        }
        let (cx, cy) = self.to_screen(cx, cy);

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.plot(cx, cy + r);
        self.plot(cx, cy - r);
        self.plot(cx + r, cy);
        self.plot(cx - r, cy);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(cx + x, cy + y);
            self.plot(cx - x, cy + y);
            self.plot(cx + x, cy - y);
            self.plot(cx - x, cy - y);
            self.plot(cx + y, cy + x);
            self.plot(cx - y, cy + x);
            self.plot(cx + y, cy - x);
            self.plot(cx - y, cy - x);
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32) {
        if r < 0 {
            return;
        }
        let (cx, cy) = self.to_screen(cx, cy);

        self.span(cx - r, cx + r, cy);
        self.plot(cx, cy + r);
        self.plot(cx, cy - r);

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.span(cx - x, cx + x, cy + y);
            self.span(cx - x, cx + x, cy - y);
            self.span(cx - y, cx + y, cy + x);
            self.span(cx - y, cx + y, cy - x);
        }
    }

    /// Rectangle with quarter-circle corners. `r` is clamped so opposite
    /// corners never cross.
    pub fn round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let r = r.clamp(0, w.min(h) / 2);

        self.line(x + r, y, x + w - r - 1, y);
        self.line(x + r, y + h - 1, x + w - r - 1, y + h - 1);
        self.line(x, y + r, x, y + h - r - 1);
        self.line(x + w - 1, y + r, x + w - 1, y + h - r - 1);

        self.corner(x + r, y + r, r, Corner::TopLeft);
        self.corner(x + w - r - 1, y + r, r, Corner::TopRight);
        self.corner(x + w - r - 1, y + h - r - 1, r, Corner::BottomRight);
        self.corner(x + r, y + h - r - 1, r, Corner::BottomLeft);
    }

    fn corner(&mut self, cx: i32, cy: i32, r: i32, corner: Corner) {
        let (cx, cy) = self.to_screen(cx, cy);
        let (sx, sy) = corner.signs();

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.plot(cx + sx * r, cy);
        self.plot(cx, cy + sy * r);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(cx + sx * x, cy + sy * y);
            self.plot(cx + sx * y, cy + sy * x);
        }
    }

    /// Draws `text` with `baseline_y` as the font baseline.
    pub fn text(&mut self, x: i32, baseline_y: i32, text: &str) {
        let (x, y) = self.to_screen(x, baseline_y);
        self.canvas.draw_string(x, y, text);
    }

    pub fn text_width(&self, text: &str) -> i32 {
        self.canvas.string_width(text)
    }
}

#[derive(Clone, Copy)]
enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    const fn signs(self) -> (i32, i32) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::TopRight => (1, -1),
            Self::BottomRight => (1, 1),
            Self::BottomLeft => (-1, 1),
        }
    }
}
