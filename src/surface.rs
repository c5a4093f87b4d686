//! RGB pixel surfaces. The world is painted on a fixed 400x600 logical
//! surface; a second terminal-sized surface receives a scaled copy and
//! is flushed with half-block glyphs, two pixels per cell.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as TermColor},
};

// ── Color ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, t_256 in 0..=256.
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    /// Half brightness, used for the game-over dimming pass.
    pub const fn dim(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

impl From<Rgb> for TermColor {
    fn from(c: Rgb) -> Self {
        TermColor::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

// ── Surface ─────────────────────────────────────────────────────────────────

pub struct Surface {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl Surface {
    pub fn new(w: usize, h: usize, fill: Rgb) -> Self {
        Self {
            w,
            h,
            px: vec![fill; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Writes one pixel; coordinates outside the surface are dropped, so
    /// callers may draw shapes that hang over the edge.
    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Rectangle with quarter-circle corners of the given radius.
    pub fn fill_rect_rounded(&mut self, x: i32, y: i32, w: i32, h: i32, radius: i32, c: Rgb) {
        let r = radius.clamp(0, (w / 2).min(h / 2));
        let r2 = (r as i64) * (r as i64);
        for dy in 0..h {
            for dx in 0..w {
                if (dx < r || dx >= w - r) && (dy < r || dy >= h - r) {
                    let cx = if dx < r { r } else { w - r - 1 };
                    let cy = if dy < r { r } else { h - r - 1 };
                    let ox = (dx - cx) as i64;
                    let oy = (dy - cy) as i64;
                    if ox * ox + oy * oy > r2 {
                        continue;
                    }
                }
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, c: Rgb) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y0 = (cy - ry).floor() as i32;
        let y1 = (cy + ry).ceil() as i32;
        for y in y0..=y1 {
            let t = (y as f64 - cy) / ry;
            if t.abs() > 1.0 {
                continue;
            }
            let half = rx * (1.0 - t * t).sqrt();
            let x0 = (cx - half).round() as i32;
            let x1 = (cx + half).round() as i32;
            for x in x0..=x1 {
                self.set(x, y, c);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, c: Rgb) {
        self.fill_ellipse(cx, cy, r, r, c);
    }

    /// Even-odd scanline fill of a closed polygon.
    pub fn fill_polygon(&mut self, pts: &[(f64, f64)], c: Rgb) {
        if pts.len() < 3 {
            return;
        }
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(_, y) in pts {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let y0 = (min_y.floor() as i32).max(0);
        let y1 = (max_y.ceil() as i32).min(self.h as i32 - 1);
        let mut crossings: Vec<f64> = Vec::with_capacity(pts.len());
        for y in y0..=y1 {
            let scan = y as f64 + 0.5;
            crossings.clear();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % pts.len()];
                if (ay <= scan && by > scan) || (by <= scan && ay > scan) {
                    let t = (scan - ay) / (by - ay);
                    crossings.push(ax + t * (bx - ax));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks(2) {
                if let [a, b] = pair {
                    let xs = a.round() as i32;
                    let xe = b.round() as i32;
                    for x in xs..=xe {
                        self.set(x, y, c);
                    }
                }
            }
        }
    }

    /// Halves the brightness of every pixel.
    pub fn dim_all(&mut self) {
        for p in &mut self.px {
            *p = p.dim();
        }
    }

    /// Copies `src` into this surface, scaled to fit while keeping its
    /// aspect ratio, centered, with `backdrop` in the letterbox bars.
    pub fn blit_scaled(&mut self, src: &Surface, backdrop: Rgb) {
        if self.w == 0 || self.h == 0 || src.w == 0 || src.h == 0 {
            return;
        }
        let scale = (self.w as f64 / src.w as f64).min(self.h as f64 / src.h as f64);
        let dw = (src.w as f64 * scale).round() as i32;
        let dh = (src.h as f64 * scale).round() as i32;
        let ox = (self.w as i32 - dw) / 2;
        let oy = (self.h as i32 - dh) / 2;
        for y in 0..self.h as i32 {
            for x in 0..self.w as i32 {
                let sx = ((x - ox) as f64 / scale).floor() as i32;
                let sy = ((y - oy) as f64 / scale).floor() as i32;
                let c = if sx >= 0 && sy >= 0 && (sx as usize) < src.w && (sy as usize) < src.h {
                    src.get(sx as usize, sy as usize)
                } else {
                    backdrop
                };
                self.px[y as usize * self.w + x as usize] = c;
            }
        }
    }

    /// Flushes the surface to the terminal. Each cell holds two stacked
    /// pixels via U+2580; color changes are only emitted when a cell
    /// actually needs a different pair than the previous one.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        for row in 0..rows {
            if row > 0 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);
                if top == bot {
                    if bg != Some(top) {
                        queue!(out, style::SetBackgroundColor(top.into()))?;
                        bg = Some(top);
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        queue!(out, style::SetForegroundColor(top.into()))?;
                        fg = Some(top);
                    }
                    if bg != Some(bot) {
                        queue!(out, style::SetBackgroundColor(bot.into()))?;
                        bg = Some(bot);
                    }
                    queue!(out, style::Print('\u{2580}'))?;
                }
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}
