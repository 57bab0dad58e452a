//! Pointer position -> color mappings for the saturation/value canvas and the hue bar.
//!
//! Both mappings are pure given the surface rectangle and the pointer position. Positions
//! arrive in host pixels and are made local to the surface before clamping.

use tinct_core::{Hsv, Rect, Vec2};

/// Clamps `v` into `[0, extent - 1]`; a surface narrower than one pixel maps everything to 0.
fn clamp_to_pixels(v: f32, extent: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    v.clamp(0.0, (extent - 1.0).max(0.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerColorMapper {
    /// Saturation/value canvas.
    pub canvas: Rect,
    /// Hue bar.
    pub hue_bar: Rect,
}

impl PointerColorMapper {
    pub fn new(canvas: Rect, hue_bar: Rect) -> Self {
        Self { canvas, hue_bar }
    }

    /// Saturation and value in `[0, 1]` at `p`.
    ///
    /// `saturation = x / W`, `value = 1 - y / H`: the top edge is full value.
    pub fn saturation_value_at(&self, p: Vec2) -> (f32, f32) {
        let Rect { w, h, .. } = self.canvas;
        if w <= 0.0 || h <= 0.0 {
            return (0.0, 1.0);
        }
        let local = self.canvas.local(p);
        let x = clamp_to_pixels(local.x, w);
        let y = clamp_to_pixels(local.y, h);
        (x / w, 1.0 - y / h)
    }

    /// New HSV for a canvas click; the hue is carried over unchanged.
    pub fn hsv_at_canvas(&self, p: Vec2, current: Hsv) -> Hsv {
        let (s, v) = self.saturation_value_at(p);
        Hsv::new(
            current.h,
            (s * 100.0).round() as u8,
            (v * 100.0).round() as u8,
        )
    }

    /// Hue in whole degrees `[0, 360]` at `p.x`.
    pub fn hue_at(&self, p: Vec2) -> u16 {
        let w = self.hue_bar.w;
        if w <= 0.0 {
            return 0;
        }
        let x = clamp_to_pixels(p.x - self.hue_bar.x, w);
        (x / w * 360.0).round().clamp(0.0, 360.0) as u16
    }

    /// New HSV for a hue pick; saturation and value are carried over unchanged.
    pub fn hsv_at_hue_bar(&self, p: Vec2, current: Hsv) -> Hsv {
        Hsv::new(self.hue_at(p), current.s, current.v)
    }

    /// Where the hue thumb sits for `hue`, in host pixels.
    pub fn hue_thumb_x(&self, hue: u16) -> f32 {
        self.hue_bar.x + f32::from(hue.min(360)) / 360.0 * self.hue_bar.w
    }

    /// Where the canvas marker sits for `hsv`, in host pixels.
    pub fn canvas_marker(&self, hsv: Hsv) -> Vec2 {
        Vec2::new(
            self.canvas.x + f32::from(hsv.s.min(100)) / 100.0 * self.canvas.w,
            self.canvas.y + (1.0 - f32::from(hsv.v.min(100)) / 100.0) * self.canvas.h,
        )
    }
}
