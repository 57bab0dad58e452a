//! Multi-stop gradients.
//!
//! The stop list is the single source of truth. It is only ever serialized outward into a
//! CSS-style descriptor and never parsed back.
//!
//! Stops keep authoring order: the descriptor lists them in array order, not sorted by
//! percentage, and positions set by dragging may leave them out of order.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;
use tinct_core::*;

pub const MIN_STOPS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Hex,
    /// Position along the gradient axis, `0..=100`.
    pub percentage: u8,
    /// `[0, 1]`, independent of `color`.
    pub opacity: f32,
}

impl GradientStop {
    pub const fn new(color: Hex, percentage: u8, opacity: f32) -> Self {
        Self {
            color,
            percentage,
            opacity,
        }
    }

    /// `rgba(r,g,b,opacity) percentage%`
    pub fn token(&self) -> String {
        let [r, g, b] = self.color.rgb();
        format!("rgba({r},{g},{b},{}) {}%", self.opacity, self.percentage)
    }
}

pub type Stops = SmallVec<[GradientStop; 4]>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    #[error("a gradient needs at least {MIN_STOPS} stops, got {0}")]
    TooFewStops(usize),
    #[error("stop {index} percentage {value} outside 0..=100")]
    Percentage { index: usize, value: u8 },
    #[error("stop {index} opacity {value} outside 0..=1")]
    Opacity { index: usize, value: f32 },
}

/// Invariants: at least [`MIN_STOPS`] stops, each within `0..=100` percent and `0..=1`
/// opacity; angle in `[0, 360)`. Deserialization goes through [`Gradient::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradient")]
pub struct Gradient {
    kind: GradientKind,
    /// Degrees `[0, 360)`; only meaningful for linear gradients.
    angle: u16,
    stops: Stops,
}

#[derive(Deserialize)]
struct RawGradient {
    kind: GradientKind,
    angle: u16,
    stops: Stops,
}

impl TryFrom<RawGradient> for Gradient {
    type Error = GradientError;

    fn try_from(raw: RawGradient) -> Result<Self, Self::Error> {
        Gradient::new(raw.kind, raw.angle, &raw.stops)
    }
}

impl Gradient {
    /// Rejects fewer than two stops and out-of-range stops; wraps the angle into `[0, 360)`.
    pub fn new(
        kind: GradientKind,
        angle: u16,
        stops: &[GradientStop],
    ) -> Result<Self, GradientError> {
        if stops.len() < MIN_STOPS {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        for (index, stop) in stops.iter().enumerate() {
            if stop.percentage > 100 {
                return Err(GradientError::Percentage {
                    index,
                    value: stop.percentage,
                });
            }
            if !(0.0..=1.0).contains(&stop.opacity) {
                return Err(GradientError::Opacity {
                    index,
                    value: stop.opacity,
                });
            }
        }
        Ok(Self {
            kind,
            angle: angle % 360,
            stops: stops.iter().copied().collect(),
        })
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }
    pub fn angle(&self) -> u16 {
        self.angle
    }
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn compose(&self) -> String {
        compose(self.kind, self.angle, &self.stops)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 90,
            stops: smallvec![
                GradientStop::new(Color::SEED, 0, 1.0),
                GradientStop::new(Hex::WHITE, 100, 1.0),
            ],
        }
    }
}

/// Builds `linear-gradient(<angle>deg, <tokens>)` or `radial-gradient(<tokens>)`, tokens in
/// array order.
pub fn compose(kind: GradientKind, angle: u16, stops: &[GradientStop]) -> String {
    let tokens = stops
        .iter()
        .map(GradientStop::token)
        .collect::<Vec<_>>()
        .join(", ");
    match kind {
        GradientKind::Linear => format!("linear-gradient({angle}deg, {tokens})"),
        GradientKind::Radial => format!("radial-gradient({tokens})"),
    }
}

/// Re-spaces all stops evenly over `[0, 100]` by index.
fn redistribute(stops: &mut Stops) {
    let n = stops.len();
    if n < 2 {
        return;
    }
    let last = (n - 1) as f32;
    for (i, stop) in stops.iter_mut().enumerate() {
        stop.percentage = (i as f32 / last * 100.0).round() as u8;
    }
}

/// Pointer x as a fraction of the track, clamped to `[0, 1]`. `None` for an empty track.
fn track_fraction(pointer: Vec2, track: Rect) -> Option<f32> {
    if track.w <= 0.0 || !pointer.x.is_finite() {
        return None;
    }
    let x = (pointer.x - track.x).clamp(0.0, track.w);
    Some(x / track.w)
}

/// Gradient editor state. Every operation builds a new [`Gradient`] and publishes it whole.
///
/// Out-of-range indices and removals below two stops are no-ops returning `false`.
pub struct GradientModel {
    gradient: Signal<Gradient>,
    selected: usize,
}

impl GradientModel {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient: signal(gradient),
            selected: 0,
        }
    }

    pub fn gradient(&self) -> Gradient {
        self.gradient.get()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn stop_count(&self) -> usize {
        self.gradient.with(|g| g.stops.len())
    }

    pub fn subscribe(&self, f: impl Fn(&Gradient) + 'static) -> SubId {
        self.gradient.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.gradient.unsubscribe(id)
    }

    pub fn compose(&self) -> String {
        self.gradient.with(Gradient::compose)
    }

    fn replace(&self, next: Gradient) {
        log::debug!("gradient -> {}", next.compose());
        self.gradient.set(next);
    }

    fn edit(&self, f: impl FnOnce(&mut Gradient) -> bool) -> bool {
        let mut next = self.gradient.get();
        if !f(&mut next) {
            return false;
        }
        self.replace(next);
        true
    }

    /// Appends a black, opaque stop, re-spaces every stop, and selects the new one.
    pub fn add_stop(&mut self) {
        let mut index = 0;
        self.edit(|g| {
            g.stops.push(GradientStop::new(Hex::BLACK, 0, 1.0));
            redistribute(&mut g.stops);
            index = g.stops.len() - 1;
            true
        });
        self.selected = index;
    }

    /// Removes a stop, re-spaces the rest, and selects the first. Never goes below two stops.
    pub fn remove_stop(&mut self, index: usize) -> bool {
        let removed = self.edit(|g| {
            if g.stops.len() <= MIN_STOPS || index >= g.stops.len() {
                return false;
            }
            g.stops.remove(index);
            redistribute(&mut g.stops);
            true
        });
        if removed {
            self.selected = 0;
        }
        removed
    }

    pub fn select_stop(&mut self, index: usize) -> bool {
        if index >= self.stop_count() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Free positioning: only this stop moves, ordering is not enforced.
    pub fn move_stop(&mut self, index: usize, pointer: Vec2, track: Rect) -> bool {
        let Some(t) = track_fraction(pointer, track) else {
            return false;
        };
        self.edit(|g| match g.stops.get_mut(index) {
            Some(stop) => {
                stop.percentage = (t * 100.0).round() as u8;
                true
            }
            None => false,
        })
    }

    /// Opacity from the pointer position on an opacity track, two decimals.
    pub fn set_stop_opacity(&mut self, index: usize, pointer: Vec2, track: Rect) -> bool {
        let Some(t) = track_fraction(pointer, track) else {
            return false;
        };
        self.edit(|g| match g.stops.get_mut(index) {
            Some(stop) => {
                stop.opacity = (t * 100.0).round() / 100.0;
                true
            }
            None => false,
        })
    }

    pub fn set_stop_color(&mut self, index: usize, color: Hex) -> bool {
        self.edit(|g| match g.stops.get_mut(index) {
            Some(stop) if stop.color != color => {
                stop.color = color;
                true
            }
            _ => false,
        })
    }

    pub fn set_kind(&mut self, kind: GradientKind) -> bool {
        self.edit(|g| {
            let changed = g.kind != kind;
            g.kind = kind;
            changed
        })
    }

    /// Angle from the pointer's direction around `center`: 0 points up, 90 right.
    pub fn set_angle(&mut self, pointer: Vec2, center: Vec2) -> bool {
        let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        let mut deg = dy.atan2(dx).to_degrees() + 90.0;
        if deg < 0.0 {
            deg += 360.0;
        }
        self.set_angle_degrees(deg)
    }

    /// Numeric angle input, normalized into `[0, 360)` and rounded to whole degrees.
    pub fn set_angle_degrees(&mut self, degrees: f32) -> bool {
        if !degrees.is_finite() {
            return false;
        }
        let angle = (degrees.rem_euclid(360.0).round() as u16) % 360;
        self.edit(|g| {
            let changed = g.angle != angle;
            g.angle = angle;
            changed
        })
    }
}

impl Default for GradientModel {
    fn default() -> Self {
        Self::new(Gradient::default())
    }
}
