pub use crate::color::{Channel, Color, Hex, Hsl, Hsv, Rgba};
pub use crate::convert::{hex_to_rgba, hsl_to_rgba, hsv_to_rgba, rgba_to_hex, rgba_to_hsl, rgba_to_hsv};
pub use crate::effects::{Dispose, listen};
pub use crate::error::ColorError;
pub use crate::geometry::{Rect, Vec2};
pub use crate::input::*;
pub use crate::scope::Scope;
pub use crate::signal::{Signal, SubId, signal};
