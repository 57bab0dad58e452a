//! # Colors, conversions, signals
//!
//! `tinct-core` holds the pieces of the picker that do not know about any particular
//! control:
//!
//! - [`Color`]: one logical color kept in hex, RGBA, HSV and HSL at once.
//! - [`convert`]: pure conversions between the four representations.
//! - [`parse`]: validation of the comma-separated text fields.
//! - [`Signal`]: observable value used by the stores to publish replacements.
//! - [`Scope`] / [`Dispose`]: cleanup that is guaranteed to run once.
//!
//! ## Conversions
//!
//! ```rust
//! use tinct_core::*;
//!
//! let rgba = hex_to_rgba("#3da6fb").unwrap();
//! assert_eq!(rgba, Rgba::opaque(61, 166, 251));
//! assert_eq!(rgba_to_hsv(rgba), Hsv::new(207, 76, 98));
//! assert_eq!(rgba_to_hex(rgba).to_string(), "#3da6fb");
//! ```
//!
//! HSV and HSL keep whole percents, so round trips through them are close but not exact;
//! the bounds are documented on [`convert`].
//!
//! ## Colors are values
//!
//! A [`Color`] is never patched field by field. Every edit builds a new one from the
//! canonical RGBA (or from the HSV/HSL the user typed) and the owner swaps it in whole:
//!
//! ```rust
//! use tinct_core::*;
//!
//! let c = Color::from_hsv(Hsv::new(0, 100, 100), 1.0);
//! assert_eq!(c.hex(), Hex::from_rgb(255, 0, 0));
//! assert_eq!(c.hsl(), Hsl::new(0, 100, 50));
//! ```
//!
//! ## Signals and scopes
//!
//! ```rust
//! use tinct_core::*;
//!
//! let bus = signal(0);
//! let scope = Scope::new();
//! scope.add_dispose(listen(&bus, |v| log::info!("got {v}")));
//! assert_eq!(bus.subscriber_count(), 1);
//!
//! scope.dispose();
//! assert_eq!(bus.subscriber_count(), 0);
//! ```

pub mod color;
pub mod convert;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod parse;
pub mod prelude;
pub mod scope;
pub mod signal;
pub mod tests;

pub use color::*;
pub use convert::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use scope::*;
pub use signal::*;
