//! # The picker
//!
//! Stores and interaction logic on top of `tinct-core`:
//!
//! - [`ColorState`] keeps the current color, the raw text of every field and the recent
//!   history.
//! - [`PointerColorMapper`] turns canvas and hue-bar positions into HSV.
//! - [`DragTracker`] runs one drag as a scoped session on a pointer bus.
//! - [`GradientModel`] edits gradient stops and composes the CSS-style descriptor.
//! - [`ColorPicker`] wires them together for a host.
//!
//! ```rust
//! use tinct_core::*;
//! use tinct_picker::*;
//!
//! let mut picker = ColorPicker::new(&PickerConfig::default())?;
//! picker.select_section(Section::MoreColors);
//! picker.edit_field(Channel::Rgba, &FieldEdit::Replace("255,0,0".into()))?;
//! assert_eq!(picker.apply(), "#ff0000");
//!
//! // a rejected edit keeps the last good color
//! assert!(picker.state().set_from_rgba_text("300,0,0").is_err());
//! assert_eq!(picker.color().hex(), Hex::from_rgb(255, 0, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod gestures;
pub mod gradient;
pub mod history;
pub mod palette;
pub mod picker;
pub mod pointer;
pub mod state;
pub mod textfield;

pub use config::{ConfigError, PickerConfig};
pub use gestures::{DragState, DragTracker};
pub use gradient::{Gradient, GradientError, GradientKind, GradientModel, GradientStop, compose};
pub use history::RecentColors;
pub use palette::{STANDARD_COLORS, THEME_COLORS};
pub use picker::{ColorPicker, Section};
pub use pointer::PointerColorMapper;
pub use state::ColorState;
pub use textfield::{FieldBuffer, FieldEdit};
