//! The color store.
//!
//! `ColorState` owns the current [`Color`], the raw text of every field and the recent
//! color history. Each editable representation has one entry point; all of them validate,
//! build a whole new `Color`, and hand it to a single replace step that refreshes the other
//! fields and publishes the value. Observers never see a half-updated color.

use std::cell::RefCell;
use std::rc::Rc;

use tinct_core::parse::{check_alpha, parse_hsl, parse_hsv, parse_rgba};
use tinct_core::*;

use crate::history::RecentColors;
use crate::textfield::{FieldBuffer, FieldEdit};

/// The four text-editable channels, in display order.
pub const TEXT_CHANNELS: [Channel; 4] = [Channel::Hex, Channel::Rgba, Channel::Hsv, Channel::Hsl];

fn format_channel(color: &Color, channel: Channel) -> String {
    match channel {
        Channel::Hex => color.hex().to_string(),
        Channel::Rgba => color.rgba().to_string(),
        Channel::Hsv => color.hsv().to_string(),
        Channel::Hsl => color.hsl().to_string(),
        Channel::Alpha => color.alpha().to_string(),
    }
}

#[derive(Clone, Debug, Default)]
struct Field {
    buffer: FieldBuffer,
    error: Option<ColorError>,
}

struct StateInner {
    fields: [Field; 4],
    history: RecentColors,
}

impl StateInner {
    fn field_mut(&mut self, channel: Channel) -> Option<&mut Field> {
        let i = TEXT_CHANNELS.iter().position(|c| *c == channel)?;
        Some(&mut self.fields[i])
    }
}

/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct ColorState {
    inner: Rc<RefCell<StateInner>>,
    color: Signal<Color>,
}

impl ColorState {
    pub fn new(seed: Color, history: RecentColors) -> Self {
        let fields = TEXT_CHANNELS.map(|ch| Field {
            buffer: FieldBuffer::new(format_channel(&seed, ch)),
            error: None,
        });
        Self {
            inner: Rc::new(RefCell::new(StateInner { fields, history })),
            color: signal(seed),
        }
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Called with every replaced color.
    pub fn subscribe(&self, f: impl Fn(&Color) + 'static) -> SubId {
        self.color.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.color.unsubscribe(id)
    }

    /// Raw text currently shown in `channel`'s field (may be invalid mid-edit).
    pub fn field_text(&self, channel: Channel) -> String {
        self.with_field(channel, |f| f.buffer.text.clone())
            .unwrap_or_else(|| format_channel(&self.color(), channel))
    }

    pub fn field_buffer(&self, channel: Channel) -> Option<FieldBuffer> {
        self.with_field(channel, |f| f.buffer.clone())
    }

    /// Why the last edit of `channel` was rejected, while its text is still invalid.
    pub fn field_error(&self, channel: Channel) -> Option<ColorError> {
        self.with_field(channel, |f| f.error.clone()).flatten()
    }

    fn with_field<R>(&self, channel: Channel, f: impl FnOnce(&Field) -> R) -> Option<R> {
        let i = TEXT_CHANNELS.iter().position(|c| *c == channel)?;
        Some(f(&self.inner.borrow().fields[i]))
    }

    pub fn set_from_hex(&self, text: &str) -> Result<(), ColorError> {
        self.edit_field(Channel::Hex, &FieldEdit::Replace(text.to_string()))
    }

    pub fn set_from_rgba_text(&self, text: &str) -> Result<(), ColorError> {
        self.edit_field(Channel::Rgba, &FieldEdit::Replace(text.to_string()))
    }

    pub fn set_from_hsv_text(&self, text: &str) -> Result<(), ColorError> {
        self.edit_field(Channel::Hsv, &FieldEdit::Replace(text.to_string()))
    }

    pub fn set_from_hsl_text(&self, text: &str) -> Result<(), ColorError> {
        self.edit_field(Channel::Hsl, &FieldEdit::Replace(text.to_string()))
    }

    /// Applies a keystroke-level edit to a text field and re-validates it.
    ///
    /// The raw text is kept whatever the outcome; on rejection the color is untouched.
    pub fn edit_field(&self, channel: Channel, edit: &FieldEdit) -> Result<(), ColorError> {
        let text = {
            let mut inner = self.inner.borrow_mut();
            let Some(field) = inner.field_mut(channel) else {
                return Ok(());
            };
            let changed = field.buffer.apply(edit);
            // Replace always re-derives: the hex text survives an alpha edit unchanged.
            if !changed && field.error.is_none() && !matches!(edit, FieldEdit::Replace(_)) {
                return Ok(());
            }
            field.buffer.text.clone()
        };

        match self.parse_field(channel, &text) {
            Ok(next) => {
                self.replace(next, Some(channel));
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected {channel} edit {text:?}: {err}");
                if let Some(field) = self.inner.borrow_mut().field_mut(channel) {
                    field.error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    fn parse_field(&self, channel: Channel, text: &str) -> Result<Color, ColorError> {
        let alpha = self.color().alpha();
        match channel {
            // Hex carries no alpha; a hex edit yields an opaque color.
            Channel::Hex => Hex::parse(text).map(Color::from_hex),
            Channel::Rgba => parse_rgba(text).map(Color::from_rgba),
            Channel::Hsv => parse_hsv(text).map(|hsv| Color::from_hsv(hsv, alpha)),
            Channel::Hsl => parse_hsl(text).map(|hsl| Color::from_hsl(hsl, alpha)),
            Channel::Alpha => {
                let a = text
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| ColorError::Parse {
                        channel,
                        input: text.to_string(),
                    })?;
                Ok(self.color().with_alpha(check_alpha(a)?))
            }
        }
    }

    /// Structured HSV input (sliders, pointer surfaces). Alpha is preserved.
    pub fn set_from_hsv(&self, hsv: Hsv) -> Result<(), ColorError> {
        check_hue_triple(Channel::Hsv, hsv.h, hsv.s, hsv.v)?;
        let next = Color::from_hsv(hsv, self.color().alpha());
        self.replace(next, None);
        Ok(())
    }

    /// Structured HSL input. Alpha is preserved.
    pub fn set_from_hsl(&self, hsl: Hsl) -> Result<(), ColorError> {
        check_hue_triple(Channel::Hsl, hsl.h, hsl.s, hsl.l)?;
        let next = Color::from_hsl(hsl, self.color().alpha());
        self.replace(next, None);
        Ok(())
    }

    /// Alpha control, snapped to 0.01. Only `rgba.a` changes.
    pub fn set_alpha(&self, alpha: f32) -> Result<(), ColorError> {
        let a = check_alpha(alpha).inspect_err(|err| {
            log::debug!("rejected alpha {alpha}: {err}");
        })?;
        let next = self.color().with_alpha(a);
        self.replace(next, None);
        Ok(())
    }

    /// Alpha control reporting its value as text (range inputs do).
    pub fn set_alpha_text(&self, text: &str) -> Result<(), ColorError> {
        let next = self.parse_field(Channel::Alpha, text).inspect_err(|err| {
            log::debug!("rejected alpha {text:?}: {err}");
        })?;
        self.replace(next, None);
        Ok(())
    }

    /// Replaces the color with everything derived from `rgba`.
    pub fn set_canonical(&self, rgba: Rgba) {
        self.replace(Color::from_rgba(rgba), None);
    }

    /// The one mutation point: swaps in `next`, refreshes every field except `source`
    /// (whose raw text the user is typing), then publishes.
    fn replace(&self, next: Color, source: Option<Channel>) {
        {
            let mut inner = self.inner.borrow_mut();
            for (field, ch) in inner.fields.iter_mut().zip(TEXT_CHANNELS) {
                field.error = None;
                if Some(ch) != source {
                    field.buffer.set_text(&format_channel(&next, ch));
                }
            }
        }
        log::debug!("color -> {} ({})", next.hex(), next.rgba());
        self.color.set(next);
    }

    /// Records `value` (hex or gradient descriptor) in the recent history and hands it back
    /// for forwarding to the host.
    pub fn commit(&self, value: &str) -> String {
        self.inner.borrow_mut().history.push(value);
        log::debug!("committed {value}");
        value.to_string()
    }

    pub fn recent(&self) -> Vec<String> {
        self.inner.borrow().history.iter().map(str::to_string).collect()
    }

    pub fn recent_at(&self, index: usize) -> Option<String> {
        self.inner.borrow().history.get(index).map(str::to_string)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::default(), RecentColors::default())
    }
}

fn check_hue_triple(channel: Channel, h: u16, a: u8, b: u8) -> Result<(), ColorError> {
    if h > 360 {
        return Err(ColorError::Range {
            channel,
            value: f64::from(h),
            min: 0.0,
            max: 360.0,
        });
    }
    for v in [a, b] {
        if v > 100 {
            return Err(ColorError::Range {
                channel,
                value: f64::from(v),
                min: 0.0,
                max: 100.0,
            });
        }
    }
    Ok(())
}
