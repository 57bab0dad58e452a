//! The picker facade a host drives.
//!
//! `ColorPicker` routes text edits to [`ColorState`], pointer events to the
//! [`PointerColorMapper`] and the drag sessions, and gradient controls to the
//! [`GradientModel`]. Everything it commits goes to the recent history and the host callback.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tinct_core::*;

use crate::config::{ConfigError, PickerConfig};
use crate::gestures::DragTracker;
use crate::gradient::{GradientKind, GradientModel};
use crate::history::RecentColors;
use crate::pointer::PointerColorMapper;
use crate::state::ColorState;
use crate::textfield::FieldEdit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Palette,
    MoreColors,
    Gradient,
}

type SelectHandler = Box<dyn Fn(&str)>;

pub struct ColorPicker {
    section: Section,
    state: ColorState,
    gradient: Rc<RefCell<GradientModel>>,
    selected: Rc<RefCell<String>>,
    mapper: PointerColorMapper,
    track: Rect,
    /// Every dispatched pointer event, for the drag sessions.
    pointer: Signal<PointerEvent>,
    hue_drag: DragTracker,
    gradient_drag: DragTracker,
    on_select: Option<SelectHandler>,
    /// Store subscriptions, released with the picker.
    _subscriptions: Scope,
}

impl ColorPicker {
    pub fn new(config: &PickerConfig) -> Result<Self, ConfigError> {
        let seed = config.seed_color()?;
        let state = ColorState::new(seed, RecentColors::new(config.history_capacity));

        // The preview follows every accepted edit.
        let selected = Rc::new(RefCell::new(seed.hex().to_string()));
        let id = state.subscribe({
            let selected = selected.clone();
            move |c: &Color| *selected.borrow_mut() = c.hex().to_string()
        });
        let subscriptions = Scope::new();
        subscriptions.add_disposer({
            let state = state.clone();
            move || {
                state.unsubscribe(id);
            }
        });

        log::debug!("picker created with seed {}", seed.hex());
        Ok(Self {
            section: Section::default(),
            state,
            gradient: Rc::new(RefCell::new(GradientModel::default())),
            selected,
            mapper: config.mapper(),
            track: config.gradient_track(),
            pointer: signal(PointerEvent::leave()),
            hue_drag: DragTracker::new(),
            gradient_drag: DragTracker::new(),
            on_select: None,
            _subscriptions: subscriptions,
        })
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn color(&self) -> Color {
        self.state.color()
    }

    pub fn mapper(&self) -> PointerColorMapper {
        self.mapper
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            log::debug!("section {:?} -> {:?}", self.section, section);
            self.section = section;
        }
    }

    /// The preview value `apply` would commit outside the gradient section.
    pub fn selected(&self) -> String {
        self.selected.borrow().clone()
    }

    /// Registers the host. Called with every committed value.
    pub fn on_select(&mut self, f: impl Fn(&str) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn recent(&self) -> Vec<String> {
        self.state.recent()
    }

    pub fn edit_field(&self, channel: Channel, edit: &FieldEdit) -> Result<(), ColorError> {
        self.state.edit_field(channel, edit)
    }

    pub fn set_alpha(&self, alpha: f32) -> Result<(), ColorError> {
        self.state.set_alpha(alpha)
    }

    /// Hue slider input.
    pub fn set_hue(&self, hue: u16) -> Result<(), ColorError> {
        let hsv = self.state.color().hsv();
        self.state.set_from_hsv(Hsv::new(hue, hsv.s, hsv.v))
    }

    /// Commits a swatch exactly like `apply` would.
    pub fn pick_swatch(&self, hex: Hex) -> String {
        self.commit(&hex.to_string())
    }

    /// Re-picks a recent entry, moving it to the front. `None` when out of range.
    pub fn pick_recent(&self, index: usize) -> Option<String> {
        let value = self.state.recent_at(index)?;
        Some(self.commit(&value))
    }

    /// Commits the current selection: the gradient descriptor in the gradient section, the
    /// selected color otherwise.
    pub fn apply(&self) -> String {
        let value = match self.section {
            Section::Gradient => self.gradient.borrow().compose(),
            Section::Palette | Section::MoreColors => self.selected(),
        };
        self.commit(&value)
    }

    fn commit(&self, value: &str) -> String {
        *self.selected.borrow_mut() = value.to_string();
        let value = self.state.commit(value);
        if let Some(f) = &self.on_select {
            f(&value);
        }
        value
    }

    /// Feeds one host pointer event.
    ///
    /// Down on the hue bar picks a hue and starts a drag; down on the canvas is a single
    /// saturation/value update. The event is then broadcast to any open drag session.
    pub fn dispatch(&self, ev: PointerEvent) {
        log::trace!("pointer {:?} at {:?}", ev.event, ev.position);
        if let PointerEventKind::Down(PointerButton::Primary) = ev.event {
            if self.mapper.hue_bar.contains(ev.position) {
                self.pick_hue(ev.position);
                self.begin_hue_drag();
            } else if self.mapper.canvas.contains(ev.position) {
                let hsv = self.mapper.hsv_at_canvas(ev.position, self.state.color().hsv());
                if let Err(err) = self.state.set_from_hsv(hsv) {
                    log::debug!("canvas pick rejected: {err}");
                }
            }
        }
        self.pointer.set(ev);
    }

    fn pick_hue(&self, p: Vec2) {
        pick_hue(&self.state, &self.mapper, p);
    }

    fn begin_hue_drag(&self) {
        let state = self.state.clone();
        let mapper = self.mapper;
        self.hue_drag
            .begin(&self.pointer, move |p| pick_hue(&state, &mapper, p));
    }

    pub fn is_dragging(&self) -> bool {
        self.hue_drag.is_dragging() || self.gradient_drag.is_dragging()
    }

    // Gradient section

    pub fn gradient(&self) -> std::cell::Ref<'_, GradientModel> {
        self.gradient.borrow()
    }

    pub fn gradient_mut(&self) -> std::cell::RefMut<'_, GradientModel> {
        self.gradient.borrow_mut()
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn set_gradient_kind(&self, kind: GradientKind) -> bool {
        self.gradient.borrow_mut().set_kind(kind)
    }

    /// Moves stop `index` to `p` and keeps following the pointer until release.
    pub fn drag_stop(&self, index: usize, p: Vec2) -> bool {
        self.drag_gradient(p, move |g, p, track| g.move_stop(index, p, track))
    }

    /// Like [`Self::drag_stop`] on the stop's opacity track.
    pub fn drag_stop_opacity(&self, index: usize, p: Vec2) -> bool {
        self.drag_gradient(p, move |g, p, track| g.set_stop_opacity(index, p, track))
    }

    /// Rotates a linear gradient around `center` while the pointer is held.
    pub fn drag_angle(&self, center: Vec2, p: Vec2) -> bool {
        self.drag_gradient(p, move |g, p, _| {
            g.set_angle(p, center);
            true
        })
    }

    fn drag_gradient(
        &self,
        p: Vec2,
        op: impl Fn(&mut GradientModel, Vec2, Rect) -> bool + 'static,
    ) -> bool {
        let track = self.track;
        if !op(&mut *self.gradient.borrow_mut(), p, track) {
            return false;
        }
        let gradient = self.gradient.clone();
        self.gradient_drag.begin(&self.pointer, move |p| {
            op(&mut *gradient.borrow_mut(), p, track);
        });
        true
    }
}

fn pick_hue(state: &ColorState, mapper: &PointerColorMapper, p: Vec2) {
    let hsv = mapper.hsv_at_hue_bar(p, state.color().hsv());
    if let Err(err) = state.set_from_hsv(hsv) {
        log::debug!("hue pick rejected: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use insta::assert_snapshot;

    use super::*;

    fn picker() -> ColorPicker {
        ColorPicker::new(&PickerConfig::default()).unwrap()
    }

    #[test]
    fn test_seed() {
        let p = picker();
        assert_eq!(p.section(), Section::Palette);
        assert_eq!(p.selected(), "#3da6fb");
        assert_eq!(p.color().hsv(), Hsv::new(207, 76, 98));
    }

    #[test]
    fn test_bad_seed() {
        let config = PickerConfig {
            seed: "#12".into(),
            ..PickerConfig::default()
        };
        assert!(ColorPicker::new(&config).is_err());
    }

    #[test]
    fn test_edits_update_selected() {
        let p = picker();
        p.edit_field(Channel::Rgba, &FieldEdit::Replace("255,0,0".into()))
            .unwrap();
        assert_eq!(p.selected(), "#ff0000");
        assert!(
            p.edit_field(Channel::Hex, &FieldEdit::Replace("#zz0000".into()))
                .is_err()
        );
        assert_eq!(p.selected(), "#ff0000");
        p.set_hue(120).unwrap();
        assert_eq!(p.selected(), "#00ff00");
        // transient edits never reach the history
        assert!(p.recent().is_empty());
    }

    #[test]
    fn test_apply_commits_and_notifies_host() {
        let mut p = picker();
        let host = Rc::new(RefCell::new(Vec::<String>::new()));
        p.on_select({
            let host = host.clone();
            move |v| host.borrow_mut().push(v.to_string())
        });

        p.select_section(Section::MoreColors);
        p.edit_field(Channel::Hex, &FieldEdit::Replace("#00ff00".into()))
            .unwrap();
        assert_eq!(p.apply(), "#00ff00");
        assert_eq!(p.pick_swatch(Hex::from_u32(0xc00000)), "#c00000");
        assert_eq!(p.recent(), vec!["#c00000", "#00ff00"]);

        assert_eq!(p.pick_recent(1).as_deref(), Some("#00ff00"));
        assert_eq!(p.pick_recent(7), None);
        assert_eq!(p.recent(), vec!["#00ff00", "#c00000"]);
        assert_eq!(*host.borrow(), vec!["#00ff00", "#c00000", "#00ff00"]);
    }

    #[test]
    fn test_apply_in_gradient_section() {
        let mut p = picker();
        p.select_section(Section::Gradient);
        p.gradient_mut().set_angle_degrees(45.0);
        p.gradient_mut().set_stop_color(0, Hex::from_u32(0xff0000));
        p.gradient_mut().set_stop_color(1, Hex::from_u32(0x0000ff));
        let value = p.apply();
        assert_snapshot!(value, @"linear-gradient(45deg, rgba(255,0,0,1) 0%, rgba(0,0,255,1) 100%)");
        assert_eq!(p.recent(), vec![value.clone()]);
        assert_eq!(p.selected(), value);
    }

    #[test]
    fn test_canvas_click_is_discrete() {
        let p = picker();
        // canvas 228x150 at the origin
        p.dispatch(PointerEvent::down(114.0, 75.0));
        assert_eq!(p.color().hsv(), Hsv::new(207, 50, 50));
        assert!(!p.is_dragging());
        p.dispatch(PointerEvent::moved(0.0, 0.0));
        assert_eq!(p.color().hsv(), Hsv::new(207, 50, 50));
    }

    #[test]
    fn test_hue_drag() {
        let p = picker();
        let hsv = p.color().hsv();
        // hue bar 228 wide at y=160
        p.dispatch(PointerEvent::down(57.0, 165.0));
        assert!(p.is_dragging());
        assert_eq!(p.color().hsv(), Hsv::new(90, hsv.s, hsv.v));

        p.dispatch(PointerEvent::moved(114.0, 300.0));
        assert_eq!(p.color().hsv().h, 180);

        p.dispatch(PointerEvent::up(114.0, 300.0));
        assert!(!p.is_dragging());
        p.dispatch(PointerEvent::moved(0.0, 165.0));
        assert_eq!(p.color().hsv().h, 180);
    }

    #[test]
    fn test_markers_follow_pointer_picks() {
        let p = picker();
        p.dispatch(PointerEvent::down(171.0, 75.0));
        p.dispatch(PointerEvent::down(57.0, 165.0));
        p.dispatch(PointerEvent::up(57.0, 165.0));

        let m = p.mapper();
        let hsv = p.color().hsv();
        assert_eq!(hsv, Hsv::new(90, 75, 50));
        assert_eq!(m.hue_thumb_x(hsv.h), 57.0);
        assert_eq!(m.canvas_marker(hsv), Vec2::new(171.0, 75.0));
    }

    #[test]
    fn test_stop_drag_follows_pointer() {
        let p = picker();
        assert!(p.drag_stop(1, Vec2::new(114.0, 0.0)));
        assert!(p.is_dragging());
        p.dispatch(PointerEvent::moved(57.0, 0.0));
        p.dispatch(PointerEvent::leave());
        p.dispatch(PointerEvent::moved(228.0, 0.0));
        let stops: Vec<u8> = p
            .gradient()
            .gradient()
            .stops()
            .iter()
            .map(|s| s.percentage)
            .collect();
        assert_eq!(stops, vec![0, 25]);
        assert!(!p.is_dragging());

        assert!(!p.drag_stop(5, Vec2::new(0.0, 0.0)));
        assert!(!p.is_dragging());
    }

    #[test]
    fn test_angle_drag() {
        let p = picker();
        let center = Vec2::new(50.0, 50.0);
        assert!(p.drag_angle(center, Vec2::new(50.0, 0.0)));
        assert_eq!(p.gradient().gradient().angle(), 0);
        p.dispatch(PointerEvent::moved(50.0, 100.0));
        assert_eq!(p.gradient().gradient().angle(), 180);
        p.dispatch(PointerEvent::up(50.0, 100.0));
        assert!(!p.is_dragging());
    }
}
