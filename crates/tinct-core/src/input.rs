use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
    /// Pointer left the window / tracking area.
    Leave,
}

/// A pointer event in host pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId::default(),
            event,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), Vec2::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Vec2::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), Vec2::new(x, y))
    }

    pub fn leave() -> Self {
        Self::new(PointerEventKind::Leave, Vec2::default())
    }

    /// Up, cancel and leave all end an interaction.
    pub fn ends_interaction(&self) -> bool {
        matches!(
            self.event,
            PointerEventKind::Up(_) | PointerEventKind::Cancel | PointerEventKind::Leave
        )
    }
}
