/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Buttons that open a contextual menu on most platforms.
    #[inline]
    pub fn is_secondary(self) -> bool {
        matches!(self, MouseButton::Right)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in logical pixels, relative to the window's top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// `position` is where the pointer was at the press/release, in logical
/// pixels. It is `None` when no position is known yet, e.g. a press that
/// arrives before any cursor move or right after the cursor left the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub position: Option<(f32, f32)>,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,
}

/// Application answer to an input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum InputResponse {
    /// Not handled; the runtime may apply its default behavior.
    #[default]
    Ignored,
    /// Handled; the runtime must not apply any default behavior
    /// (e.g. contextual menus on secondary clicks).
    Consumed,
}
