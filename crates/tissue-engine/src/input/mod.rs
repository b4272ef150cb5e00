//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s, folds them into
//! `InputState`, then forwards them to the application.

mod platform;
mod state;
mod types;

pub(crate) use platform::translate_window_event;
pub use state::InputState;
pub use types::{
    InputEvent,
    InputResponse,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
