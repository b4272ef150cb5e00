use winit::event::{ElementState, MouseButton as WinitButton, WindowEvent};

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Maps a winit window event onto an [`InputEvent`], or `None` for events the
/// input layer does not model.
///
/// Positions are converted to logical pixels with `scale_factor`. winit does
/// not report a position on button events, so presses and releases carry the
/// last tracked pointer position from `state`, or `None` if there is none.
pub(crate) fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f64>(scale_factor);
            InputEvent::PointerMoved(PointerMoveEvent {
                x: logical.x as f32,
                y: logical.y as f32,
            })
        }

        WindowEvent::MouseInput { state: pressed, button, .. } => {
            InputEvent::PointerButton(PointerButtonEvent {
                button: button_from_winit(*button),
                state: match pressed {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
                position: state.pointer_pos,
            })
        }

        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,

        _ => return None,
    };
    Some(ev)
}

fn button_from_winit(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Back,
        WinitButton::Forward => MouseButton::Forward,
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}
