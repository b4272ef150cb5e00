use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Pointer position tracked across events for a single window.
///
/// winit reports button events without coordinates; the runtime attaches the
/// position held here.
#[derive(Debug, Default)]
pub struct InputState {
    /// Logical pixels. `None` until the first move and after the pointer leaves.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { position, .. }) => {
                if position.is_some() {
                    self.pointer_pos = *position;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState};

    fn press(position: Option<(f32, f32)>) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position,
        })
    }

    #[test]
    fn pointer_move_updates_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn button_with_position_updates_it() {
        let mut s = InputState::default();
        s.apply_event(&press(Some((1.0, 2.0))));
        assert_eq!(s.pointer_pos, Some((1.0, 2.0)));
    }

    #[test]
    fn button_without_position_keeps_it_unknown() {
        let mut s = InputState::default();
        s.apply_event(&press(None));
        assert_eq!(s.pointer_pos, None);
    }
}
