//! Drag-to-rotate interaction.
//!
//! Two states: idle (pointer up) and dragging (pointer down). While dragging,
//! each pointer move turns the cursor delta into a rotation about X (vertical
//! travel) and Y (horizontal travel), left-multiplied onto the accumulated
//! rotation. The accumulated rotation is never reset.

use glam::{Mat4, Vec2};
use tissue_engine::input::{
    InputEvent, InputResponse, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

use crate::transform::{rotate_x, rotate_y};

/// Pointer tracking. `last` is only consumed while `is_down`; it is `None`
/// until a position is known.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    pub is_down: bool,
    pub last: Option<Vec2>,
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    pointer: PointerState,
    rotation: Mat4,
    deg_per_px: f32,
}

impl InteractionController {
    pub fn new(deg_per_px: f32) -> Self {
        Self {
            pointer: PointerState::default(),
            rotation: Mat4::IDENTITY,
            deg_per_px,
        }
    }

    /// Accumulated drag rotation.
    #[inline]
    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }

    #[cfg(test)]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_down
    }

    /// Idle -> dragging. Re-anchors the pointer so the first move measures
    /// from the press position. Without a position the drag anchors on the
    /// first move instead.
    pub fn pointer_down(&mut self, position: Option<Vec2>) {
        self.pointer = PointerState {
            is_down: true,
            last: position,
        };
        log::trace!("drag start at {position:?}");
    }

    /// Dragging -> idle.
    pub fn pointer_up(&mut self) {
        if self.pointer.is_down {
            log::trace!("drag end");
        }
        self.pointer.is_down = false;
    }

    /// Applies a pointer move; only rotates while dragging.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);

        if let (true, Some(last)) = (self.pointer.is_down, self.pointer.last) {
            let delta = pos - last;
            let rotate_x_deg = delta.y * self.deg_per_px;
            let rotate_y_deg = delta.x * self.deg_per_px;

            // X is applied before Y within one update.
            self.rotation = rotate_y(rotate_y_deg) * rotate_x(rotate_x_deg) * self.rotation;
        }

        self.pointer.last = Some(pos);
    }

    /// Dispatches a platform-agnostic input event.
    ///
    /// Every press is consumed, secondary presses included: a contextual menu
    /// would otherwise interrupt the drag it starts.
    pub fn handle(&mut self, event: &InputEvent) -> InputResponse {
        match event {
            InputEvent::PointerButton(PointerButtonEvent { button, state, position }) => {
                match state {
                    MouseButtonState::Pressed => {
                        if button.is_secondary() {
                            log::trace!("secondary press consumed; no context menu");
                        }
                        self.pointer_down((*position).map(|(x, y)| Vec2::new(x, y)))
                    }
                    MouseButtonState::Released => self.pointer_up(),
                }
                InputResponse::Consumed
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let dragging = self.pointer.is_down;
                self.pointer_move(*x, *y);
                if dragging {
                    InputResponse::Consumed
                } else {
                    InputResponse::Ignored
                }
            }

            InputEvent::PointerLeft => InputResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::is_rigid_rotation;
    use tissue_engine::input::MouseButton;

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            position: Some((x, y)),
        })
    }

    fn release(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            position: Some((x, y)),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn starts_idle_with_identity_rotation() {
        let c = InteractionController::new(0.5);
        assert!(!c.is_dragging());
        assert_eq!(c.rotation(), Mat4::IDENTITY);
    }

    #[test]
    fn horizontal_drag_rotates_about_y() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(100.0, 100.0)));
        c.pointer_move(110.0, 100.0);

        let expected = rotate_y(5.0) * rotate_x(0.0) * Mat4::IDENTITY;
        assert!(c.rotation().abs_diff_eq(expected, 1e-6));
        assert!(c.rotation().abs_diff_eq(rotate_y(5.0), 1e-6));
    }

    #[test]
    fn vertical_drag_rotates_about_x() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(0.0, 0.0)));
        c.pointer_move(0.0, -20.0);
        assert!(c.rotation().abs_diff_eq(rotate_x(-10.0), 1e-6));
    }

    #[test]
    fn diagonal_move_applies_x_before_y() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(0.0, 0.0)));
        c.pointer_move(40.0, 60.0);

        let expected = rotate_y(20.0) * rotate_x(30.0);
        assert!(c.rotation().abs_diff_eq(expected, 1e-6));
        // The other order differs, so the test actually pins the order.
        assert!(!c.rotation().abs_diff_eq(rotate_x(30.0) * rotate_y(20.0), 1e-3));
    }

    #[test]
    fn successive_moves_left_multiply() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(0.0, 0.0)));
        c.pointer_move(10.0, 0.0);
        c.pointer_move(10.0, 10.0);

        let expected = rotate_y(0.0) * rotate_x(5.0) * (rotate_y(5.0) * rotate_x(0.0));
        assert!(c.rotation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn move_while_idle_leaves_rotation_untouched() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(0.0, 0.0)));
        c.pointer_move(12.0, 0.0);
        c.pointer_up();
        let before = c.rotation();

        c.pointer_move(500.0, 300.0);
        assert_eq!(c.rotation(), before);
        assert_eq!(c.pointer().last, Some(Vec2::new(500.0, 300.0)));
    }

    #[test]
    fn press_re_anchors_the_drag() {
        let mut c = InteractionController::new(0.5);
        c.pointer_move(0.0, 0.0);
        c.pointer_down(Some(Vec2::new(200.0, 200.0)));
        c.pointer_move(200.0, 200.0);
        assert_eq!(c.rotation(), Mat4::IDENTITY);
    }

    #[test]
    fn press_without_position_anchors_on_first_move() {
        let mut c = InteractionController::new(0.5);
        c.handle(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
        }));
        assert!(c.is_dragging());

        // The first move only anchors; it must not rotate by the distance from (0, 0).
        c.handle(&moved(300.0, 200.0));
        assert_eq!(c.rotation(), Mat4::IDENTITY);

        c.handle(&moved(310.0, 200.0));
        assert!(c.rotation().abs_diff_eq(rotate_y(5.0), 1e-6));
    }

    #[test]
    fn release_ends_the_drag() {
        let mut c = InteractionController::new(0.5);
        c.handle(&press(MouseButton::Left, 0.0, 0.0));
        assert!(c.is_dragging());
        c.handle(&release(0.0, 0.0));
        assert!(!c.is_dragging());
    }

    #[test]
    fn secondary_press_is_consumed_and_drags() {
        let mut c = InteractionController::new(0.5);
        assert_eq!(
            c.handle(&press(MouseButton::Right, 5.0, 5.0)),
            InputResponse::Consumed
        );
        assert!(c.is_dragging());
        c.handle(&moved(15.0, 5.0));
        assert!(c.rotation().abs_diff_eq(rotate_y(5.0), 1e-6));
    }

    #[test]
    fn idle_moves_are_not_consumed() {
        let mut c = InteractionController::new(0.5);
        assert_eq!(c.handle(&moved(1.0, 1.0)), InputResponse::Ignored);
        assert_eq!(c.handle(&InputEvent::PointerLeft), InputResponse::Ignored);
    }

    #[test]
    fn long_drag_stays_rigid() {
        let mut c = InteractionController::new(0.5);
        c.pointer_down(Some(Vec2::new(0.0, 0.0)));
        for i in 1..=500 {
            let t = i as f32;
            c.pointer_move(t * 3.0, (t * 0.37).sin() * 80.0);
        }
        assert!(is_rigid_rotation(&c.rotation(), 1e-3));
    }
}
