//! Click detection for one mouse button within an area.

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::interaction::mouse::{MouseButton, MouseEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Up,
    Down,
}

/// Outcome of feeding one event to the button state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTransition {
    /// A press followed by a release, both inside the area.
    pub clicked: bool,
    pub state: ButtonState,
}

impl ButtonTransition {
    fn to(state: ButtonState) -> Self {
        Self {
            clicked: false,
            state,
        }
    }
}

/// Next state of a button tracked within `area`.
///
/// A click needs the press and the release inside the area. Releasing outside
/// it, pressing a different button or pressing outside returns the machine to
/// `Up` without a click.
#[must_use]
pub fn transition(
    state: ButtonState,
    button: MouseButton,
    area: Rect,
    event: MouseEvent,
) -> ButtonTransition {
    let inside = area.contains(event.position);
    let pressed = event.button == button && inside;
    match state {
        ButtonState::Up if pressed => ButtonTransition::to(ButtonState::Down),
        ButtonState::Up => ButtonTransition::to(ButtonState::Up),
        ButtonState::Down if event.button == MouseButton::Release => ButtonTransition {
            clicked: inside,
            state: ButtonState::Up,
        },
        ButtonState::Down if pressed => ButtonTransition::to(ButtonState::Down),
        ButtonState::Down => ButtonTransition::to(ButtonState::Up),
    }
}

/// Stateful wrapper around [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFsm {
    button: MouseButton,
    area: Rect,
    state: ButtonState,
}

impl ButtonFsm {
    #[must_use]
    pub fn new(button: MouseButton, area: Rect) -> Self {
        Self {
            button,
            area,
            state: ButtonState::Up,
        }
    }

    pub fn event(&mut self, event: MouseEvent) -> ButtonTransition {
        let next = transition(self.state, self.button, self.area, event);
        self.state = next.state;
        next
    }

    /// Moves the tracked area. The current state is kept.
    pub fn update_area(&mut self, area: Rect) {
        self.area = area;
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonFsm, ButtonState};
    use crate::core::{Point, Rect};
    use crate::interaction::mouse::{MouseButton, MouseEvent};

    fn event(x: i32, y: i32, button: MouseButton) -> MouseEvent {
        MouseEvent::new(Point::new(x, y), button)
    }

    #[test]
    fn press_and_release_inside_is_a_click() {
        let mut fsm = ButtonFsm::new(MouseButton::Left, Rect::new(0, 0, 5, 5));
        let press = fsm.event(event(1, 1, MouseButton::Left));
        assert_eq!(press.state, ButtonState::Down);
        assert!(!press.clicked);

        let drag = fsm.event(event(3, 1, MouseButton::Left));
        assert_eq!(drag.state, ButtonState::Down);

        let release = fsm.event(event(4, 4, MouseButton::Release));
        assert_eq!(release.state, ButtonState::Up);
        assert!(release.clicked);
    }

    #[test]
    fn release_outside_is_not_a_click() {
        let mut fsm = ButtonFsm::new(MouseButton::Left, Rect::new(0, 0, 5, 5));
        fsm.event(event(1, 1, MouseButton::Left));
        let release = fsm.event(event(9, 9, MouseButton::Release));
        assert_eq!(release.state, ButtonState::Up);
        assert!(!release.clicked);
    }

    #[test]
    fn other_buttons_and_outside_presses_cancel() {
        let mut fsm = ButtonFsm::new(MouseButton::Left, Rect::new(0, 0, 5, 5));
        fsm.event(event(1, 1, MouseButton::Left));
        assert_eq!(fsm.event(event(1, 1, MouseButton::Right)).state, ButtonState::Up);

        fsm.event(event(1, 1, MouseButton::Left));
        assert_eq!(fsm.event(event(7, 1, MouseButton::Left)).state, ButtonState::Up);

        assert_eq!(fsm.event(event(7, 1, MouseButton::Left)).state, ButtonState::Up);
        assert_eq!(fsm.event(event(2, 2, MouseButton::Release)).state, ButtonState::Up);
    }

    #[test]
    fn area_update_moves_tracking() {
        let mut fsm = ButtonFsm::new(MouseButton::Left, Rect::new(0, 0, 5, 5));
        fsm.update_area(Rect::new(10, 10, 20, 20));
        assert_eq!(fsm.event(event(1, 1, MouseButton::Left)).state, ButtonState::Up);
        assert_eq!(fsm.event(event(12, 12, MouseButton::Left)).state, ButtonState::Down);
        assert_eq!(fsm.area(), Rect::new(10, 10, 20, 20));
    }
}
