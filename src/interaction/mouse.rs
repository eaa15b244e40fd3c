use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Mouse buttons as terminals report them.
///
/// Terminals do not say which button was released, and they report a drag as
/// repeated presses of the held button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Release,
    WheelUp,
    WheelDown,
}

impl MouseButton {
    #[must_use]
    pub fn is_wheel(self) -> bool {
        matches!(self, Self::WheelUp | Self::WheelDown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEvent {
    /// Cell under the pointer.
    pub position: Point,
    pub button: MouseButton,
}

impl MouseEvent {
    #[must_use]
    pub fn new(position: Point, button: MouseButton) -> Self {
        Self { position, button }
    }

    /// Converts a crossterm event. Plain pointer motion and horizontal
    /// scrolling carry no button and yield `None`.
    #[cfg(feature = "crossterm-input")]
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton as CrosstermButton, MouseEventKind};

        let pressed = |button: CrosstermButton| match button {
            CrosstermButton::Left => MouseButton::Left,
            CrosstermButton::Middle => MouseButton::Middle,
            CrosstermButton::Right => MouseButton::Right,
        };
        let button = match event.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => pressed(button),
            MouseEventKind::Up(_) => MouseButton::Release,
            MouseEventKind::ScrollUp => MouseButton::WheelUp,
            MouseEventKind::ScrollDown => MouseButton::WheelDown,
            MouseEventKind::Moved | MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                return None;
            }
        };
        let position = Point::new(i32::from(event.column), i32::from(event.row));
        Some(Self { position, button })
    }
}


#[cfg(all(test, feature = "crossterm-input"))]
mod crossterm_tests {
    use crossterm::event::{
        KeyModifiers, MouseButton as CrosstermButton, MouseEvent as CrosstermEvent,
        MouseEventKind,
    };

    use super::{MouseButton, MouseEvent};
    use crate::core::Point;

    fn crossterm_event(kind: MouseEventKind) -> CrosstermEvent {
        CrosstermEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn drag_reads_as_a_held_press() {
        let event = MouseEvent::from_crossterm(crossterm_event(MouseEventKind::Drag(
            CrosstermButton::Left,
        )))
        .expect("button event");
        assert_eq!(event, MouseEvent::new(Point::new(7, 3), MouseButton::Left));
    }

    #[test]
    fn release_and_wheel_map() {
        let release =
            MouseEvent::from_crossterm(crossterm_event(MouseEventKind::Up(CrosstermButton::Right)))
                .expect("release");
        assert_eq!(release.button, MouseButton::Release);
        let wheel = MouseEvent::from_crossterm(crossterm_event(MouseEventKind::ScrollDown))
            .expect("wheel");
        assert_eq!(wheel.button, MouseButton::WheelDown);
        assert!(MouseEvent::from_crossterm(crossterm_event(MouseEventKind::Moved)).is_none());
    }
}
