pub mod button;
pub mod mouse;
pub mod normalize;
pub mod range;
pub mod zoom;

pub use button::{ButtonFsm, ButtonState, ButtonTransition, transition};
pub use mouse::{MouseButton, MouseEvent};
pub use normalize::{detect_roll, normalize};
pub use range::HighlightRange;
pub use zoom::{DEFAULT_SCROLL_STEP_PERCENT, ZoomState, ZoomTracker};
