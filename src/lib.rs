//! braille-axes: axis, scale and zoom engine for braille-resolution terminal
//! line charts.
//!
//! Each terminal cell holds a 2x4 grid of braille dots. The engine maps data
//! values onto those dots, places tick labels along both axes and tracks the
//! zoomed column window driven by mouse input. It draws nothing itself.

pub mod axes;
pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use axes::{AxesLayout, ColumnAxisDetails, RowAxisDetails};
pub use config::AxesConfig;
pub use error::{ChartError, ChartResult};
pub use interaction::{MouseButton, MouseEvent, ZoomState, ZoomTracker};
