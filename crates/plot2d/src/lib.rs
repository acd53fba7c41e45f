// File: crates/plot2d/src/lib.rs
// Summary: Core library entry point; exports the preset 2D chart styles and rendering API.

pub mod axis;
pub mod error;
pub mod figure;
pub mod grid;
pub mod plot;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use error::PlotError;
pub use figure::{Figure, FigureSet, RenderOptions};
pub use plot::{ErrorBars, Plot2d, PlotKind};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
