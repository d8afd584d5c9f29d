// File: crates/lutgrid-render/src/lib.rs
// Summary: Renderer entry point; exports the plot API and the background-overlay visualization sink.

pub mod axis;
pub mod backdrop;
pub mod overlay;
pub mod plot;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::PlotAxis;
pub use backdrop::{Backdrop, Origin};
pub use overlay::{OverlayOptions, OverlaySink};
pub use plot::{LineSeries, Plot, RenderOptions};
pub use theme::Theme;
pub use types::{Extent, Insets};
pub use view::ViewState;
