//! Charts module - Static chart rendering

mod canvas;
mod kind;
mod renderer;
mod style;

pub use canvas::{Canvas, CanvasArea, CanvasError};
pub use kind::{ChartKind, RenderedCharts};
pub use renderer::{ChartError, StaticChartRenderer};
pub use style::ChartStyle;
