//! SVG chart primitives driven by category aggregates.

pub mod bar_chart;
pub mod geometry;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use geometry::ChartDatum;
pub use pie_chart::PieChart;
