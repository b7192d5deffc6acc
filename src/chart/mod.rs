//! Aggregate queries over a loaded database, drawn as text bar charts

pub mod filters;
pub mod query;
pub mod render;

pub use filters::{ChartKind, Filters};
pub use query::StatsDb;
pub use render::{bar_length, render_chart, Bar};
