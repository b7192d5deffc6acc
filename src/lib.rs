pub mod chart;
pub mod cli;
pub mod config;
pub mod download;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use normalize::Dataset;
pub use pipeline::ingest_file;
pub use ui::{ConsoleUi, Phase, SilentUi, Ui, UiApp};
pub use writer::LoadSummary;
