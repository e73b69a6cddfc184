pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::GraphicConfig;
pub use error::AssetError;
pub use models::{FontRole, GradientSpec, LayoutBlock, MockupFrame, PixelRect};
pub use pipeline::{
    DebugConfig, Diagnostic, DiagnosticSink, NullSink, Pipeline, RenderContext, RenderOutput,
    RenderStep, StdoutSink,
};
pub use render::{build_standard_pipeline, generate, generate_with_sink};
