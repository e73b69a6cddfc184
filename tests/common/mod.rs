mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from feature_graphic for tests
pub use feature_graphic::{Diagnostic, GraphicConfig, NullSink};
