use anyhow::Result;
use image::RgbImage;
use std::fmt;
use std::path::PathBuf;

use crate::error::AssetError;

/// A recoverable problem that changed the output without stopping it
#[derive(Debug)]
pub enum Diagnostic {
    /// The scalable face could not be loaded; every role uses the default face
    FontFallback(AssetError),
    /// The screen region was filled with the fallback color instead
    ScreenshotFallback(AssetError),
    /// No logo file; the overlay was skipped entirely
    LogoSkipped(PathBuf),
    /// The backing plate was drawn but the logo could not be composited
    LogoFailed(AssetError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FontFallback(e) => write!(f, "Using default font: {}", e),
            Diagnostic::ScreenshotFallback(e) => write!(f, "Could not load screenshot: {}", e),
            Diagnostic::LogoSkipped(path) => write!(f, "No logo at {}, skipping", path.display()),
            Diagnostic::LogoFailed(e) => write!(f, "Could not load logo: {}", e),
        }
    }
}

impl Diagnostic {
    /// The console line for this diagnostic, if it is one that gets printed.
    ///
    /// A missing optional file or a font fallback stays silent; only assets that
    /// exist but fail to load are announced.
    pub fn console_line(&self) -> Option<String> {
        match self {
            Diagnostic::FontFallback(_) | Diagnostic::LogoSkipped(_) => None,
            Diagnostic::ScreenshotFallback(e) if e.is_missing() => None,
            Diagnostic::ScreenshotFallback(_) | Diagnostic::LogoFailed(_) => {
                Some(self.to_string())
            }
        }
    }
}

/// Receives diagnostics as they happen
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Prints load failures to stdout, one per line
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if let Some(line) = diagnostic.console_line() {
            println!("{}", line);
        }
    }
}

/// Discards diagnostics (they are still collected in [`RenderOutput`])
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving one PNG per step
    pub output_dir: PathBuf,
}

/// State shared by all steps of one run
pub struct RenderContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
    diagnostics: Vec<Diagnostic>,
    sink: Box<dyn DiagnosticSink>,
}

impl RenderContext {
    pub fn new(verbose: bool, sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            verbose,
            debug: None,
            diagnostics: Vec::new(),
            sink,
        }
    }

    /// Forward to the sink and keep a copy for the caller
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(&diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Trait that all render steps must implement
pub trait RenderStep {
    /// Draw onto the canvas. An `Err` is fatal; recoverable problems go through
    /// [`RenderContext::report`] instead.
    fn render(&self, canvas: &mut RgbImage, context: &mut RenderContext) -> Result<()>;

    /// Human-readable name for this step (used in verbose output and debug file names)
    fn name(&self) -> &str;
}

/// Result of running a pipeline
pub struct RenderOutput {
    pub canvas: RgbImage,
    pub diagnostics: Vec<Diagnostic>,
}

/// Composable render pipeline
pub struct Pipeline {
    steps: Vec<Box<dyn RenderStep>>,
    verbose: bool,
    debug: Option<DebugConfig>,
    sink: Option<Box<dyn DiagnosticSink>>,
    /// Raised while building the pipeline, reported when it starts running
    pending: Vec<Diagnostic>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            verbose: false,
            debug: None,
            sink: None,
            pending: Vec::new(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the default stdout sink
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Queue a diagnostic found before any step ran
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.pending.push(diagnostic);
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    /// Add a render step to the pipeline
    pub fn add_step(mut self, step: Box<dyn RenderStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every step in order over the canvas
    pub fn run(self, canvas: RgbImage) -> Result<RenderOutput> {
        let count = self.steps.len();
        self.run_partial(canvas, count)
    }

    /// Run only the first `num_steps` steps (useful for debugging)
    pub fn run_partial(self, mut canvas: RgbImage, num_steps: usize) -> Result<RenderOutput> {
        let sink = self.sink.unwrap_or_else(|| Box::new(StdoutSink));
        let mut context = RenderContext::new(self.verbose, sink);
        context.debug = self.debug;
        for diagnostic in self.pending {
            context.report(diagnostic);
        }

        for (step_idx, step) in self.steps.iter().take(num_steps).enumerate() {
            if context.verbose {
                println!("Running step {}: {}", step_idx + 1, step.name());
            }

            step.render(&mut canvas, &mut context)?;

            save_debug_output(&canvas, &context, step_idx, step.name())?;
        }

        Ok(RenderOutput {
            canvas,
            diagnostics: context.diagnostics,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Save the canvas after a step if debug mode is enabled
fn save_debug_output(
    canvas: &RgbImage,
    context: &RenderContext,
    step_idx: usize,
    step_name: &str,
) -> Result<()> {
    if let Some(debug_config) = &context.debug {
        let filename = format!(
            "{:02}_{}.png",
            step_idx + 1,
            step_name.to_lowercase().replace(' ', "_")
        );
        let output_path = debug_config.output_dir.join(&filename);

        canvas
            .save(&output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        if context.verbose {
            println!("  Debug: saved {}", filename);
        }
    }

    Ok(())
}
