use crate::detection::line::LineFit;
use crate::models::{FrameDimensions, Region};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Data that flows through the pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineData {
    /// Current candidate set
    pub regions: Vec<Region>,

    /// Line chosen by the alignment step, once it has run
    pub line: Option<LineFit>,
}

impl PipelineData {
    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self {
            regions,
            line: None,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Context available to all pipeline steps, fixed for one image
#[derive(Debug, Clone, Copy)]
pub struct PipelineContext {
    pub dims: FrameDimensions,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Select a subset of the candidate regions
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData>;

    /// Human-readable name for this step (used in logs)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step on the regions of one image
    pub fn run(&self, regions: Vec<Region>, dims: FrameDimensions) -> Result<PipelineData> {
        self.run_partial(regions, dims, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(
        &self,
        regions: Vec<Region>,
        dims: FrameDimensions,
        num_steps: usize,
    ) -> Result<PipelineData> {
        dims.validate()?;
        let context = PipelineContext { dims };
        let mut data = PipelineData::from_regions(regions);

        for (i, step) in self.steps.iter().take(num_steps).enumerate() {
            let before = data.len();
            data = step.process(data, &context)?;
            debug!(step = i + 1, name = step.name(), before, after = data.len(), "ran step");
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
