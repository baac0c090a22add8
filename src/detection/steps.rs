use crate::config::{LineParams, OutlierParams, ShapeParams};
use crate::detection::line::filter_by_line;
use crate::detection::outlier::filter_by_outlier;
use crate::detection::shape::filter_by_shape;
use crate::pipeline::{PipelineContext, PipelineData, PipelineStep};
use anyhow::Result;

/// Drop regions whose size or proportions cannot be a glyph
pub struct ShapeFilterStep {
    pub params: ShapeParams,
}

impl PipelineStep for ShapeFilterStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        Ok(PipelineData {
            regions: filter_by_shape(&data.regions, &self.params)?,
            line: data.line,
        })
    }

    fn name(&self) -> &str {
        "Shape Filtering"
    }
}

/// Keep the regions lying on the best-supported line and record that line
pub struct LineAlignmentStep {
    pub params: LineParams,
}

impl PipelineStep for LineAlignmentStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        let fit = filter_by_line(&data.regions, context.dims, &self.params)?;
        Ok(PipelineData {
            regions: fit.matched.clone(),
            line: Some(fit),
        })
    }

    fn name(&self) -> &str {
        "Line Alignment"
    }
}

/// Trim widely spaced regions off the ends of the row
pub struct OutlierTrimStep {
    pub params: OutlierParams,
}

impl PipelineStep for OutlierTrimStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        Ok(PipelineData {
            regions: filter_by_outlier(&data.regions, context.dims, &self.params)?,
            line: data.line,
        })
    }

    fn name(&self) -> &str {
        "Outlier Trimming"
    }
}
