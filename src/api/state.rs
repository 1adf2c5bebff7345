use std::sync::Arc;

use crate::analysis::{AnalysisService, PlayerAnalyzer};
use crate::calculate::Benchmarks;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn PlayerAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn PlayerAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// State backed by the benchmark-driven [`AnalysisService`].
    pub fn with_benchmarks(benchmarks: Benchmarks) -> Self {
        Self::new(Arc::new(AnalysisService::new(benchmarks)))
    }
}
