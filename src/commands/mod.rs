//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, OpeningReport, analyze_openings};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_prefixes};
pub use solve::{SolveConfig, SolveResult, solve_prefix};
