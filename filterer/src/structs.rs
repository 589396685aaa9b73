use std::fmt;
use std::time::Duration;

use fast_image_filter::FilterType;

/// Converts code of filter from command line into filter type.
///
/// `1` is blur, `2` is edge detection. All other values
/// (including non-numbers) mean "leave image unchanged".
pub fn parse_filter_code(code: &str) -> Option<FilterType> {
    match code.trim().parse::<i64>() {
        Ok(1) => Some(FilterType::Average),
        Ok(2) => Some(FilterType::Sobel),
        _ => None,
    }
}

/// Measured durations of sequential and parallel runs.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub sequential: Duration,
    pub parallel: Duration,
    pub threads_used: usize,
}

impl Report {
    /// Ratio of sequential time to parallel time.
    pub fn speedup(&self) -> f64 {
        self.sequential.as_secs_f64() / self.parallel.as_secs_f64()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Execution time without parallelism: {:.6} seconds",
            self.sequential.as_secs_f64()
        )?;
        writeln!(
            f,
            "Execution time with parallelism: {:.6} seconds",
            self.parallel.as_secs_f64()
        )?;
        writeln!(f, "Speedup: {:.2}x", self.speedup())?;
        writeln!(f, "Number of threads used: {}", self.threads_used)
    }
}
