use std::time::Instant;

use crate::algorithm::Algorithm;
use crate::ship::Ship;

/// Measure the wall-clock duration of a single sort invocation.
///
/// Sorts `ships` in place with `algorithm` and returns the elapsed time in
/// seconds. One run, no warmup, no aggregation.
pub fn measure_sort(algorithm: Algorithm, ships: &mut [Ship]) -> f64 {
    let start = Instant::now();
    algorithm.run(ships);
    start.elapsed().as_secs_f64()
}
