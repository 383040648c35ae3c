//! Worker pool support
//!
//! With the `parallel` feature the two strands are scanned on rayon's global
//! pool. Without it every helper here degrades to sequential execution, so
//! callers never need their own `cfg` switches.

use crate::engines::{EngineError, EngineResult};

/// Get the default number of threads to use
pub fn default_num_threads() -> usize {
    num_cpus::get()
}

/// Configure the global thread pool
///
/// Returns the number of worker threads in effect. May only succeed once per
/// process; later calls report a `ThreadPool` error.
#[cfg(feature = "parallel")]
pub fn initialize_thread_pool(num_threads: Option<usize>) -> EngineResult<usize> {
    let num_threads = num_threads.unwrap_or_else(default_num_threads).max(1);

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|idx| format!("dnarna-worker-{}", idx))
        .build_global()
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    log::info!("Initialized thread pool with {} threads", num_threads);
    Ok(num_threads)
}

/// Configure the global thread pool
///
/// Built without the `parallel` feature: work always runs on the calling
/// thread, so this only validates the request.
#[cfg(not(feature = "parallel"))]
pub fn initialize_thread_pool(num_threads: Option<usize>) -> EngineResult<usize> {
    if num_threads == Some(0) {
        return Err(EngineError::ThreadPool(
            "thread count must be at least 1".to_string(),
        ));
    }

    if let Some(n) = num_threads {
        log::debug!("Ignoring thread count {}: built without the parallel feature", n);
    }
    Ok(1)
}

/// Run two independent closures, potentially in parallel
#[cfg(feature = "parallel")]
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

/// Run two independent closures, potentially in parallel
#[cfg(not(feature = "parallel"))]
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (a(), b())
}
