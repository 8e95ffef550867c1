//! Process-wide setup callable from JS before the first detector is built.

use napi_derive::napi;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber. `filter` uses `EnvFilter` syntax and
/// falls back to `FEATURES2D_LOG`, then `warn`. Returns false if a subscriber
/// was already installed.
#[napi(js_name = "initLogging")]
pub fn init_logging(filter: Option<String>) -> bool {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_env("FEATURES2D_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Size the worker pool used by offloaded construction.
#[napi(js_name = "initThreadPool")]
pub fn init_thread_pool(threads: Option<u32>) -> napi::Result<()> {
    let threads = threads.map_or_else(features2d_core::default_threads, |n| n as usize);
    features2d_core::init_thread_pool(threads)
        .map_err(|e| napi::Error::from_reason(format!("Thread pool init failed: {e}")))
}
