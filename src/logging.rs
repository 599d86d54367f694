use std::{any::Any, backtrace::Backtrace};

use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr; stdout carries the generated code.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    set_panic_hook();
}

// stdout may already hold part of a struct when this runs.
fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()));
        tracing::error!(
            panic = panic_message(info.payload()),
            location = location.as_deref().unwrap_or("unknown"),
            backtrace = %Backtrace::capture(),
            "generator panicked; output may be incomplete"
        );
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
