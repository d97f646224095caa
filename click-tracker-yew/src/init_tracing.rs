use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Route `tracing` events to the browser console. Debug builds log at
/// `DEBUG`, release builds at `INFO`.
///
/// Call once, before mounting; a second call panics.
pub fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
