#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize unified logging for Lexicross.
///
/// # Behavior
/// - **Native (CLI):** `Debug` level when `debug_enabled`, otherwise `Info`;
///   an explicit `RUST_LOG` overrides both.
/// - **WASM:** routes through the browser console at the equivalent level.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        if let Err(e) = console_log::init_with_level(level) {
            // Degrade gracefully if the console logger can't be installed
            // (e.g., a second init); the engine works fine without logging.
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
        } else {
            log::info!("WASM logger initialized at {level:?} level");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // Let RUST_LOG override our defaults if explicitly set
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        builder.init();
        log::debug!("Native logger initialized at {level:?} level");
    }
}
