use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// Initializes a terminal logger with the given level ("debug", "info",
/// "warn", "error"); anything else falls back to info. Safe to call more
/// than once: a second initialization is simply ignored, so library code can
/// ask for logging without caring whether the host program already set it up.
///
/// The integrator logs through the `log` facade (e.g. the swapped-limits
/// warning), so without some logger installed those messages go nowhere.
pub fn init_logger(loglevel: &str) {
    let log_option = match loglevel {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    match logger_instance {
        Ok(()) => info!("logger initialized with level {}", log_option),
        Err(_) => {} // a logger is already installed
    }
}
