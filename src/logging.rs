//! Logging macros backed by the `log` facade when the `logging` feature is
//! enabled. Without the feature the arguments are type-checked and dropped.

macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}

macro_rules! log_info {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::info!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}

macro_rules! log_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::warn!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}
