//! Log macros that fire at most once per process, for diagnostics that
//! would otherwise flood the output from a hot loop.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            if log::log_enabled!(target: $target, $lvl) {
                log::log!(target: $target, $lvl, $($arg)+);
            }
        });
    }};
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log_once!(target: module_path!(), $lvl, $($arg)+)
    };
}

#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Warn, $($arg)+)
    };
}
