/// Emits a trace message, but only when the `fa_debug-trace` feature is
/// enabled. Otherwise the arguments are type checked but never evaluated.
#[cfg(feature = "fa_debug-trace")]
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}

/// Emits a trace message, but only when the `fa_debug-trace` feature is
/// enabled. Otherwise the arguments are type checked but never evaluated.
#[cfg(not(feature = "fa_debug-trace"))]
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if false {
            log::trace!($($arg)*)
        }
    };
}
