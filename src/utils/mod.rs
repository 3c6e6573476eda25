pub mod log_once;

#[cfg(feature = "counter")]
pub mod counter;

/// Expands to nothing when diagnostic counters are compiled out.
#[cfg(not(feature = "counter"))]
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {{}};
}
