#[cfg(feature = "tracing")]
macro_rules! strace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_capability", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! strace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! sdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_capability", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! sdebug {
    ($($tt:tt)*) => {};
}
