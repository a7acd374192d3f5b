//! Debug-Makros für die serielle Konsole
//!
//! Jedes Makro nimmt als erstes Argument eine [`DebugSink`] und leitet die
//! restlichen Argumente unverändert weiter:
//!
//! | Makro | Aufruf auf der Sink |
//! |-------|---------------------|
//! | `debug!` / `debugf!` | `write_fmt` |
//! | `debugln!` | `writeln_fmt` bzw. nur Zeilenende |
//! | `debug_flush!` | `flush` |
//! | `debug_t!`, `debug_tln!`, `debug_tf!` | wie `debug!`, `debugln!`, `debugf!` |
//!
//! ```
//! # use ticker_core::{debugln, NullSink};
//! let mut sink = NullSink;
//! debugln!(sink, "Reboots: {}", 3);
//! ```

use crate::traits::DebugSink;

pub use crate::traits::LINE_END;

/// Sink ohne Transport: verwirft alle Ausgaben
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn write_str(&mut self, _text: &str) {}

    fn flush(&mut self) {}
}

#[macro_export]
macro_rules! debug {
    ($sink:expr, $($arg:tt)*) => {{
        use $crate::DebugSink as _;
        $sink.write_fmt(::core::format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! debugln {
    ($sink:expr) => {{
        use $crate::DebugSink as _;
        $sink.write_str($crate::debug::LINE_END)
    }};
    ($sink:expr, $($arg:tt)*) => {{
        use $crate::DebugSink as _;
        $sink.writeln_fmt(::core::format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! debugf {
    ($sink:expr, $($arg:tt)*) => {
        $crate::debug!($sink, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_flush {
    ($sink:expr) => {{
        use $crate::DebugSink as _;
        $sink.flush()
    }};
}

#[macro_export]
macro_rules! debug_t {
    ($sink:expr, $($arg:tt)*) => {
        $crate::debug!($sink, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_tln {
    ($sink:expr) => {
        $crate::debugln!($sink)
    };
    ($sink:expr, $($arg:tt)*) => {
        $crate::debugln!($sink, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_tf {
    ($sink:expr, $($arg:tt)*) => {
        $crate::debugf!($sink, $($arg)*)
    };
}
