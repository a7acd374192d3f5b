// Library-Root: Board-spezifische Module der Ticker-Firmware
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ticker-core
pub use ticker_core::{
    DISPLAY, DebugSink, EffectPair, MatrixError, MatrixWriter, ScrollEffect, Settings,
    TickerState,
};
