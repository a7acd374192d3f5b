//! Ticker Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Traits für Debug-Ausgabe und LED-Matrix, die
//! Konstanten der Anzeige, den Katalog der Scroll-Effekte und den
//! Laufzeit-Zustand des Tickers.

#![no_std]

pub mod bounded;
pub mod config;
pub mod debug;
pub mod display;
pub mod effects;
pub mod logic;
pub mod schedule;
pub mod state;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use bounded::{BoundedString, CapacityError};
pub use debug::NullSink;
pub use display::{DISPLAY, DisplayConfig, Register, init_matrix, set_intensity};
pub use effects::{EFFECTS, EffectCursor, EffectPair, ScrollEffect};
pub use logic::{flash_mode_name, format_uptime, weekday_name};
pub use schedule::{Deadline, DueTasks, Intervals, Timers};
pub use state::{Settings, TickerState};
pub use traits::{DebugSink, MatrixError, MatrixWriter};
pub use types::{EffectSelection, HardwareType, MessageKind};
