//! Laufzeit-Formatierung und Tabellen-Lookups
//!
//! `hh:mm:ss` für die Zeitanzeige ohne Synchronisation sowie die Namen
//! für Wochentage und Flash-Modi aus [`crate::config`].

use core::fmt::Write;

use crate::bounded::{BoundedString, CapacityError};
use crate::config::{FLASH_MODES, WEEKDAY_NAMES};

/// Schreibt eine Laufzeit als `hh:mm:ss` nach `out`
///
/// Stunden werden nicht auf 24 begrenzt; nach ~49 Tagen läuft der
/// Millisekunden-Zähler über.
///
/// # Beispiele
///
/// ```
/// # use ticker_core::{BoundedString, format_uptime};
/// let mut time = BoundedString::<10>::new();
/// format_uptime(3_723_000, &mut time).unwrap();
/// assert_eq!(time, "01:02:03");
/// ```
pub fn format_uptime<const N: usize>(
    uptime_ms: u32,
    out: &mut BoundedString<N>,
) -> Result<(), CapacityError> {
    let secs = uptime_ms / 1000;
    let mut text = BoundedString::<16>::new();
    // u32 Millisekunden ergeben höchstens 4 Stundenstellen
    write!(
        text,
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
    .map_err(|_| CapacityError {
        capacity: text.capacity(),
        required: text.len() + 1,
    })?;
    out.set(&text)
}

/// Name des Wochentags, 1 = Sonntag; alles andere ergibt "Unknown"
pub fn weekday_name(day: u8) -> &'static str {
    match day {
        1..=7 => WEEKDAY_NAMES[day as usize],
        _ => WEEKDAY_NAMES[0],
    }
}

/// Name des Flash-Modus, unbekannte Werte ergeben "Unknown"
pub fn flash_mode_name(mode: u8) -> &'static str {
    FLASH_MODES
        .get(mode as usize)
        .copied()
        .unwrap_or(FLASH_MODES[FLASH_MODES.len() - 1])
}
