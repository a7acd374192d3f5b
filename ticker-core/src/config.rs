//! Konstanten des Tickers: Puffergrößen, Dateipfade und Schnittstellen
//!
//! Die Puffergrößen sind Byte-Kapazitäten der jeweiligen [`BoundedString`].
//!
//! [`BoundedString`]: crate::BoundedString

// ============================================================================
// Externe Schnittstellen
// ============================================================================

/// Pfad der Settings-Datei im Flash-Dateisystem
pub const SETTINGS_FILE: &str = "/settings.ini";

/// Port des HTTP-Konfigurationsservers
pub const HTTP_PORT: u16 = 80;

/// Verzögerung bis zur ersten Zeit-Synchronisation nach dem Start (ms)
pub const NTP_FIRST_SYNC_DELAY_MS: u32 = 30_000;

// ============================================================================
// Puffergrößen
// ============================================================================

/// Lokale Nachrichten (eigene Texte, Datei-Nachrichten)
pub const LOCAL_SIZE: usize = 255;

/// Lange Nachrichten (News, aktuell angezeigte Nachricht)
pub const NEWS_SIZE: usize = 512;

/// Maximale Länge einer JSON-Antwort eines Feeds
pub const JSON_BUFF_MAX: usize = 255;

/// Maximale Anzahl Filterwörter für News-Schlagzeilen
pub const MAX_NO_NO_WORDS: usize = 20;

/// Slots der Filterwort-Liste (ein Slot Reserve)
pub const NO_WORDS_SLOTS: usize = MAX_NO_NO_WORDS + 1;

/// Maximale Länge eines einzelnen Filterworts
pub const NO_WORD_SIZE: usize = 32;

pub const HOSTNAME_SIZE: usize = 41;

/// API-Schlüssel und Ortsnamen
pub const CREDENTIAL_SIZE: usize = 51;

pub const DATE_SIZE: usize = 15;
pub const TIME_SIZE: usize = 10;
pub const TIME_MSG_SIZE: usize = 20;

/// Grund des letzten Resets
pub const LAST_RESET_SIZE: usize = 48;

// ============================================================================
// Tabellen
// ============================================================================

/// Wochentage, Index 1 = Sonntag (Index 0 und 8 sind Platzhalter)
pub const WEEKDAY_NAMES: [&str; 9] = [
    "Unknown",
    "Zondag",
    "Maandag",
    "Dinsdag",
    "Woensdag",
    "Donderdag",
    "Vrijdag",
    "Zaterdag",
    "Unknown",
];

/// Flash-Modi des SPI-Flash
pub const FLASH_MODES: [&str; 5] = ["QIO", "QOUT", "DIO", "DOUT", "Unknown"];
