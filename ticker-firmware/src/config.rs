// Board-Konfiguration: Konstanten und Build-Zeit-Settings
use defmt::warn;
use ticker_core::{BoundedString, EffectSelection, Settings};

// ============================================================================
// Debug-Konsole (UART1)
// ============================================================================

/// Baudrate der seriellen Debug-Konsole
pub const DEBUG_BAUDRATE: u32 = 115_200;

// ============================================================================
// LED-Matrix (SPI2)
// ============================================================================

/// SPI-Takt für die MAX7219-Kette in MHz (Chip erlaubt bis 10 MHz)
pub const SPI_FREQUENCY_MHZ: u32 = 5;

// ============================================================================
// Hauptschleife
// ============================================================================

/// Takt der Hauptschleife in Millisekunden
pub const LOOP_TICK_MS: u64 = 100;

/// Anzeigedauer einer Nachricht in Sekunden
pub const MESSAGE_HOLD_SECS: u64 = 10;

/// Auswahl der Ein-/Ausblend-Effekte
pub const EFFECT_SELECTION: EffectSelection = EffectSelection::Random;

// ============================================================================
// Build-Zeit Settings
// ============================================================================

/// Settings mit den Werten aus `.env` (siehe build.rs)
///
/// Zu lange Werte werden verworfen und der Standardwert bleibt.
pub fn build_settings() -> Settings {
    let mut settings = Settings::default();
    seed(
        &mut settings.hostname,
        option_env!("TICKER_HOSTNAME"),
        "TICKER_HOSTNAME",
    );
    seed(
        &mut settings.weerlive_auth,
        option_env!("WEERLIVE_AUTH"),
        "WEERLIVE_AUTH",
    );
    seed(
        &mut settings.weerlive_location,
        option_env!("WEERLIVE_LOCATION"),
        "WEERLIVE_LOCATION",
    );
    seed(
        &mut settings.news_auth,
        option_env!("NEWSAPI_AUTH"),
        "NEWSAPI_AUTH",
    );
    settings
}

fn seed<const N: usize>(target: &mut BoundedString<N>, value: Option<&str>, name: &str) {
    if let Some(value) = value {
        if let Err(e) = target.set(value) {
            warn!("Config: {} ignoriert ({})", name, e);
        }
    }
}
