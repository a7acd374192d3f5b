// Ticker Task - Hauptschleife der Anzeige
use defmt::{error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use esp_hal::rng::Rng;
use ticker_core::config::{HTTP_PORT, SETTINGS_FILE};
use ticker_core::{
    DISPLAY, DebugSink, MatrixWriter, TickerState, debug_flush, debug_tln, debugln, init_matrix,
};

use crate::config::{EFFECT_SELECTION, LOOP_TICK_MS, MESSAGE_HOLD_SECS};
use crate::hal::{SpiMatrixWriter, UartDebugSink};

/// Ticker Logic - Hauptschleife ohne Hardware-Abhängigkeit
///
/// Diese Funktion pollt in festem Takt die Timer des Zustands:
/// - aktualisiert die Zeitanzeige (Laufzeit bis zur Synchronisation)
/// - meldet fällige Feed-Abrufe und Zeit-Synchronisation
/// - wechselt alle [`MESSAGE_HOLD_SECS`] die angezeigte Nachricht und
///   wählt dafür ein neues Effekt-Paar
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware (UART, SPI) im
/// Production-Code und Mocks auf dem Host.
///
/// # Parameter
/// - `sink`: Debug-Konsole
/// - `matrix`: MAX7219-Kette
/// - `state`: Laufzeit-Zustand, gehört ab jetzt dieser Schleife
/// - `random`: Quelle für 32-Bit Zufallswörter (Effekt-Auswahl)
pub async fn ticker_logic<S, M, R>(
    mut sink: S,
    mut matrix: M,
    mut state: TickerState,
    mut random: R,
) where
    S: DebugSink,
    M: MatrixWriter,
    R: FnMut() -> u32,
{
    print_banner(&mut sink, &state);

    if let Err(e) = init_matrix(&mut matrix, &DISPLAY, state.settings.max_intensity) {
        error!("Matrix: Init fehlgeschlagen ({})", e);
    }

    let hold = Duration::from_secs(MESSAGE_HOLD_SECS);
    let mut next_message = Instant::now();

    loop {
        let now = Instant::now();
        // 32-Bit Zähler, Überlauf nach ~49 Tagen ist in Deadline berücksichtigt
        let now_ms = now.as_millis() as u32;
        let due = state.poll(now_ms);

        if due.time {
            if let Err(e) = state.clock.update_from_uptime(now_ms) {
                warn!("Clock: Zeitpuffer zu klein ({})", e);
            }
        }
        if due.ntp && !state.clock.synced {
            info!("Time: Synchronisation fällig, keine Zeitquelle");
        }
        if due.weather {
            info!(
                "Weather: Abruf fällig für {}",
                state.settings.weerlive_location
            );
        }
        if due.news {
            info!("News: Abruf fällig ({} Filterwörter)", state.no_words.len());
        }
        if due.revision {
            debug_tln!(
                sink,
                "Uptime {} / reboots {}",
                state.clock.time,
                state.boot.reboots
            );
        }

        if now >= next_message {
            change_message(&mut sink, &mut state, random());
            next_message = now + hold;
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(LOOP_TICK_MS)).await;
    }
}

/// Wechselt zur nächsten Nachricht; ohne wartende Nachricht die Uhrzeit
fn change_message<S: DebugSink>(sink: &mut S, state: &mut TickerState, random: u32) {
    match state.messages.promote_or_clock(&state.clock.time_msg) {
        Ok(Some(kind)) => {
            let pair = state.next_transition(EFFECT_SELECTION, random);
            info!("Ticker: {} mit {} / {}", kind, pair.entry, pair.exit);
            if state.verbose {
                debug_tln!(
                    sink,
                    "[{:?}] {} -> {}: {}",
                    kind,
                    pair.entry.name(),
                    pair.exit.name(),
                    state.messages.active
                );
            }
        }
        Ok(None) => {}
        Err(e) => error!("Ticker: Nachricht passt nicht in den Anzeigepuffer ({})", e),
    }
}

fn print_banner<S: DebugSink>(sink: &mut S, state: &TickerState) {
    debugln!(sink);
    debugln!(sink, "[{}] ESP_ticker", state.settings.hostname);
    debugln!(
        sink,
        "Display: {} x {} ({} Spalten), CS=GPIO{}",
        DISPLAY.devices,
        DISPLAY.hardware.as_str(),
        DISPLAY.columns(),
        DISPLAY.cs_pin
    );
    debugln!(sink, "Settings: {}, HTTP Port {}", SETTINGS_FILE, HTTP_PORT);
    debugln!(
        sink,
        "Reboots: {}, last reset: {}",
        state.boot.reboots,
        if state.boot.last_reset.is_empty() {
            "unknown"
        } else {
            state.boot.last_reset.as_str()
        }
    );
    debug_flush!(sink);
}

/// Ticker Task - Embassy Task für die Hauptschleife
///
/// Übernimmt die fertig initialisierte Hardware und ruft die
/// `ticker_logic()` Funktion auf.
#[embassy_executor::task]
pub async fn ticker_task(
    sink: UartDebugSink<'static>,
    matrix: SpiMatrixWriter<'static>,
    state: TickerState,
    rng: Rng,
) {
    info!("Ticker: Task gestartet");
    ticker_logic(sink, matrix, state, move || rng.random()).await;
}
