//! Laufzeit-Zustand des Tickers
//!
//! [`TickerState`] bündelt alles, was die Firmware zur Laufzeit teilt:
//! Settings, Nachrichtenpuffer, Timer, Uhrzeit, Sensorwerte und
//! Boot-Informationen. Es gibt genau eine Instanz; sie gehört der
//! Hauptschleife der Firmware.

use heapless::Vec;

use crate::bounded::{BoundedString, CapacityError};
use crate::config::*;
use crate::effects::{EffectCursor, EffectPair};
use crate::logic::format_uptime;
use crate::schedule::Timers;
use crate::types::{EffectSelection, MessageKind};

pub type LocalText = BoundedString<LOCAL_SIZE>;
pub type NewsText = BoundedString<NEWS_SIZE>;
pub type Hostname = BoundedString<HOSTNAME_SIZE>;
pub type Credential = BoundedString<CREDENTIAL_SIZE>;

// ============================================================================
// Settings
// ============================================================================

/// Vom Benutzer einstellbare Parameter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub hostname: Hostname,
    /// Leerzeichen- oder komma-getrennte Filterwörter für News
    pub news_no_words: LocalText,
    /// Anzahl lokaler Nachrichten-Slots
    pub local_max_msg: u8,
    pub text_speed: u8,
    /// Helligkeit 0..=15
    pub max_intensity: u8,
    /// LDR-Wert unterhalb dessen die minimale Helligkeit gilt
    pub ldr_low_offset: u16,
    /// LDR-Wert oberhalb dessen die maximale Helligkeit gilt
    pub ldr_high_offset: u16,
    pub weerlive_auth: Credential,
    pub weerlive_location: Credential,
    /// Abrufintervall Wetter in Minuten, 0 = aus
    pub weerlive_interval: u8,
    pub news_auth: Credential,
    /// Abrufintervall News in Minuten, 0 = aus
    pub news_interval: u8,
    pub news_max_msg: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hostname: Hostname::try_from("ESPticker").unwrap_or_default(),
            news_no_words: LocalText::new(),
            local_max_msg: 5,
            text_speed: 25,
            max_intensity: 6,
            ldr_low_offset: 70,
            ldr_high_offset: 700,
            weerlive_auth: Credential::new(),
            weerlive_location: Credential::try_from("Amsterdam").unwrap_or_default(),
            weerlive_interval: 15,
            news_auth: Credential::new(),
            news_interval: 15,
            news_max_msg: 4,
        }
    }
}

// ============================================================================
// Nachrichten
// ============================================================================

/// Nachrichtenpuffer für Anzeige und Feeds
#[derive(Debug, Clone, Default)]
pub struct Messages {
    /// Arbeitspuffer der Feeds (`cMsg`)
    pub scratch: NewsText,
    pub temp: LocalText,
    pub kind: MessageKind,
    /// Aktuell angezeigte Nachricht
    pub active: NewsText,
    /// Wartende lokale Nachricht
    pub on_ticker: LocalText,
    /// Zuletzt aus einer Datei gelesene Nachricht
    pub file: LocalText,
    pub news_id: u8,
    pub local_id: u8,
}

impl Messages {
    /// Stellt eine lokale Nachricht für den nächsten Wechsel bereit
    pub fn queue_local(&mut self, text: &str) -> Result<(), CapacityError> {
        self.on_ticker.set(text)?;
        self.local_id = self.local_id.wrapping_add(1);
        Ok(())
    }

    /// Legt eine Feed-Nachricht in den Arbeitspuffer
    pub fn queue_feed(
        &mut self,
        kind: MessageKind,
        id: u8,
        text: &str,
    ) -> Result<(), CapacityError> {
        self.scratch.set(text)?;
        self.kind = kind;
        if kind == MessageKind::News {
            self.news_id = id;
        }
        Ok(())
    }

    /// Übernimmt die nächste Nachricht in den aktiven Puffer
    ///
    /// Lokale Nachrichten haben Vorrang vor dem Arbeitspuffer. Gibt `None`
    /// zurück wenn nichts wartet; die aktive Nachricht bleibt dann stehen.
    pub fn promote(&mut self) -> Result<Option<MessageKind>, CapacityError> {
        if !self.on_ticker.is_empty() {
            self.active.set(&self.on_ticker)?;
            self.on_ticker.clear();
            return Ok(Some(MessageKind::Local));
        }
        if !self.scratch.is_empty() {
            self.active.set(&self.scratch)?;
            self.scratch.clear();
            return Ok(Some(self.kind));
        }
        Ok(None)
    }

    /// Nachrichtenwechsel: wartet nichts, wird die Uhrzeit angezeigt
    pub fn promote_or_clock(
        &mut self,
        clock: &str,
    ) -> Result<Option<MessageKind>, CapacityError> {
        if self.on_ticker.is_empty() && self.scratch.is_empty() {
            self.queue_feed(MessageKind::Clock, 0, clock)?;
        }
        self.promote()
    }
}

// ============================================================================
// Filterwörter
// ============================================================================

/// Wörter, deren Schlagzeilen nicht angezeigt werden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoWords {
    words: Vec<BoundedString<NO_WORD_SIZE>, NO_WORDS_SLOTS>,
}

impl NoWords {
    /// Zerlegt die Settings-Liste an Leerzeichen und Kommas
    pub fn parse(list: &str) -> Result<Self, CapacityError> {
        let mut words = Vec::new();
        for word in list
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
        {
            let word = BoundedString::try_from(word)?;
            let required = words.len() + 1;
            words.push(word).map_err(|_| CapacityError {
                capacity: NO_WORDS_SLOTS,
                required,
            })?;
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// `true` wenn `text` eines der Wörter enthält (ASCII ohne Groß/Klein)
    pub fn is_blocked(&self, text: &str) -> bool {
        self.words
            .iter()
            .any(|word| contains_ignore_ascii_case(text, word))
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

// ============================================================================
// Uhr, Sensoren, Boot
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ClockState {
    pub date: BoundedString<DATE_SIZE>,
    pub time: BoundedString<TIME_SIZE>,
    /// Text für die Zeit-Anzeige auf der Matrix
    pub time_msg: BoundedString<TIME_MSG_SIZE>,
    pub synced: bool,
    /// Unix-Zeit in Sekunden, nur gültig wenn `synced`
    pub epoch_secs: i64,
}

impl ClockState {
    /// Ohne Zeit-Synchronisation wird die Laufzeit angezeigt
    pub fn update_from_uptime(&mut self, uptime_ms: u32) -> Result<(), CapacityError> {
        if self.synced {
            return Ok(());
        }
        format_uptime(uptime_ms, &mut self.time)?;
        self.time_msg.set(&self.time)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensors {
    /// Letzter Messwert des Lichtsensors
    pub ldr: i16,
    pub intensity: i16,
}

#[derive(Debug, Clone, Default)]
pub struct BootInfo {
    pub reboots: u32,
    pub last_reset: BoundedString<LAST_RESET_SIZE>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStatus {
    pub mounted: bool,
    pub total_bytes: u32,
    pub used_bytes: u32,
}

// ============================================================================
// TickerState
// ============================================================================

/// Gesamter Laufzeit-Zustand
#[derive(Debug, Clone)]
pub struct TickerState {
    pub verbose: bool,
    pub settings: Settings,
    pub no_words: NoWords,
    pub messages: Messages,
    pub timers: Timers,
    pub clock: ClockState,
    pub sensors: Sensors,
    pub boot: BootInfo,
    pub fs: FsStatus,
    /// Effekt-Paar des aktuellen Nachrichtenwechsels
    pub transition: EffectPair,
    cursor: EffectCursor,
}

impl TickerState {
    /// Erstellt den Zustand beim Start
    ///
    /// # Fehlerbehandlung
    /// Gibt `CapacityError` zurück wenn die Filterwort-Liste nicht passt.
    pub fn new(settings: Settings, now_ms: u32) -> Result<Self, CapacityError> {
        let no_words = NoWords::parse(&settings.news_no_words)?;
        Ok(Self {
            verbose: false,
            settings,
            no_words,
            messages: Messages::default(),
            timers: Timers::new(now_ms),
            clock: ClockState::default(),
            sensors: Sensors::default(),
            boot: BootInfo::default(),
            fs: FsStatus::default(),
            transition: EffectPair::default(),
            cursor: EffectCursor::new(),
        })
    }

    /// Übernimmt neue Settings; bei Fehler bleibt alles beim Alten
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), CapacityError> {
        self.no_words = NoWords::parse(&settings.news_no_words)?;
        self.settings = settings;
        Ok(())
    }

    /// Wählt die Effekte für den nächsten Nachrichtenwechsel
    pub fn next_transition(&mut self, selection: EffectSelection, random: u32) -> EffectPair {
        self.transition = self.cursor.advance(selection, random);
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_words_split_and_match() {
        let words = NoWords::parse("voetbal, Corona  sport").unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.is_blocked("Nieuws over CORONA"));
        assert!(!words.is_blocked("Weerbericht"));
    }

    #[test]
    fn test_no_words_too_many() {
        let mut list = LocalText::new();
        for _ in 0..=NO_WORDS_SLOTS {
            list.push_str("w ").unwrap();
        }
        let err = NoWords::parse(&list).unwrap_err();
        assert_eq!(err.capacity, NO_WORDS_SLOTS);
    }

    #[test]
    fn test_promote_prefers_local() {
        let mut msgs = Messages::default();
        msgs.queue_feed(MessageKind::News, 3, "headline").unwrap();
        msgs.queue_local("hallo").unwrap();

        assert_eq!(msgs.promote(), Ok(Some(MessageKind::Local)));
        assert_eq!(msgs.active, "hallo");
        assert_eq!(msgs.promote(), Ok(Some(MessageKind::News)));
        assert_eq!(msgs.active, "headline");
        assert_eq!(msgs.news_id, 3);
        assert_eq!(msgs.promote(), Ok(None));
        assert_eq!(msgs.active, "headline");
    }
}
