//! Integration Tests für die Ticker-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockDebugSink
//! und MockMatrixWriter

use ticker_core::config::*;
use ticker_core::display::{MAX_INTENSITY, chain_frame};
use ticker_core::state::{LocalText, Messages, NewsText};
use ticker_core::{
    BoundedString, DISPLAY, DebugSink, DisplayConfig, EFFECTS, EffectSelection, HardwareType,
    MatrixError, MatrixWriter, MessageKind, Register, ScrollEffect, Settings, TickerState,
    debug, debug_flush, debug_t, debug_tf, debug_tln, debugf, debugln, init_matrix, set_intensity,
};

// ============================================================================
// Mock Debug Sink
// ============================================================================

#[derive(Default)]
pub struct MockDebugSink {
    pub output: String,
    pub writes: usize,
    pub flush_count: usize,
}

impl MockDebugSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DebugSink for MockDebugSink {
    fn write_str(&mut self, text: &str) {
        self.output.push_str(text);
        self.writes += 1;
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}

// ============================================================================
// Mock Matrix Writer
// ============================================================================

#[derive(Default)]
pub struct MockMatrixWriter {
    pub frames: Vec<Vec<u8>>,
    pub fail_next_write: bool,
}

impl MockMatrixWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register-Adressen aller geschriebenen Frames (erstes Byte)
    pub fn registers(&self) -> Vec<u8> {
        self.frames.iter().map(|f| f[0]).collect()
    }
}

impl MatrixWriter for MockMatrixWriter {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), MatrixError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MatrixError::WriteFailed);
        }

        self.frames.push(frame.to_vec());
        Ok(())
    }
}

// ============================================================================
// Tests: Debug-Makros
// ============================================================================

#[test]
fn test_debug_macros_forward_arguments() {
    let mut sink = MockDebugSink::new();

    debug!(sink, "Reboots: {}", 12);
    debugln!(sink, " [{}]", "ok");
    debugf!(sink, "LDR {:>4}", 87);

    assert_eq!(sink.output, "Reboots: 12 [ok]\r\nLDR   87");
    assert_eq!(sink.flush_count, 0);
}

#[test]
fn test_debug_flush_only_flushes() {
    let mut sink = MockDebugSink::new();
    debug_flush!(sink);
    debug_flush!(sink);

    assert_eq!(sink.flush_count, 2);
    assert_eq!(sink.writes, 0);
    assert!(sink.output.is_empty());
}

#[test]
fn test_timestamp_macros_forward_like_plain() {
    let mut sink = MockDebugSink::new();

    debug_t!(sink, "[{}]", 1);
    debug_tln!(sink, "x={}", 2);
    debug_tf!(sink, "{:03}", 3);
    debug_tln!(sink);

    assert_eq!(sink.output, "[1]x=2\r\n003\r\n");
}

#[test]
fn test_sink_behind_generic_reference() {
    fn report<S: DebugSink>(mut sink: S, reboots: u32) {
        debugln!(sink, "nrReboots: {}", reboots);
        debug_flush!(sink);
    }

    let mut sink = MockDebugSink::new();
    report(&mut sink, 4);

    assert_eq!(sink.output, "nrReboots: 4\r\n");
    assert_eq!(sink.flush_count, 1);
}

// ============================================================================
// Tests: Puffergrößen
// ============================================================================

#[test]
fn test_buffer_capacities() {
    assert_eq!(NewsText::new().capacity(), 512);
    assert_eq!(LocalText::new().capacity(), 255);

    let msgs = Messages::default();
    assert_eq!(msgs.scratch.capacity(), NEWS_SIZE);
    assert_eq!(msgs.active.capacity(), NEWS_SIZE);
    assert_eq!(msgs.temp.capacity(), LOCAL_SIZE);
    assert_eq!(msgs.on_ticker.capacity(), LOCAL_SIZE);
    assert_eq!(msgs.file.capacity(), LOCAL_SIZE);

    let settings = Settings::default();
    assert_eq!(settings.hostname.capacity(), 41);
    assert_eq!(settings.weerlive_auth.capacity(), 51);
    assert_eq!(settings.news_no_words.capacity(), LOCAL_SIZE);
}

#[test]
fn test_local_message_overflow_is_reported() {
    let mut msgs = Messages::default();
    let long = "x".repeat(LOCAL_SIZE + 1);

    let err = msgs.queue_local(&long).unwrap_err();
    assert_eq!(err.capacity, LOCAL_SIZE);
    assert_eq!(err.required, LOCAL_SIZE + 1);
    assert!(msgs.on_ticker.is_empty());

    let exact = "y".repeat(LOCAL_SIZE);
    msgs.queue_local(&exact).unwrap();
    assert_eq!(msgs.on_ticker.len(), LOCAL_SIZE);
}

#[test]
fn test_interface_constants() {
    assert_eq!(SETTINGS_FILE, "/settings.ini");
    assert_eq!(HTTP_PORT, 80);
    assert_eq!(JSON_BUFF_MAX, 255);
    assert_eq!(MAX_NO_NO_WORDS, 20);
}

// ============================================================================
// Tests: Effekt-Katalog
// ============================================================================

#[test]
fn test_effect_catalog_order() {
    let names: Vec<&str> = EFFECTS.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        [
            "PA_PRINT",
            "PA_SCROLL_LEFT",
            "PA_WIPE",
            "PA_SCROLL_UP_LEFT",
            "PA_SCROLL_UP",
            "PA_OPENING_CURSOR",
            "PA_GROW_UP",
            "PA_MESH",
            "PA_SCROLL_UP_RIGHT",
            "PA_CLOSING",
            "PA_RANDOM",
            "PA_GROW_DOWN",
            "PA_SCAN_VERT",
            "PA_SCROLL_DOWN_LEFT",
            "PA_WIPE_CURSOR",
            "PA_OPENING",
            "PA_CLOSING_CURSOR",
            "PA_SCROLL_DOWN_RIGHT",
            "PA_SCROLL_RIGHT",
            "PA_SCROLL_DOWN",
        ]
    );
}

#[test]
fn test_effect_names_resolve() {
    for effect in EFFECTS {
        assert_eq!(ScrollEffect::try_from(effect.name()), Ok(effect));
    }
    assert!(ScrollEffect::try_from("PA_SLICE").is_err());
}

#[test]
fn test_sequential_transitions_cycle_catalog() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();

    let first = state.next_transition(EffectSelection::Sequential, 0);
    assert_eq!(first.entry, ScrollEffect::Print);
    assert_eq!(first.exit, ScrollEffect::ScrollLeft);

    for _ in 1..EFFECTS.len() {
        state.next_transition(EffectSelection::Sequential, 0);
    }
    assert_eq!(state.transition.entry, ScrollEffect::ScrollDown);
    assert_eq!(state.transition.exit, ScrollEffect::Print);

    let again = state.next_transition(EffectSelection::Sequential, 0);
    assert_eq!(again, first);
}

#[test]
fn test_random_transition_stays_in_catalog() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();
    for word in [0u32, 19, 20, u32::MAX, 0xDEAD_BEEF] {
        let pair = state.next_transition(EffectSelection::Random, word);
        assert!(EFFECTS.contains(&pair.entry));
        assert!(EFFECTS.contains(&pair.exit));
    }
}

// ============================================================================
// Tests: Matrix
// ============================================================================

#[test]
fn test_init_matrix_sequence() {
    let mut mock = MockMatrixWriter::new();
    init_matrix(&mut mock, &DISPLAY, 6).unwrap();

    let mut expected: Vec<u8> = vec![0x0F, 0x0B, 0x09, 0x0A];
    expected.extend(0x01..=0x08);
    expected.push(0x0C);
    assert_eq!(mock.registers(), expected);

    // Jeder Frame adressiert alle 8 Module
    assert!(mock.frames.iter().all(|f| f.len() == DISPLAY.frame_len()));
    assert_eq!(mock.frames[3], [0x0Au8, 6].repeat(8));
    assert_eq!(mock.frames.last().unwrap(), &[0x0Cu8, 1].repeat(8));
}

#[test]
fn test_set_intensity_clamps() {
    let mut mock = MockMatrixWriter::new();
    set_intensity(&mut mock, &DISPLAY, 200).unwrap();
    assert_eq!(mock.frames[0][1], MAX_INTENSITY);
}

#[test]
fn test_init_matrix_stops_on_write_error() {
    let mut mock = MockMatrixWriter::new();
    mock.fail_next_write = true;

    assert_eq!(
        init_matrix(&mut mock, &DISPLAY, 6),
        Err(MatrixError::WriteFailed)
    );
    assert!(mock.frames.is_empty());
}

#[test]
fn test_chain_too_long() {
    let config = DisplayConfig {
        hardware: HardwareType::Generic,
        devices: 20,
        cs_pin: 15,
        max_speed: 50,
    };
    let mut mock = MockMatrixWriter::new();

    assert_eq!(
        init_matrix(&mut mock, &config, 6),
        Err(MatrixError::ChainTooLong)
    );
    assert!(chain_frame(Register::NoOp, 0, 20).is_err());
}

// ============================================================================
// Tests: TickerState
// ============================================================================

#[test]
fn test_first_poll_runs_feeds_but_not_ntp() {
    let mut state = TickerState::new(Settings::default(), 1_000).unwrap();

    let due = state.poll(1_000);
    assert!(due.time && due.weather && due.news && due.revision);
    assert!(!due.ntp);

    // Bis zur ersten Zeit-Synchronisation vergehen 30 s
    assert!(!state.poll(30_999).ntp);
    assert!(state.poll(31_000).ntp);
}

#[test]
fn test_poll_rearms_deadlines() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();
    state.poll(0);

    let due = state.poll(500);
    assert!(!due.any());

    let due = state.poll(1_000);
    assert!(due.time);
    assert!(!due.weather);

    // 15 Minuten Standard-Intervall
    assert!(state.poll(15 * 60_000).weather);
}

#[test]
fn test_disabled_feeds_never_due() {
    let settings = Settings {
        weerlive_interval: 0,
        news_interval: 0,
        ..Settings::default()
    };
    let mut state = TickerState::new(settings, 0).unwrap();

    let due = state.poll(0);
    assert!(!due.weather);
    assert!(!due.news);
}

#[test]
fn test_apply_settings_rejects_bad_no_words() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();

    let mut settings = Settings::default();
    settings
        .news_no_words
        .set(&"a ".repeat(MAX_NO_NO_WORDS + 2))
        .unwrap();

    assert!(state.apply_settings(settings).is_err());
    assert!(state.no_words.is_empty());

    let mut settings = Settings::default();
    settings.news_no_words.set("sport weer").unwrap();
    state.apply_settings(settings).unwrap();
    assert_eq!(state.no_words.iter().collect::<Vec<_>>(), ["sport", "weer"]);
}

#[test]
fn test_clock_shows_uptime_until_synced() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();

    state.clock.update_from_uptime(61_000).unwrap();
    assert_eq!(state.clock.time, "00:01:01");
    assert_eq!(state.clock.time_msg, "00:01:01");

    state.clock.synced = true;
    state.clock.update_from_uptime(3_600_000).unwrap();
    assert_eq!(state.clock.time, "00:01:01");
}

#[test]
fn test_feed_message_flow() {
    let mut state = TickerState::new(Settings::default(), 0).unwrap();
    state
        .messages
        .queue_feed(MessageKind::Weather, 0, "Amsterdam 12C")
        .unwrap();

    assert_eq!(state.messages.promote(), Ok(Some(MessageKind::Weather)));
    assert_eq!(state.messages.active, "Amsterdam 12C");
    assert!(state.messages.scratch.is_empty());
}

#[test]
fn test_reenabled_feed_runs_after_long_pause() {
    const HOUR_MS: u32 = 3_600_000;
    let settings = Settings {
        weerlive_interval: 0,
        ..Settings::default()
    };
    let mut state = TickerState::new(settings, 0).unwrap();

    // 25 Tage ohne Wetter-Abruf, länger als der halbe u32-Bereich
    let mut now = 0;
    while now <= 25 * 24 * HOUR_MS {
        assert!(!state.poll(now).weather);
        now += HOUR_MS;
    }

    state.apply_settings(Settings::default()).unwrap();
    let fired = (0..3_600).any(|s| state.poll(now + s * 1_000).weather);
    assert!(fired);
}

#[test]
fn test_empty_queue_shows_clock() {
    let mut msgs = Messages::default();

    assert_eq!(msgs.promote_or_clock("12:34:56"), Ok(Some(MessageKind::Clock)));
    assert_eq!(msgs.active, "12:34:56");
    assert!(msgs.scratch.is_empty());
}

#[test]
fn test_local_message_beats_clock() {
    let mut msgs = Messages::default();
    msgs.queue_local("Welkom").unwrap();

    assert_eq!(msgs.promote_or_clock("12:34:56"), Ok(Some(MessageKind::Local)));
    assert_eq!(msgs.active, "Welkom");
    // Danach wieder die Uhrzeit
    assert_eq!(msgs.promote_or_clock("12:35:06"), Ok(Some(MessageKind::Clock)));
    assert_eq!(msgs.active, "12:35:06");
}

#[test]
fn test_feed_message_beats_clock() {
    let mut msgs = Messages::default();
    msgs.queue_feed(MessageKind::News, 7, "Kabinet valt").unwrap();

    assert_eq!(msgs.promote_or_clock("12:34:56"), Ok(Some(MessageKind::News)));
    assert_eq!(msgs.active, "Kabinet valt");
    assert_eq!(msgs.news_id, 7);
}

// ============================================================================
// Tests: Settings (serde)
// ============================================================================

#[test]
fn test_settings_json() {
    let mut settings = Settings::default();
    settings.news_auth.set("abc123").unwrap();

    let mut buf = [0u8; 1024];
    let n = serde_json_core::to_slice(&settings, &mut buf).unwrap();
    let json = core::str::from_utf8(&buf[..n]).unwrap();
    assert!(json.contains("\"hostname\":\"ESPticker\""));
    assert!(json.contains("\"news_auth\":\"abc123\""));

    let (parsed, _): (Settings, usize) = serde_json_core::from_slice(&buf[..n]).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_settings_json_rejects_long_hostname() {
    let json = format!(
        "{{\"hostname\":\"{}\",\"news_no_words\":\"\",\"local_max_msg\":5,\"text_speed\":25,\
         \"max_intensity\":6,\"ldr_low_offset\":70,\"ldr_high_offset\":700,\
         \"weerlive_auth\":\"\",\"weerlive_location\":\"\",\"weerlive_interval\":15,\
         \"news_auth\":\"\",\"news_interval\":15,\"news_max_msg\":4}}",
        "h".repeat(HOSTNAME_SIZE + 1)
    );
    let parsed = serde_json_core::from_slice::<Settings>(json.as_bytes());
    assert!(parsed.is_err());

    let ok = BoundedString::<HOSTNAME_SIZE>::try_from("h".repeat(HOSTNAME_SIZE).as_str());
    assert!(ok.is_ok());
}
