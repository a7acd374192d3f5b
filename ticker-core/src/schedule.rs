//! Timer der Hauptschleife
//!
//! Alle Zeitpunkte beziehen sich auf einen 32-Bit Millisekunden-Zähler
//! seit dem Start, der nach ~49 Tagen überläuft. Vergleiche rechnen
//! deshalb mit `wrapping_sub`.

use crate::config::NTP_FIRST_SYNC_DELAY_MS;
use crate::state::{Settings, TickerState};

const SECOND_MS: u32 = 1000;
const MINUTE_MS: u32 = 60 * SECOND_MS;
const HOUR_MS: u32 = 60 * MINUTE_MS;

/// Fälligkeitszeitpunkt eines periodischen Jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    at: u32,
}

impl Deadline {
    pub const fn at(at_ms: u32) -> Self {
        Self { at: at_ms }
    }

    pub const fn millis(&self) -> u32 {
        self.at
    }

    /// `true` sobald `now_ms` den Zeitpunkt erreicht hat, auch über den Überlauf
    pub fn is_due(&self, now_ms: u32) -> bool {
        (now_ms.wrapping_sub(self.at) as i32) >= 0
    }

    /// Nächste Fälligkeit `interval_ms` nach `now_ms`
    pub fn rearm(&mut self, now_ms: u32, interval_ms: u32) {
        self.at = now_ms.wrapping_add(interval_ms);
    }
}

/// Timer aller periodischen Jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timers {
    pub time: Deadline,
    pub ntp: Deadline,
    pub weather: Deadline,
    pub newsapi: Deadline,
    pub revision: Deadline,
}

impl Timers {
    /// Alle Jobs sofort fällig, nur die Zeit-Synchronisation wartet 30 s
    pub fn new(now_ms: u32) -> Self {
        Self {
            time: Deadline::at(now_ms),
            ntp: Deadline::at(now_ms.wrapping_add(NTP_FIRST_SYNC_DELAY_MS)),
            weather: Deadline::at(now_ms),
            newsapi: Deadline::at(now_ms),
            revision: Deadline::at(now_ms),
        }
    }
}

/// Intervalle der Jobs in ms, `None` = deaktiviert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    pub time: u32,
    pub ntp: u32,
    pub weather: Option<u32>,
    pub news: Option<u32>,
    pub revision: u32,
}

impl Intervals {
    pub fn from_settings(settings: &Settings) -> Self {
        let minutes = |m: u8| (m > 0).then(|| m as u32 * MINUTE_MS);
        Self {
            time: SECOND_MS,
            ntp: HOUR_MS,
            weather: minutes(settings.weerlive_interval),
            news: minutes(settings.news_interval),
            revision: 24 * HOUR_MS,
        }
    }
}

/// Ergebnis eines Durchlaufs: welche Jobs jetzt laufen sollen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DueTasks {
    pub time: bool,
    pub ntp: bool,
    pub weather: bool,
    pub news: bool,
    pub revision: bool,
}

impl DueTasks {
    pub fn any(&self) -> bool {
        self.time || self.ntp || self.weather || self.news || self.revision
    }
}

fn check(deadline: &mut Deadline, now_ms: u32, interval: Option<u32>) -> bool {
    match interval {
        Some(interval) if deadline.is_due(now_ms) => {
            deadline.rearm(now_ms, interval);
            true
        }
        Some(_) => false,
        // Deaktiviert: Zeitpunkt mitziehen, sonst kippt der Abstand nach
        // ~24,9 Tagen ins Negative und der Job bleibt nach dem Einschalten stumm
        None => {
            deadline.rearm(now_ms, 0);
            false
        }
    }
}

impl TickerState {
    /// Prüft alle Timer und plant fällige Jobs neu ein
    pub fn poll(&mut self, now_ms: u32) -> DueTasks {
        let intervals = Intervals::from_settings(&self.settings);
        let timers = &mut self.timers;
        DueTasks {
            time: check(&mut timers.time, now_ms, Some(intervals.time)),
            ntp: check(&mut timers.ntp, now_ms, Some(intervals.ntp)),
            weather: check(&mut timers.weather, now_ms, intervals.weather),
            news: check(&mut timers.newsapi, now_ms, intervals.news),
            revision: check(&mut timers.revision, now_ms, Some(intervals.revision)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_across_overflow() {
        let mut d = Deadline::at(u32::MAX - 10);
        assert!(!d.is_due(u32::MAX - 11));
        assert!(d.is_due(u32::MAX - 10));
        assert!(d.is_due(5));

        d.rearm(u32::MAX - 5, 100);
        assert_eq!(d.millis(), 94);
        assert!(!d.is_due(u32::MAX));
        assert!(d.is_due(94));
    }

    #[test]
    fn test_zero_minutes_disables() {
        let settings = Settings {
            weerlive_interval: 0,
            news_interval: 2,
            ..Settings::default()
        };
        let intervals = Intervals::from_settings(&settings);
        assert_eq!(intervals.weather, None);
        assert_eq!(intervals.news, Some(120_000));
    }

    #[test]
    fn test_disabled_deadline_follows_now() {
        let mut d = Deadline::at(0);
        assert!(!check(&mut d, 3_000_000_000, None));
        assert_eq!(d.millis(), 3_000_000_000);
        assert!(check(&mut d, 3_000_000_000, Some(MINUTE_MS)));
    }
}
