//! Katalog der Scroll-Effekte
//!
//! Die Reihenfolge in [`EFFECTS`] ist fest und wird für die sequentielle
//! Auswahl und für Indizes in den Settings genutzt.

use crate::types::EffectSelection;

/// Übergangs-Effekt beim Ein- oder Ausblenden eines Textes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollEffect {
    Print,
    ScrollLeft,
    Wipe,
    ScrollUpLeft,
    ScrollUp,
    OpeningCursor,
    GrowUp,
    Mesh,
    ScrollUpRight,
    Closing,
    Random,
    GrowDown,
    ScanVert,
    ScrollDownLeft,
    WipeCursor,
    Opening,
    ClosingCursor,
    ScrollDownRight,
    ScrollRight,
    ScrollDown,
}

/// Alle aktiven Effekte in Katalog-Reihenfolge
pub const EFFECTS: [ScrollEffect; 20] = [
    ScrollEffect::Print,
    ScrollEffect::ScrollLeft,
    ScrollEffect::Wipe,
    ScrollEffect::ScrollUpLeft,
    ScrollEffect::ScrollUp,
    ScrollEffect::OpeningCursor,
    ScrollEffect::GrowUp,
    ScrollEffect::Mesh,
    ScrollEffect::ScrollUpRight,
    ScrollEffect::Closing,
    ScrollEffect::Random,
    ScrollEffect::GrowDown,
    ScrollEffect::ScanVert,
    ScrollEffect::ScrollDownLeft,
    ScrollEffect::WipeCursor,
    ScrollEffect::Opening,
    ScrollEffect::ClosingCursor,
    ScrollEffect::ScrollDownRight,
    ScrollEffect::ScrollRight,
    ScrollEffect::ScrollDown,
];

impl ScrollEffect {
    /// Position im Katalog
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        EFFECTS.get(index).copied()
    }

    /// Nächster Effekt im Katalog, nach dem letzten wieder der erste
    pub fn next(self) -> Self {
        EFFECTS[(self.index() + 1) % EFFECTS.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ScrollEffect::Print => "PA_PRINT",
            ScrollEffect::ScrollLeft => "PA_SCROLL_LEFT",
            ScrollEffect::Wipe => "PA_WIPE",
            ScrollEffect::ScrollUpLeft => "PA_SCROLL_UP_LEFT",
            ScrollEffect::ScrollUp => "PA_SCROLL_UP",
            ScrollEffect::OpeningCursor => "PA_OPENING_CURSOR",
            ScrollEffect::GrowUp => "PA_GROW_UP",
            ScrollEffect::Mesh => "PA_MESH",
            ScrollEffect::ScrollUpRight => "PA_SCROLL_UP_RIGHT",
            ScrollEffect::Closing => "PA_CLOSING",
            ScrollEffect::Random => "PA_RANDOM",
            ScrollEffect::GrowDown => "PA_GROW_DOWN",
            ScrollEffect::ScanVert => "PA_SCAN_VERT",
            ScrollEffect::ScrollDownLeft => "PA_SCROLL_DOWN_LEFT",
            ScrollEffect::WipeCursor => "PA_WIPE_CURSOR",
            ScrollEffect::Opening => "PA_OPENING",
            ScrollEffect::ClosingCursor => "PA_CLOSING_CURSOR",
            ScrollEffect::ScrollDownRight => "PA_SCROLL_DOWN_RIGHT",
            ScrollEffect::ScrollRight => "PA_SCROLL_RIGHT",
            ScrollEffect::ScrollDown => "PA_SCROLL_DOWN",
        }
    }
}

impl core::convert::TryFrom<&str> for ScrollEffect {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        EFFECTS
            .iter()
            .copied()
            .find(|effect| effect.name() == name)
            .ok_or(())
    }
}

/// Effekt-Paar eines Nachrichtenwechsels (`inFX` / `outFX`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EffectPair {
    pub entry: ScrollEffect,
    pub exit: ScrollEffect,
}

impl Default for EffectPair {
    fn default() -> Self {
        Self {
            entry: ScrollEffect::Print,
            exit: ScrollEffect::Print,
        }
    }
}

impl EffectPair {
    /// Bildet ein 32-Bit Zufallswort auf zwei Katalog-Einträge ab
    ///
    /// Untere 16 Bit wählen den Eingangs-, obere 16 Bit den Ausgangs-Effekt.
    pub fn from_random(word: u32) -> Self {
        let len = EFFECTS.len();
        Self {
            entry: EFFECTS[(word & 0xFFFF) as usize % len],
            exit: EFFECTS[(word >> 16) as usize % len],
        }
    }
}

/// Laufende Position für die sequentielle Auswahl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectCursor {
    position: usize,
}

impl EffectCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert das Paar für den nächsten Nachrichtenwechsel
    ///
    /// `random` wird nur bei [`EffectSelection::Random`] ausgewertet.
    pub fn advance(&mut self, selection: EffectSelection, random: u32) -> EffectPair {
        match selection {
            EffectSelection::Sequential => {
                let entry = EFFECTS[self.position];
                self.position = (self.position + 1) % EFFECTS.len();
                EffectPair {
                    entry,
                    exit: entry.next(),
                }
            }
            EffectSelection::Random => EffectPair::from_random(random),
        }
    }
}
