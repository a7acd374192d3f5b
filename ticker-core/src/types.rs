//! Core Types für den Ticker
//!
//! Kleine Enums ohne Hardware-Dependencies

/// Verdrahtungs-Variante der MAX7219-Module
///
/// Bestimmt Orientierung und Reihenfolge der Spalten beim Rendern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareType {
    Parola,
    /// FC-16 Module (häufigste China-Variante)
    Fc16,
    Generic,
}

/// Herkunft der aktuell angezeigten Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKind {
    /// Eigener Text aus der Weboberfläche oder Datei
    #[default]
    Local,
    News,
    Weather,
    /// Datum/Uhrzeit
    Clock,
}

/// Auswahl der Scroll-Effekte beim Nachrichtenwechsel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectSelection {
    /// Katalog der Reihe nach durchlaufen
    #[default]
    Sequential,
    /// Zufälliges Paar aus einem Zufallswort
    Random,
}

impl core::convert::TryFrom<&str> for HardwareType {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "PAROLA_HW" => Ok(Self::Parola),
            "FC16_HW" => Ok(Self::Fc16),
            "GENERIC_HW" => Ok(Self::Generic),
            _ => Err(()),
        }
    }
}

impl HardwareType {
    pub fn as_str(self) -> &'static str {
        match self {
            HardwareType::Parola => "PAROLA_HW",
            HardwareType::Fc16 => "FC16_HW",
            HardwareType::Generic => "GENERIC_HW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_type_names_round_trip() {
        for hw in [
            HardwareType::Parola,
            HardwareType::Fc16,
            HardwareType::Generic,
        ] {
            assert_eq!(HardwareType::try_from(hw.as_str()), Ok(hw));
        }
        assert_eq!(HardwareType::try_from("FC16_HW"), Ok(HardwareType::Fc16));
        assert_eq!(HardwareType::try_from("fc16_hw"), Err(()));
        assert_eq!(HardwareType::try_from(""), Err(()));
    }
}
