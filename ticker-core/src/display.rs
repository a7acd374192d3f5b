//! Anzeige-Konfiguration und MAX7219-Kette
//!
//! Die Matrix besteht aus einer Kette von MAX7219-Modulen (je 8x8 LEDs)
//! am Hardware-SPI. Ein Schreibzugriff schiebt für jedes Modul 2 Bytes
//! (Register, Wert) durch die Kette.

use heapless::Vec;

use crate::bounded::CapacityError;
use crate::traits::{MatrixError, MatrixWriter};
use crate::types::HardwareType;

/// Maximale Anzahl Module, für die ein Frame Platz hat
pub const MAX_CHAIN_DEVICES: usize = 16;

/// Höchste Helligkeitsstufe des MAX7219
pub const MAX_INTENSITY: u8 = 15;

/// Ein Frame für die gesamte Kette
pub type Frame = Vec<u8, { MAX_CHAIN_DEVICES * 2 }>;

/// Feste Hardware-Konfiguration der Anzeige
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub hardware: HardwareType,
    /// Anzahl Module in der Kette
    pub devices: u8,
    /// GPIO für Chip-Select (SS)
    pub cs_pin: u8,
    /// Höchste Scroll-Geschwindigkeit (Frame-Verzögerung in ms)
    pub max_speed: u8,
}

/// Die verbaute Anzeige: 8 FC-16 Module, CS auf GPIO15
pub const DISPLAY: DisplayConfig = DisplayConfig {
    hardware: HardwareType::Fc16,
    devices: 8,
    cs_pin: 15,
    max_speed: 50,
};

impl DisplayConfig {
    /// Anzahl LED-Spalten der gesamten Anzeige
    pub const fn columns(&self) -> usize {
        self.devices as usize * 8
    }

    /// Bytes pro Frame
    pub const fn frame_len(&self) -> usize {
        self.devices as usize * 2
    }
}

/// Register des MAX7219
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    NoOp,
    /// Spalte 0..=7 eines Moduls
    Digit(u8),
    DecodeMode,
    Intensity,
    ScanLimit,
    Shutdown,
    DisplayTest,
}

impl Register {
    pub fn address(self) -> u8 {
        match self {
            Register::NoOp => 0x00,
            Register::Digit(d) => 0x01 + (d & 0x07),
            Register::DecodeMode => 0x09,
            Register::Intensity => 0x0A,
            Register::ScanLimit => 0x0B,
            Register::Shutdown => 0x0C,
            Register::DisplayTest => 0x0F,
        }
    }
}

/// Erzeugt einen Frame, der `register` auf allen Modulen der Kette setzt
///
/// ```
/// # use ticker_core::{Register, display::chain_frame};
/// let frame = chain_frame(Register::Intensity, 5, 2).unwrap();
/// assert_eq!(&frame[..], &[0x0A, 5, 0x0A, 5]);
/// ```
pub fn chain_frame(register: Register, value: u8, devices: u8) -> Result<Frame, CapacityError> {
    let required = devices as usize * 2;
    if devices as usize > MAX_CHAIN_DEVICES {
        return Err(CapacityError {
            capacity: MAX_CHAIN_DEVICES * 2,
            required,
        });
    }

    let mut frame = Frame::new();
    for _ in 0..devices {
        frame
            .extend_from_slice(&[register.address(), value])
            .map_err(|_| CapacityError {
                capacity: MAX_CHAIN_DEVICES * 2,
                required,
            })?;
    }
    Ok(frame)
}

fn write_all<W: MatrixWriter>(
    writer: &mut W,
    config: &DisplayConfig,
    register: Register,
    value: u8,
) -> Result<(), MatrixError> {
    let frame =
        chain_frame(register, value, config.devices).map_err(|_| MatrixError::ChainTooLong)?;
    writer.write_frame(&frame)
}

/// Initialisiert alle Module der Kette
///
/// Reihenfolge: Display-Test aus, alle 8 Spalten aktiv, kein BCD-Decode,
/// Helligkeit, Spalten löschen, Shutdown verlassen.
pub fn init_matrix<W: MatrixWriter>(
    writer: &mut W,
    config: &DisplayConfig,
    intensity: u8,
) -> Result<(), MatrixError> {
    write_all(writer, config, Register::DisplayTest, 0)?;
    write_all(writer, config, Register::ScanLimit, 7)?;
    write_all(writer, config, Register::DecodeMode, 0)?;
    set_intensity(writer, config, intensity)?;
    clear_matrix(writer, config)?;
    write_all(writer, config, Register::Shutdown, 1)
}

/// Setzt die Helligkeit; Werte über [`MAX_INTENSITY`] werden begrenzt
pub fn set_intensity<W: MatrixWriter>(
    writer: &mut W,
    config: &DisplayConfig,
    intensity: u8,
) -> Result<(), MatrixError> {
    write_all(
        writer,
        config,
        Register::Intensity,
        intensity.min(MAX_INTENSITY),
    )
}

/// Schaltet alle LEDs aus
pub fn clear_matrix<W: MatrixWriter>(
    writer: &mut W,
    config: &DisplayConfig,
) -> Result<(), MatrixError> {
    for digit in 0..8 {
        write_all(writer, config, Register::Digit(digit), 0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_constants() {
        assert_eq!(DISPLAY.hardware, HardwareType::Fc16);
        assert_eq!(DISPLAY.devices, 8);
        assert_eq!(DISPLAY.cs_pin, 15);
        assert_eq!(DISPLAY.max_speed, 50);
        assert_eq!(DISPLAY.columns(), 64);
        assert_eq!(DISPLAY.frame_len(), 16);
    }

    #[test]
    fn test_register_addresses() {
        assert_eq!(Register::Digit(0).address(), 0x01);
        assert_eq!(Register::Digit(7).address(), 0x08);
        assert_eq!(Register::Shutdown.address(), 0x0C);
        assert_eq!(Register::DisplayTest.address(), 0x0F);
    }

    #[test]
    fn test_chain_frame_too_long() {
        let err = chain_frame(Register::NoOp, 0, 17).unwrap_err();
        assert_eq!(err.capacity, 32);
        assert_eq!(err.required, 34);
    }
}
