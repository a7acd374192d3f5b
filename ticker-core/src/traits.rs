//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

/// Zeilenende der seriellen Konsole
pub const LINE_END: &str = "\r\n";

/// Trait für die serielle Debug-Ausgabe
///
/// Nimmt formatierten Text entgegen und schreibt ihn auf einen
/// seriellen Transport. Fehler des Transports sind für den Aufrufer
/// nicht sichtbar.
///
/// # Implementierungen
/// - **Production:** UartDebugSink (ESP32 UART)
/// - **Testing:** MockDebugSink (in-memory Mock)
/// - [`NullSink`](crate::NullSink) verwirft alles
pub trait DebugSink {
    /// Schreibt Text unverändert auf den Transport
    fn write_str(&mut self, text: &str);

    /// Blockiert bis der Ausgabepuffer des Transports geleert ist
    fn flush(&mut self);

    /// Formatiert ohne Allokation und leitet jedes Fragment an `write_str` weiter
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut SinkAdapter(self), args);
    }

    /// Text gefolgt vom Zeilenende
    fn write_line(&mut self, text: &str) {
        self.write_str(text);
        self.write_str(LINE_END);
    }

    /// Formatierter Text gefolgt vom Zeilenende
    fn writeln_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.write_fmt(args);
        self.write_str(LINE_END);
    }
}

impl<S: DebugSink + ?Sized> DebugSink for &mut S {
    fn write_str(&mut self, text: &str) {
        (**self).write_str(text);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

struct SinkAdapter<'a, S: ?Sized>(&'a mut S);

impl<S: DebugSink + ?Sized> fmt::Write for SinkAdapter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Fehler-Typ für Operationen auf der LED-Matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    WriteFailed,
    /// Die Kette hat mehr Module als ein Frame aufnehmen kann
    ChainTooLong,
}

/// Trait für den Zugriff auf die MAX7219-Kette
///
/// Ein Frame enthält 2 Bytes (Register, Wert) pro Modul. Die
/// Implementierung schiebt den Frame komplett durch die Kette und
/// übernimmt ihn danach (Chip-Select).
///
/// # Implementierungen
/// - **Production:** SpiMatrixWriter (ESP32 SPI2 + CS-Pin)
/// - **Testing:** MockMatrixWriter (in-memory Mock)
pub trait MatrixWriter {
    /// Schreibt einen Frame auf die Kette
    ///
    /// # Fehlerbehandlung
    /// Gibt `MatrixError::WriteFailed` zurück wenn der Bus-Zugriff fehlschlägt
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), MatrixError>;
}
