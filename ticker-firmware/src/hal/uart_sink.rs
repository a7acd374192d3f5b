// Serielle Debug-Konsole über UART1
use esp_hal::Blocking;
use esp_hal::uart::Uart;
use ticker_core::DebugSink;

/// Debug-Sink auf einem blockierenden UART
///
/// Schreibfehler werden verworfen: die Konsole ist reine Diagnose und
/// darf die Hauptschleife nicht aufhalten.
pub struct UartDebugSink<'a> {
    uart: Uart<'a, Blocking>,
}

impl<'a> UartDebugSink<'a> {
    /// Erstellt eine Sink auf einem fertig konfigurierten UART (Baudrate, TX-Pin)
    pub fn new(uart: Uart<'a, Blocking>) -> Self {
        Self { uart }
    }
}

impl DebugSink for UartDebugSink<'_> {
    fn write_str(&mut self, text: &str) {
        let mut bytes = text.as_bytes();
        // write() füllt nur den freien Teil des TX-FIFO
        while !bytes.is_empty() {
            match self.uart.write(bytes) {
                Ok(0) | Err(_) => break,
                Ok(n) => bytes = &bytes[n..],
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.uart.flush();
    }
}
