// MAX7219-Kette am Hardware-SPI
use esp_hal::Blocking;
use esp_hal::gpio::Output;
use esp_hal::spi::master::Spi;
use ticker_core::{MatrixError, MatrixWriter};

/// Matrix-Writer auf SPI2 mit eigenem Chip-Select
///
/// Die steigende CS-Flanke übernimmt die geschobenen Bytes in alle
/// Module gleichzeitig, deshalb steuert der Writer CS selbst.
pub struct SpiMatrixWriter<'a> {
    spi: Spi<'a, Blocking>,
    cs: Output<'a>,
}

impl<'a> SpiMatrixWriter<'a> {
    /// Erstellt den Writer
    ///
    /// # Parameter
    /// - `spi`: SPI2 mit SCK und MOSI, Mode 0
    /// - `cs`: Chip-Select Ausgang, initial High
    pub fn new(spi: Spi<'a, Blocking>, cs: Output<'a>) -> Self {
        Self { spi, cs }
    }
}

impl MatrixWriter for SpiMatrixWriter<'_> {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), MatrixError> {
        self.cs.set_low();
        let result = self.spi.write(frame);
        self.cs.set_high();
        result.map_err(|_| MatrixError::WriteFailed)
    }
}
