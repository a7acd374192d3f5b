// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus ticker-core für die ESP32-C6 Peripherie.
// Mocks für Tests liegen in ticker-tests.

pub mod spi_matrix;
pub mod uart_sink;

pub use spi_matrix::SpiMatrixWriter;
pub use uart_sink::UartDebugSink;
