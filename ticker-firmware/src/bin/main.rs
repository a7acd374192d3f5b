// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::rng::Rng;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und defmt-Ausgabe
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use defmt::info;
use esp_ticker::config::{DEBUG_BAUDRATE, SPI_FREQUENCY_MHZ, build_settings};
use esp_ticker::hal::{SpiMatrixWriter, UartDebugSink};
use esp_ticker::tasks::ticker_task;
use esp_ticker::{DISPLAY, TickerState};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

// CS der Matrix ist fest auf GPIO15 verdrahtet (siehe SPI-Setup unten)
const _: () = assert!(DISPLAY.cs_pin == 15);

/// Main Entry Point
///
/// Initialisiert Hardware, baut den Laufzeit-Zustand und spawnt die
/// Hauptschleife. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Debug-Konsole: UART1, TX auf GPIO4, RX auf GPIO5
    // (USB-Serial-JTAG bleibt für defmt reserviert)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(DEBUG_BAUDRATE),
    )
    .expect("Failed to initialize debug UART")
    .with_tx(peripherals.GPIO4)
    .with_rx(peripherals.GPIO5);
    let sink = UartDebugSink::new(uart);

    // LED-Matrix: SPI2, SCK auf GPIO6, MOSI auf GPIO7, CS auf GPIO15
    let spi = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ))
            .with_mode(Mode::_0),
    )
    .expect("Failed to initialize SPI")
    .with_sck(peripherals.GPIO6)
    .with_mosi(peripherals.GPIO7);
    let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());
    let matrix = SpiMatrixWriter::new(spi, cs);

    // Laufzeit-Zustand mit Build-Zeit Settings
    let now_ms = Instant::now().as_millis() as u32;
    let state = TickerState::new(build_settings(), now_ms)
        .expect("Filterwort-Liste aus den Settings passt nicht");
    info!(
        "Main: Settings geladen, Hostname {}, {} Module",
        state.settings.hostname, DISPLAY.devices
    );

    // Spawn Ticker Task (besitzt Konsole, Matrix und Zustand)
    spawner
        .spawn(ticker_task(sink, matrix, state, Rng::new()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
