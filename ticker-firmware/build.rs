// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht optionale Settings aus .env weiter und konfiguriert den Linker

/// Environment-Variablen, die als Default-Settings eingebacken werden
const SETTINGS_ENV: [&str; 4] = [
    "TICKER_HOSTNAME",
    "WEERLIVE_AUTH",
    "WEERLIVE_LOCATION",
    "NEWSAPI_AUTH",
];

fn main() {
    // Lade .env file (optional: ohne .env gelten die Standard-Settings)
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env nicht geladen ({}), nutze Standard-Settings", e);
    }

    // Gebe gesetzte Werte an den Compiler weiter (option_env! in config.rs)
    for name in SETTINGS_ENV {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // 1. defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Vom Linker aufgerufen: <script> <Fehler-Typ> <Symbol>
    if args.len() > 2 {
        let hint = match (args[1].as_str(), args[2].as_str()) {
            ("undefined-symbol", what) if what.starts_with("_defmt_") => Some(
                "`defmt` not found - make sure `defmt.x` is added as a linker script",
            ),
            ("undefined-symbol", "_stack_start") => Some("Is the linker script `linkall.x` missing?"),
            ("undefined-symbol", what) if what.starts_with("esp_rtos_") => {
                Some("`esp-rtos` was not started - call `esp_rtos::start` before spawning tasks")
            }
            ("undefined-symbol", _) => None,
            _ => std::process::exit(1),
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {}", hint);
            eprintln!();
        }
        std::process::exit(0);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
