// Task-Modul: Enthält alle Embassy Tasks
//
// Die Firmware hat eine einzige Hauptschleife, die den Laufzeit-Zustand
// besitzt und in festem Takt pollt.

pub mod ticker;

// Re-export Tasks für einfachen Import
pub use ticker::ticker_task;
