//! Observability subsystem
//!
//! Structured logging through `tracing`, plus typed lifecycle events. Every
//! lifecycle line carries `event=<NAME>`; any detail travels as its own
//! field so filters and JSON formatters can see it.
//!
//! # Usage
//!
//! ```ignore
//! use hrms::observability::{init_logging, log_serving};
//!
//! init_logging();
//! log_serving("0.0.0.0:3000".parse().unwrap());
//! ```

mod events;
mod logger;

use std::fmt::Display;
use std::net::SocketAddr;

pub use events::Event;
pub use logger::{init_logging, DEFAULT_FILTER};

/// Log a lifecycle event that carries no detail
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = %event, fatal = true, "lifecycle");
    } else {
        tracing::info!(event = %event, "lifecycle");
    }
}

pub fn log_boot_failed(error: &dyn Display) {
    tracing::error!(event = %Event::BootFailed, fatal = true, error = %error, "boot failed");
}

pub fn log_config_loaded(database: &str, port: u16) {
    tracing::info!(event = %Event::ConfigLoaded, database, port, "configuration loaded");
}

/// `database` is `None` for the in-memory store
pub fn log_store_connected(store: &str, database: Option<&str>) {
    tracing::info!(
        event = %Event::StoreConnected,
        store,
        database = database.unwrap_or("-"),
        "store connected"
    );
}

pub fn log_serving(addr: SocketAddr) {
    tracing::info!(event = %Event::Serving, addr = %addr, "listening");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_event_tags_event_name() {
        let out = capture(|| log_event(Event::ShutdownComplete));
        assert!(out.contains("INFO"));
        assert!(out.contains("event=SHUTDOWN_COMPLETE"));
    }

    #[test]
    fn test_fatal_event_logs_at_error() {
        let out = capture(|| log_event(Event::BootFailed));
        assert!(out.contains("ERROR"));
        assert!(out.contains("fatal=true"));
    }

    #[test]
    fn test_details_are_separate_fields() {
        let out = capture(|| {
            log_serving("127.0.0.1:8080".parse().unwrap());
            log_config_loaded("fiber-hrms", 3000);
            log_store_connected("memory", None);
            log_boot_failed(&"connection refused");
        });

        assert!(out.contains("event=HRMS_SERVING"));
        assert!(out.contains("addr=127.0.0.1:8080"));
        assert!(out.contains("database=\"fiber-hrms\""));
        assert!(out.contains("port=3000"));
        assert!(out.contains("store=\"memory\""));
        assert!(out.contains("error=connection refused"));
        assert!(!out.contains("fields="));
    }
}
