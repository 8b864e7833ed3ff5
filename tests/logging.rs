//! Log events emitted while navigating.

use std::io::Write;
use std::sync::{Arc, Mutex};

mod common;

/// Shared in-memory sink for the fmt layer.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_unknown_path_logs_warning() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut nav = common::default_navigator();
        nav.push("/tablesize").unwrap();
        nav.push("/unknown").unwrap();
    });

    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(
        output.contains("No match found for location with path \"/unknown\""),
        "{output}"
    );
    assert!(!output.contains("\"/tablesize\""), "{output}");
}
