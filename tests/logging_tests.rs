use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use newsbrief::setup_logging;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

#[test]
fn test_logging_setup() {
    // This test verifies that the logging setup function doesn't panic
    // We catch any panics in a controlled way to isolate this test
    let result = std::panic::catch_unwind(|| {
        // Call the setup_logging function
        setup_logging();
    });

    // The test passes if no panic occurred
    assert!(result.is_ok(), "setup_logging function should not panic");
}

// Collects everything the formatter writes so a test can read it back.
#[derive(Clone)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_json_layer_emits_structured_lines() {
    let captured = Arc::new(Mutex::new(Vec::new()));

    // Same layer shape as setup_logging, pointed at a buffer instead of
    // stdout so the emitted line can be parsed back.
    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(CaptureWriter(Arc::clone(&captured)));
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("summary pipeline ready");
    });

    let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
    let line: serde_json::Value =
        serde_json::from_str(output.lines().next().expect("no log line captured")).unwrap();

    assert_eq!(line["level"], "INFO");
    assert_eq!(line["fields"]["message"], "summary pipeline ready");
    assert_eq!(line["target"], "logging_tests");
}
