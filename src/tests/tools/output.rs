// CLI output writer tests

use crate::cli::{OutputFormat, OutputWriter};
use crate::tools::navigation::Location;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Cloneable in-memory sink so the test can read what the writer produced
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn locations() -> Vec<Location> {
    vec![
        Location {
            file: "a.ts".to_string(),
            line: 3,
            class_name: Some("AppShell".to_string()),
        },
        Location {
            file: "b.ts".to_string(),
            line: 1,
            class_name: None,
        },
    ]
}

fn render(format: OutputFormat) -> String {
    let buffer = SharedBuffer::default();
    let mut writer = OutputWriter::with_writer(format, Box::new(buffer.clone()));
    writer.write_batch(&locations()).unwrap();
    buffer.contents()
}

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_text_output() {
        assert_eq!(render(OutputFormat::Text), "a.ts:3 (AppShell)\nb.ts:1\n");
    }

    #[test]
    fn test_ndjson_output() {
        let output = render(OutputFormat::Ndjson);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["className"], "AppShell");
    }

    #[test]
    fn test_json_output_is_one_array() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[1]["file"], "b.ts");
    }
}
