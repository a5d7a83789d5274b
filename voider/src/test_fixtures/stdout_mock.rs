// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex}};

use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.clone()).expect("utf8")
    }

    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        let buffer_data = strip(buffer_data.as_slice());
        String::from_utf8(buffer_data).expect("utf8")
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stdout_mock_clones_share_the_buffer() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone();

        stdout_mock.write_all(b"hello void").unwrap();

        assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string(), "hello void");
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        stdout_mock
            .write_all(b"\x1b[31mhello\x1b[0m void\n")
            .unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "hello void\n"
        );
    }
}
