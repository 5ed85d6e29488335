//! Text output via `core::fmt`
//!
//! This module provides the `core::fmt::Write` implementation for
//! [`SerLcd`], so the standard formatting macros print straight to the
//! display, and the chunked writer behind [`SerLcd::write`].
//!
//! Formatted text is collected into a [`TEXT_CHUNK_SIZE`]-byte buffer before
//! it is sent. Anything that fits on a full 20x4 panel goes out as a single
//! transmission; longer text is split into consecutive chunks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use serlcd::{SerLcd, SerialInterface};
//! # use core::convert::Infallible;
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let mut lcd = match SerLcd::new(SerialInterface::new(MockUart), MockDelay) {
//!     Ok(lcd) => lcd,
//!     Err(_) => return,
//! };
//!
//! let celsius = 21.5;
//! let _ = write!(lcd, "Temp: {celsius:.1}C");
//! ```

use core::fmt;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::display::SerLcd;
use crate::error::{MAX_COLUMNS, MAX_ROWS};
use crate::interface::LcdInterface;

/// Largest text transmission, one full 20x4 screen
pub const TEXT_CHUNK_SIZE: usize = MAX_COLUMNS as usize * MAX_ROWS as usize;

/// Buffers formatted text and sends it in [`TEXT_CHUNK_SIZE`] pieces
///
/// `fmt::Write` cannot carry the bus error, so the first failure is kept
/// and handed back by [`ChunkWriter::finish`].
pub(crate) struct ChunkWriter<'a, I: LcdInterface> {
    interface: &'a mut I,
    buf: Vec<u8, TEXT_CHUNK_SIZE>,
    error: Option<I::Error>,
}

impl<'a, I: LcdInterface> ChunkWriter<'a, I> {
    pub(crate) fn new(interface: &'a mut I) -> Self {
        Self {
            interface,
            buf: Vec::new(),
            error: None,
        }
    }

    fn flush(&mut self) -> fmt::Result {
        if self.buf.is_empty() {
            return Ok(());
        }
        log::trace!("tx {} text bytes: {:02x?}", self.buf.len(), self.buf.as_slice());
        let result = self.interface.write_bytes(&self.buf);
        self.buf.clear();
        result.map_err(|e| {
            log::warn!("text write failed");
            self.error = Some(e);
            fmt::Error
        })
    }

    /// Send whatever is still buffered and report the first bus error
    pub(crate) fn finish(mut self, result: fmt::Result) -> Result<(), I::Error> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        // A Display impl that fails on its own still gets its partial output
        if result.is_err() {
            log::warn!("formatter reported an error, sending partial text");
        }
        let _ = self.flush();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<I: LcdInterface> fmt::Write for ChunkWriter<'_, I> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s.as_bytes();
        while !rest.is_empty() {
            let room = TEXT_CHUNK_SIZE - self.buf.len();
            let (head, tail) = rest.split_at(room.min(rest.len()));
            // Fits by construction
            let _ = self.buf.extend_from_slice(head);
            rest = tail;
            if self.buf.is_full() {
                self.flush()?;
            }
        }
        Ok(())
    }
}

/// Prints formatted text at the cursor
///
/// `write!` output is buffered like [`SerLcd::write`], so a message that
/// fits in [`TEXT_CHUNK_SIZE`] bytes is one transmission. A bus failure is
/// reported as [`fmt::Error`]; use [`SerLcd::write`] to get the bus error
/// itself.
impl<I, D> fmt::Write for SerLcd<I, D>
where
    I: LcdInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        SerLcd::write(self, s).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        SerLcd::write(self, &args).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec as StdVec;
    use core::fmt::Write as _;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: StdVec<StdVec<u8>>,
        fail_after: Option<usize>,
    }

    impl LcdInterface for MockInterface {
        type Error = ();

        fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
                return Err(());
            }
            self.writes.push(data.to_vec());
            Ok(())
        }
    }

    struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn write_through_chunks(interface: &mut MockInterface, text: &str) -> Result<(), ()> {
        let mut writer = ChunkWriter::new(interface);
        let result = fmt::write(&mut writer, format_args!("{text}"));
        writer.finish(result)
    }

    #[test]
    fn test_chunk_size_is_full_screen() {
        assert_eq!(TEXT_CHUNK_SIZE, 80);
    }

    #[test]
    fn test_short_text_is_one_transmission() {
        let mut interface = MockInterface::default();
        write_through_chunks(&mut interface, "Hello").unwrap();
        assert_eq!(interface.writes, vec![b"Hello".to_vec()]);
    }

    #[test]
    fn test_empty_text_sends_nothing() {
        let mut interface = MockInterface::default();
        write_through_chunks(&mut interface, "").unwrap();
        assert!(interface.writes.is_empty());
    }

    #[test]
    fn test_exactly_one_chunk() {
        let mut interface = MockInterface::default();
        let text = "x".repeat(TEXT_CHUNK_SIZE);
        write_through_chunks(&mut interface, &text).unwrap();
        assert_eq!(interface.writes.len(), 1);
        assert_eq!(interface.writes[0].len(), TEXT_CHUNK_SIZE);
    }

    #[test]
    fn test_long_text_is_split() {
        let mut interface = MockInterface::default();
        let text = "0123456789".repeat(17);
        write_through_chunks(&mut interface, &text).unwrap();
        let lens: StdVec<usize> = interface.writes.iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![80, 80, 10]);
        assert_eq!(interface.writes.concat(), text.as_bytes());
    }

    #[test]
    fn test_utf8_passes_through() {
        let mut interface = MockInterface::default();
        write_through_chunks(&mut interface, "°C").unwrap();
        assert_eq!(interface.writes, vec![vec![0xC2, 0xB0, 0x43]]);
    }

    #[test]
    fn test_error_is_returned_from_finish() {
        let mut interface = MockInterface {
            fail_after: Some(1),
            ..Default::default()
        };
        let text = "y".repeat(200);
        assert_eq!(write_through_chunks(&mut interface, &text), Err(()));
        assert_eq!(interface.writes.len(), 1);
    }

    #[test]
    fn test_fmt_write_on_driver_is_one_transmission() {
        let mut lcd = SerLcd::new(MockInterface::default(), MockDelay).unwrap();
        let readings = [21.5f32, 40.0];
        write!(lcd, "T={:.1} H={}%", readings[0], readings[1] as u8).unwrap();
        let (interface, _) = lcd.release();
        // Init frame, then the whole message in one buffer
        assert_eq!(&interface.writes[1..], &[b"T=21.5 H=40%".to_vec()]);
    }

    #[test]
    fn test_fmt_write_long_message_is_chunked() {
        let mut lcd = SerLcd::new(MockInterface::default(), MockDelay).unwrap();
        let line = "0123456789".repeat(9);
        write!(lcd, "{line}!").unwrap();
        let (interface, _) = lcd.release();
        let lens: StdVec<usize> = interface.writes[1..].iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![80, 11]);
    }

    #[test]
    fn test_fmt_write_maps_bus_error() {
        let mut lcd = SerLcd::new(MockInterface::default(), MockDelay).unwrap();
        lcd.interface_mut().fail_after = Some(0);
        assert_eq!(write!(lcd, "x"), Err(fmt::Error));
    }
}
