//! Hardware interface abstraction
//!
//! This module provides the [`LcdInterface`] trait and one adapter per bus the
//! SerLCD backpack can be wired to:
//!
//! - [`I2cInterface`]: I2C, default address [`DEFAULT_I2C_ADDRESS`]
//! - [`SpiInterface`]: SPI, chip select owned by the [`SpiDevice`]
//! - [`SerialInterface`]: UART (TX only), any [`embedded_io::Write`] sink
//!
//! The protocol is write-only. Nothing is ever read back from the display.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use serlcd::{I2cInterface, LcdInterface, DEFAULT_I2C_ADDRESS};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c);
//! assert_eq!(interface.address(), DEFAULT_I2C_ADDRESS);
//!
//! // Print "Hi" at the cursor
//! let _ = interface.write_bytes(b"Hi");
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Factory default I2C address of the SerLCD
pub const DEFAULT_I2C_ADDRESS: u8 = 0x72;

/// Trait for the transport between the driver and the SerLCD
///
/// This trait abstracts over the three buses the display accepts, allowing
/// [`SerLcd`](crate::display::SerLcd) to work with any implementation that
/// can push a byte buffer to the device.
///
/// ## Implementing
///
/// For most cases, use one of the provided adapters. If you need custom
/// behavior (e.g., a shared bus behind a mutex, retries), implement this
/// trait on your own type.
pub trait LcdInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Transmit a buffer to the display
    ///
    /// The buffer must go out as a single bus operation, with exclusive
    /// access to the bus for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails (device absent, NACK, ...).
    #[allow(clippy::type_complexity)]
    fn write_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Retarget subsequent writes to a new device address
    ///
    /// Called right after the display has been told to change its address.
    /// Buses without addressing keep the default no-op.
    ///
    /// # Errors
    ///
    /// Implementations must report failure instead of silently keeping the
    /// old target.
    #[allow(clippy::type_complexity)]
    fn rebind(&mut self, address: u8) -> InterfaceResult<(), Self::Error> {
        let _ = address;
        Ok(())
    }
}

/// I2C transport
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface targeting [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new interface targeting `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address writes are sent to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> LcdInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn write_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, data)
    }

    fn rebind(&mut self, address: u8) -> InterfaceResult<(), Self::Error> {
        self.address = address;
        Ok(())
    }
}

/// SPI transport
///
/// The [`SpiDevice`] asserts chip select for exactly one transfer, which
/// gives each buffer exclusive use of the bus.
#[derive(Debug)]
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    /// Create a new interface
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> LcdInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn write_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(data)
    }
}

/// UART transport
///
/// Only the TX line is used. Each buffer is written in full and flushed
/// before the call returns.
#[derive(Debug)]
pub struct SerialInterface<W> {
    uart: W,
}

impl<W> SerialInterface<W>
where
    W: embedded_io::Write,
{
    /// Create a new interface
    pub fn new(uart: W) -> Self {
        Self { uart }
    }

    /// Release the UART
    pub fn release(self) -> W {
        self.uart
    }
}

impl<W> LcdInterface for SerialInterface<W>
where
    W: embedded_io::Write,
{
    type Error = W::Error;

    fn write_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.uart.write_all(data)?;
        self.uart.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorType as I2cErrorType, Operation as I2cOperation};
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation as SpiOperation};

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl I2cErrorType for MockI2c {
        type Error = core::convert::Infallible;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [I2cOperation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let I2cOperation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockSpi {
        writes: Vec<Vec<u8>>,
    }

    impl SpiErrorType for MockSpi {
        type Error = core::convert::Infallible;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [SpiOperation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let SpiOperation::Write(bytes) = op {
                    self.writes.push(bytes.to_vec());
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockUart {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl embedded_io::ErrorType for MockUart {
        type Error = core::convert::Infallible;
    }

    impl embedded_io::Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            // Accept at most two bytes per call to exercise write_all
            let n = buf.len().min(2);
            self.bytes.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_default_i2c_address() {
        assert_eq!(DEFAULT_I2C_ADDRESS, 0x72);
        let interface = I2cInterface::new(MockI2c::default());
        assert_eq!(interface.address(), 0x72);
    }

    #[test]
    fn test_i2c_rebind_retargets_writes() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.write_bytes(&[0x7C, 0x19, 0x71]).unwrap();
        interface.rebind(0x71).unwrap();
        interface.write_bytes(&[0x48]).unwrap();

        assert_eq!(interface.address(), 0x71);
        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            alloc::vec![(0x72, alloc::vec![0x7C, 0x19, 0x71]), (0x71, alloc::vec![0x48])]
        );
    }

    #[test]
    fn test_spi_writes_one_transfer_per_buffer() {
        let mut interface = SpiInterface::new(MockSpi::default());
        interface.write_bytes(&[0xFE, 0x02]).unwrap();
        interface.write_bytes(b"Hi").unwrap();
        // Rebind is a no-op without addressing
        interface.rebind(0x10).unwrap();

        let spi = interface.release();
        assert_eq!(spi.writes, alloc::vec![alloc::vec![0xFE, 0x02], alloc::vec![0x48, 0x69]]);
    }

    #[test]
    fn test_serial_writes_whole_buffer_and_flushes() {
        let mut interface = SerialInterface::new(MockUart::default());
        interface.write_bytes(&[0x7C, 0x2B, 0x10, 0x20, 0x30]).unwrap();

        let uart = interface.release();
        assert_eq!(uart.bytes, alloc::vec![0x7C, 0x2B, 0x10, 0x20, 0x30]);
        assert_eq!(uart.flushes, 1);
    }
}
