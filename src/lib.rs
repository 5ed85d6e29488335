//! SparkFun SerLCD Driver
//!
//! A driver for the SparkFun SerLCD (OpenLCD firmware) character displays:
//! 16x2 and 20x4 HD44780 panels with an RGB backlight, driven over I2C, SPI
//! or UART.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (`embedded-io` for UART)
//! - Text output through `core::fmt`
//! - Cursor, blink, autoscroll and text direction control
//! - RGB backlight, contrast and custom characters
//! - Splash screen, I2C address and baud rate management
//!
//! The OpenLCD protocol is write-only. Display control and entry mode flags
//! are shadowed in the driver and re-sent whole on every change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use serlcd::{Builder, Dimensions, SerLcd, SpiInterface};
//!
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let config = Builder::new()
//!     .dimensions(Dimensions::LCD_20X4)
//!     .system_messages(false)
//!     .build();
//!
//! let mut lcd = match SerLcd::with_config(SpiInterface::new(MockSpi), MockDelay, &config) {
//!     Ok(lcd) => lcd,
//!     Err(_) => return,
//! };
//! let _ = lcd.set_fast_backlight(0x00_40_FF);
//! let _ = lcd.write("Hello, World!");
//! let _ = lcd.set_cursor(0, 1);
//! let _ = lcd.cursor(true);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Backlight color
pub mod color;
/// OpenLCD command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Cursor position utilities
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Text output via `core::fmt`
pub mod text;

pub use color::Rgb;
pub use config::{BaudRate, Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::{DisplayControl, EntryMode, SerLcd};
pub use error::{BuilderError, Error};
pub use interface::{
    DEFAULT_I2C_ADDRESS, I2cInterface, LcdInterface, SerialInterface, SpiInterface,
};
pub use text::TEXT_CHUNK_SIZE;
