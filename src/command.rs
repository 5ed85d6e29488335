//! OpenLCD command definitions
//!
//! This module defines the command bytes understood by the SerLCD (OpenLCD)
//! firmware. Everything sent to the display is a plain byte stream; there is
//! no data/command pin. Bytes that are not part of an envelope are printed as
//! text at the cursor position.
//!
//! ## Envelopes
//!
//! - **Setting command**: [`SETTING_COMMAND`] followed by one setting code.
//!   Handled by the OpenLCD firmware itself (contrast, backlight, splash, ...).
//! - **Special command**: [`SPECIAL_COMMAND`] followed by one or more
//!   HD44780 instruction bytes, forwarded to the LCD controller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serlcd::{command, LcdInterface, SerialInterface};
//! # use core::convert::Infallible;
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = SerialInterface::new(MockUart);
//!
//! // Clear the display and home the cursor
//! let _ = interface.write_bytes(&[command::SETTING_COMMAND, command::CLEAR]);
//! ```

// Envelopes

/// Setting command prefix (0x7C, `|`)
pub const SETTING_COMMAND: u8 = 0x7C;

/// Special command prefix (0xFE)
pub const SPECIAL_COMMAND: u8 = 0xFE;

// Setting commands

/// Change width to 20 columns (Ctrl+C)
pub const WIDTH_20: u8 = 0x03;

/// Change width to 16 columns (Ctrl+D)
pub const WIDTH_16: u8 = 0x04;

/// Change to 4 lines (Ctrl+E)
pub const LINES_4: u8 = 0x05;

/// Change to 2 lines (Ctrl+F)
pub const LINES_2: u8 = 0x06;

/// Change to 1 line (Ctrl+G)
pub const LINES_1: u8 = 0x07;

/// Software reset of the system (Ctrl+H)
pub const RESET: u8 = 0x08;

/// Save the currently displayed text as the splash screen (Ctrl+J)
pub const SAVE_SPLASH: u8 = 0x0A;

/// Change the contrast (Ctrl+X)
///
/// Followed by one byte, 0 to 255. 120 is the factory default.
pub const CONTRAST: u8 = 0x18;

/// Change the I2C address (Ctrl+Y)
///
/// Followed by one byte. 0x72 is the factory default. Persistent.
pub const ADDRESS: u8 = 0x19;

/// First custom character slot (27); slot `n` is `CREATE_CHAR_BASE + n`
///
/// Followed by 8 bytes of 5-bit glyph rows.
pub const CREATE_CHAR_BASE: u8 = 27;

/// Set RGB backlight (`+`)
///
/// Followed by three bytes: red, green, blue, each 0 to 255.
pub const SET_RGB: u8 = 0x2B;

/// Display the current firmware version (`,`)
pub const SHOW_VERSION: u8 = 0x2C;

/// Clear the display and move the cursor home (`-`)
pub const CLEAR: u8 = 0x2D;

/// Print the custom character in slot `n` at `WRITE_CHAR_BASE + n` (35, `#`)
pub const WRITE_CHAR_BASE: u8 = 35;

/// Enable system messages such as `Contrast: 5` (`.`)
pub const ENABLE_SYSTEM_MESSAGES: u8 = 0x2E;

/// Disable system messages (`/`)
pub const DISABLE_SYSTEM_MESSAGES: u8 = 0x2F;

/// Enable the splash screen at power on (`0`)
pub const ENABLE_SPLASH: u8 = 0x30;

/// Disable the splash screen at power on (`1`)
pub const DISABLE_SPLASH: u8 = 0x31;

/// Primary (red) backlight brightness range, 128 = off, 157 = 100%
pub const BACKLIGHT_RED_BASE: u8 = 128;

/// Green backlight brightness range, 158 = off, 187 = 100%
pub const BACKLIGHT_GREEN_BASE: u8 = 158;

/// Blue backlight brightness range, 188 = off, 217 = 100%
pub const BACKLIGHT_BLUE_BASE: u8 = 188;

/// Number of brightness steps above each backlight base
pub const BACKLIGHT_STEPS: u8 = 29;

/// Character that resets the splash screen to the factory glyph
pub const DEFAULT_SPLASH_CHAR: u8 = 0xFF;

// Special (HD44780) commands

/// Return home
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set, OR'd with [`ENTRY_LEFT`] / [`ENTRY_SHIFT_INCREMENT`]
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control, OR'd with [`DISPLAY_ON`] / [`CURSOR_ON`] / [`BLINK_ON`]
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift, OR'd with move target and direction
pub const CURSOR_SHIFT: u8 = 0x10;

/// Set DDRAM address, OR'd with the address
pub const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags

/// Text flows left to right
pub const ENTRY_LEFT: u8 = 0x02;

/// Shift the display on each write (autoscroll)
pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;

// Display control flags

/// Display on
pub const DISPLAY_ON: u8 = 0x04;

/// Underline cursor on
pub const CURSOR_ON: u8 = 0x02;

/// Blinking box cursor on
pub const BLINK_ON: u8 = 0x01;

// Shift flags

/// Shift the whole display
pub const DISPLAY_MOVE: u8 = 0x08;

/// Move the cursor only
pub const CURSOR_MOVE: u8 = 0x00;

/// Shift right
pub const MOVE_RIGHT: u8 = 0x04;

/// Shift left
pub const MOVE_LEFT: u8 = 0x00;

// Settle times

/// Time the firmware needs after a setting command (ms)
pub const SETTING_SETTLE_MS: u32 = 10;

/// Time the firmware needs after a special command (ms)
pub const SPECIAL_SETTLE_MS: u32 = 50;

/// Time the firmware needs to draw the default splash glyph (ms)
pub const SPLASH_RESET_SETTLE_MS: u32 = 200;
