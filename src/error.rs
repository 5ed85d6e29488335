//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! The OpenLCD protocol is write-only: the controller never acknowledges a
//! command, so the only runtime failure the driver can see is the bus
//! refusing a write. Out-of-range arguments are masked or clamped, never
//! rejected.
//!
//! ## Example
//!
//! ```
//! use serlcd::{BuilderError, Dimensions};
//!
//! // The firmware only knows 16 or 20 columns
//! let result = Dimensions::new(24, 2);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { columns: 24, rows: 2 })));
//! ```

use crate::interface::LcdInterface;

/// Maximum number of rows on any SerLCD panel
pub const MAX_ROWS: u8 = 4;

/// Maximum number of columns on any SerLCD panel
pub const MAX_COLUMNS: u8 = 20;

/// Errors that can occur when talking to the display
///
/// Generic over the interface type to preserve the specific bus error.
/// When a flag toggle fails, the local flag state has already been updated
/// and is no longer known to match the device.
pub enum Error<I: LcdInterface> {
    /// Interface error (I2C/SPI/UART)
    ///
    /// Wraps the underlying bus error from the [`LcdInterface`] implementation.
    Interface(I::Error),
}

impl<I: LcdInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
        }
    }
}

impl<I: LcdInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: LcdInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Geometry not supported by the firmware
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns requested
        columns: u8,
        /// Number of rows requested
        rows: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { columns, rows } => write!(
                f,
                "Invalid dimensions {columns}x{rows} (columns must be 16 or {MAX_COLUMNS}, rows 1, 2 or {MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    /// Interface type that deliberately does not implement `Debug`
    struct OpaqueInterface;

    impl LcdInterface for OpaqueInterface {
        type Error = u8;

        fn write_bytes(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Err(7)
        }
    }

    fn assert_error<E: core::error::Error>(_: &E) {}

    #[test]
    fn test_error_debug_needs_only_bus_error() {
        let err: Error<OpaqueInterface> = Error::Interface(7);
        assert_eq!(format!("{err:?}"), "Interface(7)");
        assert_eq!(err.to_string(), "Interface error: 7");
        assert_error(&err);
    }

    #[test]
    fn test_builder_error_message_names_geometry() {
        let err = BuilderError::InvalidDimensions {
            columns: 8,
            rows: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("8x3"));
        assert!(msg.contains("16 or 20"));
    }
}
