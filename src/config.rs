//! Display configuration types and builder
//!
//! The OpenLCD firmware keeps its settings (geometry, contrast, splash,
//! system messages) in EEPROM. A [`Config`] lists the settings to push after
//! initialization; unset fields leave the stored value alone.

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Character grid geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of character columns
    pub columns: u8,
    /// Number of character rows
    pub rows: u8,
}

impl Dimensions {
    /// 16x2 panel
    pub const LCD_16X2: Self = Self {
        columns: 16,
        rows: 2,
    };
    /// 20x4 panel
    pub const LCD_20X4: Self = Self {
        columns: MAX_COLUMNS,
        rows: MAX_ROWS,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - columns is not 16 or 20
    /// - rows is not 1, 2 or 4
    pub fn new(columns: u8, rows: u8) -> Result<Self, BuilderError> {
        if !matches!(columns, 16 | MAX_COLUMNS) || !matches!(rows, 1 | 2 | MAX_ROWS) {
            return Err(BuilderError::InvalidDimensions { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of character cells
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// UART baud rates supported by the firmware
///
/// The new rate takes effect immediately and is persistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BaudRate {
    /// 1200 bps
    Baud1200 = 0x17,
    /// 2400 bps
    Baud2400 = 0x0B,
    /// 4800 bps
    Baud4800 = 0x0C,
    /// 9600 bps (factory default)
    #[default]
    Baud9600 = 0x0D,
    /// 14400 bps
    Baud14400 = 0x0E,
    /// 19200 bps
    Baud19200 = 0x0F,
    /// 38400 bps
    Baud38400 = 0x10,
    /// 57600 bps
    Baud57600 = 0x11,
    /// 115200 bps
    Baud115200 = 0x12,
    /// 230400 bps
    Baud230400 = 0x13,
    /// 460800 bps
    Baud460800 = 0x14,
    /// 921600 bps
    Baud921600 = 0x15,
    /// 1000000 bps
    Baud1000000 = 0x16,
}

impl BaudRate {
    /// Setting command code for this rate
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Rate in bits per second
    pub fn bps(self) -> u32 {
        match self {
            Self::Baud1200 => 1_200,
            Self::Baud2400 => 2_400,
            Self::Baud4800 => 4_800,
            Self::Baud9600 => 9_600,
            Self::Baud14400 => 14_400,
            Self::Baud19200 => 19_200,
            Self::Baud38400 => 38_400,
            Self::Baud57600 => 57_600,
            Self::Baud115200 => 115_200,
            Self::Baud230400 => 230_400,
            Self::Baud460800 => 460_800,
            Self::Baud921600 => 921_600,
            Self::Baud1000000 => 1_000_000,
        }
    }
}

/// Settings applied after initialization
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Panel geometry
    pub dimensions: Option<Dimensions>,
    /// Contrast, 0 to 255 (factory default 120)
    pub contrast: Option<u8>,
    /// Whether the firmware prints confirmations such as `Contrast: 5`
    pub system_messages: Option<bool>,
    /// Whether the splash screen is shown at power on
    pub splash_screen: Option<bool>,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use serlcd::{Builder, Dimensions};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::LCD_20X4)
///     .contrast(40)
///     .system_messages(false)
///     .build();
/// assert_eq!(config.splash_screen, None);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel geometry
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.config.dimensions = Some(dims);
        self
    }

    /// Set contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = Some(value);
        self
    }

    /// Enable or disable system messages
    pub fn system_messages(mut self, enable: bool) -> Self {
        self.config.system_messages = Some(enable);
        self
    }

    /// Enable or disable the power-on splash screen
    pub fn splash_screen(mut self, enable: bool) -> Self {
        self.config.splash_screen = Some(enable);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_accepts_supported_geometries() {
        for columns in [16, 20] {
            for rows in [1, 2, 4] {
                let dims = Dimensions::new(columns, rows).unwrap();
                assert_eq!(dims.cells(), columns as usize * rows as usize);
            }
        }
    }

    #[test]
    fn test_dimensions_rejects_unsupported_geometries() {
        assert_eq!(
            Dimensions::new(20, 3),
            Err(BuilderError::InvalidDimensions {
                columns: 20,
                rows: 3
            })
        );
        assert!(Dimensions::new(0, 2).is_err());
        assert!(Dimensions::new(40, 4).is_err());
        assert!(Dimensions::new(16, 0).is_err());
    }

    #[test]
    fn test_baud_rate_codes() {
        assert_eq!(BaudRate::Baud2400.code(), 0x0B);
        assert_eq!(BaudRate::Baud115200.code(), 0x12);
        assert_eq!(BaudRate::Baud1000000.code(), 0x16);
        assert_eq!(BaudRate::Baud1200.code(), 0x17);
        assert_eq!(BaudRate::default().bps(), 9_600);
    }

    #[test]
    fn test_builder_defaults_leave_everything_unset() {
        assert_eq!(Builder::new().build(), Config::default());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = Builder::new()
            .dimensions(Dimensions::LCD_16X2)
            .contrast(5)
            .system_messages(true)
            .splash_screen(false)
            .build();
        assert_eq!(config.dimensions, Some(Dimensions::LCD_16X2));
        assert_eq!(config.contrast, Some(5));
        assert_eq!(config.system_messages, Some(true));
        assert_eq!(config.splash_screen, Some(false));
    }
}
