//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::command::{
    ADDRESS, BLINK_ON, CLEAR, CONTRAST, CREATE_CHAR_BASE, CURSOR_MOVE, CURSOR_ON, CURSOR_SHIFT,
    DEFAULT_SPLASH_CHAR, DISABLE_SPLASH, DISABLE_SYSTEM_MESSAGES, DISPLAY_CONTROL, DISPLAY_MOVE,
    DISPLAY_ON, ENABLE_SPLASH, ENABLE_SYSTEM_MESSAGES, ENTRY_LEFT, ENTRY_MODE_SET,
    ENTRY_SHIFT_INCREMENT, LINES_1, LINES_2, LINES_4, MOVE_LEFT, MOVE_RIGHT, RESET, RETURN_HOME,
    SAVE_SPLASH, SET_DDRAM_ADDR, SET_RGB, SETTING_COMMAND, SETTING_SETTLE_MS, SHOW_VERSION,
    SPECIAL_COMMAND, SPECIAL_SETTLE_MS, SPLASH_RESET_SETTLE_MS, WIDTH_16, WIDTH_20,
    WRITE_CHAR_BASE,
};
use crate::config::{BaudRate, Config, Dimensions};
use crate::cursor::ddram_address;
use crate::error::Error;
use crate::interface::LcdInterface;
use crate::text::ChunkWriter;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Display on/off control flags
///
/// Shadow of the controller's display control register, which cannot be
/// read back. Defaults to display on, cursor off, blink off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayControl(u8);

impl Default for DisplayControl {
    fn default() -> Self {
        Self(DISPLAY_ON)
    }
}

impl DisplayControl {
    /// Raw flag bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether the display is on
    pub fn display_on(self) -> bool {
        self.0 & DISPLAY_ON != 0
    }

    /// Whether the underline cursor is on
    pub fn cursor_on(self) -> bool {
        self.0 & CURSOR_ON != 0
    }

    /// Whether the cursor blinks
    pub fn blink_on(self) -> bool {
        self.0 & BLINK_ON != 0
    }

    fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// Entry mode flags
///
/// Shadow of the controller's entry mode register. Defaults to left to
/// right with autoscroll off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryMode(u8);

impl Default for EntryMode {
    fn default() -> Self {
        Self(ENTRY_LEFT)
    }
}

impl EntryMode {
    /// Raw flag bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether text flows left to right
    pub fn left_to_right(self) -> bool {
        self.0 & ENTRY_LEFT != 0
    }

    /// Whether the display shifts on each character (autoscroll)
    pub fn autoscroll(self) -> bool {
        self.0 & ENTRY_SHIFT_INCREMENT != 0
    }

    fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// Core display driver for the SerLCD
///
/// Encodes display operations into OpenLCD byte sequences, sends each as one
/// transmission through the [`LcdInterface`], then blocks for the settle time
/// the firmware needs before the next command.
///
/// The display control and entry mode registers cannot be read back, so they
/// are shadowed here and every toggle re-sends the whole register. If a
/// transmission fails, the shadow is not rolled back.
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::delay::DelayNs;
/// use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
/// use serlcd::{I2cInterface, SerLcd};
/// # use core::convert::Infallible;
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// let mut lcd = match SerLcd::new(I2cInterface::new(MockI2c), MockDelay) {
///     Ok(lcd) => lcd,
///     Err(_) => return,
/// };
///
/// let _ = lcd.set_backlight(0xFF8C00);
/// let _ = lcd.set_cursor(0, 1);
/// let _ = lcd.write("Hello, World!");
/// ```
pub struct SerLcd<I, D>
where
    I: LcdInterface,
    D: DelayNs,
{
    /// Hardware interface
    interface: I,
    /// Settle-time delay provider
    delay: D,
    /// Display control shadow
    display_control: DisplayControl,
    /// Entry mode shadow
    entry_mode: EntryMode,
}

impl<I, D> SerLcd<I, D>
where
    I: LcdInterface,
    D: DelayNs,
{
    /// Create a new driver and initialize the display
    ///
    /// Sends the default display control and entry mode and clears the
    /// screen.
    pub fn new(interface: I, delay: D) -> Result<Self, Error<I>> {
        let mut lcd = Self {
            interface,
            delay,
            display_control: DisplayControl::default(),
            entry_mode: EntryMode::default(),
        };
        lcd.begin()?;
        Ok(lcd)
    }

    /// Create a new driver, initialize the display and apply `config`
    pub fn with_config(interface: I, delay: D, config: &Config) -> Result<Self, Error<I>> {
        let mut lcd = Self::new(interface, delay)?;
        lcd.apply_config(config)?;
        Ok(lcd)
    }

    /// Push every setting present in `config` to the display
    ///
    /// Applied in the order dimensions, contrast, system messages, splash
    /// screen. Unset fields are skipped.
    pub fn apply_config(&mut self, config: &Config) -> DisplayResult<I> {
        log::debug!("applying config {:?}", config);
        if let Some(dims) = config.dimensions {
            self.set_dimensions(dims)?;
        }
        if let Some(contrast) = config.contrast {
            self.set_contrast(contrast)?;
        }
        if let Some(enable) = config.system_messages {
            self.system_messages(enable)?;
        }
        if let Some(enable) = config.splash_screen {
            self.splash_screen(enable)?;
        }
        Ok(())
    }

    /// Initialize the display with the current flag state
    fn begin(&mut self) -> DisplayResult<I> {
        log::debug!(
            "initializing display (control {:#04x}, entry {:#04x})",
            self.display_control.bits(),
            self.entry_mode.bits()
        );
        let init = [
            SPECIAL_COMMAND,
            DISPLAY_CONTROL | self.display_control.bits(),
            SPECIAL_COMMAND,
            ENTRY_MODE_SET | self.entry_mode.bits(),
            SETTING_COMMAND,
            CLEAR,
        ];
        self.send(&init)?;
        self.settle(SPECIAL_SETTLE_MS);
        Ok(())
    }

    /// Get the display control shadow
    pub fn display_control(&self) -> DisplayControl {
        self.display_control
    }

    /// Get the entry mode shadow
    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// Get a reference to the interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Get a mutable reference to the interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the interface and delay
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    /// Send a setting command
    ///
    /// Frames `code` as `[0x7C, code]`. See [`crate::command`] for codes.
    pub fn command(&mut self, code: u8) -> DisplayResult<I> {
        self.send(&[SETTING_COMMAND, code])?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Clear the display and home the cursor
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.command(CLEAR)
    }

    /// Move the cursor home
    pub fn home(&mut self) -> DisplayResult<I> {
        self.special_command(RETURN_HOME, 1)
    }

    /// Write the textual form of `value` at the cursor
    ///
    /// The UTF-8 bytes are sent verbatim, with no framing and no settle
    /// time. Text up to [`TEXT_CHUNK_SIZE`](crate::text::TEXT_CHUNK_SIZE)
    /// bytes goes out as one transmission.
    pub fn write<T>(&mut self, value: &T) -> DisplayResult<I>
    where
        T: core::fmt::Display + ?Sized,
    {
        let mut writer = ChunkWriter::new(&mut self.interface);
        let result = core::fmt::write(&mut writer, format_args!("{value}"));
        writer.finish(result).map_err(Error::Interface)
    }

    /// Send one raw byte, no encoding
    pub fn put_char(&mut self, byte: u8) -> DisplayResult<I> {
        self.send(&[byte])
    }

    /// Move the cursor to (`col`, `row`)
    ///
    /// `row` is clamped to 0..=3. `col` is not checked.
    pub fn set_cursor(&mut self, col: u8, row: i32) -> DisplayResult<I> {
        self.special_command(SET_DDRAM_ADDR | ddram_address(col, row), 1)
    }

    /// Define a custom 5x8 character
    ///
    /// `location` is masked to 0..=7; only the low 5 bits of each row are
    /// used.
    pub fn create_character(&mut self, location: i32, charmap: &[u8; 8]) -> DisplayResult<I> {
        let mut frame = [0u8; 10];
        frame[0] = SETTING_COMMAND;
        frame[1] = CREATE_CHAR_BASE + mask_location(location);
        for (dst, row) in frame[2..].iter_mut().zip(charmap) {
            *dst = row & 0x1F;
        }
        self.send(&frame)?;
        self.settle(SPECIAL_SETTLE_MS);
        Ok(())
    }

    /// Print the custom character at `location` (masked to 0..=7)
    pub fn write_character(&mut self, location: i32) -> DisplayResult<I> {
        self.command(WRITE_CHAR_BASE + mask_location(location))
    }

    /// Set the backlight from a `0xRRGGBB` value
    pub fn set_backlight(&mut self, rgb: u32) -> DisplayResult<I> {
        self.set_backlight_color(Rgb::from_u24(rgb))
    }

    /// Set the backlight from channel values
    pub fn set_backlight_rgb(&mut self, r: u8, g: u8, b: u8) -> DisplayResult<I> {
        self.set_backlight_color(Rgb::new(r, g, b))
    }

    /// Set the backlight with per-channel commands
    ///
    /// The display is switched off around the three channel commands so the
    /// firmware's confirmation text is not shown, and is left on afterwards.
    pub fn set_backlight_color(&mut self, color: Rgb) -> DisplayResult<I> {
        let [r, g, b] = color.backlight_levels();

        self.display_control.set(DISPLAY_ON, false);
        let off = DISPLAY_CONTROL | self.display_control.bits();
        self.display_control.set(DISPLAY_ON, true);
        let on = DISPLAY_CONTROL | self.display_control.bits();

        let frame = [
            SPECIAL_COMMAND,
            off,
            SETTING_COMMAND,
            r,
            SETTING_COMMAND,
            g,
            SETTING_COMMAND,
            b,
            SPECIAL_COMMAND,
            on,
        ];
        self.send(&frame)?;
        self.settle(SPECIAL_SETTLE_MS);
        Ok(())
    }

    /// Set the backlight from a `0xRRGGBB` value in one command
    pub fn set_fast_backlight(&mut self, rgb: u32) -> DisplayResult<I> {
        self.set_fast_backlight_color(Rgb::from_u24(rgb))
    }

    /// Set the backlight from channel values in one command
    pub fn set_fast_backlight_rgb(&mut self, r: u8, g: u8, b: u8) -> DisplayResult<I> {
        self.set_fast_backlight_color(Rgb::new(r, g, b))
    }

    /// Set the backlight in one command
    ///
    /// Leaves the display control flags alone.
    pub fn set_fast_backlight_color(&mut self, color: Rgb) -> DisplayResult<I> {
        self.send(&[SETTING_COMMAND, SET_RGB, color.r, color.g, color.b])?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Turn the display on or off
    pub fn display(&mut self, on: bool) -> DisplayResult<I> {
        self.display_control.set(DISPLAY_ON, on);
        self.send_display_control()
    }

    /// Turn the underline cursor on or off
    pub fn cursor(&mut self, on: bool) -> DisplayResult<I> {
        self.display_control.set(CURSOR_ON, on);
        self.send_display_control()
    }

    /// Turn the blinking cursor on or off
    pub fn blink(&mut self, on: bool) -> DisplayResult<I> {
        self.display_control.set(BLINK_ON, on);
        self.send_display_control()
    }

    /// Enable or disable system messages like `Contrast: 5`
    pub fn system_messages(&mut self, enable: bool) -> DisplayResult<I> {
        self.command(if enable {
            ENABLE_SYSTEM_MESSAGES
        } else {
            DISABLE_SYSTEM_MESSAGES
        })?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Turn autoscroll on or off
    pub fn autoscroll(&mut self, enable: bool) -> DisplayResult<I> {
        self.entry_mode.set(ENTRY_SHIFT_INCREMENT, enable);
        self.send_entry_mode()?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Set the contrast
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.send(&[SETTING_COMMAND, CONTRAST, value])?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Change the display's I2C address
    ///
    /// The command goes to the current address, then the interface is
    /// rebound so later writes reach the display. The change is persistent;
    /// a hardware reset restores 0x72.
    pub fn set_i2c_address(&mut self, address: u8) -> DisplayResult<I> {
        log::debug!("changing i2c address to {:#04x}", address);
        self.send(&[SETTING_COMMAND, ADDRESS, address])?;
        self.interface.rebind(address).map_err(Error::Interface)?;
        self.settle(SPECIAL_SETTLE_MS);
        Ok(())
    }

    /// Scroll the display one position left
    pub fn scroll_display_left(&mut self) -> DisplayResult<I> {
        self.scroll_display_left_by(1)
    }

    /// Scroll the display `count` positions left
    pub fn scroll_display_left_by(&mut self, count: u8) -> DisplayResult<I> {
        self.special_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_LEFT, count)
    }

    /// Scroll the display one position right
    pub fn scroll_display_right(&mut self) -> DisplayResult<I> {
        self.scroll_display_right_by(1)
    }

    /// Scroll the display `count` positions right
    pub fn scroll_display_right_by(&mut self, count: u8) -> DisplayResult<I> {
        self.special_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_RIGHT, count)
    }

    /// Move the cursor one position left
    pub fn move_cursor_left(&mut self) -> DisplayResult<I> {
        self.move_cursor_left_by(1)
    }

    /// Move the cursor `count` positions left
    pub fn move_cursor_left_by(&mut self, count: u8) -> DisplayResult<I> {
        self.special_command(CURSOR_SHIFT | CURSOR_MOVE | MOVE_LEFT, count)
    }

    /// Move the cursor one position right
    pub fn move_cursor_right(&mut self) -> DisplayResult<I> {
        self.move_cursor_right_by(1)
    }

    /// Move the cursor `count` positions right
    pub fn move_cursor_right_by(&mut self, count: u8) -> DisplayResult<I> {
        self.special_command(CURSOR_SHIFT | CURSOR_MOVE | MOVE_RIGHT, count)
    }

    /// Enable or disable the power-on splash screen
    pub fn splash_screen(&mut self, enable: bool) -> DisplayResult<I> {
        self.command(if enable { ENABLE_SPLASH } else { DISABLE_SPLASH })?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Save the current display contents as the splash screen
    pub fn save_splash_screen(&mut self) -> DisplayResult<I> {
        self.command(SAVE_SPLASH)?;
        self.settle(SETTING_SETTLE_MS);
        Ok(())
    }

    /// Restore the factory splash screen
    pub fn default_splash_screen(&mut self) -> DisplayResult<I> {
        self.clear()?;
        self.put_char(DEFAULT_SPLASH_CHAR)?;
        self.settle(SPLASH_RESET_SETTLE_MS);
        self.save_splash_screen()
    }

    /// Make text flow left to right
    pub fn left_to_right(&mut self) -> DisplayResult<I> {
        self.entry_mode.set(ENTRY_LEFT, true);
        self.send_entry_mode()
    }

    /// Make text flow right to left
    pub fn right_to_left(&mut self) -> DisplayResult<I> {
        self.entry_mode.set(ENTRY_LEFT, false);
        self.send_entry_mode()
    }

    /// Show the firmware version on the display
    pub fn show_version(&mut self) -> DisplayResult<I> {
        self.command(SHOW_VERSION)
    }

    /// Software reset of the display
    pub fn reset(&mut self) -> DisplayResult<I> {
        self.command(RESET)
    }

    /// Tell the firmware the panel geometry
    ///
    /// Sends the width command, then the lines command.
    pub fn set_dimensions(&mut self, dims: Dimensions) -> DisplayResult<I> {
        log::debug!(
            "setting geometry {}x{} ({} cells)",
            dims.columns,
            dims.rows,
            dims.cells()
        );
        self.command(if dims.columns == 16 { WIDTH_16 } else { WIDTH_20 })?;
        self.command(match dims.rows {
            1 => LINES_1,
            2 => LINES_2,
            _ => LINES_4,
        })
    }

    /// Change the UART baud rate
    ///
    /// Takes effect immediately; a UART host must reopen its port at the new
    /// rate.
    pub fn set_baud_rate(&mut self, rate: BaudRate) -> DisplayResult<I> {
        log::debug!("changing baud rate to {}", rate.bps());
        self.command(rate.code())
    }

    fn send_display_control(&mut self) -> DisplayResult<I> {
        self.special_command(DISPLAY_CONTROL | self.display_control.bits(), 1)
    }

    fn send_entry_mode(&mut self) -> DisplayResult<I> {
        self.special_command(ENTRY_MODE_SET | self.entry_mode.bits(), 1)
    }

    /// Send `[0xFE]` followed by `count` copies of `code`
    fn special_command(&mut self, code: u8, count: u8) -> DisplayResult<I> {
        let mut frame = [code; 1 + u8::MAX as usize];
        frame[0] = SPECIAL_COMMAND;
        self.send(&frame[..=count as usize])?;
        self.settle(SPECIAL_SETTLE_MS);
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> DisplayResult<I> {
        log::trace!("tx {} bytes: {:02x?}", data.len(), data);
        self.interface.write_bytes(data).map_err(|e| {
            log::warn!("write of {} bytes failed", data.len());
            Error::Interface(e)
        })
    }

    fn settle(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

fn mask_location(location: i32) -> u8 {
    (location & 0x07) as u8
}
