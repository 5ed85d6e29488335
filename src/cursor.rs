//! Cursor position utilities
//!
//! The HD44780 controller behind the SerLCD does not lay rows out
//! contiguously in display RAM. Rows 2 and 3 continue rows 0 and 1 at an
//! offset of 20, so a position is converted through a fixed start-address
//! table.
//!
//! | Row | DDRAM start |
//! |-----|-------------|
//! | 0   | 0x00        |
//! | 1   | 0x40        |
//! | 2   | 0x14        |
//! | 3   | 0x54        |
//!
//! ## Example
//!
//! ```
//! use serlcd::cursor::ddram_address;
//!
//! assert_eq!(ddram_address(0, 0), 0x00);
//! assert_eq!(ddram_address(5, 1), 0x45);
//!
//! // Rows outside the grid are clamped
//! assert_eq!(ddram_address(0, -1), 0x00);
//! assert_eq!(ddram_address(0, 9), 0x54);
//! ```

use crate::error::MAX_ROWS;

/// DDRAM start address of each row
pub const ROW_OFFSETS: [u8; MAX_ROWS as usize] = [0x00, 0x40, 0x14, 0x54];

/// Clamp a row index into `0..MAX_ROWS`
pub fn clamp_row(row: i32) -> usize {
    row.clamp(0, i32::from(MAX_ROWS) - 1) as usize
}

/// DDRAM address of a (column, row) position
///
/// The row is clamped into the grid. The column is not checked: a column past
/// the end of the row addresses whatever RAM follows it, and the sum wraps
/// within a byte.
pub fn ddram_address(col: u8, row: i32) -> u8 {
    col.wrapping_add(ROW_OFFSETS[clamp_row(row)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_row() {
        let rows = [-5, 0, 1, 2, 3, 10];
        let clamped = rows.map(clamp_row);
        assert_eq!(clamped, [0, 0, 1, 2, 3, 3]);
    }

    #[test]
    fn test_clamp_row_extremes() {
        assert_eq!(clamp_row(i32::MIN), 0);
        assert_eq!(clamp_row(i32::MAX), 3);
    }

    #[test]
    fn test_ddram_address_rows() {
        assert_eq!(ddram_address(3, 0), 0x03);
        assert_eq!(ddram_address(3, 1), 0x43);
        assert_eq!(ddram_address(3, 2), 0x17);
        assert_eq!(ddram_address(3, 3), 0x57);
    }

    #[test]
    fn test_ddram_address_column_unchecked() {
        // Column 30 on row 0 lands past the 20-column row
        assert_eq!(ddram_address(30, 0), 30);
        // Wraps within a byte
        assert_eq!(ddram_address(0xF0, 3), 0x44);
    }
}
