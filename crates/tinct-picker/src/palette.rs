//! Swatch tables for the palette section.

use tinct_core::Hex;

pub const THEME_ROWS: usize = 6;
pub const THEME_COLUMNS: usize = 10;

const fn row(v: [u32; THEME_COLUMNS]) -> [Hex; THEME_COLUMNS] {
    let mut out = [Hex::BLACK; THEME_COLUMNS];
    let mut i = 0;
    while i < THEME_COLUMNS {
        out[i] = Hex::from_u32(v[i]);
        i += 1;
    }
    out
}

/// Base colors in the first row, lighter tints below, darker shades in the last two.
pub const THEME_COLORS: [[Hex; THEME_COLUMNS]; THEME_ROWS] = [
    row([
        0xffffff, 0x000000, 0xf2f2f2, 0xc00000, 0x002060, 0x004b7e, 0x0070c0, 0x00b0f0, 0x00b050,
        0x7f7f7f,
    ]),
    row([
        0xf2f2f2, 0x7f7f7f, 0xd9d9d9, 0xffbfbf, 0xd5e3ff, 0xb2dfff, 0xbfe4ff, 0xc9f0fe, 0xbcffda,
        0xe5e5e5,
    ]),
    row([
        0xd8d8d8, 0x595959, 0xb5b5b5, 0xfe7f7f, 0x97baff, 0x65c0fe, 0x7fcafe, 0x93e2fe, 0x79ffb6,
        0xcbcbcb,
    ]),
    row([
        0xbfbfbf, 0x3f3f3f, 0x797979, 0xff4040, 0x3075ff, 0x18a1ff, 0x40afff, 0x5dd3ff, 0x36fe91,
        0xb2b2b2,
    ]),
    row([
        0xa5a5a5, 0x262626, 0x3c3c3c, 0x900000, 0x0042c7, 0x00385e, 0x005390, 0x0083b3, 0x00833b,
        0x5f5f5f,
    ]),
    row([
        0x7f7f7f, 0x0c0c0c, 0x181818, 0x600000, 0x002d89, 0x00253f, 0x003760, 0x005878, 0x005827,
        0x3f3f3f,
    ]),
];

pub const STANDARD_COLORS: [Hex; 10] = row([
    0xc00000, 0xff0000, 0xffc000, 0xffff00, 0x92d050, 0x00b050, 0x00b0f0, 0x0070c0, 0x002060,
    0x7030a0,
]);

/// Theme grid in row-major order.
pub fn theme_swatches() -> impl Iterator<Item = Hex> {
    THEME_COLORS.iter().flatten().copied()
}

/// Theme swatch at `(row, column)`.
pub fn theme_color(row: usize, column: usize) -> Option<Hex> {
    THEME_COLORS.get(row)?.get(column).copied()
}
