// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-addressed chart palette.
//!
//! A category keeps its color across re-renders as long as its position in the caller's ordered
//! list is stable. There is no state: the mapping is `index % PALETTE.len()`.

use peniko::Color;

/// One palette color in each of the forms renderers need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Background styling token.
    pub fill: &'static str,
    /// Text styling token.
    pub text: &'static str,
    /// `#rrggbb` for vector fills.
    pub hex: &'static str,
    rgb: [u8; 3],
}

impl PaletteEntry {
    const fn new(fill: &'static str, text: &'static str, hex: &'static str, rgb: [u8; 3]) -> Self {
        Self {
            fill,
            text,
            hex,
            rgb,
        }
    }

    /// The entry as an opaque color.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_rgba8(r, g, b, 255)
    }
}

/// The eight chart colors, in assignment order.
pub const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry::new("bg-blue-500", "text-blue-500", "#3b82f6", [0x3b, 0x82, 0xf6]),
    PaletteEntry::new("bg-green-500", "text-green-500", "#10b981", [0x10, 0xb9, 0x81]),
    PaletteEntry::new("bg-purple-500", "text-purple-500", "#a855f7", [0xa8, 0x55, 0xf7]),
    PaletteEntry::new("bg-orange-500", "text-orange-500", "#f97316", [0xf9, 0x73, 0x16]),
    PaletteEntry::new("bg-pink-500", "text-pink-500", "#ec4899", [0xec, 0x48, 0x99]),
    PaletteEntry::new("bg-teal-500", "text-teal-500", "#14b8a6", [0x14, 0xb8, 0xa6]),
    PaletteEntry::new("bg-red-500", "text-red-500", "#ef4444", [0xef, 0x44, 0x44]),
    PaletteEntry::new("bg-yellow-500", "text-yellow-500", "#eab308", [0xea, 0xb3, 0x08]),
];

/// The palette entry for `index`, wrapping around.
pub fn palette_entry(index: usize) -> &'static PaletteEntry {
    &PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;

    use super::*;

    #[test]
    fn entries_wrap_around() {
        assert_eq!(palette_entry(0), palette_entry(8));
        assert_eq!(palette_entry(3).hex, "#f97316");
        assert_eq!(palette_entry(17).fill, "bg-green-500");
    }

    #[test]
    fn hex_and_color_agree() {
        for entry in &PALETTE {
            let rgba = entry.color().to_rgba8();
            let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            assert_eq!(hex, entry.hex, "{}", entry.fill);
            assert_eq!(rgba.a, 255, "opaque");
        }
    }

    #[test]
    fn tokens_share_the_color_name() {
        for entry in &PALETTE {
            let name = entry.fill.trim_start_matches("bg-");
            assert_eq!(entry.text.trim_start_matches("text-"), name);
        }
    }
}
