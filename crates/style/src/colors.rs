/// An RGBA colour parsed from a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0x00, g: 0x00, b: 0x00, a: 0xff };
    pub const WHITE: Self = Self { r: 0xff, g: 0xff, b: 0xff, a: 0xff };

    /// Parse a CSS-style hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
    ///
    /// Named colours (`"black"`, `"yellow"`) and functional notation are not
    /// understood and yield `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        // `#abc` is shorthand for `#aabbcc`.
        let nibble = |s: &str| -> Option<u8> { byte(s).map(|n| n * 0x11) };

        match hex.len() {
            3 => Some(Self {
                r: nibble(&hex[0..1])?,
                g: nibble(&hex[1..2])?,
                b: nibble(&hex[2..3])?,
                a: 0xff,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 0xff,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Nearest index in the ANSI 256-colour palette. Alpha is ignored.
    #[must_use]
    pub fn to_ansi256(self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((u16::from(r) - 8) * 24 / 247) as u8
            }
        } else {
            let red   = (u16::from(r) * 5 / 255) as u8;
            let green = (u16::from(g) * 5 / 255) as u8;
            let blue  = (u16::from(b) * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    /// Convert to a [`console::Color`] for terminal output.
    #[inline]
    pub fn to_console(self) -> console::Color {
        console::Color::Color256(self.to_ansi256())
    }
}
