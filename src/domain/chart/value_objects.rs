use derive_more::Display;
use serde::Serialize;
use strum::AsRefStr;

/// Value Object - Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[display(fmt = "Pie")]
    #[strum(serialize = "pie")]
    Pie,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
}

/// Value Object - Color (8-bit channels, float alpha)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// `#rrggbb`, alpha dropped
    pub fn to_hex_string(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub const POSITIVE: Color = Color::rgb(40, 167, 69);
    pub const NEGATIVE: Color = Color::rgb(220, 53, 69);
    pub const PERFORMANCE_LINE: Color = Color::from_hex(0x4dc9f6);
}

/// Fill/border pair assigned to one bar or slice
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPair {
    pub fill: String,
    pub border: String,
}

impl ColorPair {
    /// Colors for a non-negative return
    pub fn positive() -> Self {
        Self {
            fill: Color::POSITIVE.with_alpha(0.7).to_css(),
            border: Color::POSITIVE.to_css(),
        }
    }

    /// Colors for a negative return
    pub fn negative() -> Self {
        Self {
            fill: Color::NEGATIVE.with_alpha(0.7).to_css(),
            border: Color::NEGATIVE.to_css(),
        }
    }

    /// `value >= 0` is the only branch; NaN lands on the negative side.
    pub fn for_return(value: f64) -> Self {
        if value >= 0.0 { Self::positive() } else { Self::negative() }
    }
}

/// Slice colors used when the caller supplies none
pub const PORTFOLIO_PALETTE: [Color; 15] = [
    Color::from_hex(0x4dc9f6),
    Color::from_hex(0xf67019),
    Color::from_hex(0xf53794),
    Color::from_hex(0x537bc4),
    Color::from_hex(0xacc236),
    Color::from_hex(0x166a8f),
    Color::from_hex(0x00a950),
    Color::from_hex(0x58595b),
    Color::from_hex(0x8549ba),
    Color::from_hex(0x8b0000),
    Color::from_hex(0x3cb44b),
    Color::from_hex(0xffe119),
    Color::from_hex(0x4363d8),
    Color::from_hex(0xf58231),
    Color::from_hex(0x911eb4),
];

/// Palette entry for slice `index`, cycling past the end
pub fn palette_color(index: usize) -> Color {
    PORTFOLIO_PALETTE[index % PORTFOLIO_PALETTE.len()]
}

/// Legend placement relative to the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Right,
}
