//! RGBA color type, named palette and color parsing.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use densityshade::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(Color::parse("red"), Some(red));
/// assert!(semi_transparent_blue.a < 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a color name (case-insensitive) or a `#RRGGBB` / `#RRGGBBAA` hex string.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        match spec.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => name_to_color(spec),
        }
    }

    /// Returns the color as 8-bit RGBA channels, rounding each component.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    pub(crate) fn apply(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || !matches!(hex.len(), 6 | 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let mut color = Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?);
    if hex.len() == 8 {
        color.a = byte(6)? as f64 / 255.0;
    }
    Some(color)
}

/// Maps color name strings to Color values.
///
/// Accepts the predefined constants below plus `gray`/`grey` spellings. Used by
/// both the configuration file and the command line.
pub fn name_to_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "yellow" => YELLOW,
        "orange" => ORANGE,
        "pink" => PINK,
        "white" => WHITE,
        "black" => BLACK,
        "skyblue" => SKYBLUE,
        "lightblue" => LIGHTBLUE,
        "steelblue" => STEELBLUE,
        "navy" => NAVY,
        "darkgreen" => DARKGREEN,
        "salmon" => SALMON,
        "tomato" => TOMATO,
        "gold" => GOLD,
        "purple" => PURPLE,
        "gray" | "grey" => GRAY,
        "lightgray" | "lightgrey" => LIGHTGRAY,
        "transparent" => TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color, also the default plot background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color, the default curve color
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Default shade color (135, 206, 235)
pub const SKYBLUE: Color = Color::from_rgb8(135, 206, 235);

pub const LIGHTBLUE: Color = Color::from_rgb8(173, 216, 230);
pub const STEELBLUE: Color = Color::from_rgb8(70, 130, 180);
pub const NAVY: Color = Color::from_rgb8(0, 0, 128);
pub const DARKGREEN: Color = Color::from_rgb8(0, 100, 0);
pub const SALMON: Color = Color::from_rgb8(250, 128, 114);
pub const TOMATO: Color = Color::from_rgb8(255, 99, 71);
pub const GOLD: Color = Color::from_rgb8(255, 215, 0);
pub const PURPLE: Color = Color::from_rgb8(160, 32, 240);
pub const GRAY: Color = Color::from_rgb8(190, 190, 190);
pub const LIGHTGRAY: Color = Color::from_rgb8(211, 211, 211);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse("SkyBlue"), Some(SKYBLUE));
        assert_eq!(Color::parse("grey"), Some(GRAY));
        assert_eq!(Color::parse(" white "), Some(WHITE));
        assert!(Color::parse("chartreuse").is_none());
    }

    #[test]
    fn hex_colors_parse_with_optional_alpha() {
        assert_eq!(Color::parse("#87CEEB"), Some(SKYBLUE));
        let translucent = Color::parse("#ff000080").expect("hex with alpha");
        assert_eq!(translucent.to_rgba8(), [255, 0, 0, 128]);
        assert!(Color::parse("#12345").is_none());
        assert!(Color::parse("#gg0000").is_none());
        assert!(Color::parse("#+f+f+f").is_none());
        assert!(Color::parse("#+f+f+f+f").is_none());
    }

    #[test]
    fn skyblue_round_trips_through_rgb8() {
        assert_eq!(SKYBLUE.to_rgba8(), [135, 206, 235, 255]);
    }
}
