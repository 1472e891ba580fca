//! ARGB colour conversion
//!
//! Android colours put the alpha channel first (`#AARRGGBB` or `#ARGB`),
//! SVG wants `#RRGGBB` with a separate opacity attribute.

/// Opacity multiplier, as found in an attribute or supplied directly
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Opacity<'a> {
    Text(&'a str),
    Number(f64),
}

impl Default for Opacity<'_> {
    fn default() -> Self {
        Self::Number(1.0)
    }
}

impl<'a> From<&'a str> for Opacity<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for Opacity<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or_else(Self::default, Self::Text)
    }
}

impl From<f64> for Opacity<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Opacity<'_> {
    /// Numeric factor; anything that is not a finite number counts as 1
    pub fn factor(self) -> f64 {
        let value = match self {
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Number(n) => Some(n),
        };
        value.filter(|v| v.is_finite()).unwrap_or(1.0)
    }
}

/// RGB colour plus opacity
#[derive(Clone, Debug, PartialEq)]
pub struct ColorValue {
    pub rgb: Option<String>,
    pub alpha: f64,
}

impl ColorValue {
    /// Opacity attribute value, omitted for fully opaque colours
    pub fn opacity_attr(&self) -> Option<String> {
        if self.alpha == 1.0 {
            None
        } else {
            Some(self.alpha.to_string())
        }
    }
}

/// Split an ARGB colour into RGB and opacity.
///
/// Only the digit count is checked: values that are not 4 or 8 digits long
/// come back unchanged with the opacity factor alone, and non-hex RGB digits
/// are passed through. Alpha is read from the leading hex digits only
/// (`#cz000000` has alpha `0xc`); with no leading hex digit it counts as
/// fully opaque.
/// Four-digit colours produce three-digit shorthand RGB.
pub fn convert_color<'a>(argb: Option<&str>, opacity: impl Into<Opacity<'a>>) -> ColorValue {
    let factor = opacity.into().factor();

    let Some(argb) = argb else {
        return ColorValue {
            rgb: None,
            alpha: factor,
        };
    };

    let digits = argb.strip_prefix('#').unwrap_or(argb);
    let (alpha_hex, rgb) = match digits.chars().count() {
        4 => {
            let mut chars = digits.chars();
            let alpha: String = chars.next().into_iter().flat_map(|c| [c, c]).collect();
            (alpha, chars.as_str())
        }
        8 => {
            let split = digits.char_indices().nth(2).map_or(0, |(idx, _)| idx);
            let (alpha, rgb) = digits.split_at(split);
            (alpha.to_string(), rgb)
        }
        _ => {
            return ColorValue {
                rgb: Some(argb.to_string()),
                alpha: factor,
            };
        }
    };

    let digit_alpha = leading_hex(&alpha_hex).map_or(1.0, |a| f64::from(a) / 255.0);

    ColorValue {
        rgb: Some(format!("#{rgb}")),
        alpha: digit_alpha * factor,
    }
}

/// Value of the leading run of hex digits, `None` when there is none
fn leading_hex(digits: &str) -> Option<u8> {
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(digits.len(), |(idx, _)| idx);
    digits
        .get(..end)
        .filter(|hex| !hex.is_empty())
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
}
