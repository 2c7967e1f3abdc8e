//! HSL color value parsing and formatting.
//!
//! Palette entries are CSS-style functional strings:
//!
//! - `hsl(206, 30%, 98.8%)`
//! - `hsla(0, 0%, 0%, 0.012)`
//!
//! Saturation and lightness are percentages and are scaled to `0..=1`; hue is
//! kept as written; alpha is already unit-scaled.
//!
//! # Example
//!
//! ```rust
//! use palette_gen::HslColor;
//!
//! let color = HslColor::parse("hsl(206, 30%, 98.8%)").unwrap();
//! assert_eq!(color.hue(), 206.0);
//! assert_eq!(color.saturation_text(), "0.300");
//! assert_eq!(color.lightness_text(), "0.988");
//! assert_eq!(color.alpha(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{MalformedColorError, MalformedReason};

/// Digits after the decimal point for saturation, lightness and alpha.
pub const UNIT_PRECISION: usize = 3;

/// A parsed HSL color.
///
/// Saturation, lightness and alpha are always within `0..=1`. Hue is passed
/// through unscaled and is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: Option<f64>,
}

impl HslColor {
    /// Parses `hsl(H, S%, L%)` or `hsla(H, S%, L%, A)`.
    ///
    /// Whitespace anywhere in the argument list is ignored, as is every `%`.
    /// The component count decides whether alpha is present, not the
    /// function name.
    pub fn parse(input: &str) -> Result<Self, MalformedColorError> {
        let malformed = |reason| MalformedColorError::new(input, reason);

        let args =
            strip_function(input).ok_or_else(|| malformed(MalformedReason::MissingFunction))?;
        let normalized: String = args
            .chars()
            .filter(|c| *c != '%' && !c.is_whitespace())
            .collect();
        let parts: Vec<&str> = normalized.split(',').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(malformed(MalformedReason::ComponentCount(parts.len())));
        }

        let hue = parse_number("hue", parts[0]).map_err(malformed)?;
        let saturation =
            percent_to_unit(parse_number("saturation", parts[1]).map_err(malformed)?);
        let lightness = percent_to_unit(parse_number("lightness", parts[2]).map_err(malformed)?);
        let alpha = match parts.get(3) {
            Some(text) => Some(parse_number("alpha", text).map_err(malformed)?),
            None => None,
        };

        check_unit("saturation", saturation).map_err(malformed)?;
        check_unit("lightness", lightness).map_err(malformed)?;
        if let Some(a) = alpha {
            check_unit("alpha", a).map_err(malformed)?;
        }

        Ok(Self {
            hue,
            saturation,
            lightness,
            alpha,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Hue as written, in its shortest round-trip form.
    pub fn hue_text(&self) -> String {
        format_hue(self.hue)
    }

    pub fn saturation_text(&self) -> String {
        format_unit(self.saturation)
    }

    pub fn lightness_text(&self) -> String {
        format_unit(self.lightness)
    }

    pub fn alpha_text(&self) -> Option<String> {
        self.alpha.map(format_unit)
    }

    /// Positional literal arguments: hue, saturation, lightness and, when
    /// present, alpha.
    pub fn components(&self) -> Vec<String> {
        let mut args = vec![self.hue_text(), self.saturation_text(), self.lightness_text()];
        args.extend(self.alpha_text());
        args
    }
}

impl FromStr for HslColor {
    type Err = MalformedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HslColor {
    type Error = MalformedColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Writes the color back in its input syntax, with percentages.
///
/// The output parses to an identical `HslColor`.
impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saturation = shift_decimal(self.saturation, 2);
        let lightness = shift_decimal(self.lightness, 2);
        match self.alpha {
            Some(alpha) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                self.hue_text(),
                saturation,
                lightness,
                alpha
            ),
            None => write!(f, "hsl({}, {}%, {}%)", self.hue_text(), saturation, lightness),
        }
    }
}

/// Returns the argument list of `hsl(...)` / `hsla(...)`.
fn strip_function(input: &str) -> Option<&str> {
    let s = input.trim();
    let inner = s.strip_suffix(')')?;
    ["hsla(", "hsl("].iter().find_map(|prefix| {
        let head = inner.get(..prefix.len())?;
        head.eq_ignore_ascii_case(prefix)
            .then_some(&inner[prefix.len()..])
    })
}

fn parse_number(component: &'static str, text: &str) -> Result<f64, MalformedReason> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MalformedReason::NotANumber {
            component,
            text: text.to_string(),
        })
}

fn check_unit(component: &'static str, value: f64) -> Result<(), MalformedReason> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MalformedReason::OutOfRange { component, value })
    }
}

/// Scales a percentage to `0..=1` by moving the decimal point, so `45.55`
/// becomes exactly the double nearest `0.4555`.
fn percent_to_unit(percent: f64) -> f64 {
    shift_decimal(percent, -2)
}

/// Multiplies `value` by `10^places` on its shortest decimal text.
///
/// Binary division would turn `45.55 / 100` into `0.45549999999999996` and
/// break half-away-from-zero rounding of the result.
fn shift_decimal(value: f64, places: isize) -> f64 {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() as isize + places;

    let shifted = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs()), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (head, tail) = digits.split_at(point as usize);
        format!("{}.{}", head, tail)
    };

    let magnitude = shifted
        .parse::<f64>()
        .unwrap_or(value.abs() * 10f64.powi(places as i32));
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Formats a hue in its shortest round-trip form (`0`, `206.5`).
pub fn format_hue(hue: f64) -> String {
    if hue == 0.0 {
        // Collapses -0.
        return "0".to_string();
    }
    hue.to_string()
}

/// Formats a unit value with [`UNIT_PRECISION`] decimals.
pub fn format_unit(value: f64) -> String {
    round_half_away(value, UNIT_PRECISION)
}

/// Rounds `value` to `places` decimals, half away from zero.
///
/// Rounding works on the shortest decimal representation of the float, so
/// `0.1235` becomes `0.124` even though its binary value is slightly below
/// the midpoint.
pub fn round_half_away(value: f64, places: usize) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    digits.extend((0..places).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(places).is_some_and(|d| *d >= b'5') {
        increment(&mut digits);
    }

    let split = digits.len() - places;
    let int_digits = std::str::from_utf8(&digits[..split]).unwrap_or("0");
    let frac_digits = std::str::from_utf8(&digits[split..]).unwrap_or("");
    let is_zero = digits.iter().all(|d| *d == b'0');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if places == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Adds one to an ASCII decimal digit string, carrying as needed.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
