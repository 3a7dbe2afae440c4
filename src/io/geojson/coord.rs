//! Single coordinates: decoding from a JSON array and canonical ordinate formatting.

use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::Coord;

/// Fraction digits kept by default when encoding.
pub const DEFAULT_DECIMAL_PLACES: u32 = 8;

/// Widest fraction a float64 decimal formatter emits.
pub const MAX_DECIMAL_PLACES: u32 = 340;

/// Decode `[x, y]` or `[x, y, z]`.
///
/// Ordinates past the third are ignored. Numbers keep their full input precision.
pub fn decode_coord(node: &Value) -> Result<Coord> {
    let ordinates = match node.as_array() {
        Some(ordinates) if ordinates.len() >= 2 => ordinates,
        _ => return Err(GeoJsonError::InvalidCoordinateShape(node.to_string())),
    };

    let x = decode_ordinate(node, &ordinates[0])?;
    let y = decode_ordinate(node, &ordinates[1])?;
    let z = match ordinates.get(2) {
        Some(z) => Some(decode_ordinate(node, z)?),
        None => None,
    };
    Ok(Coord { x, y, z })
}

fn decode_ordinate(coord: &Value, ordinate: &Value) -> Result<f64> {
    ordinate.as_f64().ok_or_else(|| {
        GeoJsonError::InvalidCoordinateShape(format!("ordinate {ordinate} in {coord}"))
    })
}

/// Canonical decimal rendering of ordinates.
///
/// Values are rounded half-up (away from zero) at [`decimal_places`](Self::decimal_places)
/// fraction digits, working on the exact binary value of the float. Trailing zeros are
/// stripped, there is no exponent and no digit grouping, and `.` is always the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinateFormat {
    decimal_places: u32,
}

impl OrdinateFormat {
    pub fn try_new(decimal_places: u32) -> Result<Self> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(GeoJsonError::InvalidConfiguration(format!(
                "decimal places must be <= {MAX_DECIMAL_PLACES}, got {decimal_places}"
            )));
        }
        Ok(Self { decimal_places })
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Render `value`. Non-finite values are rendered as-is (`NaN`, `inf`, `-inf`).
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let places = self.decimal_places as usize;
        let exact = format!("{:.*}", exact_fraction_digits(value), value.abs());
        let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

        let mut frac_len = frac_part.len().min(places);
        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes().take(frac_len))
            .collect();

        let round_up = frac_part
            .as_bytes()
            .get(places)
            .is_some_and(|digit| *digit >= b'5');
        if round_up && !increment(&mut digits) {
            digits.insert(0, b'1');
        }

        while frac_len > 0 && digits.last() == Some(&b'0') {
            digits.pop();
            frac_len -= 1;
        }

        let int_len = digits.len() - frac_len;
        let mut out = String::with_capacity(digits.len() + 2);
        if value.is_sign_negative() {
            out.push('-');
        }
        out.extend(digits[..int_len].iter().map(|d| *d as char));
        if frac_len > 0 {
            out.push('.');
            out.extend(digits[int_len..].iter().map(|d| *d as char));
        }
        out
    }

    /// The float closest to [`format`](Self::format)`(value)`.
    ///
    /// This is lossy and only ever applied when encoding.
    pub fn canonicalize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        self.format(value).parse().unwrap_or(value)
    }
}

impl Default for OrdinateFormat {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Number of fraction digits in the exact decimal expansion of a finite float.
///
/// A float is `m * 2^e`; for negative `e` its expansion has exactly `-e` fraction digits
/// once trailing zero bits of `m` are folded into `e`.
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0. {
        return 0;
    }
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased_exponent - 1075)
    };
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    if exponent >= 0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Add one to an ASCII decimal digit string. Returns `false` on overflow (all nines).
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn format(places: u32, value: f64) -> String {
        OrdinateFormat::try_new(places).unwrap().format(value)
    }

    #[test]
    fn decode_2d_and_3d() {
        assert_eq!(decode_coord(&json!([1, 2])).unwrap(), Coord::new(1., 2.));
        assert_eq!(
            decode_coord(&json!([1.5, -2.25, 3])).unwrap(),
            Coord::new_3d(1.5, -2.25, 3.)
        );
    }

    #[test]
    fn decode_ignores_extra_ordinates() {
        assert_eq!(
            decode_coord(&json!([1, 2, 3, 4, "m"])).unwrap(),
            Coord::new_3d(1., 2., 3.)
        );
    }

    #[test]
    fn decode_keeps_full_precision() {
        let c = decode_coord(&json!([0.123456789012345, 1e-12])).unwrap();
        assert_eq!(c.x, 0.123456789012345);
        assert_eq!(c.y, 1e-12);
    }

    #[test]
    fn decode_rejects_short_arrays() {
        for node in [json!([1]), json!([]), json!(1), json!({"x": 1, "y": 2})] {
            assert!(matches!(
                decode_coord(&node),
                Err(GeoJsonError::InvalidCoordinateShape(_))
            ));
        }
    }

    #[test]
    fn decode_rejects_non_numeric() {
        for node in [json!(["1", 2]), json!([1, null]), json!([1, 2, "z"])] {
            assert!(matches!(
                decode_coord(&node),
                Err(GeoJsonError::InvalidCoordinateShape(_))
            ));
        }
    }

    #[test]
    fn one_third() {
        assert_eq!(format(8, 1. / 3.), "0.33333333");
        assert_eq!(format(8, 2. / 3.), "0.66666667");
    }

    #[test]
    fn half_up() {
        assert_eq!(format(2, 0.125), "0.13");
        assert_eq!(format(2, -0.125), "-0.13");
        assert_eq!(format(0, 2.5), "3");
        assert_eq!(format(0, -2.5), "-3");
    }

    #[test]
    fn rounds_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format(2, 1.005), "1");
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(format(8, 1.0), "1");
        assert_eq!(format(8, 1.1), "1.1");
        assert_eq!(format(8, 123.5), "123.5");
        assert_eq!(format(8, 0.0), "0");
    }

    #[test]
    fn carries_into_integer_part() {
        assert_eq!(format(8, 0.999999999), "1");
        assert_eq!(format(2, 99.999), "100");
    }

    #[test]
    fn no_exponent_or_grouping() {
        assert_eq!(format(8, 1e21), "1000000000000000000000");
        assert_eq!(format(8, 1e-9), "0");
        assert_eq!(format(10, 1e-9), "0.000000001");
    }

    #[test]
    fn negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(format(8, -1e-12), "-0");
    }

    #[test]
    fn canonicalize() {
        let f = OrdinateFormat::default();
        assert_eq!(f.canonicalize(1.234567891), 1.23456789);
        assert_eq!(f.canonicalize(2.345678912), 2.34567891);
        assert_eq!(f.canonicalize(-0.5), -0.5);
        assert!(f.canonicalize(f64::NAN).is_nan());
        assert_eq!(f.canonicalize(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn rejects_too_many_places() {
        assert!(OrdinateFormat::try_new(MAX_DECIMAL_PLACES).is_ok());
        assert!(matches!(
            OrdinateFormat::try_new(MAX_DECIMAL_PLACES + 1),
            Err(GeoJsonError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn subnormal_values() {
        assert_eq!(format(8, f64::MIN_POSITIVE / 4.), "0");
        let smallest = format(340, 5e-324);
        assert_eq!(smallest.len(), 342);
        assert!(smallest.ends_with("49406564584124654"));
    }
}
