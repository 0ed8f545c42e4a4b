//! Value normalization.
//!
//! Turns raw cell text such as `"236 kcal"`, `"19,5 g"` or `"0,3 %"` into a
//! canonical numeric string. This is the only place where numbers are
//! canonicalized: units, percent signs and stray words disappear because only
//! the first numeric run is kept.

use crate::field::Field;
use crate::patterns::{CALORIE_SEPARATORS, NUMBER_RUN};

/// Value written when nothing numeric can be read.
pub const MISSING_VALUE: &str = "0";

/// Normalize a raw value for `field`.
///
/// Energy values are cut at the first separator character so that a cell
/// holding both kcal and kJ keeps only the kcal figure. The result always
/// matches `^\d+(\.\d+)?$`; unreadable input yields `"0"`.
///
/// ```rust
/// use nutriscrape::{normalize, Field};
///
/// assert_eq!(normalize("236 kcal", Field::Calorias), "236");
/// assert_eq!(normalize("235 = 987", Field::Calorias), "235");
/// assert_eq!(normalize("19,5 g", Field::Proteinas), "19.5");
/// assert_eq!(normalize("abc", Field::Sodio), "0");
/// ```
#[must_use]
pub fn normalize(raw: &str, field: Field) -> String {
    let mut value = raw.trim();

    if field == Field::Calorias {
        value = value.split(CALORIE_SEPARATORS).next().unwrap_or_default();
    }

    NUMBER_RUN
        .find(value)
        .map_or_else(|| MISSING_VALUE.to_string(), |m| m.as_str().replace(',', "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(value: &str) -> bool {
        let mut parts = value.split('.');
        let int_ok = parts
            .next()
            .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
        let frac_ok = parts
            .next()
            .map_or(true, |p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
        int_ok && frac_ok && parts.next().is_none()
    }

    #[test]
    fn strips_units() {
        assert_eq!(normalize("236 kcal", Field::Calorias), "236");
        assert_eq!(normalize("19 g", Field::Carboidratos), "19");
        assert_eq!(normalize("500 mg", Field::Sodio), "500");
        assert_eq!(normalize("100g", Field::Porcao), "100");
    }

    #[test]
    fn converts_decimal_comma() {
        assert_eq!(normalize("19,5 g", Field::Proteinas), "19.5");
        assert_eq!(normalize(" 0,8 g ", Field::GordurasSaturadas), "0.8");
        assert_eq!(normalize("2.5g", Field::Fibras), "2.5");
    }

    #[test]
    fn calories_keep_text_before_separator() {
        assert_eq!(normalize("235 = 987", Field::Calorias), "235");
        assert_eq!(normalize("235/987", Field::Calorias), "235");
        assert_eq!(normalize("235 kcal | 987 kJ", Field::Calorias), "235");
        assert_eq!(normalize(r"235\987", Field::Calorias), "235");
        assert_eq!(normalize("12%", Field::Calorias), "12");
    }

    #[test]
    fn separators_do_not_apply_to_other_fields() {
        assert_eq!(normalize("= 4 g", Field::Acucares), "4");
        assert_eq!(normalize("= 4 kcal", Field::Calorias), "0");
    }

    #[test]
    fn unreadable_values_become_zero() {
        assert_eq!(normalize("abc", Field::Carboidratos), "0");
        assert_eq!(normalize("", Field::Calorias), "0");
        assert_eq!(normalize("   ", Field::Sodio), "0");
        assert_eq!(normalize("traços", Field::Fibras), "0");
        assert_eq!(normalize(",.", Field::Fibras), "0");
    }

    #[test]
    fn output_is_always_canonical() {
        let samples = [
            "236 kcal", "19,5 g", "235 = 987", "abc", "", "1.234,5", "0,3 %", "..5", "7.",
            "**12**", "½ g", "٣ g", "1e5", "-4 g", "Valor 12,0 g (4%)",
        ];
        for raw in samples {
            for field in Field::NUTRIENTS {
                let value = normalize(raw, field);
                assert!(is_canonical(&value), "{raw:?} as {field} gave {value:?}");
            }
        }
    }
}
