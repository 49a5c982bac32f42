/// Renders a kilogram quantity the way a float literal is usually echoed
/// back: the shortest digits that read back to the same value, with `.0` on
/// whole numbers and scientific notation below `1e-4` or from `1e16` up
/// (`5.0`, `2.25`, `1e-05`, `1e+16`).
pub fn format_quantity(kg: f64) -> String {
    if kg.is_nan() {
        return "nan".to_string();
    }
    if kg.is_infinite() {
        return if kg > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{kg:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = format!("{kg}");
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// Canned action for a leftover keyword. Only some templates mention the
/// saved quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftoverTemplate {
    WithQuantity(&'static str),
    Fixed(&'static str),
}

impl LeftoverTemplate {
    pub fn render(&self, kg: f64) -> String {
        match self {
            LeftoverTemplate::WithQuantity(text) => {
                format!("{text} ({}kg saved)", format_quantity(kg))
            }
            LeftoverTemplate::Fixed(text) => text.to_string(),
        }
    }
}

/// Keyword table, scanned in order.
pub const LEFTOVER_ACTIONS: &[(&str, LeftoverTemplate)] = &[
    (
        "rice",
        LeftoverTemplate::WithQuantity(
            "Repurpose into Fried Rice or lemon rice for the next snack session.",
        ),
    ),
    (
        "dal",
        LeftoverTemplate::WithQuantity(
            "Dehydrate for 'Dal Paratha' stuffing or donate to local shelters immediately.",
        ),
    ),
    (
        "paneer",
        LeftoverTemplate::Fixed(
            "Refrigerate and use as a topping for sandwiches or rolls tomorrow morning.",
        ),
    ),
    (
        "poha",
        LeftoverTemplate::Fixed("Mix with fresh spices and vegetables for a quick cutlet base."),
    ),
];

pub const DONATION_THRESHOLD_KG: f64 = 10.0;

pub const PORTION_CONTROL_ADVICE: &str =
    "Optimize serving size: Use smaller portion scoops to reduce individual plate waste.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(5.0), "5.0");
        assert_eq!(format_quantity(15.0), "15.0");
        assert_eq!(format_quantity(2.25), "2.25");
        assert_eq!(format_quantity(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_quantity(0.0001), "0.0001");
        assert_eq!(format_quantity(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_quantity_switches_to_scientific_at_the_extremes() {
        assert_eq!(format_quantity(0.00001), "1e-05");
        assert_eq!(format_quantity(1.5e-7), "1.5e-07");
        assert_eq!(format_quantity(1e16), "1e+16");
        assert_eq!(format_quantity(2.5e120), "2.5e+120");
        assert_eq!(format_quantity(-0.0), "-0.0");
    }
}
