//! Number and text helpers shared by the data and rendering layers.

/// Round to a fixed number of decimal places, halves to even (`0.125` -> `0.12`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Render a float the way a user typed it: whole numbers keep one decimal
/// (`25.0`), everything else uses the shortest exact form (`20.5`).
pub fn display_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Collapse runs of whitespace and capitalize each word.
///
/// A letter is upper-cased when it follows a non-letter, so `o'neal`
/// becomes `O'Neal` and `smith-jones` becomes `Smith-Jones`.
pub fn title_case(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut prev_is_letter = false;
    for c in collapsed.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
