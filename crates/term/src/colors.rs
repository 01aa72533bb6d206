//! Palette color names to terminal RGB.
//!
//! Accepts common CSS color keywords and `#rgb` / `#rrggbb` hex notation.

use crate::fb::Rgb;

/// Shown for names that do not resolve.
pub const FALLBACK: Rgb = Rgb::new(128, 128, 128);

const NAMED: &[(&str, Rgb)] = &[
    ("white", Rgb::new(245, 245, 245)),
    ("black", Rgb::new(20, 20, 20)),
    ("red", Rgb::new(220, 40, 40)),
    ("orange", Rgb::new(255, 140, 0)),
    ("yellow", Rgb::new(240, 220, 40)),
    ("green", Rgb::new(40, 180, 70)),
    ("lime", Rgb::new(120, 230, 60)),
    ("blue", Rgb::new(40, 90, 220)),
    ("navy", Rgb::new(20, 30, 120)),
    ("cyan", Rgb::new(60, 210, 220)),
    ("teal", Rgb::new(0, 128, 128)),
    ("violet", Rgb::new(180, 100, 230)),
    ("purple", Rgb::new(128, 40, 160)),
    ("magenta", Rgb::new(220, 60, 200)),
    ("pink", Rgb::new(255, 150, 190)),
    ("brown", Rgb::new(140, 80, 40)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
];

pub fn rgb_for_name(name: &str) -> Option<Rgb> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            // #abc == #aabbcc
            let d = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Rgb::new(d(0)?, d(1)?, d(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(rgb_for_name("Red"), rgb_for_name("red"));
        assert!(rgb_for_name("RED").is_some());
    }

    #[test]
    fn hex_forms() {
        assert_eq!(rgb_for_name("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(rgb_for_name("#0f0"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(rgb_for_name("#12345"), None);
        assert_eq!(rgb_for_name("#gggggg"), None);
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(rgb_for_name("chartreuse-ish"), None);
    }
}
