// File: crates/chart-core/src/color.rs
// Summary: CSS color string parsing into Skia colors.
// Supports #rgb, #rgba, #rrggbb, #rrggbbaa, rgb(), rgba() and a few named colors.

use skia_safe as skia;

use crate::error::ChartError;

/// Parse a CSS color string such as `#7ecfff` or `rgba(126,207,255,0.2)`.
pub fn parse_css_color(input: &str) -> Result<skia::Color, ChartError> {
    let s = input.trim();
    let bad = || ChartError::InvalidColor(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(bad);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_args(args).ok_or_else(bad);
    }

    named(&lower).ok_or_else(bad)
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(skia::Color::from_argb(nibble(3)?, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<skia::Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |p: &str| -> Option<u8> {
        let v: f64 = p.parse().ok()?;
        if !(0.0..=255.0).contains(&v) { return None; }
        Some(v.round() as u8)
    };
    let (r, g, b) = match parts.as_slice() {
        [r, g, b] | [r, g, b, _] => (channel(r)?, channel(g)?, channel(b)?),
        _ => return None,
    };
    let a = match parts.get(3) {
        Some(p) => {
            let v: f64 = p.parse().ok()?;
            if !(0.0..=1.0).contains(&v) { return None; }
            (v * 255.0).round() as u8
        }
        None => 255,
    };
    Some(skia::Color::from_argb(a, r, g, b))
}

fn named(s: &str) -> Option<skia::Color> {
    let c = match s {
        "black" => skia::Color::from_argb(255, 0, 0, 0),
        "white" => skia::Color::from_argb(255, 255, 255, 255),
        "red" => skia::Color::from_argb(255, 255, 0, 0),
        "green" => skia::Color::from_argb(255, 0, 128, 0),
        "blue" => skia::Color::from_argb(255, 0, 0, 255),
        "gray" | "grey" => skia::Color::from_argb(255, 128, 128, 128),
        "transparent" => skia::Color::from_argb(0, 0, 0, 0),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb(c: skia::Color) -> (u8, u8, u8, u8) {
        (c.a(), c.r(), c.g(), c.b())
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(argb(parse_css_color("#7ecfff").unwrap()), (255, 0x7e, 0xcf, 0xff));
        assert_eq!(argb(parse_css_color("#eee").unwrap()), (255, 0xee, 0xee, 0xee));
        assert_eq!(argb(parse_css_color("#0f08").unwrap()), (0x88, 0x00, 0xff, 0x00));
        assert_eq!(argb(parse_css_color("#11223344").unwrap()), (0x44, 0x11, 0x22, 0x33));
    }

    #[test]
    fn parses_rgba_with_fractional_alpha() {
        let c = parse_css_color("rgba(126,207,255,0.2)").unwrap();
        assert_eq!(argb(c), (51, 126, 207, 255));
        let c = parse_css_color("rgb( 1, 2, 3 )").unwrap();
        assert_eq!(argb(c), (255, 1, 2, 3));
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(argb(parse_css_color("White").unwrap()), (255, 255, 255, 255));
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "#12", "#zzzzzz", "rgba(1,2)", "rgba(1,2,3,4)", "rgb(300,0,0)", "chartreuse-ish"] {
            assert!(matches!(parse_css_color(s), Err(ChartError::InvalidColor(_))), "{s}");
        }
    }
}
