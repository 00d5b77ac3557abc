/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Percentage color:
/// \>=80 → green
/// \>=40 → yellow
/// \>0 → red
/// 0 → grey
pub fn color_for_percentage(value: u32) -> &'static str {
    match value {
        80.. => GREEN,
        40..=79 => YELLOW,
        1..=39 => RED,
        0 => GREY,
    }
}

/// Heatmap cell for an intensity level (0..=4).
pub fn heat_cell(level: u8) -> String {
    let code = match level {
        0 => "\x1b[90m",
        1 => "\x1b[38;5;223m",
        2 => "\x1b[38;5;216m",
        3 => "\x1b[38;5;208m",
        _ => "\x1b[38;5;166m",
    };
    let glyph = match level {
        0 => '·',
        1 => '░',
        2 => '▒',
        3 => '▓',
        _ => '█',
    };
    format!("{code}{glyph}{glyph}{RESET}")
}

/// Swatch in the given `#rrggbb` colour (truecolor terminals), falling back
/// to plain text when the value cannot be parsed.
pub fn swatch(hex: &str) -> String {
    let rgb = hex.strip_prefix('#').filter(|h| h.len() == 6).and_then(|h| {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        Some((r, g, b))
    });

    match rgb {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m■{RESET} {hex}"),
        None => hex.to_string(),
    }
}
