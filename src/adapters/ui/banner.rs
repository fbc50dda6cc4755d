//! Welcome banner: "ADVISOR" in figlet, shaded left to right from navy to gold.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

/// Campus navy (#1d3b66).
const NAVY: [u8; 3] = [0x1d, 0x3b, 0x66];
/// Accent gold (#f5a623).
const GOLD: [u8; 3] = [0xf5, 0xa6, 0x23];

/// Colour of `column` in a banner `width` columns wide.
fn column_color(column: usize, width: usize) -> Color {
    let span = width.saturating_sub(1).max(1) as f32;
    let t = (column as f32 / span).min(1.0);
    let mut rgb = [0u8; 3];
    for (channel, (from, to)) in rgb.iter_mut().zip(NAVY.iter().zip(GOLD)) {
        *channel = (f32::from(*from) + (f32::from(to) - f32::from(*from)) * t).round() as u8;
    }
    let [r, g, b] = rgb;
    Color::Rgb { r, g, b }
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert("ADVISOR")?;
    Some(figure.to_string())
}

fn write_banner(out: &mut impl Write, art: &str) -> io::Result<()> {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in art.lines().filter(|l| !l.trim().is_empty()) {
        for (column, ch) in line.chars().enumerate() {
            if ch != ' ' {
                out.queue(SetForegroundColor(column_color(column, width)))?;
            }
            out.queue(Print(ch))?;
        }
        out.queue(ResetColor)?.queue(Print("\r\n"))?;
    }

    let [r, g, b] = GOLD;
    out.queue(SetForegroundColor(Color::Rgb { r, g, b }))?
        .queue(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))))?
        .queue(Print("Academic & Elective Advisor, year 4 semester 1\r\n"))?
        .queue(ResetColor)?;
    out.flush()
}

/// Prints the banner, then version and subtitle. Falls back to a plain title if the font fails.
pub fn print_welcome() {
    let art = banner_art().unwrap_or_else(|| "ADVISOR\n".to_string());
    let _ = write_banner(&mut stdout(), &art);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_color_spans_navy_to_gold() {
        let [r, g, b] = NAVY;
        assert_eq!(column_color(0, 40), Color::Rgb { r, g, b });
        let [r, g, b] = GOLD;
        assert_eq!(column_color(39, 40), Color::Rgb { r, g, b });
        assert_eq!(column_color(0, 1), Color::Rgb { r: 0x1d, g: 0x3b, b: 0x66 });
    }

    #[test]
    fn test_banner_keeps_art_and_subtitle() {
        let mut buf = Vec::new();
        write_banner(&mut buf, "AB\nC\n").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('A') && text.contains('C'));
        assert!(text.contains("Academic & Elective Advisor"));
    }
}
