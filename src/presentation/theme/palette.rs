use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Approximate RGB value of a terminal color, using the xterm defaults for named colors.
#[must_use]
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => indexed_to_rgb(i),
        named => NAMED
            .iter()
            .find(|(c, _)| *c == named)
            .map_or((255, 255, 255), |(_, rgb)| *rgb),
    }
}

/// Keeps the hue of `color` but forces lightness and saturation.
#[must_use]
pub fn tint(color: Color, lightness: f32, saturation: f32) -> Color {
    let (r, g, b) = to_rgb(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb: Rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

const NAMED: [(Color, (u8, u8, u8)); 16] = [
    (Color::Black, (0, 0, 0)),
    (Color::Red, (170, 0, 0)),
    (Color::Green, (0, 170, 0)),
    (Color::Yellow, (170, 85, 0)),
    (Color::Blue, (0, 0, 170)),
    (Color::Magenta, (170, 0, 170)),
    (Color::Cyan, (0, 170, 170)),
    (Color::Gray, (170, 170, 170)),
    (Color::DarkGray, (85, 85, 85)),
    (Color::LightRed, (255, 85, 85)),
    (Color::LightGreen, (85, 255, 85)),
    (Color::LightYellow, (255, 255, 85)),
    (Color::LightBlue, (85, 85, 255)),
    (Color::LightMagenta, (255, 85, 255)),
    (Color::LightCyan, (85, 255, 255)),
    (Color::White, (255, 255, 255)),
];

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => NAMED[usize::from(i)].1,
        16..=231 => {
            let cube = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
