//! Block-letter banner font.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns in every letter and digit glyph.
pub const GLYPH_WIDTH: usize = 5;

type Glyph = [&'static str; GLYPH_HEIGHT];

/// Letters A-Z.
const LETTERS: [Glyph; 26] = [
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    [" ████", "█    ", "█    ", "█    ", " ████"],
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    ["█████", "█    ", "████ ", "█    ", "█████"],
    ["█████", "█    ", "████ ", "█    ", "█    "],
    [" ████", "█    ", "█  ██", "█   █", " ███ "],
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    ["█████", "  █  ", "  █  ", "  █  ", "█████"],
    ["█████", "   █ ", "   █ ", "█  █ ", " ██  "],
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    [" ████", "█    ", " ███ ", "    █", "████ "],
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Digits 0-9.
const DIGITS: [Glyph; 10] = [
    [" ███ ", "█  ██", "█ █ █", "██  █", " ███ "],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    [" ███ ", "█   █", "  ██ ", " █   ", "█████"],
    ["████ ", "    █", " ███ ", "    █", "████ "],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "████ ", "    █", "████ "],
    [" ███ ", "█    ", "████ ", "█   █", " ███ "],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    [" ███ ", "█   █", " ███ ", "█   █", " ███ "],
    [" ███ ", "█   █", " ████", "    █", " ███ "],
];

/// Word gap, narrower than a glyph.
const SPACE: Glyph = ["   "; GLYPH_HEIGHT];

/// Placeholder for characters the font does not cover.
const BLANK: Glyph = ["     "; GLYPH_HEIGHT];

/// Glyph for a character; letters are case-insensitive.
pub fn glyph(ch: char) -> Option<Glyph> {
    match ch.to_ascii_uppercase() {
        l @ 'A'..='Z' => Some(LETTERS[l as usize - 'A' as usize]),
        ' ' => Some(SPACE),
        d @ '0'..='9' => Some(DIGITS[d as usize - '0' as usize]),
        _ => None,
    }
}

/// Render `text` as block art, one string per row.
///
/// Glyphs are separated by a single column; characters without a glyph
/// render as blank space of glyph width.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<Glyph> = text.chars().map(|ch| glyph(ch).unwrap_or(BLANK)).collect();

    (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width of the banner for `text`, in terminal columns.
pub fn banner_width(text: &str) -> usize {
    build_banner(text)
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0)
}
