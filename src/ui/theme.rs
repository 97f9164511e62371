use ratatui::style::Color;
use serde::Deserialize;

/// Base palette a theme is built from. Widget styles are derived in
/// `ui::colors`; this type only knows the four anchor colors and how to
/// read them from a TOML palette file.
#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    #[serde(default)]
    muted: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
        }
    }

    /// Resolve a theme by its settings name. Unknown names get the dark
    /// theme rather than an error.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Read a `[palette]` table of hex colors. A file without a palette
    /// table yields the dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            return Ok(Self {
                bg: parse_hex(&p.bg),
                fg: parse_hex(&p.fg),
                accent: parse_hex(&p.accent),
                muted: p.muted.as_deref().map(parse_hex).unwrap_or(Color::DarkGray),
            });
        }
        Ok(Self::dark())
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_table_parses_hex_colors() {
        let theme = Theme::from_toml(
            "[palette]\nbg = \"#000000\"\nfg = \"#ffffff\"\naccent = \"#00ffff\"\n",
        )
        .unwrap();
        assert_eq!(theme.bg, Color::Rgb(0, 0, 0));
        assert_eq!(theme.fg, Color::Rgb(255, 255, 255));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn bad_hex_falls_back_to_reset() {
        assert_eq!(parse_hex("zzzzzz"), Color::Reset);
        assert_eq!(parse_hex("#fff"), Color::Reset);
    }
}
