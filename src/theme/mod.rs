pub mod palette;

pub use palette::{Color, Palette, Role, Swatch};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Cool,
    Classic,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Cool, ThemeName::Classic];

    pub fn slug(self) -> &'static str {
        match self {
            ThemeName::Cool => "cool",
            ThemeName::Classic => "classic",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown theme `{0}` (expected one of: cool, classic)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cool" => Ok(ThemeName::Cool),
            "classic" => Ok(ThemeName::Classic),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// A palette plus the handful of strings that differ between page variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: Palette,
    pub title: &'static str,
    pub tagline: &'static str,
    pub currency_symbol: &'static str,
}

impl Theme {
    pub fn by_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Cool => Self {
                name,
                palette: Palette::cool(),
                title: "Executive Analytics Dashboard",
                tagline: "Fortune 500企業スタイルの包括的ビジネスインテリジェンスダッシュボード",
                currency_symbol: "¥",
            },
            ThemeName::Classic => Self {
                name,
                palette: Palette::classic(),
                title: "Executive Analytics Dashboard",
                tagline: "Horizon UI スタイルのビジネスインテリジェンスダッシュボード",
                currency_symbol: "¥",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for name in ThemeName::ALL {
            assert_eq!(name.to_string().parse::<ThemeName>(), Ok(name));
        }
        assert_eq!(" Classic ".parse::<ThemeName>(), Ok(ThemeName::Classic));
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "neon".parse::<ThemeName>().unwrap_err();
        assert_eq!(err, UnknownTheme("neon".into()));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn variants_differ_only_in_palette_and_copy() {
        let cool = Theme::by_name(ThemeName::Cool);
        let classic = Theme::by_name(ThemeName::Classic);
        assert_ne!(cool.palette, classic.palette);
        assert_eq!(cool.title, classic.title);
    }
}
