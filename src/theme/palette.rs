use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `rgba(r, g, b, a)` with alpha clamped to [0, 1].
    pub fn rgba(&self, alpha: f32) -> String {
        let a = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Semantic colour slots a chart may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
    Purple,
    Pink,
    Orange,
    Teal,
    Indigo,
    Cyan,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Primary,
        Role::Secondary,
        Role::Success,
        Role::Error,
        Role::Warning,
        Role::Info,
        Role::Purple,
        Role::Pink,
        Role::Orange,
        Role::Teal,
        Role::Indigo,
        Role::Cyan,
    ];

    pub fn alpha(self, alpha: f32) -> Swatch {
        Swatch { role: self, alpha }
    }

    pub fn solid(self) -> Swatch {
        self.alpha(1.0)
    }
}

/// A palette role at a given opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swatch {
    pub role: Role,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub purple: Color,
    pub pink: Color,
    pub orange: Color,
    pub teal: Color,
    pub indigo: Color,
    pub cyan: Color,
    pub card_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub backdrop_from: Color,
    pub backdrop_to: Color,
}

impl Palette {
    /// Blue/cyan palette: every role stays in the cool hue range.
    pub const fn cool() -> Self {
        Self {
            primary: Color::rgb(0x25, 0x63, 0xEB),
            secondary: Color::rgb(0x0E, 0xA5, 0xE9),
            success: Color::rgb(0x08, 0x91, 0xB2),
            error: Color::rgb(0x1E, 0x40, 0xAF),
            warning: Color::rgb(0x02, 0x84, 0xC7),
            info: Color::rgb(0x06, 0xB6, 0xD4),
            purple: Color::rgb(0x63, 0x66, 0xF1),
            pink: Color::rgb(0x3B, 0x82, 0xF6),
            orange: Color::rgb(0x03, 0x69, 0xA1),
            teal: Color::rgb(0x0D, 0x94, 0x88),
            indigo: Color::rgb(0x4F, 0x46, 0xE5),
            cyan: Color::rgb(0x08, 0x91, 0xB2),
            card_bg: Color::rgb(0xFF, 0xFF, 0xFF),
            text_primary: Color::rgb(0x1E, 0x29, 0x3B),
            text_secondary: Color::rgb(0x64, 0x74, 0x8B),
            border: Color::rgb(0xE2, 0xE8, 0xF0),
            backdrop_from: Color::rgb(0x1E, 0x40, 0xAF),
            backdrop_to: Color::rgb(0x06, 0xB6, 0xD4),
        }
    }

    /// The multi-hue Horizon UI palette.
    pub const fn classic() -> Self {
        Self {
            primary: Color::rgb(0x43, 0x18, 0xFF),
            secondary: Color::rgb(0x6A, 0xD2, 0xFF),
            success: Color::rgb(0x05, 0xCD, 0x99),
            error: Color::rgb(0xEE, 0x5D, 0x50),
            warning: Color::rgb(0xFF, 0xB5, 0x47),
            info: Color::rgb(0x39, 0x65, 0xFF),
            purple: Color::rgb(0x75, 0x51, 0xFF),
            pink: Color::rgb(0xFF, 0x5B, 0x93),
            orange: Color::rgb(0xFF, 0x9F, 0x43),
            teal: Color::rgb(0x01, 0xB5, 0x74),
            indigo: Color::rgb(0x4C, 0x6F, 0xFF),
            cyan: Color::rgb(0x39, 0xB8, 0xFF),
            card_bg: Color::rgb(0xFF, 0xFF, 0xFF),
            text_primary: Color::rgb(0x1B, 0x25, 0x59),
            text_secondary: Color::rgb(0x70, 0x7E, 0xAE),
            border: Color::rgb(0xE9, 0xED, 0xF7),
            backdrop_from: Color::rgb(0x43, 0x18, 0xFF),
            backdrop_to: Color::rgb(0x86, 0x8C, 0xFF),
        }
    }

    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Success => self.success,
            Role::Error => self.error,
            Role::Warning => self.warning,
            Role::Info => self.info,
            Role::Purple => self.purple,
            Role::Pink => self.pink,
            Role::Orange => self.orange,
            Role::Teal => self.teal,
            Role::Indigo => self.indigo,
            Role::Cyan => self.cyan,
        }
    }

    /// CSS colour for a swatch; fully opaque swatches render as hex.
    pub fn paint(&self, swatch: Swatch) -> String {
        let c = self.color(swatch.role);
        if swatch.alpha >= 1.0 {
            c.to_string()
        } else {
            c.rgba(swatch.alpha)
        }
    }

    pub fn rgba(&self, role: Role, alpha: f32) -> String {
        self.color(role).rgba(alpha)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.into_iter().map(|r| (r, self.color(r)))
    }

    /// Brand gradient used by call-to-action surfaces.
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.primary, self.info
        )
    }

    pub fn backdrop(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.backdrop_from, self.backdrop_to
        )
    }
}

/// Serialises as a `role -> "#RRGGBB"` map.
impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::ALL.len()))?;
        for (role, color) in self.entries() {
            map.serialize_entry(&role, &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_and_rgba() {
        let c = Color::rgb(0x25, 0x63, 0xEB);
        assert_eq!(c.to_string(), "#2563EB");
        assert_eq!(c.rgba(0.2), "rgba(37, 99, 235, 0.2)");
        assert_eq!(c.rgba(3.0), "rgba(37, 99, 235, 1)");
    }

    #[test]
    fn gradient_is_built_from_primary_and_info() {
        let p = Palette::cool();
        assert_eq!(
            p.gradient(),
            "linear-gradient(135deg, #2563EB 0%, #06B6D4 100%)"
        );
    }

    #[test]
    fn every_role_has_an_entry() {
        for palette in [Palette::cool(), Palette::classic()] {
            let entries: Vec<_> = palette.entries().collect();
            assert_eq!(entries.len(), Role::ALL.len());
            for (role, color) in entries {
                assert_eq!(palette.color(role), color);
            }
        }
    }

    #[test]
    fn palette_serialises_by_role() {
        let json = serde_json::to_value(Palette::classic()).unwrap();
        assert_eq!(json["primary"], "#4318FF");
        assert_eq!(json.as_object().map(|m| m.len()), Some(12));
    }

    #[test]
    fn paint_uses_hex_when_opaque() {
        let p = Palette::cool();
        assert_eq!(p.paint(Role::Info.solid()), "#06B6D4");
        assert_eq!(p.paint(Role::Success.alpha(0.3)), "rgba(8, 145, 178, 0.3)");
    }
}
