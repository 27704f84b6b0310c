//! Merry's color palette.
//!
//! SemoR brand colors plus a Siamese cat palette. Every role the composer
//! can ask for is a [`ColorRole`] variant backed by a struct field, so a
//! lookup by role can never miss.

use crate::color::{is_rrggbb, parse_hex, ColorError};
use image::Rgba;
use serde::{Deserialize, Serialize};

/// Semantic color roles, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Cream beige body
    BodyBase,
    /// Dark brown points (face, ears, paws)
    PointsDark,
    /// Ice blue eyes
    EyesBlue,
    /// Neon blue, the SemoR brand color
    EyesGlow,
    /// Pink nose
    NosePink,
    /// Brown mouth interior
    MouthBrown,
    /// Very dark brown outline
    OutlineDark,
    /// Darker cream for shadows
    ShadowCream,
}

impl ColorRole {
    /// All roles in palette order.
    pub const ALL: [ColorRole; 8] = [
        ColorRole::BodyBase,
        ColorRole::PointsDark,
        ColorRole::EyesBlue,
        ColorRole::EyesGlow,
        ColorRole::NosePink,
        ColorRole::MouthBrown,
        ColorRole::OutlineDark,
        ColorRole::ShadowCream,
    ];

    /// The role's key in the metadata document.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::BodyBase => "body_base",
            ColorRole::PointsDark => "points_dark",
            ColorRole::EyesBlue => "eyes_blue",
            ColorRole::EyesGlow => "eyes_glow",
            ColorRole::NosePink => "nose_pink",
            ColorRole::MouthBrown => "mouth_brown",
            ColorRole::OutlineDark => "outline_dark",
            ColorRole::ShadowCream => "shadow_cream",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorRole> {
        ColorRole::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hex color per role. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub body_base: String,
    pub points_dark: String,
    pub eyes_blue: String,
    pub eyes_glow: String,
    pub nose_pink: String,
    pub mouth_brown: String,
    pub outline_dark: String,
    pub shadow_cream: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::merry()
    }
}

impl Palette {
    /// Merry's palette.
    pub fn merry() -> Self {
        Self {
            body_base: "#F5E6D3".to_string(),
            points_dark: "#3C2415".to_string(),
            eyes_blue: "#87CEEB".to_string(),
            eyes_glow: "#00D4FF".to_string(),
            nose_pink: "#FF69B4".to_string(),
            mouth_brown: "#8B4513".to_string(),
            outline_dark: "#2F1B14".to_string(),
            shadow_cream: "#E5D6C3".to_string(),
        }
    }

    /// Hex string for a role.
    pub fn hex(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::BodyBase => &self.body_base,
            ColorRole::PointsDark => &self.points_dark,
            ColorRole::EyesBlue => &self.eyes_blue,
            ColorRole::EyesGlow => &self.eyes_glow,
            ColorRole::NosePink => &self.nose_pink,
            ColorRole::MouthBrown => &self.mouth_brown,
            ColorRole::OutlineDark => &self.outline_dark,
            ColorRole::ShadowCream => &self.shadow_cream,
        }
    }

    /// Hex string for a role name, or `None` if no such role exists.
    pub fn get(&self, name: &str) -> Option<&str> {
        ColorRole::from_name(name).map(|role| self.hex(role))
    }

    /// Opaque RGBA color for a role.
    pub fn rgba(&self, role: ColorRole) -> Result<Rgba<u8>, ColorError> {
        parse_hex(self.hex(role))
    }

    /// (role, hex) pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorRole, &str)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.hex(role)))
    }

    /// Check that every entry is a well-formed `#RRGGBB` code.
    ///
    /// Returns one message per malformed entry.
    pub fn validate(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, hex)| !is_rrggbb(hex))
            .map(|(role, hex)| format!("color_palette.{}: '{}' is not a #RRGGBB color", role, hex))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merry_palette_is_valid() {
        assert!(Palette::merry().validate().is_empty());
    }

    #[test]
    fn test_every_role_resolves() {
        let palette = Palette::merry();
        for role in ColorRole::ALL {
            assert!(palette.rgba(role).is_ok(), "role {} failed to parse", role);
            assert_eq!(palette.get(role.name()), Some(palette.hex(role)));
        }
    }

    #[test]
    fn test_get_unknown_role() {
        assert_eq!(Palette::merry().get("tail_stripes"), None);
    }

    #[test]
    fn test_brand_colors() {
        let palette = Palette::merry();
        assert_eq!(palette.get("eyes_blue"), Some("#87CEEB"));
        assert_eq!(palette.get("eyes_glow"), Some("#00D4FF"));
        assert_eq!(palette.rgba(ColorRole::EyesGlow), Ok(Rgba([0, 212, 255, 255])));
    }

    #[test]
    fn test_validate_reports_bad_entries() {
        let mut palette = Palette::merry();
        palette.nose_pink = "pink".to_string();
        palette.outline_dark = "#2F1B1480".to_string();
        let errors = palette.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("nose_pink"));
        assert!(errors[1].contains("outline_dark"));
    }

    #[test]
    fn test_serializes_in_role_order() {
        let json = serde_json::to_string(&Palette::merry()).unwrap();
        let body = json.find("body_base").unwrap();
        let glow = json.find("eyes_glow").unwrap();
        let shadow = json.find("shadow_cream").unwrap();
        assert!(body < glow && glow < shadow);
    }
}
