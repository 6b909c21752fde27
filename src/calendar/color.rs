use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color '{0}'. Use #rgb or #rrggbb.")]
    InvalidHex(String),
}

/// A hex color as the calendar widget expects it (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        static HEX_COLOR_RE: OnceLock<Regex> = OnceLock::new();
        let pattern = HEX_COLOR_RE.get_or_init(|| {
            Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
                .expect("invalid hex color regex")
        });

        if pattern.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ColorError::InvalidHex(value.to_string()))
        }
    }

    /// Fallback for challenges whose category has no assigned color.
    pub fn neutral() -> Self {
        Self("#6b7280".to_string())
    }

    /// Color given to events created by clicking an empty date slot.
    pub fn new_event_default() -> Self {
        Self("#6366f1".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    WeightLoss,
    CleanEating,
    Exercise,
    Supplements,
    SkinCare,
    Focus,
    Reading,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::WeightLoss,
        Category::CleanEating,
        Category::Exercise,
        Category::Supplements,
        Category::SkinCare,
        Category::Focus,
        Category::Reading,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::WeightLoss => "เมนูลดน้ำหนัก",
            Category::CleanEating => "เมนูอาหารคลีน",
            Category::Exercise => "เมนูการออกกำลังกาย",
            Category::Supplements => "เมนูอาหารเสริม",
            Category::SkinCare => "เมนูดูแลผิว",
            Category::Focus => "เมนูเพิ่มสมาธิ",
            Category::Reading => "เมนูอ่านหนังสือ",
        }
    }

    fn hex(self) -> &'static str {
        match self {
            Category::WeightLoss => "#16a34a",
            Category::CleanEating => "#0ea5e9",
            Category::Exercise => "#ef4444",
            Category::Supplements => "#a78bfa",
            Category::SkinCare => "#f59e0b",
            Category::Focus => "#06b6d4",
            Category::Reading => "#6366f1",
        }
    }

    pub fn color(self) -> Color {
        Color(self.hex().to_string())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("Unknown category: {}", value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}
