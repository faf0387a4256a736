use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::UnknownVariant;

const COLOR_SCHEME_MAX_LENGTH: usize = 32;

static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(UnknownVariant {
                expected: "light, dark, system",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Color scheme cannot be empty")]
    EmptyColorScheme,
    #[error("Color scheme must be at most {} characters", COLOR_SCHEME_MAX_LENGTH)]
    ColorSchemeTooLong,
    #[error("Color must be a hex value like #1a2b3c")]
    InvalidHexColor,
}

/// Named palette applied on top of the base theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorScheme(String);

impl ColorScheme {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self("default".to_owned())
    }
}

impl TryFrom<&str> for ColorScheme {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ThemeError::EmptyColorScheme);
        }
        if value.chars().count() > COLOR_SCHEME_MAX_LENGTH {
            return Err(ThemeError::ColorSchemeTooLong);
        }
        Ok(Self(value.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !HEX_COLOR_PATTERN.is_match(value) {
            return Err(ThemeError::InvalidHexColor);
        }
        Ok(Self(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_themes() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("system".parse::<Theme>(), Ok(Theme::System));
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn hex_colors_accept_short_and_long_forms() {
        assert!(HexColor::try_from("#fff").is_ok());
        assert!(HexColor::try_from("#1A2b3C").is_ok());
        assert_eq!(
            HexColor::try_from("blue"),
            Err(ThemeError::InvalidHexColor)
        );
        assert_eq!(
            HexColor::try_from("#12345"),
            Err(ThemeError::InvalidHexColor)
        );
    }

    #[test]
    fn color_scheme_rejects_blank_and_long_names() {
        assert_eq!(
            ColorScheme::try_from("  "),
            Err(ThemeError::EmptyColorScheme)
        );
        let long = "x".repeat(COLOR_SCHEME_MAX_LENGTH + 1);
        assert_eq!(
            ColorScheme::try_from(long.as_str()),
            Err(ThemeError::ColorSchemeTooLong)
        );
        assert_eq!(ColorScheme::try_from("blue").unwrap().as_str(), "blue");
    }
}
