use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Hex color palette as stored in the profile file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) foreground: String,
    pub(crate) bright_foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) accent: String,
    pub(crate) bright_accent: String,
    pub(crate) overlay: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#0A192F"),
            surface: String::from("#112240"),
            foreground: String::from("#D1D5DB"),
            bright_foreground: String::from("#FFFFFF"),
            dim_foreground: String::from("#9CA3AF"),
            accent: String::from("#3B82F6"),
            bright_accent: String::from("#60A5FA"),
            overlay: String::from("#1D2D50"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
        }
    }
}

/// Palette resolved to iced colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) bright_foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) bright_accent: Color,
    pub(crate) overlay: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = ColorPalette::default();
        let resolve = |value: &str, default: &str| {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("invalid palette color {value:?}, using {default}");
                parse_hex_color(default).unwrap_or(Color::BLACK)
            })
        };

        Self {
            background: resolve(&p.background, &fallback.background),
            surface: resolve(&p.surface, &fallback.surface),
            foreground: resolve(&p.foreground, &fallback.foreground),
            bright_foreground: resolve(
                &p.bright_foreground,
                &fallback.bright_foreground,
            ),
            dim_foreground: resolve(
                &p.dim_foreground,
                &fallback.dim_foreground,
            ),
            accent: resolve(&p.accent, &fallback.accent),
            bright_accent: resolve(&p.bright_accent, &fallback.bright_accent),
            overlay: resolve(&p.overlay, &fallback.overlay),
            red: resolve(&p.red, &fallback.red),
            green: resolve(&p.green, &fallback.green),
            yellow: resolve(&p.yellow, &fallback.yellow),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
        )),
        8 => Some(Color::from_rgba8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
            f32::from(channel(6).ok()?) / 255.0,
        )),
        _ => None,
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a custom palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    /// Same theme with a different surface color.
    pub(crate) fn with_background(self, background: Color) -> Self {
        Self {
            overrides: Some(StyleOverrides {
                background: Some(background),
            }),
            ..self
        }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette.
    pub(crate) fn set_custom_palette(&mut self, palette: &ColorPalette) {
        self.current = AppTheme::from_palette(String::from("custom"), palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_rgb_hex_when_parsed_then_color_channels_match() {
        let color = parse_hex_color("#3B82F6").expect("valid color");
        assert_eq!(color, Color::from_rgb8(0x3B, 0x82, 0xF6));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#FFFFFF80").expect("valid color");
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_none_is_returned() {
        assert_eq!(parse_hex_color("3B82F6"), None);
        assert_eq!(parse_hex_color("#3B82F"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ÄÄÄ"), None);
    }

    #[test]
    fn given_signed_channels_when_parsed_then_none_is_returned() {
        assert_eq!(parse_hex_color("#+1+2+3"), None);
        assert_eq!(parse_hex_color("#+1+2+3+4"), None);
        assert_eq!(parse_hex_color("#-1-2-3"), None);
    }

    #[test]
    fn given_invalid_palette_entry_when_resolved_then_default_color_is_used() {
        let palette = ColorPalette {
            accent: String::from("blue"),
            ..ColorPalette::default()
        };

        let resolved = IcedColorPalette::from(&palette);

        assert_eq!(resolved.accent, Color::from_rgb8(0x3B, 0x82, 0xF6));
    }
}
