//! Widget configuration.

use std::str::FromStr;
use std::time::Duration;

use log::debug;
use palette::{Srgb, WithAlpha};
use thiserror::Error;

use crate::style::{Color, ScrollableStyle, TRANSPARENT};

pub const ATTR_HIDE_BUTTONS: &str = "hide-buttons";
pub const ATTR_HIDE_GRADIENTS: &str = "hide-gradients";
pub const VAR_BACKGROUND_COLOR: &str = "--scrollable--background-color";
pub const VAR_GRADIENT_WIDTH: &str = "--scrollable--gradient-width";
pub const VAR_IMAGE_SIZE: &str = "--scrollable--image-size";
pub const VAR_TRANSITION_SPEED: &str = "--scrollable--transition-speed";
pub const VAR_COLOR_TEXT: &str = "--scrollable--color-text";

/// Options of a scrollable container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollableConfig {
    /// Do not render the navigation buttons and do not react to clicks on them.
    pub hide_buttons: bool,

    /// Do not render gradients. No sentinel is observed and edge state is
    /// never computed.
    pub hide_gradients: bool,

    pub style: ScrollableStyle,
}

impl ScrollableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_buttons(mut self) -> Self {
        self.hide_buttons = true;
        self
    }

    pub fn hide_gradients(mut self) -> Self {
        self.hide_gradients = true;
        self
    }

    pub fn style(mut self, style: ScrollableStyle) -> Self {
        self.style = style;
        self
    }

    /// Edge detection runs only while gradients are shown.
    pub fn detects_edges(&self) -> bool {
        !self.hide_gradients
    }

    /// Build a config from host attributes.
    ///
    /// Boolean attributes are set by presence; an explicit `"false"` value
    /// counts as absent. Style variables require a value. Unknown names are
    /// skipped.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut config = Self::default();

        for (name, value) in attributes {
            let value = value.map(str::trim);
            match name {
                ATTR_HIDE_BUTTONS => config.hide_buttons = parse_flag(value),
                ATTR_HIDE_GRADIENTS => config.hide_gradients = parse_flag(value),
                VAR_BACKGROUND_COLOR => {
                    config.style.background = parse_color(name, required(name, value)?)?;
                }
                VAR_GRADIENT_WIDTH => {
                    config.style.gradient_width = parse_length(name, required(name, value)?)?;
                }
                VAR_IMAGE_SIZE => {
                    config.style.icon_size = parse_length(name, required(name, value)?)?;
                }
                VAR_TRANSITION_SPEED => {
                    config.style.transition_speed =
                        parse_duration(name, required(name, value)?)?;
                }
                VAR_COLOR_TEXT => {
                    config.style.color = parse_color(name, required(name, value)?)?;
                }
                other => debug!("ignoring unknown attribute {other:?}"),
            }
        }

        Ok(config)
    }
}

/// Errors that can occur when reading configuration attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A style variable was given without a value.
    #[error("attribute '{0}' requires a value")]
    MissingValue(String),

    #[error("invalid duration '{value}' for '{attribute}' (expected e.g. 0.1s or 100ms)")]
    InvalidDuration { attribute: String, value: String },

    #[error("invalid length '{value}' for '{attribute}' (expected e.g. 20px)")]
    InvalidLength { attribute: String, value: String },

    #[error("invalid color '{value}' for '{attribute}'")]
    InvalidColor { attribute: String, value: String },
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingValue(name.to_string())),
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    !matches!(value, Some(v) if v.eq_ignore_ascii_case("false"))
}

/// Parse `0.1s`, `100ms` or a bare number of seconds.
pub fn parse_duration(attribute: &str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration {
        attribute: attribute.to_string(),
        value: value.to_string(),
    };

    let (number, per_second) = if let Some(ms) = value.strip_suffix("ms") {
        (ms, 1000.0)
    } else if let Some(s) = value.strip_suffix('s') {
        (s, 1.0)
    } else {
        (value, 1.0)
    };

    let secs = number.trim().parse::<f64>().map_err(|_| invalid())? / per_second;
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}

/// Parse `20px` or a bare non-negative number.
pub fn parse_length(attribute: &str, value: &str) -> Result<f32, ConfigError> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    match number.parse::<f32>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ConfigError::InvalidLength {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `transparent` or a named colour.
pub fn parse_color(attribute: &str, value: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        attribute: attribute.to_string(),
        value: value.to_string(),
    };
    let lower = value.to_ascii_lowercase();

    if lower == "transparent" {
        return Ok(TRANSPARENT);
    }

    if lower.starts_with('#') {
        let rgb = Srgb::<u8>::from_str(&lower).map_err(|_| invalid())?;
        return Ok(rgb.with_alpha(255));
    }

    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels = args
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Srgb::new(*r, *g, *b).with_alpha(255)),
            _ => Err(invalid()),
        };
    }

    palette::named::from_str(&lower)
        .map(|rgb| rgb.with_alpha(255))
        .ok_or_else(invalid)
}
