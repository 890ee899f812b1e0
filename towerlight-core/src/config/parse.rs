//! TOML-subset parser for panel configuration
//!
//! A minimal `no_std` parser covering only what the panel settings file
//! needs. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean, array of booleans)
//! - [section] headers: `poll`, `sleep`, `custom`
//! - Comments (# ...), including trailing comments outside strings
//!
//! Keys missing from the file keep their [`PanelConfig::default`] value.

use heapless::Vec;

use super::types::{
    ClockFormat, DeviceVariant, PanelConfig, PollIntervals, SleepTable, TemperatureUnit,
    CUSTOM_TEXT_LEN, MAX_SCREEN_MODES,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Key not valid in its section
    UnknownKey,
    /// Array longer than the table it fills
    TooManyItems,
    /// Custom text longer than one display line
    TextTooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Poll,
    Sleep,
    Custom,
}

/// Parse a settings file into a [`PanelConfig`]
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    // Intervals are clamped on construction, so collect both first
    let mut climate_ms = config.intervals.climate_ms();
    let mut lux_ms = config.intervals.lux_ms();

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;

        match (section, key) {
            (Section::Root, "variant") => config.variant = parse_variant(value)?,
            (Section::Root, "screen_mode") => config.screen_mode = parse_int(value)?,
            (Section::Root, "clock_format") => config.clock_format = parse_clock_format(value)?,
            (Section::Root, "temperature_unit") => {
                config.temperature_unit = parse_temperature_unit(value)?
            }
            (Section::Poll, "climate_interval_ms") => climate_ms = parse_int(value)?,
            (Section::Poll, "lux_interval_ms") => lux_ms = parse_int(value)?,
            (Section::Sleep, "active") => config.sleep_active = parse_bool(value)?,
            (Section::Sleep, "modes") => {
                let slots = parse_bool_array(value)?;
                config.sleep_modes =
                    SleepTable::from_slots(&slots).ok_or(ParseError::TooManyItems)?;
            }
            (Section::Custom, "line_one") => {
                config.custom.line_one = parse_text(value)?;
            }
            (Section::Custom, "line_two") => {
                config.custom.line_two = parse_text(value)?;
            }
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("unknown config key: {=str}", key);
                return Err(ParseError::UnknownKey);
            }
        }
    }

    config.intervals = PollIntervals::new(climate_ms, lux_ms);
    Ok(config)
}

/// Parse section header like "poll" or "sleep"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "poll" => Ok(Section::Poll),
        "sleep" => Ok(Section::Sleep),
        "custom" => Ok(Section::Custom),
        _other => {
            #[cfg(feature = "defmt")]
            defmt::warn!("unknown config section: {=str}", _other);
            Err(ParseError::InvalidSection)
        }
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match comment_start(value) {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value,
    };

    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Byte offset of the first `#` outside a quoted span
fn comment_start(value: &str) -> Option<usize> {
    let mut quoted = false;
    for (idx, ch) in value.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '#' if !quoted => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Parse a string value, quoted or bare
fn parse_string(value: &str) -> Result<&str, ParseError> {
    match value.strip_prefix('"') {
        Some(rest) => rest.strip_suffix('"').ok_or(ParseError::InvalidValue),
        None => Ok(value),
    }
}

/// Parse a custom text line
fn parse_text(value: &str) -> Result<heapless::String<CUSTOM_TEXT_LEN>, ParseError> {
    let mut text = heapless::String::new();
    text.push_str(parse_string(value)?)
        .map_err(|_| ParseError::TextTooLong)?;
    Ok(text)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse an inline array like "[true, false, true]"
fn parse_bool_array(value: &str) -> Result<Vec<bool, MAX_SCREEN_MODES>, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut slots = Vec::new();
    for item in inner.split(',') {
        let item = item.trim();
        // Trailing comma
        if item.is_empty() {
            continue;
        }
        slots
            .push(parse_bool(item)?)
            .map_err(|_| ParseError::TooManyItems)?;
    }
    Ok(slots)
}

/// Parse board variant
fn parse_variant(value: &str) -> Result<DeviceVariant, ParseError> {
    match parse_string(value)? {
        "ethernet" | "Ethernet" => Ok(DeviceVariant::Ethernet),
        "wifi" | "WiFi" | "Wifi" => Ok(DeviceVariant::Wifi),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse clock format
fn parse_clock_format(value: &str) -> Result<ClockFormat, ParseError> {
    match parse_string(value)? {
        "12h" | "12" => Ok(ClockFormat::Hour12),
        "24h" | "24" => Ok(ClockFormat::Hour24),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse temperature unit
fn parse_temperature_unit(value: &str) -> Result<TemperatureUnit, ParseError> {
    match parse_string(value)? {
        "celsius" | "Celsius" | "C" | "c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "Fahrenheit" | "F" | "f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ParseError::InvalidValue),
    }
}
