use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourStyle {
    /// `1:05:09 PM`
    TwelveHourUpper,
    /// `1:05:09 pm`
    TwelveHourLower,
    /// `13:05:09`, `09:05:09`
    TwentyFourPadded,
    /// `13:05:09`, `9:05:09`
    TwentyFourUnpadded,
}

impl HourStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::TwelveHourUpper => "%-I:%M:%S %p",
            Self::TwelveHourLower => "%-I:%M:%S %P",
            Self::TwentyFourPadded => "%H:%M:%S",
            Self::TwentyFourUnpadded => "%-H:%M:%S",
        }
    }
}

const SUPPORTED_LOCALES: [(&str, HourStyle); 15] = [
    ("en-US", HourStyle::TwelveHourUpper),
    ("en-AU", HourStyle::TwelveHourLower),
    ("en-IN", HourStyle::TwelveHourLower),
    ("en-GB", HourStyle::TwentyFourPadded),
    ("de-DE", HourStyle::TwentyFourPadded),
    ("fr-FR", HourStyle::TwentyFourPadded),
    ("it-IT", HourStyle::TwentyFourPadded),
    ("nl-NL", HourStyle::TwentyFourPadded),
    ("pt-BR", HourStyle::TwentyFourPadded),
    ("ru-RU", HourStyle::TwentyFourPadded),
    ("sv-SE", HourStyle::TwentyFourPadded),
    ("C", HourStyle::TwentyFourPadded),
    ("es-ES", HourStyle::TwentyFourUnpadded),
    ("ja-JP", HourStyle::TwentyFourUnpadded),
    ("zh-CN", HourStyle::TwentyFourUnpadded),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLocale {
    tag: &'static str,
    style: HourStyle,
}

impl TimeLocale {
    pub const EN_US: Self = Self {
        tag: "en-US",
        style: HourStyle::TwelveHourUpper,
    };

    /// Accepts BCP-47 tags (`de-DE`) and POSIX locale names (`de_DE.UTF-8`,
    /// `POSIX`).
    pub fn parse(value: &str) -> ClientResult<Self> {
        let normalized = normalize_locale_tag(value);
        SUPPORTED_LOCALES
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(&normalized))
            .map(|&(tag, style)| Self { tag, style })
            .ok_or_else(|| {
                ClientError::invalid_argument_with_recovery(
                    &format!("Unsupported time locale `{value}`."),
                    vec![format!(
                        "Use one of: {}.",
                        supported_locale_tags().join(", ")
                    )],
                )
            })
    }

    pub const fn tag(self) -> &'static str {
        self.tag
    }

    pub const fn hour_style(self) -> HourStyle {
        self.style
    }
}

impl Default for TimeLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

pub fn supported_locale_tags() -> Vec<&'static str> {
    SUPPORTED_LOCALES.iter().map(|(tag, _)| *tag).collect()
}

fn normalize_locale_tag(value: &str) -> String {
    let trimmed = value.trim();
    let without_codeset = trimmed.split(['.', '@']).next().unwrap_or(trimmed);
    if without_codeset.eq_ignore_ascii_case("POSIX") {
        return "C".to_string();
    }
    without_codeset.replace('_', "-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// `local`, `utc`, or a fixed `±HH:MM` offset.
    pub fn parse(value: &str) -> ClientResult<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::Utc);
        }
        parse_fixed_offset(trimmed).map(Self::Fixed).ok_or_else(|| {
            ClientError::invalid_argument_with_recovery(
                &format!("Unsupported timezone `{value}`."),
                vec!["Use `local`, `utc`, or a fixed offset such as `+02:00`.".to_string()],
            )
        })
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

fn parse_fixed_offset(value: &str) -> Option<FixedOffset> {
    let bytes = value.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !digits(1..3) || !digits(4..6) {
        return None;
    }
    let hours = value.get(1..3)?.parse::<i32>().ok()?;
    let minutes = value.get(4..6)?.parse::<i32>().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// How `display_time` is rendered. Passed explicitly so the formatter never
/// reads process-wide locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeDisplay {
    pub locale: TimeLocale,
    pub zone: TimeZoneSetting,
}

impl TimeDisplay {
    pub fn new(locale: TimeLocale, zone: TimeZoneSetting) -> Self {
        Self { locale, zone }
    }

    /// Time of day for a millisecond epoch timestamp, or `None` when the
    /// timestamp is outside the representable range.
    pub fn format_time_of_day(&self, timestamp_ms: i64) -> Option<String> {
        let instant = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)?;
        let pattern = self.locale.hour_style().pattern();
        let rendered = match self.zone {
            TimeZoneSetting::Local => instant.with_timezone(&Local).format(pattern).to_string(),
            TimeZoneSetting::Utc => instant.format(pattern).to_string(),
            TimeZoneSetting::Fixed(offset) => {
                instant.with_timezone(&offset).format(pattern).to_string()
            }
        };
        Some(rendered)
    }
}
