use crate::settings::{FormatType, NumberFormat, PadDirection, PaddingFormat, TextFormat};
use crate::strftime::DatePattern;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const VALUE_PLACEHOLDER: &str = "{value}";

/// Rust's `Decimal` cannot carry more fractional digits than this.
const MAX_PRECISION: u32 = 28;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Applies a text block's format settings to its values.
///
/// The typed transform (number, datetime or padding) runs first, then the
/// `base` template substitutes the result for `{value}`. Values that a
/// transform cannot interpret pass through it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormatter {
    settings: TextFormat,
}

impl TextFormatter {
    pub fn new(settings: TextFormat) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TextFormat {
        &self.settings
    }

    pub fn format(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let transformed = match self.settings.kind() {
            Some(FormatType::Number) => format_number(value, &self.settings.number),
            Some(FormatType::Datetime) => format_datetime(value, &self.settings.datetime.format),
            Some(FormatType::Padding) => pad(value, &self.settings.padding),
            None => None,
        }
        .unwrap_or_else(|| value.to_string());

        apply_base(&self.settings.base, transformed)
    }
}

fn apply_base(base: &str, value: String) -> String {
    if base.contains(VALUE_PLACEHOLDER) {
        base.replace(VALUE_PLACEHOLDER, &value)
    } else {
        value
    }
}

fn parse_numeric(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Rounds half away from zero to `precision` places and groups the integer
/// part by thousands with the configured delimiter.
fn format_number(value: &str, settings: &NumberFormat) -> Option<String> {
    let number = parse_numeric(value)?;
    let precision = settings.precision.min(MAX_PRECISION);
    let rounded = number.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);

    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + integer.len() / 3);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push_str(&settings.delimiter);
        }
        out.push(digit);
    }
    if precision > 0 {
        out.push('.');
        out.push_str(fraction);
        for _ in fraction.len()..precision as usize {
            out.push('0');
        }
    }
    Some(out)
}

fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z") {
        return Some(datetime);
    }
    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().fixed_offset())
}

fn format_datetime(value: &str, pattern: &str) -> Option<String> {
    if pattern.is_empty() {
        return None;
    }
    let Some(datetime) = parse_datetime(value) else {
        debug!("'{}' is not a recognised date, leaving it unformatted", value);
        return None;
    };
    DatePattern::compile(pattern).render(&datetime).ok()
}

/// Pads to `length` characters. A multi-character pad string that overshoots
/// is cut back from the padded side.
fn pad(value: &str, settings: &PaddingFormat) -> Option<String> {
    let length = settings.length as usize;
    let current = value.chars().count();
    if settings.character.is_empty() || length == 0 || current >= length {
        return None;
    }

    let direction = settings.pad_direction();
    let pad_len = settings.character.chars().count();
    let repeats = (length - current).div_ceil(pad_len);
    let filler = settings.character.repeat(repeats);

    let padded = match direction {
        PadDirection::Left => format!("{filler}{value}"),
        PadDirection::Right => format!("{value}{filler}"),
    };
    let total = padded.chars().count();
    if total == length {
        return Some(padded);
    }
    let kept = match direction {
        PadDirection::Left => padded.chars().skip(total - length).collect(),
        PadDirection::Right => padded.chars().take(length).collect(),
    };
    Some(kept)
}
