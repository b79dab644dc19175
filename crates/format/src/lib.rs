//! Value formatting for text blocks: number, datetime and padding transforms
//! followed by an optional `{value}` template.

pub mod formatter;
pub mod settings;
pub mod strftime;

pub use formatter::TextFormatter;
pub use settings::{
    DatetimeFormat, FormatType, NumberFormat, PadDirection, PaddingFormat, TextFormat,
};
pub use strftime::DatePattern;
