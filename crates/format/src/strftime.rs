//! Translation of strftime-style date patterns into chrono format items.
//!
//! Layout documents describe dates with strftime directives. Most of them have
//! a chrono counterpart; a few are rendered by hand, and the ones with no
//! equivalent (`%C`, `%U`, `%g`, `%G`) render as nothing.

use chrono::{DateTime, Datelike, FixedOffset};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// A chrono format string.
    Chrono(&'static str),
    /// Day of the year counted from zero, without padding.
    ZeroBasedDayOfYear,
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    tokens: Vec<Token>,
}

impl DatePattern {
    pub fn compile(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let Some(directive) = chars.next() else {
                literal.push('%');
                break;
            };
            match translate(directive) {
                Some(Directive::Literal(text)) => literal.push_str(text),
                Some(Directive::Token(token)) => {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(token);
                }
                None => {
                    literal.push('%');
                    literal.push(directive);
                }
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self { tokens }
    }

    pub fn render(&self, datetime: &DateTime<FixedOffset>) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Chrono(spec) => write!(out, "{}", datetime.format(spec))?,
                Token::ZeroBasedDayOfYear => write!(out, "{}", datetime.ordinal0())?,
                Token::Literal(text) => out.push_str(text),
            }
        }
        Ok(out)
    }
}

enum Directive {
    Token(Token),
    Literal(&'static str),
}

fn translate(directive: char) -> Option<Directive> {
    use Directive::Literal;

    match directive {
        'Y' => chrono_spec("%Y"),
        'y' => chrono_spec("%y"),
        'B' => chrono_spec("%B"),
        'b' | 'h' => chrono_spec("%b"),
        'm' => chrono_spec("%m"),
        'd' => chrono_spec("%d"),
        'e' => chrono_spec("%-d"),
        'j' => Some(Directive::Token(Token::ZeroBasedDayOfYear)),
        'A' => chrono_spec("%A"),
        'a' => chrono_spec("%a"),
        'w' => chrono_spec("%w"),
        'u' => chrono_spec("%u"),
        'W' | 'V' => chrono_spec("%V"),
        'H' => chrono_spec("%H"),
        'k' => chrono_spec("%-H"),
        'I' => chrono_spec("%I"),
        'l' => chrono_spec("%-I"),
        'M' => chrono_spec("%M"),
        'S' => chrono_spec("%S"),
        'p' => chrono_spec("%p"),
        'P' => chrono_spec("%P"),
        'r' => chrono_spec("%I:%M:%S %p"),
        'R' => chrono_spec("%H:%M"),
        'T' | 'X' => chrono_spec("%H:%M:%S"),
        'D' => chrono_spec("%m/%d/%y"),
        'F' => chrono_spec("%Y-%m-%d"),
        'x' => chrono_spec("%-m/%-d/%Y"),
        'c' => chrono_spec("%a %b %-d %H:%M:%S %Y"),
        's' => chrono_spec("%s"),
        'z' => chrono_spec("%z"),
        'Z' => chrono_spec("%:z"),
        '%' => Some(Literal("%")),
        'n' => Some(Literal("\n")),
        't' => Some(Literal("\t")),
        'C' | 'U' | 'g' | 'G' => Some(Literal("")),
        _ => None,
    }
}

fn chrono_spec(spec: &'static str) -> Option<Directive> {
    Some(Directive::Token(Token::Chrono(spec)))
}
