//! Compiled month-day patterns.
//!
//! A pattern holds exactly one month and one day element, separated by
//! literal text:
//!
//! | Pattern | Meaning |
//! |---|---|
//! | `MM` | month, two digits |
//! | `M` | month, one or two digits |
//! | `dd` | day-of-month, two digits |
//! | `d` | day-of-month, one or two digits |
//! | `'text'` | quoted literal, `''` for a single quote |
//!
//! Any other non-letter character is a literal. The ISO form is `--MM-dd`.

use std::fmt;

use crate::{DateTimeError, Result};

const ISO_PATTERN: &str = "--MM-dd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Fixed,
    Flexible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Literal(String),
    Month(Width),
    Day(Width),
}

/// A pattern compiled for the two-field month-day layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDayFormat {
    pattern:  String,
    elements: Vec<Element>,
}

impl MonthDayFormat {
    /// The ISO 8601 `--MM-dd` layout.
    pub fn iso() -> Self {
        Self {
            pattern:  ISO_PATTERN.to_owned(),
            elements: vec![
                Element::Literal("--".to_owned()),
                Element::Month(Width::Fixed),
                Element::Literal("-".to_owned()),
                Element::Day(Width::Fixed),
            ],
        }
    }

    /// Compiles a pattern.
    ///
    /// # Errors
    /// Returns `DateTimeError::Pattern` for unknown letters, unterminated
    /// quotes, or a pattern without exactly one month and one day element.
    pub fn compile(pattern: &str) -> Result<Self> {
        let fail = |reason: String| DateTimeError::Pattern {
            pattern: pattern.to_owned(),
            reason,
        };

        let mut elements = Vec::new();
        let mut chars = pattern.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            match c {
                '\'' => {
                    let mut literal = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '\'')) if chars.peek().is_some_and(|&(_, next)| next == '\'') => {
                                chars.next();
                                literal.push('\'');
                            },
                            Some((_, '\'')) => break,
                            Some((_, other)) => literal.push(other),
                            None => return Err(fail(format!("unterminated quote at index {index}"))),
                        }
                    }
                    if literal.is_empty() {
                        // '' outside a quoted section is a quote literal
                        literal.push('\'');
                    }
                    push_literal(&mut elements, &literal);
                },
                'M' | 'd' => {
                    let mut count = 1;
                    while chars.peek().is_some_and(|&(_, next)| next == c) {
                        chars.next();
                        count += 1;
                    }
                    let width = match count {
                        1 => Width::Flexible,
                        2 => Width::Fixed,
                        _ => return Err(fail(format!("too many '{c}' letters at index {index}"))),
                    };
                    elements.push(if c == 'M' {
                        Element::Month(width)
                    } else {
                        Element::Day(width)
                    });
                },
                other if other.is_ascii_alphabetic() => {
                    return Err(fail(format!("unsupported pattern letter '{other}' at index {index}")));
                },
                other => {
                    let mut buffer = [0; 4];
                    push_literal(&mut elements, other.encode_utf8(&mut buffer));
                },
            }
        }

        let months = elements.iter().filter(|e| matches!(e, Element::Month(_))).count();
        let days = elements.iter().filter(|e| matches!(e, Element::Day(_))).count();
        if months != 1 || days != 1 {
            return Err(fail(format!(
                "expected one month and one day element, found {months} and {days}"
            )));
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            elements,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parses text into a raw `(month, day)` pair. Values are not range checked.
    ///
    /// # Errors
    /// Returns `DateTimeError::Parse` with the index of the first mismatch.
    pub fn parse(&self, text: &str) -> Result<(i64, i64)> {
        let fail = |position: usize, reason: String| DateTimeError::Parse {
            text: text.to_owned(),
            position,
            reason,
        };

        let mut position = 0;
        let mut month = None;
        let mut day = None;
        for element in &self.elements {
            match element {
                Element::Literal(literal) => {
                    if !text[position..].starts_with(literal.as_str()) {
                        return Err(fail(position, format!("expected '{literal}'")));
                    }
                    position += literal.len();
                },
                Element::Month(width) => {
                    let (value, consumed) = parse_number(&text[position..], *width)
                        .ok_or_else(|| fail(position, "expected month digits".to_owned()))?;
                    month = Some(value);
                    position += consumed;
                },
                Element::Day(width) => {
                    let (value, consumed) = parse_number(&text[position..], *width)
                        .ok_or_else(|| fail(position, "expected day digits".to_owned()))?;
                    day = Some(value);
                    position += consumed;
                },
            }
        }

        if position != text.len() {
            return Err(fail(position, "unparsed text found".to_owned()));
        }
        match (month, day) {
            (Some(month), Some(day)) => Ok((month, day)),
            _ => Err(fail(0, "pattern has no month or day".to_owned())),
        }
    }

    /// Formats a month and day with this pattern.
    pub fn format(&self, month: u8, day: u8) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for element in &self.elements {
            match element {
                Element::Literal(literal) => out.push_str(literal),
                Element::Month(width) => push_number(&mut out, month, *width),
                Element::Day(width) => push_number(&mut out, day, *width),
            }
        }
        out
    }
}

impl Default for MonthDayFormat {
    fn default() -> Self {
        Self::iso()
    }
}

impl fmt::Display for MonthDayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn push_literal(elements: &mut Vec<Element>, literal: &str) {
    if let Some(Element::Literal(existing)) = elements.last_mut() {
        existing.push_str(literal);
    } else {
        elements.push(Element::Literal(literal.to_owned()));
    }
}

fn push_number(out: &mut String, value: u8, width: Width) {
    if width == Width::Fixed && value < 10 {
        out.push('0');
    }
    out.push_str(&value.to_string());
}

/// Reads one or two ASCII digits, returning the value and bytes consumed.
fn parse_number(text: &str, width: Width) -> Option<(i64, usize)> {
    let digits = text.bytes().take(2).take_while(u8::is_ascii_digit).count();
    let valid = match width {
        Width::Fixed => digits == 2,
        Width::Flexible => digits >= 1,
    };
    if !valid {
        return None;
    }
    let value = text[..digits].parse().ok()?;
    Some((value, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_matches_compiled() {
        let compiled = MonthDayFormat::compile("--MM-dd").unwrap();
        assert_eq!(compiled, MonthDayFormat::iso());
        assert_eq!(MonthDayFormat::default().pattern(), "--MM-dd");
    }

    #[test]
    fn test_round_trip() {
        let iso = MonthDayFormat::iso();
        let (month, day) = iso.parse("--12-03").unwrap();
        assert_eq!((month, day), (12, 3));
        assert_eq!(iso.format(12, 3), "--12-03");
    }

    #[test]
    fn test_parse_does_not_range_check() {
        assert_eq!(MonthDayFormat::iso().parse("--04-31"), Ok((4, 31)));
        assert_eq!(MonthDayFormat::iso().parse("--13-99"), Ok((13, 99)));
    }

    #[test]
    fn test_parse_errors_report_position() {
        struct TestCase {
            text:     &'static str,
            position: usize,
        }

        let cases = [
            TestCase { text: "", position: 0 },
            TestCase {
                text:     "-12-03",
                position: 0,
            },
            TestCase {
                text:     "--1-03",
                position: 2,
            },
            TestCase {
                text:     "--12/03",
                position: 4,
            },
            TestCase {
                text:     "--12-3",
                position: 5,
            },
            TestCase {
                text:     "--12-03x",
                position: 7,
            },
        ];

        let iso = MonthDayFormat::iso();
        for case in &cases {
            match iso.parse(case.text) {
                Err(DateTimeError::Parse { position, text, .. }) => {
                    assert_eq!(position, case.position, "position for {:?}", case.text);
                    assert_eq!(text, case.text);
                },
                other => panic!("expected parse error for {:?}, got {other:?}", case.text),
            }
        }
    }

    #[test]
    fn test_custom_patterns() {
        let us = MonthDayFormat::compile("M/d").unwrap();
        assert_eq!(us.parse("7/4"), Ok((7, 4)));
        assert_eq!(us.parse("12/25"), Ok((12, 25)));
        assert_eq!(us.format(7, 4), "7/4");

        let european = MonthDayFormat::compile("dd.MM.").unwrap();
        assert_eq!(european.parse("03.12."), Ok((12, 3)));
        assert_eq!(european.format(12, 3), "03.12.");

        let quoted = MonthDayFormat::compile("'day' d 'of' M").unwrap();
        assert_eq!(quoted.format(6, 9), "day 9 of 6");
        assert_eq!(quoted.parse("day 9 of 6"), Ok((6, 9)));

        let apostrophe = MonthDayFormat::compile("MM''dd").unwrap();
        assert_eq!(apostrophe.format(1, 2), "01'02");
    }

    #[test]
    fn test_format_widths() {
        struct TestCase {
            pattern:  &'static str,
            month:    u8,
            day:      u8,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                pattern:  "--MM-dd",
                month:    1,
                day:      9,
                expected: "--01-09",
            },
            TestCase {
                pattern:  "--MM-dd",
                month:    12,
                day:      31,
                expected: "--12-31",
            },
            TestCase {
                pattern:  "M/d",
                month:    1,
                day:      9,
                expected: "1/9",
            },
            TestCase {
                pattern:  "M/d",
                month:    11,
                day:      30,
                expected: "11/30",
            },
            TestCase {
                pattern:  "d 'of' MM",
                month:    3,
                day:      5,
                expected: "5 of 03",
            },
        ];

        for case in &cases {
            let format = MonthDayFormat::compile(case.pattern).unwrap();
            assert_eq!(format.format(case.month, case.day), case.expected, "pattern {}", case.pattern);
        }
    }

    #[test]
    fn test_invalid_patterns() {
        for pattern in ["MMM-dd", "yyyy-MM-dd", "MM", "MM-dd-MM", "'MM-dd", "ddd"] {
            assert!(
                matches!(MonthDayFormat::compile(pattern), Err(DateTimeError::Pattern { .. })),
                "{pattern:?} should not compile"
            );
        }
    }
}
