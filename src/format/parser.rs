//! ICU message syntax parser.
//!
//! Grammar handled:
//!
//! ```text
//! message  := (literal | '#' | '{' argument '}')*
//! argument := name
//!           | name ',' 'number' [',' style]
//!           | name ',' ('plural' | 'selectordinal') ',' ['offset:' n] (selector '{' message '}')+
//!           | name ',' 'select' ',' (key '{' message '}')+
//! ```
//!
//! Apostrophes quote syntax characters the ICU way: `''` is a literal
//! apostrophe and `'{...}'` is literal text. `#` only means "the plural
//! value" inside plural branches.

use super::plural::PluralCategory;
use crate::error::{Result, TranslateError};

/// Nesting limit for plural/select branches.
const MAX_DEPTH: usize = 32;

/// Style requested by a `number` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberStyleArg {
    /// `{n, number}`
    Default,
    /// `{n, number, integer}`
    Integer,
    /// `{n, number, percent}`
    Percent,
    /// `{n, number, money}`: a named format from the config.
    Named(String),
}

/// Branch selector of a plural placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum PluralSelector {
    /// `=N`
    Exact(f64),
    /// `one`, `few`, `other`...
    Category(PluralCategory),
}

/// One parsed piece of a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied as-is.
    Literal(String),
    /// `{name}`
    Argument(String),
    /// `{name, number[, style]}`
    Number {
        /// Parameter name.
        name: String,
        /// Requested style.
        style: NumberStyleArg,
    },
    /// `{name, plural, ...}` and `{name, selectordinal, ...}`
    Plural {
        /// Parameter name.
        name: String,
        /// Value subtracted before category selection and `#` rendering.
        offset: f64,
        /// Ordinal rather than cardinal rules.
        ordinal: bool,
        /// Branches in source order.
        arms: Vec<(PluralSelector, Vec<Segment>)>,
    },
    /// `{name, select, ...}`
    Select {
        /// Parameter name.
        name: String,
        /// Branches in source order.
        arms: Vec<(String, Vec<Segment>)>,
    },
    /// `#` inside a plural branch.
    Pound,
}

/// What: Parse a template into segments.
///
/// # Errors
/// - `Syntax` with the byte offset of the first problem
pub fn parse(template: &str) -> Result<Vec<Segment>> {
    let mut parser = Parser {
        src: template,
        pos: 0,
    };
    let segments = parser.message(0, false)?;
    if parser.pos < template.len() {
        return Err(parser.error("unmatched '}'"));
    }
    Ok(segments)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: &str) -> TranslateError {
        TranslateError::Syntax {
            template: self.src.to_string(),
            offset: self.pos,
            reason: reason.to_string(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    /// Read a word up to whitespace or one of the syntax characters.
    fn word(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && !matches!(c, ',' | '{' | '}'))
        {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    /// Parse text until end of input or an unconsumed `}`.
    fn message(&mut self, depth: usize, in_plural: bool) -> Result<Vec<Segment>> {
        if depth > MAX_DEPTH {
            return Err(self.error("branches nested too deeply"));
        }
        let mut segments = Vec::new();
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                '{' => {
                    if !text.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut text)));
                    }
                    self.bump();
                    segments.push(self.argument(depth, in_plural)?);
                }
                '}' => break,
                '#' if in_plural => {
                    if !text.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut text)));
                    }
                    self.bump();
                    segments.push(Segment::Pound);
                }
                '\'' => self.quoted(in_plural, &mut text),
                _ => {
                    text.push(ch);
                    self.bump();
                }
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Literal(text));
        }
        Ok(segments)
    }

    /// Handle an apostrophe at the current position.
    fn quoted(&mut self, in_plural: bool, text: &mut String) {
        self.bump();
        match self.peek() {
            Some('\'') => {
                self.bump();
                text.push('\'');
            }
            Some(c) if matches!(c, '{' | '}' | '|') || (c == '#' && in_plural) => {
                while let Some(c) = self.bump() {
                    if c == '\'' {
                        if self.peek() == Some('\'') {
                            self.bump();
                            text.push('\'');
                        } else {
                            return;
                        }
                    } else {
                        text.push(c);
                    }
                }
            }
            _ => text.push('\''),
        }
    }

    fn argument(&mut self, depth: usize, in_plural: bool) -> Result<Segment> {
        self.skip_whitespace();
        let name = self.word().to_string();
        if name.is_empty() {
            return Err(self.error("empty placeholder"));
        }
        self.skip_whitespace();
        match self.bump() {
            Some('}') => return Ok(Segment::Argument(name)),
            Some(',') => {}
            _ => return Err(self.error("unclosed placeholder")),
        }
        self.skip_whitespace();
        let kind = self.word().to_string();
        self.skip_whitespace();
        match kind.as_str() {
            "number" => self.number(name),
            "plural" | "selectordinal" => {
                self.expect(',')?;
                self.plural(name, kind == "selectordinal", depth)
            }
            "select" => {
                self.expect(',')?;
                self.select(name, depth, in_plural)
            }
            "" => Err(self.error("missing argument type")),
            _ => Err(self.error(&format!("unsupported argument type '{kind}'"))),
        }
    }

    fn number(&mut self, name: String) -> Result<Segment> {
        let style = match self.bump() {
            Some('}') => {
                return Ok(Segment::Number {
                    name,
                    style: NumberStyleArg::Default,
                });
            }
            Some(',') => {
                self.skip_whitespace();
                match self.word() {
                    "" => return Err(self.error("missing number style")),
                    "integer" => NumberStyleArg::Integer,
                    "percent" => NumberStyleArg::Percent,
                    other => NumberStyleArg::Named(other.to_string()),
                }
            }
            _ => return Err(self.error("unclosed placeholder")),
        };
        self.skip_whitespace();
        self.expect('}')?;
        Ok(Segment::Number { name, style })
    }

    fn plural(&mut self, name: String, ordinal: bool, depth: usize) -> Result<Segment> {
        let mut offset = 0.0;
        let mut arms = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unclosed plural placeholder")),
                _ => {}
            }
            let token = self.word().to_string();
            if let Some(value) = token.strip_prefix("offset:") {
                if !arms.is_empty() {
                    return Err(self.error("offset must precede plural branches"));
                }
                let value = if value.is_empty() {
                    self.skip_whitespace();
                    self.word().to_string()
                } else {
                    value.to_string()
                };
                offset = value
                    .parse::<f64>()
                    .map_err(|_| self.error("invalid plural offset"))?;
                continue;
            }
            let selector = if let Some(exact) = token.strip_prefix('=') {
                PluralSelector::Exact(
                    exact
                        .parse::<f64>()
                        .map_err(|_| self.error("invalid exact plural selector"))?,
                )
            } else if let Some(category) = PluralCategory::from_keyword(&token) {
                PluralSelector::Category(category)
            } else if token.is_empty() {
                return Err(self.error("missing plural selector"));
            } else {
                return Err(self.error(&format!("unknown plural category '{token}'")));
            };
            let body = self.branch(depth, true)?;
            arms.push((selector, body));
        }
        if !arms
            .iter()
            .any(|(s, _)| *s == PluralSelector::Category(PluralCategory::Other))
        {
            return Err(self.error("plural placeholder needs an 'other' branch"));
        }
        Ok(Segment::Plural {
            name,
            offset,
            ordinal,
            arms,
        })
    }

    fn select(&mut self, name: String, depth: usize, in_plural: bool) -> Result<Segment> {
        let mut arms = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unclosed select placeholder")),
                _ => {}
            }
            let key = self.word().to_string();
            if key.is_empty() {
                return Err(self.error("missing select key"));
            }
            let body = self.branch(depth, in_plural)?;
            arms.push((key, body));
        }
        if !arms.iter().any(|(k, _)| k == "other") {
            return Err(self.error("select placeholder needs an 'other' branch"));
        }
        Ok(Segment::Select { name, arms })
    }

    /// Parse `'{' message '}'`.
    fn branch(&mut self, depth: usize, in_plural: bool) -> Result<Vec<Segment>> {
        self.skip_whitespace();
        self.expect('{')?;
        let body = self.message(depth + 1, in_plural)?;
        if self.peek() != Some('}') {
            return Err(self.error("unclosed branch"));
        }
        self.bump();
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    #[test]
    fn literal_and_simple_argument() {
        assert_eq!(
            parse("Welcome {name}!").expect("parses"),
            vec![lit("Welcome "), Segment::Argument("name".into()), lit("!")]
        );
        assert_eq!(parse("").expect("parses"), Vec::<Segment>::new());
        assert_eq!(
            parse("{ spaced }").expect("parses"),
            vec![Segment::Argument("spaced".into())]
        );
    }

    #[test]
    fn number_styles() {
        assert_eq!(
            parse("{x, number, money}").expect("parses"),
            vec![Segment::Number {
                name: "x".into(),
                style: NumberStyleArg::Named("money".into())
            }]
        );
        assert_eq!(
            parse("{x,number}").expect("parses"),
            vec![Segment::Number {
                name: "x".into(),
                style: NumberStyleArg::Default
            }]
        );
        assert!(matches!(
            parse("{x, number, percent}").expect("parses")[0],
            Segment::Number {
                style: NumberStyleArg::Percent,
                ..
            }
        ));
    }

    #[test]
    fn plural_with_exact_and_pound() {
        let segments =
            parse("{n, plural, =0 {none} =1 {one item} other {# items}}").expect("parses");
        let Segment::Plural {
            name, arms, offset, ..
        } = &segments[0]
        else {
            panic!("expected plural, got {segments:?}");
        };
        assert_eq!(name, "n");
        assert!(offset.abs() < f64::EPSILON);
        assert_eq!(arms.len(), 3);
        assert_eq!(arms[0].0, PluralSelector::Exact(0.0));
        assert_eq!(arms[2].1, vec![Segment::Pound, lit(" items")]);
    }

    #[test]
    fn plural_offset() {
        let segments =
            parse("{n, plural, offset:1 =0 {nobody} other {you and # others}}").expect("parses");
        assert!(matches!(&segments[0], Segment::Plural { offset, .. } if (*offset - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn select_with_nested_argument() {
        let segments =
            parse("{g, select, female {She} male {He} other {They}} said {msg}").expect("parses");
        assert!(matches!(&segments[0], Segment::Select { arms, .. } if arms.len() == 3));
        assert_eq!(segments[2], Segment::Argument("msg".into()));
    }

    #[test]
    fn pound_is_literal_outside_plural() {
        assert_eq!(parse("Item #1").expect("parses"), vec![lit("Item #1")]);
    }

    #[test]
    fn apostrophe_quoting() {
        assert_eq!(parse("It''s").expect("parses"), vec![lit("It's")]);
        assert_eq!(parse("G'day mate!").expect("parses"), vec![lit("G'day mate!")]);
        assert_eq!(
            parse("Use '{braces}' here").expect("parses"),
            vec![lit("Use {braces} here")]
        );
        assert_eq!(
            parse("{n, plural, other {'#' is #}}").expect("parses")[0],
            Segment::Plural {
                name: "n".into(),
                offset: 0.0,
                ordinal: false,
                arms: vec![(
                    PluralSelector::Category(PluralCategory::Other),
                    vec![lit("# is "), Segment::Pound]
                )],
            }
        );
    }

    #[test]
    fn syntax_errors() {
        let offset_of = |t: &str| match parse(t) {
            Err(TranslateError::Syntax { offset, .. }) => offset,
            other => panic!("expected syntax error for {t:?}, got {other:?}"),
        };
        assert_eq!(offset_of("Hi {name"), 8);
        assert_eq!(offset_of("Hi }"), 3);
        offset_of("{}");
        offset_of("{n, date}");
        offset_of("{n, plural, one {x}}");
        offset_of("{n, plural, some {x} other {y}}");
        offset_of("{n, select, a {x}}");
        offset_of("{n, plural, other {x}");
    }
}
