//! Single-pass parser for the pattern mini-language
//!
//! ```text
//! %%                          literal '%'
//! %[-][.]<digits><conv>[{param}]
//! anything else               literal text, copied verbatim
//! ```
//!
//! Parsing never fails. A directive without a conversion character is kept
//! as literal text, and an unterminated `{` takes the rest of the pattern as
//! its parameter. Width digits clamp to [`MAX_WIDTH`].

use super::renderer::{DateZone, Renderer};
use super::spec::{FormatSpec, MAX_WIDTH};

/// Compile `pattern` into renderers, formatting dates in local time.
pub fn parse(pattern: &str) -> Vec<Renderer> {
    parse_with_zone(pattern, DateZone::Local)
}

pub fn parse_with_zone(pattern: &str, zone: DateZone) -> Vec<Renderer> {
    parse_specs(pattern)
        .into_iter()
        .map(|spec| Renderer::from_spec(spec, zone))
        .collect()
}

/// Split `pattern` into its ordered sequence of specs.
pub fn parse_specs(pattern: &str) -> Vec<FormatSpec> {
    let mut parser = Parser::new(pattern);
    let mut specs = Vec::new();
    while let Some(spec) = parser.next_spec() {
        specs.push(spec);
    }
    specs
}

struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    fn eof(&self) -> bool {
        self.pos >= self.pattern.len()
    }

    fn peek(&self) -> Option<u8> {
        self.pattern.as_bytes().get(self.pos).copied()
    }

    // Every byte the parser consumes individually is ASCII, so `pos` always
    // stays on a char boundary.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn take_until(&mut self, byte: u8) -> &'a str {
        let pattern = self.pattern;
        let start = self.pos;
        self.pos = match pattern.as_bytes()[start..].iter().position(|&b| b == byte) {
            Some(offset) => start + offset,
            None => pattern.len(),
        };
        &pattern[start..self.pos]
    }

    fn next_spec(&mut self) -> Option<FormatSpec> {
        if self.eof() {
            return None;
        }

        if self.peek() != Some(b'%') {
            return Some(FormatSpec::literal(self.take_until(b'%')));
        }

        let start = self.pos;
        self.pos += 1;

        if self.eat(b'%') {
            return Some(FormatSpec::literal("%"));
        }

        Some(self.directive(start))
    }

    fn directive(&mut self, start: usize) -> FormatSpec {
        let left_align = self.eat(b'-');
        let is_max = self.eat(b'.');
        let width = self.digits();

        let convert_type = match self.peek() {
            Some(b) if b.is_ascii_alphabetic() => {
                self.pos += 1;
                char::from(b)
            }
            _ => return FormatSpec::literal(&self.pattern[start..self.pos]),
        };

        let mut spec = FormatSpec::directive(convert_type).left_aligned(left_align);
        if let Some(width) = width {
            spec = if is_max {
                spec.with_max_width(width)
            } else {
                spec.with_min_width(width)
            };
        }

        if self.eat(b'{') {
            spec = spec.with_param(self.take_until(b'}'));
            self.eat(b'}');
        }

        spec
    }

    fn digits(&mut self) -> Option<usize> {
        let mut value: Option<usize> = None;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            let digit = usize::from(b - b'0');
            value = Some(
                value
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(digit)
                    .min(MAX_WIDTH),
            );
            self.pos += 1;
        }
        value
    }
}
