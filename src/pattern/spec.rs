//! Parsed representation of a single pattern element

use std::fmt::{self, Write};

/// Upper bound for width digits; longer runs clamp to this value.
pub const MAX_WIDTH: usize = 1 << 20;

/// One parsed pattern element: either a literal run or a `%`-directive.
///
/// A spec with no conversion character is a literal and `param` holds its
/// text; otherwise `param` holds the optional `{...}` argument. Width bounds
/// are `None` when the pattern gave no digits, which is distinct from an
/// explicit zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    convert_type: Option<char>,
    left_align: bool,
    min_width: Option<usize>,
    max_width: Option<usize>,
    param: String,
}

impl FormatSpec {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            param: text.into(),
            ..Self::default()
        }
    }

    pub fn directive(convert_type: char) -> Self {
        Self {
            convert_type: Some(convert_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn left_aligned(mut self, left_align: bool) -> Self {
        self.left_align = left_align;
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    pub fn is_literal(&self) -> bool {
        self.convert_type.is_none()
    }

    pub fn convert_type(&self) -> Option<char> {
        self.convert_type
    }

    pub fn left_align(&self) -> bool {
        self.left_align
    }

    pub fn min_width(&self) -> Option<usize> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<usize> {
        self.max_width
    }

    /// Literal text for literal specs, the `{...}` argument for directives.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Write `text` honoring this spec's truncation and padding bounds.
    ///
    /// Truncation to `max_width` characters happens first (prefix kept),
    /// then padding with spaces up to `min_width` characters.
    pub fn write_aligned<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> fmt::Result {
        let text = match self.max_width {
            Some(max) => match text.char_indices().nth(max) {
                Some((end, _)) => &text[..end],
                None => text,
            },
            None => text,
        };

        let fill = self
            .min_width
            .map_or(0, |width| width.saturating_sub(text.chars().count()));
        if self.left_align {
            out.write_str(text)?;
            pad(out, fill)
        } else {
            pad(out, fill)?;
            out.write_str(text)
        }
    }

    /// Convenience wrapper around [`write_aligned`](Self::write_aligned).
    pub fn align(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len().max(self.min_width.unwrap_or(0)));
        let _ = self.write_aligned(&mut out, text);
        out
    }
}

fn pad<W: Write + ?Sized>(out: &mut W, count: usize) -> fmt::Result {
    const SPACES: &str = "                                ";
    let mut remaining = count;
    while remaining > 0 {
        let chunk = remaining.min(SPACES.len());
        out.write_str(&SPACES[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}
