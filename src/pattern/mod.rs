//! Pattern-based formatting
//!
//! A pattern such as `%d{%H:%M:%S} [%-5p] %c: %m%n` is parsed once into an
//! ordered list of [`Renderer`]s; formatting an event runs them left to
//! right and concatenates their output.
//!
//! | Directive | Field |
//! |-----------|-------|
//! | `%d{fmt}` | timestamp, strftime sub-pattern (default `%Y-%m-%d %H:%M:%S`) |
//! | `%p` | level name |
//! | `%c` | logger name |
//! | `%m` | message body |
//! | `%n` | line terminator |
//! | `%f` | source file |
//! | `%l` | source line |
//! | `%t` | thread id |
//! | `%F` | fiber id |
//! | `%r` | milliseconds since process start |
//! | `%N` | thread name |
//! | `%%` | literal `%` |
//!
//! Any directive may carry `-` (left align), a minimum width, or `.` followed
//! by a maximum width, e.g. `%-10c` or `%.3p`.

pub mod formatter;
pub mod parser;
pub mod renderer;
pub mod spec;

pub use formatter::{Formatter, DEFAULT_PATTERN};
pub use parser::{parse, parse_specs, parse_with_zone};
pub use renderer::{DateRenderer, DateZone, Renderer, DEFAULT_DATE_FORMAT, LINE_ENDING};
pub use spec::{FormatSpec, MAX_WIDTH};
