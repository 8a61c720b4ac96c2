//! Property-based tests for pattern_logger using proptest

use pattern_logger::pattern::{parse_specs, FormatSpec};
use pattern_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Unknown),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_event() -> impl Strategy<Value = LogEvent> {
    (
        any_level(),
        "[a-z.]{0,12}",
        ".{0,40}",
        any::<i32>(),
        any::<u32>(),
        0u64..4_000_000_000_000,
    )
        .prop_map(|(level, name, message, line, thread_id, timestamp_ms)| {
            LogEvent::builder(name.as_str(), level)
                .location("src/lib.rs", line)
                .thread(thread_id, "worker")
                .timestamp_ms(timestamp_ms)
                .message(message)
                .build()
        })
}

// ============================================================================
// Formatter Laws
// ============================================================================

proptest! {
    /// A pattern with no '%' renders unchanged for any event
    #[test]
    fn test_literal_pattern_round_trip(pattern in "[^%]{0,64}", event in any_event()) {
        let formatter = Formatter::new(pattern.clone());
        prop_assert_eq!(formatter.format(&event), pattern);
    }

    /// "%%" always renders as a single '%'
    #[test]
    fn test_escape_law(prefix in "[^%]{0,16}", event in any_event()) {
        let formatter = Formatter::new(format!("{}%%", prefix));
        prop_assert_eq!(formatter.format(&event), format!("{}%", prefix));
    }

    /// Parsing the same pattern twice yields formatters that render identically
    #[test]
    fn test_construction_is_pure(pattern in "[%a-zA-Z0-9.{}: -]{0,32}", event in any_event()) {
        let first = Formatter::with_zone(pattern.clone(), DateZone::Utc);
        let second = Formatter::with_zone(pattern, DateZone::Utc);
        prop_assert_eq!(first.format(&event), second.format(&event));
    }

    /// Parsing never panics, whatever the input
    #[test]
    fn test_parse_total(pattern in ".{0,64}", event in any_event()) {
        let formatter = Formatter::new(pattern);
        let _ = formatter.format(&event);
    }

    /// Literal specs reassemble the literal portions of the pattern
    #[test]
    fn test_literal_specs_concatenate(pattern in "[^%]{0,32}") {
        let specs = parse_specs(&pattern);
        let joined: String = specs.iter().map(|spec| spec.param()).collect();
        prop_assert_eq!(joined, pattern);
    }
}

// ============================================================================
// Width and Alignment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Directive widths of any size format without panicking
    #[test]
    fn test_wide_widths_format(width in 60_000usize..70_000, left in any::<bool>(), event in any_event()) {
        let flag = if left { "-" } else { "" };
        let formatter = Formatter::new(format!("%{}{}m", flag, width));
        let out = formatter.format(&event);
        prop_assert_eq!(out.chars().count(), width.max(event.message().chars().count()));
    }
}

proptest! {
    /// Output is exactly min_width wide when the input is shorter
    #[test]
    fn test_padding_reaches_min_width(text in "[a-z]{0,10}", width in 0usize..20, left in any::<bool>()) {
        let spec = FormatSpec::directive('m').with_min_width(width).left_aligned(left);
        let out = spec.align(&text);
        prop_assert_eq!(out.chars().count(), width.max(text.chars().count()));
        if left {
            prop_assert!(out.starts_with(&text));
        } else {
            prop_assert!(out.ends_with(&text));
        }
    }

    /// Output never exceeds max_width and keeps the prefix
    #[test]
    fn test_truncation_keeps_prefix(text in ".{0,30}", width in 0usize..20) {
        let spec = FormatSpec::directive('m').with_max_width(width);
        let out = spec.align(&text);
        prop_assert!(out.chars().count() <= width);
        prop_assert!(text.starts_with(&out));
    }

    /// Truncation happens before padding
    #[test]
    fn test_truncate_then_pad(text in "[a-z]{0,30}", max in 0usize..10, extra in 0usize..10) {
        let min = max + extra;
        let spec = FormatSpec::directive('m').with_max_width(max).with_min_width(min);
        let out = spec.align(&text);
        let kept: String = text.chars().take(max).collect();
        prop_assert_eq!(out.chars().count(), min);
        prop_assert!(out.ends_with(&kept));
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Canonical names parse back to their level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        prop_assert_eq!(LogLevel::parse(level.to_str()), level);
    }

    /// Ordering matches the numeric value
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Anything other than the canonical names is UNKNOW
    #[test]
    fn test_unrecognized_names(name in "[a-z]{1,10}") {
        prop_assert_eq!(LogLevel::parse(&name), LogLevel::Unknown);
    }

    /// Out-of-range raw values render as UNKNOW
    #[test]
    fn test_raw_out_of_range(raw in 6u8..=255) {
        prop_assert_eq!(pattern_logger::level_name(raw), "UNKNOW");
    }
}
