//! Property-based tests for tiered_logger using proptest

use proptest::prelude::*;
use tiered_logger::prelude::*;
use tiered_logger::SeverityLadder;

const BUILTIN: [&str; 5] = ["ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

fn builtin_level() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("ERROR"),
        Just("WARN"),
        Just("INFO"),
        Just("DEBUG"),
        Just("TRACE"),
    ]
}

fn custom_name() -> impl Strategy<Value = String> {
    "[A-Z]{3,8}".prop_filter("must not shadow a built-in level", |name| {
        !BUILTIN.contains(&name.as_str())
    })
}

// ============================================================================
// Line Layout
// ============================================================================

proptest! {
    /// One field per enabled toggle, plus one for a single-word message
    #[test]
    fn test_field_count_matches_toggles(
        show_timestamp in any::<bool>(),
        show_location in any::<bool>(),
        show_severity in any::<bool>(),
        color in any::<bool>(),
        message in "[a-zA-Z0-9]{1,20}",
    ) {
        let sink = MemorySink::new();
        let logs = LogSystem::builder()
            .with_destination(sink.clone())
            .with_timestamp_enabled(show_timestamp)
            .with_file_name_enabled(show_location)
            .with_severity_enabled(show_severity)
            .with_color_enabled(color)
            .with_threshold("INFO")
            .build()
            .unwrap();

        logs.info().print(&message).unwrap();

        let content = sink.contents();
        let line = content.strip_suffix('\n').unwrap();
        let fields: Vec<&str> = line.split(' ').collect();
        let expected = [show_timestamp, show_location, show_severity]
            .iter()
            .filter(|enabled| **enabled)
            .count() + 1;

        prop_assert_eq!(fields.len(), expected);
        prop_assert_eq!(*fields.last().unwrap(), message.as_str());
        prop_assert_eq!(content.matches('\n').count(), 1);
    }

    /// All destinations see the same bytes
    #[test]
    fn test_fan_out_is_byte_identical(count in 1usize..6, message in "[ -~]{0,40}") {
        let sinks: Vec<MemorySink> = (0..count).map(|_| MemorySink::new()).collect();
        let logs = LogSystem::builder()
            .with_destinations(
                sinks
                    .iter()
                    .map(|sink| Box::new(sink.clone()) as tiered_logger::Destination),
            )
            .with_threshold("INFO")
            .build()
            .unwrap();

        logs.warn().print(&message).unwrap();

        let first = sinks[0].bytes();
        prop_assert!(!first.is_empty());
        for sink in &sinks[1..] {
            prop_assert_eq!(&sink.bytes(), &first);
        }
    }
}

// ============================================================================
// Ladder and Threshold
// ============================================================================

proptest! {
    /// The threshold level is live and the next one down is muted
    #[test]
    fn test_threshold_boundary(
        threshold in builtin_level(),
        above in custom_name(),
        below in custom_name(),
        above_ref in builtin_level(),
        below_ref in builtin_level(),
    ) {
        prop_assume!(above != below);

        let logs = LogSystem::builder()
            .with_destination(MemorySink::new())
            .with_additional_level_above(above.clone(), above_ref)
            .with_additional_level_below(below.clone(), below_ref)
            .with_threshold(threshold)
            .build()
            .unwrap();

        let levels: Vec<&str> = logs.levels().collect();
        let position = levels.iter().position(|level| *level == threshold).unwrap();

        for (index, level) in levels.iter().enumerate() {
            prop_assert_eq!(logs.is_live(level).unwrap(), index <= position);
        }
        prop_assert!(logs.is_live(threshold).unwrap());
        if let Some(next) = levels.get(position + 1) {
            prop_assert!(!logs.is_live(next).unwrap());
        }
    }

    /// Inserted levels sit right next to their reference
    #[test]
    fn test_insertion_neighbours(name in custom_name(), reference in builtin_level(), above in any::<bool>()) {
        let mut ladder = SeverityLadder::new();
        if above {
            ladder.insert_above(&name, reference).unwrap();
        } else {
            ladder.insert_below(&name, reference).unwrap();
        }

        let new_position = ladder.position(&name).unwrap();
        let reference_position = ladder.position(reference).unwrap();
        if above {
            prop_assert_eq!(new_position + 1, reference_position);
        } else {
            prop_assert_eq!(reference_position + 1, new_position);
        }
        prop_assert_eq!(ladder.len(), BUILTIN.len() + 1);
    }

    /// Unknown names never resolve to a logger
    #[test]
    fn test_unknown_lookup_fails(name in custom_name()) {
        let logs = LogSystem::builder()
            .with_destination(MemorySink::new())
            .with_threshold("INFO")
            .build()
            .unwrap();

        let is_unknown = matches!(logs.logger(&name), Err(LoggerError::UnknownLevel { .. }));
        prop_assert!(is_unknown);
    }
}
