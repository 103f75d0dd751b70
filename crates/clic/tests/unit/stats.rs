//! Access Statistics.
//!
//! Each kind of silently absorbed traffic must land in its own counter.

use clic_core::stats::{AccessStats, DropReason};
use pretty_assertions::assert_eq;

use crate::common::harness::default_map;

#[test]
fn test_counters_follow_traffic() {
    let mut map = default_map();
    map.write(0x40, 1); // committed
    map.write(0x04, 1); // read-only
    map.write(0x08, 1); // reserved gap
    map.reset_slot(0x40); // reset
    let _ = map.read(0x40);

    assert_eq!(
        *map.stats(),
        AccessStats {
            ticks: 4,
            writes: 1,
            resets: 1,
            out_of_bounds: 1,
            read_only: 1,
            illegal_values: 0,
        }
    );
    assert_eq!(map.stats().dropped(), 2);
}

#[test]
fn test_record_drop_by_reason() {
    let mut stats = AccessStats::default();
    for reason in [
        DropReason::OutOfBounds,
        DropReason::OutOfBounds,
        DropReason::ReadOnly,
        DropReason::IllegalValue,
    ] {
        stats.record_drop(reason);
    }
    assert_eq!(stats.out_of_bounds, 2);
    assert_eq!(stats.read_only, 1);
    assert_eq!(stats.dropped(), 4);
}

#[test]
fn test_display_names_every_counter() {
    let text = AccessStats::default().to_string();
    for key in [
        "map.ticks",
        "map.writes",
        "map.resets",
        "drop.out_of_bounds",
        "drop.read_only",
        "drop.illegal_value",
    ] {
        assert!(text.contains(key), "missing {key}");
    }
}
