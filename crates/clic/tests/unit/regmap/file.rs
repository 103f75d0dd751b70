//! Register File Access Rules.
//!
//! Covers the window check, index translation, the four access kinds and
//! the per-tick outcome reported to the map.

use clic_core::common::ConfigError;
use clic_core::config::RegisterFileConfig;
use clic_core::regmap::{BusSignals, Commit, RegisterFile, RegisterKind, TickOutcome};
use clic_core::stats::DropReason;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{file_write, standalone_file};

fn file_of(kind: RegisterKind) -> RegisterFile {
    RegisterFile::new(RegisterFileConfig::new("scratch", 0x100, 32, 4).kind(kind)).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Window
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x0FF, false, false)]
#[case(0x100, true, false)]
#[case(0x10C, true, false)]
#[case(0x10F, true, false)]
#[case(0x110, true, true)]
fn test_window_predicates(#[case] addr: u32, #[case] for_me: bool, #[case] oob: bool) {
    let file = standalone_file(0x100, 32, 4);
    assert_eq!(file.is_for_me(addr), for_me);
    assert_eq!(file.out_of_bounds(addr), oob);
    assert_eq!(file.claims(addr), for_me && !oob);
}

#[rstest]
#[case(0x100, Some(0))]
#[case(0x104, Some(1))]
#[case(0x107, Some(1))]
#[case(0x10C, Some(3))]
#[case(0x110, None)]
#[case(0x0FC, None)]
fn test_local_index_uses_stride(#[case] addr: u32, #[case] index: Option<usize>) {
    let file = standalone_file(0x100, 32, 4);
    assert_eq!(file.local_index(addr), index);
}

#[test]
fn test_default_stride_is_width_in_bytes() {
    assert_eq!(standalone_file(0, 8, 4).stride(), 1);
    assert_eq!(standalone_file(0, 16, 4).stride(), 2);
    assert_eq!(standalone_file(0, 32, 4).stride(), 4);
    assert_eq!(standalone_file(0, 32, 4).end(), 16);
}

#[test]
fn test_explicit_stride_widens_window() {
    let file =
        RegisterFile::new(RegisterFileConfig::new("lanes", 0, 8, 4).stride(4)).unwrap();
    assert_eq!(file.end(), 16);
    assert_eq!(file.local_index(8), Some(2));
}

// ══════════════════════════════════════════════════════════
// 2. Read/write through the window
// ══════════════════════════════════════════════════════════

#[test]
fn test_write_lands_after_one_tick() {
    let mut file = standalone_file(0x100, 32, 4);
    file.drive(BusSignals::write(0x108, 0xCAFE));
    assert_eq!(file.read(0x108), 0, "not visible before the clock edge");
    assert_eq!(
        file.tick(),
        TickOutcome::Committed(Commit::Write {
            index: 2,
            value: 0xCAFE
        })
    );
    assert_eq!(file.read(0x108), 0xCAFE);
    assert_eq!(file.read_data(), 0xCAFE);
    assert_eq!(file.peek(2), 0xCAFE);
}

#[test]
fn test_out_of_window_write_is_dropped() {
    let mut file = standalone_file(0x100, 32, 4);
    file.drive(BusSignals::write(0x110, 0x111));
    assert_eq!(file.tick(), TickOutcome::Dropped(DropReason::OutOfBounds));
    for i in 0..4 {
        assert_eq!(file.peek(i), 0);
    }
    assert_eq!(file.read(0x110), 0);
}

#[test]
fn test_held_enable_rewrites_every_tick() {
    let mut file = standalone_file(0, 8, 2);
    file.drive(BusSignals::write(1, 0x1FF));
    let _ = file.tick();
    let _ = file.tick();
    assert_eq!(file.read(1), 0xFF, "value is truncated to the file width");
}

#[test]
fn test_unchecked_file_ignores_index_past_bank() {
    let mut file =
        RegisterFile::new(RegisterFileConfig::new("loose", 0, 32, 2).bounds_check(false)).unwrap();
    file.drive(BusSignals::write(0x40, 7));
    assert_eq!(file.tick(), TickOutcome::Dropped(DropReason::OutOfBounds));
    assert_eq!(file.read(0x40), 0);
    assert_eq!(file.peek(0), 0);
    assert_eq!(file.peek(1), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Access kinds
// ══════════════════════════════════════════════════════════

#[test]
fn test_read_only_drops_writes_but_accepts_reset() {
    let mut file = RegisterFile::new(
        RegisterFileConfig::new("info", 0, 32, 1)
            .kind(RegisterKind::ReadOnly)
            .uniform_default(0x0100_0040),
    )
    .unwrap();
    file.drive(BusSignals::write(0, 0xFFFF_FFFF));
    assert_eq!(file.tick(), TickOutcome::Dropped(DropReason::ReadOnly));
    assert_eq!(file.read(0), 0x0100_0040);

    file.drive(BusSignals::reset(0));
    assert_eq!(
        file.tick(),
        TickOutcome::Committed(Commit::Reset { index: 0 })
    );
    assert_eq!(file.read(0), 0x0100_0040);
}

#[test]
fn test_write_only_reads_zero() {
    let mut file = file_of(RegisterKind::WriteOnly);
    file_write(&mut file, 0x100, 0x55);
    assert_eq!(file.read(0x100), 0);
    assert_eq!(file.peek(0), 0x55);
}

#[test]
fn test_warl_commits_only_legal_values() {
    fn even(v: u32) -> bool {
        v % 2 == 0
    }
    let mut file = file_of(RegisterKind::WriteAnyReadLegal).with_legality(even);

    file_write(&mut file, 0x100, 4);
    assert_eq!(file.read(0x100), 4);

    file.drive(BusSignals::write(0x100, 5));
    assert_eq!(file.tick(), TickOutcome::Dropped(DropReason::IllegalValue));
    assert_eq!(file.read(0x100), 4);
}

#[test]
fn test_warl_without_predicate_accepts_everything() {
    let mut file = file_of(RegisterKind::WriteAnyReadLegal);
    file_write(&mut file, 0x104, 0xABCD);
    assert_eq!(file.read(0x104), 0xABCD);
}

#[test]
fn test_predicate_is_ignored_for_read_write() {
    let mut file = file_of(RegisterKind::ReadWrite).with_legality(|_| false);
    file_write(&mut file, 0x100, 9);
    assert_eq!(file.read(0x100), 9);
}

#[test]
fn test_reset_restores_per_slot_default() {
    let mut file = RegisterFile::new(
        RegisterFileConfig::new("trig", 0x40, 32, 3).defaults(vec![1, 2, 3]),
    )
    .unwrap();
    file_write(&mut file, 0x44, 0x99);
    assert_eq!(file.read(0x44), 0x99);

    file.drive(BusSignals::reset(0x44));
    let _ = file.tick();
    assert_eq!(file.read(0x44), 2);
    assert_eq!(file.default_of(2), 3);
}

#[test]
fn test_idle_tick_reports_idle() {
    let mut file = standalone_file(0, 32, 1);
    file.drive(BusSignals::read(0));
    assert_eq!(file.tick(), TickOutcome::Idle);
}

// ══════════════════════════════════════════════════════════
// 4. Construction and description
// ══════════════════════════════════════════════════════════

#[test]
fn test_defaults_length_mismatch_is_rejected() {
    let err = RegisterFile::new(RegisterFileConfig::new("bad", 0, 32, 4).defaults(vec![0; 3]))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::DefaultsLength {
            expected: 4,
            found: 3
        }
    );
}

#[rstest]
#[case(RegisterFileConfig::new("w", 0, 0, 1), ConfigError::InvalidWidth(0))]
#[case(RegisterFileConfig::new("w", 0, 33, 1), ConfigError::InvalidWidth(33))]
#[case(RegisterFileConfig::new("d", 0, 32, 0), ConfigError::ZeroDepth)]
#[case(RegisterFileConfig::new("s", 0, 32, 1).stride(0), ConfigError::ZeroStride)]
#[case(
    RegisterFileConfig::new("o", 0xFFFF_FFF0, 32, 8),
    ConfigError::WindowOverflow { base: 0xFFFF_FFF0, span: 32 }
)]
fn test_degenerate_shapes_are_rejected(
    #[case] config: RegisterFileConfig,
    #[case] expected: ConfigError,
) {
    assert_eq!(RegisterFile::new(config).unwrap_err(), expected);
}

#[test]
fn test_display_lists_descriptors() {
    let file = RegisterFile::new(
        RegisterFileConfig::new("cliccfg", 0, 8, 1)
            .description("CLIC configuration register")
            .descriptor("nlbits", "interrupt level bits"),
    )
    .unwrap();
    let text = file.to_string();
    assert!(text.contains("cliccfg @ 0x0000"), "{text}");
    assert!(text.contains("CLIC configuration register"));
    assert!(text.contains("nlbits"));
    assert!(text.contains("RW"));
    assert_eq!(file.descriptors().len(), 1);
}
