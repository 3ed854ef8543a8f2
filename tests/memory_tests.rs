// Host-side tests for the memory bank, the floating-memory scheduler and the level meter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use core::constants::*;
use core::*;
use std::time::Duration;

const DESKTOP: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};
const MOBILE: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};

fn bank(images: usize, notes: &[&str]) -> MemoryBank {
    let mut bank = MemoryBank::default();
    bank.add_images((0..images).map(|i| format!("blob:img{}", i)));
    for n in notes {
        bank.add_note(n);
    }
    bank
}

fn running(bank: &MemoryBank, seed: u64) -> MemoryScheduler {
    let mut sched = MemoryScheduler::new(SpawnParams::default(), seed);
    assert_eq!(sched.sync(true, bank), Gate::Started);
    sched
}

#[test]
fn image_cap_keeps_first_twenty() {
    let mut bank = MemoryBank::default();
    let overflow = bank.add_images((0..25).map(|i| format!("blob:{}", i)));
    assert_eq!(bank.images().len(), MAX_MEMORY_IMAGES);
    assert_eq!(bank.images()[19], "blob:19");
    assert_eq!(overflow, (20..25).map(|i| format!("blob:{}", i)).collect::<Vec<_>>());

    // full bank takes nothing more
    assert_eq!(bank.add_images(vec!["blob:late".to_string()]).len(), 1);
    assert_eq!(bank.images().len(), MAX_MEMORY_IMAGES);
}

#[test]
fn notes_are_truncated_by_characters() {
    let mut bank = MemoryBank::default();
    let long = "a".repeat(150);
    assert_eq!(bank.add_note(&long).map(|n| n.chars().count()), Some(MAX_NOTE_CHARS));

    let wide = "夏".repeat(120);
    let stored = bank.add_note(&wide).unwrap();
    assert_eq!(stored.chars().count(), MAX_NOTE_CHARS);
    assert_eq!(bank.texts().len(), 2);
}

#[test]
fn blank_notes_are_ignored() {
    let mut bank = MemoryBank::default();
    assert!(bank.add_note("").is_none());
    assert!(bank.add_note("   \n\t").is_none());
    assert!(bank.is_empty());
    assert_eq!(bank.add_note("  hi  "), Some("  hi  "));
}

#[test]
fn scheduler_gates_on_playback_and_content() {
    let empty = MemoryBank::default();
    let mut sched = MemoryScheduler::new(SpawnParams::default(), 1);
    assert_eq!(sched.sync(false, &empty), Gate::Unchanged);
    assert_eq!(sched.sync(true, &empty), Gate::Unchanged);
    assert!(sched.spawn(&empty, DESKTOP).is_none());

    let full = bank(1, &[]);
    assert_eq!(sched.sync(false, &full), Gate::Unchanged);
    assert_eq!(sched.sync(true, &full), Gate::Started);
    assert!(sched.is_active());
    assert_eq!(sched.sync(true, &full), Gate::Unchanged);
    assert_eq!(sched.sync(false, &full), Gate::Stopped);
    assert!(!sched.is_active());
}

#[test]
fn never_shows_the_same_content_twice_at_once() {
    let bank = bank(3, &["first", "second"]);
    let mut sched = running(&bank, 42);
    for _ in 0..5 {
        assert!(sched.spawn(&bank, DESKTOP).is_some());
    }
    let mut contents: Vec<_> = sched.memories().iter().map(|m| m.content.clone()).collect();
    contents.sort_by_key(|c| format!("{:?}", c));
    contents.dedup();
    assert_eq!(contents.len(), 5);

    // everything is on screen, so this cycle is skipped
    assert!(sched.spawn(&bank, DESKTOP).is_none());
    assert_eq!(sched.memories().len(), 5);

    // once one expires it can come back
    let id = sched.memories()[2].id;
    let freed = sched.memories()[2].content.clone();
    assert!(sched.remove(id));
    let back = sched.spawn(&bank, DESKTOP).unwrap();
    assert_eq!(back.content, freed);
    assert_ne!(back.id, id);
}

#[test]
fn single_item_is_skipped_while_visible() {
    let bank = bank(0, &["only note"]);
    let mut sched = running(&bank, 3);
    assert!(sched.spawn(&bank, MOBILE).is_some());
    assert!(sched.spawn(&bank, MOBILE).is_none());
}

#[test]
fn stopping_clears_memories_and_stale_removals_are_ignored() {
    let bank = bank(2, &["note"]);
    let mut sched = running(&bank, 9);
    let first = sched.spawn(&bank, DESKTOP).unwrap().id;
    sched.spawn(&bank, DESKTOP);
    assert_eq!(sched.sync(false, &bank), Gate::Stopped);
    assert!(sched.memories().is_empty());

    assert!(!sched.remove(first));
    assert!(sched.spawn(&bank, DESKTOP).is_none());
    assert!(sched.memories().is_empty());
}

fn assert_memory_ranges(m: &FloatingMemory, size: (f32, f32)) {
    assert!((MEMORY_X_PCT.0..=MEMORY_X_PCT.1).contains(&m.x));
    assert!((MEMORY_Y_PCT.0..=MEMORY_Y_PCT.1).contains(&m.y));
    assert!(m.rotation[0].abs() <= ROTATION_START_DEG);
    assert!(m.rotation[1].abs() <= ROTATION_MID_DEG);
    assert!(m.rotation[2].abs() <= ROTATION_END_DEG);
    assert!((MEMORY_DURATION_MIN_SEC..=MEMORY_DURATION_MAX_SEC).contains(&m.duration_sec));
    assert!(m.size >= size.0 && m.size <= size.0 + size.1);
}

#[test]
fn spawned_memories_respect_ranges_by_device() {
    let cases = [
        (bank(1, &[]), DESKTOP, IMAGE_SIZE_DESKTOP),
        (bank(1, &[]), MOBILE, IMAGE_SIZE_MOBILE),
        (bank(0, &["text"]), DESKTOP, TEXT_SIZE_DESKTOP),
        (bank(0, &["text"]), MOBILE, TEXT_SIZE_MOBILE),
    ];
    for (bank, viewport, size) in &cases {
        let mut sched = running(bank, 17);
        for _ in 0..200 {
            let m = sched.spawn(bank, *viewport).unwrap().clone();
            assert_memory_ranges(&m, *size);
            assert!(sched.remove(m.id));
        }
    }
}

#[test]
fn duration_in_milliseconds() {
    let bank = bank(1, &[]);
    let mut sched = running(&bank, 5);
    let m = sched.spawn(&bank, DESKTOP).unwrap();
    assert_eq!(m.duration_ms(), (m.duration_sec * 1000.0).round() as u32);
    assert!(m.duration_ms() >= 8_000 && m.duration_ms() <= 13_000);
}

#[test]
fn cjk_notes_are_flagged() {
    assert!(contains_cjk("夏の思い出"));
    assert!(contains_cjk("안녕하세요"));
    assert!(contains_cjk("mixed 한 text"));
    assert!(!contains_cjk("summer nights"));
    assert!(!contains_cjk("café"));

    let bank = bank(0, &["ずっと一緒"]);
    let mut sched = running(&bank, 1);
    assert!(sched.spawn(&bank, DESKTOP).unwrap().cjk);

    let bank = bank_with_latin();
    let mut sched = running(&bank, 1);
    assert!(!sched.spawn(&bank, DESKTOP).unwrap().cjk);
}

fn bank_with_latin() -> MemoryBank {
    bank(0, &["see you soon"])
}

#[test]
fn meter_refreshes_on_its_own_clock() {
    let mut meter = LevelMeter::new(12);
    assert_eq!(meter.bars().len(), METER_BARS);
    assert!(meter.bars().iter().all(|&b| b == METER_REST_PCT));

    assert!(!meter.advance(Duration::from_millis(40)));
    assert!(!meter.advance(Duration::from_millis(40)));
    assert!(meter.advance(Duration::from_millis(40)));
    assert!(meter
        .bars()
        .iter()
        .all(|&b| (METER_MIN_PCT..=METER_MAX_PCT).contains(&b)));

    // leftover 20ms carries into the next window
    assert!(meter.advance(Duration::from_millis(80)));

    // a long stall yields a single refresh
    assert!(meter.advance(Duration::from_secs(5)));
    assert!(!meter.advance(Duration::from_millis(1)));

    meter.rest();
    assert!(meter.bars().iter().all(|&b| b == METER_REST_PCT));
    assert!(!meter.advance(Duration::from_millis(99)));
}
