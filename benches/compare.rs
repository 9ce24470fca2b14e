use divan::{Bencher, black_box};
use hashstr::HashStr;

const EVENT_TYPES: &[&str] = &[
    "PlayerMove",
    "PlayerDie",
    "PlayerSpawn",
    "EnemySpotted",
    "OnLevelLoaded",
    "OnCheckpoint",
    "OnPause",
    "OnResume",
];

fn main() {
    divan::main();
}

/// The recommended pattern: intern once, compare identifiers.
#[divan::bench]
fn compare_interned_handles(bencher: Bencher) {
    let handles: Vec<HashStr> = EVENT_TYPES.iter().map(|s| HashStr::new(s)).collect();
    let needle = HashStr::new("OnCheckpoint");
    bencher.bench_local(move || {
        black_box(handles.iter().filter(|h| **h == needle).count());
    });
}

/// The anti-pattern: re-interning at every comparison site hashes each time.
#[divan::bench]
fn compare_fresh_handles(bencher: Bencher) {
    let handles: Vec<HashStr> = EVENT_TYPES.iter().map(|s| HashStr::new(s)).collect();
    bencher.bench_local(move || {
        let needle = HashStr::new(black_box("OnCheckpoint"));
        black_box(handles.iter().filter(|h| **h == needle).count());
    });
}

/// The slow path: falling back to character comparison.
#[divan::bench]
fn compare_against_raw_strings(bencher: Bencher) {
    let handles: Vec<HashStr> = EVENT_TYPES.iter().map(|s| HashStr::new(s)).collect();
    bencher.bench_local(move || {
        black_box(
            handles
                .iter()
                .filter(|h| **h == black_box("OnCheckpoint"))
                .count(),
        );
    });
}
