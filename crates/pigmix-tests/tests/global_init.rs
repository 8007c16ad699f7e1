//! First use of the global mixer from many threads at once.
//!
//! Kept in its own test binary with a single test so that no other test
//! builds the global mixer before the threads race for it.

use std::sync::Barrier;

use pigmix::{PigmentMixer, Rgb8};

const THREADS: usize = 8;

#[test]
fn global_first_use_races_to_one_mixer() {
    let barrier = Barrier::new(THREADS);
    let blue = Rgb8::new(0, 33, 133);
    let yellow = Rgb8::new(252, 211, 0);

    let results: Vec<(&'static PigmentMixer, Vec<Rgb8>)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let mixer = pigmix::try_global().unwrap();
                    let mixes = (0..=16)
                        .map(|i| pigmix::blend_int8_gamma(blue, yellow, i as f32 / 16.0))
                        .collect();
                    (mixer, mixes)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let (first, expected) = &results[0];
    for (mixer, mixes) in &results {
        assert!(std::ptr::eq(*mixer, *first));
        assert_eq!(mixes, expected);
    }
    assert!(std::ptr::eq(*first, pigmix::global()));

    // A complete table: endpoints reproduce the inputs exactly.
    assert_eq!(expected[0], blue);
    assert_eq!(expected[16], yellow);
}
