//! End-to-end properties of the stepping engine, exercised through the
//! driver against a headless surface.

use sortviz::driver::{Clock, Driver};
use sortviz::engine::swap::SWAP_TICKS;
use sortviz::engine::AlgorithmKind;
use sortviz::renderer::NullSurface;
use sortviz::types::{Completion, Signal};

const FIXTURES: &[&[u32]] = &[
    &[5, 3, 4, 1],
    &[1],
    &[2, 1],
    &[1, 2, 3, 4, 5],
    &[5, 4, 3, 2, 1],
    &[7, 7, 7],
    &[812, 4, 231, 4, 999, 0, 512, 128, 64, 900],
];

fn start_driver(kind: AlgorithmKind, values: &[u32]) -> Driver {
    let mut driver = Driver::new(kind);
    driver.load(values, 1.0).unwrap();
    driver.signal(Signal::Start).unwrap();
    driver
}

/// Tick until completion, asserting the run stays within a generous
/// worst-case bound for the input size.
fn finish(driver: &mut Driver, n: usize) -> Completion {
    let mut surface = NullSurface;
    let cap = (n as u64 + 2) * (n as u64 + 2) * u64::from(SWAP_TICKS) + 10;
    for _ in 0..cap {
        if let Some(completion) = driver.tick(&mut surface).unwrap() {
            return completion;
        }
    }
    panic!("sort exceeded {cap} ticks for n = {n}");
}

fn values_in_order(driver: &Driver) -> Vec<u32> {
    let mut pairs: Vec<(usize, u32)> = driver
        .elements()
        .iter()
        .map(|e| (e.index, e.value))
        .collect();
    pairs.sort();
    pairs.into_iter().map(|(_, v)| v).collect()
}

#[test]
fn every_algorithm_sorts_every_fixture() {
    for kind in AlgorithmKind::ALL {
        for &input in FIXTURES {
            let mut driver = start_driver(kind, input);
            finish(&mut driver, input.len());

            let mut expected = input.to_vec();
            expected.sort();
            assert_eq!(
                values_in_order(&driver),
                expected,
                "{} failed on {input:?}",
                kind.name()
            );
            // Rendered positions settle integer-exact on the logical slots.
            for e in driver.elements() {
                assert_eq!(e.pos, e.index as f64);
            }
        }
    }
}

#[test]
fn value_multiset_is_invariant_on_every_tick() {
    for kind in AlgorithmKind::ALL {
        let input = [812u32, 4, 231, 4, 999, 0, 512, 128];
        let mut sorted_input = input.to_vec();
        sorted_input.sort();

        let mut driver = start_driver(kind, &input);
        let mut surface = NullSurface;
        loop {
            let completion = driver.tick(&mut surface).unwrap();
            let mut values: Vec<u32> = driver.elements().iter().map(|e| e.value).collect();
            values.sort();
            assert_eq!(values, sorted_input);
            if completion.is_some() {
                break;
            }
        }
    }
}

#[test]
fn committed_swap_counts_stay_within_worst_case_bounds() {
    let input = [9u32, 8, 7, 6, 5, 4, 3, 2, 1];
    let n = input.len() as u64;
    for kind in AlgorithmKind::ALL {
        let mut driver = start_driver(kind, &input);
        let mut surface = NullSurface;
        let mut swaps = 0u64;
        loop {
            let before: Vec<usize> = driver.elements().iter().map(|e| e.index).collect();
            let completion = driver.tick(&mut surface).unwrap();
            let after: Vec<usize> = driver.elements().iter().map(|e| e.index).collect();
            if before != after {
                swaps += 1;
            }
            if completion.is_some() {
                break;
            }
        }
        let bound = match kind {
            AlgorithmKind::Selection => n - 1,
            _ => n * (n - 1) / 2,
        };
        assert!(
            swaps <= bound,
            "{}: {swaps} swaps exceeds bound {bound}",
            kind.name()
        );
    }
}

#[test]
fn ticks_after_done_change_nothing() {
    for kind in AlgorithmKind::ALL {
        let mut driver = start_driver(kind, &[3, 1, 4, 1, 5]);
        finish(&mut driver, 5);

        // The clock stopped; re-running it against the finished algorithm
        // must neither advance nor re-emit.
        assert_eq!(driver.clock(), Clock::Stopped);
        driver.signal(Signal::Continue).unwrap();
        let snapshot = values_in_order(&driver);
        let ticks = driver.ticks();
        let mut surface = NullSurface;
        for _ in 0..25 {
            assert!(driver.tick(&mut surface).unwrap().is_none());
        }
        assert_eq!(values_in_order(&driver), snapshot);
        assert_eq!(driver.ticks(), ticks);
    }
}

#[test]
fn selection_scenario_takes_one_swap_and_minimal_ticks() {
    // [5,3,4,1]: the single swap of 5 and 1 animates for SWAP_TICKS ticks,
    // then one more tick finds the suffix already sorted and marks done.
    let mut driver = start_driver(AlgorithmKind::Selection, &[5, 3, 4, 1]);
    let mut surface = NullSurface;
    let mut swaps = 0;
    loop {
        let before: Vec<usize> = driver.elements().iter().map(|e| e.index).collect();
        let completion = driver.tick(&mut surface).unwrap();
        let after: Vec<usize> = driver.elements().iter().map(|e| e.index).collect();
        if before != after {
            swaps += 1;
        }
        if let Some(c) = completion {
            assert_eq!(c.ticks, u64::from(SWAP_TICKS) + 1);
            break;
        }
    }
    assert_eq!(swaps, 1);
    assert_eq!(values_in_order(&driver), vec![1, 3, 4, 5]);
}

#[test]
fn empty_dataset_is_a_configuration_error() {
    for kind in AlgorithmKind::ALL {
        let mut driver = Driver::new(kind);
        let err = driver.load(&[], 1.0).unwrap_err();
        assert!(err.to_string().contains("empty dataset"));
        // The failed load leaves nothing runnable behind.
        driver.signal(Signal::Start).unwrap();
        assert_eq!(driver.clock(), Clock::Stopped);
    }
}

#[test]
fn unknown_identifier_is_a_configuration_error() {
    assert!(AlgorithmKind::parse("quick").is_err());
    assert!(AlgorithmKind::parse("").is_err());
    assert!(AlgorithmKind::parse("Bubble").is_err());
}

#[test]
fn restarting_resorts_the_already_sorted_arrangement() {
    // Start twice: the second run sees the sorted arrangement and finishes
    // without committing any swaps.
    let mut driver = start_driver(AlgorithmKind::Bubble, &[4, 2, 3, 1]);
    finish(&mut driver, 4);
    driver.signal(Signal::Start).unwrap();
    let mut surface = NullSurface;
    loop {
        let before: Vec<usize> = driver.elements().iter().map(|e| e.index).collect();
        let completion = driver.tick(&mut surface).unwrap();
        assert_eq!(
            driver.elements().iter().map(|e| e.index).collect::<Vec<_>>(),
            before
        );
        if completion.is_some() {
            break;
        }
    }
    assert_eq!(values_in_order(&driver), vec![1, 2, 3, 4]);
}
