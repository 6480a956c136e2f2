//! Full driver runs on the real clock, small enough for CI.

use std::time::Duration;

use cull_bench::{BenchError, Driver, DriverConfig, Sweep};
use cull_core::{liveness, World, DEFAULT_SEED};
use cull_strategy::{registry, Registration, Strategy};

fn quick_driver(sweep: Sweep) -> Driver {
    Driver::new(DriverConfig::fixed_iterations(2), sweep).unwrap()
}

#[test]
fn reference_strategies_agree_on_survivor_counts() {
    let sweep = Sweep::Multiplicative {
        start: 16,
        end: 4_096,
        multiplier: 4,
    };
    let driver = quick_driver(sweep);
    let report = driver.run(&registry()).unwrap();

    for &size in driver.sizes() {
        let expected = liveness(size, DEFAULT_SEED).iter().filter(|&&a| a).count();
        for (name, r) in report.iter() {
            let m = r.at(size).unwrap();
            assert_eq!(m.survivors, expected, "{name} at {size}");
            assert_eq!(m.iterations, 2);
            assert!(m.min <= m.mean && m.mean <= m.max, "{name} at {size}");
        }
    }
}

#[test]
fn ranking_covers_every_registration() {
    let driver = quick_driver(Sweep::Dense {
        start: 500,
        end: 1_000,
        step: 500,
    });
    let report = driver.run(&registry()).unwrap();
    let ranking = report.ranking_at(1_000);
    assert_eq!(ranking.len(), Strategy::ALL.len());
    assert!(ranking.windows(2).all(|w| w[0].1 <= w[1].1));
}

fn sleepy_prune(world: &mut World) {
    std::thread::sleep(Duration::from_millis(2));
    Strategy::Remove.prune(world);
}

#[test]
fn min_duration_drives_iteration_count() {
    let config = DriverConfig {
        min_iterations: 1,
        min_duration: Duration::from_millis(10),
        fit_complexity: false,
        ..DriverConfig::default()
    };
    let driver = Driver::new(
        config,
        Sweep::Dense {
            start: 8,
            end: 8,
            step: 1,
        },
    )
    .unwrap();
    let m = driver
        .measure(&Registration::new("Sleepy", sleepy_prune), 8)
        .unwrap();
    // Each sample sleeps at least 2 ms, so 10 ms needs at most 5 of them.
    assert!(m.iterations >= 1 && m.iterations <= 5, "{m:?}");
    assert!(m.total >= Duration::from_millis(10));
}

#[test]
fn duplicate_custom_name_is_an_error() {
    let driver = quick_driver(Sweep::Dense {
        start: 4,
        end: 8,
        step: 4,
    });
    let mut regs = registry();
    regs.push(Registration::new("Partition", Strategy::Swap.prune_fn()));
    assert!(matches!(
        driver.run(&regs),
        Err(BenchError::DuplicateStrategy { name }) if name == "Partition"
    ));
}
