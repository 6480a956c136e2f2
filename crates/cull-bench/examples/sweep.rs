//! Run removal strategies over a short sweep and print the results.
//!
//! With no arguments every strategy runs; otherwise each argument names a
//! strategy to keep (case-insensitive), e.g. `cargo run --example sweep
//! -- swap remove`.
//!
//! The driver logs each strategy at `info` to stderr; raise the max level
//! to `DEBUG` to see every measurement.

use std::error::Error;
use std::time::Duration;

use cull_bench::{Driver, DriverConfig, Sweep};
use cull_strategy::{registry, Registration, Strategy};

fn selected() -> Result<Vec<Registration>, Box<dyn Error>> {
    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        return Ok(registry());
    }
    names
        .iter()
        .map(|name| {
            Strategy::from_name(name)
                .map(Strategy::registration)
                .ok_or_else(|| format!("unknown strategy '{name}'").into())
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = DriverConfig {
        min_iterations: 3,
        min_duration: Duration::from_millis(50),
        ..DriverConfig::default()
    };
    let sweep = Sweep::Dense {
        start: 10_000,
        end: 50_000,
        step: 10_000,
    };
    let driver = Driver::new(config, sweep)?;
    let report = driver.run(&selected()?)?;

    println!(
        "=== Dead entity removal, {} to {} entities ===\n",
        sweep.start(),
        sweep.end()
    );
    print!("{:<18}", "strategy");
    for size in driver.sizes() {
        print!("{size:>12}");
    }
    println!("{:>24}", "fit");

    for (name, r) in report.iter() {
        print!("{name:<18}");
        for m in &r.measurements {
            print!("{:>10.3}ms", m.mean.as_secs_f64() * 1e3);
        }
        match &r.complexity {
            Some(fit) => println!("    {fit}"),
            None => println!(),
        }
    }

    let largest = driver.sizes().last().copied().unwrap_or_default();
    println!("\nRanking at {largest} entities:");
    for (rank, (name, mean)) in report.ranking_at(largest).into_iter().enumerate() {
        println!("  {:>2}. {name:<18} {mean:?}", rank + 1);
    }
    Ok(())
}
