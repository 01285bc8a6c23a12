//! Pattern 2: Propagating Signals the Handler Refuses
//! Example: Re-raise on a Missing Message
//!
//! Run with: cargo run --bin p2_reraise_unlabeled

use anyhow::Context;
use failure_recovery::{recover, run_demo, FailureSignal, Mode};
use serde::Serialize;

/// Outcome of one handler invocation, in a form that serializes cleanly.
#[derive(Serialize)]
struct OutcomeReport {
    input: &'static str,
    recovered: Option<String>,
    reraised: Option<FailureSignal>,
}

fn report(input: &'static str, outcome: Result<Option<String>, FailureSignal>) -> OutcomeReport {
    match outcome {
        Ok(recovered) => OutcomeReport {
            input,
            recovered,
            reraised: None,
        },
        Err(signal) => OutcomeReport {
            input,
            recovered: None,
            reraised: Some(signal),
        },
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== Re-raise on a Missing Message ===\n");

    // No defined mode produces these signals; they have to be built by hand.
    println!("=== Unlabeled Signal ===");
    let signal = FailureSignal::unlabeled();
    match recover(Err(signal.clone())) {
        Ok(value) => println!("  recovered: {:?}", value),
        Err(reraised) => {
            println!("  handler refused, signal came back out: {}", reraised);
            println!("  identical to the one raised: {}", reraised == signal);
        }
    }

    // An empty message counts as missing.
    println!("\n=== Empty Message ===");
    match recover(Err(FailureSignal::new(""))) {
        Ok(value) => println!("  recovered: {:?}", value),
        Err(reraised) => println!("  handler refused, signal came back out: {}", reraised),
    }

    // Structured view of each handler outcome.
    println!("\n=== Outcome Reports ===");
    let reports = vec![
        report("completed attempt", recover(Ok(()))),
        report("labeled signal", recover(Err(FailureSignal::new("Failure!")))),
        report("unlabeled signal", recover(Err(FailureSignal::unlabeled()))),
    ];
    println!("{}", serde_json::to_string_pretty(&reports)?);

    // A caller boundary prepared for a propagated signal.
    let message = run_demo(Mode::Fail).context("recovery handler refused the raised signal")?;
    println!("\nrecovered through the caller boundary: {:?}", message);

    println!("\n=== Key Points ===");
    println!("1. Recovery succeeds only when the signal carries a non-empty message");
    println!("2. A refused signal propagates unchanged, not wrapped or replaced");
    println!("3. Both branches are plain return values, so they serialize cleanly");
    println!("4. Callers of the composed demo still handle Result, with ? or match");

    Ok(())
}
