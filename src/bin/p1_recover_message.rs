//! Pattern 1: Converting an Intercepted Failure into a Value
//! Example: Recover the Message
//!
//! Run with: cargo run --bin p1_recover_message

use failure_recovery::{run_demo, Mode};

fn main() {
    println!("=== Recover the Message ===\n");

    // Failing attempt: the raised signal is intercepted and its message
    // becomes the result.
    println!("=== Mode::Fail ===");
    match run_demo(Mode::Fail) {
        Ok(Some(message)) => println!("  recovered message: '{}'", message),
        Ok(None) => println!("  completed with no value"),
        Err(signal) => println!("  propagated signal: {}", signal),
    }

    // Succeeding attempt: nothing is raised, nothing is returned.
    println!("\n=== Mode::Succeed ===");
    match run_demo(Mode::Succeed) {
        Ok(Some(message)) => println!("  recovered message: '{}'", message),
        Ok(None) => println!("  completed with no value"),
        Err(signal) => println!("  propagated signal: {}", signal),
    }

    // The same outcomes, driven by selector strings.
    println!("\n=== Selector Strings ===");
    for selector in ["fail", "succeed", "retry"] {
        match selector.parse::<Mode>() {
            Ok(mode) => println!("  '{}' -> {:?}", selector, run_demo(mode)),
            Err(e) => println!("  '{}' -> error: {}", selector, e),
        }
    }

    println!("\n=== Key Points ===");
    println!("1. The attempt and its handler return values, nothing unwinds");
    println!("2. A signal with a message is consumed and its message is the result");
    println!("3. A completed attempt yields no value at all");
    println!("4. Callers pattern-match the outcome instead of guarding a region");
}
