//! Searches for an antiderivative of f(x) = x / tan(x) by brute random
//! candidates, then prints the winner in postfix and simplified infix form.
//!
//! Run with `cargo run --release --example find_antiderivative`.

use std::time::Instant;

fn f(x: f64) -> f64 {
    x / x.tan()
}

fn main() {
    let xs = [0.2, 0.5, 0.9, 1.5, 2.0];
    let samples: Vec<(f64, f64)> = xs.iter().map(|&x| (x, f(x))).collect();

    let start = Instant::now();
    let (answer, attempts) = stochint::search(&samples, 4, 4, 100_000_000);
    println!("{} ms", start.elapsed().as_millis());
    println!("{attempts} attempts");

    match answer {
        Some(postfix) => {
            let infix =
                stochint::infix_from_postfix(&postfix).expect("search output is well-formed");
            println!("postfix: {postfix}");
            println!("infix:   {infix}");
        }
        None => println!("budget exhausted without a hit"),
    }
}
