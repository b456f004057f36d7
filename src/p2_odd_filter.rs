//! Pattern 2: Odd Filter
//! Example: keeping only the odd numbers of a sequence, two ways.
//!
//! Run with: cargo run --bin p2_odd_filter

use sequence_transforms::{filter_odd, filter_odd_by_remainder, filter_odd_in_place};

fn main() {
    println!("=== Odd Filter ===\n");

    let numbers: [i64; 9] = [28, 447, 14, 47, 45, 74, 474, 2, 1];
    println!("Input: {:?}", numbers);

    println!("\n=== Direct Predicate ===\n");

    let odds = filter_odd(&numbers);
    println!("n % 2 != 0: {:?}", odds);

    println!("\n=== Explicit Remainder Predicate ===\n");

    let by_remainder = filter_odd_by_remainder(&numbers);
    println!("rem_euclid(2) == 1: {:?}", by_remainder);
    println!("Realizations agree: {}", odds == by_remainder);

    println!("\n=== Consecutive Run ===\n");

    let run: Vec<i64> = (1..=11).collect();
    println!("Input: {:?}", run);
    println!("Odds:  {:?}", filter_odd(&run));

    println!("\n=== Zero and Negatives ===\n");

    let tricky: [i64; 6] = [-3, -2, -1, 0, 1, 2];
    println!("Input: {:?}", tricky);
    println!("Odds:  {:?}", filter_odd(&tricky));

    println!("\n=== In-Place Variant ===\n");

    let mut buffer = numbers.to_vec();
    filter_odd_in_place(&mut buffer);
    println!("retain: {:?}", buffer);

    println!("\n=== Key Points ===");
    println!("1. filter keeps elements in their original relative order");
    println!("2. rem_euclid(2) is always 0 or 1, so == 1 is the explicit oddness test");
    println!("3. n % 2 == 1 would miss negative odds; compare % 2 against 0 instead");
    println!("4. retain filters in place without allocating");
}
