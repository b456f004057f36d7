//! Pattern 1: Scale By Constant
//! Example: multiplying every element of a sequence by 5, three ways.
//!
//! Run with: cargo run --bin p1_scale_by_constant

use sequence_transforms::{
    scale_in_place, scale_with_for_loop, scale_with_index_loop, scale_with_map, SCALE_FACTOR,
};

fn main() {
    println!("=== Scale By Constant ===\n");

    let numbers: [i64; 9] = [28, 447, 14, 47, 45, 74, 474, 2, 1];
    println!("Input:  {:?}", numbers);
    println!("Factor: {}", SCALE_FACTOR);

    println!("\n=== Iterator Map ===\n");

    let mapped = scale_with_map(&numbers, SCALE_FACTOR);
    println!("map + collect: {:?}", mapped);

    println!("\n=== Counted Index Loop ===\n");

    let indexed = scale_with_index_loop(&numbers, SCALE_FACTOR);
    println!("for i in 0..len: {:?}", indexed);

    println!("\n=== Per-Element Loop ===\n");

    let by_element = scale_with_for_loop(&numbers, SCALE_FACTOR);
    println!("for value in slice: {:?}", by_element);

    println!("\n=== Equivalence ===\n");

    println!("map == index loop:   {}", mapped == indexed);
    println!("map == element loop: {}", mapped == by_element);

    println!("\n=== In-Place Variant ===\n");

    let mut buffer = numbers.to_vec();
    scale_in_place(&mut buffer, SCALE_FACTOR);
    println!("iter_mut rewrite: {:?}", buffer);

    println!("\n=== Key Points ===");
    println!("1. map + collect expresses the whole transform in one line");
    println!("2. The loops build the same vector one push at a time");
    println!("3. All realizations agree in value and order");
    println!("4. iter_mut rewrites the buffer without allocating");
}
