use rand::Rng;
use std::time::Instant;

const ARRAY_SIZE: usize = 100_000;
const VALUE_BOUND: i32 = 1_000_000;

/// Functional quicksort: middle-element pivot, three-way partition. Kept
/// allocation-heavy on purpose so the workload matches the other language
/// implementations of the suite.
fn quicksort(arr: Vec<i32>) -> Vec<i32> {
    if arr.len() <= 1 {
        return arr;
    }

    let pivot = arr[arr.len() / 2];
    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();

    for &x in &arr {
        if x < pivot {
            left.push(x);
        } else if x == pivot {
            middle.push(x);
        } else {
            right.push(x);
        }
    }

    let mut result = quicksort(left);
    result.extend(middle);
    result.extend(quicksort(right));
    result
}

fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

pub fn run_benchmark() {
    let mut rng = rand::thread_rng();
    let arr: Vec<i32> = (0..ARRAY_SIZE)
        .map(|_| rng.gen_range(0..VALUE_BOUND))
        .collect();

    let start = Instant::now();
    let sorted = quicksort(arr.clone());
    let elapsed = start.elapsed().as_millis();

    println!("Test: Sorting (Quicksort)");
    println!("Array size: {}", arr.len());
    println!("Execution time: {elapsed} ms");
    println!("Correctly sorted: {}", is_sorted(&sorted));
}
