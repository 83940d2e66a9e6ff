use regex::Regex;
use std::time::Instant;

const REVERSAL_LEN: usize = 1_000_000;
const CONCAT_ITERATIONS: usize = 10_000;
const SEARCH_REPEATS: usize = 10_000;

// Matches exactly five word characters between word boundaries.
const WORD_PATTERN: &str = r"\b\w{5}\b";

fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

fn concatenate_strings(iterations: usize) -> String {
    let mut result = String::new();
    for i in 0..iterations {
        result.push_str(&i.to_string());
    }
    result
}

fn pattern_search(text: &str, pattern: &str) -> usize {
    let re = Regex::new(pattern).unwrap();
    re.find_iter(text).count()
}

pub fn run_benchmark() {
    let large = "a".repeat(REVERSAL_LEN);
    let start = Instant::now();
    let _reversed = reverse_string(&large);
    let elapsed = start.elapsed().as_millis();

    println!("Test: String Reversal (1M chars)");
    println!("Execution time: {elapsed} ms");
    println!("String length: {}", large.len());
    println!();

    let start = Instant::now();
    let concatenated = concatenate_strings(CONCAT_ITERATIONS);
    let elapsed = start.elapsed().as_millis();

    println!("Test: String Concatenation (10K iterations)");
    println!("Execution time: {elapsed} ms");
    println!("Result length: {}", concatenated.len());
    println!();

    let text = "Lorem ipsum dolor sit amet ".repeat(SEARCH_REPEATS);
    let start = Instant::now();
    let matches = pattern_search(&text, WORD_PATTERN);
    let elapsed = start.elapsed().as_millis();

    println!("Test: Pattern Search");
    println!("Execution time: {elapsed} ms");
    println!("Matches found: {matches}");
}
