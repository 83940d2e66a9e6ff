use rand::Rng;
use std::time::Instant;

const MATRIX_SIZE: usize = 100;

/// Naive triple-loop dense multiply. Both inputs must be non-empty and
/// rectangular with `a` columns == `b` rows.
fn matrix_multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let rows_a = a.len();
    let cols_a = a[0].len();
    let cols_b = b[0].len();

    let mut result = vec![vec![0.0; cols_b]; rows_a];
    for i in 0..rows_a {
        for j in 0..cols_b {
            for k in 0..cols_a {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

fn random_matrix(size: usize) -> Vec<Vec<f64>> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| (0..size).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

pub fn run_benchmark() {
    let a = random_matrix(MATRIX_SIZE);
    let b = random_matrix(MATRIX_SIZE);

    let start = Instant::now();
    let result = matrix_multiply(&a, &b);
    let elapsed = start.elapsed().as_millis();

    println!("Test: Matrix Multiplication");
    println!("Matrix size: {MATRIX_SIZE}x{MATRIX_SIZE}");
    println!("Execution time: {elapsed} ms");
    println!("Result sample (0,0): {:.6}", result[0][0]);
}
