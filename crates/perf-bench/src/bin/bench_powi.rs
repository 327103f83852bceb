use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let inputs = generate_benchmark_inputs();

    let start_time = Instant::now();
    let mut checksum: f64 = 0.0;

    // Every term pays for a full exponentiation of z.
    for x in inputs {
        checksum += ln_powi(x, TERMS);
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Powi Benchmark Results ({} Evals x {} Terms) ---",
        NUM_EVALS, TERMS
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
