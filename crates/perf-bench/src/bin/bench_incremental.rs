use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let inputs = generate_benchmark_inputs();

    let start_time = Instant::now();
    let mut checksum: f64 = 0.0;

    // One multiplication per term; the running power never leaves a register.
    for x in inputs {
        checksum += ln_incremental(x, TERMS);
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Incremental Benchmark Results ({} Evals x {} Terms) ---",
        NUM_EVALS, TERMS
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
