//! Kernels touch no shared state, so calls on disjoint buffers can run in parallel.

use rayon::prelude::*;
use vecaux::{map, sum, zip};

#[test]
fn test_parallel_calls_on_disjoint_chunks() {
    let a: Vec<f64> = (0..100_000).map(|i| i as f64).collect();
    let b: Vec<f64> = (0..100_000).map(|i| (i % 7) as f64).collect();
    let mut r = vec![0.0f64; a.len()];

    r.par_chunks_mut(4096)
        .zip(a.par_chunks(4096))
        .zip(b.par_chunks(4096))
        .for_each(|((out, x), y)| zip(0, x, y, out).unwrap());

    for (k, &got) in r.iter().enumerate() {
        assert_eq!(got, k as f64 + (k % 7) as f64, "index {k}");
    }
}

#[test]
fn test_parallel_map_then_sum() {
    let x: Vec<f32> = (0..50_000).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let mut magnitudes = vec![0.0f32; x.len()];

    magnitudes
        .par_chunks_mut(1000)
        .zip(x.par_chunks(1000))
        .for_each(|(out, input)| map(3, input, out).unwrap());

    let partials: Vec<f32> = magnitudes
        .par_chunks(1000)
        .map(|chunk| {
            let mut r = [0.0f32];
            sum(chunk, &mut r).unwrap();
            r[0]
        })
        .collect();

    let mut total = [0.0f32];
    sum(&partials, &mut total).unwrap();
    assert_eq!(total[0], 50_000.0);
}
