//! Log-Space Normalization Examples
//!
//! This example demonstrates typical log-sum-exp scenarios:
//! - Softmax normalization of unnormalized log-weights
//! - Magnitudes where the naive formula overflows or underflows
//! - Pairwise tree reduction with `logsumexp_pair`
//! - Log-space zeros (`-inf`) and empty-input handling
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use lse::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), LseError> {
    println!("{}", "=".repeat(60));
    println!("Log-Sum-Exp - Log-Space Normalization Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_softmax()?;
    example_2_extreme_magnitudes()?;
    example_3_tree_reduction()?;
    example_4_edge_cases();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

/// Example 1: Softmax from unnormalized log-weights
///
/// `logsumexp` sorts its argument, so work on a copy when the original order
/// is needed afterwards.
#[cfg(feature = "std")]
fn example_1_softmax() -> Result<(), LseError> {
    println!("Example 1: Softmax");
    println!("{}", "-".repeat(60));

    let log_weights = vec![2.0_f64, 1.0, 0.1, -1.5];
    let mut scratch = log_weights.clone();
    let log_norm = logsumexp(&mut scratch)?;

    println!("  log normalizer: {log_norm:.6}");
    for (i, w) in log_weights.iter().enumerate() {
        println!("  p[{i}] = {:.6}", (w - log_norm).exp());
    }
    println!();

    // Expected output:
    //   log normalizer: 2.436735
    //   p[0] = 0.646143
    //   p[1] = 0.237703
    //   p[2] = 0.096643
    //   p[3] = 0.019512
    Ok(())
}

/// Example 2: Magnitudes outside the range of `exp`
#[cfg(feature = "std")]
fn example_2_extreme_magnitudes() -> Result<(), LseError> {
    println!("Example 2: Extreme magnitudes");
    println!("{}", "-".repeat(60));

    let large = [1000.0_f64, 1000.0];
    let naive = large.iter().map(|x| x.exp()).sum::<f64>().ln();
    let stable = logsumexp(&mut large.clone())?;
    println!("  naive  lse([1000, 1000])   = {naive}");
    println!("  stable lse([1000, 1000])   = {stable:.6}");

    let tiny = [-1000.0_f64, -1000.0];
    let naive = tiny.iter().map(|x| x.exp()).sum::<f64>().ln();
    let stable = logsumexp(&mut tiny.clone())?;
    println!("  naive  lse([-1000, -1000]) = {naive}");
    println!("  stable lse([-1000, -1000]) = {stable:.6}");
    println!();

    // Expected output:
    //   naive  lse([1000, 1000])   = inf
    //   stable lse([1000, 1000])   = 1000.693147
    //   naive  lse([-1000, -1000]) = -inf
    //   stable lse([-1000, -1000]) = -999.306853
    Ok(())
}

/// Example 3: Tree-shaped reduction with the pair form
///
/// Combines partial results level by level, as when merging per-block
/// evidence terms.
#[cfg(feature = "std")]
fn example_3_tree_reduction() -> Result<(), LseError> {
    println!("Example 3: Pairwise tree reduction");
    println!("{}", "-".repeat(60));

    let leaves = vec![-3.0_f64, 0.5, 1.25, -0.75, 2.0, -8.0, 0.0];

    let mut level = leaves.clone();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match *pair {
                [a, b] => logsumexp_pair(a, b),
                [a] => a,
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();
    }
    let tree = level[0];

    let sequence = logsumexp(&mut leaves.clone())?;
    println!("  tree reduction: {tree:.12}");
    println!("  sequence form:  {sequence:.12}");
    println!("  difference:     {:.3e}", (tree - sequence).abs());
    println!();

    Ok(())
}

/// Example 4: Log-space zeros and empty input
#[cfg(feature = "std")]
fn example_4_edge_cases() {
    println!("Example 4: Edge cases");
    println!("{}", "-".repeat(60));

    let mut zeros = [f64::NEG_INFINITY; 4];
    println!("  lse([-inf; 4])       = {:?}", logsumexp(&mut zeros));
    println!(
        "  lse_pair(-inf, 5.0)  = {}",
        logsumexp_pair(f64::NEG_INFINITY, 5.0)
    );

    let mut empty: Vec<f64> = Vec::new();
    match logsumexp(&mut empty) {
        Ok(value) => println!("  lse([])              = {value}"),
        Err(e) => println!("  lse([]) failed:      {e}"),
    }
    println!();

    // Expected output:
    //   lse([-inf; 4])       = Ok(-inf)
    //   lse_pair(-inf, 5.0)  = 5
    //   lse([]) failed:      Input sequence is empty (need at least 1 element)
}
