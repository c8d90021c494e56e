//! # lse — Numerically stable log-sum-exp for Rust
//!
//! Computes `ln(sum(exp(x_i)))` over a slice of floats without overflow or
//! underflow, plus a two-argument form for pairwise reductions. It is the
//! normalizer behind softmax, log-likelihood mixtures and evidence
//! accumulation in log space.
//!
//! ## Quick Start
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut log_weights = vec![-1.0_f64, 0.5, 2.0, -3.0];
//!
//! // Sorts `log_weights` in place as a side effect
//! let log_norm = logsumexp(&mut log_weights)?;
//!
//! let direct = [-1.0_f64, 0.5, 2.0, -3.0].iter().map(|x| x.exp()).sum::<f64>().ln();
//! assert!((log_norm - direct).abs() < 1e-12);
//! # Result::<(), LseError>::Ok(())
//! ```
//!
//! Large magnitudes stay finite where the naive formula overflows:
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut values = [1000.0_f64, 1000.0];
//! let result = logsumexp(&mut values)?;
//! assert!(result.is_finite());
//!
//! // The pair form gives the same value without sorting
//! assert!((logsumexp_pair(1000.0, 1000.0) - result).abs() < 1e-12);
//! # Result::<(), LseError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations that read the last element return `Result<T, LseError>`:
//!
//! - **`Ok(T)`**: The log-sum-exp. `-inf` if every input is `-inf`.
//! - **`Err(LseError::EmptyInput)`**: The slice was empty.
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut empty: [f64; 0] = [];
//! assert_eq!(logsumexp(&mut empty), Err(LseError::EmptyInput));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; float
//! math then goes through `libm`:
//!
//! ```toml
//! [dependencies]
//! lse = { version = "0.1", default-features = false }
//! ```
//!
//! Nothing in the crate allocates, so `alloc` is not required either.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at `debug`
//! (rejected arguments) and `trace` (entry points, `-inf` short circuits)
//! levels. Install any logger to see them.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - error type and in-place sort.
mod primitives;

// Layer 2: Math - log-sum-exp kernels.
mod math;

// Layer 3: Engine - argument validation.
mod engine;

// High-level checked API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        INSERTION_SORT_MAX_SPAN, LseError, logsumexp, logsumexp_pair, logsumexp_sorted, sort,
        sort_range,
    };
}

pub use api::{LseError, logsumexp, logsumexp_pair, logsumexp_sorted, sort, sort_range};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
