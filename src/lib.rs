// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// The gamma family and the shared numerics are always built. The remaining
// families sit behind the `probability_distributions` feature, on by default.

pub mod distributions;

pub mod traits {
    pub mod distribution;
    pub mod uniform_source;
}

pub mod config;

pub mod errors;

pub mod utils;
