//! Library to calculate difficulty ratings and TT for [TootTally] charts.
//!
//! ## Description
//!
//! Notes of a chart are timed for each of the seven precomputed playback speeds
//! and reduced into aim and tap strains. The strains are summarized into
//! analytics which in turn yield a star rating per speed. Ratings for speeds in
//! between, for partially completed plays, and for plays with modifiers are
//! derived from those precomputed values.
//!
//! ## Usage
//!
//! ```
//! use tootally_pp::{Chart, Modifiers, TTProvider};
//!
//! // Decode the chart
//! let bytes = std::fs::read("./resources/test.tmb").unwrap();
//! let chart = Chart::from_slice(&bytes).unwrap();
//!
//! // Calculate strains and ratings for all speeds
//! let performances = chart.performances();
//!
//! // Star rating of a full play at 1.1x
//! let stars = performances.diff_rating(1.1);
//!
//! // TT of a 97% play at 1.25x with hidden
//! let result = performances
//!     .tt()
//!     .speed(1.25)
//!     .percent(0.97)
//!     .modifiers(u32::HD)
//!     .calculate();
//!
//! // The star rating can be re-used as long as speed,
//! // percent, and modifiers stay the same.
//! let tt = performances
//!     .tt()
//!     .stars(result.stars())
//!     .speed(1.25)
//!     .percent(0.97)
//!     .modifiers(u32::HD)
//!     .calculate()
//!     .tt();
//!
//! println!("Stars: {stars} | TT: {tt}");
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Charts are read synchronously. |
//! | `async_tokio` | Charts are read asynchronously through `tokio`. | [`tokio`]
//! | `async_std` | Charts are read asynchronously through `async-std`. | [`async-std`]
//! | `parallel` | All speed tiers of a chart are calculated in parallel. | [`rayon`]
//! | `tracing` | Any error encountered during chart decoding will be logged through `tracing::error`, calculated speed tiers through `tracing::debug`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [TootTally]: https://toottally.com
//! [`tokio`]: https://docs.rs/tokio
//! [`async-std`]: https://docs.rs/async-std
//! [`rayon`]: https://docs.rs/rayon
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::float_cmp
)]

#[cfg(all(feature = "async_tokio", feature = "async_std"))]
compile_error!("Only one of the features `async_tokio` and `async_std` can be enabled");

/// Chart decoding.
pub mod parse;

mod data_vector;
mod math_util;
mod modifiers;
mod performances;
mod speed;
mod strain;
mod tt;

pub use data_vector::{DataVector, DataVectorAnalytics, MIN_WEIGHT_SUM};
pub use modifiers::{modifiers_from_names, Modifiers, FL_WEIGHTS, HD_WEIGHTS};
pub use parse::{hash, Chart, ChartNote, Note, ParseError, ParseResult};
pub use performances::{
    combine_ratings, skill_rating, ChartPerformances, TierPerformance, MACC, MAP,
};
pub use speed::{SpeedTier, GAME_SPEED};
pub use strain::{strains, Strains, CHEESABLE_THRESHOLD, WEIGHTS};
pub use tt::{
    base_tt, lerp_diff, score_tt, score_tt_from_ratings, TTCalculator, TTProvider, TTResult,
};
