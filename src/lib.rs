//! `warifuri`: weighted, distinct and proportional sampling.
//!
//! Everything draws from a [`UniformSource`], a typed view over a borrowed
//! `rand::Rng`. Views of different numeric types can be cast into one
//! another while sharing the same underlying stream.
//!
//! Exposed modules:
//! - `source`: `UniformSource`, closed `[0, 1]` draws, signs, dice, `choose`.
//! - `frequency`: cumulative frequency tables over weighted items.
//! - `picker`: one weighted pick from a frequency table.
//! - `distinct`: `k` distinct elements of a population, lazily, in draw order.
//! - `shuffle`: Fisher–Yates over a source.
//! - `proportional`: exactly `n` items following a percentage distribution.
//! - `sampler`: `Sampler`, which owns its RNG (thread-local or seeded).

#![forbid(unsafe_code)]

pub mod distinct;
pub mod error;
pub mod frequency;
pub mod picker;
pub mod proportional;
pub mod sampler;
pub mod shuffle;
pub mod source;

pub use distinct::{sample_distinct, Distinct};
pub use error::{Result, SamplingError};
pub use frequency::{Cumulative, FrequencyTable, WeightedItem};
pub use picker::{pick, pick_index};
pub use proportional::{quota, sample_proportional};
pub use sampler::Sampler;
pub use shuffle::shuffle;
pub use source::{with_thread_source, Float, Numeric, UniformSource};
