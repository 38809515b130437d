//! Dissimilarities between the boolean codings of vectors.
//!
//! Every element is read as `true` iff it is nonzero, and the kernels only look at the co-occurrence counts of the two codings.

mod counts;
mod mismatch;
mod overlap;

pub use counts::BinaryCounts;
pub use mismatch::{hamming, matching, rogers_tanimoto, sokal_michener};
pub use overlap::{dice, jaccard, kulsinski, russelrao, sokal_sneath, yule};
