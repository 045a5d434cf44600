pub mod split;

pub use split::{compute_split, RevenueSplitService};
