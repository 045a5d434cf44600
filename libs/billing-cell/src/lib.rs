pub mod models;
pub mod services;

pub use models::{BillingError, Money, RevenueSplit, RevenueSplitPolicy};
pub use services::{compute_split, RevenueSplitService};
