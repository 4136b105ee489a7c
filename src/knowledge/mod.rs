//! Static per-destination landmark table

pub mod landmarks;

pub use landmarks::{landmarks_for, title_case, Landmark};
