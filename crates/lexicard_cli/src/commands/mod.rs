pub mod add;
pub mod list;
pub mod quiz;
pub mod review;
pub mod stats;
