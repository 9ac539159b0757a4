pub mod risk;
pub mod stats;
pub mod survey;
