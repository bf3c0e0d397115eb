pub mod golden;
pub mod hash;
pub mod number;
