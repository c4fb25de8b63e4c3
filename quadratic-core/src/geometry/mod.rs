pub mod bezier;
pub mod interval;
pub mod quadratic;
pub mod r2;
