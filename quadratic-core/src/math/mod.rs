pub mod complex;
pub mod cubic;
pub mod is_zero;
pub mod quadratic;
