// Cleaning service: the linear pipeline plus its stage helpers.
pub mod cleaning;

pub use cleaning::{clean, try_clean};
