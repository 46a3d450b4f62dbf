pub mod form;
pub mod geometry;
pub mod triangle;
pub mod units;

pub fn version() -> &'static str {
    "0.1.0"
}
