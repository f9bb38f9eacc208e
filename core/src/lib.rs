pub mod geometry;
pub mod paper;

pub fn version() -> &'static str {
    "0.1.0"
}
