pub mod duration;
pub mod geo;
pub mod id;
