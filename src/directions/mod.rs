pub mod coordinate;
pub mod direction;
