pub mod cell;
pub mod pattern;
