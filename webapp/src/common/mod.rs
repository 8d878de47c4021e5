pub mod observer;
pub mod style;
