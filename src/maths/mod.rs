pub mod platform;
pub mod scalar;
