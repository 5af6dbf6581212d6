pub mod request_generator;
pub mod scaler;
pub mod size;
