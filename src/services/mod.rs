pub mod intake;
pub mod relay;
pub mod validate;

pub use intake::IntakeService;
