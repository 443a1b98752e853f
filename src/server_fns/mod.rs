mod intake;

pub use intake::*;
