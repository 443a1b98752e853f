mod lead;

pub use lead::*;
