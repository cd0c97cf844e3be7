pub mod pointer;
pub mod tilt;

pub use pointer::{wire_pointer, SharedPointer};
pub use tilt::wire_card_tilt;
