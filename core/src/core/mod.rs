pub mod component;
pub mod machine;

pub use component::TickSink;
pub use machine::{GameBoy, InputButton, Machine};
