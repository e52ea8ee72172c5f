pub mod gameboy;

pub use gameboy::{GameBoySystem, RomLoadError};
