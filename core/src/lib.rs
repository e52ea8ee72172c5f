pub mod core;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod ppu;

pub mod prelude {
    pub use crate::core::machine::{GameBoy, InputButton, Machine};
    pub use crate::cpu::Cpu;
    pub use crate::error::{CartridgeError, CoreError};
    pub use crate::memory::MemoryBus;
    pub use crate::ppu::Ppu;
}
