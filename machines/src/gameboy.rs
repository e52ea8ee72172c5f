//! Wraps [`pocket_core::core::machine::GameBoy`] with the one piece spec.md
//! §6 leaves to an embedding host: getting a cartridge image off disk. No
//! MAME-style multi-file ROM set or CRC validation here — a Game Boy
//! cartridge dump is a single flat file.

use std::fmt;
use std::fs;
use std::path::Path;

use pocket_core::core::machine::{GameBoy, InputButton, Machine};
use pocket_core::error::CartridgeError;

/// Failure loading a cartridge image from disk, matching the teacher
/// workspace's hand-rolled `RomLoadError` shape (plain enum, manual
/// `Display`, `From<io::Error>`).
#[derive(Debug)]
pub enum RomLoadError {
    Io(std::io::Error),
    Cartridge(CartridgeError),
}

impl fmt::Display for RomLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Cartridge(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RomLoadError {}

impl From<std::io::Error> for RomLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CartridgeError> for RomLoadError {
    fn from(e: CartridgeError) -> Self {
        Self::Cartridge(e)
    }
}

/// The single concrete machine this crate exposes: a [`GameBoy`] plus the
/// path its cartridge was loaded from, so the frontend can derive a window
/// title without reaching back into the ROM bytes.
pub struct GameBoySystem {
    gameboy: GameBoy,
}

impl GameBoySystem {
    /// Build a system with no cartridge loaded yet; `run_frame` is then a
    /// no-op until [`Self::load_rom_file`] or [`Self::load_rom_bytes`]
    /// succeeds (spec.md §7).
    pub fn new() -> Self {
        Self {
            gameboy: GameBoy::new(),
        }
    }

    pub fn load_rom_file(&mut self, path: &Path) -> Result<(), RomLoadError> {
        let image = fs::read(path)?;
        self.load_rom_bytes(&image)
    }

    pub fn load_rom_bytes(&mut self, image: &[u8]) -> Result<(), RomLoadError> {
        self.gameboy.load_rom(image)?;
        Ok(())
    }

    pub fn gameboy(&self) -> &GameBoy {
        &self.gameboy
    }
}

impl Default for GameBoySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for GameBoySystem {
    fn display_size(&self) -> (u32, u32) {
        self.gameboy.display_size()
    }

    fn run_frame(&mut self) {
        self.gameboy.run_frame();
    }

    fn render_frame(&self, buffer: &mut [u32]) {
        self.gameboy.render_frame(buffer);
    }

    fn set_input(&mut self, joypad: u8) {
        self.gameboy.set_input(joypad);
    }

    fn cycle_palette(&mut self) {
        self.gameboy.cycle_palette();
    }

    fn input_map(&self) -> &[InputButton] {
        self.gameboy.input_map()
    }

    fn reset(&mut self) {
        self.gameboy.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rom() -> Vec<u8> {
        vec![0xFFu8; 0x8000]
    }

    #[test]
    fn loading_a_short_image_fails_and_leaves_machine_inert() {
        let mut sys = GameBoySystem::new();
        let err = sys.load_rom_bytes(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, RomLoadError::Cartridge(CartridgeError::TooShort { len: 10 })));
    }

    #[test]
    fn loading_a_valid_image_enables_run_frame() {
        let mut sys = GameBoySystem::new();
        sys.load_rom_bytes(&blank_rom()).unwrap();
        sys.run_frame();
        assert!(sys.gameboy().last_error().is_none());
    }

    #[test]
    fn display_size_matches_gameboy_resolution() {
        let sys = GameBoySystem::new();
        assert_eq!(sys.display_size(), (160, 144));
    }
}
