use pocket_core::core::machine::GameBoy;
use pocket_core::memory::MemoryBus;

/// A 32 KiB cartridge image with `program` placed at the reset vector
/// (0x0100) and the rest filled with 0xFF, mirroring how the unit tests in
/// `pocket_core::cpu` build their fixtures.
pub fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut image = vec![0xFFu8; 0x8000];
    image[0x100..0x100 + program.len()].copy_from_slice(program);
    image
}

/// A [`GameBoy`] with `program` loaded at the reset vector, ready to step
/// or run frames through the `Machine` trait.
pub fn machine_with_program(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with_program(program))
        .expect("fixture ROM is long enough");
    gb
}

/// A bare [`MemoryBus`] with `program` loaded, for tests that drive memory
/// and the PPU directly instead of through the full `Machine` surface.
pub fn bus_with_program(program: &[u8]) -> MemoryBus {
    let mut bus = MemoryBus::new();
    bus.load_rom(&rom_with_program(program))
        .expect("fixture ROM is long enough");
    bus
}
