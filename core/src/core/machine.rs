use crate::cpu::Cpu;
use crate::error::{CartridgeError, CoreError};
use crate::memory::MemoryBus;
use crate::ppu::{HEIGHT, WIDTH};

/// One machine-observed frame's worth of CPU cycles (spec.md §2).
const CYCLES_PER_FRAME: i32 = 70_224;

/// Describes a single input button the machine accepts, for a host's
/// keybinding UI. `id` is the bit position consumed by `set_input`, not an
/// opaque machine-defined code — there is only one kind of machine here.
pub struct InputButton {
    pub id: u8,
    pub name: &'static str,
}

/// The eight joypad bits (spec.md §6), bit 0 = Right .. bit 7 = Start.
const INPUT_MAP: [InputButton; 8] = [
    InputButton { id: 0, name: "Right" },
    InputButton { id: 1, name: "Left" },
    InputButton { id: 2, name: "Up" },
    InputButton { id: 3, name: "Down" },
    InputButton { id: 4, name: "A" },
    InputButton { id: 5, name: "B" },
    InputButton { id: 6, name: "Select" },
    InputButton { id: 7, name: "Start" },
];

/// Machine-agnostic interface for embedding hosts (spec.md §6's CLI
/// surface). The teacher workspace's `Machine` trait abstracted over
/// several arcade boards; this crate has exactly one implementer, but the
/// trait still gives `pocket-frontend` a stable seam to program against
/// instead of reaching into `GameBoy` fields directly.
pub trait Machine {
    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run one frame's worth of cycles (spec.md §2: 70,224 CPU cycles).
    fn run_frame(&mut self);

    /// Copy the current framebuffer into `buffer` as packed ARGB8888
    /// (spec.md §6). Must be at least `width * height` words.
    fn render_frame(&self, buffer: &mut [u32]);

    /// Replace the joypad state wholesale (spec.md §6: one bit per key,
    /// 0 = pressed). Unlike the teacher's per-button `set_input`, the spec's
    /// external contract is a single byte snapshot.
    fn set_input(&mut self, joypad: u8);

    /// Advance to the next entry of the fixed ARGB palette table.
    fn cycle_palette(&mut self);

    /// Descriptive list of the buttons `set_input`'s bits correspond to.
    fn input_map(&self) -> &[InputButton];

    /// Reset to post-boot power-on state (spec.md §3), keeping the
    /// currently loaded ROM.
    fn reset(&mut self);
}

/// Owns the CPU and memory bus (which in turn owns the PPU, timer, and
/// joypad) — the "thin composition object" of spec.md §2.
pub struct GameBoy {
    cpu: Cpu,
    bus: MemoryBus,
    last_error: Option<CoreError>,
    rom_loaded: bool,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(),
            last_error: None,
            rom_loaded: false,
        }
    }

    /// spec.md §6's "load-rom(bytes)". A failed load leaves the machine
    /// without a ROM; `run_frame` then becomes a no-op (spec.md §7).
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), CartridgeError> {
        self.rom_loaded = false;
        self.bus.load_rom(image)?;
        self.rom_loaded = true;
        Ok(())
    }

    /// The diagnostic left behind by a `bad-opcode` fault, if any
    /// (spec.md §7). Cleared by `reset`.
    pub fn last_error(&self) -> Option<CoreError> {
        self.last_error
    }

    pub fn take_frame_ready(&mut self) -> bool {
        self.bus.take_frame_ready()
    }

    /// Read access to the CPU, for hosts or tests inspecting registers
    /// without threading a getter through `Machine` for every field.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Read access to the memory bus (VRAM/OAM writes for test fixtures go
    /// through `bus_mut`, since there is no instruction-level API for them).
    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }
}

impl Machine for GameBoy {
    fn display_size(&self) -> (u32, u32) {
        (WIDTH as u32, HEIGHT as u32)
    }

    fn run_frame(&mut self) {
        if !self.rom_loaded || self.last_error.is_some() {
            return;
        }

        let mut budget: i32 = CYCLES_PER_FRAME;
        while budget > 0 {
            match self.cpu.step(&mut self.bus) {
                Ok(cycles) => budget -= cycles as i32,
                Err(err) => {
                    self.last_error = Some(err);
                    return;
                }
            }
        }
    }

    fn render_frame(&self, buffer: &mut [u32]) {
        buffer[..WIDTH * HEIGHT].copy_from_slice(self.bus.framebuffer());
    }

    fn set_input(&mut self, joypad: u8) {
        self.bus.set_joypad(joypad);
    }

    fn cycle_palette(&mut self) {
        self.bus.cycle_palette();
    }

    fn input_map(&self) -> &[InputButton] {
        &INPUT_MAP
    }

    fn reset(&mut self) {
        self.cpu = Cpu::new();
        self.bus.reset();
        self.last_error = None;
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_state_matches_spec() {
        let gb = GameBoy::new();
        assert_eq!(gb.cpu.a, 0x01);
        assert_eq!(gb.cpu.f, 0xB0);
        assert_eq!(gb.cpu.pc, 0x0100);
        assert_eq!(gb.cpu.sp, 0xFFFE);
    }

    #[test]
    fn display_size_is_spec_resolution() {
        let gb = GameBoy::new();
        assert_eq!(gb.display_size(), (160, 144));
    }

    /// spec.md §7: a machine with no successfully loaded ROM makes
    /// `run_frame` a no-op rather than executing the empty cartridge's
    /// padding bytes as code.
    #[test]
    fn run_frame_is_a_noop_without_a_loaded_rom() {
        let mut gb = GameBoy::new();
        let pc_before = gb.cpu.pc;
        gb.run_frame();
        assert_eq!(gb.cpu.pc, pc_before);
        assert!(gb.last_error().is_none());
    }

    #[test]
    fn a_failed_load_keeps_run_frame_a_noop() {
        let mut gb = GameBoy::new();
        assert!(gb.load_rom(&[0u8; 10]).is_err());
        let pc_before = gb.cpu.pc;
        gb.run_frame();
        assert_eq!(gb.cpu.pc, pc_before);
    }

    #[test]
    fn a_successful_load_enables_run_frame() {
        let mut gb = GameBoy::new();
        gb.load_rom(&[0xFFu8; 0x8000]).unwrap();
        gb.run_frame();
        assert_ne!(gb.cpu.pc, 0x0100, "the RST-38 loop in an all-0xFF ROM must have executed");
    }
}
