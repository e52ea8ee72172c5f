use std::path::PathBuf;

use clap::Parser;
use pocket_core::core::machine::Machine;
use pocket_machines::GameBoySystem;

mod emulator;
mod input;
mod video;

/// A Game Boy-compatible handheld console emulator.
#[derive(Parser)]
#[command(name = "pocketboy")]
struct Cli {
    /// Path to a cartridge ROM image.
    rom: PathBuf,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    scale: u32,
}

fn main() {
    let cli = Cli::parse();

    let mut system = GameBoySystem::new();
    system
        .load_rom_file(&cli.rom)
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", cli.rom.display()));

    let key_map = input::default_key_map(system.input_map());
    system.reset();
    emulator::run(&mut system, &key_map, cli.scale);
}
