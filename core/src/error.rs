//! Error types surfaced by the core, per spec.md §7.
//!
//! No `thiserror`/`anyhow` here — matches the teacher workspace's
//! `RomLoadError`, a plain enum with a hand-written `Display` impl.

use std::fmt;

/// Cartridge image failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeError {
    /// The image is shorter than the 16 KiB needed to populate ROM bank 0.
    TooShort { len: usize },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => write!(
                f,
                "ROM image too short: {len} bytes, need at least 16384"
            ),
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Fatal condition encountered while executing emulated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Fetched an opcode with no mapped handler (spec.md §4.1's unmapped
    /// primary-table slots: 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED,
    /// 0xF4, 0xFC, 0xFD).
    BadOpcode { pc: u16, opcode: u8 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadOpcode { pc, opcode } => {
                write!(f, "unknown opcode {opcode:#04x} at PC {pc:#06x}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
