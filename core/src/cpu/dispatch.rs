//! The 512-entry opcode table of spec.md §4.1, flattened into two matches
//! (primary and CB-prefixed) over computed register/operation selectors
//! rather than 512 near-identical stubs (spec.md §9 "Dispatch").

use super::alu;
use super::bit;
use super::branch;
use super::load_store;
use super::registers::{Cond, R16Stack, R8, R16};
use super::stack;
use super::Cpu;
use crate::memory::MemoryBus;

/// Decodes the 3-bit register field shared by `LD r,r'`, `INC r`, `DEC r`,
/// and the ALU-A,r8 block — index 6 is `(HL)`, not a plain register.
fn r8(index: u8) -> R8 {
    match index & 0x07 {
        0 => R8::B,
        1 => R8::C,
        2 => R8::D,
        3 => R8::E,
        4 => R8::H,
        5 => R8::L,
        6 => R8::HLInd,
        _ => R8::A,
    }
}

fn r16(index: u8) -> R16 {
    match index & 0x03 {
        0 => R16::BC,
        1 => R16::DE,
        2 => R16::HL,
        _ => R16::SP,
    }
}

fn r16_stack(index: u8) -> R16Stack {
    match index & 0x03 {
        0 => R16Stack::BC,
        1 => R16Stack::DE,
        2 => R16Stack::HL,
        _ => R16Stack::AF,
    }
}

fn push_stack(cpu: &mut Cpu, bus: &mut MemoryBus, reg: R16Stack) {
    let value = match reg {
        R16Stack::BC => cpu.bc(),
        R16Stack::DE => cpu.de(),
        R16Stack::HL => cpu.hl(),
        R16Stack::AF => cpu.af(),
    };
    stack::push16(cpu, bus, value);
}

fn pop_stack(cpu: &mut Cpu, bus: &mut MemoryBus, reg: R16Stack) {
    let value = stack::pop16(cpu, bus);
    match reg {
        R16Stack::BC => cpu.set_bc(value),
        R16Stack::DE => cpu.set_de(value),
        R16Stack::HL => cpu.set_hl(value),
        R16Stack::AF => cpu.set_af(value),
    }
}

/// Applies one of the eight `ALU A, n` operations in the order the hardware
/// encodes them: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
fn alu_op(index: u8, cpu: &mut Cpu, rhs: u8) {
    match index & 0x07 {
        0 => alu::add(cpu, rhs),
        1 => alu::adc(cpu, rhs),
        2 => alu::sub(cpu, rhs),
        3 => alu::sbc(cpu, rhs),
        4 => alu::and(cpu, rhs),
        5 => alu::xor(cpu, rhs),
        6 => alu::or(cpu, rhs),
        _ => alu::cp(cpu, rhs),
    }
}

fn cond(index: u8) -> Cond {
    match index & 0x03 {
        0 => Cond::NZ,
        1 => Cond::Z,
        2 => Cond::NC,
        _ => Cond::C,
    }
}

/// Unmapped primary-table slots (spec.md §4.1, §7, §9): diagnostic + halt.
fn is_unmapped(opcode: u8) -> bool {
    matches!(
        opcode,
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD
    )
}

pub fn execute_primary(cpu: &mut Cpu, bus: &mut MemoryBus, opcode: u8) -> Option<u8> {
    if is_unmapped(opcode) {
        return None;
    }

    Some(match opcode {
        0x00 => 4, // NOP

        0x01 | 0x11 | 0x21 | 0x31 => {
            let value = cpu.fetch16(bus);
            cpu.write_r16(r16(opcode >> 4), value);
            12
        }
        0x02 => {
            bus.write8(cpu.bc(), cpu.a);
            8
        }
        0x12 => {
            bus.write8(cpu.de(), cpu.a);
            8
        }
        0x22 => {
            let addr = cpu.hl();
            bus.write8(addr, cpu.a);
            cpu.set_hl(addr.wrapping_add(1));
            8
        }
        0x32 => {
            let addr = cpu.hl();
            bus.write8(addr, cpu.a);
            cpu.set_hl(addr.wrapping_sub(1));
            8
        }
        0x0A => {
            cpu.a = bus.read8(cpu.bc());
            8
        }
        0x1A => {
            cpu.a = bus.read8(cpu.de());
            8
        }
        0x2A => {
            let addr = cpu.hl();
            cpu.a = bus.read8(addr);
            cpu.set_hl(addr.wrapping_add(1));
            8
        }
        0x3A => {
            let addr = cpu.hl();
            cpu.a = bus.read8(addr);
            cpu.set_hl(addr.wrapping_sub(1));
            8
        }

        0x03 | 0x13 | 0x23 | 0x33 => {
            let reg = r16(opcode >> 4);
            let value = cpu.read_r16(reg).wrapping_add(1);
            cpu.write_r16(reg, value);
            8
        }
        0x0B | 0x1B | 0x2B | 0x3B => {
            let reg = r16((opcode >> 4) & 0x03);
            let value = cpu.read_r16(reg).wrapping_sub(1);
            cpu.write_r16(reg, value);
            8
        }
        0x09 | 0x19 | 0x29 | 0x39 => {
            let rhs = cpu.read_r16(r16(opcode >> 4));
            alu::add_hl(cpu, rhs);
            8
        }

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            load_store::inc_r8(cpu, bus, r8(opcode >> 3))
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            load_store::dec_r8(cpu, bus, r8(opcode >> 3))
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            load_store::ld_r_d8(cpu, bus, r8(opcode >> 3))
        }

        0x07 => {
            cpu.a = bit::rlc(cpu, cpu.a, true);
            4
        }
        0x0F => {
            cpu.a = bit::rrc(cpu, cpu.a, true);
            4
        }
        0x17 => {
            cpu.a = bit::rl(cpu, cpu.a, true);
            4
        }
        0x1F => {
            cpu.a = bit::rr(cpu, cpu.a, true);
            4
        }

        0x08 => {
            let addr = cpu.fetch16(bus);
            bus.write8(addr, cpu.sp as u8);
            bus.write8(addr.wrapping_add(1), (cpu.sp >> 8) as u8);
            20
        }

        0x10 => {
            let _ = cpu.fetch8(bus); // STOP's mandatory (ignored) operand byte
            cpu.stop();
            4
        }

        0x18 => branch::jr(cpu, bus, None),
        0x20 | 0x28 | 0x30 | 0x38 => branch::jr(cpu, bus, Some(cond((opcode >> 3) & 0x03))),

        0x27 => {
            alu::daa(cpu);
            4
        }
        0x2F => {
            alu::cpl(cpu);
            4
        }
        0x37 => {
            alu::scf(cpu);
            4
        }
        0x3F => {
            alu::ccf(cpu);
            4
        }

        0x76 => {
            cpu.halt(bus);
            4
        }
        0x40..=0x7F => {
            let dst = r8(opcode >> 3);
            let src = r8(opcode);
            load_store::ld_r_r(cpu, bus, dst, src)
        }

        0x80..=0xBF => {
            let rhs = cpu.read_r8(bus, r8(opcode));
            alu_op(opcode >> 3, cpu, rhs);
            if r8(opcode) == R8::HLInd {
                8
            } else {
                4
            }
        }

        0xC0 | 0xC8 | 0xD0 | 0xD8 => branch::ret(cpu, bus, Some(cond((opcode >> 3) & 0x03))),
        0xC9 => branch::ret(cpu, bus, None),
        0xD9 => branch::reti(cpu, bus),

        0xC1 | 0xD1 | 0xE1 | 0xF1 => {
            pop_stack(cpu, bus, r16_stack(opcode >> 4));
            12
        }
        0xC5 | 0xD5 | 0xE5 | 0xF5 => {
            push_stack(cpu, bus, r16_stack(opcode >> 4));
            16
        }

        0xC2 | 0xCA | 0xD2 | 0xDA => branch::jp(cpu, bus, Some(cond((opcode >> 3) & 0x03))),
        0xC3 => branch::jp(cpu, bus, None),
        0xE9 => branch::jp_hl(cpu),

        0xC4 | 0xCC | 0xD4 | 0xDC => branch::call(cpu, bus, Some(cond((opcode >> 3) & 0x03))),
        0xCD => branch::call(cpu, bus, None),

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            branch::rst(cpu, bus, (opcode & 0x38) as u16)
        }

        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            let rhs = cpu.fetch8(bus);
            alu_op((opcode - 0xC6) / 8, cpu, rhs);
            8
        }

        0xE0 => {
            let offset = cpu.fetch8(bus);
            bus.write8(0xFF00 | offset as u16, cpu.a);
            12
        }
        0xF0 => {
            let offset = cpu.fetch8(bus);
            cpu.a = bus.read8(0xFF00 | offset as u16);
            12
        }
        0xE2 => {
            bus.write8(0xFF00 | cpu.c as u16, cpu.a);
            8
        }
        0xF2 => {
            cpu.a = bus.read8(0xFF00 | cpu.c as u16);
            8
        }
        0xEA => {
            let addr = cpu.fetch16(bus);
            bus.write8(addr, cpu.a);
            16
        }
        0xFA => {
            let addr = cpu.fetch16(bus);
            cpu.a = bus.read8(addr);
            16
        }

        0xE8 => {
            let offset = cpu.fetch8(bus) as i8;
            cpu.sp = alu::add_sp_signed(cpu, offset);
            16
        }
        0xF8 => {
            let offset = cpu.fetch8(bus) as i8;
            let result = alu::add_sp_signed(cpu, offset);
            cpu.set_hl(result);
            12
        }
        0xF9 => {
            cpu.sp = cpu.hl();
            8
        }

        0xF3 => {
            cpu.di();
            4
        }
        0xFB => {
            cpu.ei();
            4
        }

        _ => return None,
    })
}

/// Decodes the CB-prefixed table: bits [7:6] select the quadrant (rotate
/// family / BIT / RES / SET), bits [5:3] the bit index (or rotate kind),
/// bits [2:0] the operand register (spec.md §4.1 "CB table generators").
pub fn execute_cb(cpu: &mut Cpu, bus: &mut MemoryBus, opcode: u8) -> Option<u8> {
    let reg = r8(opcode);
    let n = (opcode >> 3) & 0x07;
    let base_cycles = if reg == R8::HLInd { 16 } else { 8 };

    Some(match opcode >> 6 {
        0 => {
            let value = cpu.read_r8(bus, reg);
            let result = match n {
                0 => bit::rlc(cpu, value, false),
                1 => bit::rrc(cpu, value, false),
                2 => bit::rl(cpu, value, false),
                3 => bit::rr(cpu, value, false),
                4 => bit::sla(cpu, value),
                5 => bit::sra(cpu, value),
                6 => bit::swap(cpu, value),
                _ => bit::srl(cpu, value),
            };
            cpu.write_r8(bus, reg, result);
            base_cycles
        }
        1 => {
            let value = cpu.read_r8(bus, reg);
            bit::bit(cpu, value, n);
            if reg == R8::HLInd {
                12
            } else {
                8
            }
        }
        2 => {
            let value = cpu.read_r8(bus, reg);
            cpu.write_r8(bus, reg, bit::res(value, n));
            base_cycles
        }
        _ => {
            let value = cpu.read_r8(bus, reg);
            cpu.write_r8(bus, reg, bit::set(value, n));
            base_cycles
        }
    })
}
