use super::registers::{flag, Cond};
use super::{stack, Cpu};
use crate::memory::MemoryBus;

pub fn test(cpu: &Cpu, cond: Cond) -> bool {
    match cond {
        Cond::NZ => !cpu.flag(flag::Z),
        Cond::Z => cpu.flag(flag::Z),
        Cond::NC => !cpu.flag(flag::C),
        Cond::C => cpu.flag(flag::C),
    }
}

/// `JR cc, s8`. Taken: 12 cycles, not taken: 8.
pub fn jr(cpu: &mut Cpu, bus: &MemoryBus, cond: Option<Cond>) -> u8 {
    let offset = cpu.fetch8(bus) as i8;
    if cond.map(|c| test(cpu, c)).unwrap_or(true) {
        cpu.pc = cpu.pc.wrapping_add(offset as i16 as u16);
        12
    } else {
        8
    }
}

/// `JP cc, a16`. Taken: 16 cycles, not taken: 12.
pub fn jp(cpu: &mut Cpu, bus: &MemoryBus, cond: Option<Cond>) -> u8 {
    let target = cpu.fetch16(bus);
    if cond.map(|c| test(cpu, c)).unwrap_or(true) {
        cpu.pc = target;
        16
    } else {
        12
    }
}

pub fn jp_hl(cpu: &mut Cpu) -> u8 {
    cpu.pc = cpu.hl();
    4
}

/// `CALL cc, a16`. Taken: 24 cycles, not taken: 12.
pub fn call(cpu: &mut Cpu, bus: &mut MemoryBus, cond: Option<Cond>) -> u8 {
    let target = cpu.fetch16(bus);
    if cond.map(|c| test(cpu, c)).unwrap_or(true) {
        let ret = cpu.pc;
        stack::push16(cpu, bus, ret);
        cpu.pc = target;
        24
    } else {
        12
    }
}

/// `RET cc`. Taken: 20 cycles, not taken: 8. Unconditional RET is 16
/// (handled separately by the dispatch table since it has no condition).
pub fn ret(cpu: &mut Cpu, bus: &mut MemoryBus, cond: Option<Cond>) -> u8 {
    match cond {
        Some(c) => {
            if test(cpu, c) {
                cpu.pc = stack::pop16(cpu, bus);
                20
            } else {
                8
            }
        }
        None => {
            cpu.pc = stack::pop16(cpu, bus);
            16
        }
    }
}

pub fn reti(cpu: &mut Cpu, bus: &mut MemoryBus) -> u8 {
    cpu.pc = stack::pop16(cpu, bus);
    cpu.reti();
    16
}

pub fn rst(cpu: &mut Cpu, bus: &mut MemoryBus, vector: u16) -> u8 {
    let ret = cpu.pc;
    stack::push16(cpu, bus, ret);
    cpu.pc = vector;
    16
}
