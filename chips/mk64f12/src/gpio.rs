//! General-Purpose Input/Output (GPIO).
//!
//! Each port has 32 pins, one bit per pin in every register. Pin muxing and
//! interrupts live in [`crate::port`].

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::register_structs;

use crate::static_ref::StaticRef;

register_structs! {
    /// GPIO memory map.
    pub Registers {
        /// Port Data Output Register
        (0x00 => pub pdor: ReadWrite<u32>),
        /// Port Set Output Register
        (0x04 => pub psor: WriteOnly<u32>),
        /// Port Clear Output Register
        (0x08 => pub pcor: WriteOnly<u32>),
        /// Port Toggle Output Register
        (0x0C => pub ptor: WriteOnly<u32>),
        /// Port Data Input Register
        (0x10 => pub pdir: ReadOnly<u32>),
        /// Port Data Direction Register, 1 is output
        (0x14 => pub pddr: ReadWrite<u32>),
        (0x18 => @END),
    }
}

pub const PTA_BASE: usize = 0x400F_F000;
pub const PTB_BASE: usize = 0x400F_F040;
pub const PTC_BASE: usize = 0x400F_F080;
pub const PTD_BASE: usize = 0x400F_F0C0;
pub const PTE_BASE: usize = 0x400F_F100;

pub const PTA: StaticRef<Registers> = unsafe { StaticRef::new(PTA_BASE as *const Registers) };
pub const PTB: StaticRef<Registers> = unsafe { StaticRef::new(PTB_BASE as *const Registers) };
pub const PTC: StaticRef<Registers> = unsafe { StaticRef::new(PTC_BASE as *const Registers) };
pub const PTD: StaticRef<Registers> = unsafe { StaticRef::new(PTD_BASE as *const Registers) };
pub const PTE: StaticRef<Registers> = unsafe { StaticRef::new(PTE_BASE as *const Registers) };

pub const GPIO_BASE_ADDRS: [usize; 5] = [PTA_BASE, PTB_BASE, PTC_BASE, PTD_BASE, PTE_BASE];
pub const GPIO_BASE_PTRS: [StaticRef<Registers>; 5] = [PTA, PTB, PTC, PTD, PTE];

/// Mask selecting one pin of a port.
pub const fn pin_mask(pin: u32) -> u32 {
    1 << (pin & 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x18]);

    #[test]
    fn ports_are_sixty_four_bytes_apart() {
        for pair in GPIO_BASE_ADDRS.windows(2) {
            assert_eq!(pair[1] - pair[0], 0x40);
        }
    }

    #[test]
    fn pin_mask_wraps_at_thirty_two() {
        assert_eq!(pin_mask(0), 1);
        assert_eq!(pin_mask(17), 1 << 17);
        assert_eq!(pin_mask(33), 1 << 1);
    }

    #[test]
    fn set_clear_toggle_land_in_separate_words() {
        let mut backing = Backing([0; 0x18]);
        backing.0[0x10..0x14].copy_from_slice(&0x0000_8001u32.to_le_bytes());
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.psor.set(pin_mask(5));
            regs.pcor.set(pin_mask(6));
            regs.ptor.set(pin_mask(7));
            regs.pddr.set(pin_mask(5) | pin_mask(6));
            assert_eq!(regs.pdir.get(), 0x0000_8001);
            assert_eq!(regs.pdor.get(), 0);
        }
        assert_eq!(backing.0[0x04], 0x20);
        assert_eq!(backing.0[0x08], 0x40);
        assert_eq!(backing.0[0x0C], 0x80);
        assert_eq!(backing.0[0x14], 0x60);
    }
}
