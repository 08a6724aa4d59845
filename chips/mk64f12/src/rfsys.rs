//! System register file (RFSYS). 32 bytes that survive VLLS modes.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const NUM_REGISTERS: usize = 8;

register_structs! {
    pub Registers {
        (0x00 => pub reg: [ReadWrite<u32, FileRegister::Register>; NUM_REGISTERS]),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    /// Byte lanes of one register file word. Also used by [`crate::rfvbat`].
    pub FileRegister [
        HH OFFSET(24) NUMBITS(8) [],
        HL OFFSET(16) NUMBITS(8) [],
        LH OFFSET(8) NUMBITS(8) [],
        LL OFFSET(0) NUMBITS(8) []
    ]
];

pub const RFSYS_BASE: usize = 0x4004_1000;

pub const RFSYS: StaticRef<Registers> = unsafe { StaticRef::new(RFSYS_BASE as *const Registers) };

pub const RFSYS_BASE_ADDRS: [usize; 1] = [RFSYS_BASE];
pub const RFSYS_BASE_PTRS: [StaticRef<Registers>; 1] = [RFSYS];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x20]);

    #[test]
    fn file_register_bytes() {
        let mut backing = Backing([0; 0x20]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.reg[NUM_REGISTERS - 1].write(
                FileRegister::HH.val(0xDE)
                    + FileRegister::HL.val(0xAD)
                    + FileRegister::LH.val(0xBE)
                    + FileRegister::LL.val(0xEF),
            );
            assert_eq!(regs.reg[NUM_REGISTERS - 1].read(FileRegister::HL), 0xAD);
        }
        assert_eq!(&backing.0[0x1C..0x20], &[0xEF, 0xBE, 0xAD, 0xDE]);
    }
}
