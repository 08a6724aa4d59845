//! VBAT register file (RFVBAT). Retained while VBAT is powered.

use tock_registers::registers::ReadWrite;
use tock_registers::register_structs;

pub use crate::rfsys::{FileRegister, NUM_REGISTERS};
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        (0x00 => pub reg: [ReadWrite<u32, FileRegister::Register>; NUM_REGISTERS]),
        (0x20 => @END),
    }
}

pub const RFVBAT_BASE: usize = 0x4003_E000;

pub const RFVBAT: StaticRef<Registers> =
    unsafe { StaticRef::new(RFVBAT_BASE as *const Registers) };

pub const RFVBAT_BASE_ADDRS: [usize; 1] = [RFVBAT_BASE];
pub const RFVBAT_BASE_PTRS: [StaticRef<Registers>; 1] = [RFVBAT];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x20]);

    #[test]
    fn byte_lanes() {
        let mut backing = Backing([0; 0x20]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.reg[7].modify(FileRegister::HH.val(0xA5) + FileRegister::LL.val(0x5A));
            assert_eq!(regs.reg[7].read(FileRegister::HH), 0xA5);
        }
        let word = u32::from_ne_bytes([backing.0[28], backing.0[29], backing.0[30], backing.0[31]]);
        assert_eq!(word, 0xA500_005A);
    }
}
