//! Crossbar switch (AXBS).
//!
//! Arbitrates between six bus masters and five slave ports.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    /// AXBS memory map.
    pub Registers {
        (0x000 => pub slave: [SlavePort; 5]),
        (0x500 => _reserved0),
        /// Master general purpose control registers
        (0x800 => pub mgpcr0: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0x804 => _reserved1),
        (0x900 => pub mgpcr1: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0x904 => _reserved2),
        (0xA00 => pub mgpcr2: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0xA04 => _reserved3),
        (0xB00 => pub mgpcr3: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0xB04 => _reserved4),
        (0xC00 => pub mgpcr4: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0xC04 => _reserved5),
        (0xD00 => pub mgpcr5: ReadWrite<u32, MasterGeneralPurposeControl::Register>),
        (0xD04 => @END),
    },

    pub SlavePort {
        /// Priority register
        (0x00 => pub prs: ReadWrite<u32, SlavePriority::Register>),
        (0x04 => _reserved0),
        /// Control register
        (0x10 => pub crs: ReadWrite<u32, SlaveControl::Register>),
        (0x14 => _reserved1),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    /// Master priority on a slave port, 0 is highest
    pub SlavePriority [
        M5 OFFSET(20) NUMBITS(3) [],
        M4 OFFSET(16) NUMBITS(3) [],
        M3 OFFSET(12) NUMBITS(3) [],
        M2 OFFSET(8) NUMBITS(3) [],
        M1 OFFSET(4) NUMBITS(3) [],
        M0 OFFSET(0) NUMBITS(3) []
    ],
    pub SlaveControl [
        /// Read Only
        RO OFFSET(31) NUMBITS(1) [],
        /// Halt Low Priority
        HLP OFFSET(30) NUMBITS(1) [],
        /// Arbitration Mode
        ARB OFFSET(8) NUMBITS(2) [
            Fixed = 0,
            RoundRobin = 1
        ],
        /// Parking Control
        PCTL OFFSET(4) NUMBITS(2) [
            Park = 0,
            Last = 1,
            LowPowerPark = 2
        ],
        /// Master the slave port parks on
        PARK OFFSET(0) NUMBITS(3) []
    ],
    pub MasterGeneralPurposeControl [
        /// Arbitrates On Undefined Length Bursts
        AULB OFFSET(0) NUMBITS(3) [
            NoArbitration = 0,
            AfterFourBeats = 2,
            AfterEightBeats = 3,
            AfterSixteenBeats = 4
        ]
    ]
];

pub const AXBS_BASE: usize = 0x4000_4000;

pub const AXBS: StaticRef<Registers> = unsafe { StaticRef::new(AXBS_BASE as *const Registers) };

pub const AXBS_BASE_ADDRS: [usize; 1] = [AXBS_BASE];
pub const AXBS_BASE_PTRS: [StaticRef<Registers>; 1] = [AXBS];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0xD04]);

    #[test]
    fn slave_ports_and_master_controls() {
        assert_eq!(size_of::<SlavePort>(), 0x100);
        assert_eq!(offset_of!(Registers, mgpcr0), 0x800);
        assert_eq!(offset_of!(Registers, mgpcr5), 0xD00);

        let mut backing = Backing([0; 0xD04]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.slave[2].prs.write(SlavePriority::M0.val(5) + SlavePriority::M3.val(1));
            regs.slave[2]
                .crs
                .write(SlaveControl::ARB::RoundRobin + SlaveControl::PCTL::Last);
            regs.mgpcr3.write(MasterGeneralPurposeControl::AULB::AfterEightBeats);
            assert_eq!(regs.slave[2].prs.read(SlavePriority::M0), 5);
            assert_eq!(regs.slave[0].prs.get(), 0);
        }
        assert_eq!(&backing.0[0x200..0x204], &[0x05, 0x10, 0, 0]);
        assert_eq!(&backing.0[0x210..0x212], &[0x10, 0x01]);
        assert_eq!(backing.0[0xB00], 3);
    }
}
