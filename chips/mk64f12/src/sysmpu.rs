//! System Memory Protection Unit (SYSMPU).
//!
//! Twelve region descriptors. Writing `word[n].word2` through the descriptor
//! clears its valid bit; `rgdaac[n]` is an alias of the same access rights
//! that leaves the descriptor valid.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const NUM_SLAVE_PORTS: usize = 5;
pub const NUM_REGIONS: usize = 12;

register_structs! {
    /// SYSMPU memory map.
    pub Registers {
        (0x000 => pub cesr: ReadWrite<u32, ControlErrorStatus::Register>),
        (0x004 => _reserved0),
        /// Error address and detail, one pair per slave port
        (0x010 => pub sp: [SlavePortError; NUM_SLAVE_PORTS]),
        (0x038 => _reserved1),
        (0x400 => pub word: [RegionDescriptor; NUM_REGIONS]),
        (0x4C0 => _reserved2),
        /// Region Descriptor Alternate Access Control
        (0x800 => pub rgdaac: [ReadWrite<u32, RegionAccess::Register>; NUM_REGIONS]),
        (0x830 => @END),
    },

    pub SlavePortError {
        (0x0 => pub ear: ReadOnly<u32>),
        (0x4 => pub edr: ReadOnly<u32, ErrorDetail::Register>),
        (0x8 => @END),
    },

    pub RegionDescriptor {
        (0x0 => pub word0: ReadWrite<u32, RegionStart::Register>),
        (0x4 => pub word1: ReadWrite<u32, RegionEnd::Register>),
        (0x8 => pub word2: ReadWrite<u32, RegionAccess::Register>),
        (0xC => pub word3: ReadWrite<u32, RegionValid::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub ControlErrorStatus [
        /// Slave Port n Error, bit 31 is port 0
        SPERR OFFSET(27) NUMBITS(5) [],
        /// Hardware Revision Level
        HRL OFFSET(16) NUMBITS(4) [],
        /// Number Of Slave Ports
        NSP OFFSET(12) NUMBITS(4) [],
        /// Number Of Region Descriptors
        NRGD OFFSET(8) NUMBITS(4) [
            Regions8 = 0,
            Regions12 = 1,
            Regions16 = 2
        ],
        /// Valid, enables the MPU
        VLD OFFSET(0) NUMBITS(1) []
    ],
    pub ErrorDetail [
        /// Error Access Control Detail, one bit per region descriptor
        EACD OFFSET(16) NUMBITS(16) [],
        /// Error Process Identification
        EPID OFFSET(8) NUMBITS(8) [],
        /// Error Master Number
        EMN OFFSET(4) NUMBITS(4) [],
        /// Error Attributes
        EATTR OFFSET(1) NUMBITS(3) [
            UserInstruction = 0,
            UserData = 1,
            SupervisorInstruction = 2,
            SupervisorData = 3
        ],
        /// Error Read/Write
        ERW OFFSET(0) NUMBITS(1) [
            Read = 0,
            Write = 1
        ]
    ],
    pub RegionStart [
        /// Start Address, 32-byte granular
        SRTADDR OFFSET(5) NUMBITS(27) []
    ],
    pub RegionEnd [
        /// End Address, the low five bits read as ones
        ENDADDR OFFSET(5) NUMBITS(27) []
    ],
    /// Per-master access rights. Masters 0-3 get user (`UM`: read, write,
    /// execute) and supervisor (`SM`) permissions plus a process identifier
    /// enable; masters 4-7 get read and write enables only.
    pub RegionAccess [
        M7RE OFFSET(31) NUMBITS(1) [],
        M7WE OFFSET(30) NUMBITS(1) [],
        M6RE OFFSET(29) NUMBITS(1) [],
        M6WE OFFSET(28) NUMBITS(1) [],
        M5RE OFFSET(27) NUMBITS(1) [],
        M5WE OFFSET(26) NUMBITS(1) [],
        M4RE OFFSET(25) NUMBITS(1) [],
        M4WE OFFSET(24) NUMBITS(1) [],
        M3PE OFFSET(23) NUMBITS(1) [],
        M3SM OFFSET(21) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3
        ],
        M3UM OFFSET(18) NUMBITS(3) [],
        M2PE OFFSET(17) NUMBITS(1) [],
        M2SM OFFSET(15) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3
        ],
        M2UM OFFSET(12) NUMBITS(3) [],
        M1PE OFFSET(11) NUMBITS(1) [],
        M1SM OFFSET(9) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3
        ],
        M1UM OFFSET(6) NUMBITS(3) [],
        M0PE OFFSET(5) NUMBITS(1) [],
        M0SM OFFSET(3) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3
        ],
        M0UM OFFSET(0) NUMBITS(3) []
    ],
    pub RegionValid [
        /// Process Identifier
        PID OFFSET(24) NUMBITS(8) [],
        /// Process Identifier Mask
        PIDMASK OFFSET(16) NUMBITS(8) [],
        /// Valid
        VLD OFFSET(0) NUMBITS(1) []
    ]
];

/// User mode permission bits of `MnUM`.
pub mod user {
    pub const EXECUTE: u32 = 0b001;
    pub const WRITE: u32 = 0b010;
    pub const READ: u32 = 0b100;
}

pub const SYSMPU_BASE: usize = 0x4000_D000;

pub const SYSMPU: StaticRef<Registers> =
    unsafe { StaticRef::new(SYSMPU_BASE as *const Registers) };

pub const SYSMPU_BASE_ADDRS: [usize; 1] = [SYSMPU_BASE];
pub const SYSMPU_BASE_PTRS: [StaticRef<Registers>; 1] = [SYSMPU];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<SlavePortError>(), 8);
        assert_eq!(size_of::<RegionDescriptor>(), 0x10);
        assert_eq!(offset_of!(Registers, sp), 0x10);
        assert_eq!(offset_of!(Registers, word), 0x400);
        assert_eq!(offset_of!(Registers, rgdaac), 0x800);
        assert_eq!(size_of::<Registers>(), 0x830);
    }

    #[test]
    fn access_rights() {
        assert_eq!(RegionAccess::M1UM.shift, 6);
        assert_eq!(RegionAccess::M3PE.shift, 23);
        assert_eq!(RegionAccess::M4WE.shift, 24);
        assert_eq!(RegionAccess::M7RE.shift, 31);

        let mut rights: LocalRegisterCopy<u32, RegionAccess::Register> = LocalRegisterCopy::new(0);
        rights.modify(
            RegionAccess::M0UM.val(user::READ | user::WRITE) + RegionAccess::M0SM::SameAsUser,
        );
        assert_eq!(rights.get(), 0b11_110);
    }
}
