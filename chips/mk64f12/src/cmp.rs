//! High-Speed Analog Comparator (CMP) with 6-bit DAC.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// CMP memory map.
    pub Registers {
        (0x0 => pub cr0: ReadWrite<u8, Control0::Register>),
        (0x1 => pub cr1: ReadWrite<u8, Control1::Register>),
        (0x2 => pub fpr: ReadWrite<u8, FilterPeriod::Register>),
        (0x3 => pub scr: ReadWrite<u8, StatusControl::Register>),
        (0x4 => pub daccr: ReadWrite<u8, DacControl::Register>),
        (0x5 => pub muxcr: ReadWrite<u8, MuxControl::Register>),
        (0x6 => @END),
    }
}

register_bitfields![u8,
    pub Control0 [
        /// Filter Sample Count
        FILTER_CNT OFFSET(4) NUMBITS(3) [],
        /// Comparator hard block hysteresis control
        HYSTCTR OFFSET(0) NUMBITS(2) [
            Level0 = 0,
            Level1 = 1,
            Level2 = 2,
            Level3 = 3
        ]
    ],
    pub Control1 [
        /// Sample Enable
        SE OFFSET(7) NUMBITS(1) [],
        /// Windowing Enable
        WE OFFSET(6) NUMBITS(1) [],
        /// Trigger Mode Enable
        TRIGM OFFSET(5) NUMBITS(1) [],
        /// Power Mode Select
        PMODE OFFSET(4) NUMBITS(1) [
            LowSpeed = 0,
            HighSpeed = 1
        ],
        /// Comparator INVERT
        INV OFFSET(3) NUMBITS(1) [],
        /// Comparator Output Select
        COS OFFSET(2) NUMBITS(1) [
            Filtered = 0,
            Unfiltered = 1
        ],
        /// Comparator Output Pin Enable
        OPE OFFSET(1) NUMBITS(1) [],
        /// Comparator Module Enable
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub FilterPeriod [
        /// Filter Sample Period, in bus clocks
        FILT_PER OFFSET(0) NUMBITS(8) []
    ],
    pub StatusControl [
        /// DMA Enable Control
        DMAEN OFFSET(6) NUMBITS(1) [],
        /// Comparator Interrupt Enable Rising
        IER OFFSET(4) NUMBITS(1) [],
        /// Comparator Interrupt Enable Falling
        IEF OFFSET(3) NUMBITS(1) [],
        /// Analog Comparator Flag Rising, write 1 to clear
        CFR OFFSET(2) NUMBITS(1) [],
        /// Analog Comparator Flag Falling, write 1 to clear
        CFF OFFSET(1) NUMBITS(1) [],
        /// Analog Comparator Output
        COUT OFFSET(0) NUMBITS(1) []
    ],
    pub DacControl [
        /// DAC Enable
        DACEN OFFSET(7) NUMBITS(1) [],
        /// Supply Voltage Reference Source Select
        VRSEL OFFSET(6) NUMBITS(1) [
            Vin1 = 0,
            Vin2 = 1
        ],
        /// DAC Output Voltage Select, Vout = Vin * (VOSEL + 1) / 64
        VOSEL OFFSET(0) NUMBITS(6) []
    ],
    pub MuxControl [
        /// Plus Input Mux Control
        PSEL OFFSET(3) NUMBITS(3) [],
        /// Minus Input Mux Control
        MSEL OFFSET(0) NUMBITS(3) []
    ]
];

pub const CMP0_BASE: usize = 0x4007_3000;
pub const CMP1_BASE: usize = 0x4007_3008;
pub const CMP2_BASE: usize = 0x4007_3010;

pub const CMP0: StaticRef<Registers> = unsafe { StaticRef::new(CMP0_BASE as *const Registers) };
pub const CMP1: StaticRef<Registers> = unsafe { StaticRef::new(CMP1_BASE as *const Registers) };
pub const CMP2: StaticRef<Registers> = unsafe { StaticRef::new(CMP2_BASE as *const Registers) };

pub const CMP_BASE_ADDRS: [usize; 3] = [CMP0_BASE, CMP1_BASE, CMP2_BASE];
pub const CMP_BASE_PTRS: [StaticRef<Registers>; 3] = [CMP0, CMP1, CMP2];
pub const CMP_IRQS: [Interrupt; 3] = [Interrupt::CMP0, Interrupt::CMP1, Interrupt::CMP2];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x18]);

    #[test]
    fn instances_are_eight_bytes_apart() {
        assert_eq!(size_of::<Registers>(), 6);
        assert_eq!(CMP1_BASE - CMP0_BASE, 8);
        assert_eq!(CMP2_BASE - CMP1_BASE, 8);

        let mut backing = Backing([0; 0x18]);
        let base = backing.0.as_mut_ptr();
        for (n, offset) in [0usize, 8, 0x10].into_iter().enumerate() {
            let regs = unsafe { &*(base.add(offset) as *const Registers) };
            regs.daccr.set(0x80 | n as u8);
            regs.muxcr.modify(MuxControl::PSEL.val(7) + MuxControl::MSEL.val(n as u8));
            assert_eq!(regs.daccr.read(DacControl::VOSEL), n as u8);
        }
        assert_eq!(&backing.0[4..6], &[0x80, 0x38]);
        assert_eq!(&backing.0[0xC..0xE], &[0x81, 0x39]);
        assert_eq!(&backing.0[0x14..0x16], &[0x82, 0x3A]);
        assert_eq!(backing.0[6], 0);
    }
}
