//! Random Number Generator Accelerator (RNGA).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        (0x0 => pub cr: ReadWrite<u32, Control::Register>),
        (0x4 => pub sr: ReadOnly<u32, Status::Register>),
        /// Entropy register
        (0x8 => pub er: WriteOnly<u32>),
        /// Output register
        (0xC => pub or: ReadOnly<u32>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub Control [
        /// Sleep
        SLP OFFSET(4) NUMBITS(1) [],
        /// Clear Interrupt
        CLRI OFFSET(3) NUMBITS(1) [],
        /// Interrupt Mask
        INTM OFFSET(2) NUMBITS(1) [],
        /// High Assurance
        HA OFFSET(1) NUMBITS(1) [],
        GO OFFSET(0) NUMBITS(1) []
    ],
    pub Status [
        /// Output Register Size
        OREG_SIZE OFFSET(16) NUMBITS(8) [],
        /// Output Register Level
        OREG_LVL OFFSET(8) NUMBITS(8) [],
        SLP OFFSET(4) NUMBITS(1) [],
        /// Error Interrupt
        ERRI OFFSET(3) NUMBITS(1) [],
        /// Output Register Underflow
        ORU OFFSET(2) NUMBITS(1) [],
        /// Last Read Status
        LRS OFFSET(1) NUMBITS(1) [],
        /// Security Violation
        SECV OFFSET(0) NUMBITS(1) []
    ]
];

pub const RNG_BASE: usize = 0x4002_9000;

pub const RNG: StaticRef<Registers> = unsafe { StaticRef::new(RNG_BASE as *const Registers) };

pub const RNG_BASE_ADDRS: [usize; 1] = [RNG_BASE];
pub const RNG_BASE_PTRS: [StaticRef<Registers>; 1] = [RNG];
pub const RNG_IRQS: [Interrupt; 1] = [Interrupt::RNG];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x10]);

    #[test]
    fn output_level_and_entropy() {
        let mut backing = Backing([0; 0x10]);
        backing.0[4..8].copy_from_slice(&0x0001_0100u32.to_le_bytes());
        backing.0[0xC..0x10].copy_from_slice(&0xCAFE_F00Du32.to_le_bytes());
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.cr.write(Control::GO::SET + Control::HA::SET);
            regs.cr.modify(Control::INTM::SET);
            regs.er.set(0x1234_5678);
            assert_eq!(regs.sr.read(Status::OREG_SIZE), 1);
            assert_eq!(regs.sr.read(Status::OREG_LVL), 1);
            assert_eq!(regs.or.get(), 0xCAFE_F00D);
        }
        assert_eq!(backing.0[0], 0x07);
        assert_eq!(&backing.0[8..0xC], &0x1234_5678u32.to_le_bytes());
    }
}
