//! Port Control and Interrupts (PORT).
//!
//! One instance per GPIO port. `pcr[n]` selects the function of pin `n` and
//! its interrupt or DMA trigger.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const PINS_PER_PORT: usize = 32;

register_structs! {
    /// PORT memory map. Section 11.5 of the K64 manual.
    pub Registers {
        (0x00 => pub pcr: [ReadWrite<u32, PinControl::Register>; PINS_PER_PORT]),
        /// Global Pin Control Low, writes pins 0-15
        (0x80 => pub gpclr: WriteOnly<u32, GlobalPinControl::Register>),
        /// Global Pin Control High, writes pins 16-31
        (0x84 => pub gpchr: WriteOnly<u32, GlobalPinControl::Register>),
        (0x88 => _reserved0),
        /// Interrupt Status Flag, one bit per pin, write 1 to clear
        (0xA0 => pub isfr: ReadWrite<u32>),
        (0xA4 => _reserved1),
        /// Digital Filter Enable, one bit per pin
        (0xC0 => pub dfer: ReadWrite<u32>),
        (0xC4 => pub dfcr: ReadWrite<u32, DigitalFilterClock::Register>),
        (0xC8 => pub dfwr: ReadWrite<u32, DigitalFilterWidth::Register>),
        (0xCC => @END),
    }
}

register_bitfields![u32,
    pub PinControl [
        /// Interrupt Status Flag
        ISF OFFSET(24) NUMBITS(1) [],
        /// Interrupt Configuration
        IRQC OFFSET(16) NUMBITS(4) [
            Disabled = 0,
            DmaRisingEdge = 1,
            DmaFallingEdge = 2,
            DmaEitherEdge = 3,
            InterruptLogicZero = 8,
            InterruptRisingEdge = 9,
            InterruptFallingEdge = 10,
            InterruptEitherEdge = 11,
            InterruptLogicOne = 12
        ],
        /// Lock Register, holds PCR[15:0] until the next reset
        LK OFFSET(15) NUMBITS(1) [],
        /// Pin Mux Control
        MUX OFFSET(8) NUMBITS(3) [
            Analog = 0,
            Gpio = 1,
            Alt2 = 2,
            Alt3 = 3,
            Alt4 = 4,
            Alt5 = 5,
            Alt6 = 6,
            Alt7 = 7
        ],
        /// Drive Strength Enable
        DSE OFFSET(6) NUMBITS(1) [],
        /// Open Drain Enable
        ODE OFFSET(5) NUMBITS(1) [],
        /// Passive Filter Enable
        PFE OFFSET(4) NUMBITS(1) [],
        /// Slew Rate Enable
        SRE OFFSET(2) NUMBITS(1) [
            Fast = 0,
            Slow = 1
        ],
        /// Pull Enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Pull Select
        PS OFFSET(0) NUMBITS(1) [
            PullDown = 0,
            PullUp = 1
        ]
    ],
    pub GlobalPinControl [
        /// Global Pin Write Enable, one bit per pin of the half port
        GPWE OFFSET(16) NUMBITS(16) [],
        /// Global Pin Write Data, written to PCR[15:0] of each enabled pin
        GPWD OFFSET(0) NUMBITS(16) []
    ],
    pub DigitalFilterClock [
        /// Clock Source
        CS OFFSET(0) NUMBITS(1) [
            BusClock = 0,
            Lpo = 1
        ]
    ],
    pub DigitalFilterWidth [
        /// Filter Length
        FILT OFFSET(0) NUMBITS(5) []
    ]
];

pub const PORTA_BASE: usize = 0x4004_9000;
pub const PORTB_BASE: usize = 0x4004_A000;
pub const PORTC_BASE: usize = 0x4004_B000;
pub const PORTD_BASE: usize = 0x4004_C000;
pub const PORTE_BASE: usize = 0x4004_D000;

pub const PORTA: StaticRef<Registers> = unsafe { StaticRef::new(PORTA_BASE as *const Registers) };
pub const PORTB: StaticRef<Registers> = unsafe { StaticRef::new(PORTB_BASE as *const Registers) };
pub const PORTC: StaticRef<Registers> = unsafe { StaticRef::new(PORTC_BASE as *const Registers) };
pub const PORTD: StaticRef<Registers> = unsafe { StaticRef::new(PORTD_BASE as *const Registers) };
pub const PORTE: StaticRef<Registers> = unsafe { StaticRef::new(PORTE_BASE as *const Registers) };

pub const PORT_BASE_ADDRS: [usize; 5] =
    [PORTA_BASE, PORTB_BASE, PORTC_BASE, PORTD_BASE, PORTE_BASE];
pub const PORT_BASE_PTRS: [StaticRef<Registers>; 5] = [PORTA, PORTB, PORTC, PORTD, PORTE];
pub const PORT_IRQS: [Interrupt; 5] = [
    Interrupt::PORTA,
    Interrupt::PORTB,
    Interrupt::PORTC,
    Interrupt::PORTD,
    Interrupt::PORTE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn pin_control_fields() {
        let mut pcr: LocalRegisterCopy<u32, PinControl::Register> = LocalRegisterCopy::new(0);
        pcr.modify(
            PinControl::MUX::Alt3
                + PinControl::PE::SET
                + PinControl::PS::PullUp
                + PinControl::DSE::SET,
        );
        assert_eq!(pcr.get(), 0x0000_0343);
        pcr.modify(PinControl::IRQC::InterruptFallingEdge);
        assert_eq!(pcr.read(PinControl::IRQC), 10);
        assert_eq!(pcr.read_as_enum(PinControl::MUX), Some(PinControl::MUX::Value::Alt3));
    }

    #[test]
    fn global_pin_control_halves() {
        assert_eq!(GlobalPinControl::GPWE.shift, 16);
        assert_eq!(GlobalPinControl::GPWD.mask, 0xFFFF);
        assert_eq!(core::mem::size_of::<Registers>(), 0xCC);
    }
}
