//! System Oscillator (OSC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    /// OSC memory map. Chapter 26 of the K64 manual.
    pub Registers {
        (0x0 => pub cr: ReadWrite<u8, Control::Register>),
        (0x1 => _reserved0),
        (0x2 => pub div: ReadWrite<u8, Divider::Register>),
        (0x3 => @END),
    }
}

register_bitfields![u8,
    pub Control [
        /// External Reference Enable
        ERCLKEN OFFSET(7) NUMBITS(1) [],
        /// External Reference Stop Enable
        EREFSTEN OFFSET(5) NUMBITS(1) [],
        /// Oscillator 2 pF Capacitor Load Configure
        SC2P OFFSET(3) NUMBITS(1) [],
        /// Oscillator 4 pF Capacitor Load Configure
        SC4P OFFSET(2) NUMBITS(1) [],
        /// Oscillator 8 pF Capacitor Load Configure
        SC8P OFFSET(1) NUMBITS(1) [],
        /// Oscillator 16 pF Capacitor Load Configure
        SC16P OFFSET(0) NUMBITS(1) [],
        /// SC2P..SC16P taken together. The capacitor bits are in reverse
        /// order, so each value names the resulting load.
        CAP OFFSET(0) NUMBITS(4) [
            Load0pF = 0b0000,
            Load2pF = 0b1000,
            Load4pF = 0b0100,
            Load6pF = 0b1100,
            Load8pF = 0b0010,
            Load10pF = 0b1010,
            Load12pF = 0b0110,
            Load14pF = 0b1110,
            Load16pF = 0b0001,
            Load18pF = 0b1001,
            Load20pF = 0b0101,
            Load22pF = 0b1101,
            Load24pF = 0b0011,
            Load26pF = 0b1011,
            Load28pF = 0b0111,
            Load30pF = 0b1111
        ]
    ],
    pub Divider [
        /// ERCLK prescaler
        ERPS OFFSET(6) NUMBITS(2) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3
        ]
    ]
];

pub use self::Control::CAP::Value as OscCapacitance;

pub const OSC_BASE: usize = 0x4006_5000;

pub const OSC: StaticRef<Registers> = unsafe { StaticRef::new(OSC_BASE as *const Registers) };

pub const OSC_BASE_ADDRS: [usize; 1] = [OSC_BASE];
pub const OSC_BASE_PTRS: [StaticRef<Registers>; 1] = [OSC];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn combined_capacitance_matches_individual_bits() {
        let mut cr: LocalRegisterCopy<u8, Control::Register> = LocalRegisterCopy::new(0);
        cr.modify(Control::CAP::Load10pF);
        assert!(cr.is_set(Control::SC2P));
        assert!(cr.is_set(Control::SC8P));
        assert!(!cr.is_set(Control::SC4P));
        assert!(!cr.is_set(Control::SC16P));

        cr.modify(Control::ERCLKEN::SET);
        assert_eq!(cr.read_as_enum(Control::CAP), Some(OscCapacitance::Load10pF));
        assert_eq!(cr.get(), 0x8A);
    }
}
