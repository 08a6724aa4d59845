//! External Watchdog Monitor (EWM).

use tock_registers::interfaces::Writeable;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// Control register, write once after reset
        (0x0 => pub ctrl: ReadWrite<u8, Control::Register>),
        (0x1 => pub serv: WriteOnly<u8>),
        /// Compare low and high registers, write once after reset
        (0x2 => pub cmpl: ReadWrite<u8>),
        (0x3 => pub cmph: ReadWrite<u8>),
        (0x4 => @END),
    }
}

register_bitfields![u8,
    pub Control [
        /// Interrupt Enable
        INTEN OFFSET(3) NUMBITS(1) [],
        /// Input Enable
        INEN OFFSET(2) NUMBITS(1) [],
        /// EWM_in's Assertion State Select
        ASSIN OFFSET(1) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        /// EWM enable
        EWMEN OFFSET(0) NUMBITS(1) []
    ]
];

/// The two writes to `SERV` that refresh the EWM, in order. They must land
/// within 15 bus cycles of each other.
pub const SERVICE_SEQUENCE: [u8; 2] = [0xB4, 0x2C];

impl Registers {
    pub fn write_service_sequence(&self) {
        for key in SERVICE_SEQUENCE {
            self.serv.set(key);
        }
    }
}

pub const EWM_BASE: usize = 0x4006_1000;

pub const EWM: StaticRef<Registers> = unsafe { StaticRef::new(EWM_BASE as *const Registers) };

pub const EWM_BASE_ADDRS: [usize; 1] = [EWM_BASE];
pub const EWM_BASE_PTRS: [StaticRef<Registers>; 1] = [EWM];
/// Shared with the watchdog.
pub const EWM_IRQS: [Interrupt; 1] = [Interrupt::WDOG_EWM];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::Readable;

    #[repr(C, align(4))]
    struct Backing([u8; 4]);

    #[test]
    fn service_sequence_lands_in_serv() {
        let mut backing = Backing([0; 4]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.ctrl.write(Control::EWMEN::SET + Control::ASSIN::ActiveHigh);
            regs.write_service_sequence();
            assert!(regs.ctrl.is_set(Control::EWMEN));
        }
        assert_eq!(backing.0, [0x03, SERVICE_SEQUENCE[1], 0, 0]);
    }
}
