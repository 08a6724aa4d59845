//! Multipurpose Clock Generator (MCG).
//!
//! Register definitions plus decoding of the current clock mode from the
//! status register.

use core::fmt;

use tock_registers::interfaces::Readable;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// MCG memory map. Section 25.3 of the K64 manual.
    pub Registers {
        (0x0 => pub c1: ReadWrite<u8, Control1::Register>),
        (0x1 => pub c2: ReadWrite<u8, Control2::Register>),
        (0x2 => pub c3: ReadWrite<u8, Control3::Register>),
        (0x3 => pub c4: ReadWrite<u8, Control4::Register>),
        (0x4 => pub c5: ReadWrite<u8, Control5::Register>),
        (0x5 => pub c6: ReadWrite<u8, Control6::Register>),
        (0x6 => pub s: ReadOnly<u8, Status::Register>),
        (0x7 => _reserved0),
        (0x8 => pub sc: ReadWrite<u8, StatusControl::Register>),
        (0x9 => _reserved1),
        /// Auto trim compare value, high and low bytes
        (0xA => pub atcvh: ReadWrite<u8>),
        (0xB => pub atcvl: ReadWrite<u8>),
        (0xC => pub c7: ReadWrite<u8, Control7::Register>),
        (0xD => pub c8: ReadWrite<u8, Control8::Register>),
        (0xE => @END),
    }
}

register_bitfields![u8,
    pub Control1 [
        /// Clock source select
        CLKS OFFSET(6) NUMBITS(2) [
            LockedLoop = 0,
            Internal = 1,
            External = 2
        ],
        /// FLL external reference divider
        FRDIV OFFSET(3) NUMBITS(3) [
            Low1_High32 = 0,
            Low2_High64 = 1,
            Low4_High128 = 2,
            Low8_High256 = 3,
            Low16_High512 = 4,
            Low32_High1024 = 5,
            Low64_High1280 = 6,
            Low128_High1536 = 7
        ],
        /// Internal reference select
        IREFS OFFSET(2) NUMBITS(1) [
            External = 0,
            SlowInternal = 1
        ],
        /// Internal reference clock enable
        IRCLKEN OFFSET(1) NUMBITS(1) [],
        /// Internal reference stop enable
        IREFSTEN OFFSET(0) NUMBITS(1) []
    ],
    pub Control2 [
        /// Loss of clock reset enable
        LOCRE0 OFFSET(7) NUMBITS(1) [],
        /// Fast internal reference clock fine trim
        FCFTRIM OFFSET(6) NUMBITS(1) [],
        /// Frequency range select
        RANGE OFFSET(4) NUMBITS(2) [
            Low = 0,
            High = 1,
            VeryHigh = 2
        ],
        /// High gain oscillator select
        HGO OFFSET(3) NUMBITS(1) [
            LowPower = 0,
            HighGain = 1
        ],
        /// External reference select
        EREFS OFFSET(2) NUMBITS(1) [
            External = 0,
            Oscillator = 1
        ],
        /// Low power select
        LP OFFSET(1) NUMBITS(1) [],
        /// Internal reference clock select
        IRCS OFFSET(0) NUMBITS(1) [
            SlowInternal = 0,
            FastInternal = 1
        ]
    ],
    pub Control3 [
        /// Slow internal reference clock trim
        SCTRIM OFFSET(0) NUMBITS(8) []
    ],
    pub Control4 [
        /// DCO maximum frequency with 32.768 kHz reference
        DMX32 OFFSET(7) NUMBITS(1) [],
        /// DCO range select
        DRST_DRS OFFSET(5) NUMBITS(2) [
            Low = 0,
            Mid = 1,
            MidHigh = 2,
            High = 3
        ],
        /// Fast internal reference clock trim
        FCTRIM OFFSET(1) NUMBITS(4) [],
        /// Slow internal reference clock fine trim
        SCFTRIM OFFSET(0) NUMBITS(1) []
    ],
    pub Control5 [
        PLLCLKEN OFFSET(6) NUMBITS(1) [],
        PLLSTEN OFFSET(5) NUMBITS(1) [],
        /// PLL external reference divider, divide by PRDIV + 1
        PRDIV OFFSET(0) NUMBITS(5) []
    ],
    pub Control6 [
        /// Loss of lock interrupt enable
        LOLIE0 OFFSET(7) NUMBITS(1) [],
        /// PLL select
        PLLS OFFSET(6) NUMBITS(1) [
            Fll = 0,
            Pll = 1
        ],
        /// Clock monitor enable
        CME0 OFFSET(5) NUMBITS(1) [],
        /// VCO divider, multiply by VDIV + 24
        VDIV OFFSET(0) NUMBITS(5) []
    ],
    pub Status [
        /// Loss of lock status
        LOLS0 OFFSET(7) NUMBITS(1) [],
        /// PLL lock status
        LOCK0 OFFSET(6) NUMBITS(1) [],
        /// Source of PLLS clock
        PLLST OFFSET(5) NUMBITS(1) [
            Fll = 0,
            Pll = 1
        ],
        /// Internal reference status
        IREFST OFFSET(4) NUMBITS(1) [
            External = 0,
            Internal = 1
        ],
        /// Clock mode status
        CLKST OFFSET(2) NUMBITS(2) [
            Fll = 0,
            Internal = 1,
            External = 2,
            Pll = 3
        ],
        /// OSC initialization
        OSCINIT0 OFFSET(1) NUMBITS(1) [],
        /// Internal reference clock status
        IRCST OFFSET(0) NUMBITS(1) [
            Slow = 0,
            Fast = 1
        ]
    ],
    pub StatusControl [
        /// Automatic trim machine enable
        ATME OFFSET(7) NUMBITS(1) [],
        /// Automatic trim machine select
        ATMS OFFSET(6) NUMBITS(1) [
            Clock32k = 0,
            Clock4M = 1
        ],
        /// Automatic trim machine fail flag
        ATMF OFFSET(5) NUMBITS(1) [],
        /// FLL filter preserve enable
        FLTPRSRV OFFSET(4) NUMBITS(1) [],
        /// Fast clock internal reference divider
        FCRDIV OFFSET(1) NUMBITS(3) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7
        ],
        /// OSC0 loss of clock status
        LOCS0 OFFSET(0) NUMBITS(1) []
    ],
    pub Control7 [
        /// MCG OSC clock select
        OSCSEL OFFSET(0) NUMBITS(2) [
            Oscillator = 0,
            Rtc32k = 1,
            Irc48M = 2
        ]
    ],
    pub Control8 [
        /// Loss of clock reset enable for RTC
        LOCRE1 OFFSET(7) NUMBITS(1) [],
        /// PLL loss of lock reset enable
        LOLRE OFFSET(6) NUMBITS(1) [],
        /// Clock monitor enable for RTC
        CME1 OFFSET(5) NUMBITS(1) [],
        /// RTC loss of clock status
        LOCS1 OFFSET(0) NUMBITS(1) []
    ]
];

pub use self::Control1::CLKS::Value as OscSource;
pub use self::Control1::FRDIV::Value as Frdiv;
pub use self::Control2::RANGE::Value as OscRange;
pub use self::Control7::OSCSEL::Value as OscClock;

/// MCG operating modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// FLL engaged internal
    Fei,
    /// FLL engaged external
    Fee,
    /// FLL bypassed internal
    Fbi,
    /// FLL bypassed external
    Fbe,
    /// PLL bypassed external
    Pbe,
    /// PLL engaged external
    Pee,
    /// Bypassed low power internal
    Blpi,
    /// Bypassed low power external
    Blpe,
}

impl Mode {
    /// Decode the mode from the status register and `C2[LP]`.
    ///
    /// Returns `None` for the transient combinations seen while a mode
    /// switch is in progress.
    pub fn decode(
        status: LocalRegisterCopy<u8, Status::Register>,
        c2: LocalRegisterCopy<u8, Control2::Register>,
    ) -> Option<Mode> {
        let internal = status.matches_all(Status::IREFST::Internal);
        let pll = status.matches_all(Status::PLLST::Pll);
        let lp = c2.is_set(Control2::LP);

        let clkst = status.read_as_enum(Status::CLKST)?;
        match (clkst, internal, pll, lp) {
            (Status::CLKST::Value::Fll, true, false, _) => Some(Mode::Fei),
            (Status::CLKST::Value::Fll, false, false, _) => Some(Mode::Fee),
            (Status::CLKST::Value::Internal, true, false, false) => Some(Mode::Fbi),
            (Status::CLKST::Value::Internal, true, false, true) => Some(Mode::Blpi),
            (Status::CLKST::Value::External, false, false, false) => Some(Mode::Fbe),
            (Status::CLKST::Value::External, false, true, false) => Some(Mode::Pbe),
            (Status::CLKST::Value::External, false, _, true) => Some(Mode::Blpe),
            (Status::CLKST::Value::Pll, false, true, _) => Some(Mode::Pee),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Mode::Fei => "FEI",
            Mode::Fee => "FEE",
            Mode::Fbi => "FBI",
            Mode::Fbe => "FBE",
            Mode::Pbe => "PBE",
            Mode::Pee => "PEE",
            Mode::Blpi => "BLPI",
            Mode::Blpe => "BLPE",
        };
        f.write_str(name)
    }
}

impl Registers {
    /// The current clock mode, or `None` during a transition.
    pub fn mode(&self) -> Option<Mode> {
        Mode::decode(self.s.extract(), self.c2.extract())
    }
}

pub const MCG_BASE: usize = 0x4006_4000;

pub const MCG: StaticRef<Registers> = unsafe { StaticRef::new(MCG_BASE as *const Registers) };

pub const MCG_BASE_ADDRS: [usize; 1] = [MCG_BASE];
pub const MCG_BASE_PTRS: [StaticRef<Registers>; 1] = [MCG];
pub const MCG_IRQS: [Interrupt; 1] = [Interrupt::MCG];

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: u8, c2: u8) -> Option<Mode> {
        Mode::decode(LocalRegisterCopy::new(s), LocalRegisterCopy::new(c2))
    }

    #[test]
    fn reset_state_is_fei() {
        // CLKST = FLL, IREFST = internal
        assert_eq!(decode(0x10, 0x00), Some(Mode::Fei));
    }

    #[test]
    fn pll_modes() {
        // CLKST = external, PLLST set, LOCK0 set
        assert_eq!(decode(0x68, 0x00), Some(Mode::Pbe));
        // CLKST = PLL, PLLST set, LOCK0 set
        assert_eq!(decode(0x6C, 0x00), Some(Mode::Pee));
        assert_eq!(decode(0x68, 0x02), Some(Mode::Blpe));
    }

    #[test]
    fn bypassed_modes() {
        assert_eq!(decode(0x14, 0x00), Some(Mode::Fbi));
        assert_eq!(decode(0x14, 0x02), Some(Mode::Blpi));
        assert_eq!(decode(0x08, 0x00), Some(Mode::Fbe));
        assert_eq!(decode(0x00, 0x00), Some(Mode::Fee));
    }

    #[test]
    fn transitions_are_not_decoded() {
        // CLKST = PLL while IREFST still internal
        assert_eq!(decode(0x1C, 0x00), None);
    }

    #[test]
    fn divider_fields() {
        assert_eq!(Control1::FRDIV.shift, 3);
        assert_eq!(Control1::FRDIV.mask, 0b111);
        assert_eq!(Control5::PRDIV.mask, 0x1F);
        assert_eq!(Control6::VDIV.mask, 0x1F);
        assert_eq!(Status::CLKST.shift, 2);
    }
}
