//! USB On-The-Go full-speed controller (USB).
//!
//! Registers are 8 bits wide on a 4-byte stride. The buffer descriptor table
//! lives in system RAM at the address held by the `bdtpage*` registers.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const NUM_ENDPOINTS: usize = 16;

register_structs! {
    /// USB memory map.
    pub Registers {
        /// Peripheral ID
        (0x000 => pub perid: ReadOnly<u8>),
        (0x001 => _reserved0),
        /// Peripheral ID Complement
        (0x004 => pub idcomp: ReadOnly<u8>),
        (0x005 => _reserved1),
        /// Peripheral Revision
        (0x008 => pub rev: ReadOnly<u8>),
        (0x009 => _reserved2),
        /// Peripheral Additional Info
        (0x00C => pub addinfo: ReadOnly<u8, AdditionalInfo::Register>),
        (0x00D => _reserved3),
        /// OTG Interrupt Status
        (0x010 => pub otgistat: ReadWrite<u8, OtgInterruptStatus::Register>),
        (0x011 => _reserved4),
        /// OTG Interrupt Control
        (0x014 => pub otgicr: ReadWrite<u8, OtgInterruptControl::Register>),
        (0x015 => _reserved5),
        /// OTG Status
        (0x018 => pub otgstat: ReadWrite<u8, OtgStatus::Register>),
        (0x019 => _reserved6),
        /// OTG Control
        (0x01C => pub otgctl: ReadWrite<u8, OtgControl::Register>),
        (0x01D => _reserved7),
        /// Interrupt Status, write 1 to clear
        (0x080 => pub istat: ReadWrite<u8, InterruptStatus::Register>),
        (0x081 => _reserved8),
        /// Interrupt Enable
        (0x084 => pub inten: ReadWrite<u8, InterruptStatus::Register>),
        (0x085 => _reserved9),
        /// Error Interrupt Status, write 1 to clear
        (0x088 => pub errstat: ReadWrite<u8, ErrorStatus::Register>),
        (0x089 => _reserved10),
        /// Error Interrupt Enable
        (0x08C => pub erren: ReadWrite<u8, ErrorStatus::Register>),
        (0x08D => _reserved11),
        (0x090 => pub stat: ReadOnly<u8, Status::Register>),
        (0x091 => _reserved12),
        (0x094 => pub ctl: ReadWrite<u8, Control::Register>),
        (0x095 => _reserved13),
        (0x098 => pub addr: ReadWrite<u8, Address::Register>),
        (0x099 => _reserved14),
        /// BDT Page 1, address bits 15-9
        (0x09C => pub bdtpage1: ReadWrite<u8, BdtPage1::Register>),
        (0x09D => _reserved15),
        /// Frame Number, low and high
        (0x0A0 => pub frmnuml: ReadWrite<u8>),
        (0x0A1 => _reserved16),
        (0x0A4 => pub frmnumh: ReadWrite<u8, FrameNumberHigh::Register>),
        (0x0A5 => _reserved17),
        (0x0A8 => pub token: ReadWrite<u8, Token::Register>),
        (0x0A9 => _reserved18),
        /// SOF Threshold
        (0x0AC => pub softhld: ReadWrite<u8>),
        (0x0AD => _reserved19),
        /// BDT Page 2, address bits 23-16
        (0x0B0 => pub bdtpage2: ReadWrite<u8>),
        (0x0B1 => _reserved20),
        /// BDT Page 3, address bits 31-24
        (0x0B4 => pub bdtpage3: ReadWrite<u8>),
        (0x0B5 => _reserved21),
        (0x0C0 => pub endpoint: [Endpoint; NUM_ENDPOINTS]),
        (0x100 => pub usbctrl: ReadWrite<u8, UsbControl::Register>),
        (0x101 => _reserved22),
        (0x104 => pub observe: ReadOnly<u8, Observe::Register>),
        (0x105 => _reserved23),
        (0x108 => pub control: ReadWrite<u8, OtgDetectControl::Register>),
        (0x109 => _reserved24),
        /// USB Transceiver Control 0
        (0x10C => pub usbtrc0: ReadWrite<u8, TransceiverControl0::Register>),
        (0x10D => _reserved25),
        /// Frame Adjust
        (0x114 => pub usbfrmadjust: ReadWrite<u8>),
        (0x115 => _reserved26),
        (0x140 => pub clk_recover_ctrl: ReadWrite<u8, ClockRecoveryControl::Register>),
        (0x141 => _reserved27),
        (0x144 => pub clk_recover_irc_en: ReadWrite<u8, ClockRecoveryIrcEnable::Register>),
        (0x145 => _reserved28),
        (0x15C => pub clk_recover_int_status: ReadWrite<u8, ClockRecoveryInterruptStatus::Register>),
        (0x15D => @END),
    },

    /// Endpoint control register on its 4-byte stride.
    pub Endpoint {
        (0x0 => pub endpt: ReadWrite<u8, EndpointControl::Register>),
        (0x1 => _reserved0),
        (0x4 => @END),
    }
}

register_bitfields![u8,
    pub AdditionalInfo [
        /// Assigned interrupt number
        IRQNUM OFFSET(3) NUMBITS(5) [],
        /// Host mode supported
        IEHOST OFFSET(0) NUMBITS(1) []
    ],
    pub OtgInterruptStatus [
        IDCHG OFFSET(7) NUMBITS(1) [],
        ONEMSEC OFFSET(6) NUMBITS(1) [],
        LINE_STATE_CHG OFFSET(5) NUMBITS(1) [],
        SESSVLDCHG OFFSET(3) NUMBITS(1) [],
        B_SESS_CHG OFFSET(2) NUMBITS(1) [],
        AVBUSCHG OFFSET(0) NUMBITS(1) []
    ],
    pub OtgInterruptControl [
        IDEN OFFSET(7) NUMBITS(1) [],
        ONEMSECEN OFFSET(6) NUMBITS(1) [],
        LINESTATEEN OFFSET(5) NUMBITS(1) [],
        SESSVLDEN OFFSET(3) NUMBITS(1) [],
        BSESSEN OFFSET(2) NUMBITS(1) [],
        AVBUSEN OFFSET(0) NUMBITS(1) []
    ],
    pub OtgStatus [
        ID OFFSET(7) NUMBITS(1) [],
        ONEMSECEN OFFSET(6) NUMBITS(1) [],
        LINESTATESTABLE OFFSET(5) NUMBITS(1) [],
        SESS_VLD OFFSET(3) NUMBITS(1) [],
        BSESSEND OFFSET(2) NUMBITS(1) [],
        AVBUSVLD OFFSET(0) NUMBITS(1) []
    ],
    pub OtgControl [
        /// D+ Data Line pullup resistor enable
        DPHIGH OFFSET(7) NUMBITS(1) [],
        /// D+ Data Line pull-down resistor enable
        DPLOW OFFSET(5) NUMBITS(1) [],
        /// D- Data Line pull-down resistor enable
        DMLOW OFFSET(4) NUMBITS(1) [],
        OTGEN OFFSET(2) NUMBITS(1) []
    ],
    /// Shared by ISTAT and INTEN.
    pub InterruptStatus [
        STALL OFFSET(7) NUMBITS(1) [],
        ATTACH OFFSET(6) NUMBITS(1) [],
        RESUME OFFSET(5) NUMBITS(1) [],
        SLEEP OFFSET(4) NUMBITS(1) [],
        /// Token processing done
        TOKDNE OFFSET(3) NUMBITS(1) [],
        /// Start of frame token
        SOFTOK OFFSET(2) NUMBITS(1) [],
        ERROR OFFSET(1) NUMBITS(1) [],
        USBRST OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by ERRSTAT and ERREN.
    pub ErrorStatus [
        /// Bit stuff error
        BTSERR OFFSET(7) NUMBITS(1) [],
        DMAERR OFFSET(5) NUMBITS(1) [],
        /// Bus turnaround timeout
        BTOERR OFFSET(4) NUMBITS(1) [],
        /// Data field not 8 bits
        DFN8 OFFSET(3) NUMBITS(1) [],
        CRC16 OFFSET(2) NUMBITS(1) [],
        CRC5EOF OFFSET(1) NUMBITS(1) [],
        PIDERR OFFSET(0) NUMBITS(1) []
    ],
    pub Status [
        /// Endpoint of the last token
        ENDP OFFSET(4) NUMBITS(4) [],
        /// Transmit indicator
        TX OFFSET(3) NUMBITS(1) [],
        /// Last buffer descriptor was in the odd bank
        ODD OFFSET(2) NUMBITS(1) []
    ],
    pub Control [
        /// Live USB differential receiver JSTATE
        JSTATE OFFSET(7) NUMBITS(1) [],
        /// Live USB single-ended zero signal
        SE0 OFFSET(6) NUMBITS(1) [],
        TXSUSPENDTOKENBUSY OFFSET(5) NUMBITS(1) [],
        RESET OFFSET(4) NUMBITS(1) [],
        HOSTMODEEN OFFSET(3) NUMBITS(1) [],
        RESUME OFFSET(2) NUMBITS(1) [],
        /// Reset all BDT ODD ping-pong bits
        ODDRST OFFSET(1) NUMBITS(1) [],
        USBENSOFEN OFFSET(0) NUMBITS(1) []
    ],
    pub Address [
        /// Low Speed Enable
        LSEN OFFSET(7) NUMBITS(1) [],
        /// USB address
        ADDR OFFSET(0) NUMBITS(7) []
    ],
    pub BdtPage1 [
        BDTBA OFFSET(1) NUMBITS(7) []
    ],
    pub FrameNumberHigh [
        FRM OFFSET(0) NUMBITS(3) []
    ],
    pub Token [
        TOKENPID OFFSET(4) NUMBITS(4) [
            Out = 0x1,
            In = 0x9,
            Setup = 0xD
        ],
        TOKENENDPT OFFSET(0) NUMBITS(4) []
    ],
    pub EndpointControl [
        /// Host without a hub
        HOSTWOHUB OFFSET(7) NUMBITS(1) [],
        /// Retry disable
        RETRYDIS OFFSET(6) NUMBITS(1) [],
        /// Control transfers disabled
        EPCTLDIS OFFSET(4) NUMBITS(1) [],
        EPRXEN OFFSET(3) NUMBITS(1) [],
        EPTXEN OFFSET(2) NUMBITS(1) [],
        EPSTALL OFFSET(1) NUMBITS(1) [],
        /// Endpoint handshake, cleared for isochronous endpoints
        EPHSHK OFFSET(0) NUMBITS(1) []
    ],
    pub UsbControl [
        /// Places the transceiver in suspend
        SUSP OFFSET(7) NUMBITS(1) [],
        /// Enables the weak pull-downs on D+ and D-
        PDE OFFSET(6) NUMBITS(1) []
    ],
    pub Observe [
        /// D+ pullup enabled
        DPPU OFFSET(7) NUMBITS(1) [],
        /// D+ pulldown enabled
        DPPD OFFSET(6) NUMBITS(1) [],
        /// D- pulldown enabled
        DMPD OFFSET(4) NUMBITS(1) []
    ],
    pub OtgDetectControl [
        /// D+ pullup in non-OTG device mode
        DPPULLUPNONOTG OFFSET(4) NUMBITS(1) []
    ],
    pub TransceiverControl0 [
        /// Resets the module, self-clearing
        USBRESET OFFSET(7) NUMBITS(1) [],
        /// Asynchronous resume interrupt enable
        USBRESMEN OFFSET(5) NUMBITS(1) [],
        SYNC_DET OFFSET(1) NUMBITS(1) [],
        USB_RESUME_INT OFFSET(0) NUMBITS(1) []
    ],
    pub ClockRecoveryControl [
        CLOCK_RECOVER_EN OFFSET(7) NUMBITS(1) [],
        RESET_RESUME_ROUGH_EN OFFSET(6) NUMBITS(1) [],
        RESTART_IFRTRIM_EN OFFSET(5) NUMBITS(1) []
    ],
    pub ClockRecoveryIrcEnable [
        /// 48 MHz IRC enable
        IRC_EN OFFSET(1) NUMBITS(1) [],
        /// IRC48M regulator enable
        REG_EN OFFSET(0) NUMBITS(1) []
    ],
    pub ClockRecoveryInterruptStatus [
        /// Frequency trim overflow, write 1 to clear
        OVF_ERROR OFFSET(4) NUMBITS(1) []
    ]
];

pub const USB0_BASE: usize = 0x4007_2000;

pub const USB0: StaticRef<Registers> = unsafe { StaticRef::new(USB0_BASE as *const Registers) };

pub const USB_BASE_ADDRS: [usize; 1] = [USB0_BASE];
pub const USB_BASE_PTRS: [StaticRef<Registers>; 1] = [USB0];
pub const USB_IRQS: [Interrupt; 1] = [Interrupt::USB0];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn byte_registers_on_word_stride() {
        assert_eq!(size_of::<Endpoint>(), 4);
        assert_eq!(offset_of!(Registers, istat), 0x80);
        assert_eq!(offset_of!(Registers, endpoint), 0xC0);
        assert_eq!(offset_of!(Registers, usbctrl), 0x100);
        assert_eq!(offset_of!(Registers, clk_recover_int_status), 0x15C);
    }

    #[test]
    fn token_pids() {
        let mut token: LocalRegisterCopy<u8, Token::Register> = LocalRegisterCopy::new(0);
        token.modify(Token::TOKENPID::Setup + Token::TOKENENDPT.val(2));
        assert_eq!(token.get(), 0xD2);
    }
}
