//! FlexCAN (CAN).
//!
//! CAN0 has 16 message buffers. With the Rx FIFO enabled (`MCR[RFEN]`) the
//! first buffers are taken over by the FIFO and its ID filter table, so
//! those words are read through [`RxFifoFilter`] instead of the message
//! buffer fields.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const NUM_MESSAGE_BUFFERS: usize = 16;

register_structs! {
    /// FlexCAN memory map.
    pub Registers {
        (0x000 => pub mcr: ReadWrite<u32, ModuleConfiguration::Register>),
        (0x004 => pub ctrl1: ReadWrite<u32, Control1::Register>),
        /// Free Running Timer
        (0x008 => pub timer: ReadWrite<u32, FreeRunningTimer::Register>),
        (0x00C => _reserved0),
        /// Rx Mailboxes Global Mask
        (0x010 => pub rxmgmask: ReadWrite<u32>),
        /// Rx Buffer 14 Mask
        (0x014 => pub rx14mask: ReadWrite<u32>),
        /// Rx Buffer 15 Mask
        (0x018 => pub rx15mask: ReadWrite<u32>),
        /// Error Counter
        (0x01C => pub ecr: ReadWrite<u32, ErrorCounter::Register>),
        (0x020 => pub esr1: ReadWrite<u32, ErrorStatus1::Register>),
        (0x024 => _reserved1),
        /// Interrupt mask, one bit per message buffer
        (0x028 => pub imask1: ReadWrite<u32>),
        (0x02C => _reserved2),
        /// Interrupt flags, one bit per message buffer, write 1 to clear
        (0x030 => pub iflag1: ReadWrite<u32>),
        (0x034 => pub ctrl2: ReadWrite<u32, Control2::Register>),
        (0x038 => pub esr2: ReadOnly<u32, ErrorStatus2::Register>),
        (0x03C => _reserved3),
        (0x044 => pub crcr: ReadOnly<u32, CrcRegister::Register>),
        /// Rx FIFO Global Mask
        (0x048 => pub rxfgmask: ReadWrite<u32>),
        /// Rx FIFO Information
        (0x04C => pub rxfir: ReadOnly<u32, RxFifoInformation::Register>),
        (0x050 => _reserved4),
        (0x080 => pub mb: [MessageBuffer; NUM_MESSAGE_BUFFERS]),
        (0x180 => _reserved5),
        /// Rx Individual Masks
        (0x880 => pub rximr: [ReadWrite<u32>; NUM_MESSAGE_BUFFERS]),
        (0x8C0 => @END),
    },

    pub MessageBuffer {
        (0x0 => pub cs: ReadWrite<u32, CodeAndStatus::Register>),
        (0x4 => pub id: ReadWrite<u32, Identifier::Register>),
        (0x8 => pub word0: ReadWrite<u32, DataWord0::Register>),
        (0xC => pub word1: ReadWrite<u32, DataWord1::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub ModuleConfiguration [
        /// Module Disable
        MDIS OFFSET(31) NUMBITS(1) [],
        /// Freeze Enable
        FRZ OFFSET(30) NUMBITS(1) [],
        /// Rx FIFO Enable
        RFEN OFFSET(29) NUMBITS(1) [],
        /// Halt FlexCAN
        HALT OFFSET(28) NUMBITS(1) [],
        /// FlexCAN Not Ready
        NOTRDY OFFSET(27) NUMBITS(1) [],
        /// Wake Up Interrupt Mask
        WAKMSK OFFSET(26) NUMBITS(1) [],
        /// Soft Reset
        SOFTRST OFFSET(25) NUMBITS(1) [],
        /// Freeze Mode Acknowledge
        FRZACK OFFSET(24) NUMBITS(1) [],
        /// Supervisor Mode
        SUPV OFFSET(23) NUMBITS(1) [],
        /// Self Wake Up
        SLFWAK OFFSET(22) NUMBITS(1) [],
        /// Warning Interrupt Enable
        WRNEN OFFSET(21) NUMBITS(1) [],
        /// Low-Power Mode Acknowledge
        LPMACK OFFSET(20) NUMBITS(1) [],
        /// Wake Up Source
        WAKSRC OFFSET(19) NUMBITS(1) [],
        /// Self Reception Disable
        SRXDIS OFFSET(17) NUMBITS(1) [],
        /// Individual Rx Masking And Queue Enable
        IRMQ OFFSET(16) NUMBITS(1) [],
        /// Local Priority Enable
        LPRIOEN OFFSET(13) NUMBITS(1) [],
        /// Abort Enable
        AEN OFFSET(12) NUMBITS(1) [],
        /// ID Acceptance Mode
        IDAM OFFSET(8) NUMBITS(2) [
            FormatA = 0,
            FormatB = 1,
            FormatC = 2,
            FormatD = 3
        ],
        /// Number Of The Last Message Buffer
        MAXMB OFFSET(0) NUMBITS(7) []
    ],
    pub Control1 [
        /// Prescaler Division Factor
        PRESDIV OFFSET(24) NUMBITS(8) [],
        /// Resync Jump Width
        RJW OFFSET(22) NUMBITS(2) [],
        /// Phase Segment 1
        PSEG1 OFFSET(19) NUMBITS(3) [],
        /// Phase Segment 2
        PSEG2 OFFSET(16) NUMBITS(3) [],
        /// Bus Off Mask
        BOFFMSK OFFSET(15) NUMBITS(1) [],
        /// Error Mask
        ERRMSK OFFSET(14) NUMBITS(1) [],
        /// CAN Engine Clock Source
        CLKSRC OFFSET(13) NUMBITS(1) [
            Oscillator = 0,
            Peripheral = 1
        ],
        /// Loop Back Mode
        LPB OFFSET(12) NUMBITS(1) [],
        /// Tx Warning Interrupt Mask
        TWRNMSK OFFSET(11) NUMBITS(1) [],
        /// Rx Warning Interrupt Mask
        RWRNMSK OFFSET(10) NUMBITS(1) [],
        /// CAN Bit Sampling
        SMP OFFSET(7) NUMBITS(1) [
            One = 0,
            Three = 1
        ],
        /// Bus Off Recovery, set to disable automatic recovery
        BOFFREC OFFSET(6) NUMBITS(1) [],
        /// Timer Sync
        TSYN OFFSET(5) NUMBITS(1) [],
        /// Lowest Buffer Transmitted First
        LBUF OFFSET(4) NUMBITS(1) [],
        /// Listen-Only Mode
        LOM OFFSET(3) NUMBITS(1) [],
        /// Propagation Segment
        PROPSEG OFFSET(0) NUMBITS(3) []
    ],
    pub FreeRunningTimer [
        TIMER OFFSET(0) NUMBITS(16) []
    ],
    pub ErrorCounter [
        RXERRCNT OFFSET(8) NUMBITS(8) [],
        TXERRCNT OFFSET(0) NUMBITS(8) []
    ],
    pub ErrorStatus1 [
        /// CAN Synchronization Status
        SYNCH OFFSET(18) NUMBITS(1) [],
        TWRNINT OFFSET(17) NUMBITS(1) [],
        RWRNINT OFFSET(16) NUMBITS(1) [],
        /// Bit1 Error
        BIT1ERR OFFSET(15) NUMBITS(1) [],
        /// Bit0 Error
        BIT0ERR OFFSET(14) NUMBITS(1) [],
        ACKERR OFFSET(13) NUMBITS(1) [],
        CRCERR OFFSET(12) NUMBITS(1) [],
        /// Form Error
        FRMERR OFFSET(11) NUMBITS(1) [],
        /// Stuffing Error
        STFERR OFFSET(10) NUMBITS(1) [],
        TXWRN OFFSET(9) NUMBITS(1) [],
        RXWRN OFFSET(8) NUMBITS(1) [],
        IDLE OFFSET(7) NUMBITS(1) [],
        /// FlexCAN In Transmission
        TX OFFSET(6) NUMBITS(1) [],
        /// Fault Confinement State
        FLTCONF OFFSET(4) NUMBITS(2) [
            ErrorActive = 0,
            ErrorPassive = 1,
            BusOff = 2
        ],
        /// FlexCAN In Reception
        RX OFFSET(3) NUMBITS(1) [],
        BOFFINT OFFSET(2) NUMBITS(1) [],
        ERRINT OFFSET(1) NUMBITS(1) [],
        WAKINT OFFSET(0) NUMBITS(1) []
    ],
    pub Control2 [
        /// Write-Access To Memory In Freeze Mode
        WRMFRZ OFFSET(28) NUMBITS(1) [],
        /// Number Of Rx FIFO Filters
        RFFN OFFSET(24) NUMBITS(4) [],
        /// Tx Arbitration Start Delay
        TASD OFFSET(19) NUMBITS(5) [],
        /// Mailboxes Reception Priority
        MRP OFFSET(18) NUMBITS(1) [],
        /// Remote Request Storing
        RRS OFFSET(17) NUMBITS(1) [],
        /// Entire Frame Arbitration Field Comparison Enable For Rx Mailboxes
        EACEN OFFSET(16) NUMBITS(1) []
    ],
    pub ErrorStatus2 [
        /// Lowest Priority Tx Mailbox
        LPTM OFFSET(16) NUMBITS(7) [],
        /// Valid Priority Status
        VPS OFFSET(14) NUMBITS(1) [],
        /// Inactive Mailbox
        IMB OFFSET(13) NUMBITS(1) []
    ],
    pub CrcRegister [
        /// CRC Mailbox
        MBCRC OFFSET(16) NUMBITS(7) [],
        /// Transmitted CRC value
        TXCRC OFFSET(0) NUMBITS(15) []
    ],
    pub RxFifoInformation [
        /// Identifier Acceptance Filter Hit Indicator
        IDHIT OFFSET(0) NUMBITS(9) []
    ],
    pub CodeAndStatus [
        /// Message Buffer Code. Rx codes have bit 3 clear, Tx codes set.
        CODE OFFSET(24) NUMBITS(4) [
            RxInactive = 0b0000,
            RxBusy = 0b0001,
            RxFull = 0b0010,
            RxEmpty = 0b0100,
            RxOverrun = 0b0110,
            TxInactive = 0b1000,
            TxAbort = 0b1001,
            RxRanswer = 0b1010,
            TxData = 0b1100,
            TxTanswer = 0b1110
        ],
        /// Substitute Remote Request
        SRR OFFSET(22) NUMBITS(1) [],
        /// ID Extended
        IDE OFFSET(21) NUMBITS(1) [],
        /// Remote Transmission Request
        RTR OFFSET(20) NUMBITS(1) [],
        /// Length of the data in bytes
        DLC OFFSET(16) NUMBITS(4) [],
        /// Free-Running Counter Time stamp
        TIME_STAMP OFFSET(0) NUMBITS(16) []
    ],
    pub Identifier [
        /// Local priority
        PRIO OFFSET(29) NUMBITS(3) [],
        /// Standard frame identifier
        STD OFFSET(18) NUMBITS(11) [],
        /// Extended frame identifier, low bits
        EXT OFFSET(0) NUMBITS(18) []
    ],
    pub DataWord0 [
        DATA_BYTE_0 OFFSET(24) NUMBITS(8) [],
        DATA_BYTE_1 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_3 OFFSET(0) NUMBITS(8) []
    ],
    pub DataWord1 [
        DATA_BYTE_4 OFFSET(24) NUMBITS(8) [],
        DATA_BYTE_5 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_6 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_7 OFFSET(0) NUMBITS(8) []
    ],
    /// Rx FIFO ID filter table element in format A (one full ID per word).
    pub RxFifoFilter [
        /// Remote Frame
        RTR OFFSET(31) NUMBITS(1) [],
        /// Extended Frame
        IDE OFFSET(30) NUMBITS(1) [],
        /// Standard ID in bits 29-19, or extended ID in bits 29-1
        RXIDA_STD OFFSET(19) NUMBITS(11) [],
        RXIDA_EXT OFFSET(1) NUMBITS(29) []
    ]
];

/// Full 29-bit identifier of an extended frame, as stored in `ID`.
pub const fn extended_id(std: u32, ext: u32) -> u32 {
    (std & 0x7FF) << 18 | (ext & 0x3_FFFF)
}

pub const CAN0_BASE: usize = 0x4002_4000;

pub const CAN0: StaticRef<Registers> = unsafe { StaticRef::new(CAN0_BASE as *const Registers) };

pub const CAN_BASE_ADDRS: [usize; 1] = [CAN0_BASE];
pub const CAN_BASE_PTRS: [StaticRef<Registers>; 1] = [CAN0];
pub const CAN_ORED_MESSAGE_BUFFER_IRQS: [Interrupt; 1] = [Interrupt::CAN0_ORed_Message_buffer];
pub const CAN_BUS_OFF_IRQS: [Interrupt; 1] = [Interrupt::CAN0_Bus_Off];
pub const CAN_ERROR_IRQS: [Interrupt; 1] = [Interrupt::CAN0_Error];
pub const CAN_TX_WARNING_IRQS: [Interrupt; 1] = [Interrupt::CAN0_Tx_Warning];
pub const CAN_RX_WARNING_IRQS: [Interrupt; 1] = [Interrupt::CAN0_Rx_Warning];
pub const CAN_WAKE_UP_IRQS: [Interrupt; 1] = [Interrupt::CAN0_Wake_Up];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<MessageBuffer>(), 0x10);
        assert_eq!(offset_of!(Registers, mb), 0x80);
        assert_eq!(offset_of!(Registers, rximr), 0x880);
        assert_eq!(size_of::<Registers>(), 0x8C0);
    }

    #[test]
    fn message_buffer_control() {
        let mut cs: LocalRegisterCopy<u32, CodeAndStatus::Register> = LocalRegisterCopy::new(0);
        cs.modify(
            CodeAndStatus::CODE::TxData
                + CodeAndStatus::DLC.val(8)
                + CodeAndStatus::IDE::SET
                + CodeAndStatus::SRR::SET,
        );
        assert_eq!(cs.get(), 0x0C68_0000);

        let id = extended_id(0x123, 0x2_BEEF);
        let id: LocalRegisterCopy<u32, Identifier::Register> = LocalRegisterCopy::new(id);
        assert_eq!(id.read(Identifier::STD), 0x123);
        assert_eq!(id.read(Identifier::EXT), 0x2_BEEF);
    }
}
