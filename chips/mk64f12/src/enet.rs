//! 10/100 Ethernet MAC (ENET) with IEEE 1588 timer.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// IEEE 1588 timer compare/capture channels.
pub const NUM_TIMER_CHANNELS: usize = 4;

register_structs! {
    /// ENET memory map.
    pub Registers {
        (0x000 => _reserved0),
        /// Interrupt Event
        (0x004 => pub eir: ReadWrite<u32, InterruptEvent::Register>),
        /// Interrupt Mask
        (0x008 => pub eimr: ReadWrite<u32, InterruptEvent::Register>),
        (0x00C => _reserved1),
        /// Receive Descriptor Active
        (0x010 => pub rdar: ReadWrite<u32, ReceiveDescriptorActive::Register>),
        /// Transmit Descriptor Active
        (0x014 => pub tdar: ReadWrite<u32, TransmitDescriptorActive::Register>),
        (0x018 => _reserved2),
        /// Ethernet Control
        (0x024 => pub ecr: ReadWrite<u32, EthernetControl::Register>),
        (0x028 => _reserved3),
        /// MII Management Frame
        (0x040 => pub mmfr: ReadWrite<u32, MiiManagementFrame::Register>),
        /// MII Speed Control
        (0x044 => pub mscr: ReadWrite<u32, MiiSpeedControl::Register>),
        (0x048 => _reserved4),
        /// MIB Control
        (0x064 => pub mibc: ReadWrite<u32, MibControl::Register>),
        (0x068 => _reserved5),
        /// Receive Control
        (0x084 => pub rcr: ReadWrite<u32, ReceiveControl::Register>),
        (0x088 => _reserved6),
        /// Transmit Control
        (0x0C4 => pub tcr: ReadWrite<u32, TransmitControl::Register>),
        (0x0C8 => _reserved7),
        /// Physical Address Lower, first four bytes of the MAC address
        (0x0E4 => pub palr: ReadWrite<u32>),
        /// Physical Address Upper
        (0x0E8 => pub paur: ReadWrite<u32, PhysicalAddressUpper::Register>),
        /// Opcode/Pause Duration
        (0x0EC => pub opd: ReadWrite<u32, OpcodePauseDuration::Register>),
        (0x0F0 => _reserved8),
        /// Descriptor Individual Upper Address
        (0x118 => pub iaur: ReadWrite<u32>),
        /// Descriptor Individual Lower Address
        (0x11C => pub ialr: ReadWrite<u32>),
        /// Descriptor Group Upper Address
        (0x120 => pub gaur: ReadWrite<u32>),
        /// Descriptor Group Lower Address
        (0x124 => pub galr: ReadWrite<u32>),
        (0x128 => _reserved9),
        /// Transmit FIFO Watermark
        (0x144 => pub tfwr: ReadWrite<u32, TransmitFifoWatermark::Register>),
        (0x148 => _reserved10),
        /// Receive Descriptor Ring Start
        (0x180 => pub rdsr: ReadWrite<u32, ReceiveDescriptorRingStart::Register>),
        /// Transmit Buffer Descriptor Ring Start
        (0x184 => pub tdsr: ReadWrite<u32, TransmitDescriptorRingStart::Register>),
        /// Maximum Receive Buffer Size
        (0x188 => pub mrbr: ReadWrite<u32, MaximumReceiveBuffer::Register>),
        (0x18C => _reserved11),
        /// Receive FIFO Section Full Threshold
        (0x190 => pub rsfl: ReadWrite<u32, FifoSection::Register>),
        /// Receive FIFO Section Empty Threshold
        (0x194 => pub rsem: ReadWrite<u32, ReceiveFifoSectionEmpty::Register>),
        /// Receive FIFO Almost Empty Threshold
        (0x198 => pub raem: ReadWrite<u32, FifoSection::Register>),
        /// Receive FIFO Almost Full Threshold
        (0x19C => pub rafl: ReadWrite<u32, FifoSection::Register>),
        /// Transmit FIFO Section Empty Threshold
        (0x1A0 => pub tsem: ReadWrite<u32, FifoSection::Register>),
        /// Transmit FIFO Almost Empty Threshold
        (0x1A4 => pub taem: ReadWrite<u32, FifoSection::Register>),
        /// Transmit FIFO Almost Full Threshold
        (0x1A8 => pub tafl: ReadWrite<u32, FifoSection::Register>),
        /// Transmit Inter-Packet Gap
        (0x1AC => pub tipg: ReadWrite<u32, TransmitInterPacketGap::Register>),
        /// Frame Truncation Length
        (0x1B0 => pub ftrl: ReadWrite<u32, FrameTruncationLength::Register>),
        (0x1B4 => _reserved12),
        /// Transmit Accelerator Function Configuration
        (0x1C0 => pub tacc: ReadWrite<u32, TransmitAccelerator::Register>),
        /// Receive Accelerator Function Configuration
        (0x1C4 => pub racc: ReadWrite<u32, ReceiveAccelerator::Register>),
        (0x1C8 => _reserved13),
        /// Reserved statistic
        (0x200 => pub rmon_t_drop: ReadOnly<u32>),
        /// Tx packet count
        (0x204 => pub rmon_t_packets: ReadOnly<u32>),
        /// Tx broadcast packets
        (0x208 => pub rmon_t_bc_pkt: ReadOnly<u32>),
        /// Tx multicast packets
        (0x20C => pub rmon_t_mc_pkt: ReadOnly<u32>),
        /// Tx packets with CRC or align error
        (0x210 => pub rmon_t_crc_align: ReadOnly<u32>),
        /// Tx packets less than 64 bytes with good CRC
        (0x214 => pub rmon_t_undersize: ReadOnly<u32>),
        /// Tx packets greater than MAX_FL with good CRC
        (0x218 => pub rmon_t_oversize: ReadOnly<u32>),
        /// Tx packets less than 64 bytes with bad CRC
        (0x21C => pub rmon_t_frag: ReadOnly<u32>),
        /// Tx packets greater than MAX_FL with bad CRC
        (0x220 => pub rmon_t_jab: ReadOnly<u32>),
        /// Tx collision count
        (0x224 => pub rmon_t_col: ReadOnly<u32>),
        (0x228 => pub rmon_t_p64: ReadOnly<u32>),
        (0x22C => pub rmon_t_p65to127: ReadOnly<u32>),
        (0x230 => pub rmon_t_p128to255: ReadOnly<u32>),
        (0x234 => pub rmon_t_p256to511: ReadOnly<u32>),
        (0x238 => pub rmon_t_p512to1023: ReadOnly<u32>),
        (0x23C => pub rmon_t_p1024to2047: ReadOnly<u32>),
        (0x240 => pub rmon_t_p_gte2048: ReadOnly<u32>),
        /// Tx octets
        (0x244 => pub rmon_t_octets: ReadOnly<u32>),
        /// Reserved statistic
        (0x248 => pub ieee_t_drop: ReadOnly<u32>),
        /// Frames transmitted OK
        (0x24C => pub ieee_t_frame_ok: ReadOnly<u32>),
        /// Frames transmitted with single collision
        (0x250 => pub ieee_t_1col: ReadOnly<u32>),
        /// Frames transmitted with multiple collisions
        (0x254 => pub ieee_t_mcol: ReadOnly<u32>),
        /// Frames transmitted after deferral delay
        (0x258 => pub ieee_t_def: ReadOnly<u32>),
        /// Frames transmitted with late collision
        (0x25C => pub ieee_t_lcol: ReadOnly<u32>),
        /// Frames transmitted with excessive collisions
        (0x260 => pub ieee_t_excol: ReadOnly<u32>),
        /// Frames transmitted with Tx FIFO underrun
        (0x264 => pub ieee_t_macerr: ReadOnly<u32>),
        /// Frames transmitted with carrier sense error
        (0x268 => pub ieee_t_cserr: ReadOnly<u32>),
        /// Reserved statistic
        (0x26C => pub ieee_t_sqe: ReadOnly<u32>),
        /// Flow control pause frames transmitted
        (0x270 => pub ieee_t_fdxfc: ReadOnly<u32>),
        /// Octet count for frames transmitted without error
        (0x274 => pub ieee_t_octets_ok: ReadOnly<u32>),
        (0x278 => _reserved14),
        /// Rx packet count
        (0x284 => pub rmon_r_packets: ReadOnly<u32>),
        /// Rx broadcast packets
        (0x288 => pub rmon_r_bc_pkt: ReadOnly<u32>),
        /// Rx multicast packets
        (0x28C => pub rmon_r_mc_pkt: ReadOnly<u32>),
        /// Rx packets with CRC or align error
        (0x290 => pub rmon_r_crc_align: ReadOnly<u32>),
        (0x294 => pub rmon_r_undersize: ReadOnly<u32>),
        (0x298 => pub rmon_r_oversize: ReadOnly<u32>),
        (0x29C => pub rmon_r_frag: ReadOnly<u32>),
        (0x2A0 => pub rmon_r_jab: ReadOnly<u32>),
        /// Reserved statistic
        (0x2A4 => pub rmon_r_resvd_0: ReadOnly<u32>),
        (0x2A8 => pub rmon_r_p64: ReadOnly<u32>),
        (0x2AC => pub rmon_r_p65to127: ReadOnly<u32>),
        (0x2B0 => pub rmon_r_p128to255: ReadOnly<u32>),
        (0x2B4 => pub rmon_r_p256to511: ReadOnly<u32>),
        (0x2B8 => pub rmon_r_p512to1023: ReadOnly<u32>),
        (0x2BC => pub rmon_r_p1024to2047: ReadOnly<u32>),
        (0x2C0 => pub rmon_r_p_gte2048: ReadOnly<u32>),
        /// Rx octets
        (0x2C4 => pub rmon_r_octets: ReadOnly<u32>),
        /// Frames not counted correctly
        (0x2C8 => pub ieee_r_drop: ReadOnly<u32>),
        /// Frames received OK
        (0x2CC => pub ieee_r_frame_ok: ReadOnly<u32>),
        /// Frames received with CRC error
        (0x2D0 => pub ieee_r_crc: ReadOnly<u32>),
        /// Frames received with alignment error
        (0x2D4 => pub ieee_r_align: ReadOnly<u32>),
        /// Receive FIFO overflow count
        (0x2D8 => pub ieee_r_macerr: ReadOnly<u32>),
        /// Flow control pause frames received
        (0x2DC => pub ieee_r_fdxfc: ReadOnly<u32>),
        /// Octet count for frames received without error
        (0x2E0 => pub ieee_r_octets_ok: ReadOnly<u32>),
        (0x2E4 => _reserved15),
        /// Adjustable Timer Control
        (0x400 => pub atcr: ReadWrite<u32, TimerControl::Register>),
        /// Timer Value
        (0x404 => pub atvr: ReadWrite<u32>),
        /// Timer Offset
        (0x408 => pub atoff: ReadWrite<u32>),
        /// Timer Period
        (0x40C => pub atper: ReadWrite<u32>),
        /// Timer Correction
        (0x410 => pub atcor: ReadWrite<u32, TimerCorrection::Register>),
        /// Time-Stamping Clock Period
        (0x414 => pub atinc: ReadWrite<u32, TimerIncrement::Register>),
        /// Timestamp of Last Transmitted Frame
        (0x418 => pub atstmp: ReadOnly<u32>),
        (0x41C => _reserved16),
        /// Timer Global Status
        (0x604 => pub tgsr: ReadWrite<u32, TimerGlobalStatus::Register>),
        (0x608 => pub channel: [TimerChannel; NUM_TIMER_CHANNELS]),
        (0x628 => @END),
    },

    pub TimerChannel {
        /// Timer Control Status
        (0x0 => pub tcsr: ReadWrite<u32, TimerChannelControl::Register>),
        /// Timer Compare Capture
        (0x4 => pub tccr: ReadWrite<u32>),
        (0x8 => @END),
    }
}

register_bitfields![u32,
    /// Shared by EIR and EIMR.
    pub InterruptEvent [
        /// Babbling Receive Error
        BABR OFFSET(30) NUMBITS(1) [],
        /// Babbling Transmit Error
        BABT OFFSET(29) NUMBITS(1) [],
        /// Graceful Stop Complete
        GRA OFFSET(28) NUMBITS(1) [],
        /// Transmit Frame
        TXF OFFSET(27) NUMBITS(1) [],
        /// Transmit Buffer
        TXB OFFSET(26) NUMBITS(1) [],
        /// Receive Frame
        RXF OFFSET(25) NUMBITS(1) [],
        /// Receive Buffer
        RXB OFFSET(24) NUMBITS(1) [],
        /// MII Interrupt
        MII OFFSET(23) NUMBITS(1) [],
        /// Ethernet Bus Error
        EBERR OFFSET(22) NUMBITS(1) [],
        /// Late Collision
        LC OFFSET(21) NUMBITS(1) [],
        /// Collision Retry Limit
        RL OFFSET(20) NUMBITS(1) [],
        /// Transmit FIFO Underrun
        UN OFFSET(19) NUMBITS(1) [],
        /// Payload Receive Error
        PLR OFFSET(18) NUMBITS(1) [],
        /// Node Wakeup Request
        WAKEUP OFFSET(17) NUMBITS(1) [],
        /// Transmit Timestamp Available
        TS_AVAIL OFFSET(16) NUMBITS(1) [],
        /// Timestamp Timer
        TS_TIMER OFFSET(15) NUMBITS(1) []
    ],
    pub ReceiveDescriptorActive [
        RDAR OFFSET(24) NUMBITS(1) []
    ],
    pub TransmitDescriptorActive [
        TDAR OFFSET(24) NUMBITS(1) []
    ],
    pub EthernetControl [
        /// Descriptor Byte Swapping Enable
        DBSWP OFFSET(8) NUMBITS(1) [],
        STOPEN OFFSET(7) NUMBITS(1) [],
        DBGEN OFFSET(6) NUMBITS(1) [],
        /// Enhanced frame time-stamping functions enable
        EN1588 OFFSET(4) NUMBITS(1) [],
        SLEEP OFFSET(3) NUMBITS(1) [],
        /// Magic Packet Detection Enable
        MAGICEN OFFSET(2) NUMBITS(1) [],
        ETHEREN OFFSET(1) NUMBITS(1) [],
        RESET OFFSET(0) NUMBITS(1) []
    ],
    pub MiiManagementFrame [
        /// Start Of Frame Delimiter, 01 for clause 22
        ST OFFSET(30) NUMBITS(2) [],
        /// Operation Code
        OP OFFSET(28) NUMBITS(2) [
            Write = 1,
            Read = 2
        ],
        /// PHY Address
        PA OFFSET(23) NUMBITS(5) [],
        /// Register Address
        RA OFFSET(18) NUMBITS(5) [],
        /// Turn Around, must be 10
        TA OFFSET(16) NUMBITS(2) [],
        /// Management Frame Data
        DATA OFFSET(0) NUMBITS(16) []
    ],
    pub MiiSpeedControl [
        /// Hold time on MDIO output, in internal module clocks
        HOLDTIME OFFSET(8) NUMBITS(3) [],
        /// Disable Preamble
        DIS_PRE OFFSET(7) NUMBITS(1) [],
        /// MDC frequency is module clock / ((MII_SPEED + 1) * 2)
        MII_SPEED OFFSET(1) NUMBITS(6) []
    ],
    pub MibControl [
        MIB_DIS OFFSET(31) NUMBITS(1) [],
        MIB_IDLE OFFSET(30) NUMBITS(1) [],
        MIB_CLEAR OFFSET(29) NUMBITS(1) []
    ],
    pub ReceiveControl [
        /// Graceful Receive Stopped
        GRS OFFSET(31) NUMBITS(1) [],
        /// Payload Length Check Disable
        NLC OFFSET(30) NUMBITS(1) [],
        /// Maximum Frame Length
        MAX_FL OFFSET(16) NUMBITS(14) [],
        /// MAC Control Frame Enable
        CFEN OFFSET(15) NUMBITS(1) [],
        /// Terminate/Forward Received CRC
        CRCFWD OFFSET(14) NUMBITS(1) [],
        /// Terminate/Forward Pause Frames
        PAUFWD OFFSET(13) NUMBITS(1) [],
        /// Enable Frame Padding Remove On Receive
        PADEN OFFSET(12) NUMBITS(1) [],
        /// Enables 10-Mbit/s mode of the RMII
        RMII_10T OFFSET(9) NUMBITS(1) [],
        RMII_MODE OFFSET(8) NUMBITS(1) [],
        /// Flow Control Enable
        FCE OFFSET(5) NUMBITS(1) [],
        /// Broadcast Frame Reject
        BC_REJ OFFSET(4) NUMBITS(1) [],
        /// Promiscuous Mode
        PROM OFFSET(3) NUMBITS(1) [],
        /// Media Independent Interface Mode, must be set
        MII_MODE OFFSET(2) NUMBITS(1) [],
        /// Disable Receive On Transmit
        DRT OFFSET(1) NUMBITS(1) [],
        /// Internal Loopback
        LOOP OFFSET(0) NUMBITS(1) []
    ],
    pub TransmitControl [
        /// Forward Frame From Application With CRC
        CRCFWD OFFSET(9) NUMBITS(1) [],
        /// Set MAC Address On Transmit
        ADDINS OFFSET(8) NUMBITS(1) [],
        /// Source MAC Address Select On Transmit
        ADDSEL OFFSET(5) NUMBITS(3) [],
        /// Receive Frame Control Pause
        RFC_PAUSE OFFSET(4) NUMBITS(1) [],
        /// Transmit Frame Control Pause
        TFC_PAUSE OFFSET(3) NUMBITS(1) [],
        /// Full-Duplex Enable
        FDEN OFFSET(2) NUMBITS(1) [],
        /// Graceful Transmit Stop
        GTS OFFSET(0) NUMBITS(1) []
    ],
    pub PhysicalAddressUpper [
        /// Bytes 4 and 5 of the MAC address
        PADDR2 OFFSET(16) NUMBITS(16) [],
        /// Type field in PAUSE frames, reads 0x8808
        TYPE OFFSET(0) NUMBITS(16) []
    ],
    pub OpcodePauseDuration [
        OPCODE OFFSET(16) NUMBITS(16) [],
        PAUSE_DUR OFFSET(0) NUMBITS(16) []
    ],
    pub TransmitFifoWatermark [
        /// Store And Forward Enable
        STRFWD OFFSET(8) NUMBITS(1) [],
        /// Transmit FIFO Write, in 64-byte units
        TFWR OFFSET(0) NUMBITS(6) []
    ],
    pub ReceiveDescriptorRingStart [
        R_DES_START OFFSET(3) NUMBITS(29) []
    ],
    pub TransmitDescriptorRingStart [
        X_DES_START OFFSET(3) NUMBITS(29) []
    ],
    pub MaximumReceiveBuffer [
        /// Receive buffer size in 16-byte units
        R_BUF_SIZE OFFSET(4) NUMBITS(10) []
    ],
    /// FIFO thresholds, in 64-bit words.
    pub FifoSection [
        THRESHOLD OFFSET(0) NUMBITS(8) []
    ],
    pub ReceiveFifoSectionEmpty [
        /// Statistics frame section empty threshold
        STAT_SECTION_EMPTY OFFSET(16) NUMBITS(5) [],
        RX_SECTION_EMPTY OFFSET(0) NUMBITS(8) []
    ],
    pub TransmitInterPacketGap [
        /// Inter-packet gap, in bytes
        IPG OFFSET(0) NUMBITS(5) []
    ],
    pub FrameTruncationLength [
        TRUNC_FL OFFSET(0) NUMBITS(14) []
    ],
    pub TransmitAccelerator [
        /// Insert protocol checksum
        PROCHK OFFSET(4) NUMBITS(1) [],
        /// Insert IP header checksum
        IPCHK OFFSET(3) NUMBITS(1) [],
        /// TX FIFO shift-16
        SHIFT16 OFFSET(0) NUMBITS(1) []
    ],
    pub ReceiveAccelerator [
        /// RX FIFO shift-16
        SHIFT16 OFFSET(7) NUMBITS(1) [],
        /// Enable discard of frames with MAC layer errors
        LINEDIS OFFSET(6) NUMBITS(1) [],
        /// Enable discard of frames with wrong protocol checksum
        PRODIS OFFSET(2) NUMBITS(1) [],
        /// Enable discard of frames with wrong IPv4 header checksum
        IPDIS OFFSET(1) NUMBITS(1) [],
        /// Enable padding removal for short IP frames
        PADREM OFFSET(0) NUMBITS(1) []
    ],
    pub TimerControl [
        /// Enable Timer Slave Mode
        SLAVE OFFSET(13) NUMBITS(1) [],
        /// Capture Timer Value
        CAPTURE OFFSET(11) NUMBITS(1) [],
        /// Reset Timer
        RESTART OFFSET(9) NUMBITS(1) [],
        /// Enables event signal output assertion on period event
        PINPER OFFSET(7) NUMBITS(1) [],
        /// Enable Periodical Event
        PEREN OFFSET(4) NUMBITS(1) [],
        /// Reset Timer On Offset Event
        OFFRST OFFSET(3) NUMBITS(1) [],
        /// Enable One-Shot Offset Event
        OFFEN OFFSET(2) NUMBITS(1) [],
        /// Enable Timer
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub TimerCorrection [
        /// Correction Counter Wrap-Around Value
        COR OFFSET(0) NUMBITS(31) []
    ],
    pub TimerIncrement [
        /// Correction Increment Value
        INC_CORR OFFSET(8) NUMBITS(7) [],
        /// Clock Period Of The Timestamping Clock, in ns
        INC OFFSET(0) NUMBITS(7) []
    ],
    pub TimerGlobalStatus [
        TF3 OFFSET(3) NUMBITS(1) [],
        TF2 OFFSET(2) NUMBITS(1) [],
        TF1 OFFSET(1) NUMBITS(1) [],
        TF0 OFFSET(0) NUMBITS(1) []
    ],
    pub TimerChannelControl [
        /// Timer Flag
        TF OFFSET(7) NUMBITS(1) [],
        /// Timer Interrupt Enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// Timer Mode
        TMODE OFFSET(2) NUMBITS(4) [
            Disabled = 0b0000,
            CaptureRising = 0b0001,
            CaptureFalling = 0b0010,
            CaptureBoth = 0b0011,
            CompareSoftware = 0b0100,
            CompareToggle = 0b0101,
            CompareClear = 0b0110,
            CompareSet = 0b0111,
            CompareClearOnOverflowSet = 0b1010,
            CompareSetOnOverflowClear = 0b1011,
            PulseLow = 0b1110,
            PulseHigh = 0b1111
        ],
        /// Timer DMA Request Enable
        TDRE OFFSET(0) NUMBITS(1) []
    ]
];

pub const ENET_BASE: usize = 0x400C_0000;

pub const ENET: StaticRef<Registers> = unsafe { StaticRef::new(ENET_BASE as *const Registers) };

pub const ENET_BASE_ADDRS: [usize; 1] = [ENET_BASE];
pub const ENET_BASE_PTRS: [StaticRef<Registers>; 1] = [ENET];
pub const ENET_TRANSMIT_IRQS: [Interrupt; 1] = [Interrupt::ENET_Transmit];
pub const ENET_RECEIVE_IRQS: [Interrupt; 1] = [Interrupt::ENET_Receive];
pub const ENET_ERROR_IRQS: [Interrupt; 1] = [Interrupt::ENET_Error];
pub const ENET_1588_TIMER_IRQS: [Interrupt; 1] = [Interrupt::ENET_1588_Timer];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(Registers, eir), 0x004);
        assert_eq!(offset_of!(Registers, rcr), 0x084);
        assert_eq!(offset_of!(Registers, rmon_t_packets), 0x204);
        assert_eq!(offset_of!(Registers, ieee_t_octets_ok), 0x274);
        assert_eq!(offset_of!(Registers, rmon_r_packets), 0x284);
        assert_eq!(offset_of!(Registers, ieee_r_octets_ok), 0x2E0);
        assert_eq!(offset_of!(Registers, atcr), 0x400);
        assert_eq!(offset_of!(Registers, channel), 0x608);
        assert_eq!(size_of::<Registers>(), 0x628);
    }

    #[test]
    fn mii_read_frame() {
        let mut mmfr: LocalRegisterCopy<u32, MiiManagementFrame::Register> =
            LocalRegisterCopy::new(0);
        mmfr.modify(
            MiiManagementFrame::ST.val(1)
                + MiiManagementFrame::OP::Read
                + MiiManagementFrame::PA.val(0)
                + MiiManagementFrame::RA.val(1)
                + MiiManagementFrame::TA.val(2),
        );
        assert_eq!(mmfr.get(), 0x6006_0000);
    }
}
