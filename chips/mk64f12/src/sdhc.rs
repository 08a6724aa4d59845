//! Secured Digital Host Controller (SDHC).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// SDHC memory map.
    pub Registers {
        /// DMA System Address
        (0x000 => pub dsaddr: ReadWrite<u32>),
        /// Block Attributes
        (0x004 => pub blkattr: ReadWrite<u32, BlockAttributes::Register>),
        /// Command Argument
        (0x008 => pub cmdarg: ReadWrite<u32>),
        /// Transfer Type
        (0x00C => pub xfertyp: ReadWrite<u32, TransferType::Register>),
        /// Command Response 0-3
        (0x010 => pub cmdrsp: [ReadOnly<u32>; 4]),
        /// Buffer Data Port
        (0x020 => pub datport: ReadWrite<u32>),
        /// Present State
        (0x024 => pub prsstat: ReadOnly<u32, PresentState::Register>),
        /// Protocol Control
        (0x028 => pub proctl: ReadWrite<u32, ProtocolControl::Register>),
        /// System Control
        (0x02C => pub sysctl: ReadWrite<u32, SystemControl::Register>),
        /// Interrupt Status
        (0x030 => pub irqstat: ReadWrite<u32, InterruptStatus::Register>),
        /// Interrupt Status Enable
        (0x034 => pub irqstaten: ReadWrite<u32, InterruptStatus::Register>),
        /// Interrupt Signal Enable
        (0x038 => pub irqsigen: ReadWrite<u32, InterruptStatus::Register>),
        /// Auto CMD12 Error Status
        (0x03C => pub ac12err: ReadOnly<u32, AutoCmd12Error::Register>),
        /// Host Controller Capabilities
        (0x040 => pub htcapblt: ReadOnly<u32, HostCapabilities::Register>),
        /// Watermark Level
        (0x044 => pub wml: ReadWrite<u32, WatermarkLevel::Register>),
        (0x048 => _reserved0),
        /// Force Event
        (0x050 => pub fevt: WriteOnly<u32, ForceEvent::Register>),
        /// ADMA Error Status
        (0x054 => pub admaes: ReadOnly<u32, AdmaErrorStatus::Register>),
        /// ADMA System Address
        (0x058 => pub adsaddr: ReadWrite<u32>),
        (0x05C => _reserved1),
        /// Vendor Specific
        (0x0C0 => pub vendor: ReadWrite<u32, VendorSpecific::Register>),
        /// MMC Boot
        (0x0C4 => pub mmcboot: ReadWrite<u32, MmcBoot::Register>),
        (0x0C8 => _reserved2),
        /// Host Controller Version
        (0x0FC => pub hostver: ReadOnly<u32, HostVersion::Register>),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    pub BlockAttributes [
        BLKCNT OFFSET(16) NUMBITS(16) [],
        /// Transfer block size in bytes
        BLKSIZE OFFSET(0) NUMBITS(13) []
    ],
    pub TransferType [
        /// Command Index
        CMDINX OFFSET(24) NUMBITS(6) [],
        /// Command Type
        CMDTYP OFFSET(22) NUMBITS(2) [
            Normal = 0,
            Suspend = 1,
            Resume = 2,
            Abort = 3
        ],
        /// Data Present Select
        DPSEL OFFSET(21) NUMBITS(1) [],
        /// Command Index Check Enable
        CICEN OFFSET(20) NUMBITS(1) [],
        /// Command CRC Check Enable
        CCCEN OFFSET(19) NUMBITS(1) [],
        /// Response Type Select
        RSPTYP OFFSET(16) NUMBITS(2) [
            NoResponse = 0,
            Length136 = 1,
            Length48 = 2,
            Length48Busy = 3
        ],
        /// Multi/Single Block Select
        MSBSEL OFFSET(5) NUMBITS(1) [],
        /// Data Transfer Direction Select
        DTDSEL OFFSET(4) NUMBITS(1) [
            Write = 0,
            Read = 1
        ],
        /// Auto CMD12 Enable
        AC12EN OFFSET(2) NUMBITS(1) [],
        /// Block Count Enable
        BCEN OFFSET(1) NUMBITS(1) [],
        DMAEN OFFSET(0) NUMBITS(1) []
    ],
    pub PresentState [
        /// DAT Line Signal Level
        DLSL OFFSET(24) NUMBITS(8) [],
        /// CMD Line Signal Level
        CLSL OFFSET(23) NUMBITS(1) [],
        /// Write Protect Switch Pin Level
        WPSPL OFFSET(19) NUMBITS(1) [],
        /// Card Detect Pin Level
        CDPL OFFSET(18) NUMBITS(1) [],
        /// Card Inserted
        CINS OFFSET(16) NUMBITS(1) [],
        /// Buffer Read Enable
        BREN OFFSET(11) NUMBITS(1) [],
        /// Buffer Write Enable
        BWEN OFFSET(10) NUMBITS(1) [],
        /// Read Transfer Active
        RTA OFFSET(9) NUMBITS(1) [],
        /// Write Transfer Active
        WTA OFFSET(8) NUMBITS(1) [],
        /// SD Clock Gated Off Internally
        SDOFF OFFSET(7) NUMBITS(1) [],
        /// SDHC Clock Gated Off Internally
        PEROFF OFFSET(6) NUMBITS(1) [],
        /// System Clock Gated Off Internally
        HCKOFF OFFSET(5) NUMBITS(1) [],
        /// Bus Clock Gated Off Internally
        IPGOFF OFFSET(4) NUMBITS(1) [],
        /// SD Clock Stable
        SDSTB OFFSET(3) NUMBITS(1) [],
        /// Data Line Active
        DLA OFFSET(2) NUMBITS(1) [],
        /// Command Inhibit (DAT)
        CDIHB OFFSET(1) NUMBITS(1) [],
        /// Command Inhibit (CMD)
        CIHB OFFSET(0) NUMBITS(1) []
    ],
    pub ProtocolControl [
        /// Wakeup Event Enable On SD Card Removal
        WECRM OFFSET(26) NUMBITS(1) [],
        /// Wakeup Event Enable On SD Card Insertion
        WECINS OFFSET(25) NUMBITS(1) [],
        /// Wakeup Event Enable On Card Interrupt
        WECINT OFFSET(24) NUMBITS(1) [],
        /// Interrupt At Block Gap
        IABG OFFSET(19) NUMBITS(1) [],
        /// Read Wait Control
        RWCTL OFFSET(18) NUMBITS(1) [],
        /// Continue Request
        CREQ OFFSET(17) NUMBITS(1) [],
        /// Stop At Block Gap Request
        SABGREQ OFFSET(16) NUMBITS(1) [],
        /// DMA Select
        DMAS OFFSET(8) NUMBITS(2) [
            NoDma = 0,
            Adma1 = 1,
            Adma2 = 2
        ],
        /// Card Detect Signal Selection
        CDSS OFFSET(7) NUMBITS(1) [],
        /// Card Detect Test Level
        CDTL OFFSET(6) NUMBITS(1) [],
        /// Endian Mode
        EMODE OFFSET(4) NUMBITS(2) [
            BigEndian = 0,
            HalfWordBigEndian = 1,
            LittleEndian = 2
        ],
        /// DAT3 As Card Detection Pin
        D3CD OFFSET(3) NUMBITS(1) [],
        /// Data Transfer Width
        DTW OFFSET(1) NUMBITS(2) [
            OneBit = 0,
            FourBit = 1,
            EightBit = 2
        ],
        /// LED Control
        LCTL OFFSET(0) NUMBITS(1) []
    ],
    pub SystemControl [
        /// Initialization Active
        INITA OFFSET(27) NUMBITS(1) [],
        /// Software Reset For DAT Line
        RSTD OFFSET(26) NUMBITS(1) [],
        /// Software Reset For CMD Line
        RSTC OFFSET(25) NUMBITS(1) [],
        /// Software Reset For ALL
        RSTA OFFSET(24) NUMBITS(1) [],
        /// Data Timeout Counter Value, SDCLK x 2^(13 + DTOCV)
        DTOCV OFFSET(16) NUMBITS(4) [],
        /// SDCLK Frequency Select, a power-of-two prescaler
        SDCLKFS OFFSET(8) NUMBITS(8) [],
        /// Divisor, DVS + 1
        DVS OFFSET(4) NUMBITS(4) [],
        SDCLKEN OFFSET(3) NUMBITS(1) [],
        /// Peripheral Clock Enable
        PEREN OFFSET(2) NUMBITS(1) [],
        /// System Clock Enable
        HCKEN OFFSET(1) NUMBITS(1) [],
        /// IPG Clock Enable
        IPGEN OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by IRQSTAT, IRQSTATEN and IRQSIGEN. In IRQSTAT the flags are
    /// write 1 to clear.
    pub InterruptStatus [
        /// DMA Error
        DMAE OFFSET(28) NUMBITS(1) [],
        /// Auto CMD12 Error
        AC12E OFFSET(24) NUMBITS(1) [],
        /// Data End Bit Error
        DEBE OFFSET(22) NUMBITS(1) [],
        /// Data CRC Error
        DCE OFFSET(21) NUMBITS(1) [],
        /// Data Timeout Error
        DTOE OFFSET(20) NUMBITS(1) [],
        /// Command Index Error
        CIE OFFSET(19) NUMBITS(1) [],
        /// Command End Bit Error
        CEBE OFFSET(18) NUMBITS(1) [],
        /// Command CRC Error
        CCE OFFSET(17) NUMBITS(1) [],
        /// Command Timeout Error
        CTOE OFFSET(16) NUMBITS(1) [],
        /// Card Interrupt
        CINT OFFSET(8) NUMBITS(1) [],
        /// Card Removal
        CRM OFFSET(7) NUMBITS(1) [],
        /// Card Insertion
        CINS OFFSET(6) NUMBITS(1) [],
        /// Buffer Read Ready
        BRR OFFSET(5) NUMBITS(1) [],
        /// Buffer Write Ready
        BWR OFFSET(4) NUMBITS(1) [],
        /// DMA Interrupt
        DINT OFFSET(3) NUMBITS(1) [],
        /// Block Gap Event
        BGE OFFSET(2) NUMBITS(1) [],
        /// Transfer Complete
        TC OFFSET(1) NUMBITS(1) [],
        /// Command Complete
        CC OFFSET(0) NUMBITS(1) []
    ],
    pub AutoCmd12Error [
        /// Command Not Issued By Auto CMD12 Error
        CNIBAC12E OFFSET(7) NUMBITS(1) [],
        /// Auto CMD12 Index Error
        AC12IE OFFSET(4) NUMBITS(1) [],
        /// Auto CMD12 CRC Error
        AC12CE OFFSET(3) NUMBITS(1) [],
        /// Auto CMD12 End Bit Error
        AC12EBE OFFSET(2) NUMBITS(1) [],
        /// Auto CMD12 Timeout Error
        AC12TOE OFFSET(1) NUMBITS(1) [],
        /// Auto CMD12 Not Executed
        AC12NE OFFSET(0) NUMBITS(1) []
    ],
    pub HostCapabilities [
        /// 3.3 V support
        VS33 OFFSET(24) NUMBITS(1) [],
        /// Suspend/Resume Support
        SRS OFFSET(23) NUMBITS(1) [],
        DMAS OFFSET(22) NUMBITS(1) [],
        /// High Speed Support
        HSS OFFSET(21) NUMBITS(1) [],
        /// ADMA Support
        ADMAS OFFSET(20) NUMBITS(1) [],
        /// Max Block Length
        MBL OFFSET(16) NUMBITS(3) [
            Bytes512 = 0,
            Bytes1024 = 1,
            Bytes2048 = 2,
            Bytes4096 = 3
        ]
    ],
    pub WatermarkLevel [
        /// Write Watermark Level, in words
        WRWML OFFSET(16) NUMBITS(8) [],
        /// Read Watermark Level, in words
        RDWML OFFSET(0) NUMBITS(8) []
    ],
    pub ForceEvent [
        CINT OFFSET(31) NUMBITS(1) [],
        DMAE OFFSET(28) NUMBITS(1) [],
        AC12E OFFSET(24) NUMBITS(1) [],
        DEBE OFFSET(22) NUMBITS(1) [],
        DCE OFFSET(21) NUMBITS(1) [],
        DTOE OFFSET(20) NUMBITS(1) [],
        CIE OFFSET(19) NUMBITS(1) [],
        CEBE OFFSET(18) NUMBITS(1) [],
        CCE OFFSET(17) NUMBITS(1) [],
        CTOE OFFSET(16) NUMBITS(1) [],
        CNIBAC12E OFFSET(7) NUMBITS(1) [],
        AC12IE OFFSET(4) NUMBITS(1) [],
        AC12EBE OFFSET(3) NUMBITS(1) [],
        AC12CE OFFSET(2) NUMBITS(1) [],
        AC12TOE OFFSET(1) NUMBITS(1) [],
        AC12NE OFFSET(0) NUMBITS(1) []
    ],
    pub AdmaErrorStatus [
        /// ADMA Descriptor Error
        ADMADCE OFFSET(3) NUMBITS(1) [],
        /// ADMA Length Mismatch Error
        ADMALME OFFSET(2) NUMBITS(1) [],
        /// ADMA Error State
        ADMAES OFFSET(0) NUMBITS(2) [
            Stop = 0,
            FetchDescriptor = 1,
            ChangeAddress = 2,
            Transfer = 3
        ]
    ],
    pub VendorSpecific [
        /// Internal State Value
        INTSTVAL OFFSET(16) NUMBITS(8) [],
        /// Exact Block Number Block Read Enable For SDIO CMD53
        EXBLKNU OFFSET(1) NUMBITS(1) []
    ],
    pub MmcBoot [
        /// Stop At Block Gap Value Of Automatic Mode
        BOOTBLKCNT OFFSET(16) NUMBITS(16) [],
        AUTOSABGEN OFFSET(7) NUMBITS(1) [],
        BOOTEN OFFSET(6) NUMBITS(1) [],
        BOOTMODE OFFSET(5) NUMBITS(1) [
            Normal = 0,
            Alternative = 1
        ],
        BOOTACK OFFSET(4) NUMBITS(1) [],
        /// Boot ACK Time Out Counter Value
        DTOCVACK OFFSET(0) NUMBITS(4) []
    ],
    pub HostVersion [
        /// Vendor Version Number
        VVN OFFSET(8) NUMBITS(8) [],
        /// Specification Version Number
        SVN OFFSET(0) NUMBITS(8) []
    ]
];

pub const SDHC_BASE: usize = 0x400B_1000;

pub const SDHC: StaticRef<Registers> = unsafe { StaticRef::new(SDHC_BASE as *const Registers) };

pub const SDHC_BASE_ADDRS: [usize; 1] = [SDHC_BASE];
pub const SDHC_BASE_PTRS: [StaticRef<Registers>; 1] = [SDHC];
pub const SDHC_IRQS: [Interrupt; 1] = [Interrupt::SDHC];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn command_transfer_type() {
        let mut xfertyp: LocalRegisterCopy<u32, TransferType::Register> = LocalRegisterCopy::new(0);
        xfertyp.modify(
            TransferType::CMDINX.val(17)
                + TransferType::RSPTYP::Length48
                + TransferType::CICEN::SET
                + TransferType::CCCEN::SET
                + TransferType::DPSEL::SET
                + TransferType::DTDSEL::Read,
        );
        assert_eq!(xfertyp.get(), 0x113A_0010);
    }
}
