//! Serial Peripheral Interface (DSPI).
//!
//! `CTAR` and `PUSHR` change meaning in slave mode. They are typed with the
//! master layout; apply [`ClockAndTransferAttributesSlave`] and
//! [`TxFifoPushSlave`] through `LocalRegisterCopy` or raw `get`/`set` when the
//! module is configured as a slave.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// DSPI memory map.
    pub Registers {
        (0x00 => pub mcr: ReadWrite<u32, ModuleConfiguration::Register>),
        (0x04 => _reserved0),
        (0x08 => pub tcr: ReadWrite<u32, TransferCount::Register>),
        /// Clock and transfer attributes registers 0 and 1
        (0x0C => pub ctar: [ReadWrite<u32, ClockAndTransferAttributes::Register>; 2]),
        (0x14 => _reserved1),
        (0x2C => pub sr: ReadWrite<u32, Status::Register>),
        (0x30 => pub rser: ReadWrite<u32, RequestSelectAndEnable::Register>),
        (0x34 => pub pushr: ReadWrite<u32, TxFifoPushCommand::Register>),
        (0x38 => pub popr: ReadOnly<u32>),
        /// Transmit FIFO debug view, entries 0 through 3
        (0x3C => pub txfr: [ReadOnly<u32, TxFifo::Register>; 4]),
        (0x4C => _reserved2),
        /// Receive FIFO debug view, entries 0 through 3
        (0x7C => pub rxfr: [ReadOnly<u32>; 4]),
        (0x8C => @END),
    }
}

register_bitfields![u32,
    pub ModuleConfiguration [
        /// Master/Slave Mode Select
        MSTR OFFSET(31) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ],
        /// Continuous SCK Enable
        CONT_SCKE OFFSET(30) NUMBITS(1) [],
        /// DSPI Configuration
        DCONF OFFSET(28) NUMBITS(2) [
            SPI = 0
        ],
        /// Freeze
        FRZ OFFSET(27) NUMBITS(1) [],
        /// Modified Timing Format Enable
        MTFE OFFSET(26) NUMBITS(1) [],
        /// Receive FIFO Overflow Overwrite Enable
        ROOE OFFSET(24) NUMBITS(1) [],
        /// Peripheral Chip Select x Inactive State
        PCSIS OFFSET(16) NUMBITS(6) [
            AllInactiveLow = 0x00,
            AllInactiveHigh = 0x3F
        ],
        /// Doze Enable
        DOZE OFFSET(15) NUMBITS(1) [],
        /// Module Disable
        MDIS OFFSET(14) NUMBITS(1) [],
        /// Disable Transmit FIFO
        DIS_TXF OFFSET(13) NUMBITS(1) [],
        /// Disable Receive FIFO
        DIS_RXF OFFSET(12) NUMBITS(1) [],
        /// Flush TX FIFO
        CLR_TXF OFFSET(11) NUMBITS(1) [],
        /// Flush RX FIFO
        CLR_RXF OFFSET(10) NUMBITS(1) [],
        /// Sample Point
        SMPL_PT OFFSET(8) NUMBITS(2) [
            ZeroCycles = 0,
            OneCycle = 1,
            TwoCycles = 2
        ],
        /// Halt
        HALT OFFSET(0) NUMBITS(1) []
    ],

    pub TransferCount [
        SPI_TCNT OFFSET(16) NUMBITS(16) []
    ],

    pub ClockAndTransferAttributes [
        /// Double Baud Rate
        DBR OFFSET(31) NUMBITS(1) [],
        /// Frame Size, minus one
        FMSZ OFFSET(27) NUMBITS(4) [],
        /// Clock Polarity
        CPOL OFFSET(26) NUMBITS(1) [
            IdleLow = 0,
            IdleHigh = 1
        ],
        /// Clock Phase
        CPHA OFFSET(25) NUMBITS(1) [
            SampleLeading = 0,
            SampleTrailing = 1
        ],
        /// LSB First
        LSBFE OFFSET(24) NUMBITS(1) [
            MsbFirst = 0,
            LsbFirst = 1
        ],
        /// PCS to SCK Delay Prescaler
        PCSSCK OFFSET(22) NUMBITS(2) [
            Delay1 = 0,
            Delay3 = 1,
            Delay5 = 2,
            Delay7 = 3
        ],
        /// After SCK Delay Prescaler
        PASC OFFSET(20) NUMBITS(2) [
            Delay1 = 0,
            Delay3 = 1,
            Delay5 = 2,
            Delay7 = 3
        ],
        /// Delay after Transfer Prescaler
        PDT OFFSET(18) NUMBITS(2) [
            Delay1 = 0,
            Delay3 = 1,
            Delay5 = 2,
            Delay7 = 3
        ],
        /// Baud Rate Prescaler
        PBR OFFSET(16) NUMBITS(2) [
            Div2 = 0,
            Div3 = 1,
            Div5 = 2,
            Div7 = 3
        ],
        /// PCS to SCK Delay Scaler
        CSSCK OFFSET(12) NUMBITS(4) [],
        /// After SCK Delay Scaler
        ASC OFFSET(8) NUMBITS(4) [],
        /// Delay After Transfer Scaler
        DT OFFSET(4) NUMBITS(4) [],
        /// Baud Rate Scaler
        BR OFFSET(0) NUMBITS(4) []
    ],

    /// CTAR0 in slave mode
    pub ClockAndTransferAttributesSlave [
        FMSZ OFFSET(27) NUMBITS(5) [],
        CPOL OFFSET(26) NUMBITS(1) [
            IdleLow = 0,
            IdleHigh = 1
        ],
        CPHA OFFSET(25) NUMBITS(1) [
            SampleLeading = 0,
            SampleTrailing = 1
        ]
    ],

    pub Status [
        /// Transfer Complete Flag
        TCF OFFSET(31) NUMBITS(1) [],
        /// TX and RX Status
        TXRXS OFFSET(30) NUMBITS(1) [],
        /// End of Queue Flag
        EOQF OFFSET(28) NUMBITS(1) [],
        /// Transmit FIFO Underflow Flag
        TFUF OFFSET(27) NUMBITS(1) [],
        /// Transmit FIFO Fill Flag
        TFFF OFFSET(25) NUMBITS(1) [],
        /// Receive FIFO Overflow Flag
        RFOF OFFSET(19) NUMBITS(1) [],
        /// Receive FIFO Drain Flag
        RFDF OFFSET(17) NUMBITS(1) [],
        /// TX FIFO Counter
        TXCTR OFFSET(12) NUMBITS(4) [],
        /// Transmit Next Pointer
        TXNXTPTR OFFSET(8) NUMBITS(4) [],
        /// RX FIFO Counter
        RXCTR OFFSET(4) NUMBITS(4) [],
        /// Pop Next Pointer
        POPNXTPTR OFFSET(0) NUMBITS(4) []
    ],

    pub RequestSelectAndEnable [
        TCF_RE OFFSET(31) NUMBITS(1) [],
        EOQF_RE OFFSET(28) NUMBITS(1) [],
        TFUF_RE OFFSET(27) NUMBITS(1) [],
        TFFF_RE OFFSET(25) NUMBITS(1) [],
        /// Transmit FIFO Fill DMA or Interrupt Request Select
        TFFF_DIRS OFFSET(24) NUMBITS(1) [
            Interrupt = 0,
            Dma = 1
        ],
        RFOF_RE OFFSET(19) NUMBITS(1) [],
        RFDF_RE OFFSET(17) NUMBITS(1) [],
        /// Receive FIFO Drain DMA or Interrupt Request Select
        RFDF_DIRS OFFSET(16) NUMBITS(1) [
            Interrupt = 0,
            Dma = 1
        ]
    ],

    pub TxFifoPushCommand [
        /// Continuous Peripheral Chip Select Enable
        CONT OFFSET(31) NUMBITS(1) [
            ChipSelectInactiveBetweenTxfers = 0,
            ChipSelectAssertedBetweenTxfers = 1
        ],
        /// Clock and Transfer Attributes Select
        CTAS OFFSET(28) NUMBITS(3) [
            Ctar0 = 0,
            Ctar1 = 1
        ],
        /// End Of Queue
        EOQ OFFSET(27) NUMBITS(1) [],
        /// Clear Transfer Counter
        CTCNT OFFSET(26) NUMBITS(1) [],
        /// Select which PCS signals are to be asserted for the transfer
        PCS OFFSET(16) NUMBITS(6) [],
        TXDATA OFFSET(0) NUMBITS(16) []
    ],

    /// PUSHR in slave mode
    pub TxFifoPushSlave [
        TXDATA OFFSET(0) NUMBITS(32) []
    ],

    pub TxFifo [
        /// Transmit Command or Transmit Data
        TXCMD_TXDATA OFFSET(16) NUMBITS(16) [],
        TXDATA OFFSET(0) NUMBITS(16) []
    ]
];

pub const SPI0_BASE: usize = 0x4002_C000;
pub const SPI1_BASE: usize = 0x4002_D000;
pub const SPI2_BASE: usize = 0x400A_C000;

pub const SPI0: StaticRef<Registers> = unsafe { StaticRef::new(SPI0_BASE as *const Registers) };
pub const SPI1: StaticRef<Registers> = unsafe { StaticRef::new(SPI1_BASE as *const Registers) };
pub const SPI2: StaticRef<Registers> = unsafe { StaticRef::new(SPI2_BASE as *const Registers) };

pub const SPI_BASE_ADDRS: [usize; 3] = [SPI0_BASE, SPI1_BASE, SPI2_BASE];
pub const SPI_BASE_PTRS: [StaticRef<Registers>; 3] = [SPI0, SPI1, SPI2];
pub const SPI_IRQS: [Interrupt; 3] = [Interrupt::SPI0, Interrupt::SPI1, Interrupt::SPI2];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn slave_frame_size_is_wider() {
        assert_eq!(ClockAndTransferAttributes::FMSZ.mask, 0xF);
        assert_eq!(ClockAndTransferAttributesSlave::FMSZ.mask, 0x1F);
        assert_eq!(
            ClockAndTransferAttributes::FMSZ.shift,
            ClockAndTransferAttributesSlave::FMSZ.shift
        );
    }

    #[test]
    fn push_command() {
        let mut pushr: LocalRegisterCopy<u32, TxFifoPushCommand::Register> =
            LocalRegisterCopy::new(0);
        pushr.modify(
            TxFifoPushCommand::CONT::ChipSelectAssertedBetweenTxfers
                + TxFifoPushCommand::EOQ::SET
                + TxFifoPushCommand::PCS.val(0b1)
                + TxFifoPushCommand::TXDATA.val(0xA5),
        );
        assert_eq!(pushr.get(), 0x8801_00A5);
    }
}
