//! Flash Memory Module (FTFE).
//!
//! Commands are issued by loading the FCCOB registers (command code in
//! `fccob0`) and clearing `FSTAT[CCIF]` by writing 1 to it.

use core::fmt;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// Flash registers.
    pub Registers {
        (0x00 => pub fstat: ReadWrite<u8, FlashStatus::Register>),
        (0x01 => pub fcnfg: ReadWrite<u8, FlashConfiguration::Register>),
        (0x02 => pub fsec: ReadOnly<u8, FlashSecurity::Register>),
        (0x03 => pub fopt: ReadOnly<u8, FlashOptions::Register>),
        /// Common command object registers, in memory order
        (0x04 => pub fccob3: ReadWrite<u8>),
        (0x05 => pub fccob2: ReadWrite<u8>),
        (0x06 => pub fccob1: ReadWrite<u8>),
        (0x07 => pub fccob0: ReadWrite<u8>),
        (0x08 => pub fccob7: ReadWrite<u8>),
        (0x09 => pub fccob6: ReadWrite<u8>),
        (0x0A => pub fccob5: ReadWrite<u8>),
        (0x0B => pub fccob4: ReadWrite<u8>),
        (0x0C => pub fccobb: ReadWrite<u8>),
        (0x0D => pub fccoba: ReadWrite<u8>),
        (0x0E => pub fccob9: ReadWrite<u8>),
        (0x0F => pub fccob8: ReadWrite<u8>),
        /// Program flash protection registers
        (0x10 => pub fprot3: ReadWrite<u8>),
        (0x11 => pub fprot2: ReadWrite<u8>),
        (0x12 => pub fprot1: ReadWrite<u8>),
        (0x13 => pub fprot0: ReadWrite<u8>),
        (0x14 => _reserved0),
        /// EEPROM protection register
        (0x16 => pub feprot: ReadWrite<u8>),
        /// Data flash protection register
        (0x17 => pub fdprot: ReadWrite<u8>),
        (0x18 => @END),
    }
}

register_bitfields![u8,
    pub FlashStatus [
        /// Command Complete Interrupt Flag
        CCIF OFFSET(7) NUMBITS(1) [],
        /// Flash Read Collision Error Flag
        RDCOLERR OFFSET(6) NUMBITS(1) [],
        /// Flash Access Error Flag
        ACCERR OFFSET(5) NUMBITS(1) [],
        /// Flash Protection Violation Flag
        FPVIOL OFFSET(4) NUMBITS(1) [],
        /// Memory Controller Command Completion Status Flag
        MGSTAT0 OFFSET(0) NUMBITS(1) []
    ],
    pub FlashConfiguration [
        CCIE OFFSET(7) NUMBITS(1) [],
        RDCOLLIE OFFSET(6) NUMBITS(1) [],
        ERSAREQ OFFSET(5) NUMBITS(1) [],
        ERSSUSP OFFSET(4) NUMBITS(1) [],
        SWAP OFFSET(3) NUMBITS(1) [],
        PFLSH OFFSET(2) NUMBITS(1) [],
        RAMRDY OFFSET(1) NUMBITS(1) [],
        EEERDY OFFSET(0) NUMBITS(1) []
    ],
    pub FlashSecurity [
        /// Backdoor Key Security Enable
        KEYEN OFFSET(6) NUMBITS(2) [
            Disabled = 0b00,
            Enabled = 0b10
        ],
        /// Mass Erase Enable
        MEEN OFFSET(4) NUMBITS(2) [
            Enabled = 0b00,
            Disabled = 0b10
        ],
        /// Freescale Failure Analysis Access Code
        FSLACC OFFSET(2) NUMBITS(2) [
            Granted = 0b00,
            Denied = 0b01
        ],
        /// Flash Security
        SEC OFFSET(0) NUMBITS(2) [
            Secure = 0b11,
            Unsecure = 0b10
        ]
    ],
    pub FlashOptions [
        /// NMI pin enable, active low
        NMI_DIS OFFSET(2) NUMBITS(1) [],
        /// EzPort enable, active low
        EZPORT_DIS OFFSET(1) NUMBITS(1) [],
        /// Low power boot, active low
        LPBOOT OFFSET(0) NUMBITS(1) []
    ]
];

/// Decoded `FSEC` security settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SecurityState {
    pub secure: bool,
    pub backdoor_key_enabled: bool,
    pub mass_erase_enabled: bool,
    pub failure_analysis_granted: bool,
}

impl SecurityState {
    pub fn from_fsec(fsec: u8) -> SecurityState {
        let field = |f: tock_registers::fields::Field<u8, FlashSecurity::Register>| f.read(fsec);
        SecurityState {
            secure: field(FlashSecurity::SEC) != 0b10,
            backdoor_key_enabled: field(FlashSecurity::KEYEN) == 0b10,
            mass_erase_enabled: field(FlashSecurity::MEEN) != 0b10,
            failure_analysis_granted: matches!(field(FlashSecurity::FSLACC), 0b00 | 0b11),
        }
    }
}

impl fmt::Display for SecurityState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, backdoor key {}, mass erase {}",
            if self.secure { "secure" } else { "unsecure" },
            if self.backdoor_key_enabled { "enabled" } else { "disabled" },
            if self.mass_erase_enabled { "enabled" } else { "disabled" },
        )
    }
}

/// Flash command codes, written to `FCCOB0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FlashCommand {
    /// Check that a block has been erased
    Read1sBlock = 0x00,
    Read1sSection = 0x01,
    /// Check that a programmed phrase reads back correctly
    ProgramCheck = 0x02,
    /// Read the IFR or version ID
    ReadResource = 0x03,
    /// Program 8 previously erased bytes
    ProgramPhrase = 0x07,
    EraseFlashBlock = 0x08,
    EraseFlashSector = 0x09,
    /// Program from the section program buffer in FlexRAM
    ProgramSection = 0x0B,
    Read1sAllBlocks = 0x40,
    ReadOnce = 0x41,
    ProgramOnce = 0x43,
    EraseAllBlocks = 0x44,
    VerifyBackdoorAccessKey = 0x45,
    SwapControl = 0x46,
    /// Partition FlexNVM between data flash and EEPROM backup
    ProgramPartition = 0x80,
    SetFlexRamFunction = 0x81,
}

pub const FTFE_BASE: usize = 0x4002_0000;

pub const FTFE: StaticRef<Registers> = unsafe { StaticRef::new(FTFE_BASE as *const Registers) };

pub const FTFE_BASE_ADDRS: [usize; 1] = [FTFE_BASE];
pub const FTFE_BASE_PTRS: [StaticRef<Registers>; 1] = [FTFE];
pub const FTFE_COMMAND_COMPLETE_IRQS: [Interrupt; 1] = [Interrupt::FTFE];
pub const FTFE_READ_COLLISION_IRQS: [Interrupt; 1] = [Interrupt::Read_Collision];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_default_is_unsecure() {
        // 0xFE is the FSEC value programmed by the usual flash config field
        let state = SecurityState::from_fsec(0xFE);
        assert!(!state.secure);
        assert!(!state.backdoor_key_enabled);
        assert!(state.mass_erase_enabled);
        assert!(state.failure_analysis_granted);
    }

    #[test]
    fn erased_flash_is_secure() {
        let state = SecurityState::from_fsec(0xFF);
        assert!(state.secure);
        assert!(!state.backdoor_key_enabled);
    }

    #[test]
    fn mass_erase_can_be_disabled() {
        // SEC unsecure, MEEN = 0b10
        let state = SecurityState::from_fsec(0b1110_1110);
        assert!(!state.mass_erase_enabled);
    }

    #[test]
    fn command_codes() {
        assert_eq!(FlashCommand::ProgramPhrase as u8, 0x07);
        assert_eq!(FlashCommand::EraseFlashSector as u8, 0x09);
        assert_eq!(FlashCommand::SetFlexRamFunction as u8, 0x81);
    }
}
