//! Flash configuration field (NV).
//!
//! Sixteen bytes of program flash at `0x400` loaded into the FTFE registers
//! at reset: the backdoor comparison key, protection defaults, security and
//! boot options.

use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;
use tock_registers::register_structs;

use crate::ftfe::{FlashOptions, FlashSecurity, SecurityState};
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// Backdoor comparison key, bytes 3..0 then 7..4
        (0x0 => pub backkey3: ReadOnly<u8>),
        (0x1 => pub backkey2: ReadOnly<u8>),
        (0x2 => pub backkey1: ReadOnly<u8>),
        (0x3 => pub backkey0: ReadOnly<u8>),
        (0x4 => pub backkey7: ReadOnly<u8>),
        (0x5 => pub backkey6: ReadOnly<u8>),
        (0x6 => pub backkey5: ReadOnly<u8>),
        (0x7 => pub backkey4: ReadOnly<u8>),
        /// Non-volatile program flash protection
        (0x8 => pub fprot3: ReadOnly<u8>),
        (0x9 => pub fprot2: ReadOnly<u8>),
        (0xA => pub fprot1: ReadOnly<u8>),
        (0xB => pub fprot0: ReadOnly<u8>),
        (0xC => pub fsec: ReadOnly<u8, FlashSecurity::Register>),
        (0xD => pub fopt: ReadOnly<u8, FlashOptions::Register>),
        (0xE => pub feprot: ReadOnly<u8>),
        (0xF => pub fdprot: ReadOnly<u8>),
        (0x10 => @END),
    }
}

impl Registers {
    /// The backdoor key in `BACKKEY0..7` order.
    pub fn backdoor_key(&self) -> [u8; 8] {
        [
            self.backkey0.get(),
            self.backkey1.get(),
            self.backkey2.get(),
            self.backkey3.get(),
            self.backkey4.get(),
            self.backkey5.get(),
            self.backkey6.get(),
            self.backkey7.get(),
        ]
    }

    /// Program flash protection as one word, `FPROT0` least significant.
    pub fn program_flash_protection(&self) -> u32 {
        u32::from_le_bytes([
            self.fprot0.get(),
            self.fprot1.get(),
            self.fprot2.get(),
            self.fprot3.get(),
        ])
    }

    pub fn security(&self) -> SecurityState {
        SecurityState::from_fsec(self.fsec.get())
    }
}

pub const FTFE_FLASH_CONFIG_BASE: usize = 0x0000_0400;

pub const FTFE_FLASH_CONFIG: StaticRef<Registers> =
    unsafe { StaticRef::new(FTFE_FLASH_CONFIG_BASE as *const Registers) };

pub const NV_BASE_ADDRS: [usize; 1] = [FTFE_FLASH_CONFIG_BASE];
pub const NV_BASE_PTRS: [StaticRef<Registers>; 1] = [FTFE_FLASH_CONFIG];

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C, align(4))]
    struct Image([u8; 16]);

    #[test]
    fn reads_a_flash_config_image() {
        let image = Image([
            0x03, 0x02, 0x01, 0x00, 0x07, 0x06, 0x05, 0x04, // backdoor key
            0xFF, 0xFF, 0xFF, 0xFE, // FPROT3..0
            0xFE, 0xFF, 0xFF, 0xFF, // FSEC, FOPT, FEPROT, FDPROT
        ]);
        let nv = unsafe { &*(image.0.as_ptr() as *const Registers) };
        assert_eq!(nv.backdoor_key(), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(nv.program_flash_protection(), 0xFFFF_FFFE);
        assert!(!nv.security().secure);
        assert!(nv.fopt.is_set(FlashOptions::LPBOOT));
    }
}
