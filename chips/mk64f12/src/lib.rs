//! Peripheral access layer for the NXP Kinetis MK64F12 (Cortex-M4F).
//!
//! Each module describes one peripheral: a `Registers` block built with
//! `register_structs!`, its bitfields built with `register_bitfields!`, the
//! base address of every instance, a `StaticRef` constant per instance and
//! the CMSIS style instance tables (`*_BASE_ADDRS`, `*_BASE_PTRS`, `*_IRQS`).
//!
//! ```no_run
//! use mk64f12::{port, sim, uart};
//! use tock_registers::interfaces::ReadWriteable;
//!
//! sim::clocks::PORTB.enable(&sim::SIM);
//! port::PORTB.pcr[16].modify(port::PinControl::MUX::Alt3);
//! uart::UART0.c2.modify(uart::Control2::TE::SET + uart::Control2::RE::SET);
//! ```

#![no_std]
#![recursion_limit = "256"]

mod static_ref;

pub use static_ref::StaticRef;

pub mod nvic;
pub mod peripherals;

pub mod adc;
pub mod aips;
pub mod axbs;
pub mod can;
pub mod cau;
pub mod cmp;
pub mod cmt;
pub mod crc;
pub mod dac;
pub mod dma;
pub mod dmamux;
pub mod enet;
pub mod ewm;
pub mod fb;
pub mod fmc;
pub mod ftfe;
pub mod ftm;
pub mod gpio;
pub mod i2c;
pub mod i2s;
pub mod llwu;
pub mod lptmr;
pub mod mcg;
pub mod mcm;
pub mod nv;
pub mod osc;
pub mod pdb;
pub mod pit;
pub mod pmc;
pub mod port;
pub mod rcm;
pub mod rfsys;
pub mod rfvbat;
pub mod rng;
pub mod rtc;
pub mod sdhc;
pub mod sim;
pub mod smc;
pub mod spi;
pub mod sysmpu;
pub mod uart;
pub mod usb;
pub mod usbdcd;
pub mod vref;
pub mod wdog;

pub use nvic::{Exception, Interrupt};

#[cfg(feature = "rt")]
mod vectors;

#[cfg(feature = "rt")]
pub use cortex_m_rt::interrupt;
#[cfg(feature = "rt")]
pub use nvic::Interrupt as interrupt;
#[cfg(feature = "rt")]
pub use vectors::{Vector, __INTERRUPTS};
