//! Device interrupt vectors for `cortex-m-rt`.
//!
//! Every handler defaults to `DefaultHandler` through `device.x`; a
//! `#[interrupt]` function with the same name overrides it.

use crate::nvic::NUM_INTERRUPTS;

pub union Vector {
    handler: unsafe extern "C" fn(),
    reserved: usize,
}

extern "C" {
    fn DMA0();
    fn DMA1();
    fn DMA2();
    fn DMA3();
    fn DMA4();
    fn DMA5();
    fn DMA6();
    fn DMA7();
    fn DMA8();
    fn DMA9();
    fn DMA10();
    fn DMA11();
    fn DMA12();
    fn DMA13();
    fn DMA14();
    fn DMA15();
    fn DMA_Error();
    fn MCM();
    fn FTFE();
    fn Read_Collision();
    fn LVD_LVW();
    fn LLWU();
    fn WDOG_EWM();
    fn RNG();
    fn I2C0();
    fn I2C1();
    fn SPI0();
    fn SPI1();
    fn I2S0_Tx();
    fn I2S0_Rx();
    fn UART0_LON();
    fn UART0_RX_TX();
    fn UART0_ERR();
    fn UART1_RX_TX();
    fn UART1_ERR();
    fn UART2_RX_TX();
    fn UART2_ERR();
    fn UART3_RX_TX();
    fn UART3_ERR();
    fn ADC0();
    fn CMP0();
    fn CMP1();
    fn FTM0();
    fn FTM1();
    fn FTM2();
    fn CMT();
    fn RTC();
    fn RTC_Seconds();
    fn PIT0();
    fn PIT1();
    fn PIT2();
    fn PIT3();
    fn PDB0();
    fn USB0();
    fn USBDCD();
    fn DAC0();
    fn MCG();
    fn LPTMR0();
    fn PORTA();
    fn PORTB();
    fn PORTC();
    fn PORTD();
    fn PORTE();
    fn SWI();
    fn SPI2();
    fn UART4_RX_TX();
    fn UART4_ERR();
    fn UART5_RX_TX();
    fn UART5_ERR();
    fn CMP2();
    fn FTM3();
    fn DAC1();
    fn ADC1();
    fn I2C2();
    fn CAN0_ORed_Message_buffer();
    fn CAN0_Bus_Off();
    fn CAN0_Error();
    fn CAN0_Tx_Warning();
    fn CAN0_Rx_Warning();
    fn CAN0_Wake_Up();
    fn SDHC();
    fn ENET_1588_Timer();
    fn ENET_Transmit();
    fn ENET_Receive();
    fn ENET_Error();
}

#[doc(hidden)]
#[link_section = ".vector_table.interrupts"]
#[no_mangle]
pub static __INTERRUPTS: [Vector; NUM_INTERRUPTS] = [
    Vector { handler: DMA0 },
    Vector { handler: DMA1 },
    Vector { handler: DMA2 },
    Vector { handler: DMA3 },
    Vector { handler: DMA4 },
    Vector { handler: DMA5 },
    Vector { handler: DMA6 },
    Vector { handler: DMA7 },
    Vector { handler: DMA8 },
    Vector { handler: DMA9 },
    Vector { handler: DMA10 },
    Vector { handler: DMA11 },
    Vector { handler: DMA12 },
    Vector { handler: DMA13 },
    Vector { handler: DMA14 },
    Vector { handler: DMA15 },
    Vector { handler: DMA_Error },
    Vector { handler: MCM },
    Vector { handler: FTFE },
    Vector { handler: Read_Collision },
    Vector { handler: LVD_LVW },
    Vector { handler: LLWU },
    Vector { handler: WDOG_EWM },
    Vector { handler: RNG },
    Vector { handler: I2C0 },
    Vector { handler: I2C1 },
    Vector { handler: SPI0 },
    Vector { handler: SPI1 },
    Vector { handler: I2S0_Tx },
    Vector { handler: I2S0_Rx },
    Vector { handler: UART0_LON },
    Vector { handler: UART0_RX_TX },
    Vector { handler: UART0_ERR },
    Vector { handler: UART1_RX_TX },
    Vector { handler: UART1_ERR },
    Vector { handler: UART2_RX_TX },
    Vector { handler: UART2_ERR },
    Vector { handler: UART3_RX_TX },
    Vector { handler: UART3_ERR },
    Vector { handler: ADC0 },
    Vector { handler: CMP0 },
    Vector { handler: CMP1 },
    Vector { handler: FTM0 },
    Vector { handler: FTM1 },
    Vector { handler: FTM2 },
    Vector { handler: CMT },
    Vector { handler: RTC },
    Vector { handler: RTC_Seconds },
    Vector { handler: PIT0 },
    Vector { handler: PIT1 },
    Vector { handler: PIT2 },
    Vector { handler: PIT3 },
    Vector { handler: PDB0 },
    Vector { handler: USB0 },
    Vector { handler: USBDCD },
    Vector { reserved: 0 },
    Vector { handler: DAC0 },
    Vector { handler: MCG },
    Vector { handler: LPTMR0 },
    Vector { handler: PORTA },
    Vector { handler: PORTB },
    Vector { handler: PORTC },
    Vector { handler: PORTD },
    Vector { handler: PORTE },
    Vector { handler: SWI },
    Vector { handler: SPI2 },
    Vector { handler: UART4_RX_TX },
    Vector { handler: UART4_ERR },
    Vector { handler: UART5_RX_TX },
    Vector { handler: UART5_ERR },
    Vector { handler: CMP2 },
    Vector { handler: FTM3 },
    Vector { handler: DAC1 },
    Vector { handler: ADC1 },
    Vector { handler: I2C2 },
    Vector { handler: CAN0_ORed_Message_buffer },
    Vector { handler: CAN0_Bus_Off },
    Vector { handler: CAN0_Error },
    Vector { handler: CAN0_Tx_Warning },
    Vector { handler: CAN0_Rx_Warning },
    Vector { handler: CAN0_Wake_Up },
    Vector { handler: SDHC },
    Vector { handler: ENET_1588_Timer },
    Vector { handler: ENET_Transmit },
    Vector { handler: ENET_Receive },
    Vector { handler: ENET_Error },
];
