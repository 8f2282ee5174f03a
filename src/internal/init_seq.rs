//! DP83TC81x Register Initialization Tables
//!
//! Ordered `(mmd, register, value)` sequences pushed to the PHY at bring-up
//! and before a TDR run. Entries are written in order; the leading
//! `0x001F = 0x8000` / `0x0523 = 0x0001` pair unlocks the tuning registers
//! and the trailing pair relocks them.

/// One register write in an initialization sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitReg {
    /// MMD device address
    pub mmd: u8,
    /// Register address within the MMD
    pub reg: u16,
    /// Value to write
    pub value: u16,
}

impl InitReg {
    const fn new(mmd: u8, reg: u16, value: u16) -> Self {
        Self { mmd, reg, value }
    }
}

const VEND2: u8 = 0x1F;
const PMAPMD: u8 = 0x01;

/// CS2.0 tuning for a PHY strapped as master
pub static MASTER_CS2_0_INIT: [InitReg; 16] = [
    InitReg::new(VEND2, 0x001F, 0x8000),
    InitReg::new(VEND2, 0x0523, 0x0001),
    InitReg::new(PMAPMD, 0x0834, 0xC001),
    InitReg::new(VEND2, 0x081C, 0x0FE2),
    InitReg::new(VEND2, 0x0872, 0x0300),
    InitReg::new(VEND2, 0x0879, 0x0F00),
    InitReg::new(VEND2, 0x0806, 0x2952),
    InitReg::new(VEND2, 0x0807, 0x3361),
    InitReg::new(VEND2, 0x0808, 0x3D7B),
    InitReg::new(VEND2, 0x083E, 0x045F),
    InitReg::new(VEND2, 0x0834, 0x8000),
    InitReg::new(VEND2, 0x0862, 0x00E8),
    InitReg::new(VEND2, 0x0896, 0x32CB),
    InitReg::new(VEND2, 0x003E, 0x0009),
    InitReg::new(VEND2, 0x001F, 0x4000),
    InitReg::new(VEND2, 0x0523, 0x0000),
];

/// CS2.0 tuning for a PHY strapped as slave
pub static SLAVE_CS2_0_INIT: [InitReg; 8] = [
    InitReg::new(VEND2, 0x001F, 0x8000),
    InitReg::new(VEND2, 0x0523, 0x0001),
    InitReg::new(PMAPMD, 0x0834, 0x8001),
    InitReg::new(VEND2, 0x0873, 0x0821),
    InitReg::new(VEND2, 0x0896, 0x22FF),
    InitReg::new(VEND2, 0x089E, 0x0000),
    InitReg::new(VEND2, 0x001F, 0x4000),
    InitReg::new(VEND2, 0x0523, 0x0000),
];

/// TDR timing and threshold setup, written before every cable test
pub static TDR_CONFIG_INIT: [InitReg; 9] = [
    InitReg::new(VEND2, 0x0523, 0x0001),
    InitReg::new(VEND2, 0x0827, 0x4800),
    InitReg::new(VEND2, 0x0301, 0x1701),
    InitReg::new(VEND2, 0x0303, 0x023D),
    InitReg::new(VEND2, 0x0305, 0x0015),
    InitReg::new(VEND2, 0x0306, 0x001A),
    InitReg::new(VEND2, 0x001F, 0x4000),
    InitReg::new(VEND2, 0x0523, 0x0000),
    InitReg::new(VEND2, 0x001F, 0x0000),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_unlock_then_relock() {
        for table in [&MASTER_CS2_0_INIT[..], &SLAVE_CS2_0_INIT[..]] {
            assert_eq!(table[0], InitReg::new(VEND2, 0x001F, 0x8000));
            assert_eq!(table[1], InitReg::new(VEND2, 0x0523, 0x0001));
            assert_eq!(table[table.len() - 1], InitReg::new(VEND2, 0x0523, 0x0000));
        }
    }

    #[test]
    fn role_tables_program_pma_role() {
        assert!(MASTER_CS2_0_INIT.contains(&InitReg::new(PMAPMD, 0x0834, 0xC001)));
        assert!(SLAVE_CS2_0_INIT.contains(&InitReg::new(PMAPMD, 0x0834, 0x8001)));
    }

    #[test]
    fn tdr_table_touches_only_vendor_space() {
        assert!(TDR_CONFIG_INIT.iter().all(|e| e.mmd == VEND2));
        assert_eq!(TDR_CONFIG_INIT[5], InitReg::new(VEND2, 0x0306, 0x001A));
    }
}
