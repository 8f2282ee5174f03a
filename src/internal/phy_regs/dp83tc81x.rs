//! DP83TC81x Vendor-Specific Register Definitions
//!
//! Register addresses and bit definitions for the TI DP83TC812, DP83TC813
//! and DP83TC814 100BASE-T1 PHYs.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `reg`: MMD 0x1F vendor register addresses
//! - `c22`: vendor registers reached through Clause 22
//! - `reset_ctrl`, `strap`, `rgmii_id`, `sgmii`, `cdcr`, `tdr_result`,
//!   `int_stat1`..`int_stat3`, `sqi`: register bit fields
//!
//! # References
//!
//! - DP83TC812-Q1 Datasheet (SNLS669)

#![allow(dead_code)]

// =============================================================================
// PHY Identifiers
// =============================================================================

/// PHY identifier constants (exact match, revision bits included)
pub mod phy_id {
    /// DP83TC812
    pub const DP83TC812: u32 = 0x2000_A271;
    /// DP83TC813
    pub const DP83TC813: u32 = 0x2000_A211;
    /// DP83TC814
    pub const DP83TC814: u32 = 0x2000_A261;
}

// =============================================================================
// MMD 0x1F Register Addresses
// =============================================================================

/// Vendor register addresses inside MMD 0x1F
pub mod reg {
    /// Reset control
    pub const RESET_CTRL: u16 = 0x001F;
    /// Cable diagnostic control/status
    pub const CDCR: u16 = 0x001E;
    /// Autonomous mode control
    pub const AUTONOMOUS_CTRL: u16 = 0x018B;
    /// TDR configuration 5
    pub const TDR_CFG5: u16 = 0x0306;
    /// TDR result (TC1)
    pub const TDR_TC1: u16 = 0x0310;
    /// Strap latch-in status
    pub const STRAP: u16 = 0x045D;
    /// RGMII control
    pub const RGMII_CTRL: u16 = 0x0600;
    /// RGMII internal delay control (accessed through MMD 1)
    pub const RGMII_ID_CTRL: u16 = 0x0602;
    /// SGMII control
    pub const SGMII_CTRL: u16 = 0x0608;
    /// DSP register 0x871, holds the link-quality index
    pub const DSP_REG_71: u16 = 0x0871;
}

/// Vendor registers in Clause 22 space
pub mod c22 {
    /// Interrupt status/enable 1
    pub const INT_STAT1: u8 = 0x12;
    /// Interrupt status/enable 2
    pub const INT_STAT2: u8 = 0x13;
    /// Interrupt status/enable 3
    pub const INT_STAT3: u8 = 0x18;
}

// =============================================================================
// Register Bit Fields
// =============================================================================

/// RESET_CTRL bits
pub mod reset_ctrl {
    /// Hardware reset (full chip including registers)
    pub const HW_RESET: u16 = 1 << 15;
    /// Software reset (restart with current register values)
    pub const SW_RESET: u16 = 1 << 14;
}

/// STRAP register bits
pub mod strap {
    /// Strapped as BASE-T1 master
    pub const MASTER_MODE: u16 = 1 << 9;
    /// RGMII host interface strapped on
    pub const RGMII_IS_EN: u16 = 1 << 7;
}

/// AUTONOMOUS_CTRL bits
pub mod autonomous {
    /// Link up without host intervention after reset
    pub const EN: u16 = 1 << 6;
}

/// PMA control values written at bring-up (MMD 1, register 0x0834)
pub mod pma_ctrl {
    /// Master, 100BASE-T1
    pub const MASTER: u16 = 0xC001;
    /// Slave, 100BASE-T1
    pub const SLAVE: u16 = 0x8001;
}

/// RGMII_CTRL bits
pub mod rgmii_ctrl {
    /// RGMII enable
    pub const RGMII_EN: u16 = 1 << 3;
}

/// RGMII_ID_CTRL bits
pub mod rgmii_id {
    /// RX clock internal shift
    pub const RX_CLK_SHIFT: u16 = 1 << 1;
    /// TX clock internal shift
    pub const TX_CLK_SHIFT: u16 = 1 << 0;
}

/// SGMII_CTRL bits and the bring-up value
pub mod sgmii {
    /// SGMII auto-negotiation enable
    pub const AUTO_NEG_EN: u16 = 1 << 0;
    /// SGMII enable
    pub const SGMII_EN: u16 = 1 << 9;
    /// Value written when the host interface is SGMII
    pub const CONFIG_VAL: u16 = 0x027B;
}

/// CDCR (cable diagnostic control) bits
pub mod cdcr {
    /// Start TDR
    pub const START: u16 = 1 << 15;
    /// TDR done
    pub const DONE: u16 = 1 << 1;
    /// TDR failed
    pub const FAIL: u16 = 1 << 0;
}

/// TDR_CFG5 bits
pub mod tdr_cfg5 {
    /// Half-open detection enable
    pub const HALF_OPEN_DET_EN: u16 = 1 << 4;
}

/// TDR_TC1 result bits
pub mod tdr_result {
    /// Half-open detected
    pub const HALF_OPEN_DETECT: u16 = 1 << 8;
    /// Reflection peak detected
    pub const PEAK_DETECT: u16 = 1 << 7;
    /// Peak sign (set = open, clear = short)
    pub const PEAK_SIGN: u16 = 1 << 6;
    /// Fault location, meters
    pub const LOCATION_MASK: u16 = 0x003F;
}

/// INT_STAT1 enable bits
pub mod int_stat1 {
    /// RX error counter half full
    pub const RX_ERR_CNT_HALF_FULL: u16 = 1 << 0;
    /// TX error counter half full
    pub const TX_ERR_CNT_HALF_FULL: u16 = 1 << 1;
    /// Master/slave training done
    pub const MS_TRAIN_DONE: u16 = 1 << 2;
    /// ESD event
    pub const ESD_EVENT: u16 = 1 << 3;
    /// Link status change
    pub const LINK_STAT: u16 = 1 << 5;
    /// Energy detect
    pub const ENERGY_DET: u16 = 1 << 6;
    /// Link quality
    pub const LINK_QUAL: u16 = 1 << 7;
}

/// INT_STAT2 enable bits
pub mod int_stat2 {
    /// Jabber
    pub const JABBER: u16 = 1 << 0;
    /// Polarity change
    pub const POL: u16 = 1 << 1;
    /// Sleep mode
    pub const SLEEP_MODE: u16 = 1 << 2;
    /// Over-temperature
    pub const OVERTEMP: u16 = 1 << 3;
    /// FIFO overflow/underflow
    pub const FIFO: u16 = 1 << 4;
    /// Page received
    pub const PAGE_RXD: u16 = 1 << 5;
    /// Over-voltage
    pub const OVERVOLTAGE: u16 = 1 << 6;
    /// Under-voltage
    pub const UNDERVOLTAGE: u16 = 1 << 7;
}

/// INT_STAT3 enable bits
pub mod int_stat3 {
    /// Low-power sleep
    pub const LPS: u16 = 1 << 0;
    /// Wake-up
    pub const WUP: u16 = 1 << 1;
    /// Wake request
    pub const WAKE_REQ: u16 = 1 << 2;
    /// No frame detected
    pub const NO_FRAME: u16 = 1 << 3;
    /// Power-on reset done
    pub const POR_DONE: u16 = 1 << 4;
    /// Sleep fail
    pub const SLEEP_FAIL: u16 = 1 << 5;
}

/// SQI field inside DSP_REG_71
pub mod sqi {
    /// Field shift
    pub const SHIFT: u16 = 1;
    /// Field mask (after shift)
    pub const MASK: u16 = 0x7;
}
