//! IEEE 802.3 PHY Register Definitions
//!
//! Standard Clause 22 registers used by the generic helpers, plus the
//! Clause 45 PMA/PMD BASE-T1 control register the DP83TC81x uses for
//! master/slave selection.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |
//!
//! # Clause 45
//!
//! | MMD | Register | Name |
//! |-----|----------|------|
//! | 1 | 0x0834 (2100) | PMA/PMD BASE-T1 Control |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set, 10 Mbps if clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (latched low)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// MMD Access Control Register (Register 13)
// =============================================================================

/// MMD_CTRL bits
pub mod mmd_ctrl {
    /// Function: address
    pub const FUNC_ADDRESS: u16 = 0x0000;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 0x4000;
    /// Device address field
    pub const DEVAD_MASK: u16 = 0x001F;
}

// =============================================================================
// Clause 45 MMD Numbers
// =============================================================================

/// MMD device addresses
pub mod mmd {
    /// PMA/PMD
    pub const PMAPMD: u8 = 0x01;
    /// Vendor specific 2 (DP83TC81x vendor register space)
    pub const VEND2: u8 = 0x1F;
}

// =============================================================================
// PMA/PMD BASE-T1 Control (MMD 1, Register 2100)
// =============================================================================

/// BASE-T1 PMA/PMD control register and bits
pub mod bt1_ctrl {
    /// Register address within MMD 1
    pub const REG: u16 = 0x0834;
    /// Master/slave configuration (set = master)
    pub const CFG_MASTER: u16 = 1 << 14;
    /// PMA type selection mask
    pub const TYPE_MASK: u16 = 0x000F;
}
