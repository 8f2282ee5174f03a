//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Timing constants and fixed limits
//! - [`init_seq`]: Ordered register initialization tables
//! - [`phy_regs`]: IEEE 802.3 and DP83TC81x register definitions

pub(crate) mod constants;
pub(crate) mod init_seq;
pub(crate) mod phy_regs;
