/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! The `auctions` module implements the epoch auction engine. `BaseAuction` carries
//! the custody and bidding mechanics as default methods while the implementing
//! behavior supplies the pricing schedule.
//!
//! Implemented features:
//!
//! - Linear per-epoch price decay from a fixed origin, floored at the lowest price
//!   (see: behavior_epoch_decay.rs).
//! - Percentage price escalation on every accepted bid.
//! - Owner-only withdrawal of custodied proceeds and ownership transfer.

pub mod behavior;
pub mod behavior_epoch_decay;
