/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::{key_constraint, soroban_tools, storage};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
#[key_constraint(DataKeyConstraint)]
pub enum DataKey {
    AdminData,
    Config,
    State,
}

#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminData {
    pub owner: Address,
}

/// Immutable auction parameters, fixed by `initialize`.
#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Opaque beneficiary of the proceeds, stored as given.
    pub beneficiary_token: Address,
    /// Token bids are paid in and withdrawals are made in.
    pub currency: Address,
    /// Ledger timestamp (seconds) at which epoch 0 begins.
    pub first_epoch_begin_at: u64,
    /// Epoch duration in seconds, never zero.
    pub epoch_length: u64,
    pub start_price: i128,
    pub price_cut_per_epoch: i128,
    pub price_increase_on_bid_percent: u32,
    /// Floor for the time-decayed price.
    pub lowest_price: i128,
}

/// Live auction state. Present in storage iff the contract is initialized.
#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub current_price: i128,
    pub accumulated_balance: i128,
    pub total_bids: u64,
    pub last_bid_time: u64,
}

impl AuctionState {
    pub fn new(current_price: i128) -> Self {
        AuctionState {
            current_price,
            accumulated_balance: 0,
            total_bids: 0,
            last_bid_time: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub buyer: Address,
    pub amount: i128,
    pub price_paid: i128,
    pub new_price: i128,
    pub timestamp: u64,
}
