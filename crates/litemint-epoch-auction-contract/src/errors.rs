/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::contracterror;

/// Errors returned by the auction contract entry points.
/// A failing call leaves storage and balances untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    BidTooLow = 3,
    Unauthorized = 4,
    InsufficientFunds = 5,
    InvalidConfig = 6,
    InvalidAmount = 7,
    Overflow = 8,
}

impl AuctionError {
    pub const fn message(&self) -> &'static str {
        match self {
            AuctionError::AlreadyInitialized => "init_err: auction already initialized.",
            AuctionError::NotInitialized => "init_err: auction not initialized.",
            AuctionError::BidTooLow => "bid_err: msg.value below current sell price.",
            AuctionError::Unauthorized => "auth_err: caller is not the owner.",
            AuctionError::InsufficientFunds => "withdraw_err: amount exceeds custodied balance.",
            AuctionError::InvalidConfig => "init_err: invalid auction parameters.",
            AuctionError::InvalidAmount => "amount_err: invalid amount.",
            AuctionError::Overflow => "math_err: price arithmetic overflow.",
        }
    }
}
