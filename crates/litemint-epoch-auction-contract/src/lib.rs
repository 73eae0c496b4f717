/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! Epoch auction: the sell price decays by a fixed cut per epoch down to a floor,
//! each accepted bid raises it by a percentage, and the proceeds stay in contract
//! custody until withdrawn by the owner.

#![no_std]

mod auctions; // Auction engine and pricing behavior.
mod errors; // Contract errors.
mod types; // Contract types.

use soroban_sdk::{contract, contractimpl, contractmeta, vec, Address, BytesN, Env, Vec};

use crate::auctions::{
    behavior::{load_config, load_owner, load_state, require_owner, BaseAuction},
    behavior_epoch_decay::EpochDecayAuction,
};
pub use errors::AuctionError;
pub use types::{AuctionConfig, AuctionState, Receipt};

contractmeta!(
    key = "desc",
    val = "Epoch-based descending price auction smart contract"
);

pub trait AuctionContractTrait {
    // Upgrade this contract.
    // Owner authorization required.
    fn upgrade(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), AuctionError>;

    // Configure the auction. Callable once.
    // Sets `current_price` to `start_price` and an empty custody balance.
    // Owner authorization required.
    fn initialize(env: Env, owner: Address, config: AuctionConfig) -> Result<(), AuctionError>;

    // Place a bid of `amount` in the configured currency.
    // Accepted when `amount` meets the effective price, i.e. the greater of the
    // decayed price and the stored price. The full amount goes into custody and the
    // price is escalated from the price paid.
    // Buyer authorization required.
    fn bid(env: Env, buyer: Address, amount: i128) -> Result<Receipt, AuctionError>;

    // Send `amount` of custodied funds to `recipient`.
    // Owner authorization required.
    fn withdraw(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), AuctionError>;

    // Hand the contract over to `new_owner`.
    // Owner authorization required.
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address)
        -> Result<(), AuctionError>;

    // Stored price as of the last bid (or `start_price`), without decay.
    // No authorization required.
    fn current_price(env: Env) -> Result<i128, AuctionError>;

    // Time-decayed price at the current ledger timestamp.
    // No authorization required.
    fn decayed_price(env: Env) -> Result<i128, AuctionError>;

    // Minimum amount a bid placed now must carry.
    // No authorization required.
    fn effective_price(env: Env) -> Result<i128, AuctionError>;

    fn get_config(env: Env) -> Option<AuctionConfig>;

    fn get_state(env: Env) -> Option<AuctionState>;

    fn owner(env: Env) -> Option<Address>;

    // Retrieve the contract version.
    fn version(env: Env) -> Vec<u32>;
}

#[contract]
struct AuctionContract;

#[contractimpl]
impl AuctionContractTrait for AuctionContract {
    fn upgrade(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), AuctionError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        env.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    fn initialize(env: Env, owner: Address, config: AuctionConfig) -> Result<(), AuctionError> {
        owner.require_auth();
        EpochDecayAuction.initialize(&env, &owner, &config)
    }

    fn bid(env: Env, buyer: Address, amount: i128) -> Result<Receipt, AuctionError> {
        buyer.require_auth();
        EpochDecayAuction.bid(&env, &buyer, amount)
    }

    fn withdraw(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        caller.require_auth();
        EpochDecayAuction.withdraw(&env, &caller, &recipient, amount)
    }

    fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), AuctionError> {
        caller.require_auth();
        EpochDecayAuction.transfer_ownership(&env, &caller, &new_owner)
    }

    fn current_price(env: Env) -> Result<i128, AuctionError> {
        Ok(load_state(&env)?.current_price)
    }

    fn decayed_price(env: Env) -> Result<i128, AuctionError> {
        let config = load_config(&env)?;
        Ok(EpochDecayAuction.calculate_price(&config, env.ledger().timestamp()))
    }

    fn effective_price(env: Env) -> Result<i128, AuctionError> {
        let config = load_config(&env)?;
        let state = load_state(&env)?;
        Ok(EpochDecayAuction
            .calculate_price(&config, env.ledger().timestamp())
            .max(state.current_price))
    }

    fn get_config(env: Env) -> Option<AuctionConfig> {
        load_config(&env).ok()
    }

    fn get_state(env: Env) -> Option<AuctionState> {
        load_state(&env).ok()
    }

    fn owner(env: Env) -> Option<Address> {
        load_owner(&env).ok()
    }

    fn version(env: Env) -> Vec<u32> {
        vec![&env, 0, 1, 0] // "0.1.0"
    }
}
