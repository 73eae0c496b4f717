/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{log, symbol_short, token, Address, Env, Symbol};

use crate::errors::AuctionError;
use crate::types::{AdminData, AuctionConfig, AuctionState, DataKey, Receipt};

// Event topics.
const AUCTION: Symbol = symbol_short!("AUCTION");
const BID: Symbol = symbol_short!("BID");
const FUNDS: Symbol = symbol_short!("FUNDS");
const OWNER: Symbol = symbol_short!("OWNER");

pub trait BaseAuction {
    fn initialize(
        &self,
        env: &Env,
        owner: &Address,
        config: &AuctionConfig,
    ) -> Result<(), AuctionError> {
        if storage::has::<DataKey, AuctionState>(env, &DataKey::State) {
            return Err(AuctionError::AlreadyInitialized);
        }

        if config.epoch_length == 0
            || config.start_price < 0
            || config.price_cut_per_epoch < 0
            || config.lowest_price < 0
            || config.start_price < config.lowest_price
        {
            return Err(AuctionError::InvalidConfig);
        }

        storage::set::<DataKey, AdminData>(
            env,
            &DataKey::AdminData,
            &AdminData {
                owner: owner.clone(),
            },
        );
        storage::set::<DataKey, AuctionConfig>(env, &DataKey::Config, config);
        storage::set::<DataKey, AuctionState>(
            env,
            &DataKey::State,
            &AuctionState::new(config.start_price),
        );

        env.events()
            .publish((AUCTION, symbol_short!("init")), owner.clone());
        Ok(())
    }

    fn bid(&self, env: &Env, buyer: &Address, amount: i128) -> Result<Receipt, AuctionError> {
        if amount <= 0 {
            log!(env, "amount_err: invalid amount.", amount);
            return Err(AuctionError::InvalidAmount);
        }

        let config = load_config(env)?;
        let mut state = load_state(env)?;
        let now = env.ledger().timestamp();

        // A previous escalation is never undercut by decay.
        let price = self.calculate_price(&config, now).max(state.current_price);
        if amount < price {
            log!(env, "bid_err: msg.value below current sell price.", amount, price);
            return Err(AuctionError::BidTooLow);
        }

        let new_price = self.escalate_price(&config, price)?;
        let accumulated_balance = state
            .accumulated_balance
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;

        // Move the bid into contract custody.
        token::Client::new(env, &config.currency).transfer(
            buyer,
            &env.current_contract_address(),
            &amount,
        );

        state.current_price = new_price;
        state.accumulated_balance = accumulated_balance;
        state.total_bids += 1;
        state.last_bid_time = now;
        storage::set::<DataKey, AuctionState>(env, &DataKey::State, &state);

        let receipt = Receipt {
            buyer: buyer.clone(),
            amount,
            price_paid: price,
            new_price,
            timestamp: now,
        };
        env.events()
            .publish((BID, symbol_short!("accepted")), receipt.clone());
        Ok(receipt)
    }

    fn withdraw(
        &self,
        env: &Env,
        caller: &Address,
        recipient: &Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        require_owner(env, caller)?;

        if amount < 0 {
            log!(env, "amount_err: invalid amount.", amount);
            return Err(AuctionError::InvalidAmount);
        }

        let config = load_config(env)?;
        let mut state = load_state(env)?;
        if amount > state.accumulated_balance {
            log!(
                env,
                "withdraw_err: amount exceeds custodied balance.",
                amount,
                state.accumulated_balance
            );
            return Err(AuctionError::InsufficientFunds);
        }

        state.accumulated_balance -= amount;
        storage::set::<DataKey, AuctionState>(env, &DataKey::State, &state);

        token::Client::new(env, &config.currency).transfer(
            &env.current_contract_address(),
            recipient,
            &amount,
        );

        env.events()
            .publish((FUNDS, symbol_short!("withdrawn")), (recipient.clone(), amount));
        Ok(())
    }

    fn transfer_ownership(
        &self,
        env: &Env,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), AuctionError> {
        require_owner(env, caller)?;
        storage::set::<DataKey, AdminData>(
            env,
            &DataKey::AdminData,
            &AdminData {
                owner: new_owner.clone(),
            },
        );
        env.events()
            .publish((OWNER, symbol_short!("changed")), new_owner.clone());
        Ok(())
    }

    // Time-decayed price at `now`, never below `config.lowest_price`.
    fn calculate_price(&self, config: &AuctionConfig, now: u64) -> i128;

    // Price following an accepted bid that paid `price_paid`.
    fn escalate_price(&self, config: &AuctionConfig, price_paid: i128)
        -> Result<i128, AuctionError>;
}

pub fn load_config(env: &Env) -> Result<AuctionConfig, AuctionError> {
    storage::get::<DataKey, AuctionConfig>(env, &DataKey::Config)
        .ok_or(AuctionError::NotInitialized)
}

pub fn load_state(env: &Env) -> Result<AuctionState, AuctionError> {
    storage::get::<DataKey, AuctionState>(env, &DataKey::State)
        .ok_or(AuctionError::NotInitialized)
}

pub fn load_owner(env: &Env) -> Result<Address, AuctionError> {
    storage::get::<DataKey, AdminData>(env, &DataKey::AdminData)
        .map(|admin_data| admin_data.owner)
        .ok_or(AuctionError::NotInitialized)
}

pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<(), AuctionError> {
    if load_owner(env)? != *caller {
        log!(env, "auth_err: caller is not the owner.", caller.clone());
        return Err(AuctionError::Unauthorized);
    }
    Ok(())
}
