/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use crate::errors::AuctionError;
use crate::types::AuctionConfig;

pub struct EpochDecayAuction;

// EpochDecayAuction (Dutch auction on a fixed epoch clock, escalating on each sale).
impl super::behavior::BaseAuction for EpochDecayAuction {
    fn calculate_price(&self, config: &AuctionConfig, now: u64) -> i128 {
        // Epochs are counted from the fixed origin, bids do not reset the clock.
        let elapsed_epochs = now
            .saturating_sub(config.first_epoch_begin_at)
            .checked_div(config.epoch_length)
            .unwrap_or(0);

        config
            .price_cut_per_epoch
            .checked_mul(elapsed_epochs as i128)
            .and_then(|cut| config.start_price.checked_sub(cut))
            .unwrap_or(config.lowest_price)
            .max(config.lowest_price) // Ensure price does not fall below floor.
    }

    fn escalate_price(
        &self,
        config: &AuctionConfig,
        price_paid: i128,
    ) -> Result<i128, AuctionError> {
        price_paid
            .checked_mul(config.price_increase_on_bid_percent as i128)
            .map(|increase| increase / 100)
            .and_then(|increase| price_paid.checked_add(increase))
            .ok_or(AuctionError::Overflow)
    }
}
