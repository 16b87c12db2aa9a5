use anchor_lang::prelude::*;
use crate::constants::MAX_RECEIVERS;
use crate::errors::ErrorCode;

/// A payout destination paired with its proportional share
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receiver {
    pub destination: Pubkey,
    pub share_bps: u16,
}

/// Global splitter configuration and lifetime accounting
///
/// Single account per program instance. Holds the administrator identity,
/// the ordered receiver table, and cumulative deposit/distribution metrics.
/// The distributable pool itself is the lamport balance of the pool vault
/// PDA, so funds sent straight to the vault address are picked up by the
/// next distribution without any bookkeeping here.
#[account]
#[derive(InitSpace)]
pub struct SplitterConfig {
    /// Administrator with exclusive rights over set_receivers and distribute
    pub admin: Pubkey,
    /// Ordered receiver table, replaced wholesale on each set_receivers
    #[max_len(MAX_RECEIVERS)]
    pub receivers: Vec<Receiver>,
    /// Lifetime lamports deposited through the deposit instruction
    pub total_deposited: u64,
    /// Lifetime lamports paid out across all distributions
    pub total_distributed: u64,
    /// Number of non-zero deposits
    pub deposit_count: u32,
    /// Number of completed distribution rounds
    pub distribution_count: u32,
    /// Incremented on every successful receiver table replacement
    pub config_version: u32,
    /// Timestamp of last state change
    pub last_update_timestamp: i64,
    /// Bump seed for the config PDA
    pub bump: u8,
    /// Bump seed for the pool vault PDA
    pub vault_bump: u8,
}

impl SplitterConfig {
    /// Records a deposit in the lifetime stats
    pub fn record_deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        self.total_deposited = self.total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        self.deposit_count = self.deposit_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.last_update_timestamp = now;

        Ok(())
    }

    /// Records a completed distribution round in the lifetime stats
    pub fn record_distribution(&mut self, paid_out: u64, now: i64) -> Result<()> {
        self.total_distributed = self.total_distributed
            .checked_add(paid_out)
            .ok_or(ErrorCode::MathOverflow)?;

        self.distribution_count = self.distribution_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.last_update_timestamp = now;

        Ok(())
    }

    /// Replaces the receiver table wholesale, preserving the supplied order.
    /// Callers must have validated the table first.
    pub fn replace_receivers(&mut self, receivers: Vec<Receiver>, now: i64) -> Result<()> {
        self.receivers = receivers;

        self.config_version = self.config_version
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        self.last_update_timestamp = now;

        Ok(())
    }

    /// Gets the receiver at a table position
    pub fn receiver(&self, index: usize) -> Option<&Receiver> {
        self.receivers.get(index)
    }

    /// Finds a receiver's table position by destination address
    pub fn find_receiver_index(&self, destination: &Pubkey) -> Option<usize> {
        self.receivers.iter().position(|r| r.destination == *destination)
    }

    /// Checks whether a valid receiver table has been configured
    pub fn is_configured(&self) -> bool {
        !self.receivers.is_empty()
    }
}
