use anchor_lang::prelude::*;

/// Event emitted when the splitter is initialized
#[event]
pub struct SplitterInitialized {
    /// The splitter config PDA
    pub config: Pubkey,
    /// Administrator with exclusive configuration and distribution rights
    pub admin: Pubkey,
    /// Pool vault address accepting deposits
    pub pool_vault: Pubkey,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when a deposit lands in the pool
#[event]
pub struct DepositReceived {
    /// Account that sent the funds
    pub depositor: Pubkey,
    /// Amount deposited (in lamports)
    pub amount: u64,
    /// Distributable pool balance after this deposit
    pub pool_lamports: u64,
    /// Lifetime total deposited through this instruction
    pub total_deposited: u64,
    /// Number of deposits made so far
    pub deposit_count: u32,
    /// Timestamp of deposit
    pub timestamp: i64,
}

/// Event emitted when the receiver table is replaced
#[event]
pub struct ReceiversUpdated {
    /// Administrator that performed the update
    pub admin: Pubkey,
    /// Number of receivers in the new table
    pub receiver_count: u32,
    /// Configuration version after the replacement
    pub config_version: u32,
    /// Timestamp of the update
    pub timestamp: i64,
}

/// Event emitted for each receiver payout during distribution
#[event]
pub struct ReceiverPaid {
    /// Receiver's wallet address
    pub destination: Pubkey,
    /// Receiver's position in the table
    pub index: u32,
    /// Receiver's share in basis points
    pub share_bps: u16,
    /// Amount paid out (in lamports)
    pub amount: u64,
    /// Timestamp of payout
    pub timestamp: i64,
}

/// Event emitted when a distribution round completes
#[event]
pub struct PoolDistributed {
    /// Pool balance at the start of the round
    pub total: u64,
    /// Amount actually paid out across all receivers
    pub paid_out: u64,
    /// Rounding remainder left in the pool for the next round
    pub carry_over: u64,
    /// Number of receivers paid
    pub receiver_count: u32,
    /// Total distribution rounds completed
    pub distribution_count: u32,
    /// Timestamp of distribution
    pub timestamp: i64,
}
