use anchor_lang::prelude::*;
use crate::constants::{POOL_VAULT_SEED, SPLITTER_CONFIG_SEED};
use crate::errors::ErrorCode;
use crate::helpers::distributable_lamports;
use crate::states::SplitterConfig;

/// Query instruction to read the splitter state and live pool balance
#[derive(Accounts)]
pub struct QuerySplitter<'info> {
    #[account(
        seeds = [SPLITTER_CONFIG_SEED],
        bump = splitter_config.bump
    )]
    pub splitter_config: Account<'info, SplitterConfig>,

    #[account(
        seeds = [POOL_VAULT_SEED],
        bump = splitter_config.vault_bump
    )]
    pub pool_vault: SystemAccount<'info>,
}

/// Response structure for splitter query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SplitterInfo {
    /// Administrator identity
    pub admin: Pubkey,
    /// Number of receivers in the current table
    pub receiver_count: u32,
    /// Current distributable pool balance (in lamports)
    pub pool_lamports: u64,
    /// Lifetime lamports deposited through the deposit instruction
    pub total_deposited: u64,
    /// Lifetime lamports paid out
    pub total_distributed: u64,
    /// Number of non-zero deposits
    pub deposit_count: u32,
    /// Number of completed distribution rounds
    pub distribution_count: u32,
    /// Configuration version
    pub config_version: u32,
    /// Timestamp of last state change
    pub last_update_timestamp: i64,
}

/// Response structure for a single receiver query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ReceiverInfo {
    /// Receiver's position in the table
    pub index: u32,
    /// Payout destination
    pub destination: Pubkey,
    /// Share in basis points
    pub share_bps: u16,
}

impl<'info> QuerySplitter<'info> {
    pub fn handle(ctx: Context<QuerySplitter>) -> Result<SplitterInfo> {
        let splitter_config = &ctx.accounts.splitter_config;

        let rent_reserve = Rent::get()?.minimum_balance(0);
        let pool_lamports =
            distributable_lamports(ctx.accounts.pool_vault.lamports(), rent_reserve);

        let info = SplitterInfo {
            admin: splitter_config.admin,
            receiver_count: splitter_config.receivers.len() as u32,
            pool_lamports,
            total_deposited: splitter_config.total_deposited,
            total_distributed: splitter_config.total_distributed,
            deposit_count: splitter_config.deposit_count,
            distribution_count: splitter_config.distribution_count,
            config_version: splitter_config.config_version,
            last_update_timestamp: splitter_config.last_update_timestamp,
        };

        msg!("Admin: {}", info.admin);
        msg!("Receivers: {}", info.receiver_count);
        msg!("Pool balance: {} lamports", info.pool_lamports);
        msg!("Total deposited: {} lamports", info.total_deposited);
        msg!("Total distributed: {} lamports", info.total_distributed);

        Ok(info)
    }
}

/// Query instruction to enumerate the receiver table by index
#[derive(Accounts)]
pub struct QueryReceiver<'info> {
    #[account(
        seeds = [SPLITTER_CONFIG_SEED],
        bump = splitter_config.bump
    )]
    pub splitter_config: Account<'info, SplitterConfig>,
}

impl<'info> QueryReceiver<'info> {
    pub fn handle(ctx: Context<QueryReceiver>, index: u32) -> Result<ReceiverInfo> {
        let splitter_config = &ctx.accounts.splitter_config;

        let receiver = splitter_config
            .receiver(index as usize)
            .ok_or(ErrorCode::ReceiverIndexOutOfBounds)?;

        let info = ReceiverInfo {
            index,
            destination: receiver.destination,
            share_bps: receiver.share_bps,
        };

        msg!("Receiver {}: {} ({} bps)", info.index, info.destination, info.share_bps);

        Ok(info)
    }
}
