use anchor_lang::prelude::*;
use crate::constants::{POOL_VAULT_SEED, SPLITTER_CONFIG_SEED};
use crate::helpers::distributable_lamports;
use crate::states::SplitterConfig;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DepositParams {
    /// Amount to deposit (in lamports)
    pub amount: u64,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Any account funding the pool; no receiver table is required yet
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [SPLITTER_CONFIG_SEED],
        bump = splitter_config.bump
    )]
    pub splitter_config: Account<'info, SplitterConfig>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED],
        bump = splitter_config.vault_bump
    )]
    pub pool_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn handle(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        msg!("Processing deposit from: {}", ctx.accounts.depositor.key());
        msg!("Amount: {} lamports", params.amount);

        // A zero-value deposit is a harmless no-op, not an error
        if params.amount == 0 {
            msg!("Zero-value deposit, nothing to do");
            return Ok(());
        }

        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.depositor.to_account_info(),
                    to: ctx.accounts.pool_vault.to_account_info(),
                },
            ),
            params.amount,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let splitter_config = &mut ctx.accounts.splitter_config;
        splitter_config.record_deposit(params.amount, now)?;

        let rent_reserve = Rent::get()?.minimum_balance(0);
        let pool_lamports =
            distributable_lamports(ctx.accounts.pool_vault.lamports(), rent_reserve);

        msg!("Pool balance: {} lamports", pool_lamports);

        let splitter_config = &ctx.accounts.splitter_config;
        emit!(crate::events::DepositReceived {
            depositor: ctx.accounts.depositor.key(),
            amount: params.amount,
            pool_lamports,
            total_deposited: splitter_config.total_deposited,
            deposit_count: splitter_config.deposit_count,
            timestamp: now,
        });

        Ok(())
    }
}
