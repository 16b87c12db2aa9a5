use anchor_lang::prelude::*;
use crate::constants::{POOL_VAULT_SEED, SPLITTER_CONFIG_SEED};
use crate::states::SplitterConfig;

#[derive(Accounts)]
pub struct InitializeSplitter<'info> {
    /// Admin who gains exclusive configuration and distribution rights
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Splitter configuration PDA
    #[account(
        init,
        payer = admin,
        space = SplitterConfig::DISCRIMINATOR.len() + SplitterConfig::INIT_SPACE,
        seeds = [SPLITTER_CONFIG_SEED],
        bump
    )]
    pub splitter_config: Account<'info, SplitterConfig>,

    /// Pool vault holding the undistributed balance
    #[account(
        mut,
        seeds = [POOL_VAULT_SEED],
        bump
    )]
    pub pool_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeSplitter<'info> {
    pub fn handle(ctx: Context<InitializeSplitter>) -> Result<()> {
        msg!("Initializing revenue splitter");

        // Fund the vault up to its rent-exempt reserve so it survives as a
        // standalone system account. The reserve is never distributable.
        let rent_reserve = Rent::get()?.minimum_balance(0);
        let vault_lamports = ctx.accounts.pool_vault.lamports();
        if vault_lamports < rent_reserve {
            anchor_lang::system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: ctx.accounts.admin.to_account_info(),
                        to: ctx.accounts.pool_vault.to_account_info(),
                    },
                ),
                rent_reserve - vault_lamports,
            )?;
        }

        let now = Clock::get()?.unix_timestamp;
        let config_key = ctx.accounts.splitter_config.key();
        let splitter_config = &mut ctx.accounts.splitter_config;

        splitter_config.admin = ctx.accounts.admin.key();
        splitter_config.receivers = Vec::new();
        splitter_config.total_deposited = 0;
        splitter_config.total_distributed = 0;
        splitter_config.deposit_count = 0;
        splitter_config.distribution_count = 0;
        splitter_config.config_version = 0;
        splitter_config.last_update_timestamp = now;
        splitter_config.bump = ctx.bumps.splitter_config;
        splitter_config.vault_bump = ctx.bumps.pool_vault;

        msg!("Admin: {}", splitter_config.admin);
        msg!("Pool vault: {}", ctx.accounts.pool_vault.key());

        emit!(crate::events::SplitterInitialized {
            config: config_key,
            admin: ctx.accounts.admin.key(),
            pool_vault: ctx.accounts.pool_vault.key(),
            timestamp: now,
        });

        Ok(())
    }
}
