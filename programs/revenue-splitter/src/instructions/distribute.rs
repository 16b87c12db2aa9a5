use anchor_lang::prelude::*;
use crate::constants::{POOL_VAULT_SEED, SPLITTER_CONFIG_SEED};
use crate::errors::ErrorCode;
use crate::helpers::{compute_payouts, distributable_lamports};
use crate::states::SplitterConfig;

/// Distributes the whole pool to the configured receivers pro rata.
///
/// Receiver destination accounts are passed as remaining accounts, one per
/// table entry in table order. The runtime reverts every transfer if any
/// step fails, so the payout is all-or-nothing.
#[derive(Accounts)]
pub struct Distribute<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SPLITTER_CONFIG_SEED],
        bump = splitter_config.bump,
        has_one = admin @ ErrorCode::Unauthorized
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

impl<'info> Distribute<'info> {
    pub fn handle(ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>) -> Result<()> {
        msg!("Starting pool distribution");

        let rent_reserve = Rent::get()?.minimum_balance(0);
        let total =
            distributable_lamports(ctx.accounts.pool_vault.lamports(), rent_reserve);
        require!(total > 0, ErrorCode::NothingToDistribute);

        let receivers = ctx.accounts.splitter_config.receivers.clone();
        require!(!receivers.is_empty(), ErrorCode::NoReceiversConfigured);

        require!(
            ctx.remaining_accounts.len() == receivers.len(),
            ErrorCode::ReceiverAccountMismatch
        );

        let (payouts, paid_out) = compute_payouts(total, &receivers)?;

        msg!("Distributing {} of {} lamports to {} receivers", paid_out, total, receivers.len());

        let vault_bump = ctx.accounts.splitter_config.vault_bump;
        let signer_seeds: &[&[&[u8]]] = &[&[POOL_VAULT_SEED, &[vault_bump]]];
        let now = Clock::get()?.unix_timestamp;

        for (index, (receiver, payout)) in receivers.iter().zip(payouts.iter()).enumerate() {
            let destination_account = &ctx.remaining_accounts[index];
            require_keys_eq!(
                destination_account.key(),
                receiver.destination,
                ErrorCode::ReceiverAccountMismatch
            );

            // A share can floor to zero on a small pool; the lamports stay
            // behind as carry-over
            if *payout == 0 {
                msg!("Receiver {} payout floors to zero, skipping transfer", index);
                continue;
            }

            anchor_lang::system_program::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: ctx.accounts.pool_vault.to_account_info(),
                        to: destination_account.clone(),
                    },
                    signer_seeds,
                ),
                *payout,
            )?;

            emit!(crate::events::ReceiverPaid {
                destination: receiver.destination,
                index: index as u32,
                share_bps: receiver.share_bps,
                amount: *payout,
                timestamp: now,
            });
        }

        // The vault must never dip into its rent reserve
        require!(
            ctx.accounts.pool_vault.lamports() >= rent_reserve,
            ErrorCode::MathOverflow
        );

        let carry_over = total - paid_out;
        let splitter_config = &mut ctx.accounts.splitter_config;
        splitter_config.record_distribution(paid_out, now)?;

        msg!("Distribution complete, {} lamports carried over", carry_over);

        emit!(crate::events::PoolDistributed {
            total,
            paid_out,
            carry_over,
            receiver_count: receivers.len() as u32,
            distribution_count: splitter_config.distribution_count,
            timestamp: now,
        });

        Ok(())
    }
}
