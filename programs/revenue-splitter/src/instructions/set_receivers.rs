use anchor_lang::prelude::*;
use crate::constants::SPLITTER_CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::helpers::validate_receiver_config;
use crate::states::{Receiver, SplitterConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SetReceiversParams {
    /// Payout destinations, in distribution order
    pub destinations: Vec<Pubkey>,
    /// Shares in basis points, parallel to destinations
    pub shares_bps: Vec<u16>,
}

#[derive(Accounts)]
pub struct SetReceivers<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SPLITTER_CONFIG_SEED],
        bump = splitter_config.bump,
        has_one = admin @ ErrorCode::Unauthorized
    )]
    pub splitter_config: Account<'info, SplitterConfig>,
}

impl<'info> SetReceivers<'info> {
    pub fn handle(ctx: Context<SetReceivers>, params: SetReceiversParams) -> Result<()> {
        msg!("Replacing receiver table, {} entries supplied", params.destinations.len());

        // Any failure here leaves the previous table untouched
        validate_receiver_config(&params.destinations, &params.shares_bps)?;

        let receivers: Vec<Receiver> = params
            .destinations
            .iter()
            .zip(params.shares_bps.iter())
            .map(|(destination, share_bps)| Receiver {
                destination: *destination,
                share_bps: *share_bps,
            })
            .collect();

        let now = Clock::get()?.unix_timestamp;
        let splitter_config = &mut ctx.accounts.splitter_config;
        splitter_config.replace_receivers(receivers, now)?;

        msg!("Receiver table replaced, version {}", splitter_config.config_version);
        for (index, receiver) in splitter_config.receivers.iter().enumerate() {
            msg!("Receiver {}: {} ({} bps)", index, receiver.destination, receiver.share_bps);
        }

        emit!(crate::events::ReceiversUpdated {
            admin: ctx.accounts.admin.key(),
            receiver_count: splitter_config.receivers.len() as u32,
            config_version: splitter_config.config_version,
            timestamp: now,
        });

        Ok(())
    }
}
