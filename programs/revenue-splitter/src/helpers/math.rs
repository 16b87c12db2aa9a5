use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, MAX_RECEIVERS};
use crate::errors::ErrorCode;
use crate::states::Receiver;

/// Validates a candidate receiver configuration supplied as parallel
/// destination/share sequences. Checks run in a fixed order so the first
/// failing condition determines the reported error.
pub fn validate_receiver_config(destinations: &[Pubkey], shares_bps: &[u16]) -> Result<()> {
    require!(!destinations.is_empty(), ErrorCode::EmptyReceiverSet);

    require!(
        destinations.len() == shares_bps.len(),
        ErrorCode::LengthMismatch
    );

    require!(
        destinations.len() <= MAX_RECEIVERS,
        ErrorCode::TooManyReceivers
    );

    let total: u64 = shares_bps.iter().map(|bps| *bps as u64).sum();
    if total != BPS_DENOMINATOR {
        msg!("Receiver shares sum to {} bps, expected {}", total, BPS_DENOMINATOR);
        return err!(ErrorCode::InvalidShareTotal);
    }

    for (destination, share) in destinations.iter().zip(shares_bps.iter()) {
        require!(*share > 0, ErrorCode::InvalidReceiver);
        require!(*destination != Pubkey::default(), ErrorCode::InvalidReceiver);
    }

    // O(n^2) scan is fine at table capacity
    for i in 0..destinations.len() {
        for j in (i + 1)..destinations.len() {
            require!(
                destinations[i] != destinations[j],
                ErrorCode::InvalidReceiver
            );
        }
    }

    Ok(())
}

/// Computes the per-receiver payouts for a distribution round.
/// Each payout floors its share: payout = total * share_bps / 10000.
/// Returns the payouts in table order together with their sum.
///
/// With shares summing to 10000 bps the sum of floored payouts can fall
/// short of `total` by at most `receivers.len() - 1` lamports, and can
/// never exceed it. The shortfall stays in the pool for the next round.
pub fn compute_payouts(total: u64, receivers: &[Receiver]) -> Result<(Vec<u64>, u64)> {
    require!(!receivers.is_empty(), ErrorCode::NoReceiversConfigured);

    let mut payouts = Vec::with_capacity(receivers.len());
    let mut paid_out: u64 = 0;

    for receiver in receivers {
        let share = (total as u128)
            .checked_mul(receiver.share_bps as u128)
            .ok_or(ErrorCode::MathOverflow)?
            / BPS_DENOMINATOR as u128;

        let payout = u64::try_from(share).map_err(|_| ErrorCode::MathOverflow)?;

        paid_out = paid_out
            .checked_add(payout)
            .ok_or(ErrorCode::MathOverflow)?;

        payouts.push(payout);
    }

    // Unreachable with a validated table; treated as an internal
    // consistency fault rather than a user-facing error.
    require!(paid_out <= total, ErrorCode::MathOverflow);

    Ok((payouts, paid_out))
}

/// The distributable portion of the vault balance. The rent-exempt
/// reserve keeps the vault account alive and is never paid out.
pub fn distributable_lamports(vault_lamports: u64, rent_reserve: u64) -> u64 {
    vault_lamports.saturating_sub(rent_reserve)
}
