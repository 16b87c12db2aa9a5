use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the configured administrator")]
    Unauthorized,
    #[msg("Receiver set must contain at least one entry")]
    EmptyReceiverSet,
    #[msg("Destination and share sequences have different lengths")]
    LengthMismatch,
    #[msg("Receiver shares must sum to exactly 10000 basis points")]
    InvalidShareTotal,
    #[msg("Invalid receiver - zero share, default destination, or duplicate destination")]
    InvalidReceiver,
    #[msg("Receiver set exceeds the table capacity")]
    TooManyReceivers,
    #[msg("Pool is empty - nothing to distribute")]
    NothingToDistribute,
    #[msg("No receivers configured")]
    NoReceiversConfigured,
    #[msg("Receiver accounts do not match the configured table")]
    ReceiverAccountMismatch,
    #[msg("Receiver index out of bounds")]
    ReceiverIndexOutOfBounds,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
