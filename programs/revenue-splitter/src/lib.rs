use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod helpers;


pub use instructions::*;
pub use events::*;

#[program]
pub mod revenue_splitter {
    use super::*;

    pub fn initialize_splitter(ctx: Context<InitializeSplitter>) -> Result<()> {
        InitializeSplitter::handle(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        Deposit::handle(ctx, params)
    }

    pub fn set_receivers(ctx: Context<SetReceivers>, params: SetReceiversParams) -> Result<()> {
        SetReceivers::handle(ctx, params)
    }

    pub fn distribute<'info>(ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>) -> Result<()> {
        Distribute::handle(ctx)
    }

    pub fn query_splitter(ctx: Context<QuerySplitter>) -> Result<SplitterInfo> {
        QuerySplitter::handle(ctx)
    }

    pub fn query_receiver(ctx: Context<QueryReceiver>, index: u32) -> Result<ReceiverInfo> {
        QueryReceiver::handle(ctx, index)
    }
}
