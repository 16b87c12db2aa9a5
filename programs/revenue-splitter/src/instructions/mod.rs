pub mod initialize_splitter;
pub use initialize_splitter::*;

pub mod deposit;
pub use deposit::*;

pub mod set_receivers;
pub use set_receivers::*;

pub mod distribute;
pub use distribute::*;

pub mod query_splitter;
pub use query_splitter::*;
