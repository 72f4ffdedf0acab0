pub mod account;
pub mod snapshot;
pub mod sync;
