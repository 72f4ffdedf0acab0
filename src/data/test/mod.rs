mod linked_account;
mod snapshot;
