pub use super::event_snapshot::Entity as EventSnapshot;
pub use super::general_snapshot::Entity as GeneralSnapshot;
pub use super::linked_account::Entity as LinkedAccount;
