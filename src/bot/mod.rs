pub mod command;
pub mod component;
pub mod embed;
pub mod handler;
pub mod permission;
pub mod reply;
pub mod start;
