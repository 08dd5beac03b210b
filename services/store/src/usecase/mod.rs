pub mod account;
pub mod catalog;
pub mod gate;
pub mod ingest;
pub mod order;
pub mod password;
pub mod token;
