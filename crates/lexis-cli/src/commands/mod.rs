pub mod challenge;
pub mod chat;
pub mod config;
pub mod dispatch;
pub mod lesson;
pub mod reset;
pub mod shared;
pub mod srs;
