pub mod add;
pub mod age;
pub mod backup;
pub mod config;
pub mod export;
pub mod goal;
pub mod history;
pub mod init;
pub mod reset;
pub mod status;
pub mod theme;
pub mod tip;
