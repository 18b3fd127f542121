pub mod cli;
pub mod config;
pub mod proxy;
pub mod rest;
