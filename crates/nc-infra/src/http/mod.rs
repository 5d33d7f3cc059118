//! HTTP adapter for the remote classification service.

mod client;
pub mod dto;

pub use client::HttpScanService;
