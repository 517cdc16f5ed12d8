//! HTTP client layer — `CoinCapHttp`, one GET per endpoint.

pub mod client;

pub use client::CoinCapHttp;
