//! Typed async client for the [Helium](https://docs.helium.com/api/blockchain/introduction)
//! blockchain explorer HTTP API.
//!
//! This crate provides strongly-typed response records, validated parameter
//! objects and an async client that issues exactly one HTTPS request per call.
//!
//! # Features
//!
//! - **`types` module**: response records (`Account`, `Hotspot`, `Block`, ...)
//!   and the `Response`/`Page` envelopes. Available with no additional features.
//! - **`params` module**: cursor, search, geographic and time-window parameters,
//!   validated before any request is sent.
//! - **`client` module** (enabled by default): an async client built on `reqwest`.
//!
//! # Quick start
//!
//! ```no_run
//! use helium_api_client::{CursorParams, HeliumClient};
//!
//! #[tokio::main]
//! async fn main() -> helium_api_client::client::Result<()> {
//!     let client = HeliumClient::mainnet()?;
//!     let height = client.blocks().height().await?;
//!     println!("Height: {}", height.data.height);
//!
//!     let mut params = CursorParams::first();
//!     loop {
//!         let page = client.oracle().list(&params).await?;
//!         for price in &page.data {
//!             println!("block {}: ${:.4}", price.block, price.usd());
//!         }
//!         match page.next_params() {
//!             Some(next) => params = next,
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod params;
pub mod types;
mod units;

pub use params::*;
pub use units::{BONES_PER_HNT, ORACLE_PRICE_SCALE, bones_to_hnt, hnt_to_bones};

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::HeliumClient;

pub use types::*;
