//! FlashMint GUI Library
//!
//! This crate provides the application logic for the FlashMint GUI, a
//! native presentation client for the FlashMint token site: localized page
//! copy in three languages, tokenomics charts, and the NFT tier selector.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
