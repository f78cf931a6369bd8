//! Features - Page Sections
//!
//! One module per section of the page, each with its view and, where the
//! section has behavior, a controller.

pub mod about;
pub mod hero;
pub mod income;
pub mod roadmap;
pub mod tokenomics;
