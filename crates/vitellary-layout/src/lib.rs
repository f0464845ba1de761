//! # vitellary-layout
//!
//! Compiled layout of the VVVVVV game-state structure.
//!
//! This crate provides:
//! - Game mode constants (`GameMode`)
//! - The `#[repr(C)]` mirror of the game object read by the autosplitter
//! - Layout descriptor and validation (`GameLayout`)
//! - The three-line text report consumed by external tools (`LayoutReport`)
//! - Revision records and split detection built on the report (`Revision`, `Tracker`)

pub mod error;
pub mod game;
pub mod layout;
pub mod report;
pub mod revision;
pub mod tracker;

pub use error::{Error, Result};
pub use game::{GameMode, GameObject, Timer};
pub use layout::{Field, GameLayout};
pub use report::LayoutReport;
pub use revision::Revision;
pub use tracker::{Event, SPLITS, Tracker, Update, classify};
