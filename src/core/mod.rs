//! # Core Application Logic
//!
//! This module contains Trio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • calc (evaluator)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`screen`]: The closed set of navigable screens
//! - [`calc`]: The arithmetic expression evaluator and keypad state
//! - [`countries`]: Static data for the country list screen
//! - [`config`]: Settings with the defaults → file → CLI hierarchy

pub mod action;
pub mod calc;
pub mod config;
pub mod countries;
pub mod screen;
pub mod state;
