//! Test utilities for HTTP and use-case tests.
//!
//! This module provides:
//! - Test data factories for creating valid waitlist fixtures
//! - In-memory implementations of the waitlist store and email sender
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
