// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures and helpers for testing rivulet code.
//!
//! - [`TestData`] with [`Person`](person::Person) and [`Animal`](animal::Animal)
//!   fixtures in [`test_data`]
//! - [`Recorder`]: logs every delivery and completion of an observable
//! - [`helpers`]: async assertions bounded by a timeout

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;

pub use helpers::{assert_no_value_emitted, collect_within, expect_next};
pub use recorder::Recorder;
pub use test_data::TestData;
