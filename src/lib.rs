// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod session;
pub mod store;
pub mod sync;
pub mod utils;
pub mod view;
