// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Caret blink clock for text entry.
//!
//! Masonry widgets can't schedule their own timers, so the app runs this
//! task next to the slider. Ticks are only posted back to the UI thread
//! while `active` is set, i.e. while a value is being typed; the UI thread
//! bumps a counter the slider view watches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;

/// Message sent once per blink period
#[derive(Debug)]
pub struct CaretTick;

/// Post a `CaretTick` every `period` while `active` is set, until the app
/// stops listening
pub async fn blink(proxy: MessageProxy<CaretTick>, period: Duration, active: Arc<AtomicBool>) {
    let mut interval = tokio::time::interval(period);
    // The first tick of a tokio interval fires immediately
    interval.tick().await;

    tracing::debug!("Caret blink started ({:?})", period);
    loop {
        interval.tick().await;
        if !active.load(Ordering::SeqCst) {
            continue;
        }
        if proxy.message(CaretTick).is_err() {
            tracing::debug!("Caret blink stopped");
            break;
        }
    }
}
