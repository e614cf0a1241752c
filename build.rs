// SPDX-License-Identifier: Unlicense

//! Stamp the build date and time into the ready descriptor.
//!
//! Honours `SOURCE_DATE_EPOCH` for reproducible images.

use chrono::{TimeZone, Utc};
use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let stamp = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Utc::now);

    // same shape as C's __DATE__ and __TIME__: "Nov  4 2023", "22:13:20"
    println!("cargo:rustc-env=FW_BUILD_DATE={}", stamp.format("%b %e %Y"));
    println!("cargo:rustc-env=FW_BUILD_TIME={}", stamp.format("%H:%M:%S"));
}
