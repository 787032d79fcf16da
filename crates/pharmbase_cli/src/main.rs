//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pharmbase_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pharmbase_core ping={}", pharmbase_core::ping());
    println!("pharmbase_core version={}", pharmbase_core::core_version());
}
