//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());
}
