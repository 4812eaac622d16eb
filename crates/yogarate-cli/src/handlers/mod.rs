//! Command handlers that delegate to `RatingsService`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Turn CLI arguments into service inputs
//!   2. Call `RatingsService` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access the store directly
//! - Compute averages or groupings themselves

pub mod add_instructor;
pub mod favorite;
pub mod favorites;
pub mod history;
pub mod init;
pub mod instructors;
pub mod paths;
pub mod rate;
pub mod show;
