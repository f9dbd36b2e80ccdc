// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) -> Protected (bearer token required)

pub mod protected; // /api/v1/* behind the bearer gate
pub mod public; // /api/v1/auth/*
pub mod utils;
