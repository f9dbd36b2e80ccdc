// handlers/public/mod.rs - Handlers reachable without a token
//
// Route prefix: /api/v1/auth

pub mod auth;
