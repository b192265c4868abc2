// handlers/mod.rs - two security tiers
//
// Public (no auth): service banner and health check
// Protected (JWT auth): like and view operations under /api/*
pub mod public;
pub mod protected;
