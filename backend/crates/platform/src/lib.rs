//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (Argon2id)
//! - Zeroized handling of clear text credentials

pub mod password;
