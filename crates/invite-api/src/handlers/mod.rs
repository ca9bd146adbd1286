//! Route handlers

pub mod health;
pub mod leaderboard;
pub mod members;
