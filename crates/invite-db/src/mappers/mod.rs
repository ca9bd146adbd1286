//! Mappers - convert between database models and domain entities

mod invite_stats;
mod member_history;
