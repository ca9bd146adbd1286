//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use invite_core::Snowflake;

use crate::response::ApiError;

fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    Snowflake::parse(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// Path parameters with guild_id
#[derive(Debug, serde::Deserialize)]
pub struct GuildIdPath {
    pub guild_id: String,
}

impl GuildIdPath {
    /// Parse guild_id as Snowflake
    pub fn guild_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.guild_id, "guild_id")
    }
}

/// Path parameters with guild_id and member_id
#[derive(Debug, serde::Deserialize)]
pub struct GuildMemberPath {
    pub guild_id: String,
    pub member_id: String,
}

impl GuildMemberPath {
    /// Parse guild_id as Snowflake
    pub fn guild_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.guild_id, "guild_id")
    }

    /// Parse member_id as Snowflake
    pub fn member_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.member_id, "member_id")
    }
}
