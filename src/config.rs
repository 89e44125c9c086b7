use crate::model::UserId;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4000;

/// User id bound to the `me` query field when nothing overrides it.
pub const DEFAULT_ME_USER_ID: UserId = 1;

/// Maximum query nesting depth accepted at validation time. Field levels
/// count from 1 at the root, so 5 admits `{ a { b { c { d { e } } } } }`
/// and rejects anything deeper.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Runtime settings for the GraphQL server.
///
/// There is no config file: the dataset is an in-memory seed and the server
/// exposes a single endpoint, so everything here is a process-start constant
/// with optional CLI overrides.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Identity selected for `me`. A stand-in for authentication: fixed at
    /// process start and attached to every incoming request.
    pub me_user_id: UserId,

    /// Queries nested deeper than this are rejected before execution.
    pub max_depth: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            me_user_id: DEFAULT_ME_USER_ID,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
