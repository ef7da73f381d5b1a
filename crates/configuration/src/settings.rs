use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub global: GlobalSettings,
}

/// Connection parameters for the PostgreSQL server.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    /// Kept as a string to match the config file shape (e.g. "5432").
    pub port: String,
    /// The database name to connect to.
    pub database: String,
}

/// Application-wide switches.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalSettings {
    /// When true, the default log filter is lowered to `debug`.
    pub debug: bool,
}

impl DatabaseSettings {
    /// Builds the connection URL the database pool is opened with.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}
