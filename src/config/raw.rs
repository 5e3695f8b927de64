use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Db {
    #[serde(default = "default_connection_sqlite")]
    pub connection_sqlite: String,
    #[serde(default = "default_connection_pool_size")]
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Self {
            connection_sqlite: default_connection_sqlite(),
            connection_pool_size: default_connection_pool_size(),
        }
    }
}

fn default_connection_sqlite() -> String {
    "opencfp.sqlite".to_string()
}

const fn default_connection_pool_size() -> u8 {
    8
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
}
