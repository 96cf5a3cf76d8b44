pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "PORTCULLIS_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "PORTCULLIS";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const BASE_CONFIG_FILE: &str = "base";

pub mod defaults {
    pub const SESSION_COOKIE_NAME: &str = "portcullis.sid";
    /// Two weeks.
    pub const SESSION_TIME_TO_LIVE_SECS: u64 = 14 * 24 * 60 * 60;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
