use schemars::JsonSchema;
use serde::Serialize;
use utility::duration::duration_format;

pub const SERVICE_INFO: &str = "Service app for IGC tracks";
pub const SERVICE_VERSION: &str = "v1";

/// The service self-description returned by `GET /api`. Derived on every
/// request from the process start time, never stored.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ServerMeta {
    pub uptime: String,
    pub info: String,
    pub version: String,
}

impl ServerMeta {
    pub fn at_age(uptime_secs: f64) -> Self {
        Self {
            uptime: duration_format(uptime_secs),
            info: SERVICE_INFO.to_owned(),
            version: SERVICE_VERSION.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServerMeta;

    #[test]
    fn uptime_is_rendered_iso_8601_style() {
        let meta = ServerMeta::at_age(3661.0);
        assert_eq!(meta.uptime, "P0DT1H1M1S");
        assert_eq!(meta.info, "Service app for IGC tracks");
        assert_eq!(meta.version, "v1");
    }
}
