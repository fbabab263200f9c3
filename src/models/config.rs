use std::borrow::Cow;

/// Connection settings for the Census geocoding service.
///
/// The request URL is `host` followed by `structured_endpoint`; `benchmark`
/// and `format` are sent as query parameters alongside the address fields.
/// Fields are `Cow` so the defaults stay `const` while overrides can be built
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusGeocoderConfig {
    pub host: Cow<'static, str>,
    pub structured_endpoint: Cow<'static, str>,
    pub benchmark: Cow<'static, str>,
    pub format: Cow<'static, str>,
}

impl CensusGeocoderConfig {
    pub fn structured_url(&self) -> String {
        format!("{}{}", self.host, self.structured_endpoint)
    }
}
