/// Translates raw model and build strings into human-readable names
///
/// Implementations must be pure: no side effects, and `None` in or an
/// unrecognized value yields `None`.
pub trait DeviceInfoResolver {
    /// Look up a friendly model name from a raw model identifier
    fn lookup_model(&self, raw_model: Option<&str>) -> Option<String>;

    /// Look up a software version from a build number
    fn lookup_version(&self, build: Option<&str>) -> Option<String>;
}

/// Built-in resolver backed by a static table of known devices
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownDevices;

impl KnownDevices {
    /// Create the built-in resolver
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn model_name(raw_model: &str) -> Option<&'static str> {
        match raw_model {
            "AppleTV2,1" => Some("Apple TV 2"),
            "AppleTV3,1" | "AppleTV3,2" => Some("Apple TV 3"),
            "AppleTV5,3" => Some("Apple TV 4"),
            "AppleTV6,2" => Some("Apple TV 4K"),
            "AppleTV11,1" => Some("Apple TV 4K (2nd generation)"),
            _ => None,
        }
    }

    fn version_name(build: &str) -> Option<&'static str> {
        match build {
            "17J586" => Some("13.0"),
            "17K82" => Some("13.2"),
            "17K449" => Some("13.3"),
            "17K795" => Some("13.3.1"),
            "17L256" => Some("13.4"),
            "17L562" => Some("13.4.5"),
            "17L570" => Some("13.4.6"),
            "17M61" => Some("13.4.8"),
            "18J386" => Some("14.0"),
            "18J400" => Some("14.0.1"),
            "18J411" => Some("14.0.2"),
            _ => None,
        }
    }
}

impl DeviceInfoResolver for KnownDevices {
    fn lookup_model(&self, raw_model: Option<&str>) -> Option<String> {
        raw_model.and_then(Self::model_name).map(str::to_string)
    }

    fn lookup_version(&self, build: Option<&str>) -> Option<String> {
        build.and_then(Self::version_name).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_model() {
        let resolver = KnownDevices::new();
        assert_eq!(
            resolver.lookup_model(Some("AppleTV6,2")),
            Some("Apple TV 4K".to_string())
        );
        assert_eq!(
            resolver.lookup_model(Some("AppleTV3,2")),
            Some("Apple TV 3".to_string())
        );
    }

    #[test]
    fn test_lookup_unknown_model() {
        let resolver = KnownDevices::new();
        assert_eq!(resolver.lookup_model(Some("AudioAccessory5,1")), None);
        assert_eq!(resolver.lookup_model(None), None);
    }

    #[test]
    fn test_lookup_version() {
        let resolver = KnownDevices::new();
        assert_eq!(
            resolver.lookup_version(Some("18J386")),
            Some("14.0".to_string())
        );
        assert_eq!(resolver.lookup_version(Some("1A1")), None);
        assert_eq!(resolver.lookup_version(None), None);
    }
}
