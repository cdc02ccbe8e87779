use serde::{Deserialize, Serialize};

/// Normalized form of the URL fragment.
///
/// Parsing never fails: anything outside the recognized vocabulary becomes
/// [`Location::Unknown`] and is later normalized to the home page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Home,
    Auth,
    AdminRequest,
    CheckoutRequest,
    OrderSuccess,
    ProductRequest(String),
    Unknown,
}

const PRODUCT_PREFIX: &str = "#product/";

impl Location {
    /// Parse a raw fragment as returned by `window.location.hash`
    /// (leading `#` included, empty when there is no fragment).
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "#" | "#home" => Location::Home,
            "#auth" => Location::Auth,
            _ if raw.starts_with("#admin") => Location::AdminRequest,
            "#checkout" => Location::CheckoutRequest,
            "#order-success" => Location::OrderSuccess,
            _ if raw.starts_with(PRODUCT_PREFIX) => {
                // id is everything after the first '/'
                let id = raw.split_once('/').map(|(_, id)| id).unwrap_or_default();
                Location::ProductRequest(id.to_string())
            }
            _ => Location::Unknown,
        }
    }

    /// Fragment to write back into the URL, without the leading `#`.
    ///
    /// `Unknown` has no fragment of its own and is written as home (`""`).
    pub fn fragment(&self) -> String {
        match self {
            Location::Home | Location::Unknown => String::new(),
            Location::Auth => "auth".to_string(),
            Location::AdminRequest => "admin".to_string(),
            Location::CheckoutRequest => "checkout".to_string(),
            Location::OrderSuccess => "order-success".to_string(),
            Location::ProductRequest(id) => format!("product/{}", id),
        }
    }

    /// Same as [`Location::fragment`] but with the `#` prefix, comparable with
    /// what the browser reports. Home is reported as an empty string.
    pub fn hash(&self) -> String {
        let fragment = self.fragment();
        if fragment.is_empty() {
            fragment
        } else {
            format!("#{}", fragment)
        }
    }

    pub fn product(id: impl Into<String>) -> Self {
        Location::ProductRequest(id.into())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Unknown => write!(f, "<unknown>"),
            other => write!(f, "#{}", other.fragment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home_variants() {
        assert_eq!(Location::parse(""), Location::Home);
        assert_eq!(Location::parse("#"), Location::Home);
        assert_eq!(Location::parse("#home"), Location::Home);
    }

    #[test]
    fn test_parse_known_fragments() {
        assert_eq!(Location::parse("#auth"), Location::Auth);
        assert_eq!(Location::parse("#checkout"), Location::CheckoutRequest);
        assert_eq!(Location::parse("#order-success"), Location::OrderSuccess);
    }

    #[test]
    fn test_parse_admin_prefix() {
        assert_eq!(Location::parse("#admin"), Location::AdminRequest);
        assert_eq!(Location::parse("#admin-login"), Location::AdminRequest);
        assert_eq!(Location::parse("#administrator"), Location::AdminRequest);
    }

    #[test]
    fn test_parse_product() {
        assert_eq!(Location::parse("#product/42"), Location::product("42"));
        assert_eq!(Location::parse("#product/"), Location::product(""));
        assert_eq!(Location::parse("#product/a/b"), Location::product("a/b"));
    }

    #[test]
    fn test_parse_is_case_sensitive_and_exact() {
        assert_eq!(Location::parse("#Auth"), Location::Unknown);
        assert_eq!(Location::parse("#checkout/"), Location::Unknown);
        assert_eq!(Location::parse("auth"), Location::Unknown);
        assert_eq!(Location::parse("#product"), Location::Unknown);
        assert_eq!(Location::parse("#whatever"), Location::Unknown);
    }

    #[test]
    fn test_fragment_reparses_to_same_location() {
        let all = [
            Location::Home,
            Location::Auth,
            Location::AdminRequest,
            Location::CheckoutRequest,
            Location::OrderSuccess,
            Location::product("7"),
        ];
        for location in all {
            assert_eq!(Location::parse(&location.hash()), location);
        }
        assert_eq!(Location::parse(&Location::Unknown.hash()), Location::Home);
    }
}
