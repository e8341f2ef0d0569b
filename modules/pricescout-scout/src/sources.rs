/// Marketplaces and aggregators excluded from product searches: classifieds
/// and resale listings whose advertised prices are not retail offers.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "olx.com.pk",
    "msn.com",
    "mistore.pk",
    "mobilegeeks.pk",
    "hamariweb.com",
    "daraz.pk",
];

pub fn default_excluded_domains() -> Vec<String> {
    EXCLUDED_DOMAINS.iter().map(|d| d.to_string()).collect()
}

/// Hostname of a URL, if it parses as one.
pub fn extract_domain(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()?
        .host_str()
        .map(|host| host.to_string())
}
