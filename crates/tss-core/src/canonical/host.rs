//! TikTok host family.

/// Host every canonical URL is rebuilt on.
pub const CANONICAL_HOST: &str = "www.tiktok.com";
pub const BARE_HOST: &str = "tiktok.com";
/// Redirect-only hosts that must be resolved before canonicalization.
pub const SHORTLINK_HOSTS: [&str; 2] = ["vm.tiktok.com", "vt.tiktok.com"];

const DOMAIN_SUFFIX: &str = ".tiktok.com";

/// True for `tiktok.com`, the canonical host, the shortlink hosts, and any
/// subdomain of `tiktok.com`. Expects a lower-cased host.
pub fn is_tiktok_host(host: &str) -> bool {
    host == CANONICAL_HOST
        || host == BARE_HOST
        || is_shortlink_host(host)
        || host.ends_with(DOMAIN_SUFFIX)
}

/// Exact match against the shortlink hosts. Expects a lower-cased host.
pub fn is_shortlink_host(host: &str) -> bool {
    SHORTLINK_HOSTS.contains(&host)
}
