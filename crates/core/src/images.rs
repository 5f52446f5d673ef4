/// Default placeholder image service
pub const DEFAULT_IMAGE_HOST: &str = "loremflickr.com";

/// Build `https://<host>/800/400/<keywords>[?lock=<n>]`.
///
/// `keywords` is inserted verbatim, callers encode anything that is not a
/// plain comma-joined keyword list. The lock only varies which image the
/// service returns; it carries no uniqueness guarantee.
pub fn placeholder_image_url(host: &str, keywords: &str, lock: Option<u32>) -> String {
    match lock {
        Some(lock) => format!("https://{}/800/400/{}?lock={}", host, keywords, lock),
        None => format!("https://{}/800/400/{}", host, keywords),
    }
}
