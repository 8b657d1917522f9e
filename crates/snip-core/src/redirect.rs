use crate::error::{CoreError, Result};
use url::{ParseError, Url};

/// Resolves host-less references so they get the same parsing and
/// percent-encoding as absolute URLs.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Computes the protocol-relative `Location` for a stored destination.
///
/// Absolute URLs keep only their host (and non-default port): scheme, path,
/// query and fragment are dropped, so `https://example.com/page` becomes
/// `//example.com`. Host-less references keep only their path with leading
/// slashes collapsed, so `/local/path` becomes `//local/path`. Hosts are
/// lowercased and punycoded, paths percent-encoded, so the result is always
/// a valid header value.
pub fn redirect_target(original_url: &str) -> Result<String> {
    let target = match Url::parse(original_url) {
        Ok(url) => authority_target(&url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let url = Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(original_url))
                .map_err(|e| invalid_url(original_url, e))?;
            // a network-path reference (`//host/x`) carries its own host
            if original_url.starts_with("//") {
                authority_target(&url)
            } else {
                path_target(&url)
            }
        }
        Err(e) => return Err(invalid_url(original_url, e)),
    };

    Ok(format!("//{target}"))
}

fn authority_target(url: &Url) -> String {
    match url.host_str() {
        Some(host) => match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        },
        // opaque URLs such as `mailto:` have no path to keep
        None if url.cannot_be_a_base() => String::new(),
        None => path_target(url),
    }
}

fn path_target(url: &Url) -> String {
    url.path().trim_start_matches('/').to_owned()
}

fn invalid_url(original_url: &str, e: ParseError) -> CoreError {
    CoreError::InvalidUrl(format!("'{original_url}': {e}"))
}
