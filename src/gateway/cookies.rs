// SPDX-License-Identifier: MPL-2.0
//! Cookie lookup over a `Cookie` header string.

use percent_encoding::percent_decode_str;

/// Returns the decoded value of the first cookie called `name`.
///
/// `header` uses the `a=1; b=2` layout. Values are percent-decoded; a value
/// that does not decode to UTF-8 is returned lossily rather than dropped.
#[must_use]
pub fn read_cookie(header: &str, name: &str) -> Option<String> {
    if header.is_empty() || name.is_empty() {
        return None;
    }

    header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            cookie
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
