//! URL query resolution of the widget input.
//!
//! `encoded` is consulted before `data`. A parameter that is present but
//! fails to decode is logged and treated as absent, so resolution always
//! falls through instead of surfacing an error.

#[cfg(test)]
#[path = "input_source_test.rs"]
mod input_source_test;

use payload::{AgentChatWindowInput, QueryParam};

/// Form-decoded value of the first `name` parameter in `query`.
///
/// A leading `?` is optional. Empty values count as absent.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = payload::form_decode(key).unwrap_or_else(|_| key.to_owned());
            if key != name {
                return None;
            }
            Some(payload::form_decode(value).unwrap_or_else(|_| value.to_owned()))
        })
        .filter(|value| !value.is_empty())
}

/// Resolve an input from a query string such as `location.search`.
pub fn resolve_query(query: &str) -> Option<AgentChatWindowInput> {
    if let Some(raw) = query_param(query, QueryParam::Encoded.name()) {
        match payload::decode_base64(&raw) {
            Ok(input) => return Some(input),
            Err(e) => leptos::logging::warn!("ignoring `encoded` parameter: {e}"),
        }
    }

    if let Some(raw) = query_param(query, QueryParam::Data.name()) {
        match payload::decode_url_json(&raw) {
            Ok(input) => return Some(input),
            Err(e) => leptos::logging::warn!("ignoring `data` parameter: {e}"),
        }
    }

    None
}

/// Resolve an input from the current page URL.
pub fn resolve_from_location() -> Option<AgentChatWindowInput> {
    #[cfg(feature = "csr")]
    {
        let search = match web_sys::window()?.location().search() {
            Ok(search) => search,
            Err(e) => {
                leptos::logging::warn!("location.search unavailable: {e:?}");
                return None;
            }
        };
        resolve_query(&search)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
