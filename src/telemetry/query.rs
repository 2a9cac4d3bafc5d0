//! Merging encoded properties into the endpoint URL

use url::{Url, form_urlencoded};

use super::value::Properties;

/// Parse `endpoint` and merge `properties` into its query string.
///
/// Existing query segments are kept as written (repeated keys and bare flags
/// included); every segment whose key matches a property is replaced by it.
pub fn merge_query(endpoint: &str, properties: &Properties) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(endpoint.trim())?;

    let mut segments: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            form_urlencoded::parse(segment.as_bytes())
                .next()
                .is_none_or(|(key, _)| !properties.contains_key(&*key))
        })
        .map(str::to_string)
        .collect();

    if !properties.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in properties {
            serializer.append_pair(key, &value.encode());
        }
        segments.push(serializer.finish());
    }

    if segments.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&segments.join("&")));
    }

    Ok(url)
}
