use std::collections::BTreeMap;

/// Parse the header block of a raw message into a name → value map.
///
/// Reads `Name: value` lines up to the first blank line. A continuation
/// line (leading whitespace) appends to the most recent header's value.
/// Internal whitespace in values is collapsed to single spaces; lines that
/// match neither shape are dropped.
pub fn parse_headers(raw: &str) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in raw.lines() {
        if line.is_empty() {
            break;
        }

        let continuation = line.starts_with(' ') || line.starts_with('\t');
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            break;
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        if continuation {
            let Some(name) = current.as_ref() else {
                continue;
            };
            if let Some(value) = headers.get_mut(name) {
                value.push(' ');
                value.push_str(first);
                if !rest.is_empty() {
                    value.push(' ');
                    value.push_str(&rest);
                }
            }
        } else if first.len() > 1 && first.ends_with(':') && !rest.is_empty() {
            let name = first[..first.len() - 1].to_string();
            headers.insert(name.clone(), rest);
            current = Some(name);
        }
    }

    headers
}
