/// Return the message text after the first blank line.
///
/// A message with no blank line has no body.
pub fn strip_headers(raw: &str) -> &str {
    match raw.find("\n\n") {
        Some(idx) => &raw[idx + 2..],
        None => "",
    }
}

/// Remove HTML tag spans (`<...>`) and character-entity spans (`&...;`)
/// from body text.
///
/// A lone `&` followed by a space ends the entity scan with the space
/// consumed, and the entity flag stays set until the next `;` seen inside
/// a markup span. A later `;` inside a `<...>` span can therefore close
/// that span early. Known quirk; callers rely on the exact output.
pub fn strip_html(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut in_markup = false;
    let mut open_bracket = false;
    let mut entity = false;
    let mut last: Option<char> = None;

    for c in body.chars() {
        if !in_markup {
            match c {
                '<' => {
                    open_bracket = true;
                    in_markup = true;
                }
                '&' => {
                    entity = true;
                    in_markup = true;
                }
                _ => text.push(c),
            }
        } else if c == '>' && open_bracket {
            in_markup = false;
            open_bracket = false;
        } else if c == ';' && entity {
            in_markup = false;
            entity = false;
        } else if last == Some('&') && c == ' ' {
            in_markup = false;
        }

        last = Some(c);
    }

    text
}
