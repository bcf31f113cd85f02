//! Plain-text rendering of untrusted rich-text fields.
//!
//! Descriptions come from the data source and may carry markup. Tags are
//! dropped, line-level tags become line breaks and the common entities are
//! decoded, so nothing from the data file is ever interpreted as markup.

const LINE_BREAK_TAGS: [&str; 11] = [
    "br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6",
];

pub fn to_plain_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        push_text(&mut out, &rest[..start]);
        let after = &rest[start + 1..];
        match after.find('>').filter(|_| opens_tag(after)) {
            Some(end) => {
                if is_line_break_tag(&after[..end]) && !out.ends_with('\n') && !out.is_empty() {
                    out.push('\n');
                }
                rest = &after[end + 1..];
            }
            None => {
                // Not markup, or never closed: keep the '<' as text.
                out.push('<');
                rest = after;
            }
        }
    }
    push_text(&mut out, rest);

    out.trim().to_string()
}

/// A tag starts right after `<` with a name, a closing slash or `!`.
fn opens_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c == '/' || c == '!' || c.is_ascii_alphabetic())
}

fn is_line_break_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    LINE_BREAK_TAGS.contains(&name.as_str())
}

fn push_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        push_clean(out, &rest[..amp]);
        let after = &rest[amp..];
        match decode_entity(after) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &after[len..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    push_clean(out, rest);
}

fn push_clean(out: &mut String, text: &str) {
    out.extend(text.chars().filter(|c| !c.is_control() || *c == '\n'));
}

/// Decode the entity at the start of `s`. Returns the character and the byte
/// length consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let end = s
        .char_indices()
        .take(12)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &s[1..end];
    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = if let Some(hex) = body.strip_prefix("#x").or(body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                body.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code).filter(|c| !c.is_control() || *c == '\n')?
        }
    };
    Some((ch, end + 1))
}
