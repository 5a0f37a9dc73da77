//! Minimal HTML-to-text conversion for exercise descriptions.
//!
//! Descriptions are short editor-generated fragments (`<p>`, `<ul>`, `<li>`,
//! `<strong>` ...). Tags are dropped, a handful of entities decoded and
//! whitespace collapsed; nothing more.

const ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("#39", '\''),
    ("nbsp", ' '),
];

/// Converts an HTML fragment into a single line of plain text.
#[must_use]
pub fn to_plain_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                // Tags act as word separators so "<p>a</p><p>b</p>" keeps "a b".
                raw.push(' ');
                rest = rest.find('>').map_or("", |end| &rest[end + 1..]);
            }
            '&' => {
                let decoded = rest.find(';').and_then(|end| {
                    let name = &rest[1..end];
                    decode_entity(name).map(|ch| (ch, end + 1))
                });
                if let Some((ch, consumed)) = decoded {
                    raw.push(ch);
                    rest = &rest[consumed..];
                } else {
                    raw.push('&');
                    rest = &rest[1..];
                }
            }
            _ => {
                raw.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some((_, ch)) = ENTITIES.iter().find(|(entity, _)| *entity == name) {
        return Some(*ch);
    }
    let code = name.strip_prefix('#')?;
    let value = code
        .strip_prefix('x')
        .map_or_else(|| code.parse().ok(), |hex| u32::from_str_radix(hex, 16).ok())?;
    char::from_u32(value)
}
