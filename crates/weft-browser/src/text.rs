//! Markup-stripping text extraction.

/// Convert raw markup into displayable text.
///
/// A single left-to-right scan drops everything between `<` and `>`
/// and decodes exactly two entity references, `&lt;` and `&gt;`.
///
/// The entity check runs before the tag-delimiter check and ignores
/// tag state entirely, so an entity written inside markup still comes
/// out as visible text (`<p>&lt;</p>` yields `<`). That matches the
/// reference behavior this scanner reproduces and is kept on purpose.
pub fn extract_text(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_tag = false;
    let mut rest = body;

    while let Some(ch) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("&lt;") {
            out.push('<');
            rest = tail;
            continue;
        }
        if let Some(tail) = rest.strip_prefix("&gt;") {
            out.push('>');
            rest = tail;
            continue;
        }
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {},
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}
