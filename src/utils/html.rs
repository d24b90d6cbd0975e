// src/utils/html.rs

/// Decode HTML character references into plain text.
///
/// Open Trivia DB ships question and answer strings with HTML entities
/// (`&quot;`, `&#039;`, `&eacute;`, ...). A browser decodes these on
/// insertion; for terminal display we decode them here, at the fetch
/// boundary, so the rest of the game only ever sees plain text.
///
/// Note:
/// 1. Both named references and numeric references (decimal and hex)
///    are handled.
/// 2. Unknown references are passed through verbatim rather than dropped,
///    so off-list entities stay visible instead of corrupting the text.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        // Entities are short; a far-away semicolon means a bare ampersand.
        let semi = tail.find(';').filter(|&pos| pos <= 24 && !tail[..pos].contains('&'));

        match semi {
            Some(pos) => {
                let name = &tail[..pos];
                match decode_reference(name) {
                    Some(ch) => {
                        out.push(ch);
                        rest = &tail[pos + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = tail;
                    }
                }
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        return decode_numeric(num);
    }
    decode_named(name)
}

fn decode_numeric(value: &str) -> Option<char> {
    let codepoint = if let Some(hex) = value.strip_prefix('x').or_else(|| value.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        value.parse::<u32>().ok()?
    };
    char::from_u32(codepoint)
}

/// Named references observed in Open Trivia DB exports.
fn decode_named(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        "ldquo" => Some('\u{201C}'),
        "rdquo" => Some('\u{201D}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "hellip" => Some('\u{2026}'),
        "deg" => Some('°'),
        "plusmn" => Some('±'),
        "times" => Some('×'),
        "divide" => Some('÷'),
        "frac12" => Some('½'),
        "frac14" => Some('¼'),
        "frac34" => Some('¾'),
        "sup2" => Some('²'),
        "sup3" => Some('³'),
        "pound" => Some('£'),
        "euro" => Some('€'),
        "yen" => Some('¥'),
        "copy" => Some('©'),
        "reg" => Some('®'),
        "trade" => Some('™'),
        "aacute" => Some('á'),
        "eacute" => Some('é'),
        "iacute" => Some('í'),
        "oacute" => Some('ó'),
        "uacute" => Some('ú'),
        "agrave" => Some('à'),
        "egrave" => Some('è'),
        "auml" => Some('ä'),
        "euml" => Some('ë'),
        "iuml" => Some('ï'),
        "ouml" => Some('ö'),
        "uuml" => Some('ü'),
        "ccedil" => Some('ç'),
        "ntilde" => Some('ñ'),
        "szlig" => Some('ß'),
        "aring" => Some('å'),
        "oslash" => Some('ø'),
        _ => None,
    }
}
