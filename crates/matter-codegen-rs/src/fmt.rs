// crates/matter-codegen-rs/src/fmt.rs

//! Case and number formatting shared by the resolver and the templating
//! layer.
//!
//! The template helpers (class names, enum constants, hex literals) call
//! straight into these functions, so the exact transforms are part of the
//! generated code's shape.

/// Upper-camel-cases a specification name: `on time` / `on_time` → `OnTime`.
/// Interior capitalization is preserved, so `OnOff` stays `OnOff`.
pub fn to_upper_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for ch in s.chars() {
        if ch == '_' || ch.is_whitespace() {
            boundary = true;
        } else if boundary {
            out.extend(ch.to_uppercase());
            boundary = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lower-camel-cases a specification name: `OnTime` → `onTime`,
/// `start up on off` → `startUpOnOff`.
pub fn to_lower_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = false;
    let mut first = true;
    for ch in s.chars() {
        if ch == '_' || ch.is_whitespace() {
            boundary = true;
        } else if first {
            out.extend(ch.to_lowercase());
            first = false;
        } else if boundary {
            out.extend(ch.to_uppercase());
            boundary = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Title-cases a name, breaking camel-case words apart:
/// `OnOffLight` → `On Off Light`, `color_control` → `Color Control`.
pub fn to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for ch in s.chars() {
        if ch.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = ch.is_lowercase();
        spaced.push(ch);
    }

    spaced
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(head) => head
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Upper-snake-cases a name for enum constants: `OffWithEffect` →
/// `OFF_WITH_EFFECT`. Names starting with a digit get a `V` prefix so the
/// constant stays a valid identifier.
pub fn to_enum_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('V');
    }
    let mut prev_lower = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            out.push('_');
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase();
        out.extend(ch.to_uppercase());
    }
    out
}

/// Formats a value as an uppercase `0x...` literal, zero-padded to `width`
/// hex digits. A width of zero disables padding.
pub fn to_hex(value: u64, width: usize) -> String {
    format!("0x{value:0width$X}")
}
