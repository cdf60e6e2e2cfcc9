/// Accessor names that would shadow a keyword in the generated source.
pub const RESERVED_ACCESSORS: [&str; 2] = ["type", "class"];

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

/// Collapses the underscore-separated parts of an identifier: the first
/// part is kept verbatim, every later part gets its first character
/// upper-cased. Identifiers without underscores pass through untouched.
fn capitalize_after_underscore(s: &str) -> String {
    if !s.contains('_') {
        return s.to_string();
    }
    let mut parts = s.split('_');
    let mut out = String::from(parts.next().unwrap_or(""));
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().to_string() + chars.as_str(),
    }
}

/// Upper-camel case: `shipping_address` → `ShippingAddress`, `myField` →
/// `MyField`. The tail of each part keeps its original casing.
pub fn pascal_case(s: &str) -> String {
    upper_first(&capitalize_after_underscore(s))
}

/// Lower-camel case: `shipping_address` → `shippingAddress`, `MyField` →
/// `myField`.
pub fn camel_case(s: &str) -> String {
    lower_first(&capitalize_after_underscore(s))
}

/// Lower-camel accessor name, escaped with a leading underscore when it
/// collides with a reserved identifier.
pub fn accessor_name(raw: &str) -> String {
    let name = camel_case(raw);
    if RESERVED_ACCESSORS.contains(&name.as_str()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Normalizes directory separators so path ordering and labels are stable
/// across platforms.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
