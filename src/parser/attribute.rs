// Attribute name translation

/// Translate a hyphenated attribute name into its option key.
///
/// Each `-x` (lowercase ASCII letter) becomes `X`; other hyphens are kept.
pub fn camel_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' => match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    output.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => output.push('-'),
            },
            _ => output.push(c),
        }
    }

    output
}
