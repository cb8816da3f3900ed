//! Display formatting for creature names.

/// Lowercase the whole string, then uppercase its first character.
///
/// `"PIKACHU"` and `"pikachu"` both become `"Pikachu"`. Empty input yields
/// empty output. When the uppercase form of the first character expands to
/// several characters (`ß` → `SS`), only the first of them is kept uppercase
/// so that applying the function twice gives the same result as once.
pub fn title_case(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut chars = lowered.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(lowered.len());
    let mut upper = first.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    // Tail of a multi-char uppercase expansion.
    for c in upper {
        out.extend(c.to_lowercase());
    }
    out.push_str(chars.as_str());
    out
}
