/// Characters stripped from the end of a normalization key, besides
/// whitespace: trailing punctuation and closing brackets.
const TRAILING_STRIP: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

/// Compute the normalization key used for duplicate comparison.
///
/// The key is never stored or displayed: trim outer whitespace, lowercase,
/// collapse internal whitespace runs to a single space, then strip trailing
/// whitespace and punctuation/closing-bracket characters. Two item texts
/// are duplicates iff their keys are equal, so `"Sunscreen"` and
/// `" sunscreen. "` collide while the first-inserted spelling is what the
/// user keeps seeing.
pub fn normalization_key(s: &str) -> String {
    let collapsed = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    collapsed
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_STRIP.contains(&c))
        .to_string()
}
