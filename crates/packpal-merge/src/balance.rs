/// The bracket pairs the repair pass looks at, in application order.
const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Repair unbalanced brackets by appending missing closers and prepending
/// missing openers.
///
/// For each pair independently: if the string has more opens than closes,
/// the missing closers are appended; if more closes than opens, the missing
/// openers are prepended. This is a heuristic count balance, not a syntax
/// check — it repairs candidates truncated by upstream text extraction and
/// can produce semantically odd but structurally balanced strings. Nesting
/// order is never validated.
///
/// Openers for later pairs land in front of earlier ones: a string missing
/// all three openers gains the prefix `{[(`. Appended closers land in pair
/// order, not nesting order: `"(a [b"` becomes `"(a [b)]"`.
pub fn balance_brackets(s: &str) -> String {
    let mut prefix = String::new();
    let mut suffix = String::new();
    for (open, close) in PAIRS {
        let opens = s.chars().filter(|&c| c == open).count();
        let closes = s.chars().filter(|&c| c == close).count();
        if opens > closes {
            for _ in 0..opens - closes {
                suffix.push(close);
            }
        } else if closes > opens {
            let mut run: String = (0..closes - opens).map(|_| open).collect();
            run.push_str(&prefix);
            prefix = run;
        }
    }
    if prefix.is_empty() && suffix.is_empty() {
        s.to_string()
    } else {
        format!("{prefix}{s}{suffix}")
    }
}
