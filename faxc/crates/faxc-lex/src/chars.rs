//! Character classification for Scheme lexical syntax.

/// A character that ends a token: whitespace, `(`, `)`, `"`, `;`, or
/// end-of-input (the cursor's `'\0'` sentinel for out-of-range positions).
pub fn is_delimiter(c: char) -> bool {
    c == '\0' || c.is_whitespace() || matches!(c, '(' | ')' | '"' | ';')
}

/// `! $ % & * / : < = > ? ^ _ ~` — allowed as the first character of an
/// identifier alongside ASCII letters.
pub fn is_special_initial(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '/' | ':' | '<' | '=' | '>' | '?' | '^' | '_' | '~'
    )
}

/// `+ - . @` — allowed to extend an identifier past its first character.
pub fn is_special_subsequent(c: char) -> bool {
    matches!(c, '+' | '-' | '.' | '@')
}

/// Valid first character of an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_special_initial(c)
}

/// Valid non-first character of an identifier.
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || is_special_subsequent(c)
}
