use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL pattern"));

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+|#\w+").expect("valid mention pattern"));

// Keeps ASCII letters, Spanish accented vowels, ü, ñ and whitespace
static NON_SPANISH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-záéíóúüñ\s]").expect("valid charset pattern"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Lowercase the text and strip URLs, mentions, hashtags, digits and punctuation.
///
/// The result contains only Spanish letters separated by single spaces.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = NON_SPANISH_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}
