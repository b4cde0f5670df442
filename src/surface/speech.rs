use std::sync::LazyLock;

use regex::Regex;

use crate::types::PayloadTag;

static MARKDOWN_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*#|]").unwrap());
static TAG_BLOCK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PayloadTag::ALL
        .iter()
        .map(|tag| {
            Regex::new(&format!("(?s)<{tag}>.*?</{tag}>", tag = tag.as_str()))
                .expect("tag names contain no regex metacharacters")
        })
        .collect()
});

/// Prepare section text for read-aloud: strip the markdown marker
/// characters (`*`, `#`, `|`), then remove every tagged payload block for
/// all five tags. Unlike the extractor this removes repeats too, since
/// nothing here should ever be spoken.
pub fn speakable_text(text: &str) -> String {
    let mut clean = MARKDOWN_CHARS_RE.replace_all(text, "").into_owned();
    for re in TAG_BLOCK_RES.iter() {
        clean = re.replace_all(&clean, "").into_owned();
    }
    clean
}
