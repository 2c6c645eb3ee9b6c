use std::sync::LazyLock;

use regex::Regex;

use crate::storage::StorageErrorCode;

/// Trailing `_<field>_key` / `_<field>_ukey` of a constraint name
static KEY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_([^_]+)_(?:key|ukey)$").expect("valid constraint suffix pattern")
});

/// Build a stable `<ENTITY>_<ACTION>` code from a table name.
///
/// Singularization only drops one trailing `S`, so `categories` becomes
/// `CATEGORIE`.
pub fn generate_error_code(table_name: &str, code: StorageErrorCode) -> String {
    let upper = if table_name.is_empty() {
        "RECORD".to_string()
    } else {
        table_name.to_uppercase()
    };
    let entity = strip_plural(&upper, 'S');

    let action = match code {
        StorageErrorCode::ForeignKeyViolation => "NOT_FOUND",
        StorageErrorCode::UniqueViolation => "ALREADY_EXISTS",
        StorageErrorCode::NotNullViolation => "REQUIRED",
        StorageErrorCode::CheckViolation => "INVALID",
        StorageErrorCode::Other => "ERROR",
    };

    format!("{entity}_{action}")
}

/// Noun used in user-facing prose.
///
/// A column ending in `_id` names the related entity; otherwise the
/// singular table name is used, then `record`.
pub fn entity_name(table_name: &str, column_name: &str) -> String {
    if let Some(entity) = strip_id_suffix(column_name) {
        return humanize(&entity);
    }
    if !table_name.is_empty() {
        return humanize(strip_plural(table_name, 's'));
    }
    "record".to_string()
}

/// Lower-cased column with a trailing `_id` removed, if it had one
pub(crate) fn strip_id_suffix(column_name: &str) -> Option<String> {
    let lowered = column_name.to_lowercase();
    lowered.strip_suffix("_id").map(str::to_string)
}

/// `snake_case` to title-cased words: `first_name` -> `First Name`
pub fn humanize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Field name encoded in a unique constraint name, or an empty string.
///
/// `unique_`-prefixed names with at least three segments yield their last
/// segment as-is; otherwise a trailing `_<field>_key` or `_<field>_ukey` is
/// matched.
pub fn extract_field(constraint_name: &str) -> String {
    if constraint_name.is_empty() {
        return String::new();
    }

    if constraint_name.starts_with("unique_") && constraint_name.split('_').count() >= 3 {
        if let Some(last) = constraint_name.rsplit('_').next() {
            return last.to_string();
        }
    }

    KEY_SUFFIX
        .captures(constraint_name)
        .and_then(|caps| caps.get(1))
        .map(|field| field.as_str().to_string())
        .unwrap_or_default()
}

fn strip_plural(word: &str, suffix: char) -> &str {
    if word.len() > 1 {
        word.strip_suffix(suffix).unwrap_or(word)
    } else {
        word
    }
}
