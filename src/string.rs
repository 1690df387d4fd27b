//! String helper functions.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEWLINES: Regex = Regex::new(r"(\r\n|\n|\r)").unwrap();
    static ref BREAK_TAGS: Regex = Regex::new(r"(?i)<br */?>").unwrap();
    static ref OUTER_SLASHES: Regex = Regex::new(r"^/*(.+?)/*$").unwrap();
    static ref DOUBLE_SLASHES: Regex = Regex::new(r"([^:])//+").unwrap();
}

const ALPHA_POOL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALNUM_POOL: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// str_part - Part of a string relative to the first occurrence of a needle
/// (case-sensitive).
///
/// With `from_start` the prefix before the needle is returned, otherwise the
/// suffix starting one character past the needle's position. The source
/// comes back unchanged when the needle is absent.
pub fn str_part(source: &str, needle: &str, from_start: bool) -> String {
    match source.find(needle) {
        None => source.to_string(),
        Some(pos) => {
            if from_start {
                source[..pos].to_string()
            } else {
                skip_one_char(&source[pos..])
            }
        }
    }
}

/// str_rpart - Same as [`str_part`] but splits on the last occurrence.
pub fn str_rpart(source: &str, needle: &str, from_start: bool) -> String {
    match source.rfind(needle) {
        None => source.to_string(),
        Some(pos) => {
            if from_start {
                source[..pos].to_string()
            } else {
                skip_one_char(&source[pos..])
            }
        }
    }
}

/// str_ipart - Part of a string relative to the first occurrence of a needle
/// (ASCII-case-insensitive).
///
/// Unlike [`str_part`], the suffix form keeps the needle itself; that
/// asymmetry comes from the original helpers and is preserved.
pub fn str_ipart(source: &str, needle: &str, from_start: bool) -> String {
    let haystack = source.to_ascii_lowercase();
    match haystack.find(&needle.to_ascii_lowercase()) {
        None => source.to_string(),
        Some(pos) => {
            if from_start {
                source[..pos].to_string()
            } else {
                source[pos..].to_string()
            }
        }
    }
}

fn skip_one_char(s: &str) -> String {
    let mut chars = s.chars();
    chars.next();
    chars.as_str().to_string()
}

/// br2nl - Reverse of `nl2br`: strips existing newlines, then converts
/// `<br>`-style tags back into newlines.
pub fn br2nl(source: &str) -> String {
    let stripped = NEWLINES.replace_all(source, "");
    BREAK_TAGS.replace_all(&stripped, "\n").into_owned()
}

/// add_dots - Crops a string at `length` bytes and appends the literal
/// `&hellip;` marker when a crop happened.
///
/// With `last_word`, the crop backs up to the last space so no word is cut
/// in half; a cropped prefix containing no space collapses to just the
/// marker, as in the original. The cut point is backed off to a character
/// boundary so multi-byte text never splits.
pub fn add_dots(source: &str, length: usize, last_word: bool) -> String {
    if source.len() <= length {
        return source.to_string();
    }
    let mut end = length;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let mut cropped = &source[..end];
    if last_word {
        cropped = match cropped.rfind(' ') {
            Some(pos) => &cropped[..pos],
            None => "",
        };
    }
    format!("{}&hellip;", cropped)
}

/// trim_slashes - Removes leading and trailing slashes.
pub fn trim_slashes(source: &str) -> String {
    OUTER_SLASHES.replace(source, "$1").into_owned()
}

/// reduce_double_slashes - Collapses runs of slashes to a single one, except
/// right after a colon so `http://` survives.
pub fn reduce_double_slashes(source: &str) -> String {
    DOUBLE_SLASHES.replace_all(source, "${1}/").into_owned()
}

/// Owned counter store for [`AlternateCounters::alternate`]. Each distinct
/// candidate set gets its own counter, keyed by a hash of the concatenated
/// candidates. This replaces the ambient static counter of the original
/// helper with caller-held state.
#[derive(Debug, Default)]
pub struct AlternateCounters {
    counters: HashMap<u64, usize>,
}

impl AlternateCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles deterministically through the candidates: the first call for a
    /// given set returns the first candidate, the next call the second, and
    /// so on, wrapping around.
    pub fn alternate(&mut self, candidates: &[&str]) -> String {
        if candidates.is_empty() {
            return String::new();
        }
        let mut hasher = DefaultHasher::new();
        candidates.concat().hash(&mut hasher);
        let key = hasher.finish();

        let counter = self.counters.entry(key).and_modify(|c| *c += 1).or_insert(0);
        candidates[*counter % candidates.len()].to_string()
    }
}

/// random_string - Random string of `length` characters drawn uniformly
/// from `pool`.
pub fn random_string(pool: &str, length: usize) -> String {
    let chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| chars[fastrand::usize(0..chars.len())])
        .collect()
}

/// random_alpha_string - Random string of ASCII letters.
pub fn random_alpha_string(length: usize) -> String {
    random_string(ALPHA_POOL, length)
}

/// random_alnum_string - Random alphanumeric ASCII string.
pub fn random_alnum_string(length: usize) -> String {
    random_string(ALNUM_POOL, length)
}
