//! Character-level helpers. Finnish letters outside ASCII (ä, ö, å) are
//! multi-byte in UTF-8, so everything here counts `char`s, not bytes.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'ä', 'ö', 'å'];

pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// The character before the last one.
pub fn penultimate_char(word: &str) -> Option<char> {
    let mut chars = word.chars().rev();
    chars.next();
    chars.next()
}

pub fn char_count(word: &str) -> usize {
    word.chars().count()
}

/// Removes the last `n` characters. Returns an empty string if `word` is shorter.
pub fn drop_last(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None => "",
    }
}

pub fn ends_with_any<'a>(word: &str, suffixes: &[&'a str]) -> Option<&'a str> {
    suffixes.iter().copied().find(|suffix| word.ends_with(suffix))
}

pub fn ends_in_vowel(word: &str) -> bool {
    last_char(word).map_or(false, is_vowel)
}

pub fn ends_in_consonant(word: &str) -> bool {
    last_char(word).map_or(false, |c| c.is_alphabetic() && !is_vowel(c))
}

/// True when the last two characters are both vowels (long vowel or diphthong).
pub fn ends_in_two_vowels(word: &str) -> bool {
    ends_in_vowel(word) && penultimate_char(word).map_or(false, is_vowel)
}

/// Counts vowel groups, which is a good enough syllable estimate for stems.
pub fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut in_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_vowel {
            count += 1;
        }
        in_vowel = vowel;
    }
    count
}

pub fn first_vowel(word: &str) -> Option<char> {
    word.chars().find(|c| is_vowel(*c))
}

/// Doubles the final vowel unless it is already long.
pub fn lengthen_final_vowel(word: &str) -> String {
    match last_char(word) {
        Some(c) if is_vowel(c) && penultimate_char(word) != Some(c) => format!("{}{}", word, c),
        _ => word.to_string(),
    }
}

pub fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> String {
    match word.strip_suffix(suffix) {
        Some(head) => format!("{}{}", head, replacement),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_last_is_char_safe() {
        assert_eq!(drop_last("tietää", 1), "tietä");
        assert_eq!(drop_last("tietää", 2), "tiet");
        assert_eq!(drop_last("yö", 2), "");
        assert_eq!(drop_last("yö", 5), "");
        assert_eq!(drop_last("yö", 0), "yö");
    }

    #[test]
    fn vowel_shapes() {
        assert!(ends_in_two_vowels("maa"));
        assert!(ends_in_two_vowels("suo"));
        assert!(!ends_in_two_vowels("kala"));
        assert_eq!(syllables("talo"), 2);
        assert_eq!(syllables("maa"), 1);
        assert_eq!(syllables("puhelin"), 3);
        assert_eq!(lengthen_final_vowel("sano"), "sanoo");
        assert_eq!(lengthen_final_vowel("halua"), "haluaa");
        assert_eq!(lengthen_final_vowel("maa"), "maa");
        assert_eq!(penultimate_char("käsi"), Some('s'));
    }
}
