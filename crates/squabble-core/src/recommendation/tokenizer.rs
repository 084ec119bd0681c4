//! Keyword tokenization policy.
//!
//! Tokenization and stop-word handling are locale-specific (the app serves
//! mixed Latin/CJK text), so the policy lives in a swappable config object
//! rather than hard-coded literals inside the analyzer.

use std::collections::HashSet;

/// Delimiters used by the default tokenizer: Latin and CJK sentence
/// punctuation. Whitespace always splits, independent of this set.
pub const DEFAULT_DELIMITERS: [char; 8] = ['，', '。', '！', '？', ',', '.', '!', '?'];

/// High-frequency function words with no discriminative value for keyword
/// extraction.
pub const DEFAULT_STOP_WORDS: [&str; 37] = [
    "的", "了", "是", "在", "我", "你", "他", "她", "它", "们", "有", "和", "就", "不", "也",
    "这", "那", "都", "而", "但", "又", "所", "如", "到", "去", "说", "要", "可以", "能", "会",
    "很", "啊", "吧", "呢", "吗", "嗯", "哦",
];

/// Minimum token length (in Unicode scalars) kept by the default tokenizer.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Tokenization policy for keyword extraction.
///
/// Splits text on whitespace and a fixed punctuation set, then drops short
/// tokens and stop words. The default configuration matches the app's
/// mixed Chinese/Latin chat content; callers can substitute their own
/// delimiter and stop-word sets without touching the ranking algorithm.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Punctuation characters that split tokens (whitespace always splits)
    pub delimiters: Vec<char>,
    /// Tokens discarded regardless of frequency
    pub stop_words: HashSet<String>,
    /// Tokens shorter than this (in chars) are discarded
    pub min_token_chars: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }
}

impl TokenizerConfig {
    /// Splits `text` into kept tokens, in input order.
    ///
    /// Consecutive delimiters produce no empty tokens; length filtering
    /// counts Unicode scalars, so a single CJK character never survives
    /// under the default minimum.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| c.is_whitespace() || self.delimiters.contains(&c))
            .filter(|token| token.chars().count() >= self.min_token_chars)
            .filter(|token| !self.stop_words.contains(*token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_cjk_and_latin_punctuation() {
        let config = TokenizerConfig::default();
        let tokens = config.tokenize("邻居 噪音，noise! 楼上跑跳。downstairs?");
        assert_eq!(tokens, vec!["邻居", "噪音", "noise", "楼上跑跳", "downstairs"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words() {
        let config = TokenizerConfig::default();
        // "可以" is a two-character stop word, dropped by membership not length
        let tokens = config.tokenize("可以 邻居 很吵");
        assert_eq!(tokens, vec!["邻居", "很吵"]);
    }

    #[test]
    fn test_tokenize_drops_single_char_tokens() {
        let config = TokenizerConfig::default();
        let tokens = config.tokenize("吵 邻居 a 噪音");
        assert_eq!(tokens, vec!["邻居", "噪音"]);
    }

    #[test]
    fn test_tokenize_empty_and_all_stop_words_yield_nothing() {
        let config = TokenizerConfig::default();
        assert!(config.tokenize("").is_empty());
        assert!(config.tokenize("的 了 是 在").is_empty());
    }

    #[test]
    fn test_custom_policy_is_swappable() {
        let config = TokenizerConfig {
            delimiters: vec![';'],
            stop_words: ["noise"].iter().map(|w| w.to_string()).collect(),
            min_token_chars: 3,
        };

        let tokens = config.tokenize("noise;neighbor;ab;楼上跑跳");
        assert_eq!(tokens, vec!["neighbor", "楼上跑跳"]);
    }
}
