//! Script detection and language-specific heading patterns.
//!
//! The document's script family is classified from a sample of its earliest
//! lines and drives which numbering patterns and canonical section names the
//! level assigner uses. Six families are recognized: Latin (the `en`
//! default), Japanese, Chinese, Korean, Arabic and Cyrillic.
//!
//! Detection order matters: Japanese is tested before Chinese because its
//! range includes the CJK ideographs, so kana plus ideographs must resolve
//! to `ja`, not `zh`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of built lines sampled for script classification.
pub const SAMPLE_LINE_COUNT: usize = 20;

/// Recognized script family of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Latin script (and the default when no other family matches).
    En,
    /// Japanese (kana plus CJK ideographs).
    Ja,
    /// Chinese (CJK ideographs).
    Zh,
    /// Korean (Hangul syllables).
    Ko,
    /// Arabic.
    Ar,
    /// Cyrillic.
    Ru,
}

impl Language {
    /// The language tag carried in outline results (`en`, `ja`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ko => "ko",
            Language::Ar => "ar",
            Language::Ru => "ru",
        }
    }
}

fn is_japanese(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

fn is_chinese(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

fn is_korean(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}')
}

fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

/// True for characters that count as "real" content: ASCII alphanumerics or
/// any of the six recognized script ranges. A title without a single such
/// character is considered empty.
pub fn is_recognized_script_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || is_japanese(c)
        || is_chinese(c)
        || is_korean(c)
        || is_arabic(c)
        || is_cyrillic(c)
}

/// Classify a text sample into a script family.
///
/// Fixed priority order (Japanese, Chinese, Korean, Arabic, Cyrillic): the
/// first family with any member character in the sample wins; a sample with
/// none of them is `en`.
pub fn detect_language(sample: &str) -> Language {
    let language = if sample.chars().any(is_japanese) {
        Language::Ja
    } else if sample.chars().any(is_chinese) {
        Language::Zh
    } else if sample.chars().any(is_korean) {
        Language::Ko
    } else if sample.chars().any(is_arabic) {
        Language::Ar
    } else if sample.chars().any(is_cyrillic) {
        Language::Ru
    } else {
        Language::En
    };
    log::debug!("detected language: {}", language.tag());
    language
}

/// Numbering patterns and canonical section names for one language.
///
/// Three-level decimal numbering (`1.`, `1.2`, `1.2.3`) followed by a
/// script-appropriate letter, plus the fixed list of section titles always
/// treated as H1 headings (Introduction, References, Appendix, ...).
/// Compiled once at process start; immutable configuration thereafter.
pub struct HeadingPatterns {
    h1: Regex,
    h2: Regex,
    h3: Regex,
    known_sections: Regex,
}

impl HeadingPatterns {
    /// Build the pattern triple for a script letter class.
    ///
    /// Latin numbering requires whitespace between the number and an
    /// uppercase letter (`1. Introduction`); CJK and RTL scripts commonly
    /// set the heading text flush against the numbering, so the gap is
    /// optional there.
    fn new(letter_class: &str, space_required: bool, known_sections: &str) -> Self {
        let gap = if space_required { r"\s+" } else { r"\s*" };
        Self {
            h1: Regex::new(&format!(r"^[0-9]+\.{gap}{letter_class}")).unwrap(),
            h2: Regex::new(&format!(r"^[0-9]+\.[0-9]+{gap}{letter_class}")).unwrap(),
            h3: Regex::new(&format!(r"^[0-9]+\.[0-9]+\.[0-9]+{gap}{letter_class}")).unwrap(),
            known_sections: Regex::new(known_sections).unwrap(),
        }
    }

    /// The pattern table for a detected language.
    pub fn for_language(language: Language) -> &'static HeadingPatterns {
        match language {
            Language::En => &EN_PATTERNS,
            Language::Ja => &JA_PATTERNS,
            Language::Zh => &ZH_PATTERNS,
            Language::Ko => &KO_PATTERNS,
            Language::Ar => &AR_PATTERNS,
            Language::Ru => &RU_PATTERNS,
        }
    }

    /// Single-level numbering (`1. Heading`).
    pub fn matches_h1(&self, text: &str) -> bool {
        self.h1.is_match(text)
    }

    /// Two-level numbering (`1.2 Heading`).
    pub fn matches_h2(&self, text: &str) -> bool {
        self.h2.is_match(text)
    }

    /// Three-level numbering (`1.2.3 Heading`).
    pub fn matches_h3(&self, text: &str) -> bool {
        self.h3.is_match(text)
    }

    /// Case-insensitive exact match against this language's canonical
    /// section names.
    pub fn is_known_section(&self, text: &str) -> bool {
        self.known_sections.is_match(text.trim())
    }
}

lazy_static! {
    static ref EN_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[A-Z]",
        true,
        r"(?i)^(Acknowledgements|Revision History|Table of Contents|References|Abstract|Introduction|Conclusion|Bibliography|Appendix|Business Outcomes)$",
    );
    static ref JA_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]",
        false,
        r"(?i)^(謝辞|改訂履歴|目次|参考文献|要約|序論|結論|付録|ビジネス成果)$",
    );
    static ref ZH_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[\x{4E00}-\x{9FFF}]",
        false,
        r"(?i)^(致谢|修订历史|目录|参考文献|摘要|引言|结论|附录|业务成果)$",
    );
    static ref KO_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[\x{AC00}-\x{D7AF}]",
        false,
        r"(?i)^(감사의 글|개정 이력|목차|참고 문헌|초록|서론|결론|부록|비즈니스 성과)$",
    );
    static ref AR_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[\x{0600}-\x{06FF}]",
        false,
        r"(?i)^(شكر|تاريخ المراجعة|جدول المحتويات|المراجع|ملخص|مقدمة|خاتمة|قائمة المراجع|ملحق|النتائج التجارية)$",
    );
    static ref RU_PATTERNS: HeadingPatterns = HeadingPatterns::new(
        r"[\x{0400}-\x{04FF}]",
        false,
        r"(?i)^(Благодарности|История изменений|Содержание|Ссылки|Аннотация|Введение|Заключение|Библиография|Приложение|Бизнес-результаты)$",
    );
}
