//! Label codec: translation between the localized labels a patient sees and
//! the canonical codes the booking backend stores.
//!
//! Every function here is pure and total. An unrecognized label never fails
//! the flow; it degrades to a documented default instead (language → `vi`,
//! time slot → `anytime`, department → `unknown`).

use crate::i18n::Locale;
use crate::models::{DepartmentCode, LanguageCode, SlotCode};

// Every locale's names for the three interpretation languages, lowercase.
const KOREAN_NAMES: [&str; 3] = ["한국어", "korean", "tiếng hàn"];
const ENGLISH_NAMES: [&str; 3] = ["영어", "english", "tiếng anh"];
const VIETNAMESE_NAMES: [&str; 3] = ["베트남어", "vietnamese", "tiếng việt"];

/// Interpretation-language label → backend code, matched by substring across
/// all locales' names. Unmatched input falls back to Vietnamese; the shipped
/// flow has always defaulted this way and the consultants rely on it.
pub fn language_label_to_code(label: &str) -> LanguageCode {
    let s = label.to_lowercase();
    if KOREAN_NAMES.iter().any(|name| s.contains(name)) {
        return LanguageCode::Ko;
    }
    if ENGLISH_NAMES.iter().any(|name| s.contains(name)) {
        return LanguageCode::En;
    }
    if VIETNAMESE_NAMES.iter().any(|name| s.contains(name)) {
        return LanguageCode::Vi;
    }
    LanguageCode::Vi
}

/// Backend language code → the current locale's display label.
pub fn language_code_to_label(code: LanguageCode, locale: Locale) -> &'static str {
    let languages = &locale.messages().languages;
    match code {
        LanguageCode::Ko => languages[0],
        LanguageCode::En => languages[1],
        LanguageCode::Vi => languages[2],
    }
}

/// Department label → backend code via the locale's keyed label table.
/// Unmatched labels map to `unknown`.
pub fn department_label_to_code(label: &str, locale: Locale) -> DepartmentCode {
    locale
        .messages()
        .departments
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
        .unwrap_or(DepartmentCode::Unknown)
}

/// Backend department code → the current locale's display label. Falls back
/// to the wire name of the code; cannot happen for the compiled-in tables,
/// which carry an entry for every code.
pub fn department_code_to_label(code: DepartmentCode, locale: Locale) -> &'static str {
    locale
        .messages()
        .departments
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or_else(|| code.as_str())
}

/// Time-of-day label → slot code, matched by locale-specific keywords.
/// Anything unrecognized means no preference.
pub fn time_label_to_slot(label: &str) -> SlotCode {
    let s = label.to_lowercase();
    // ko
    if s.contains("오전") {
        return SlotCode::Morning;
    }
    if s.contains("오후") {
        return SlotCode::Afternoon;
    }
    if s.contains("상관없음") {
        return SlotCode::Anytime;
    }
    // en
    if s.contains("morning") {
        return SlotCode::Morning;
    }
    if s.contains("afternoon") {
        return SlotCode::Afternoon;
    }
    if s.contains("any time") || s.contains("anytime") {
        return SlotCode::Anytime;
    }
    // vi
    if s.contains("sáng") {
        return SlotCode::Morning;
    }
    if s.contains("chiều") {
        return SlotCode::Afternoon;
    }
    if s.contains("bất kỳ") {
        return SlotCode::Anytime;
    }
    SlotCode::Anytime
}

/// Slot code → the current locale's display label.
pub fn slot_to_label(slot: SlotCode, locale: Locale) -> &'static str {
    let times = &locale.messages().times;
    match slot {
        SlotCode::Morning => times[0],
        SlotCode::Afternoon => times[1],
        SlotCode::Anytime => times[2],
    }
}
