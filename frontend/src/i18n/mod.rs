use std::collections::HashMap;

use leptos::*;

/// Translation table of one language, keyed by message id
type Translations = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
}

impl Language {
    /// Map a language code to a supported language, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code.split(['-', '_']).next().unwrap_or_default() {
            "de" => Language::German,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

/// Translations for the user-facing strings of the announcements pages
#[derive(Clone, Copy)]
pub struct I18nContext {
    translations: StoredValue<Translations>,
}

impl I18nContext {
    pub fn new(language: Language) -> Self {
        Self {
            translations: store_value(load_translations(language.code())),
        }
    }

    /// Translate a key, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with_value(|t| t.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }
}

fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

pub fn provide_i18n(code: &str) {
    provide_context(I18nContext::new(Language::from_code(code)));
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
