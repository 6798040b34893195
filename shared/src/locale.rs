use serde::{Deserialize, Serialize};

/// Interface languages offered during onboarding and in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Telugu,
    Marathi,
    Tamil,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Odia,
    Assamese,
}

impl Language {
    pub const ALL: [Self; 12] = [
        Self::English,
        Self::Hindi,
        Self::Bengali,
        Self::Telugu,
        Self::Marathi,
        Self::Tamil,
        Self::Gujarati,
        Self::Kannada,
        Self::Malayalam,
        Self::Punjabi,
        Self::Odia,
        Self::Assamese,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Bengali => "bengali",
            Self::Telugu => "telugu",
            Self::Marathi => "marathi",
            Self::Tamil => "tamil",
            Self::Gujarati => "gujarati",
            Self::Kannada => "kannada",
            Self::Malayalam => "malayalam",
            Self::Punjabi => "punjabi",
            Self::Odia => "odia",
            Self::Assamese => "assamese",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Telugu => "Telugu",
            Self::Marathi => "Marathi",
            Self::Tamil => "Tamil",
            Self::Gujarati => "Gujarati",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Punjabi => "Punjabi",
            Self::Odia => "Odia",
            Self::Assamese => "Assamese",
        }
    }

    /// Name in the language's own script.
    #[must_use]
    pub const fn native(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
            Self::Bengali => "বাংলা",
            Self::Telugu => "తెలుగు",
            Self::Marathi => "मराठी",
            Self::Tamil => "தமிழ்",
            Self::Gujarati => "ગુજરાતી",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Malayalam => "മലയാളം",
            Self::Punjabi => "ਪੰਜਾਬੀ",
            Self::Odia => "ଓଡ଼ିଆ",
            Self::Assamese => "অসমীয়া",
        }
    }

    /// `"Hindi (हिन्दी)"`, as shown in the pickers.
    #[must_use]
    pub fn display_name(self) -> String {
        format!("{} ({})", self.name(), self.native())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub language: Language,
    pub code: String,
    pub display_name: String,
}

#[must_use]
pub fn language_options() -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|language| LanguageOption {
            language,
            code: language.code().to_owned(),
            display_name: language.display_name(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_codes_match_serde_names() {
        for language in Language::ALL {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.code()));
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Language::Tamil.display_name(), "Tamil (தமிழ்)");
        assert_eq!(language_options().len(), 12);
    }
}
