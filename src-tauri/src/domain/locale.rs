/// Languages the panel is localized into. Anything unrecognised falls back to
/// Portuguese, the panel's native language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLocale {
    #[default]
    Pt,
    En,
    Es,
}

impl UiLocale {
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "en" => UiLocale::En,
            "es" => UiLocale::Es,
            _ => UiLocale::Pt,
        }
    }

    pub fn missing_api_key(&self) -> &'static str {
        match self {
            UiLocale::Pt => "Por favor, configure sua chave de API nas configurações.",
            UiLocale::En => "Please configure your API key in the settings.",
            UiLocale::Es => "Por favor, configure su clave de API en la configuración.",
        }
    }

    pub fn invalid_api_key(&self) -> &'static str {
        match self {
            UiLocale::Pt => "Erro: Chave de API inválida ou mal formatada.",
            UiLocale::En => "Error: Invalid or malformed API key.",
            UiLocale::Es => "Error: Clave de API inválida o mal formateada.",
        }
    }

    pub fn request_failed(&self) -> &'static str {
        match self {
            UiLocale::Pt => "Ocorreu um erro ao processar sua solicitação.",
            UiLocale::En => "An error occurred while processing your request.",
            UiLocale::Es => "Ocurrió un error al procesar su solicitud.",
        }
    }

    pub fn tray_toggle(&self) -> &'static str {
        match self {
            UiLocale::Pt => "Abrir/Fechar",
            UiLocale::En => "Open/Close",
            UiLocale::Es => "Abrir/Cerrar",
        }
    }

    pub fn tray_quit(&self) -> &'static str {
        match self {
            UiLocale::Pt => "Sair",
            UiLocale::En => "Quit",
            UiLocale::Es => "Salir",
        }
    }
}

/// English name of a language code, used when instructing the model.
/// Unknown codes are passed through unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "pt" => "Portuguese",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "nl" => "Dutch",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "ar" => "Arabic",
        "hi" => "Hindi",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_fallback_is_portuguese() {
        assert_eq!(UiLocale::from_code(""), UiLocale::Pt);
        assert_eq!(UiLocale::from_code("fr"), UiLocale::Pt);
    }

    #[test]
    fn test_locale_accepts_regional_tags() {
        assert_eq!(UiLocale::from_code("en-US"), UiLocale::En);
        assert_eq!(UiLocale::from_code("ES_mx"), UiLocale::Es);
    }

    #[test]
    fn test_messages_are_distinct() {
        for locale in [UiLocale::Pt, UiLocale::En, UiLocale::Es] {
            assert_ne!(locale.missing_api_key(), locale.invalid_api_key());
            assert_ne!(locale.invalid_api_key(), locale.request_failed());
        }
    }

    #[test]
    fn test_language_name_passthrough() {
        assert_eq!(language_name("es"), "Spanish");
        assert_eq!(language_name("sv"), "sv");
    }
}
