// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::domain::formatters::{FormatConfig, LocaleTag};

// Idioma pedido pelo cliente via Accept-Language.
// None quando o header falta ou nenhum idioma é suportado.
pub struct Locale(pub Option<LocaleTag>);

impl Locale {
    /// Formato final: o locale do cliente por cima da configuração do servidor.
    pub fn resolve(&self, base: FormatConfig) -> FormatConfig {
        match self.0 {
            Some(tag) => base.with_locale(tag),
            None => base,
        }
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let tag = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                // Já vem ordenado por q; fica o primeiro que a gente sabe formatar
                accept_language::parse(header_str)
                    .iter()
                    .find_map(|tag| LocaleTag::from_language(tag))
            });

        Ok(Locale(tag))
    }
}
