use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::inspection_form::InspectionFormErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Formulário com campos inválidos")]
    InvalidForm(InspectionFormErrors),

    // JSON malformado ou com tipos errados
    #[error("Payload inválido: {0}")]
    InvalidPayload(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Devolve campo -> mensagem, do jeito que o formulário exibe
            AppError::InvalidForm(errors) => {
                let details: serde_json::Map<String, serde_json::Value> = errors
                    .fields()
                    .filter_map(|(field, message)| message.map(|m| (field.to_string(), json!(m))))
                    .collect();
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }

            AppError::InvalidPayload(rejection) => {
                tracing::warn!("Payload recusado: {}", rejection.body_text());
                let body = Json(json!({
                    "error": "Corpo da requisição inválido.",
                    "details": rejection.body_text(),
                }));
                (rejection.status(), body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn form_errors_become_unprocessable_with_details() {
        let errors = InspectionFormErrors {
            id_uf: Some("UF obrigatória".into()),
            ..Default::default()
        };

        let response = AppError::InvalidForm(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["details"], json!({ "idUf": "UF obrigatória" }));
    }
}
