// src/models/inspection_form.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Dados crus do modal "Nova Inspeção".
// Os ids vêm dos comboboxes; data e honorário chegam como texto digitado.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewInspectionForm {
    #[validate(required(message = "Player obrigatório"), range(min = 1, message = "Player obrigatório"))]
    #[schema(example = 12)]
    pub id_contr: Option<i64>,

    #[validate(required(message = "Segurado obrigatório"), range(min = 1, message = "Segurado obrigatório"))]
    #[schema(example = 340)]
    pub id_segur: Option<i64>,

    #[validate(required(message = "Atividade obrigatória"), range(min = 1, message = "Atividade obrigatória"))]
    #[schema(example = 2)]
    pub id_ativi: Option<i64>,

    #[validate(required(message = "Inspetor obrigatório"), range(min = 1, message = "Inspetor obrigatório"))]
    #[schema(example = 7)]
    pub id_user_guy: Option<i64>,

    #[validate(required(message = "UF obrigatória"), range(min = 1, message = "UF obrigatória"))]
    #[schema(example = 25)]
    pub id_uf: Option<i64>,

    #[schema(example = "05/03/2024")]
    pub dt_inspecao: Option<String>,

    #[schema(example = "1.500,00")]
    pub honorario: Option<String>,
}

// Campo ausente = campo válido
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_contr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_segur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_ativi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_user_guy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_uf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_inspecao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honorario: Option<String>,
}

impl InspectionFormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, message)| message.is_none())
    }

    /// Pares (campo, mensagem) com o nome do campo como o front usa.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("idContr", self.id_contr.as_deref()),
            ("idSegur", self.id_segur.as_deref()),
            ("idAtivi", self.id_ativi.as_deref()),
            ("idUserGuy", self.id_user_guy.as_deref()),
            ("idUf", self.id_uf.as_deref()),
            ("dtInspecao", self.dt_inspecao.as_deref()),
            ("honorario", self.honorario.as_deref()),
        ]
        .into_iter()
    }
}
