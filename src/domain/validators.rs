// src/domain/validators.rs

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::{Validate, ValidateEmail};

use crate::domain::dates::parse_date;
use crate::models::inspection_form::{InspectionFormErrors, NewInspectionForm};

pub const PASSWORD_MIN_LEN: usize = 8;

// =============================================================================
//  EMAIL
// =============================================================================

/// `local@dominio.tld`, sem espaços.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }

    // O validator aceita "user@localhost"; aqui o domínio precisa de um ponto
    match email.rsplit_once('@') {
        Some((_, domain)) => domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty()),
        None => false,
    }
}

// =============================================================================
//  SENHA
// =============================================================================

pub fn is_valid_password(password: &str) -> bool {
    password_error(password).is_none()
}

/// Primeira regra violada, na ordem em que o formulário mostra.
pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Senha obrigatória");
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Some("Mínimo 8 caracteres");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some("Deve conter letras");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Deve conter números");
    }
    None
}

// =============================================================================
//  VALORES MONETÁRIOS
// =============================================================================

/// Lê valores no padrão brasileiro: `1234`, `1.234`, `1.234,56`, `R$ 1.234,56`.
/// Centavos, se vierem, são exatamente duas casas. Sem sinal.
pub fn parse_money_value(value: &str) -> Option<Decimal> {
    let s = value.trim();
    let s = s.strip_prefix("R$").map(str::trim_start).unwrap_or(s);

    let (int_part, cents) = match s.split_once(',') {
        Some((i, c)) => (i, Some(c)),
        None => (s, None),
    };

    if !valid_integer_part(int_part) {
        return None;
    }
    if let Some(c) = cents {
        if c.len() != 2 || !all_digits(c) {
            return None;
        }
    }

    let digits: String = int_part.chars().filter(|c| *c != '.').collect();
    let normalized = match cents {
        Some(c) => format!("{}.{}", digits, c),
        None => digits,
    };
    Decimal::from_str(&normalized).ok()
}

pub fn is_valid_money_value(value: &str) -> bool {
    parse_money_value(value).is_some()
}

// "1234" ou "1.234.567": primeiro grupo com 1 a 3 dígitos, os demais com 3
fn valid_integer_part(part: &str) -> bool {
    if part.is_empty() {
        return false;
    }
    if !part.contains('.') {
        return all_digits(part);
    }

    let mut groups = part.split('.');
    let first_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && all_digits(g));
    first_ok && groups.all(|g| g.len() == 3 && all_digits(g))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Limites inclusivos.
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

// =============================================================================
//  DATAS
// =============================================================================

/// `DD/MM` ou `DD/MM/YYYY`, e a data precisa existir no calendário.
pub fn is_valid_date_format(value: &str) -> bool {
    let parts: Vec<&str> = value.split('/').collect();
    let shape_ok = match parts.as_slice() {
        [d, m] => d.len() == 2 && m.len() == 2 && all_digits(d) && all_digits(m),
        [d, m, y] => {
            d.len() == 2
                && m.len() == 2
                && y.len() == 4
                && all_digits(d)
                && all_digits(m)
                && all_digits(y)
        }
        _ => false,
    };
    if !shape_ok {
        return false;
    }

    let day: u32 = parts[0].parse().unwrap_or(0);
    let month: u32 = parts[1].parse().unwrap_or(0);
    // Sem ano, 29/02 vale
    let year: i32 = parts.get(2).and_then(|y| y.parse().ok()).unwrap_or(2000);
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

pub fn is_not_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

// =============================================================================
//  FORMULÁRIO DE INSPEÇÃO
// =============================================================================

pub fn validate_new_inspection_form(
    form: &NewInspectionForm,
    today: NaiveDate,
) -> InspectionFormErrors {
    let mut errors = InspectionFormErrors::default();

    if let Err(validation) = form.validate() {
        for (field, field_errors) in validation.field_errors() {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string());

            match field.to_string().as_str() {
                "id_contr" => errors.id_contr = message,
                "id_segur" => errors.id_segur = message,
                "id_ativi" => errors.id_ativi = message,
                "id_user_guy" => errors.id_user_guy = message,
                "id_uf" => errors.id_uf = message,
                other => tracing::warn!("Campo de validação desconhecido: {}", other),
            }
        }
    }

    if let Some(raw) = form.dt_inspecao.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        errors.dt_inspecao = inspection_date_error(raw, today).map(str::to_string);
    }

    if let Some(raw) = form.honorario.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        errors.honorario = honorario_error(raw).map(str::to_string);
    }

    errors
}

fn inspection_date_error(raw: &str, today: NaiveDate) -> Option<&'static str> {
    if !is_valid_date_format(raw) {
        return Some("Data inválida");
    }
    match parse_date(raw, today) {
        Some(date) if is_not_future_date(date, today) => None,
        Some(_) => Some("Data não pode estar no futuro"),
        None => Some("Data inválida"),
    }
}

fn honorario_error(raw: &str) -> Option<&'static str> {
    if is_valid_money_value(raw) {
        return None;
    }
    match raw.strip_prefix('-') {
        Some(rest) if is_valid_money_value(rest) => Some("Honorário não pode ser negativo"),
        _ => Some("Valor inválido"),
    }
}

pub fn has_form_errors(errors: &InspectionFormErrors) -> bool {
    !errors.is_empty()
}
