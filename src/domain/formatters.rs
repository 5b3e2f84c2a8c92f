// src/domain/formatters.rs

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::dates::{is_filled, parse_full_date};

/// O que aparece no lugar de um valor ausente.
pub const PLACEHOLDER: &str = "-";

// =============================================================================
//  CONFIGURAÇÃO DE FORMATO
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocaleTag {
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl LocaleTag {
    /// Aceita tags completas ("pt-BR") ou só o idioma ("pt", "en").
    pub fn from_language(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next().unwrap_or(tag);
        match lang.to_ascii_lowercase().as_str() {
            "pt" => Some(LocaleTag::PtBr),
            "en" => Some(LocaleTag::EnUs),
            _ => None,
        }
    }

    pub fn thousands_separator(self) -> char {
        match self {
            LocaleTag::PtBr => '.',
            LocaleTag::EnUs => ',',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            LocaleTag::PtBr => ',',
            LocaleTag::EnUs => '.',
        }
    }

    fn symbol_gap(self) -> &'static str {
        match self {
            LocaleTag::PtBr => " ",
            LocaleTag::EnUs => "",
        }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleTag::PtBr => write!(f, "pt-BR"),
            LocaleTag::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for LocaleTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleTag::from_language(s.trim()).ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Brl,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(s.to_string()),
        }
    }
}

/// Convenções de moeda, separadores e casas decimais.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub locale: LocaleTag,
    pub currency: Currency,
    pub decimal_places: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: LocaleTag::PtBr,
            currency: Currency::Brl,
            decimal_places: 0,
        }
    }
}

impl FormatConfig {
    pub fn with_locale(self, locale: LocaleTag) -> Self {
        Self { locale, ..self }
    }
}

// =============================================================================
//  MOEDA
// =============================================================================

/// "R$ 1.234" (pt-BR) / "$1,234" (en-US), com `cfg.decimal_places` casas.
pub fn format_currency(value: Option<Decimal>, cfg: &FormatConfig) -> String {
    match value {
        Some(v) => with_symbol(v, &group_digits(v.abs(), cfg.decimal_places, cfg.locale), cfg),
        None => PLACEHOLDER.to_string(),
    }
}

/// Versão curta para cards: "R$ 1,2M", "R$ 500K".
pub fn format_currency_compact(value: Option<Decimal>, cfg: &FormatConfig) -> String {
    let Some(v) = value else {
        return PLACEHOLDER.to_string();
    };

    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);
    let abs = v.abs();

    if abs >= million {
        let body = format!("{}M", plain_digits(abs / million, 1, cfg.locale));
        with_symbol(v, &body, cfg)
    } else if abs >= thousand {
        let body = format!("{}K", plain_digits(abs / thousand, 0, cfg.locale));
        with_symbol(v, &body, cfg)
    } else {
        format_currency(Some(v), cfg)
    }
}

fn with_symbol(value: Decimal, body: &str, cfg: &FormatConfig) -> String {
    let sign = if value.is_sign_negative() && !round(value, cfg.decimal_places).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}{}", sign, cfg.currency.symbol(), cfg.locale.symbol_gap(), body)
}

// =============================================================================
//  NÚMEROS
// =============================================================================

pub fn format_number(value: Option<Decimal>, decimals: u32, cfg: &FormatConfig) -> String {
    match value {
        Some(v) => {
            let body = group_digits(v.abs(), decimals, cfg.locale);
            if v.is_sign_negative() && !round(v, decimals).is_zero() {
                format!("-{}", body)
            } else {
                body
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Recebe uma razão (0.8) e mostra "80,00%".
pub fn format_percent(ratio: Option<Decimal>, decimals: u32, cfg: &FormatConfig) -> String {
    // Razão grande demais para virar porcentagem cai no placeholder
    match ratio.and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED)) {
        Some(pct) => {
            let body = plain_digits(pct.abs(), decimals, cfg.locale);
            let sign = if pct.is_sign_negative() && !round(pct, decimals).is_zero() {
                "-"
            } else {
                ""
            };
            format!("{}{}%", sign, body)
        }
        None => PLACEHOLDER.to_string(),
    }
}

fn round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Dígitos sem separador de milhar, com o separador decimal do locale.
fn plain_digits(value: Decimal, decimals: u32, locale: LocaleTag) -> String {
    let text = format!("{:.*}", decimals as usize, round(value, decimals));
    text.replace('.', &locale.decimal_separator().to_string())
}

/// Valor já positivo -> "1.234.567,89".
fn group_digits(value: Decimal, decimals: u32, locale: LocaleTag) -> String {
    let text = format!("{:.*}", decimals as usize, round(value, decimals));
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.thousands_separator());
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}{}", grouped, locale.decimal_separator(), f),
        None => grouped,
    }
}

// =============================================================================
//  DATAS
// =============================================================================

/// "2024-03-01" -> "01/03/24".
pub fn format_date_short(value: Option<&str>) -> String {
    format_date(value, "%d/%m/%y")
}

/// "2024-03-01" -> "01/03/2024".
pub fn format_date_full(value: Option<&str>) -> String {
    format_date(value, "%d/%m/%Y")
}

// Texto que não dá para ler volta como veio.
fn format_date(value: Option<&str>, pattern: &str) -> String {
    let Some(raw) = value.filter(|v| is_filled(Some(*v))) else {
        return PLACEHOLDER.to_string();
    };

    match parse_full_date(raw) {
        Some(date) => date.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

// =============================================================================
//  LABELS
// =============================================================================

pub fn format_meta(meta: Option<i32>) -> String {
    match meta {
        Some(1) => "Sim".to_string(),
        Some(0) => "Não".to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_loc(loc: Option<i32>) -> String {
    match loc {
        Some(n) => format!("{:02}", n),
        None => PLACEHOLDER.to_string(),
    }
}
