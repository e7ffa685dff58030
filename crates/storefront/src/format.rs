//! Locale-aware price rendering for the presentation layer.
//!
//! Prices are whole currency units, rendered with two decimal places. Only the
//! separators and symbol placement vary by locale; there is no currency conversion.

use luxor_core::Price;

use crate::config::StoreConfig;

struct Separators {
    group: char,
    decimal: char,
}

fn separators(locale: &str) -> Separators {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "pt" | "de" | "es" | "it" | "nl" | "id" | "tr" => Separators {
            group: '.',
            decimal: ',',
        },
        "fr" | "sv" | "nb" | "fi" | "pl" | "cs" | "ru" => Separators {
            group: ' ',
            decimal: ',',
        },
        _ => Separators {
            group: ',',
            decimal: '.',
        },
    }
}

fn symbol(currency_code: &str) -> &str {
    match currency_code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        other => other,
    }
}

fn group_digits(amount: u64, group: char) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
    out
}

/// Render `price` for display, e.g. `R$ 129.900,00` for `pt-BR`/`BRL`.
pub fn format_price(price: Price, config: &StoreConfig) -> String {
    let seps = separators(&config.locale);
    let number = format!(
        "{}{}00",
        group_digits(price.amount(), seps.group),
        seps.decimal
    );
    let symbol = symbol(&config.currency_code);
    let english = config.locale.to_ascii_lowercase().starts_with("en");
    let tight = english && !symbol.chars().all(|c| c.is_ascii_alphabetic());
    if tight {
        format!("{symbol}{number}")
    } else {
        format!("{symbol} {number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(locale: &str, currency: &str) -> StoreConfig {
        StoreConfig {
            locale: locale.to_string(),
            currency_code: currency.to_string(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn brazilian_real() {
        let cfg = config("pt-BR", "BRL");
        assert_eq!(format_price(Price::new(129_900), &cfg), "R$ 129.900,00");
        assert_eq!(format_price(Price::new(4_499), &cfg), "R$ 4.499,00");
        assert_eq!(format_price(Price::new(0), &cfg), "R$ 0,00");
    }

    #[test]
    fn us_dollar() {
        let cfg = config("en-US", "USD");
        assert_eq!(format_price(Price::new(1_234_567), &cfg), "$1,234,567.00");
        assert_eq!(format_price(Price::new(999), &cfg), "$999.00");
    }

    #[test]
    fn unknown_currency_uses_code() {
        let cfg = config("en-GB", "CHF");
        assert_eq!(format_price(Price::new(38_900), &cfg), "CHF 38,900.00");
        let cfg = config("fr-FR", "EUR");
        assert_eq!(format_price(Price::new(38_900), &cfg), "€ 38 900,00");
    }
}
