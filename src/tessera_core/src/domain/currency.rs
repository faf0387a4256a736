use thiserror::Error;

const SYMBOL_MAX_LENGTH: usize = 5;

/// ISO 4217 codes the service can display, with their default symbol.
const SUPPORTED_CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "NZ$"),
    ("PLN", "zł"),
    ("SEK", "kr"),
    ("SGD", "S$"),
    ("TRY", "₺"),
    ("USD", "$"),
    ("ZAR", "R"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("Currency must be a three-letter upper-case ISO 4217 code")]
    InvalidCode,
    #[error("Currency {0} is not supported")]
    Unsupported(String),
    #[error("Currency symbol must be between 1 and {} characters", SYMBOL_MAX_LENGTH)]
    InvalidSymbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    code: String,
    symbol: String,
}

impl Currency {
    /// Looks up a supported currency and its default symbol.
    pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CurrencyError::InvalidCode);
        }

        SUPPORTED_CURRENCIES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(code, symbol)| Self {
                code: (*code).to_owned(),
                symbol: (*symbol).to_owned(),
            })
            .ok_or_else(|| CurrencyError::Unsupported(code.to_owned()))
    }

    /// Checks a user-chosen display symbol.
    pub fn parse_symbol(symbol: &str) -> Result<String, CurrencyError> {
        if symbol.trim().is_empty() || symbol.chars().count() > SYMBOL_MAX_LENGTH {
            return Err(CurrencyError::InvalidSymbol);
        }
        Ok(symbol.to_owned())
    }

    /// Replaces the default symbol with a user-chosen one.
    pub fn with_symbol(self, symbol: &str) -> Result<Self, CurrencyError> {
        Ok(Self {
            symbol: Self::parse_symbol(symbol)?,
            ..self
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "USD".to_owned(),
            symbol: "$".to_owned(),
        }
    }
}
