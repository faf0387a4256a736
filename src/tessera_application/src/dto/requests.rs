//! Validated request commands, one per user action.
//!
//! Field names follow the JSON wire format (camelCase).

use secrecy::Secret;
use serde_json::Value;
use tessera_core::{
    ColorScheme, Currency, Email, ExportFormat, HexColor, MfaMethod, Password, RequestValidator,
    Theme, Timezone, ValidateRequest, ValidationErrors, VerificationCode,
};

pub struct RegisterUserRequest {
    pub email: Email,
    pub password: Password,
}

impl ValidateRequest for RegisterUserRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let email = v.parse("email", |raw| Email::try_from(raw));
        let raw_password = v.required_string("password");
        let password =
            raw_password.and_then(|raw| v.check("password", raw, |raw| Password::try_from(raw)));
        let confirm_password = v.required_string("confirmPassword");

        if let (Some(password), Some(confirm)) = (raw_password, confirm_password) {
            v.ensure(
                password == confirm,
                "confirmPassword",
                "must match password",
            );
        }

        v.finish(|| {
            Some(Self {
                email: email?,
                password: password?,
            })
        })
    }
}

pub struct LoginRequest {
    pub email: Email,
    pub password: Password,
}

impl ValidateRequest for LoginRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let email = v.parse("email", |raw| Email::try_from(raw));
        let password = v.required_string("password");
        if let Some(password) = password {
            v.ensure(!password.is_empty(), "password", "cannot be empty");
        }

        v.finish(|| {
            Some(Self {
                email: email?,
                password: Password::candidate(Secret::new(password?.to_owned())),
            })
        })
    }
}

pub struct VerifyEmailRequest {
    pub email: Email,
    pub code: VerificationCode,
}

impl ValidateRequest for VerifyEmailRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let email = v.parse("email", |raw| Email::try_from(raw));
        let code = v.parse("code", |raw| VerificationCode::try_from(raw));

        v.finish(|| {
            Some(Self {
                email: email?,
                code: code?,
            })
        })
    }
}

pub struct ResendVerificationRequest {
    pub email: Email,
}

impl ValidateRequest for ResendVerificationRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);
        let email = v.parse("email", |raw| Email::try_from(raw));
        v.finish(|| Some(Self { email: email? }))
    }
}

#[derive(Debug)]
pub struct SetThemeRequest {
    pub theme: Theme,
    pub color_scheme: ColorScheme,
    pub custom_colors: Vec<HexColor>,
}

impl ValidateRequest for SetThemeRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let theme = v.parse("theme", |raw| raw.parse::<Theme>());
        let color_scheme = v.parse("colorScheme", |raw| ColorScheme::try_from(raw));
        let custom_colors = v.optional_list("customColors", |raw| HexColor::try_from(raw));

        v.finish(|| {
            Some(Self {
                theme: theme?,
                color_scheme: color_scheme?,
                custom_colors: custom_colors?,
            })
        })
    }
}

#[derive(Debug)]
pub struct SetHighContrastRequest {
    pub enabled: bool,
    /// Keeps the stored high-contrast theme when absent.
    pub theme: Option<Theme>,
}

impl ValidateRequest for SetHighContrastRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let enabled = v.required_bool("enabled");
        let theme = v.parse_optional("theme", |raw| raw.parse::<Theme>());

        v.finish(|| {
            Some(Self {
                enabled: enabled?,
                theme,
            })
        })
    }
}

#[derive(Debug)]
pub struct SetCurrencyRequest {
    pub currency: Currency,
}

impl ValidateRequest for SetCurrencyRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let currency = v.parse("currency", Currency::from_code);
        let symbol = v.parse_optional("symbol", Currency::parse_symbol);

        v.finish(|| {
            let currency = currency?;
            let currency = match symbol {
                Some(symbol) => currency.with_symbol(&symbol).ok()?,
                None => currency,
            };
            Some(Self { currency })
        })
    }
}

#[derive(Debug)]
pub struct SetTimezoneRequest {
    pub timezone: Timezone,
}

impl ValidateRequest for SetTimezoneRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);
        let timezone = v.parse("timezone", |raw| Timezone::try_from(raw));
        v.finish(|| {
            Some(Self {
                timezone: timezone?,
            })
        })
    }
}

#[derive(Debug)]
pub struct UpdateMfaRequest {
    pub enabled: bool,
    pub method: Option<MfaMethod>,
}

impl ValidateRequest for UpdateMfaRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);

        let enabled = v.required_bool("enabled");
        let raw_method = v.optional_string("method");
        let method =
            raw_method.and_then(|raw| v.check("method", raw, |raw| raw.parse::<MfaMethod>()));

        if enabled == Some(true) && raw_method.is_none() {
            v.reject("method", "is required when enabling MFA");
        }

        v.finish(|| {
            Some(Self {
                enabled: enabled?,
                method,
            })
        })
    }
}

#[derive(Debug)]
pub struct ExportDataRequest {
    pub format: ExportFormat,
}

impl ValidateRequest for ExportDataRequest {
    fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut v = RequestValidator::new(payload);
        let format = v.parse("format", |raw| raw.parse::<ExportFormat>());
        v.finish(|| Some(Self { format: format? }))
    }
}
