use chrono::{DateTime, Utc};

use super::{
    currency::Currency,
    mfa::MfaSettings,
    theme::{ColorScheme, HexColor, Theme},
    timezone::Timezone,
    user_id::UserId,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    pub theme: Theme,
    pub color_scheme: ColorScheme,
    pub custom_colors: Vec<HexColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighContrastSettings {
    pub enabled: bool,
    pub theme: Theme,
}

/// Everything a user can personalise, stored as one record per account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    user_id: UserId,
    pub theme: ThemeSettings,
    pub high_contrast: HighContrastSettings,
    pub currency: Currency,
    pub timezone: Timezone,
    pub mfa: MfaSettings,
    updated_at: DateTime<Utc>,
}

impl Preferences {
    /// Preferences assigned to a freshly registered account.
    pub fn with_defaults(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            theme: ThemeSettings::default(),
            high_contrast: HighContrastSettings::default(),
            currency: Currency::default(),
            timezone: Timezone::default(),
            mfa: MfaSettings::default(),
            updated_at: now,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records that the preferences were modified at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
