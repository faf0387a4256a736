use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use super::UnknownVariant;

pub const BACKUP_CODE_COUNT: usize = 10;
pub const BACKUP_CODE_VALIDITY_DAYS: i64 = 365;

const BACKUP_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const BACKUP_CODE_GROUP_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MfaMethod {
    Totp,
    Email,
    Sms,
}

impl MfaMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaMethod::Totp => "totp",
            MfaMethod::Email => "email",
            MfaMethod::Sms => "sms",
        }
    }
}

impl FromStr for MfaMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "totp" => Ok(MfaMethod::Totp),
            "email" => Ok(MfaMethod::Email),
            "sms" => Ok(MfaMethod::Sms),
            _ => Err(UnknownVariant {
                expected: "totp, email, sms",
            }),
        }
    }
}

/// One-time recovery codes issued while MFA is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupCodeSet {
    codes: Vec<String>,
    generated_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    used_count: usize,
}

impl BackupCodeSet {
    pub fn generate(now: DateTime<Utc>) -> Self {
        let mut rng = rand::rng();
        let codes = (0..BACKUP_CODE_COUNT)
            .map(|_| {
                let mut group = || -> String {
                    (0..BACKUP_CODE_GROUP_LENGTH)
                        .map(|_| {
                            let index = rng.random_range(0..BACKUP_CODE_ALPHABET.len());
                            char::from(BACKUP_CODE_ALPHABET[index])
                        })
                        .collect()
                };
                let first = group();
                let second = group();
                format!("{first}-{second}")
            })
            .collect();

        Self {
            codes,
            generated_at: now,
            expires_at: now + Duration::days(BACKUP_CODE_VALIDITY_DAYS),
            used_count: 0,
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn used_count(&self) -> usize {
        self.used_count
    }

    pub fn total_count(&self) -> usize {
        self.codes.len()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Codes still usable at `now`.
    pub fn remaining(&self, now: DateTime<Utc>) -> usize {
        if self.is_expired(now) {
            0
        } else {
            self.total_count().saturating_sub(self.used_count)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MfaSettings {
    pub enabled: bool,
    pub method: Option<MfaMethod>,
    pub backup_codes: Option<BackupCodeSet>,
}

impl MfaSettings {
    pub fn backup_codes_remaining(&self, now: DateTime<Utc>) -> usize {
        self.backup_codes
            .as_ref()
            .map_or(0, |codes| codes.remaining(now))
    }
}
