mod export_data;
mod generate_backup_codes;
mod get_preferences;
mod login;
mod logout;
mod logout_all_devices;
mod register_user;
mod set_currency;
mod set_high_contrast;
mod set_theme;
mod set_timezone;
mod update_mfa;
mod update_preferences;
mod verify_email;
mod view_active_sessions;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use export_data::{ExportDataError, ExportDataUseCase};
pub use generate_backup_codes::{GenerateBackupCodesError, GenerateBackupCodesUseCase};
pub use get_preferences::GetPreferencesUseCase;
pub use login::{LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use logout_all_devices::{LogoutAllDevicesError, LogoutAllDevicesUseCase};
pub use register_user::{RegisterUserError, RegisterUserUseCase};
pub use set_currency::SetCurrencyUseCase;
pub use set_high_contrast::SetHighContrastUseCase;
pub use set_theme::SetThemeUseCase;
pub use set_timezone::SetTimezoneUseCase;
pub use update_mfa::UpdateMfaUseCase;
pub use update_preferences::PreferencesError;
pub use verify_email::{
    ResendVerificationError, ResendVerificationUseCase, VerifyEmailError, VerifyEmailUseCase,
};
pub use view_active_sessions::{ViewActiveSessionsError, ViewActiveSessionsUseCase};
