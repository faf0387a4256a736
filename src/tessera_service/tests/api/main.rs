mod account;
mod auth;
mod helpers;
mod preferences;
mod security;
mod sessions;
