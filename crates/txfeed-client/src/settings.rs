use crate::ClientResult;
use crate::feed::time::{TimeDisplay, TimeLocale, TimeZoneSetting};

pub const LOCALE_ENV: &str = "TXFEED_LOCALE";
pub const TIMEZONE_ENV: &str = "TXFEED_TZ";
const POSIX_LOCALE_ENVS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedSettings {
    pub time: TimeDisplay,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub locale: Option<String>,
    pub timezone: Option<String>,
}

pub fn resolve(overrides: &SettingsOverrides) -> ClientResult<FeedSettings> {
    resolve_with_env(overrides, |name| std::env::var(name).ok())
}

/// Flag, then `TXFEED_*`, then POSIX locale variables, then `en-US` in the
/// local timezone.
///
/// Explicit values that fail to parse are errors. POSIX locale variables are
/// best effort: an unsupported system locale falls through to the default.
#[doc(hidden)]
pub fn resolve_with_env<F>(overrides: &SettingsOverrides, env: F) -> ClientResult<FeedSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_locale = overrides
        .locale
        .clone()
        .or_else(|| non_empty(env(LOCALE_ENV)));
    let locale = match explicit_locale {
        Some(value) => TimeLocale::parse(&value)?,
        None => system_locale(&env).unwrap_or_default(),
    };

    let zone = match overrides
        .timezone
        .clone()
        .or_else(|| non_empty(env(TIMEZONE_ENV)))
    {
        Some(value) => TimeZoneSetting::parse(&value)?,
        None => TimeZoneSetting::Local,
    };

    Ok(FeedSettings {
        time: TimeDisplay::new(locale, zone),
    })
}

fn system_locale<F>(env: &F) -> Option<TimeLocale>
where
    F: Fn(&str) -> Option<String>,
{
    let value = POSIX_LOCALE_ENVS
        .iter()
        .find_map(|name| non_empty(env(name)))?;
    TimeLocale::parse(&value).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
