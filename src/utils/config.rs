/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads an environment variable, falling back to `default` when it is unset or unparsable
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value returned when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` if it is unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
}

/// Reads a boolean flag from the environment
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case.
/// Anything else yields `default` and is logged.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Ok(val) = env::var(env_var) else {
        return default;
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => {
            warn!("Invalid boolean for {}: {}, using default", env_var, other);
            default
        }
    }
}
