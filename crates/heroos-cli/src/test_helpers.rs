// Test utilities shared by the `heroos-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use std::env;
use std::sync::Mutex;

/// Global mutex serializing every test that modifies environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with temporary environment variable changes, restoring the previous
/// values afterwards. `None` removes the variable for the duration of `f`.
pub fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

    for (key, value) in vars {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    let result = f();

    for (key, value) in saved {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_env_vars_restores_previous_values() {
        let key = "HEROOS_TEST_HELPER_VAR";
        with_env_vars(&[(key, Some("outer"))], || {
            assert_eq!(env::var(key).as_deref(), Ok("outer"));
        });
        assert!(env::var_os(key).is_none());
    }
}
