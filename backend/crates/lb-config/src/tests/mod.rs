
use std::env;

use tempfile::TempDir;

const VALID_SECRET: &str = "12345678901234567890123456789012";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point LB_CONFIG_DIR at it.
/// Also clears the secret so each test starts from a known state.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("LB_CONFIG_DIR", temp.path().to_str().unwrap());
    let secret_guard = EnvGuard::remove("LB_AUTH_JWT_SECRET");
    (temp, dir_guard, secret_guard)
}

/// As `setup_config_dir`, with a valid signing secret in the environment.
pub(crate) fn setup_valid_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("LB_CONFIG_DIR", temp.path().to_str().unwrap());
    let secret_guard = EnvGuard::set("LB_AUTH_JWT_SECRET", VALID_SECRET);
    (temp, dir_guard, secret_guard)
}
