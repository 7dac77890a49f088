use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate the shared server env vars.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CONTENT_DIR");
        std::env::remove_var("STATIC_DIR");
        std::env::remove_var("WORKER_API_URL");
        std::env::remove_var("WORKER_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("WORKER_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("COOKIE_SECURE");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert_eq!(cfg.worker.base_url, DEFAULT_WORKER_API_URL);
    assert_eq!(
        cfg.worker.timeouts,
        WorkerTimeouts {
            request_secs: DEFAULT_WORKER_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_WORKER_CONNECT_TIMEOUT_SECS,
        }
    );
    assert!(!cfg.cookie_secure);
    assert!(cfg.worker.dev_bypass());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("CONTENT_DIR", "/srv/content");
        std::env::set_var("WORKER_API_URL", "https://worker.example.test/");
        std::env::set_var("WORKER_REQUEST_TIMEOUT_SECS", "12");
        std::env::set_var("WORKER_CONNECT_TIMEOUT_SECS", "3");
        std::env::set_var("COOKIE_SECURE", "yes");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.content_dir, PathBuf::from("/srv/content"));
    assert_eq!(cfg.worker.base_url, "https://worker.example.test");
    assert_eq!(cfg.worker.timeouts, WorkerTimeouts { request_secs: 12, connect_secs: 3 });
    assert!(cfg.cookie_secure);
    assert!(!cfg.worker.dev_bypass());

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = Config::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_timeout_falls_back() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("WORKER_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.worker.timeouts.request_secs, DEFAULT_WORKER_REQUEST_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}

#[test]
fn worker_config_trims_trailing_slashes() {
    let worker = WorkerConfig::new("http://localhost:8787//");
    assert_eq!(worker.base_url, "http://localhost:8787");
    assert!(worker.dev_bypass());
}

#[test]
fn env_bool_variants() {
    for (i, (val, expected)) in [("1", Some(true)), ("On", Some(true)), ("off", Some(false)), ("maybe", None)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_NANTOKA_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), *expected, "unexpected result for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}
