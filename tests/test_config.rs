//! Configuration loading tests.

use servedir::config::Config;

// Defaults and environment overrides share the process environment, so
// they run as one sequential test.
#[test]
fn test_defaults_and_env_overrides() {
    std::env::remove_var("SERVEDIR_SERVER__PORT");
    std::env::remove_var("SERVEDIR_FILES__ROOT");

    // No config file present: built-in defaults apply
    let cfg = Config::load_from("servedir-test-no-such-config").unwrap();
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.server.workers, None);
    assert_eq!(cfg.files.root, ".");
    assert_eq!(cfg.files.index_files, vec!["index.html", "index.htm"]);
    assert!(cfg.logging.access_log);
    assert!(!cfg.logging.log_connections);
    assert_eq!(cfg.logging.access_log_file, None);

    // Environment overrides win over defaults
    std::env::set_var("SERVEDIR_SERVER__PORT", "8123");
    std::env::set_var("SERVEDIR_FILES__ROOT", "/srv/site");
    let cfg = Config::load_from("servedir-test-no-such-config").unwrap();
    assert_eq!(cfg.server.port, 8123);
    assert_eq!(cfg.files.root, "/srv/site");

    std::env::remove_var("SERVEDIR_SERVER__PORT");
    std::env::remove_var("SERVEDIR_FILES__ROOT");
}

#[test]
fn test_socket_addr_from_config() {
    let cfg = Config::load_from("servedir-test-no-such-config").unwrap();
    let addr = cfg.socket_addr().unwrap();
    assert_eq!(addr.port(), cfg.server.port);
    assert!(addr.ip().is_unspecified());
}
