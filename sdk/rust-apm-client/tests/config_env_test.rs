#![allow(clippy::unwrap_used)]

use std::io::Write;

use hyperswitch_masking::PeekInterface;
use rust_apm_client::Config;

#[test]
fn environment_overrides_file_values() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(
        br#"
        [merchant]
        merchant_id = "merch1"
        shared_secret = "from-file"
        "#,
    )
    .unwrap();

    std::env::set_var("APM__MERCHANT__SHARED_SECRET", "from-env");
    let config = Config::new_with_config_path(Some(file.path().to_path_buf()));
    std::env::remove_var("APM__MERCHANT__SHARED_SECRET");

    let config = config.unwrap();
    assert_eq!(config.merchant.merchant_id, "merch1");
    assert_eq!(config.merchant.shared_secret.peek(), "from-env");
}
