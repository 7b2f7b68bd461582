use env_logger::{Builder, Env};

/// `RUST_LOG` wins when set, otherwise `info`.
pub fn init_logging() {
    logger_builder().init();
}

fn logger_builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_secs().format_module_path(false);
    builder
}

/// Replaces the value of the `access_token` query parameter so URLs can be logged.
pub fn redact_token(url: &str) -> String {
    match url.find("access_token=") {
        Some(idx) => {
            let start = idx + "access_token=".len();
            let end = url[start..]
                .find('&')
                .map(|offset| start + offset)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}
