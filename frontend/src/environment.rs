use const_format::formatcp;
use konst::eq_str;

#[derive(Clone, Copy, Debug)]
pub enum ArenaEnv {
    Prod,
    Local,
}

pub const fn arena_env(env: Option<&str>) -> ArenaEnv {
    match env {
        Some(env) if eq_str(env, "prod") => ArenaEnv::Prod,
        _ => ArenaEnv::Local,
    }
}

impl ArenaEnv {
    #[must_use]
    pub const fn log_level(self) -> log::Level {
        match self {
            Self::Prod => log::Level::Info,
            Self::Local => log::Level::Debug,
        }
    }
}

const FORM_ID: &str = "xreklooq";

/// Address of the form-intake service. Swap `FORM_ID` for your own form
/// id; the placeholder is caught before any request goes out.
pub const FORM_ENDPOINT: &str = formatcp!("https://formspree.io/f/{FORM_ID}");

const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORM_ID";

#[must_use]
pub fn endpoint_configured(endpoint: &str) -> bool {
    !endpoint.is_empty() && !endpoint.contains(ENDPOINT_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_endpoint_is_rejected() {
        assert!(!endpoint_configured(""));
        assert!(!endpoint_configured("https://formspree.io/f/YOUR_FORM_ID"));
        assert!(endpoint_configured(FORM_ENDPOINT));
    }
}
