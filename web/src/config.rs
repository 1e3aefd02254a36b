use std::env;

/// Rate limit for bill submissions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitRateLimit {
    pub per_second: u64,
    pub burst: u32,
}

/// Settings the views need at render time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    /// Width in pixels of the receipt preview image
    pub receipt_preview_width: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            receipt_preview_width: 400,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL of the bills backend. Unset means the in-memory store.
    pub api_url: Option<String>,
    /// Seed the in-memory store with demo bills
    pub seed_demo: bool,
    pub receipt_preview_width: u32,
    /// `None` disables rate limiting on submissions
    pub submit_rate: Option<SubmitRateLimit>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            api_url: None,
            seed_demo: false,
            receipt_preview_width: ViewSettings::default().receipt_preview_width,
            submit_rate: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let submit_rate = match (
            parse_var::<u64>("SUBMIT_RATE_PER_SECOND"),
            parse_var::<u32>("SUBMIT_BURST"),
        ) {
            (Some(per_second), burst) if per_second > 0 => Some(SubmitRateLimit {
                per_second,
                burst: burst.filter(|b| *b > 0).unwrap_or(5),
            }),
            _ => None,
        };

        Self {
            port: parse_var("PORT").unwrap_or(8080),
            api_url: env::var("BILLED_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            seed_demo: env::var("BILLED_SEED_DEMO")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            receipt_preview_width: parse_var("RECEIPT_PREVIEW_WIDTH")
                .filter(|w| *w > 0)
                .unwrap_or(400),
            submit_rate,
        }
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            receipt_preview_width: self.receipt_preview_width,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
