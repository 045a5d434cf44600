use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub cors_origin: String,
    pub clinic_share_percent: Decimal,
    pub platform_fee_percent: Decimal,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set, using default 3000");
                    3000
                }),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| {
                warn!("CORS_ORIGIN not set, allowing any origin");
                String::new()
            }),
            clinic_share_percent: env::var("CLINIC_SHARE_PERCENT")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| {
                    warn!("CLINIC_SHARE_PERCENT not set, using default 95");
                    Decimal::from(95)
                }),
            platform_fee_percent: env::var("PLATFORM_FEE_PERCENT")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| {
                    warn!("PLATFORM_FEE_PERCENT not set, using default 5");
                    Decimal::from(5)
                }),
        };

        if !config.has_valid_split() {
            warn!(
                "Revenue split percentages do not sum to 100 ({} + {})",
                config.clinic_share_percent, config.platform_fee_percent
            );
        }

        config
    }

    pub fn has_valid_split(&self) -> bool {
        self.clinic_share_percent + self.platform_fee_percent == Decimal::from(100)
    }
}
