pub mod domain;
pub mod ephemeris;
pub mod export;
pub mod forecast;
pub mod report;
pub mod time;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    pub const DEFAULT_SYMBOL: &str = "NIFTY";
    pub const DEFAULT_YEAR: i32 = 2025;
    /// Zero-based; 7 is August.
    pub const DEFAULT_MONTH_INDEX: u32 = 7;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub symbol: Option<String>,
        pub year: Option<i32>,
        pub month_index: Option<u32>,
        pub export_dir: Option<PathBuf>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let year = std::env::var("ASTROCAST_YEAR")
                .ok()
                .map(|s| s.trim().parse::<i32>())
                .transpose()
                .context("ASTROCAST_YEAR must be a four-digit year")?;

            let month_index = std::env::var("ASTROCAST_MONTH")
                .ok()
                .map(|s| s.trim().parse::<u32>())
                .transpose()
                .context("ASTROCAST_MONTH must be a month index 0..=11")?;

            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok().filter(|s| !s.is_empty()),
                symbol: std::env::var("ASTROCAST_SYMBOL")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                year,
                month_index,
                export_dir: std::env::var("ASTROCAST_EXPORT_DIR")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
            })
        }

        pub fn resolve_symbol(&self, arg: Option<&str>) -> String {
            arg.map(str::to_string)
                .or_else(|| self.symbol.clone())
                .unwrap_or_else(|| DEFAULT_SYMBOL.to_string())
        }

        pub fn resolve_year(&self, arg: Option<i32>) -> i32 {
            arg.or(self.year).unwrap_or(DEFAULT_YEAR)
        }

        pub fn resolve_month_index(&self, arg: Option<u32>) -> u32 {
            arg.or(self.month_index).unwrap_or(DEFAULT_MONTH_INDEX)
        }

        pub fn export_dir(&self) -> PathBuf {
            self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn cli_args_override_env_which_overrides_defaults() {
            let empty = Settings::default();
            assert_eq!(empty.resolve_symbol(None), "NIFTY");
            assert_eq!(empty.resolve_year(None), 2025);
            assert_eq!(empty.resolve_month_index(None), 7);

            let env = Settings {
                symbol: Some("GOLD".to_string()),
                year: Some(2024),
                month_index: Some(0),
                ..Default::default()
            };
            assert_eq!(env.resolve_symbol(None), "GOLD");
            assert_eq!(env.resolve_symbol(Some("BANKNIFTY")), "BANKNIFTY");
            assert_eq!(env.resolve_year(Some(2026)), 2026);
            assert_eq!(env.resolve_month_index(None), 0);
        }
    }
}
