use pyfront_diagnostic::emitter::ColorMode;
use pyfront_diagnostic::DiagnosticConfig;

/// Options shared by every command that reports diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    /// Maximum errors shown (0 = unlimited).
    pub error_limit: usize,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            color: ColorMode::Auto,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl CliOptions {
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}

/// Parse `--color=<mode>` and `--error-limit=<n>`.
pub fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value).ok_or_else(|| {
                format!("invalid color mode '{value}' (expected auto, always or never)")
            })?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.error_limit = value
                .parse()
                .map_err(|_| format!("invalid error limit '{value}'"))?;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests;
