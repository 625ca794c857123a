//! Argument assembly for the install/upgrade invocation

use crate::config::StepConfig;
use crate::error::{StepError, StepResult};

/// Build the argument vector for `apt-get install|upgrade`
///
/// Order is fixed: verb and `-y`, then the shell-split `options`, then
/// `packages` split on single spaces. Empty package tokens produced by
/// consecutive spaces are kept.
pub fn install_args(config: &StepConfig) -> StepResult<Vec<String>> {
    let verb = if config.is_upgrade() { "upgrade" } else { "install" };
    let mut args = vec![verb.to_string(), "-y".to_string()];

    if !config.options.is_empty() {
        let options =
            shell_words::split(&config.options).map_err(|e| StepError::OptionsParse {
                options: config.options.clone(),
                reason: e.to_string(),
            })?;
        args.extend(options);
    }

    args.extend(config.packages.split(' ').map(str::to_string));
    Ok(args)
}

/// Arguments for the package index refresh
pub fn update_args() -> Vec<String> {
    vec!["update".to_string()]
}

/// Render a command line with each word shell-escaped
pub fn printable(program: &str, args: &[String]) -> String {
    shell_words::join(std::iter::once(program).chain(args.iter().map(String::as_str)))
}
