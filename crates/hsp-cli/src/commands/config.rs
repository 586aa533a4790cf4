use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `hsp config`.
pub fn handle(
    action: &ConfigCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => {
            let mut config = ctx.config.clone();
            config.s3.access_key_id = redact(&config.s3.access_key_id);
            config.s3.secret_access_key = redact(&config.s3.secret_access_key);
            output::output(&config, flags.format)?;
            Ok(())
        }
    }
}

fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        String::from("***")
    }
}

#[cfg(test)]
mod tests {
    use super::redact;

    #[test]
    fn redact_hides_non_empty_values() {
        assert_eq!(redact("AKIA123"), "***");
        assert_eq!(redact(""), "");
    }
}
