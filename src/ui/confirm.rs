//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm `prompt`
///
/// Returns `true` without prompting when `skip` is set (`--yes` or batch
/// mode). Defaults to "no".
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool, dialoguer::Error> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_action_skipped() {
        assert!(confirm_action("Remove 'alice' from 'acme-corp'?", true).unwrap());
    }
}
