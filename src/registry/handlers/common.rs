use crate::registry::CommandOutput;

/// `Usage: <command> <arg>` for argument-taking commands called bare.
pub fn usage(command: &str, arg: &str) -> CommandOutput {
    CommandOutput::text(format!("Usage: {command} <{arg}>"))
}

/// `<What> "<key>" not found.` plus an optional hint.
pub fn not_found(what: &str, key: &str, hint: Option<&str>) -> CommandOutput {
    let mut message = format!("{what} \"{key}\" not found.");
    if let Some(hint) = hint {
        message.push(' ');
        message.push_str(hint);
    }
    CommandOutput::text(message)
}

/// Response for commands that are listed but have no backing logic yet.
pub fn coming_soon(feature: &str) -> CommandOutput {
    CommandOutput::text(format!("{feature} is coming soon."))
}

/// Bullet list under a heading, or `empty` when there are no lines.
pub fn bullet_list(heading: &str, lines: Vec<String>, empty: &str) -> CommandOutput {
    if lines.is_empty() {
        return CommandOutput::text(empty);
    }
    let mut out = vec![heading.to_string()];
    out.extend(lines.into_iter().map(|l| format!("- {l}")));
    CommandOutput::text(out.join("\n"))
}
