use ulusm_core::messaging::types::Command;

/// Split `/cmd@botname arg1 ...` into the lower-cased command name and the rest.
pub(crate) fn parse_command(text: &str) -> (String, String) {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

/// A registered bot command, or `None` for anything that should be treated as plain text.
pub(crate) fn recognize(text: &str) -> Option<Command> {
    if !text.trim_start().starts_with('/') {
        return None;
    }
    let (cmd, _args) = parse_command(text);
    Command::from_name(&cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bot_suffix_and_args() {
        assert_eq!(
            parse_command("/join_group@UlusmBot now please"),
            ("join_group".to_string(), "now please".to_string())
        );
        assert_eq!(parse_command("/START"), ("start".to_string(), String::new()));
    }

    #[test]
    fn only_registered_commands_are_recognized() {
        assert_eq!(recognize("/start"), Some(Command::Start));
        assert_eq!(recognize("/join_group@UlusmBot"), Some(Command::JoinGroup));
        assert_eq!(recognize("/unknown"), None);
        assert_eq!(recognize("France"), None);
        assert_eq!(recognize("start"), None);
    }
}
