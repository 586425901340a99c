mod tests {
    use myrtio_light_runtime::command::{parse_decimal, parse_hex};
    use myrtio_light_runtime::{Command, ParseError};

    fn parse(message: &str) -> Result<Command, ParseError> {
        Command::parse_str(message)
    }

    #[test]
    fn test_queries() {
        assert_eq!(parse("-*"), Ok(Command::ListEffects));
        assert_eq!(parse("-!"), Ok(Command::QueryStatus));
        assert_eq!(parse("-a"), Ok(Command::ToggleHueRotation));
        assert_eq!(parse("-a123"), Ok(Command::ToggleHueRotation));
    }

    #[test]
    fn test_effect_index_is_decimal() {
        assert_eq!(parse("-e3"), Ok(Command::SelectEffect(3)));
        assert_eq!(parse("-e12abc"), Ok(Command::SelectEffect(12)));
        assert_eq!(parse("-e10"), Ok(Command::SelectEffect(10)));
        assert_eq!(parse("-e-2"), Ok(Command::SelectEffect(-2)));
        assert_eq!(parse("-e"), Ok(Command::SelectEffect(0)));
        assert_eq!(parse("-ex"), Ok(Command::SelectEffect(0)));
    }

    #[test]
    fn test_payloads_are_hex() {
        assert_eq!(parse("-t1f"), Ok(Command::SetSpeed(31)));
        assert_eq!(parse("-t0x1F"), Ok(Command::SetSpeed(31)));
        assert_eq!(parse("-tzz"), Ok(Command::SetSpeed(0)));
        assert_eq!(parse("-s3e8"), Ok(Command::Sleep(1000)));
        assert_eq!(parse("-s0"), Ok(Command::Sleep(0)));
        assert_eq!(parse("-hFF"), Ok(Command::SetHue(255)));
        assert_eq!(parse("-h1ff"), Ok(Command::SetHue(511)));
        assert_eq!(parse("-bA0"), Ok(Command::SetBrightness(160)));
    }

    #[test]
    fn test_rejected_messages() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("*Solid"), Err(ParseError::ServerMessage));
        assert_eq!(parse("!0,20,0,0,100"), Err(ParseError::ServerMessage));
        assert_eq!(parse("hello"), Err(ParseError::NotACommand(b'h')));
        assert_eq!(parse("-"), Err(ParseError::MissingTag));
        assert_eq!(parse("-z"), Err(ParseError::UnknownTag(b'z')));
        assert_eq!(parse("-E1"), Err(ParseError::UnknownTag(b'E')));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex(b"ff"), 255);
        assert_eq!(parse_hex(b" +ff"), 255);
        assert_eq!(parse_hex(b"-10"), -16);
        assert_eq!(parse_hex(b"0x"), 0);
        assert_eq!(parse_hex(b"0xg"), 0);
        assert_eq!(parse_hex(b"12g4"), 0x12);
        assert_eq!(parse_hex(b""), 0);
        assert_eq!(parse_hex(b"ffffffffff"), i32::MAX);
        assert_eq!(parse_hex(b"-ffffffffff"), i32::MIN);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(b"42"), 42);
        assert_eq!(parse_decimal(b"\t 7"), 7);
        assert_eq!(parse_decimal(b"0x10"), 0);
        assert_eq!(parse_decimal(b"-99999999999"), i32::MIN);
        assert_eq!(parse_decimal(b"99999999999"), i32::MAX);
    }
}
