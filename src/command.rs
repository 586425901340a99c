//! Wire commands
//!
//! A client message is `-` followed by a one-byte tag and an optional numeric
//! payload. The effect index is decimal, every other payload is hexadecimal.
//! Numbers are read like C's `strtol`: leading whitespace and a sign are
//! accepted, parsing stops at the first invalid digit, and no digits reads
//! as zero.

/// Leading byte of every client command
pub const COMMAND_PREFIX: u8 = b'-';
/// Leading byte of an effect name announcement
pub const EFFECT_NAME_PREFIX: u8 = b'*';
/// Leading byte of a status announcement
pub const STATUS_PREFIX: u8 = b'!';

const TAG_LIST_EFFECTS: u8 = b'*';
const TAG_STATUS: u8 = b'!';
const TAG_EFFECT: u8 = b'e';
const TAG_SPEED: u8 = b't';
const TAG_SLEEP: u8 = b's';
const TAG_HUE: u8 = b'h';
const TAG_BRIGHTNESS: u8 = b'b';
const TAG_HUE_ROTATION: u8 = b'a';

/// Parsed client command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `-*`: announce every effect name
    ListEffects,
    /// `-!`: announce the status snapshot
    QueryStatus,
    /// `-e<decimal>`: select an effect by index
    SelectEffect(i32),
    /// `-t<hex>`: minimum frame interval in ms
    SetSpeed(i32),
    /// `-s<hex>`: sleep after this many ms, zero cancels
    Sleep(i32),
    /// `-h<hex>`: base hue
    SetHue(i32),
    /// `-b<hex>`: global brightness
    SetBrightness(i32),
    /// `-a`: toggle automatic hue rotation
    ToggleHueRotation,
}

/// Reasons a message is not a command
///
/// None of these are reported to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Zero-length message
    Empty,
    /// Starts with `*` or `!`, which only the controller sends
    ServerMessage,
    /// Starts with any other byte than `-`
    NotACommand(u8),
    /// A lone `-`
    MissingTag,
    /// Unknown byte after `-`
    UnknownTag(u8),
}

impl Command {
    pub fn parse(message: &[u8]) -> Result<Self, ParseError> {
        let (&first, rest) = message.split_first().ok_or(ParseError::Empty)?;
        match first {
            COMMAND_PREFIX => {}
            EFFECT_NAME_PREFIX | STATUS_PREFIX => return Err(ParseError::ServerMessage),
            other => return Err(ParseError::NotACommand(other)),
        }

        let (&tag, payload) = rest.split_first().ok_or(ParseError::MissingTag)?;
        Ok(match tag {
            TAG_LIST_EFFECTS => Self::ListEffects,
            TAG_STATUS => Self::QueryStatus,
            TAG_EFFECT => Self::SelectEffect(parse_decimal(payload)),
            TAG_SPEED => Self::SetSpeed(parse_hex(payload)),
            TAG_SLEEP => Self::Sleep(parse_hex(payload)),
            TAG_HUE => Self::SetHue(parse_hex(payload)),
            TAG_BRIGHTNESS => Self::SetBrightness(parse_hex(payload)),
            TAG_HUE_ROTATION => Self::ToggleHueRotation,
            other => return Err(ParseError::UnknownTag(other)),
        })
    }

    pub fn parse_str(message: &str) -> Result<Self, ParseError> {
        Self::parse(message.as_bytes())
    }
}

/// Parse a base-10 integer, `atoi` style
pub fn parse_decimal(input: &[u8]) -> i32 {
    parse_radix(input, 10)
}

/// Parse a base-16 integer, `strtol(.., 16)` style (optional `0x` prefix)
pub fn parse_hex(input: &[u8]) -> i32 {
    parse_radix(input, 16)
}

/// Saturates to the `i32` range on overflow.
#[allow(clippy::cast_possible_truncation)]
fn parse_radix(input: &[u8], radix: u32) -> i32 {
    let mut digits = input.trim_ascii_start();

    let negative = match digits.first() {
        Some(b'-') => {
            digits = &digits[1..];
            true
        }
        Some(b'+') => {
            digits = &digits[1..];
            false
        }
        _ => false,
    };

    if radix == 16 {
        if let [b'0', b'x' | b'X', next, ..] = digits {
            if next.is_ascii_hexdigit() {
                digits = &digits[2..];
            }
        }
    }

    let mut value: i64 = 0;
    for &byte in digits {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            break;
        };
        value = value * i64::from(radix) + i64::from(digit);
        if value > i64::from(i32::MAX) + 1 {
            value = i64::from(i32::MAX) + 1;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
