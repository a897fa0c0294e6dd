mod error;
pub use error::*;

use unda_zwave::{CommandClass, Decoded};

pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::new();
    for token in input.split_whitespace() {
        let token = token.strip_prefix("0x").unwrap_or(token);
        for character in token.chars() {
            let Some(digit) = character.to_digit(16) else {
                return Err(Error::InvalidDigit(character));
            };
            digits.push(digit as u8);
        }
    }
    if digits.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    Ok(digits
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

pub fn render(decoded: &Decoded) -> String {
    let class = match CommandClass::try_from(decoded.command_class) {
        Ok(class) => format!("{class:?}"),
        Err(_) => "Unknown".to_string(),
    };
    let payload = decoded
        .frame
        .payload()
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "class=0x{:02X} {} cmd=0x{:02X} len={} payload=[{}]",
        decoded.command_class, class, decoded.command, decoded.byte_length, payload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use unda_zwave::{Decoder, RawDecoder};

    #[test]
    fn test_parse_hex_plain() {
        assert_eq!(Ok(vec![0x20, 0x01, 0xFF, 0xFF]), parse_hex("2001FFFF"));
    }

    #[test]
    fn test_parse_hex_spaced() {
        assert_eq!(Ok(vec![0x20, 0x01, 0xFF, 0xFF]), parse_hex("20 01 ff ff"));
    }

    #[test]
    fn test_parse_hex_prefixed() {
        assert_eq!(Ok(vec![0x25, 0x03]), parse_hex("0x25 0x03"));
    }

    #[test]
    fn test_parse_hex_invalid_digit() {
        assert_eq!(Err(Error::InvalidDigit('g')), parse_hex("20g1"));
    }

    #[test]
    fn test_parse_hex_odd_length() {
        assert_eq!(Err(Error::OddLength), parse_hex("201"));
    }

    #[test]
    fn test_render_known_class() {
        let bytes = [0x20, 0x01, 0xFF, 0xFF];
        let decoded = RawDecoder.decode(&bytes, 0).unwrap();
        assert_eq!(
            "class=0x20 Basic cmd=0x01 len=4 payload=[FF FF]",
            render(&decoded),
        );
    }

    #[test]
    fn test_render_unknown_class() {
        let bytes = [0x21, 0x05, 0xAA];
        let decoded = RawDecoder.decode(&bytes, 0).unwrap();
        assert_eq!(
            "class=0x21 Unknown cmd=0x05 len=3 payload=[AA]",
            render(&decoded),
        );
    }
}
