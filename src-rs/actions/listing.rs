//! Built-in actions that render memory images and source as listings.

use std::sync::Arc;

use super::registry::ActionRegistry;
use super::types::ActionSchema;
use crate::error::ActionError;
use crate::result::ActionResult;

/// Registers `memi`, `memd` and `asm` on `registry`.
pub fn register_builtins(registry: &ActionRegistry) -> Result<(), ActionError> {
    registry.register(
        "memi",
        Arc::new(memi),
        schema("memi", "Instruction memory listing of 32-bit words"),
    )?;
    registry.register(
        "memd",
        Arc::new(memd),
        schema("memd", "Data memory listing of bytes in groups of four"),
    )?;
    registry.register(
        "asm",
        Arc::new(asm),
        schema("asm", "Numbered view of the non-empty source lines"),
    )?;
    Ok(())
}

fn schema(name: &str, description: &str) -> ActionSchema {
    ActionSchema {
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn memi(src: &str) -> Result<ActionResult, ActionError> {
    let words = parse_all(src, parse_word)?;
    let listing = format_mem_i(&words);
    Ok(ActionResult::listing(listing).with_log(format!("{} words", words.len())))
}

pub fn memd(src: &str) -> Result<ActionResult, ActionError> {
    let bytes = parse_all(src, parse_byte)?;
    let listing = format_mem_d(&bytes);
    Ok(ActionResult::listing(listing).with_log(format!("{} bytes", bytes.len())))
}

pub fn asm(src: &str) -> Result<ActionResult, ActionError> {
    let lines: Vec<String> = src
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| format!("{:04}: {}", idx, line))
        .collect();
    let count = lines.len();
    Ok(ActionResult::out(lines.join("\n")).with_log(format!("{} lines", count)))
}

pub fn format_mem_i(words: &[u32]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| format!("[0x{:X}|{}]: 0x{:08X}", i, i, word))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_mem_d(bytes: &[u8]) -> String {
    let mut lines = Vec::with_capacity(bytes.len() + bytes.len() / 4 + 1);
    for (i, byte) in bytes.iter().enumerate() {
        if i % 4 == 0 {
            lines.push("_____\n".to_string());
        }
        lines.push(format!("[0x{:X}|{}]: 0x{:02X}|{}", i, i, byte, byte));
    }
    lines.join("\n")
}

fn parse_all<T>(src: &str, parse: fn(&str) -> Option<T>) -> Result<Vec<T>, ActionError> {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    let tokens = src
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());
    for (pos, token) in tokens.enumerate() {
        match parse(token) {
            Some(value) => values.push(value),
            None => errors.push(format!("token {}: invalid value {:?}", pos, token)),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ActionError::bad_input("Parsing Error", errors))
    }
}

fn parse_word(token: &str) -> Option<u32> {
    match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => token.parse::<u32>().ok(),
    }
}

fn parse_byte(token: &str) -> Option<u8> {
    parse_word(token).and_then(|word| u8::try_from(word).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memi_lists_words_in_hex() {
        let result = memi("1 0x10,0xDEADBEEF").unwrap();
        assert_eq!(
            result.listing.as_deref(),
            Some("[0x0|0]: 0x00000001\n[0x1|1]: 0x00000010\n[0x2|2]: 0xDEADBEEF")
        );
        assert_eq!(result.log.as_deref(), Some("3 words"));
        assert!(result.out.is_none());
    }

    #[test]
    fn memd_groups_bytes_by_four() {
        let listing = format_mem_d(&[1, 2, 3, 4, 255]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "_____");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "[0x0|0]: 0x01|1");
        assert_eq!(lines[6], "_____");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "[0x4|4]: 0xFF|255");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn memd_rejects_values_above_a_byte() {
        let err = memd("1 256 zz").unwrap_err();
        match err {
            ActionError::BadInput { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("256"));
                assert!(errors[1].contains("zz"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn asm_numbers_non_empty_lines() {
        let result = asm("  mov r1, 1\n\n  halt  \n").unwrap();
        assert_eq!(result.out.as_deref(), Some("0000: mov r1, 1\n0001: halt"));
        assert_eq!(result.log.as_deref(), Some("2 lines"));
    }

    #[test]
    fn empty_input_gives_empty_listing() {
        let result = memi("").unwrap();
        assert_eq!(result.listing.as_deref(), Some(""));
        assert_eq!(result.log.as_deref(), Some("0 words"));
    }

    #[test]
    fn builtins_register_once() {
        let registry = ActionRegistry::new();
        register_builtins(&registry).unwrap();
        assert_eq!(registry.count(), 3);
        assert!(register_builtins(&registry).is_err());
    }
}
