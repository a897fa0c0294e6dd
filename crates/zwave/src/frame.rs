use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Remainder,
    Fixed(usize),
    PayloadPrefixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    bytes: &'a [u8],
    offset: usize,
    byte_length: usize,
}

impl<'a> RawFrame<'a> {
    pub fn read(
        bytes: &'a [u8],
        offset: usize,
        rule: LengthRule,
    ) -> Result<Self> {
        if offset >= bytes.len() {
            return Err(Error::InvalidOffset {
                offset,
                length: bytes.len(),
            });
        }
        let available = bytes.len() - offset;
        if available < 2 {
            return Err(Error::OutOfBounds {
                needed: 2,
                available,
            });
        }
        let byte_length = match rule {
            LengthRule::Remainder => available,
            LengthRule::Fixed(length) => {
                if length < 2 {
                    return Err(Error::OutOfBounds {
                        needed: 2,
                        available: length,
                    });
                }
                length
            }
            LengthRule::PayloadPrefixed => {
                if available < 3 {
                    return Err(Error::OutOfBounds {
                        needed: 3,
                        available,
                    });
                }
                // header + prefix + payload
                3 + bytes[offset + 2] as usize
            }
        };
        if byte_length > available {
            return Err(Error::OutOfBounds {
                needed: byte_length,
                available,
            });
        }
        Ok(Self {
            bytes,
            offset,
            byte_length,
        })
    }

    pub fn command_class(&self) -> u8 {
        self.bytes[self.offset]
    }

    pub fn command(&self) -> u8 {
        self.bytes[self.offset + 1]
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[self.offset + 2..self.offset + self.byte_length]
    }

    pub fn bytes(&self) -> &'a [u8] {
        &self.bytes[self.offset..self.offset + self.byte_length]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub command_class: u8,
    pub command: u8,
    pub byte_length: usize,
    pub frame: RawFrame<'a>,
}

impl<'a> From<RawFrame<'a>> for Decoded<'a> {
    fn from(frame: RawFrame<'a>) -> Self {
        Self {
            command_class: frame.command_class(),
            command: frame.command(),
            byte_length: frame.byte_length(),
            frame,
        }
    }
}
