use crate::{CommandClass, Decoded, LengthRule, RawFrame, Result};

pub trait Decoder {
    fn decode<'a>(
        &self,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<Decoded<'a>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDecoder;

impl Decoder for RawDecoder {
    fn decode<'a>(
        &self,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<Decoded<'a>> {
        let frame = RawFrame::read(bytes, offset, LengthRule::Remainder)?;
        Ok(frame.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixedDecoder;

impl Decoder for PrefixedDecoder {
    fn decode<'a>(
        &self,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<Decoded<'a>> {
        let frame = RawFrame::read(bytes, offset, LengthRule::PayloadPrefixed)?;
        Ok(frame.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassDecoder {
    Raw(RawDecoder),
    Prefixed(PrefixedDecoder),
}

impl ClassDecoder {
    pub fn for_class(command_class: u8) -> Self {
        match CommandClass::try_from(command_class) {
            // Multi Cmd carries length-delimited inner spans
            Ok(CommandClass::MultiCmd) => Self::Prefixed(PrefixedDecoder),
            _ => Self::Raw(RawDecoder),
        }
    }
}

impl Decoder for ClassDecoder {
    fn decode<'a>(
        &self,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<Decoded<'a>> {
        match self {
            Self::Raw(decoder) => decoder.decode(bytes, offset),
            Self::Prefixed(decoder) => decoder.decode(bytes, offset),
        }
    }
}

pub struct FrameCursor<'a, D> {
    bytes: &'a [u8],
    offset: usize,
    decoder: D,
    failed: bool,
}

impl<'a, D: Decoder> FrameCursor<'a, D> {
    pub fn new(
        bytes: &'a [u8],
        offset: usize,
        decoder: D,
    ) -> Self {
        Self {
            bytes,
            offset,
            decoder,
            failed: false,
        }
    }
}

impl<'a, D: Decoder> Iterator for FrameCursor<'a, D> {
    type Item = Result<Decoded<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match self.decoder.decode(self.bytes, self.offset) {
            Ok(decoded) => {
                self.offset += decoded.byte_length;
                Some(Ok(decoded))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}
