use crate::{Error, Result};
use bytes::{Buf, BufMut, BytesMut};

pub trait Decode: Sized {
    fn try_decode_from<B: Buf>(buffer: &mut B) -> Result<Self>;
}

pub trait Encode {
    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    );

    fn encode(&self) -> Vec<u8> {
        let mut buffer = BytesMut::new();
        self.encode_to(&mut buffer);
        buffer.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub command_class: u8,
    pub command: u8,
    pub payload: Vec<u8>,
}

impl Encode for RawCommand {
    fn encode_to<B: BufMut>(
        &self,
        buffer: &mut B,
    ) {
        buffer.put_u8(self.command_class);
        buffer.put_u8(self.command);
        buffer.put_slice(&self.payload);
    }
}

impl Decode for RawCommand {
    fn try_decode_from<B: Buf>(buffer: &mut B) -> Result<Self> {
        let available = buffer.remaining();
        if available < 2 {
            return Err(Error::OutOfBounds {
                needed: 2,
                available,
            });
        }
        let command_class = buffer.get_u8();
        let command = buffer.get_u8();
        let payload = buffer.copy_to_bytes(buffer.remaining()).to_vec();
        Ok(Self {
            command_class,
            command,
            payload,
        })
    }
}
