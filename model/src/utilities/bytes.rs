use byteorder::{BigEndian, ByteOrder};

/// Returns the 4-byte big-endian encoding of the given integer.
pub fn integer_as_buffer(value: u32) -> [u8; 4] {
    let mut buffer = [0u8; 4];
    BigEndian::write_u32(&mut buffer, value);
    buffer
}

/// Returns the integer of the given 4-byte big-endian encoding.
pub fn buffer_as_integer(buffer: &[u8; 4]) -> u32 {
    BigEndian::read_u32(buffer)
}
