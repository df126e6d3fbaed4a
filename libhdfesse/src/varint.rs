/*
   Copyright 2021 Ivan Boldyrev

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
use std::io;

use crate::framed::FramedReader;

/// Protobuf varints are at most 5 bytes for 32-bit values (10 for 64-bit,
/// but every length we decode here fits in 32 bits).
const MAX_VARINT_BYTES: usize = 5;

/// Reads a varint-encoded u32 by over-reading the maximum possible length
/// and rewinding the reader by the unused tail, per the framed reader's
/// "rewind" contract.
pub fn read_varint_u32<S: io::Read>(r: &mut FramedReader<S>) -> io::Result<u32> {
    let chunk = r.read(MAX_VARINT_BYTES)?.to_vec();
    let mut value: u32 = 0;
    let mut consumed = 0;
    for (i, byte) in chunk.iter().enumerate() {
        value |= ((byte & 0x7f) as u32) << (7 * i);
        consumed = i + 1;
        if byte & 0x80 == 0 {
            break;
        }
    }
    r.rewind(MAX_VARINT_BYTES - consumed);
    Ok(value)
}

/// Reads a varint-length-delimited message body and returns its raw bytes.
pub fn read_length_delimited<S: io::Read>(r: &mut FramedReader<S>) -> io::Result<Vec<u8>> {
    let len = read_varint_u32(r)? as usize;
    Ok(r.read(len)?.to_vec())
}

/// Encodes `n` as a protobuf varint.
pub fn encode_varint_u32(mut n: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_BYTES);
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            break;
        } else {
            out.push(byte | 0x80);
        }
    }
    out
}

/// Encodes a length-delimited message: `varint(len(msg)) || msg`.
pub fn encode_length_delimited(msg: &[u8]) -> Vec<u8> {
    let mut out = encode_varint_u32(msg.len() as u32);
    out.extend_from_slice(msg);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_roundtrip_small() {
        for n in [0u32, 1, 127, 128, 300, 16384, u32::MAX] {
            let encoded = encode_varint_u32(n);
            let mut r = FramedReader::new(Cursor::new(encoded));
            assert_eq!(read_varint_u32(&mut r).unwrap(), n);
        }
    }

    #[test]
    fn test_length_delimited_roundtrip() {
        let msg = b"hello hdfs";
        let framed = encode_length_delimited(msg);
        let mut r = FramedReader::new(Cursor::new(framed));
        assert_eq!(read_length_delimited(&mut r).unwrap(), msg);
    }

    #[test]
    fn test_rewind_leaves_trailing_bytes_readable() {
        let mut data = encode_varint_u32(42);
        data.extend_from_slice(b"trailer");
        let mut r = FramedReader::new(Cursor::new(data));
        assert_eq!(read_varint_u32(&mut r).unwrap(), 42);
        assert_eq!(r.read(7).unwrap(), b"trailer");
    }
}
