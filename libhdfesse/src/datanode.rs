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
use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};

use protobuf::Message;
use thiserror::Error;
use tracing::{instrument, trace};

use hdfesse_proto::datatransfer::{
    BaseHeaderProto, BlockOpResponseProto, ClientOperationHeaderProto, ClientReadStatusProto,
    ClientReadStatusProto_Status, OpReadBlockProto, PacketHeaderProto, Status,
};
use hdfesse_proto::hdfs::ExtendedBlockProto;
use hdfesse_proto::Security::TokenProto;

use crate::crc::ChecksumType;
use crate::framed::FramedReader;
use crate::varint::{encode_length_delimited, read_length_delimited};

const DATA_TRANSFER_VERSION: u16 = 28;
const OP_READ_BLOCK: u8 = 81;
const CLIENT_NAME: &str = "snakebite";

/// Internal chunking bound: the coordinator never asks a `DataNodeBlockRead`
/// for more than this many bytes per "load" (§4.G).
pub const MAX_LOAD_BYTES: usize = 16_000;

#[derive(Debug, Error)]
pub enum DataNodeError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Protobuf(#[from] protobuf::ProtobufError),
    #[error("datanode reported non-success status {status:?}: {message}")]
    NonSuccess { status: Status, message: String },
    #[error("unsupported checksum type")]
    UnsupportedChecksum,
    #[error("checksum mismatch at chunk offset {offset}")]
    Checksum { offset: u64 },
}

/// Request parameters for one `OP_READ_BLOCK` session, independent of the
/// replica actually contacted.
pub struct BlockReadRequest {
    pub pool_id: String,
    pub block_id: u64,
    pub generation_stamp: u64,
    pub block_token: TokenProto,
    pub offset_in_block: u64,
    pub len: u64,
}

/// One open `OP_READ_BLOCK` session to a single DataNode replica. Owns its
/// socket for the lifetime of one block read.
pub struct DataNodeBlockRead {
    reader: FramedReader<TcpStream>,
    checksum_type: ChecksumType,
    bytes_per_chunk: u32,
    bytes_remaining: u64,
    delivered: u64,
}

impl DataNodeBlockRead {
    #[instrument(skip(req, connect))]
    pub fn open<A: ToSocketAddrs, F>(addr: A, req: &BlockReadRequest, connect: F) -> Result<Self, DataNodeError>
    where
        F: FnOnce(A) -> io::Result<TcpStream>,
    {
        let mut stream = connect(addr)?;
        stream.set_nodelay(true)?;

        stream.write_all(&DATA_TRANSFER_VERSION.to_be_bytes())?;
        stream.write_all(&[OP_READ_BLOCK])?;

        let mut block = ExtendedBlockProto::new();
        block.set_poolId(req.pool_id.clone());
        block.set_blockId(req.block_id);
        block.set_generationStamp(req.generation_stamp);
        block.set_numBytes(req.len);

        let mut base_header = BaseHeaderProto::new();
        base_header.set_block(block);
        base_header.set_token(req.block_token.clone());

        let mut client_header = ClientOperationHeaderProto::new();
        client_header.set_baseHeader(base_header);
        client_header.set_clientName(CLIENT_NAME.to_owned());

        let mut op = OpReadBlockProto::new();
        op.set_header(client_header);
        op.set_offset(req.offset_in_block);
        op.set_len(req.len);
        op.set_sendChecksums(true);

        let mut buf = Vec::new();
        op.write_to_vec(&mut buf)?;
        stream.write_all(&encode_length_delimited(&buf))?;
        stream.flush()?;

        let mut reader = FramedReader::new(stream);
        let resp_bytes = read_length_delimited(&mut reader)?;
        let resp = BlockOpResponseProto::parse_from_bytes(&resp_bytes)?;
        if resp.get_status() != Status::SUCCESS {
            return Err(DataNodeError::NonSuccess {
                status: resp.get_status(),
                message: resp.get_message().to_owned(),
            });
        }

        let checksum = resp.get_readOpChecksumInfo().get_checksum();
        let checksum_type = ChecksumType::from_proto(checksum.get_field_type())
            .ok_or(DataNodeError::UnsupportedChecksum)?;
        let bytes_per_chunk = checksum.get_bytesPerChecksum().max(1);

        trace!(
            pool_id = %req.pool_id,
            block_id = req.block_id,
            "opened OP_READ_BLOCK session"
        );

        Ok(Self {
            reader,
            checksum_type,
            bytes_per_chunk,
            bytes_remaining: req.len,
            delivered: 0,
        })
    }

    /// Reads one packet's payload, verifying per-chunk checksums when
    /// `check_crc` is set. Returns `None` once `len` bytes have been
    /// delivered.
    pub fn next_load(&mut self, check_crc: bool) -> Result<Option<Vec<u8>>, DataNodeError> {
        if self.bytes_remaining == 0 {
            return Ok(None);
        }

        let packet_len_bytes = self.reader.read(4)?;
        let packet_len = u32::from_be_bytes([
            packet_len_bytes[0],
            packet_len_bytes[1],
            packet_len_bytes[2],
            packet_len_bytes[3],
        ]) as usize;
        let header_size_bytes = self.reader.read(2)?;
        let header_size = u16::from_be_bytes([header_size_bytes[0], header_size_bytes[1]]) as usize;
        let header_bytes = self.reader.read(header_size)?.to_vec();
        let header = PacketHeaderProto::parse_from_bytes(&header_bytes)?;
        let data_len = header.get_dataLen().max(0) as usize;

        let num_chunks = (data_len + self.bytes_per_chunk as usize - 1) / self.bytes_per_chunk as usize;
        let checksums_len = num_chunks * 4;
        let payload_len = packet_len
            .checked_sub(4 + checksums_len)
            .unwrap_or(data_len);

        let mut checksums = Vec::with_capacity(num_chunks);
        for _ in 0..num_chunks {
            let bytes = self.reader.read(4)?;
            checksums.push(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
        }

        let payload = self.reader.read(payload_len.min(data_len.max(payload_len)))?.to_vec();

        if check_crc {
            if self.checksum_type == ChecksumType::Null {
                return Err(DataNodeError::UnsupportedChecksum);
            }
            let mut offset_in_packet = 0usize;
            for expected in checksums {
                let end = (offset_in_packet + self.bytes_per_chunk as usize).min(payload.len());
                let chunk = &payload[offset_in_packet..end];
                if !self.checksum_type.verify(chunk, expected) {
                    return Err(DataNodeError::Checksum {
                        offset: self.delivered + offset_in_packet as u64,
                    });
                }
                offset_in_packet = end;
            }
        }

        // A zero-length "heartbeat" packet (dataLen == 0, not the last
        // packet) carries no bytes; keep pulling until real data arrives.
        if data_len == 0 && !header.get_lastPacketInBlock() {
            return self.next_load(check_crc);
        }

        self.bytes_remaining = self.bytes_remaining.saturating_sub(data_len as u64);
        self.delivered += data_len as u64;

        if self.bytes_remaining == 0 {
            self.send_read_status()?;
        }

        Ok(Some(payload))
    }

    fn send_read_status(&mut self) -> Result<(), DataNodeError> {
        let mut status = ClientReadStatusProto::new();
        status.set_status(ClientReadStatusProto_Status::SUCCESS);
        let mut buf = Vec::new();
        status.write_to_vec(&mut buf)?;
        let socket = self.reader.get_mut();
        socket.write_all(&encode_length_delimited(&buf))?;
        socket.flush()?;
        Ok(())
    }
}

impl Iterator for DataNodeBlockRead {
    type Item = Result<Vec<u8>, DataNodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_load(true).transpose()
    }
}
