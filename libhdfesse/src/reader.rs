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
use std::collections::{HashSet, VecDeque};
use std::io::{self, Read};

use hdfesse_proto::Security::TokenProto;

use crate::datanode::{BlockReadRequest, DataNodeBlockRead};
use crate::errors::HdfsError;
use crate::rpc::Connector;
use crate::status::{LocatedBlock, Token};

fn token_proto(token: &Token) -> TokenProto {
    let mut proto = TokenProto::new();
    proto.set_identifier(token.identifier.clone());
    proto.set_password(token.password.clone());
    proto.set_kind(token.kind.to_string());
    proto.set_service(token.service.to_string());
    proto
}

/// Coordinates reading a byte range `[start_offset, end_offset)` of a file
/// across its constituent blocks, retrying across replicas within a block
/// (§4.H). Retrying across NameNode RPCs (e.g. to refresh stale locations)
/// is the HA dispatcher's job, not this type's.
pub struct BlockReadCoordinator<C: Connector> {
    blocks: Vec<LocatedBlock>,
    connector: C,
    check_crc: bool,
    use_datanode_hostname: bool,
    position: u64,
    end_offset: u64,
    current: Option<DataNodeBlockRead>,
    current_block_remaining: u64,
    current_storage_id: Option<String>,
    failed_storages: HashSet<String>,
    pending: VecDeque<u8>,
}

impl<C: Connector> BlockReadCoordinator<C> {
    pub fn new(
        blocks: Vec<LocatedBlock>,
        start_offset: u64,
        end_offset: u64,
        connector: C,
        check_crc: bool,
        use_datanode_hostname: bool,
    ) -> Self {
        Self {
            blocks,
            connector,
            check_crc,
            use_datanode_hostname,
            position: start_offset,
            end_offset,
            current: None,
            current_block_remaining: 0,
            current_storage_id: None,
            failed_storages: HashSet::new(),
            pending: VecDeque::new(),
        }
    }

    fn find_block_for(blocks: &[LocatedBlock], offset: u64) -> Option<usize> {
        blocks
            .iter()
            .position(|b| b.offset <= offset && offset < b.offset + b.b.num_bytes)
    }

    /// Opens a session against the next block in the range, trying replicas
    /// in order, deprioritizing storages that have already failed for this
    /// read. Returns `Ok(false)` once `end_offset` (or the end of the
    /// located blocks) is reached.
    fn open_next_block(&mut self) -> Result<bool, HdfsError> {
        if self.position >= self.end_offset {
            return Ok(false);
        }
        let idx = match Self::find_block_for(&self.blocks, self.position) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        let block = &self.blocks[idx];
        let offset_in_block = self.position - block.offset;
        let want_len = (self.end_offset - self.position).min(block.b.num_bytes - offset_in_block);

        let mut candidates: Vec<usize> = (0..block.locs.len()).collect();
        candidates.sort_by_key(|&i| {
            let storage_id = block.storage_ids.get(i).map(String::as_str).unwrap_or("");
            self.failed_storages.contains(storage_id) as u8
        });

        for loc_idx in candidates {
            let datanode = &block.locs[loc_idx];
            let host = if self.use_datanode_hostname {
                datanode.id.host_name.to_string()
            } else {
                datanode.id.ip_addr.to_string()
            };
            let addr = format!("{}:{}", host, datanode.id.xfer_port);

            let req = BlockReadRequest {
                pool_id: block.b.pool_id.to_string(),
                block_id: block.b.block_id,
                generation_stamp: block.b.generation_stamp,
                block_token: token_proto(&block.block_token),
                offset_in_block,
                len: want_len,
            };

            let connector = &self.connector;
            let opened = DataNodeBlockRead::open(addr.as_str(), &req, |a| {
                connector
                    .get_connection(a)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
            });

            match opened {
                Ok(session) => {
                    self.current = Some(session);
                    self.current_block_remaining = want_len;
                    self.current_storage_id = block.storage_ids.get(loc_idx).cloned();
                    return Ok(true);
                }
                Err(_) => {
                    if let Some(id) = block.storage_ids.get(loc_idx) {
                        self.failed_storages.insert(id.clone());
                    }
                }
            }
        }

        Err(HdfsError::BlockRead {
            block_id: block.b.block_id,
        })
    }
}

impl<C: Connector> Read for BlockReadCoordinator<C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if !self.pending.is_empty() {
                let n = self.pending.len().min(buf.len());
                for slot in buf.iter_mut().take(n) {
                    *slot = self.pending.pop_front().unwrap();
                }
                return Ok(n);
            }

            if let Some(session) = self.current.as_mut() {
                if self.current_block_remaining == 0 {
                    self.current = None;
                    continue;
                }
                match session.next_load(self.check_crc) {
                    Ok(Some(load)) => {
                        self.position += load.len() as u64;
                        self.current_block_remaining =
                            self.current_block_remaining.saturating_sub(load.len() as u64);
                        self.pending.extend(load);
                        continue;
                    }
                    Ok(None) => {
                        self.current = None;
                        continue;
                    }
                    Err(_) => {
                        // `position` only ever advances on a delivered load, so
                        // `open_next_block` below resumes this same block at the
                        // byte offset already read, against a different replica.
                        if let Some(id) = self.current_storage_id.take() {
                            self.failed_storages.insert(id);
                        }
                        self.current = None;
                        continue;
                    }
                }
            } else {
                match self.open_next_block() {
                    Ok(true) => continue,
                    Ok(false) => return Ok(0),
                    Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ExtendedBlock;

    fn block(offset: u64, num_bytes: u64, block_id: u64) -> LocatedBlock {
        LocatedBlock {
            b: ExtendedBlock {
                pool_id: "pool".into(),
                block_id,
                num_bytes,
                generation_stamp: 1,
            },
            offset,
            locs: vec![],
            storage_ids: vec![],
            storage_types: vec![],
            corrupt: false,
            block_token: Token {
                identifier: vec![],
                password: vec![],
                kind: "".into(),
                service: "".into(),
            },
        }
    }

    #[test]
    fn test_find_block_for_middle_block() {
        let blocks = vec![block(0, 100, 1), block(100, 100, 2), block(200, 50, 3)];
        assert_eq!(BlockReadCoordinator::<crate::rpc::SimpleConnector>::find_block_for(&blocks, 150), Some(1));
    }

    #[test]
    fn test_find_block_for_past_end_is_none() {
        let blocks = vec![block(0, 100, 1)];
        assert_eq!(BlockReadCoordinator::<crate::rpc::SimpleConnector>::find_block_for(&blocks, 100), None);
    }

    #[test]
    fn test_find_block_for_boundary_belongs_to_next_block() {
        let blocks = vec![block(0, 100, 1), block(100, 100, 2)];
        assert_eq!(BlockReadCoordinator::<crate::rpc::SimpleConnector>::find_block_for(&blocks, 100), Some(1));
    }
}
