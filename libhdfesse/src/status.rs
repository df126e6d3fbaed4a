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
use std::sync::Arc;

use protobuf::ProtobufEnum;

use crate::crc::ChecksumType;
pub use crate::fs_ls::LsGroupIterator;
use hdfesse_proto::{
    acl::FsPermissionProto,
    hdfs::{
        CipherSuiteProto, ContentSummaryProto, CryptoProtocolVersionProto, DatanodeIDProto,
        DatanodeInfoProto, DatanodeInfoProto_AdminState, ExtendedBlockProto,
        FileEncryptionInfoProto, FsServerDefaultsProto, HdfsFileStatusProto,
        HdfsFileStatusProto_FileType, LocatedBlockProto, LocatedBlocksProto, StorageTypeProto,
    },
    ClientNamenodeProtocol::GetFsStatusResponseProto,
    Security::TokenProto,
};

pub struct FsPermission {
    pub perm: u16,
}

impl From<&FsPermissionProto> for FsPermission {
    fn from(perm: &FsPermissionProto) -> Self {
        Self {
            perm: perm.get_perm() as u16,
        }
    }
}

pub struct DatanodeID {
    pub ip_addr: Box<str>,
    pub host_name: Box<str>,
    pub datanode_uuid: Box<str>,
    pub xfer_port: u32,
    pub info_port: u32,
    pub info_secure_port: u32,
    pub ipc_port: u32,
}

impl From<&DatanodeIDProto> for DatanodeID {
    fn from(proto: &DatanodeIDProto) -> Self {
        Self {
            ip_addr: proto.get_ipAddr().into(),
            host_name: proto.get_hostName().into(),
            datanode_uuid: proto.get_datanodeUuid().into(),
            xfer_port: proto.get_xferPort(),
            info_port: proto.get_infoPort(),
            info_secure_port: proto.get_infoSecurePort(),
            ipc_port: proto.get_ipcPort(),
        }
    }
}

pub type AdminState = DatanodeInfoProto_AdminState;
pub type StorageType = StorageTypeProto;

pub struct DatanodeInfo {
    pub id: DatanodeID,
    pub network_location: Box<str>,
    pub capacity: u64,
    pub dfs_used: u64,
    pub remaining: u64,
    pub admin_state: AdminState,
}

impl From<DatanodeInfoProto> for DatanodeInfo {
    fn from(proto: DatanodeInfoProto) -> Self {
        Self {
            id: proto.get_id().into(),
            network_location: proto.get_location().into(),
            capacity: proto.get_capacity(),
            dfs_used: proto.get_dfsUsed(),
            remaining: proto.get_remaining(),
            admin_state: proto.get_adminState(),
        }
    }
}

pub struct Token {
    pub identifier: Vec<u8>,
    pub password: Vec<u8>,
    pub kind: Box<str>,
    pub service: Box<str>,
}

impl From<TokenProto> for Token {
    fn from(mut proto: TokenProto) -> Self {
        Self {
            identifier: proto.take_identifier(),
            password: proto.take_password(),
            kind: proto.take_kind().into(),
            service: proto.take_service().into(),
        }
    }
}

pub struct LocatedBlock {
    pub b: ExtendedBlock,
    pub offset: u64,
    pub locs: Vec<Arc<DatanodeInfo>>,
    pub storage_ids: Vec<String>,
    pub storage_types: Vec<StorageType>,
    pub corrupt: bool,
    pub block_token: Token,
}

impl From<LocatedBlockProto> for LocatedBlock {
    fn from(proto: LocatedBlockProto) -> Self {
        let locs: Vec<Arc<DatanodeInfo>> = proto
            .get_locs()
            .iter()
            .cloned()
            .map(Into::into)
            .map(Arc::new)
            .collect();
        let storage_types: Vec<StorageType> = proto
            .get_storageTypes()
            .iter()
            .filter_map(|&v| StorageType::from_i32(v))
            .collect();
        Self {
            b: proto.get_b().clone().into(),
            offset: proto.get_offset(),
            locs,
            storage_ids: proto.get_storageIDs().to_vec(),
            storage_types,
            corrupt: proto.get_corrupt(),
            block_token: proto.get_blockToken().clone().into(),
        }
    }
}

pub type CipherSuite = CipherSuiteProto;
pub type CryptoProtocolVersion = CryptoProtocolVersionProto;

pub struct FileEncryptionInfo {
    pub suite: CipherSuite,
    pub version: CryptoProtocolVersion,
    pub edek: Box<[u8]>,
    pub iv: Box<[u8]>,
    pub key_name: Box<str>,
    pub ez_key_version_name: Box<str>,
}

impl From<&FileEncryptionInfoProto> for FileEncryptionInfo {
    fn from(proto: &FileEncryptionInfoProto) -> Self {
        Self {
            suite: proto.get_suite(),
            version: proto.get_cryptoProtocolVersion(),
            edek: proto.get_key().into(),
            iv: proto.get_iv().into(),
            key_name: proto.get_keyName().into(),
            ez_key_version_name: proto.get_ezKeyVersionName().into(),
        }
    }
}

pub struct ExtendedBlock {
    pub pool_id: Box<str>,
    pub block_id: u64,
    pub num_bytes: u64,
    pub generation_stamp: u64,
}

impl From<ExtendedBlockProto> for ExtendedBlock {
    fn from(proto: ExtendedBlockProto) -> Self {
        Self {
            pool_id: proto.get_poolId().into(),
            block_id: proto.get_blockId(),
            num_bytes: proto.get_numBytes(),
            generation_stamp: proto.get_generationStamp(),
        }
    }
}

pub struct LocatedBlocks {
    pub length: u64,
    pub under_construction: bool,
    pub block_list: Vec<LocatedBlock>,
    pub last_block: Option<LocatedBlock>,
    pub is_last_block_complete: bool,
}

impl From<LocatedBlocksProto> for LocatedBlocks {
    fn from(proto: LocatedBlocksProto) -> Self {
        Self {
            length: proto.get_fileLength(),
            under_construction: proto.get_underConstruction(),
            block_list: proto.get_blocks().iter().cloned().map(Into::into).collect(),
            last_block: if proto.has_lastBlock() {
                Some(proto.get_lastBlock().clone().into())
            } else {
                None
            },
            is_last_block_complete: proto.get_isLastBlockComplete(),
        }
    }
}

pub struct HdfsFileStatus {
    pub length: u64,
    pub isdir: bool,
    pub replication: u32,
    pub blocksize: u64,
    pub mtime: u64,
    pub atime: u64,
    pub perm: FsPermission,
    pub owner: Box<str>,
    pub group: Box<str>,
    pub symlink: Option<Box<[u8]>>,
    pub path: Box<[u8]>,
    pub field_id: u64,
    pub locations: Option<LocatedBlocks>,
    pub children: i32,
    pub fe_info: Option<FileEncryptionInfo>,
    pub storage_policy: u32,
}

// See PBHelperClient.java
impl From<HdfsFileStatusProto> for HdfsFileStatus {
    fn from(fs: HdfsFileStatusProto) -> Self {
        Self {
            length: fs.get_length(),
            isdir: fs.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR,
            replication: fs.get_block_replication(),
            blocksize: fs.get_blocksize(),
            mtime: fs.get_modification_time(),
            atime: fs.get_access_time(),
            perm: fs.get_permission().into(),
            owner: fs.get_owner().into(),
            group: fs.get_group().into(),
            symlink: if fs.get_fileType() == HdfsFileStatusProto_FileType::IS_SYMLINK {
                Some(fs.get_symlink().into())
            } else {
                None
            },
            path: fs.get_path().into(),
            field_id: fs.get_file_id(),
            locations: if fs.has_locations() {
                Some(fs.get_locations().clone().into())
            } else {
                None
            },
            children: fs.get_children_num(),
            fe_info: if fs.has_file_encryption_info() {
                Some(fs.get_file_encryption_info().into())
            } else {
                None
            },
            storage_policy: fs.get_storage_policy(),
        }
    }
}

/// Resolved server-side write defaults, as returned by `getServerDefaults`
/// and cached per client (§5 shared resources).
pub struct ServerDefaults {
    pub block_size: u64,
    pub bytes_per_checksum: u32,
    pub write_packet_size: u32,
    pub replication: u32,
    pub file_buffer_size: u32,
    pub encrypt_data_transfer: bool,
    pub trash_interval: u64,
    pub checksum_type: ChecksumType,
}

impl From<FsServerDefaultsProto> for ServerDefaults {
    fn from(proto: FsServerDefaultsProto) -> Self {
        Self {
            block_size: proto.get_blockSize(),
            bytes_per_checksum: proto.get_bytesPerChecksum(),
            write_packet_size: proto.get_writePacketSize(),
            replication: proto.get_replication(),
            file_buffer_size: proto.get_fileBufferSize(),
            encrypt_data_transfer: proto.get_encryptDataTransfer(),
            trash_interval: proto.get_trashInterval(),
            checksum_type: ChecksumType::from_proto(proto.get_checksumType())
                .unwrap_or(ChecksumType::Crc32C),
        }
    }
}

/// `du`/`count` summary of a subtree.
pub struct ContentSummary {
    pub length: u64,
    pub file_count: u64,
    pub directory_count: u64,
    pub quota: u64,
    pub space_consumed: u64,
    pub space_quota: u64,
}

impl From<ContentSummaryProto> for ContentSummary {
    fn from(proto: ContentSummaryProto) -> Self {
        Self {
            length: proto.get_length(),
            file_count: proto.get_fileCount(),
            directory_count: proto.get_directoryCount(),
            quota: proto.get_quota(),
            space_consumed: proto.get_spaceConsumed(),
            space_quota: proto.get_spaceQuota(),
        }
    }
}

/// `df` summary of the whole filesystem.
pub struct FsStats {
    pub capacity: u64,
    pub used: u64,
    pub remaining: u64,
    pub under_replicated: u64,
    pub corrupt_blocks: u64,
    pub missing_blocks: u64,
}

impl From<GetFsStatusResponseProto> for FsStats {
    fn from(proto: GetFsStatusResponseProto) -> Self {
        Self {
            capacity: proto.get_capacity(),
            used: proto.get_used(),
            remaining: proto.get_remaining(),
            under_replicated: proto.get_under_replicated(),
            corrupt_blocks: proto.get_corrupt_blocks(),
            missing_blocks: proto.get_missing_blocks(),
        }
    }
}
