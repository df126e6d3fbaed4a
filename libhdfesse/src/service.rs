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
use hdfesse_proto::acl::FsPermissionProto;
use hdfesse_proto::hdfs::{ContentSummaryProto, FsServerDefaultsProto, HdfsFileStatusProto, LocatedBlocksProto};
use hdfesse_proto::ClientNamenodeProtocol::{
    CompleteRequestProto, CompleteResponseProto, CreateRequestProto, CreateResponseProto,
    DeleteRequestProto, DeleteResponseProto, GetBlockLocationsRequestProto,
    GetBlockLocationsResponseProto, GetContentSummaryRequestProto, GetContentSummaryResponseProto,
    GetFileInfoRequestProto, GetFileInfoResponseProto, GetFsStatusRequestProto,
    GetFsStatusResponseProto, GetListingRequestProto, GetListingResponseProto,
    GetServerDefaultsRequestProto, GetServerDefaultsResponseProto, MkdirsRequestProto,
    MkdirsResponseProto, Rename2RequestProto, RenameRequestProto, RenameResponseProto,
    SetOwnerRequestProto, SetOwnerResponseProto, SetPermissionRequestProto,
    SetPermissionResponseProto, SetReplicationRequestProto, SetReplicationResponseProto,
};

use crate::rpc::{RpcConnection, RpcError};

/// Thin typed wrapper over the `ClientProtocol` NameNode RPC surface:
/// one method per request/response pair, generic over the underlying
/// channel (a single connection or the HA dispatcher).
pub struct ClientNamenodeService<R> {
    conn: R,
}

impl<R: RpcConnection> ClientNamenodeService<R> {
    pub fn new(conn: R) -> Self {
        Self { conn }
    }

    pub fn get_user(&self) -> &str {
        self.conn.get_user()
    }

    pub fn shutdown(self) -> Result<(), RpcError> {
        Ok(())
    }

    #[allow(non_snake_case)]
    pub fn getFileInfo(&mut self, src: String) -> Result<Option<HdfsFileStatusProto>, RpcError> {
        let mut req = GetFileInfoRequestProto::new();
        req.set_src(src);
        let resp: GetFileInfoResponseProto = self.conn.call("getFileInfo", &req)?;
        Ok(if resp.has_fs() {
            Some(resp.get_fs().clone())
        } else {
            None
        })
    }

    #[allow(non_snake_case)]
    pub fn getListing(
        &mut self,
        src: String,
        startAfter: Vec<u8>,
        needLocation: bool,
    ) -> Result<GetListingResponseProto, RpcError> {
        let mut req = GetListingRequestProto::new();
        req.set_src(src);
        req.set_startAfter(startAfter);
        req.set_needLocation(needLocation);
        self.conn.call("getListing", &req)
    }

    pub fn rename(&mut self, src: String, dst: String) -> Result<bool, RpcError> {
        let mut req = RenameRequestProto::new();
        req.set_src(src);
        req.set_dst(dst);
        let resp: RenameResponseProto = self.conn.call("rename", &req)?;
        Ok(resp.get_result())
    }

    pub fn rename2(&mut self, src: String, dst: String, overwrite: bool) -> Result<(), RpcError> {
        let mut req = Rename2RequestProto::new();
        req.set_src(src);
        req.set_dst(dst);
        req.set_overwriteDest(overwrite);
        self.conn.call("rename2", &req)
    }

    pub fn delete(&mut self, src: String, recursive: bool) -> Result<bool, RpcError> {
        let mut req = DeleteRequestProto::new();
        req.set_src(src);
        req.set_recursive(recursive);
        let resp: DeleteResponseProto = self.conn.call("delete", &req)?;
        Ok(resp.get_result())
    }

    pub fn mkdirs(
        &mut self,
        src: String,
        masked: FsPermissionProto,
        create_parent: bool,
    ) -> Result<bool, RpcError> {
        let mut req = MkdirsRequestProto::new();
        req.set_src(src);
        req.set_masked(masked);
        req.set_createParent(create_parent);
        let resp: MkdirsResponseProto = self.conn.call("mkdirs", &req)?;
        Ok(resp.get_result())
    }

    #[allow(non_snake_case)]
    pub fn setReplication(&mut self, src: String, replication: u32) -> Result<bool, RpcError> {
        let mut req = SetReplicationRequestProto::new();
        req.set_src(src);
        req.set_replication(replication);
        let resp: SetReplicationResponseProto = self.conn.call("setReplication", &req)?;
        Ok(resp.get_result())
    }

    #[allow(non_snake_case)]
    pub fn setPermission(&mut self, src: String, permission: FsPermissionProto) -> Result<(), RpcError> {
        let mut req = SetPermissionRequestProto::new();
        req.set_src(src);
        req.set_permission(permission);
        let _: SetPermissionResponseProto = self.conn.call("setPermission", &req)?;
        Ok(())
    }

    #[allow(non_snake_case)]
    pub fn setOwner(
        &mut self,
        src: String,
        username: Option<String>,
        groupname: Option<String>,
    ) -> Result<(), RpcError> {
        let mut req = SetOwnerRequestProto::new();
        req.set_src(src);
        if let Some(username) = username {
            req.set_username(username);
        }
        if let Some(groupname) = groupname {
            req.set_groupname(groupname);
        }
        let _: SetOwnerResponseProto = self.conn.call("setOwner", &req)?;
        Ok(())
    }

    #[allow(non_snake_case)]
    pub fn getBlockLocations(
        &mut self,
        src: String,
        offset: u64,
        length: u64,
    ) -> Result<Option<LocatedBlocksProto>, RpcError> {
        let mut req = GetBlockLocationsRequestProto::new();
        req.set_src(src);
        req.set_offset(offset);
        req.set_length(length);
        let resp: GetBlockLocationsResponseProto = self.conn.call("getBlockLocations", &req)?;
        Ok(if resp.has_locations() {
            Some(resp.get_locations().clone())
        } else {
            None
        })
    }

    #[allow(non_snake_case)]
    pub fn getServerDefaults(&mut self) -> Result<FsServerDefaultsProto, RpcError> {
        let req = GetServerDefaultsRequestProto::new();
        let resp: GetServerDefaultsResponseProto = self.conn.call("getServerDefaults", &req)?;
        Ok(resp.get_serverDefaults().clone())
    }

    #[allow(non_snake_case)]
    pub fn getContentSummary(&mut self, path: String) -> Result<ContentSummaryProto, RpcError> {
        let mut req = GetContentSummaryRequestProto::new();
        req.set_path(path);
        let resp: GetContentSummaryResponseProto = self.conn.call("getContentSummary", &req)?;
        Ok(resp.get_summary().clone())
    }

    #[allow(non_snake_case)]
    pub fn getFsStats(&mut self) -> Result<GetFsStatusResponseProto, RpcError> {
        let req = GetFsStatusRequestProto::new();
        self.conn.call("getFsStats", &req)
    }

    /// Allocates a new file on the NameNode. `createFlag` follows the
    /// client's `0x01` (create) / `0x02` (overwrite) convention.
    pub fn create(
        &mut self,
        src: String,
        masked: FsPermissionProto,
        client_name: String,
        create_flag: u32,
        create_parent: bool,
        replication: u32,
        block_size: u64,
    ) -> Result<(), RpcError> {
        let mut req = CreateRequestProto::new();
        req.set_src(src);
        req.set_masked(masked);
        req.set_clientName(client_name);
        req.set_createFlag(create_flag);
        req.set_createParent(create_parent);
        req.set_replication(replication);
        req.set_blockSize(block_size);
        let _: CreateResponseProto = self.conn.call("create", &req)?;
        Ok(())
    }

    pub fn complete(&mut self, src: String, client_name: String) -> Result<bool, RpcError> {
        let mut req = CompleteRequestProto::new();
        req.set_src(src);
        req.set_clientName(client_name);
        let resp: CompleteResponseProto = self.conn.call("complete", &req)?;
        Ok(resp.get_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protobuf::Message;

    struct FakeConn {
        response: Option<Vec<u8>>,
    }

    impl RpcConnection for FakeConn {
        fn get_user(&self) -> &str {
            "tester"
        }

        fn call<Output: Message>(&mut self, _method: &str, _input: &dyn Message) -> Result<Output, RpcError> {
            match &self.response {
                Some(bytes) => Ok(Output::parse_from_bytes(bytes)?),
                None => Ok(Output::new()),
            }
        }
    }

    #[test]
    fn test_get_file_info_absent() {
        let mut svc = ClientNamenodeService::new(FakeConn { response: None });
        let result = svc.getFileInfo("/missing".to_owned()).unwrap();
        assert!(result.is_none());
    }
}
