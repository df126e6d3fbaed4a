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

use hdfesse_proto::acl::FsPermissionProto;
use hdfesse_proto::hdfs::{HdfsFileStatusProto, HdfsFileStatusProto_FileType};
use protobuf::Message;

use crate::{
    errors::{HdfsError, OperationResult},
    fs_ls::LsGroupIterator,
    path::{glob, Path, UriResolver},
    reader::BlockReadCoordinator,
    rpc::{Connector, RpcConnection},
    service,
    status::{ContentSummary, FsStats, HdfsFileStatus, LocatedBlocks, ServerDefaults},
    trash::TrashPolicy,
};

const TOUCHZ_CLIENT_NAME: &str = "snakebite";
const CREATE_FLAG_CREATE: u32 = 0x01;
const CREATE_FLAG_OVERWRITE: u32 = 0x02;

/// The filesystem-shell-level API (§4.I): one method per `hdfs dfs`
/// subcommand, built on top of the NameNode RPC surface (`service`) and,
/// for reads, the DataNode block channel (`reader`/`datanode`).
///
/// Operations that take a single path (`stat`, `cat`, ...) return a plain
/// `Result`. Operations that the shell applies to several arguments at once
/// (`ls`, `rename`, `delete`, `chmod`, `mkdir`, `setrep`, `touchz`) take a
/// path list, expand globs/braces (§4.J) and recursion internally, and
/// report one `OperationResult` per affected path instead of failing the
/// whole call on the first error.
pub struct Hdfs<R: RpcConnection, C: Connector> {
    service: service::ClientNamenodeService<R>,
    resolve: UriResolver,
    connector: C,
    trash: TrashPolicy,
    use_datanode_hostname: bool,
    server_defaults: Option<ServerDefaults>,
}

impl<R: RpcConnection, C: Connector + Clone> Hdfs<R, C> {
    pub fn new(
        service: service::ClientNamenodeService<R>,
        resolve: UriResolver,
        connector: C,
        use_datanode_hostname: bool,
    ) -> Self {
        let trash = TrashPolicy::new(service.get_user().to_owned());
        Self {
            service,
            resolve,
            connector,
            trash,
            use_datanode_hostname,
            server_defaults: None,
        }
    }

    pub fn get_user(&self) -> &str {
        self.service.get_user()
    }

    /// Normalises and, when it contains brace/glob characters, expands a
    /// path argument into the list of concrete paths it matches (§4.J).
    fn expand_path(&mut self, path: &Path<'_>) -> Result<Vec<String>, HdfsError> {
        let resolved = self.resolve.resolve(path)?;
        let pattern = resolved.to_path_string();
        let mut out = Vec::new();
        for candidate in glob::expand_braces(&pattern) {
            if glob::has_glob_chars(&candidate) {
                out.extend(glob::expand_glob(&candidate, |dir| self.list_dir_names(dir))?);
            } else {
                out.push(candidate);
            }
        }
        Ok(out)
    }

    fn list_dir_names(&mut self, dir: &str) -> Result<Vec<String>, HdfsError> {
        Ok(self
            .get_all_listing(dir)?
            .into_iter()
            .map(|e| String::from_utf8_lossy(e.get_path()).into_owned())
            .collect())
    }

    /// Drains one directory's paged `getListing` groups into an owned
    /// `Vec`, so the caller's borrow of `self.service` ends here rather
    /// than living across any further (possibly recursive) calls.
    fn get_all_listing(&mut self, dir: &str) -> Result<Vec<HdfsFileStatusProto>, HdfsError> {
        let mut out = Vec::new();
        for group in LsGroupIterator::new(&mut self.service, dir) {
            let (_, entries) = group?;
            out.extend(entries);
        }
        Ok(out)
    }

    /// Stats `path` and, when it is a directory and `include_children` is
    /// set, its listing too, descending further while `recurse` holds.
    /// Returns `path` itself first, then any children in listing order.
    fn walk(
        &mut self,
        path: &str,
        recurse: bool,
        include_children: bool,
    ) -> Result<Vec<(String, HdfsFileStatusProto)>, HdfsError> {
        let status = self
            .service
            .getFileInfo(path.to_owned())?
            .ok_or_else(|| HdfsError::FileNotFound(path.to_owned()))?;
        let isdir = status.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR;
        let mut out = vec![(path.to_owned(), status)];
        if isdir && include_children {
            self.walk_children(path, recurse, &mut out)?;
        }
        Ok(out)
    }

    fn walk_children(
        &mut self,
        dir: &str,
        recurse: bool,
        out: &mut Vec<(String, HdfsFileStatusProto)>,
    ) -> Result<(), HdfsError> {
        for entry in self.get_all_listing(dir)? {
            let name = String::from_utf8_lossy(entry.get_path()).into_owned();
            let child_path = if dir.ends_with('/') {
                format!("{}{}", dir, name)
            } else {
                format!("{}/{}", dir, name)
            };
            let child_isdir = entry.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR;
            out.push((child_path.clone(), entry));
            if recurse && child_isdir {
                self.walk_children(&child_path, recurse, out)?;
            }
        }
        Ok(())
    }

    /// Expands each of `paths`, walks it (per `recurse`), and runs `op`
    /// against every path `walk` turns up, skipping whichever `op` itself
    /// chooses not to report (e.g. `setrep` skipping directories).
    fn batch(
        &mut self,
        paths: &[Path<'_>],
        recurse: bool,
        mut op: impl FnMut(&mut Self, &str, &HdfsFileStatusProto) -> Option<OperationResult>,
    ) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.expand_path(path) {
                Ok(expanded) => {
                    for src in expanded {
                        match self.walk(&src, recurse, recurse) {
                            Ok(entries) => {
                                for (p, status) in entries {
                                    if let Some(r) = op(self, &p, &status) {
                                        out.push(r);
                                    }
                                }
                            }
                            Err(e) => out.push(OperationResult::failure(src, e.to_string())),
                        }
                    }
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    fn bool_result(path: impl Into<Box<str>>, ok: bool) -> OperationResult {
        if ok {
            OperationResult::ok(path)
        } else {
            OperationResult::failure(path, "operation returned false")
        }
    }

    fn status_result(path: String, status: &HdfsFileStatusProto) -> OperationResult {
        let result = OperationResult::ok(path);
        match status.write_to_bytes() {
            Ok(bytes) => result.with_response(bytes),
            Err(_) => result,
        }
    }

    /// `ls`: for each resolved/expanded path, stats it; emits the path
    /// itself when it is a file or `include_toplevel` is set, and its
    /// children (recursively, when `recurse` is set) when it is a
    /// directory and `include_children` is set (§4.I/§4.J).
    pub fn ls(
        &mut self,
        paths: &[Path<'_>],
        recurse: bool,
        include_toplevel: bool,
        include_children: bool,
    ) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.expand_path(path) {
                Ok(expanded) => {
                    for src in expanded {
                        match self.walk(&src, recurse, include_children) {
                            Ok(entries) => {
                                for (i, (p, status)) in entries.into_iter().enumerate() {
                                    let isdir =
                                        status.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR;
                                    if i > 0 || !isdir || include_toplevel {
                                        out.push(Self::status_result(p, &status));
                                    }
                                }
                            }
                            Err(e) => out.push(OperationResult::failure(src, e.to_string())),
                        }
                    }
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    pub fn get_file_info(&mut self, src: &Path<'_>) -> Result<HdfsFileStatusProto, HdfsError> {
        let src = self.resolve.resolve(src)?;

        self.service
            .getFileInfo(src.to_path_string())?
            .ok_or_else(|| HdfsError::FileNotFound(src.to_path_string()))
    }

    pub fn stat(&mut self, src: &Path<'_>) -> Result<HdfsFileStatus, HdfsError> {
        Ok(self.get_file_info(src)?.into())
    }

    pub fn exists(&mut self, src: &Path<'_>) -> Result<bool, HdfsError> {
        match self.get_file_info(src) {
            Ok(_) => Ok(true),
            Err(HdfsError::FileNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn is_directory(&mut self, src: &Path<'_>) -> Result<bool, HdfsError> {
        Ok(self.stat(src)?.isdir)
    }

    pub fn is_file(&mut self, src: &Path<'_>) -> Result<bool, HdfsError> {
        Ok(!self.stat(src)?.isdir)
    }

    pub fn is_zero_length(&mut self, src: &Path<'_>) -> Result<bool, HdfsError> {
        Ok(self.stat(src)?.length == 0)
    }

    /// `rename(srcs, dst)`: one RPC per src, against a single resolved
    /// destination.
    pub fn rename(&mut self, srcs: &[Path<'_>], dst: &Path<'_>) -> Vec<OperationResult> {
        let dst_string = match self.resolve.resolve(dst) {
            Ok(resolved) => resolved.to_path_string(),
            Err(e) => {
                let msg = HdfsError::from(e).to_string();
                return srcs
                    .iter()
                    .map(|s| OperationResult::failure(s.to_string(), msg.clone()))
                    .collect();
            }
        };
        let mut out = Vec::new();
        for src in srcs {
            out.push(match self.rename_one(src, &dst_string) {
                Ok(r) => r,
                Err(e) => OperationResult::failure(src.to_string(), e.to_string()),
            });
        }
        out
    }

    fn rename_one(&mut self, src: &Path<'_>, dst_string: &str) -> Result<OperationResult, HdfsError> {
        let src_string = self.resolve.resolve(src)?.to_path_string();
        let result = self.service.rename(src_string.clone(), dst_string.to_owned())?;
        Ok(Self::bool_result(src_string, result).with_source(dst_string.to_owned()))
    }

    pub fn rename2(&mut self, src: &Path, dst: &Path<'_>, overwrite: bool) -> Result<(), HdfsError> {
        let src = self.resolve.resolve(src)?;
        let dst = self.resolve.resolve(dst)?;

        Ok(self
            .service
            .rename2(src.to_path_string(), dst.to_path_string(), overwrite)?)
    }

    /// Deletes `path`, moving it into `/user/<user>/.Trash/Current` first
    /// unless `use_trash` is false or the trash policy says otherwise
    /// (§4.L: deleting the trash root itself, or a path inside it, is
    /// always a hard delete). Raises a directory error when `recurse` is
    /// false and the target is a directory (§4.I).
    pub fn delete(&mut self, paths: &[Path<'_>], recurse: bool, use_trash: bool) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.expand_path(path) {
                Ok(expanded) => {
                    for src in expanded {
                        out.push(match self.delete_one(&src, recurse, use_trash) {
                            Ok(r) => r,
                            Err(e) => OperationResult::failure(src, e.to_string()),
                        });
                    }
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    fn delete_one(
        &mut self,
        path_string: &str,
        recurse: bool,
        use_trash: bool,
    ) -> Result<OperationResult, HdfsError> {
        if !recurse {
            if let Some(status) = self.service.getFileInfo(path_string.to_owned())? {
                if status.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR {
                    return Err(HdfsError::Directory(format!("`{}': Is a directory", path_string)));
                }
            }
        }

        if self.trash.is_enabled(path_string, use_trash) {
            let dest = {
                let service = &mut self.service;
                self.trash.destination_for(path_string, |candidate| -> Result<bool, HdfsError> {
                    Ok(service.getFileInfo(candidate.to_owned())?.is_some())
                })?
            };
            self.mkdirs_for_trash(&dest)?;
            let result = self.service.rename(path_string.to_owned(), dest.clone())?;
            Ok(Self::bool_result(path_string.to_owned(), result).with_source(dest))
        } else {
            let result = self.service.delete(path_string.to_owned(), recurse)?;
            Ok(Self::bool_result(path_string.to_owned(), result))
        }
    }

    fn mkdirs_for_trash(&mut self, dest: &str) -> Result<(), HdfsError> {
        if let Some((parent, _)) = dest.rsplit_once('/') {
            if !parent.is_empty() {
                let mut masked = FsPermissionProto::new();
                masked.set_perm(0o755);
                self.service.mkdirs(parent.to_owned(), masked, true)?;
            }
        }
        Ok(())
    }

    /// `rmdir(paths)`: requires each target to be an empty directory, then
    /// hard-deletes it (§4.I).
    pub fn rmdir(&mut self, paths: &[Path<'_>]) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.expand_path(path) {
                Ok(expanded) => {
                    for src in expanded {
                        out.push(match self.rmdir_one(&src) {
                            Ok(r) => r,
                            Err(e) => OperationResult::failure(src, e.to_string()),
                        });
                    }
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    fn rmdir_one(&mut self, path_string: &str) -> Result<OperationResult, HdfsError> {
        let status = self
            .service
            .getFileInfo(path_string.to_owned())?
            .ok_or_else(|| HdfsError::FileNotFound(path_string.to_owned()))?;
        if status.get_fileType() != HdfsFileStatusProto_FileType::IS_DIR {
            return Err(HdfsError::Directory(format!("`{}': Not a directory", path_string)));
        }
        if !self.get_all_listing(path_string)?.is_empty() {
            return Err(HdfsError::Directory(format!(
                "`{}': Directory is not empty",
                path_string
            )));
        }
        self.delete_one(path_string, true, false)
    }

    /// `mkdir(paths, create_parent, mode)`: a pre-existing path is
    /// reported as a failed `OperationResult` rather than an RPC error
    /// (§4.I).
    pub fn mkdir(&mut self, paths: &[Path<'_>], create_parent: bool, mode: u16) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.expand_path(path) {
                Ok(expanded) => {
                    for src in expanded {
                        out.push(self.mkdir_one(&src, create_parent, mode));
                    }
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    fn mkdir_one(&mut self, path_string: &str, create_parent: bool, mode: u16) -> OperationResult {
        match self.service.getFileInfo(path_string.to_owned()) {
            Ok(Some(_)) => return OperationResult::failure(path_string.to_owned(), "File exists"),
            Ok(None) => {}
            Err(e) => return OperationResult::failure(path_string.to_owned(), HdfsError::from(e).to_string()),
        }
        let mut masked = FsPermissionProto::new();
        masked.set_perm(mode as u32);
        match self.service.mkdirs(path_string.to_owned(), masked, create_parent) {
            Ok(result) => Self::bool_result(path_string.to_owned(), result),
            Err(e) => OperationResult::failure(path_string.to_owned(), HdfsError::from(e).to_string()),
        }
    }

    /// `touchz(paths, replication?, blocksize?)`: creates an empty file via
    /// `create`+`complete`, following the same RPC sequence and defaults as
    /// the reference client (§4.I). Existing non-empty files and
    /// directories are reported as failed `OperationResult`s rather than
    /// silently clobbered.
    pub fn touchz(
        &mut self,
        paths: &[Path<'_>],
        replication: Option<u32>,
        blocksize: Option<u64>,
    ) -> Vec<OperationResult> {
        let mut out = Vec::new();
        for path in paths {
            match self.resolve.resolve(path) {
                Ok(resolved) => {
                    let path_string = resolved.to_path_string();
                    out.push(match self.touchz_one(&path_string, replication, blocksize) {
                        Ok(r) => r,
                        Err(e) => OperationResult::failure(path_string, e.to_string()),
                    });
                }
                Err(e) => out.push(OperationResult::failure(path.to_string(), e.to_string())),
            }
        }
        out
    }

    fn touchz_one(
        &mut self,
        path_string: &str,
        replication: Option<u32>,
        blocksize: Option<u64>,
    ) -> Result<OperationResult, HdfsError> {
        let create_flag = match self.service.getFileInfo(path_string.to_owned())? {
            Some(status) if status.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR => {
                return Err(HdfsError::Directory(format!("`{}': Is a directory", path_string)));
            }
            Some(status) if status.get_length() > 0 => {
                return Err(HdfsError::File(format!("`{}': File exists", path_string)));
            }
            Some(_) => CREATE_FLAG_OVERWRITE,
            None => CREATE_FLAG_CREATE,
        };

        let (default_replication, default_block_size) = {
            let defaults = self.server_defaults()?;
            (defaults.replication, defaults.block_size)
        };

        let mut masked = FsPermissionProto::new();
        masked.set_perm(0o644);
        self.service.create(
            path_string.to_owned(),
            masked,
            TOUCHZ_CLIENT_NAME.to_owned(),
            create_flag,
            false,
            replication.unwrap_or(default_replication),
            blocksize.unwrap_or(default_block_size),
        )?;
        let result = self
            .service
            .complete(path_string.to_owned(), TOUCHZ_CLIENT_NAME.to_owned())?;
        Ok(Self::bool_result(path_string.to_owned(), result))
    }

    /// `setrep(paths, replication, recurse)`: applies only to files,
    /// silently skipping directories found while descending (§4.I).
    pub fn setrep(&mut self, paths: &[Path<'_>], replication: u32, recurse: bool) -> Vec<OperationResult> {
        self.batch(paths, recurse, move |this, p, status| {
            if status.get_fileType() == HdfsFileStatusProto_FileType::IS_DIR {
                return None;
            }
            Some(match this.service.setReplication(p.to_owned(), replication) {
                Ok(result) => Self::bool_result(p.to_owned(), result),
                Err(e) => OperationResult::failure(p.to_owned(), HdfsError::from(e).to_string()),
            })
        })
    }

    /// `chmod(paths, perm, recurse)`: one `setPermission` RPC per path;
    /// `recurse` includes the top-level path itself (§4.I).
    pub fn chmod(&mut self, paths: &[Path<'_>], perm: u16, recurse: bool) -> Vec<OperationResult> {
        self.batch(paths, recurse, move |this, p, _status| {
            let mut proto = FsPermissionProto::new();
            proto.set_perm(perm as u32);
            Some(match this.service.setPermission(p.to_owned(), proto) {
                Ok(()) => OperationResult::ok(p.to_owned()),
                Err(e) => OperationResult::failure(p.to_owned(), HdfsError::from(e).to_string()),
            })
        })
    }

    /// `chown(paths, owner, group, recurse)`: one `setOwner` RPC per path.
    pub fn chown(
        &mut self,
        paths: &[Path<'_>],
        owner: Option<&str>,
        group: Option<&str>,
        recurse: bool,
    ) -> Vec<OperationResult> {
        self.batch(paths, recurse, move |this, p, _status| {
            Some(
                match this
                    .service
                    .setOwner(p.to_owned(), owner.map(str::to_owned), group.map(str::to_owned))
                {
                    Ok(()) => OperationResult::ok(p.to_owned()),
                    Err(e) => OperationResult::failure(p.to_owned(), HdfsError::from(e).to_string()),
                },
            )
        })
    }

    pub fn chgrp(&mut self, paths: &[Path<'_>], group: &str, recurse: bool) -> Vec<OperationResult> {
        self.chown(paths, None, Some(group), recurse)
    }

    /// Cached server-side write defaults (block size, checksum type, ...).
    pub fn server_defaults(&mut self) -> Result<&ServerDefaults, HdfsError> {
        if self.server_defaults.is_none() {
            let proto = self.service.getServerDefaults()?;
            self.server_defaults = Some(proto.into());
        }
        Ok(self.server_defaults.as_ref().unwrap())
    }

    pub fn content_summary(&mut self, path: &Path<'_>) -> Result<ContentSummary, HdfsError> {
        let resolved = self.resolve.resolve(path)?;
        Ok(self.service.getContentSummary(resolved.to_path_string())?.into())
    }

    /// `du`: the length consumed by `path`'s subtree.
    pub fn du(&mut self, path: &Path<'_>) -> Result<u64, HdfsError> {
        Ok(self.content_summary(path)?.length)
    }

    /// `df`: overall filesystem capacity/usage.
    pub fn df(&mut self) -> Result<FsStats, HdfsError> {
        Ok(self.service.getFsStats()?.into())
    }

    fn block_locations(&mut self, src: &str, length: u64) -> Result<Vec<crate::status::LocatedBlock>, HdfsError> {
        Ok(self
            .service
            .getBlockLocations(src.to_owned(), 0, length)?
            .map(LocatedBlocks::from)
            .map(|l| l.block_list)
            .unwrap_or_default())
    }

    /// Opens `path` for reading, returning a `Read` implementation that
    /// streams bytes `[start_offset, start_offset + length)` from the
    /// DataNodes that hold it (§4.H).
    pub fn open(
        &mut self,
        path: &Path<'_>,
        start_offset: u64,
        length: Option<u64>,
        check_crc: bool,
    ) -> Result<BlockReadCoordinator<C>, HdfsError> {
        let resolved = self.resolve.resolve(path)?;
        let status = self.get_file_info(&resolved)?;
        let file_length = status.get_length();
        let end_offset = length
            .map(|len| (start_offset + len).min(file_length))
            .unwrap_or(file_length);

        let blocks = self.block_locations(&resolved.to_path_string(), file_length)?;
        Ok(BlockReadCoordinator::new(
            blocks,
            start_offset,
            end_offset,
            self.connector.clone(),
            check_crc,
            self.use_datanode_hostname,
        ))
    }

    pub fn cat(&mut self, path: &Path<'_>) -> Result<BlockReadCoordinator<C>, HdfsError> {
        self.open(path, 0, None, true)
    }

    /// `tail`: the last `length` bytes of the file (default 1024), per
    /// §4.H's tail offset math.
    pub fn tail(&mut self, path: &Path<'_>, length: u64) -> Result<BlockReadCoordinator<C>, HdfsError> {
        let resolved = self.resolve.resolve(path)?;
        let status = self.get_file_info(&resolved)?;
        let file_length = status.get_length();
        let start_offset = file_length.saturating_sub(length);
        self.open(&resolved, start_offset, None, true)
    }

    pub fn copy_to_local(&mut self, src: &Path<'_>, dst: &std::path::Path) -> Result<u64, HdfsError> {
        let mut reader = self.cat(src)?;
        let mut file = std::fs::File::create(dst)?;
        Ok(io::copy(&mut reader, &mut file)?)
    }

    /// `getmerge`: concatenates `srcs` in order into one local file,
    /// optionally separating each with a trailing newline.
    pub fn getmerge(
        &mut self,
        srcs: &[Path<'_>],
        dst: &std::path::Path,
        add_newline: bool,
    ) -> Result<u64, HdfsError> {
        let mut file = std::fs::File::create(dst)?;
        let mut total = 0u64;
        for src in srcs {
            let mut reader = self.cat(src)?;
            total += io::copy(&mut reader, &mut file)?;
            if add_newline {
                file.write_all(b"\n")?;
                total += 1;
            }
        }
        Ok(total)
    }

    #[inline]
    pub fn shutdown(self) -> Result<(), HdfsError> {
        Ok(self.service.shutdown()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{RpcError, SimpleConnector};
    use hdfesse_proto::ClientNamenodeProtocol::{
        GetFileInfoResponseProto, GetListingResponseProto, MkdirsRequestProto, RenameRequestProto,
        SetOwnerRequestProto,
    };
    use protobuf::ProtobufEnum;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    struct FakeConn {
        responses: VecDeque<Vec<u8>>,
        calls: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
    }

    impl FakeConn {
        fn new() -> (Self, Rc<RefCell<Vec<(String, Vec<u8>)>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    responses: VecDeque::new(),
                    calls: calls.clone(),
                },
                calls,
            )
        }

        fn push_response(mut self, msg: &dyn Message) -> Self {
            self.responses.push_back(msg.write_to_bytes().unwrap());
            self
        }
    }

    impl RpcConnection for FakeConn {
        fn get_user(&self) -> &str {
            "tester"
        }

        fn call<Output: Message>(&mut self, method: &str, input: &dyn Message) -> Result<Output, RpcError> {
            self.calls
                .borrow_mut()
                .push((method.to_owned(), input.write_to_bytes().unwrap()));
            match self.responses.pop_front() {
                Some(bytes) => Ok(Output::parse_from_bytes(&bytes)?),
                None => Ok(Output::new()),
            }
        }
    }

    fn hdfs(conn: FakeConn) -> Hdfs<FakeConn, SimpleConnector> {
        let resolve = UriResolver::new("localhost", "tester", None, None).unwrap();
        Hdfs::new(
            service::ClientNamenodeService::new(conn),
            resolve,
            SimpleConnector::default(),
            false,
        )
    }

    fn encode_varint(mut v: u64, out: &mut Vec<u8>) {
        loop {
            let mut b = (v & 0x7f) as u8;
            v >>= 7;
            if v != 0 {
                b |= 0x80;
            }
            out.push(b);
            if v == 0 {
                break;
            }
        }
    }

    // Wraps `payload` as field 1 (length-delimited) of some enclosing
    // message, for response protos whose single message field has no
    // public setter.
    fn wrap_as_field1(payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x0a];
        encode_varint(payload.len() as u64, &mut bytes);
        bytes.extend_from_slice(payload);
        bytes
    }

    fn file_status(file_type: HdfsFileStatusProto_FileType, length: u64) -> GetFileInfoResponseProto {
        let mut status = HdfsFileStatusProto::new();
        status.fileType = Some(file_type);
        status.length = Some(length);
        let bytes = wrap_as_field1(&status.write_to_bytes().unwrap());
        GetFileInfoResponseProto::parse_from_bytes(&bytes).unwrap()
    }

    // `HdfsFileStatusProto::path` has no public setter (generated as a
    // private `SingularField`), so entries that need a real child name
    // are built from raw field bytes instead.
    fn status_with_path(file_type: HdfsFileStatusProto_FileType, path: &str) -> HdfsFileStatusProto {
        let mut bytes = vec![0x08];
        encode_varint(file_type.value() as u64, &mut bytes);
        bytes.push(0x12);
        encode_varint(path.len() as u64, &mut bytes);
        bytes.extend_from_slice(path.as_bytes());
        HdfsFileStatusProto::parse_from_bytes(&bytes).unwrap()
    }

    fn listing_response(entries: &[HdfsFileStatusProto], remaining: u32) -> GetListingResponseProto {
        let mut dir_list = hdfesse_proto::ClientNamenodeProtocol::DirectoryListingProto::new();
        for entry in entries {
            dir_list.mut_partialListing().push(entry.clone());
        }
        dir_list.remainingEntries = Some(remaining);
        let bytes = wrap_as_field1(&dir_list.write_to_bytes().unwrap());
        GetListingResponseProto::parse_from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_exists_false_when_absent() {
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn);
        let path = Path::new("/missing").unwrap();
        assert_eq!(fs.exists(&path).unwrap(), false);
    }

    #[test]
    fn test_exists_true_when_present() {
        let resp = file_status(HdfsFileStatusProto_FileType::IS_FILE, 0);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/present").unwrap();
        assert_eq!(fs.exists(&path).unwrap(), true);
    }

    #[test]
    fn test_is_directory() {
        let resp = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/a/dir").unwrap();
        assert!(fs.is_directory(&path).unwrap());
    }

    #[test]
    fn test_is_zero_length() {
        let resp = file_status(HdfsFileStatusProto_FileType::IS_FILE, 0);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/empty").unwrap();
        assert!(fs.is_zero_length(&path).unwrap());
    }

    #[test]
    fn test_ls_file_target_is_always_emitted() {
        let resp = file_status(HdfsFileStatusProto_FileType::IS_FILE, 42);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/a/file").unwrap();
        let results = fs.ls(&[path], false, false, false);
        assert_eq!(results.len(), 1);
        assert!(results[0].result);
        assert!(results[0].response.is_some());
    }

    #[test]
    fn test_ls_directory_lists_children_without_toplevel() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let child = status_with_path(HdfsFileStatusProto_FileType::IS_FILE, "child");
        let listing = listing_response(&[child], 0);

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir).push_response(&listing));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.ls(&[path], false, false, true);

        assert_eq!(results.len(), 1);
        assert_eq!(&*results[0].path, "/a/dir/child");

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "getFileInfo");
        assert_eq!(calls[1].0, "getListing");
    }

    #[test]
    fn test_ls_directory_with_toplevel_includes_self() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let listing = listing_response(&[], 0);

        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir).push_response(&listing));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.ls(&[path], false, true, true);

        assert_eq!(results.len(), 1);
        assert_eq!(&*results[0].path, "/a/dir");
    }

    #[test]
    fn test_rename_renames_each_src() {
        let mut resp = hdfesse_proto::ClientNamenodeProtocol::RenameResponseProto::new();
        resp.result = Some(true);
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let srcs = [Path::new("/a/src").unwrap()];
        let dst = Path::new("/a/dst").unwrap();
        let results = fs.rename(&srcs, &dst);

        assert_eq!(results.len(), 1);
        assert!(results[0].result);
        assert_eq!(results[0].source_path.as_deref(), Some("/a/dst"));

        let calls = calls.borrow();
        let req = RenameRequestProto::parse_from_bytes(&calls[0].1).unwrap();
        assert_eq!(req.get_src(), "/a/src");
        assert_eq!(req.get_dst(), "/a/dst");
    }

    #[test]
    fn test_delete_directory_without_recurse_is_an_error() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.delete(&[path], false, false);

        assert_eq!(results.len(), 1);
        assert!(!results[0].result);
        assert!(results[0].error.is_some());

        // Only the directory-type check ran; no delete/rename was issued.
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_delete_with_trash_renames_into_current() {
        // getFileInfo(trash destination) -> absent, then delete performs a rename.
        let absent = GetFileInfoResponseProto::new();
        let mut rename_resp = hdfesse_proto::ClientNamenodeProtocol::RenameResponseProto::new();
        rename_resp.result = Some(true);
        let mkdirs_resp = hdfesse_proto::ClientNamenodeProtocol::MkdirsResponseProto::new();

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(
            conn.push_response(&absent)
                .push_response(&mkdirs_resp)
                .push_response(&rename_resp),
        );
        let path = Path::new("/a/file").unwrap();
        let results = fs.delete(&[path], false, true);

        assert_eq!(results.len(), 1);
        assert!(results[0].result, "{:?}", results[0].error);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, "getFileInfo");
        assert_eq!(calls[1].0, "mkdirs");
        assert_eq!(calls[2].0, "rename");

        let mkdirs_req = MkdirsRequestProto::parse_from_bytes(&calls[1].1).unwrap();
        assert_eq!(mkdirs_req.get_src(), "/user/tester/.Trash/Current/a");

        let rename_req = RenameRequestProto::parse_from_bytes(&calls[2].1).unwrap();
        assert_eq!(rename_req.get_src(), "/a/file");
        assert_eq!(rename_req.get_dst(), "/user/tester/.Trash/Current/a/file");
    }

    #[test]
    fn test_delete_inside_trash_is_a_hard_delete() {
        let mut resp = hdfesse_proto::ClientNamenodeProtocol::DeleteResponseProto::new();
        resp.result = Some(true);
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/user/tester/.Trash/Current/a/file").unwrap();
        let results = fs.delete(&[path], false, true);

        assert_eq!(results.len(), 1);
        assert!(results[0].result);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "delete");
    }

    #[test]
    fn test_rmdir_deletes_empty_directory() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let listing = listing_response(&[], 0);
        let mut delete_resp = hdfesse_proto::ClientNamenodeProtocol::DeleteResponseProto::new();
        delete_resp.result = Some(true);

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(
            conn.push_response(&dir)
                .push_response(&listing)
                .push_response(&delete_resp),
        );
        let path = Path::new("/a/dir").unwrap();
        let results = fs.rmdir(&[path]);

        assert_eq!(results.len(), 1);
        assert!(results[0].result, "{:?}", results[0].error);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, "getFileInfo");
        assert_eq!(calls[1].0, "getListing");
        assert_eq!(calls[2].0, "delete");
    }

    #[test]
    fn test_rmdir_refuses_non_empty_directory() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let child = status_with_path(HdfsFileStatusProto_FileType::IS_FILE, "child");
        let listing = listing_response(&[child], 0);

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir).push_response(&listing));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.rmdir(&[path]);

        assert_eq!(results.len(), 1);
        assert!(!results[0].result);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_mkdir_reports_existing_path_as_failure() {
        let resp = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.mkdir(&[path], true, 0o755);

        assert_eq!(results.len(), 1);
        assert!(!results[0].result);
        assert_eq!(results[0].error.as_deref(), Some("File exists"));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_touchz_creates_new_file() {
        let absent = GetFileInfoResponseProto::new();
        let mut server_defaults = hdfesse_proto::hdfs::FsServerDefaultsProto::new();
        server_defaults.blockSize = Some(128);
        server_defaults.replication = Some(3);
        let defaults_bytes = wrap_as_field1(&server_defaults.write_to_bytes().unwrap());
        let defaults_resp =
            hdfesse_proto::ClientNamenodeProtocol::GetServerDefaultsResponseProto::parse_from_bytes(&defaults_bytes)
                .unwrap();
        let create_resp = hdfesse_proto::ClientNamenodeProtocol::CreateResponseProto::new();
        let mut complete_resp = hdfesse_proto::ClientNamenodeProtocol::CompleteResponseProto::new();
        complete_resp.result = Some(true);

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(
            conn.push_response(&absent)
                .push_response(&defaults_resp)
                .push_response(&create_resp)
                .push_response(&complete_resp),
        );
        let path = Path::new("/new-file").unwrap();
        let results = fs.touchz(&[path], None, None);

        assert_eq!(results.len(), 1);
        assert!(results[0].result, "{:?}", results[0].error);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0].0, "getFileInfo");
        assert_eq!(calls[1].0, "getServerDefaults");
        assert_eq!(calls[2].0, "create");
        assert_eq!(calls[3].0, "complete");
    }

    #[test]
    fn test_touchz_rejects_directory() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir));
        let path = Path::new("/a/dir").unwrap();
        let results = fs.touchz(&[path], None, None);

        assert_eq!(results.len(), 1);
        assert!(!results[0].result);
    }

    #[test]
    fn test_touchz_rejects_nonempty_file() {
        let present = file_status(HdfsFileStatusProto_FileType::IS_FILE, 10);
        let (conn, _calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&present));
        let path = Path::new("/a/file").unwrap();
        let results = fs.touchz(&[path], None, None);

        assert_eq!(results.len(), 1);
        assert!(!results[0].result);
    }

    #[test]
    fn test_chgrp_only_sets_groupname() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_FILE, 0);
        let resp = hdfesse_proto::ClientNamenodeProtocol::SetOwnerResponseProto::new();
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&dir).push_response(&resp));
        let path = Path::new("/a/file").unwrap();
        let results = fs.chgrp(&[path], "wheel", false);
        assert_eq!(results.len(), 1);
        assert!(results[0].result);

        let calls = calls.borrow();
        let req = SetOwnerRequestProto::parse_from_bytes(&calls[1].1).unwrap();
        assert_eq!(req.get_username(), "");
        assert_eq!(req.get_groupname(), "wheel");
    }

    #[test]
    fn test_setrep_skips_directories() {
        let dir = file_status(HdfsFileStatusProto_FileType::IS_DIR, 0);
        let child = status_with_path(HdfsFileStatusProto_FileType::IS_FILE, "child");
        let listing = listing_response(&[child], 0);
        let mut setrep_resp = hdfesse_proto::ClientNamenodeProtocol::SetReplicationResponseProto::new();
        setrep_resp.result = Some(true);

        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(
            conn.push_response(&dir)
                .push_response(&listing)
                .push_response(&setrep_resp),
        );
        let path = Path::new("/a/dir").unwrap();
        let results = fs.setrep(&[path], 2, true);

        // The directory itself never produces an OperationResult.
        assert_eq!(results.len(), 1);
        assert_eq!(&*results[0].path, "/a/dir/child");

        let calls = calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].0, "setReplication");
    }

    #[test]
    fn test_server_defaults_is_cached() {
        let mut proto = hdfesse_proto::hdfs::FsServerDefaultsProto::new();
        proto.blockSize = Some(128);
        let bytes = wrap_as_field1(&proto.write_to_bytes().unwrap());
        let resp =
            hdfesse_proto::ClientNamenodeProtocol::GetServerDefaultsResponseProto::parse_from_bytes(&bytes).unwrap();
        let (conn, calls) = FakeConn::new();
        let mut fs = hdfs(conn.push_response(&resp));

        fs.server_defaults().unwrap();
        fs.server_defaults().unwrap();
        assert_eq!(calls.borrow().len(), 1);
    }
}
