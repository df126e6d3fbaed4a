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

use thiserror::Error;

use crate::path::PathError;

/// NameNode-reported exception: carries the remote exception class name
/// and message, verbatim as they appeared in `RpcResponseHeaderProto`.
#[derive(Debug, Error)]
#[error("{class_name}: {message}")]
pub struct RequestError {
    pub class_name: String,
    pub message: String,
}

impl RequestError {
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.into(),
        }
    }

    pub fn is_standby(&self) -> bool {
        self.class_name == "org.apache.hadoop.ipc.StandbyException"
    }

    pub fn is_retriable(&self) -> bool {
        self.class_name == "org.apache.hadoop.ipc.RetriableException"
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("timed out")]
    Timeout,
}

impl TransportError {
    /// errno classes that the HA dispatcher treats as failover triggers.
    pub fn is_failover_eligible(&self) -> bool {
        match self {
            TransportError::Timeout => true,
            TransportError::Io(e) => {
                e.kind() == io::ErrorKind::ConnectionRefused
                    || e.raw_os_error() == Some(errno::ECONNREFUSED)
                    || e.raw_os_error() == Some(errno::EHOSTUNREACH)
            }
        }
    }
}

/// A tiny local stand-in for the handful of errno constants we classify on;
/// avoids pulling in the `libc` crate for two numbers.
mod errno {
    pub const ECONNREFUSED: i32 = 111;
    pub const EHOSTUNREACH: i32 = 113;
}

#[derive(Debug, Error)]
pub enum HdfsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("file already exists: {0}")]
    FileAlreadyExists(String),
    #[error("directory error: {0}")]
    Directory(String),
    #[error("file error: {0}")]
    File(String),
    #[error("connection failure to datanode: {0}")]
    ConnectionFailure(String),
    #[error("checksum mismatch at chunk offset {offset}")]
    Checksum { offset: u64 },
    #[error("block read failed for block {block_id}: all replicas exhausted")]
    BlockRead { block_id: u64 },
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("exhausted failover/retry budget: {0}")]
    OutOfNameNodes(String),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Protobuf(#[from] protobuf::ProtobufError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<crate::rpc::RpcError> for HdfsError {
    fn from(e: crate::rpc::RpcError) -> Self {
        match e {
            crate::rpc::RpcError::IO(e) => HdfsError::Transport(TransportError::Io(e)),
            crate::rpc::RpcError::Protobuf(e) => HdfsError::Protobuf(e),
            crate::rpc::RpcError::ErrorResponse {
                exception, message, ..
            } => HdfsError::Request(RequestError::new(exception, message)),
            crate::rpc::RpcError::OutOfNameNodes(msg) => HdfsError::OutOfNameNodes(msg),
        }
    }
}

/// Public shape for streaming operation results (ls, rename, delete, ...).
#[derive(Debug, Clone)]
pub struct OperationResult {
    pub path: Box<str>,
    pub result: bool,
    pub error: Option<Box<str>>,
    pub message: Option<Box<str>>,
    pub source_path: Option<Box<str>>,
    /// Serialized `HdfsFileStatusProto` bytes for a `ls` entry; unused by
    /// every other batch operation.
    pub response: Option<Vec<u8>>,
}

impl OperationResult {
    pub fn ok(path: impl Into<Box<str>>) -> Self {
        Self {
            path: path.into(),
            result: true,
            error: None,
            message: None,
            source_path: None,
            response: None,
        }
    }

    pub fn failure(path: impl Into<Box<str>>, error: impl Into<Box<str>>) -> Self {
        Self {
            path: path.into(),
            result: false,
            error: Some(error.into()),
            message: None,
            source_path: None,
            response: None,
        }
    }

    pub fn with_source(mut self, source_path: impl Into<Box<str>>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    pub fn with_response(mut self, response: Vec<u8>) -> Self {
        self.response = Some(response);
        self
    }
}
