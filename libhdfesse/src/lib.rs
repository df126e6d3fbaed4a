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
//! A native HDFS client: NameNode RPC, HA failover, DataNode block reads,
//! and the filesystem-shell-level operations built on top of them.

pub mod auth;
pub mod crc;
pub mod datanode;
pub mod errors;
pub mod framed;
pub mod fs;
pub mod fs_ls;
pub mod ha_rpc;
pub mod hdconfig;
pub mod path;
pub mod reader;
pub mod rpc;
pub mod service;
pub mod status;
pub mod trash;
pub(crate) mod util;
pub mod varint;
