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
use std::fmt::Debug;
use std::io::{self, Write};
use std::net::TcpStream;
use std::net::ToSocketAddrs;
use std::time::Duration;

use protobuf::{CodedOutputStream, Message};
use thiserror::Error;
use tracing::{instrument, trace};

use hdfesse_proto::IpcConnectionContext::{IpcConnectionContextProto, UserInformationProto};
use hdfesse_proto::ProtobufRpcEngine::RequestHeaderProto;
use hdfesse_proto::RpcHeader::{
    RpcKindProto, RpcRequestHeaderProto, RpcRequestHeaderProto_OperationProto,
    RpcResponseHeaderProto, RpcResponseHeaderProto_RpcStatusProto,
};

use crate::auth::{AuthHook, NoneAuth};
use crate::framed::FramedReader;
use crate::varint::read_length_delimited;

pub use hdfesse_proto::RpcHeader::RpcResponseHeaderProto_RpcErrorCodeProto as RpcErrorCode;

const RPC_HEADER: &[u8; 4] = b"hrpc";
const RPC_VERSION: u8 = 9;
const CLIENT_PROTOCOL_NAME: &str = "org.apache.hadoop.hdfs.protocol.ClientProtocol";
const CLIENT_PROTOCOL_VERSION: u64 = 1;
const CONNECTION_CONTEXT_CALL_ID: i32 = -3;

/**
 * Creating a TCP connection.  This trait may implement different strategies
 * for connecting, including pooling (that recquires some kind of initialization
 * code to implement), exponentional retries, etc.
 */
pub trait Connector {
    type Error: std::error::Error + Debug;
    // async
    fn get_connection<T: ToSocketAddrs>(&self, addr: T) -> Result<TcpStream, Self::Error>;
}

/**
 * Simpliest implementation of connector without any retry, with an optional
 * connect timeout taken from the resolved configuration record.
 */
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleConnector {
    pub connect_timeout: Option<Duration>,
}

impl Connector for SimpleConnector {
    type Error = io::Error;
    // async
    fn get_connection<T: ToSocketAddrs>(&self, addr: T) -> Result<TcpStream, Self::Error> {
        match self.connect_timeout {
            Some(timeout) => {
                let addr = addr
                    .to_socket_addrs()?
                    .next()
                    .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no addresses"))?;
                TcpStream::connect_timeout(&addr, timeout)
            }
            None => TcpStream::connect(addr),
        }
    }
}

struct InfiniteSeq {
    val: i32,
}

impl InfiniteSeq {
    fn new() -> Self {
        Self {
            val: -1, // Sequence starts with 0.
        }
    }

    fn next(&mut self) -> i32 {
        // when used for call_id, negative numbers are rejected by the
        // HDFS.  So far we do not care.
        self.val += 1;
        self.val
    }
}

impl Default for InfiniteSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum RpcConnectError<CE: std::error::Error + Debug + 'static> {
    #[error(transparent)]
    Connector(CE),
    #[error(transparent)]
    Rpc(RpcError),
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Protobuf(#[from] protobuf::ProtobufError),
    #[error("{exception}: {message}")]
    ErrorResponse {
        error_detail: RpcErrorCode,
        exception: String,
        message: String,
    },
    #[error("exhausted failover/retry budget: {0}")]
    OutOfNameNodes(String),
}

/// Generic over "something that can make NameNode RPC calls", implemented
/// by a single `HdfsConnection` and by the HA dispatcher that wraps several.
pub trait RpcConnection {
    fn get_user(&self) -> &str;
    fn call<Output: Message>(
        &mut self,
        method: &str,
        input: &dyn Message,
    ) -> Result<Output, RpcError>;
}

/**
 * HDFS connection, i.e. connection to HDFS master NameNode. Generic over the
 * `AuthHook` that drives the handshake right after the auth-protocol byte;
 * defaults to `NoneAuth` so existing callers keep working unauthenticated.
 */
pub struct HdfsConnection<A = NoneAuth> {
    stream: TcpStream,
    call_id: InfiniteSeq,
    client_id: Vec<u8>,
    user: Box<str>,
    auth: A,
}

impl<A> Debug for HdfsConnection<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdfsConnection")
            .field("user", &self.user)
            .finish()
    }
}

impl<A: AuthHook<TcpStream> + Default> HdfsConnection<A> {
    /** Connect to HDFS master NameNode, creating a new HdfsConnection. */
    pub fn new<C: Connector, Addr: ToSocketAddrs>(
        addr: Addr,
        connector: &C,
    ) -> Result<Self, RpcConnectError<C::Error>> {
        Self::new_with_user(None, addr, connector)
    }

    pub fn new_with_user<C: Connector, Addr: ToSocketAddrs>(
        user: Option<&str>,
        addr: Addr,
        connector: &C,
    ) -> Result<Self, RpcConnectError<C::Error>> {
        Self::new_with_auth(user, addr, connector, A::default())
    }
}

impl<A: AuthHook<TcpStream>> HdfsConnection<A> {
    /** Connect to HDFS master NameNode using an explicit auth hook instance
     * (e.g. a SASL implementation configured with a principal/keytab). */
    #[instrument(skip(connector, auth))]
    pub fn new_with_auth<C: Connector, Addr: ToSocketAddrs>(
        user: Option<&str>,
        addr: Addr,
        connector: &C,
        auth: A,
    ) -> Result<Self, RpcConnectError<C::Error>> {
        let stream = connector
            .get_connection(addr)
            .map_err(RpcConnectError::Connector)?;
        let user = match user {
            Some(u) => u.to_owned(),
            None => crate::util::get_username().unwrap_or_else(|_| "dr.who".to_owned()),
        };
        let client_id = uuid::Uuid::new_v4().as_bytes().to_vec();
        let mut conn = Self {
            stream,
            call_id: Default::default(),
            client_id,
            user: user.into_boxed_str(),
            auth,
        };
        conn.init_connection().map_err(RpcConnectError::Rpc)?;
        Ok(conn)
    }

    /// Closes the underlying socket. Called by the HA dispatcher after any
    /// non-`RequestError` failure, per the "close on non-request error"
    /// policy.
    pub fn shutdown(&self) {
        let _ = self.stream.shutdown(std::net::Shutdown::Both);
    }

    #[instrument(skip(self))]
    fn init_connection(&mut self) -> Result<(), RpcError> {
        self.stream.set_nodelay(true)?;
        {
            let mut cos = CodedOutputStream::new(&mut self.stream);
            cos.write_all(&RPC_HEADER[..])?;
            cos.write_all(&[
                RPC_VERSION,
                0x00, // service class
                self.auth.auth_protocol_byte(),
            ])?;
            cos.flush()?;
        }
        self.auth.negotiate(&mut self.stream)?;
        {
            let mut cos = CodedOutputStream::new(&mut self.stream);
            let mut hh = RpcRequestHeaderProto::default();
            hh.set_rpcKind(RpcKindProto::RPC_PROTOCOL_BUFFER);
            hh.set_rpcOp(RpcRequestHeaderProto_OperationProto::RPC_FINAL_PACKET);
            hh.set_callId(CONNECTION_CONTEXT_CALL_ID);
            hh.set_retryCount(-1);
            hh.set_clientId(self.client_id.clone());

            let mut cc = IpcConnectionContextProto::default();
            let mut user_info = UserInformationProto::default();
            user_info.set_effectiveUser(self.user.to_string());
            cc.set_userInfo(user_info);
            cc.set_protocol(CLIENT_PROTOCOL_NAME.to_owned());

            trace!(user = %self.user, "sending connection context");
            Self::send_message_group(&mut cos, &[&hh, &cc])?;
            cos.flush()?;
        }
        Ok(())
    }

    fn send_message_group(
        cos: &mut CodedOutputStream,
        messages: &[&dyn Message],
    ) -> Result<(), RpcError> {
        let header_len: u32 = messages
            .iter()
            .map(|msg| msg.compute_size())
            .map(|len| len + ::protobuf::rt::compute_raw_varint32_size(len))
            .sum();

        cos.write_all(&header_len.to_be_bytes())?;
        for msg in messages {
            msg.write_length_delimited_to(cos)?;
        }
        Ok(cos.flush()?)
    }

    fn read_response<Output: Message>(&mut self) -> Result<Output, RpcError> {
        let mut reader = FramedReader::new(&mut self.stream);
        let len_bytes = reader.read(4)?;
        let _total_len = u32::from_be_bytes([
            len_bytes[0],
            len_bytes[1],
            len_bytes[2],
            len_bytes[3],
        ]);
        let header_bytes = read_length_delimited(&mut reader)?;
        let resp_header = RpcResponseHeaderProto::parse_from_bytes(&header_bytes)?;

        match resp_header.get_status() {
            RpcResponseHeaderProto_RpcStatusProto::SUCCESS => {
                let payload = read_length_delimited(&mut reader)?;
                Ok(Output::parse_from_bytes(&payload)?)
            }
            _ => Err(RpcError::ErrorResponse {
                error_detail: resp_header.get_errorDetail(),
                exception: resp_header.get_exceptionClassName().to_owned(),
                message: resp_header.get_errorMsg().to_owned(),
            }),
        }
    }
}

impl<A: AuthHook<TcpStream>> RpcConnection for HdfsConnection<A> {
    fn get_user(&self) -> &str {
        &self.user
    }

    #[instrument(skip(self, input))]
    fn call<Output: Message>(
        &mut self,
        method: &str,
        input: &dyn Message,
    ) -> Result<Output, RpcError> {
        let call_id = self.call_id.next();

        let mut hh = RpcRequestHeaderProto::default();
        hh.set_rpcKind(RpcKindProto::RPC_PROTOCOL_BUFFER);
        hh.set_rpcOp(RpcRequestHeaderProto_OperationProto::RPC_FINAL_PACKET);
        hh.set_callId(call_id);
        hh.set_retryCount(-1);
        hh.set_clientId(self.client_id.clone());

        let mut req_header = RequestHeaderProto::default();
        req_header.set_methodName(method.to_owned());
        req_header.set_declaringClassProtocolName(CLIENT_PROTOCOL_NAME.to_owned());
        req_header.set_clientProtocolVersion(CLIENT_PROTOCOL_VERSION);

        trace!(call_id, method, "sending RPC call");
        {
            let mut cos = CodedOutputStream::new(&mut self.stream);
            Self::send_message_group(&mut cos, &[&hh, &req_header, input])?;
        }
        self.read_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_seq_starts_at_zero() {
        let mut seq = InfiniteSeq::new();
        assert_eq!(seq.next(), 0);
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
    }
}
