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
use std::io::{Read, Write};

use crate::rpc::RpcError;

/// Reserved call-id for authentication frames during handshake (§4.E).
pub const AUTH_CALL_ID: i32 = -33;

/// Pluggable handshake state machine. The channel drives it once, right
/// after sending the auth-protocol byte, before building the connection
/// context. `NoneAuth` is the only implementation this crate ships; a SASL
/// implementation would plug into the same trait.
pub trait AuthHook<S: Read + Write> {
    /// 0x00 for none, 0xDF for SASL — written as the fourth handshake byte.
    fn auth_protocol_byte(&self) -> u8;

    /// Drives the handshake to completion. A no-op hook returns immediately.
    fn negotiate(&mut self, socket: &mut S) -> Result<(), RpcError>;

    /// Wraps an outgoing frame under the negotiated QOP, if any.
    fn wrap(&self, frame: Vec<u8>) -> Vec<u8> {
        frame
    }

    /// Unwraps an incoming frame under the negotiated QOP, if any.
    fn unwrap(&self, frame: Vec<u8>) -> Vec<u8> {
        frame
    }
}

/// No authentication: the handshake carries no SASL exchange at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoneAuth;

impl<S: Read + Write> AuthHook<S> for NoneAuth {
    fn auth_protocol_byte(&self) -> u8 {
        0x00
    }

    fn negotiate(&mut self, _socket: &mut S) -> Result<(), RpcError> {
        Ok(())
    }
}
