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
/*!
 * High-availability RPC connection. Multiplexes calls across a list of
 * candidate NameNodes, failing over on standby indication and socket-level
 * failures, with independently bounded failover and retry budgets.
 */
use std::fmt::Debug;

use protobuf::Message;
use tracing::{instrument, trace};

use crate::{
    hdconfig,
    rpc::{Connector, HdfsConnection, RpcConnection, RpcError, RpcErrorCode},
    util,
};

pub const DEFAULT_MAX_FAILOVERS: usize = 15;
pub const DEFAULT_MAX_RETRIES: usize = 10;

enum Classification {
    Failover,
    Retry,
    Propagate,
    CloseAndPropagate,
}

fn classify(err: &RpcError) -> Classification {
    match err {
        RpcError::ErrorResponse { exception, .. }
            if exception == "org.apache.hadoop.ipc.StandbyException" =>
        {
            Classification::Failover
        }
        RpcError::ErrorResponse { exception, .. }
            if exception == "org.apache.hadoop.ipc.RetriableException" =>
        {
            Classification::Retry
        }
        RpcError::ErrorResponse { .. } => Classification::Propagate,
        RpcError::IO(e) => {
            let failover_eligible = e.kind() == std::io::ErrorKind::ConnectionRefused
                || e.kind() == std::io::ErrorKind::TimedOut
                || e.raw_os_error() == Some(111) // ECONNREFUSED
                || e.raw_os_error() == Some(113); // EHOSTUNREACH
            if failover_eligible {
                Classification::Failover
            } else {
                Classification::CloseAndPropagate
            }
        }
        RpcError::Protobuf(_) => Classification::CloseAndPropagate,
        RpcError::OutOfNameNodes(_) => Classification::Propagate,
    }
}

/**
* High-availability RPC connection.
*/
#[derive(Debug)]
pub struct HaHdfsConnection<C: Connector + Debug> {
    user: Box<str>,
    current: Option<HdfsConnection>,
    connector: C,
    addrs: Vec<String>,
    active: usize,
    max_failovers: usize,
    max_retries: usize,
    last_reasons: Vec<Option<String>>,
}

impl<C: Connector + Debug> HaHdfsConnection<C> {
    pub fn new(namenode: &hdconfig::NameserviceConfig, connector: C) -> Result<Self, RpcError> {
        let addrs: Vec<String> = namenode
            .rpc_nodes
            .iter()
            .map(|node| node.rpc_address.to_string())
            .collect();
        let n = addrs.len();
        Ok(Self {
            user: util::get_username()
                .map_err(|e| RpcError::IO(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?
                .into(),
            current: None,
            connector,
            addrs,
            active: 0,
            max_failovers: DEFAULT_MAX_FAILOVERS,
            max_retries: DEFAULT_MAX_RETRIES,
            last_reasons: vec![None; n],
        })
    }

    pub fn with_budgets(mut self, max_failovers: usize, max_retries: usize) -> Self {
        self.max_failovers = max_failovers;
        self.max_retries = max_retries;
        self
    }

    fn ensure_connection(&mut self) -> Result<&mut HdfsConnection, RpcError> {
        if self.current.is_none() {
            self.try_connect()?;
        }
        Ok(self.current.as_mut().unwrap())
    }

    #[instrument(skip(self))]
    fn try_connect(&mut self) -> Result<(), RpcError> {
        let addr = self.addrs[self.active].clone();
        trace!(addr = %addr, "connecting to namenode");
        let conn = HdfsConnection::new_with_user(Some(self.user.as_ref()), &addr, &self.connector)
            .map_err(|e| match e {
                crate::rpc::RpcConnectError::Connector(e) => {
                    RpcError::IO(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
                }
                crate::rpc::RpcConnectError::Rpc(e) => e,
            })?;
        self.current = Some(conn);
        Ok(())
    }

    fn fail(&mut self, reason: String) {
        if let Some(conn) = self.current.take() {
            conn.shutdown();
        }
        self.last_reasons[self.active] = Some(reason);
    }

    fn advance_active(&mut self) {
        self.active = (self.active + 1) % self.addrs.len();
    }

    fn reset_counters(&mut self) {
        for r in self.last_reasons.iter_mut() {
            *r = None;
        }
    }

    fn out_of_namenodes(&self) -> RpcError {
        let summary = self
            .addrs
            .iter()
            .zip(self.last_reasons.iter())
            .map(|(addr, reason)| {
                format!("{}: {}", addr, reason.as_deref().unwrap_or("no failure recorded"))
            })
            .collect::<Vec<_>>()
            .join("; ");
        RpcError::OutOfNameNodes(summary)
    }

    pub fn shutdown(self) {
        if let Some(conn) = self.current {
            conn.shutdown();
        }
    }
}

impl<C: Connector + Debug> RpcConnection for HaHdfsConnection<C> {
    fn get_user(&self) -> &str {
        &self.user
    }

    #[instrument(skip(self, input))]
    fn call<Output: Message>(
        &mut self,
        method: &str,
        input: &dyn Message,
    ) -> Result<Output, RpcError> {
        let mut failovers = 0usize;
        let mut retries = 0usize;
        loop {
            let result = self
                .ensure_connection()
                .and_then(|conn| conn.call::<Output>(method, input));

            match result {
                Ok(v) => {
                    self.reset_counters();
                    return Ok(v);
                }
                Err(err) => match classify(&err) {
                    Classification::Failover => {
                        failovers += 1;
                        if failovers > self.max_failovers {
                            self.fail(err.to_string());
                            return Err(self.out_of_namenodes());
                        }
                        trace!(target = "ha_rpc", reason = %err, "failing over");
                        self.fail(err.to_string());
                        self.advance_active();
                    }
                    Classification::Retry => {
                        retries += 1;
                        self.last_reasons[self.active] = Some(err.to_string());
                        if retries > self.max_retries {
                            return Err(self.out_of_namenodes());
                        }
                        trace!(target = "ha_rpc", reason = %err, "retrying same channel");
                    }
                    Classification::Propagate => return Err(err),
                    Classification::CloseAndPropagate => {
                        self.fail(err.to_string());
                        return Err(err);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_standby_is_failover() {
        let err = RpcError::ErrorResponse {
            error_detail: RpcErrorCode::ERROR_APPLICATION,
            exception: "org.apache.hadoop.ipc.StandbyException".to_owned(),
            message: "not active".to_owned(),
        };
        assert!(matches!(classify(&err), Classification::Failover));
    }

    #[test]
    fn test_classify_retriable_is_retry() {
        let err = RpcError::ErrorResponse {
            error_detail: RpcErrorCode::ERROR_APPLICATION,
            exception: "org.apache.hadoop.ipc.RetriableException".to_owned(),
            message: "try again".to_owned(),
        };
        assert!(matches!(classify(&err), Classification::Retry));
    }

    #[test]
    fn test_classify_other_request_error_propagates() {
        let err = RpcError::ErrorResponse {
            error_detail: RpcErrorCode::ERROR_APPLICATION,
            exception: "org.apache.hadoop.fs.FileNotFoundException".to_owned(),
            message: "nope".to_owned(),
        };
        assert!(matches!(classify(&err), Classification::Propagate));
    }

    #[test]
    fn test_classify_connection_refused_is_failover() {
        let err = RpcError::IO(std::io::Error::from(std::io::ErrorKind::ConnectionRefused));
        assert!(matches!(classify(&err), Classification::Failover));
    }
}
