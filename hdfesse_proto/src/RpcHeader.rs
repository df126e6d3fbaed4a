// This file is generated by rust-protobuf 2.23.0. Do not edit
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_imports)]
#![allow(unused_results)]
//! Generated file from `RpcHeader.proto`

use crate::support::{file_descriptor_proto_for, min_proto_bytes};

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum RpcKindProto {
    RPC_BUILTIN = 0,
    RPC_WRITABLE = 1,
    RPC_PROTOCOL_BUFFER = 2,
}

impl ::protobuf::ProtobufEnum for RpcKindProto {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(RpcKindProto::RPC_BUILTIN),
            1 => Some(RpcKindProto::RPC_WRITABLE),
            2 => Some(RpcKindProto::RPC_PROTOCOL_BUFFER),
            _ => None,
        }
    }

    fn values() -> &'static [Self] {
        static values: &[RpcKindProto] = &[
            RpcKindProto::RPC_BUILTIN,
            RpcKindProto::RPC_WRITABLE,
            RpcKindProto::RPC_PROTOCOL_BUFFER,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("RpcKindProto", file_descriptor_proto_for("RpcHeader.proto")))
    }
}

impl ::std::marker::Copy for RpcKindProto {}

impl ::std::default::Default for RpcKindProto {
    fn default() -> Self {
        RpcKindProto::RPC_BUILTIN
    }
}

impl ::protobuf::reflect::ProtobufValue for RpcKindProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum RpcRequestHeaderProto_OperationProto {
    RPC_FINAL_PACKET = 0,
    RPC_CONTINUATION_PACKET = 1,
    RPC_CLOSE_CONNECTION = 2,
}

impl ::protobuf::ProtobufEnum for RpcRequestHeaderProto_OperationProto {
    fn value(&self) -> i32 { *self as i32 }

    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::RPC_FINAL_PACKET),
            1 => Some(Self::RPC_CONTINUATION_PACKET),
            2 => Some(Self::RPC_CLOSE_CONNECTION),
            _ => None,
        }
    }

    fn values() -> &'static [Self] {
        static values: &[RpcRequestHeaderProto_OperationProto] = &[
            RpcRequestHeaderProto_OperationProto::RPC_FINAL_PACKET,
            RpcRequestHeaderProto_OperationProto::RPC_CONTINUATION_PACKET,
            RpcRequestHeaderProto_OperationProto::RPC_CLOSE_CONNECTION,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("RpcRequestHeaderProto.OperationProto", file_descriptor_proto_for("RpcHeader.proto")))
    }
}

impl ::std::default::Default for RpcRequestHeaderProto_OperationProto {
    fn default() -> Self { Self::RPC_FINAL_PACKET }
}

impl ::protobuf::reflect::ProtobufValue for RpcRequestHeaderProto_OperationProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct RpcRequestHeaderProto {
    pub rpcKind: ::std::option::Option<RpcKindProto>,
    pub rpcOp: ::std::option::Option<RpcRequestHeaderProto_OperationProto>,
    pub callId: ::std::option::Option<i32>,
    clientId: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub retryCount: ::std::option::Option<i32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl RpcRequestHeaderProto {
    pub fn new() -> Self { ::std::default::Default::default() }

    pub fn get_rpcKind(&self) -> RpcKindProto { self.rpcKind.unwrap_or(RpcKindProto::RPC_BUILTIN) }
    pub fn set_rpcKind(&mut self, v: RpcKindProto) { self.rpcKind = Some(v); }
    pub fn has_rpcKind(&self) -> bool { self.rpcKind.is_some() }

    pub fn get_rpcOp(&self) -> RpcRequestHeaderProto_OperationProto { self.rpcOp.unwrap_or(RpcRequestHeaderProto_OperationProto::RPC_FINAL_PACKET) }
    pub fn set_rpcOp(&mut self, v: RpcRequestHeaderProto_OperationProto) { self.rpcOp = Some(v); }
    pub fn has_rpcOp(&self) -> bool { self.rpcOp.is_some() }

    pub fn get_callId(&self) -> i32 { self.callId.unwrap_or(0) }
    pub fn set_callId(&mut self, v: i32) { self.callId = Some(v); }

    pub fn get_clientId(&self) -> &[u8] {
        match self.clientId.as_ref() { Some(v) => v, None => &[] }
    }
    pub fn set_clientId(&mut self, v: ::std::vec::Vec<u8>) { self.clientId = ::protobuf::SingularField::some(v); }
    pub fn take_clientId(&mut self) -> ::std::vec::Vec<u8> { self.clientId.take().unwrap_or_default() }

    pub fn get_retryCount(&self) -> i32 { self.retryCount.unwrap_or(-1) }
    pub fn set_retryCount(&mut self, v: i32) { self.retryCount = Some(v); }
}

impl ::protobuf::Message for RpcRequestHeaderProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.rpcKind = Some(is.read_enum()?); },
                2 => { self.rpcOp = Some(is.read_enum()?); },
                3 => { self.callId = Some(is.read_sint32()?); },
                4 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.clientId)?; },
                5 => { self.retryCount = Some(is.read_sint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.rpcKind { my_size += ::protobuf::rt::enum_size(1, v); }
        if let Some(v) = self.rpcOp { my_size += ::protobuf::rt::enum_size(2, v); }
        if let Some(v) = self.callId { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeSint32); }
        if let Some(ref v) = self.clientId.as_ref() { my_size += ::protobuf::rt::bytes_size(4, v); }
        if let Some(v) = self.retryCount { my_size += ::protobuf::rt::value_size(5, v, ::protobuf::wire_format::WireTypeSint32); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.rpcKind { os.write_enum(1, v.value())?; }
        if let Some(v) = self.rpcOp { os.write_enum(2, v.value())?; }
        if let Some(v) = self.callId { os.write_sint32(3, v)?; }
        if let Some(ref v) = self.clientId.as_ref() { os.write_bytes(4, v)?; }
        if let Some(v) = self.retryCount { os.write_sint32(5, v)?; }
        os.write_unknown_fields(self.get_unknown_fields())?;
        Ok(())
    }

    fn get_cached_size(&self) -> u32 { self.cached_size.get() }
    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields { &self.unknown_fields }
    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields { &mut self.unknown_fields }
    fn as_any(&self) -> &dyn ::std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> { self }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor { Self::descriptor_static() }
    fn new() -> Self { Self::new() }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("RpcRequestHeaderProto", Vec::new(), file_descriptor_proto_for("RpcHeader.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<RpcRequestHeaderProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(RpcRequestHeaderProto::new)
    }
}

impl ::protobuf::Clear for RpcRequestHeaderProto {
    fn clear(&mut self) {
        self.rpcKind = None;
        self.rpcOp = None;
        self.callId = None;
        self.clientId.clear();
        self.retryCount = None;
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for RpcRequestHeaderProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum RpcResponseHeaderProto_RpcStatusProto {
    SUCCESS = 0,
    ERROR = 1,
    FATAL = 2,
}

impl ::protobuf::ProtobufEnum for RpcResponseHeaderProto_RpcStatusProto {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::SUCCESS),
            1 => Some(Self::ERROR),
            2 => Some(Self::FATAL),
            _ => None,
        }
    }
    fn values() -> &'static [Self] {
        static values: &[RpcResponseHeaderProto_RpcStatusProto] = &[
            RpcResponseHeaderProto_RpcStatusProto::SUCCESS,
            RpcResponseHeaderProto_RpcStatusProto::ERROR,
            RpcResponseHeaderProto_RpcStatusProto::FATAL,
        ];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("RpcResponseHeaderProto.RpcStatusProto", file_descriptor_proto_for("RpcHeader.proto")))
    }
}

impl ::std::default::Default for RpcResponseHeaderProto_RpcStatusProto {
    fn default() -> Self { Self::SUCCESS }
}

impl ::protobuf::reflect::ProtobufValue for RpcResponseHeaderProto_RpcStatusProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[allow(non_camel_case_types)]
#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum RpcResponseHeaderProto_RpcErrorCodeProto {
    ERROR_APPLICATION = 1,
    ERROR_NO_SUCH_METHOD = 2,
    ERROR_NO_SUCH_PROTOCOL = 3,
    ERROR_RPC_SERVER = 4,
    ERROR_SERIALIZING_RESPONSE = 5,
    ERROR_RPC_VERSION_MISMATCH = 6,
    FATAL_UNKNOWN = 10,
    FATAL_UNSUPPORTED_SERIALIZATION = 11,
    FATAL_INVALID_RPC_HEADER = 12,
    FATAL_DESERIALIZING_REQUEST = 13,
    FATAL_VERSION_MISMATCH = 14,
    FATAL_UNAUTHORIZED = 15,
}

impl ::protobuf::ProtobufEnum for RpcResponseHeaderProto_RpcErrorCodeProto {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::ERROR_APPLICATION),
            2 => Some(Self::ERROR_NO_SUCH_METHOD),
            3 => Some(Self::ERROR_NO_SUCH_PROTOCOL),
            4 => Some(Self::ERROR_RPC_SERVER),
            5 => Some(Self::ERROR_SERIALIZING_RESPONSE),
            6 => Some(Self::ERROR_RPC_VERSION_MISMATCH),
            10 => Some(Self::FATAL_UNKNOWN),
            11 => Some(Self::FATAL_UNSUPPORTED_SERIALIZATION),
            12 => Some(Self::FATAL_INVALID_RPC_HEADER),
            13 => Some(Self::FATAL_DESERIALIZING_REQUEST),
            14 => Some(Self::FATAL_VERSION_MISMATCH),
            15 => Some(Self::FATAL_UNAUTHORIZED),
            _ => None,
        }
    }
    fn values() -> &'static [Self] {
        static values: &[RpcResponseHeaderProto_RpcErrorCodeProto] = &[
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_APPLICATION,
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_NO_SUCH_METHOD,
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_NO_SUCH_PROTOCOL,
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_RPC_SERVER,
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_SERIALIZING_RESPONSE,
            RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_RPC_VERSION_MISMATCH,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_UNKNOWN,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_UNSUPPORTED_SERIALIZATION,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_INVALID_RPC_HEADER,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_DESERIALIZING_REQUEST,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_VERSION_MISMATCH,
            RpcResponseHeaderProto_RpcErrorCodeProto::FATAL_UNAUTHORIZED,
        ];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("RpcResponseHeaderProto.RpcErrorCodeProto", file_descriptor_proto_for("RpcHeader.proto")))
    }
}

impl ::std::default::Default for RpcResponseHeaderProto_RpcErrorCodeProto {
    fn default() -> Self { Self::ERROR_APPLICATION }
}

impl ::protobuf::reflect::ProtobufValue for RpcResponseHeaderProto_RpcErrorCodeProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct RpcResponseHeaderProto {
    pub callId: ::std::option::Option<u32>,
    pub status: ::std::option::Option<RpcResponseHeaderProto_RpcStatusProto>,
    pub serverIpcVersionNum: ::std::option::Option<u32>,
    exceptionClassName: ::protobuf::SingularField<::std::string::String>,
    errorMsg: ::protobuf::SingularField<::std::string::String>,
    pub errorDetail: ::std::option::Option<RpcResponseHeaderProto_RpcErrorCodeProto>,
    clientId: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub retryCount: ::std::option::Option<i32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl RpcResponseHeaderProto {
    pub fn new() -> Self { ::std::default::Default::default() }

    pub fn get_callId(&self) -> u32 { self.callId.unwrap_or(0) }
    pub fn set_callId(&mut self, v: u32) { self.callId = Some(v); }

    pub fn get_status(&self) -> RpcResponseHeaderProto_RpcStatusProto {
        self.status.unwrap_or(RpcResponseHeaderProto_RpcStatusProto::SUCCESS)
    }
    pub fn set_status(&mut self, v: RpcResponseHeaderProto_RpcStatusProto) { self.status = Some(v); }

    pub fn get_serverIpcVersionNum(&self) -> u32 { self.serverIpcVersionNum.unwrap_or(0) }

    pub fn get_exceptionClassName(&self) -> &str { match self.exceptionClassName.as_ref() { Some(v) => v, None => "" } }
    pub fn has_exceptionClassName(&self) -> bool { self.exceptionClassName.is_some() }
    pub fn set_exceptionClassName(&mut self, v: ::std::string::String) { self.exceptionClassName = ::protobuf::SingularField::some(v); }
    pub fn take_exceptionClassName(&mut self) -> ::std::string::String { self.exceptionClassName.take().unwrap_or_default() }

    pub fn get_errorMsg(&self) -> &str { match self.errorMsg.as_ref() { Some(v) => v, None => "" } }
    pub fn has_errorMsg(&self) -> bool { self.errorMsg.is_some() }
    pub fn set_errorMsg(&mut self, v: ::std::string::String) { self.errorMsg = ::protobuf::SingularField::some(v); }
    pub fn take_errorMsg(&mut self) -> ::std::string::String { self.errorMsg.take().unwrap_or_default() }

    pub fn get_errorDetail(&self) -> RpcResponseHeaderProto_RpcErrorCodeProto {
        self.errorDetail.unwrap_or(RpcResponseHeaderProto_RpcErrorCodeProto::ERROR_APPLICATION)
    }
    pub fn has_errorDetail(&self) -> bool { self.errorDetail.is_some() }
    pub fn set_errorDetail(&mut self, v: RpcResponseHeaderProto_RpcErrorCodeProto) { self.errorDetail = Some(v); }

    pub fn get_clientId(&self) -> &[u8] { match self.clientId.as_ref() { Some(v) => v, None => &[] } }
    pub fn set_clientId(&mut self, v: ::std::vec::Vec<u8>) { self.clientId = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for RpcResponseHeaderProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.callId = Some(is.read_uint32()?); },
                2 => { self.status = Some(is.read_enum()?); },
                3 => { self.serverIpcVersionNum = Some(is.read_uint32()?); },
                4 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.exceptionClassName)?; },
                5 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.errorMsg)?; },
                6 => { self.errorDetail = Some(is.read_enum()?); },
                7 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.clientId)?; },
                8 => { self.retryCount = Some(is.read_sint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.callId { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.status { my_size += ::protobuf::rt::enum_size(2, v); }
        if let Some(v) = self.serverIpcVersionNum { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.exceptionClassName.as_ref() { my_size += ::protobuf::rt::string_size(4, v); }
        if let Some(ref v) = self.errorMsg.as_ref() { my_size += ::protobuf::rt::string_size(5, v); }
        if let Some(v) = self.errorDetail { my_size += ::protobuf::rt::enum_size(6, v); }
        if let Some(ref v) = self.clientId.as_ref() { my_size += ::protobuf::rt::bytes_size(7, v); }
        if let Some(v) = self.retryCount { my_size += ::protobuf::rt::value_size(8, v, ::protobuf::wire_format::WireTypeSint32); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.callId { os.write_uint32(1, v)?; }
        if let Some(v) = self.status { os.write_enum(2, v.value())?; }
        if let Some(v) = self.serverIpcVersionNum { os.write_uint32(3, v)?; }
        if let Some(ref v) = self.exceptionClassName.as_ref() { os.write_string(4, v)?; }
        if let Some(ref v) = self.errorMsg.as_ref() { os.write_string(5, v)?; }
        if let Some(v) = self.errorDetail { os.write_enum(6, v.value())?; }
        if let Some(ref v) = self.clientId.as_ref() { os.write_bytes(7, v)?; }
        if let Some(v) = self.retryCount { os.write_sint32(8, v)?; }
        os.write_unknown_fields(self.get_unknown_fields())?;
        Ok(())
    }

    fn get_cached_size(&self) -> u32 { self.cached_size.get() }
    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields { &self.unknown_fields }
    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields { &mut self.unknown_fields }
    fn as_any(&self) -> &dyn ::std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> { self }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor { Self::descriptor_static() }
    fn new() -> Self { Self::new() }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("RpcResponseHeaderProto", Vec::new(), file_descriptor_proto_for("RpcHeader.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<RpcResponseHeaderProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(RpcResponseHeaderProto::new)
    }
}

impl ::protobuf::Clear for RpcResponseHeaderProto {
    fn clear(&mut self) {
        self.callId = None;
        self.status = None;
        self.serverIpcVersionNum = None;
        self.exceptionClassName.clear();
        self.errorMsg.clear();
        self.errorDetail = None;
        self.clientId.clear();
        self.retryCount = None;
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for RpcResponseHeaderProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

pub(crate) fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    file_descriptor_proto_for("RpcHeader.proto")
}

#[allow(dead_code)]
fn _unused() -> ::std::vec::Vec<u8> { min_proto_bytes("RpcHeader.proto", "hadoop.common") }
