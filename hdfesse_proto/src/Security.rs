// This file is generated by rust-protobuf 2.23.0. Do not edit
// @generated
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
//! Generated file from `Security.proto`

use crate::support::file_descriptor_proto_for;

#[derive(PartialEq,Clone,Default,Debug)]
pub struct TokenProto {
    identifier: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    password: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    kind: ::protobuf::SingularField<::std::string::String>,
    service: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl TokenProto {
    pub fn new() -> Self { ::std::default::Default::default() }

    pub fn get_identifier(&self) -> &[u8] { match self.identifier.as_ref() { Some(v) => v, None => &[] } }
    pub fn set_identifier(&mut self, v: ::std::vec::Vec<u8>) { self.identifier = ::protobuf::SingularField::some(v); }
    pub fn take_identifier(&mut self) -> ::std::vec::Vec<u8> { self.identifier.take().unwrap_or_default() }

    pub fn get_password(&self) -> &[u8] { match self.password.as_ref() { Some(v) => v, None => &[] } }
    pub fn set_password(&mut self, v: ::std::vec::Vec<u8>) { self.password = ::protobuf::SingularField::some(v); }
    pub fn take_password(&mut self) -> ::std::vec::Vec<u8> { self.password.take().unwrap_or_default() }

    pub fn get_kind(&self) -> &str { match self.kind.as_ref() { Some(v) => v, None => "" } }
    pub fn set_kind(&mut self, v: ::std::string::String) { self.kind = ::protobuf::SingularField::some(v); }
    pub fn take_kind(&mut self) -> ::std::string::String { self.kind.take().unwrap_or_default() }

    pub fn get_service(&self) -> &str { match self.service.as_ref() { Some(v) => v, None => "" } }
    pub fn set_service(&mut self, v: ::std::string::String) { self.service = ::protobuf::SingularField::some(v); }
    pub fn take_service(&mut self) -> ::std::string::String { self.service.take().unwrap_or_default() }
}

impl ::protobuf::Message for TokenProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.identifier)?; },
                2 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.password)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.kind)?; },
                4 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.service)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.identifier.as_ref() { my_size += ::protobuf::rt::bytes_size(1, v); }
        if let Some(ref v) = self.password.as_ref() { my_size += ::protobuf::rt::bytes_size(2, v); }
        if let Some(ref v) = self.kind.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        if let Some(ref v) = self.service.as_ref() { my_size += ::protobuf::rt::string_size(4, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.identifier.as_ref() { os.write_bytes(1, v)?; }
        if let Some(ref v) = self.password.as_ref() { os.write_bytes(2, v)?; }
        if let Some(ref v) = self.kind.as_ref() { os.write_string(3, v)?; }
        if let Some(ref v) = self.service.as_ref() { os.write_string(4, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("TokenProto", Vec::new(), file_descriptor_proto_for("Security.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<TokenProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TokenProto::new)
    }
}

impl ::protobuf::Clear for TokenProto {
    fn clear(&mut self) {
        self.identifier.clear();
        self.password.clear();
        self.kind.clear();
        self.service.clear();
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for TokenProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum RpcSaslProto_SaslState {
    SUCCESS = 0,
    NEGOTIATE = 1,
    INITIATE = 2,
    CHALLENGE = 3,
    RESPONSE = 4,
    WRAP = 5,
}

impl ::protobuf::ProtobufEnum for RpcSaslProto_SaslState {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::SUCCESS),
            1 => Some(Self::NEGOTIATE),
            2 => Some(Self::INITIATE),
            3 => Some(Self::CHALLENGE),
            4 => Some(Self::RESPONSE),
            5 => Some(Self::WRAP),
            _ => None,
        }
    }
    fn values() -> &'static [Self] {
        static values: &[RpcSaslProto_SaslState] = &[
            RpcSaslProto_SaslState::SUCCESS, RpcSaslProto_SaslState::NEGOTIATE,
            RpcSaslProto_SaslState::INITIATE, RpcSaslProto_SaslState::CHALLENGE,
            RpcSaslProto_SaslState::RESPONSE, RpcSaslProto_SaslState::WRAP,
        ];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("RpcSaslProto.SaslState", file_descriptor_proto_for("Security.proto")))
    }
}

impl ::std::default::Default for RpcSaslProto_SaslState {
    fn default() -> Self { Self::SUCCESS }
}

impl ::protobuf::reflect::ProtobufValue for RpcSaslProto_SaslState {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct RpcSaslProto {
    pub version: ::std::option::Option<i32>,
    pub state: ::std::option::Option<RpcSaslProto_SaslState>,
    token: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl RpcSaslProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_version(&self) -> i32 { self.version.unwrap_or(0) }
    pub fn set_version(&mut self, v: i32) { self.version = Some(v); }

    pub fn get_state(&self) -> RpcSaslProto_SaslState { self.state.unwrap_or(RpcSaslProto_SaslState::SUCCESS) }
    pub fn set_state(&mut self, v: RpcSaslProto_SaslState) { self.state = Some(v); }

    pub fn get_token(&self) -> &[u8] { match self.token.as_ref() { Some(v) => v, None => &[] } }
    pub fn set_token(&mut self, v: ::std::vec::Vec<u8>) { self.token = ::protobuf::SingularField::some(v); }
    pub fn take_token(&mut self) -> ::std::vec::Vec<u8> { self.token.take().unwrap_or_default() }
}

impl ::protobuf::Message for RpcSaslProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.version = Some(is.read_int32()?); },
                2 => { self.state = Some(is.read_enum()?); },
                3 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.token)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.version { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.state { my_size += ::protobuf::rt::enum_size(2, v); }
        if let Some(ref v) = self.token.as_ref() { my_size += ::protobuf::rt::bytes_size(3, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.version { os.write_int32(1, v)?; }
        if let Some(v) = self.state { os.write_enum(2, v.value())?; }
        if let Some(ref v) = self.token.as_ref() { os.write_bytes(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("RpcSaslProto", Vec::new(), file_descriptor_proto_for("Security.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<RpcSaslProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(RpcSaslProto::new)
    }
}

impl ::protobuf::Clear for RpcSaslProto {
    fn clear(&mut self) {
        self.version = None;
        self.state = None;
        self.token.clear();
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for RpcSaslProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
