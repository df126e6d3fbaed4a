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
//! Generated file from `datatransfer.proto`

use crate::hdfs::ExtendedBlockProto;
use crate::support::file_descriptor_proto_for;
use crate::Security::TokenProto;

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum ChecksumTypeProto {
    CHECKSUM_NULL = 0,
    CHECKSUM_CRC32 = 1,
    CHECKSUM_CRC32C = 2,
}

impl ::protobuf::ProtobufEnum for ChecksumTypeProto {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::CHECKSUM_NULL),
            1 => Some(Self::CHECKSUM_CRC32),
            2 => Some(Self::CHECKSUM_CRC32C),
            _ => None,
        }
    }
    fn values() -> &'static [Self] {
        static values: &[ChecksumTypeProto] = &[ChecksumTypeProto::CHECKSUM_NULL, ChecksumTypeProto::CHECKSUM_CRC32, ChecksumTypeProto::CHECKSUM_CRC32C];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("ChecksumTypeProto", file_descriptor_proto_for("datatransfer.proto")))
    }
}
impl ::std::default::Default for ChecksumTypeProto { fn default() -> Self { Self::CHECKSUM_NULL } }
impl ::protobuf::reflect::ProtobufValue for ChecksumTypeProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self)) }
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum Status {
    SUCCESS = 0,
    ERROR = 1,
    ERROR_CHECKSUM = 2,
    ERROR_INVALID = 3,
    ERROR_EXISTS = 4,
    ERROR_ACCESS_TOKEN = 5,
    CHECKSUM_OK = 6,
}

impl ::protobuf::ProtobufEnum for Status {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::SUCCESS), 1 => Some(Self::ERROR), 2 => Some(Self::ERROR_CHECKSUM),
            3 => Some(Self::ERROR_INVALID), 4 => Some(Self::ERROR_EXISTS),
            5 => Some(Self::ERROR_ACCESS_TOKEN), 6 => Some(Self::CHECKSUM_OK),
            _ => None,
        }
    }
    fn values() -> &'static [Self] {
        static values: &[Status] = &[Status::SUCCESS, Status::ERROR, Status::ERROR_CHECKSUM, Status::ERROR_INVALID, Status::ERROR_EXISTS, Status::ERROR_ACCESS_TOKEN, Status::CHECKSUM_OK];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("Status", file_descriptor_proto_for("datatransfer.proto")))
    }
}
impl ::std::default::Default for Status { fn default() -> Self { Self::SUCCESS } }
impl ::protobuf::reflect::ProtobufValue for Status {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self)) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ChecksumProto {
    pub r#type: ::std::option::Option<ChecksumTypeProto>,
    pub bytesPerChecksum: ::std::option::Option<u32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ChecksumProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_field_type(&self) -> ChecksumTypeProto { self.r#type.unwrap_or(ChecksumTypeProto::CHECKSUM_NULL) }
    pub fn set_field_type(&mut self, v: ChecksumTypeProto) { self.r#type = Some(v); }
    pub fn get_bytesPerChecksum(&self) -> u32 { self.bytesPerChecksum.unwrap_or(0) }
    pub fn set_bytesPerChecksum(&mut self, v: u32) { self.bytesPerChecksum = Some(v); }
}

impl ::protobuf::Message for ChecksumProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.r#type = Some(is.read_enum()?); },
                2 => { self.bytesPerChecksum = Some(is.read_uint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.r#type { my_size += ::protobuf::rt::enum_size(1, v); }
        if let Some(v) = self.bytesPerChecksum { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.r#type { os.write_enum(1, v.value())?; }
        if let Some(v) = self.bytesPerChecksum { os.write_uint32(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ChecksumProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ChecksumProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ChecksumProto::new)
    }
}

impl ::protobuf::Clear for ChecksumProto {
    fn clear(&mut self) { self.r#type = None; self.bytesPerChecksum = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for ChecksumProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct BaseHeaderProto {
    block: ::protobuf::SingularPtrField<ExtendedBlockProto>,
    token: ::protobuf::SingularPtrField<TokenProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl BaseHeaderProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_block(&self) -> &ExtendedBlockProto { self.block.as_ref().unwrap_or_else(|| ExtendedBlockProto::default_instance()) }
    pub fn mut_block(&mut self) -> &mut ExtendedBlockProto { if self.block.is_none() { self.block.set_default(); } self.block.as_mut().unwrap() }
    pub fn set_block(&mut self, v: ExtendedBlockProto) { self.block = ::protobuf::SingularPtrField::some(v); }

    pub fn get_token(&self) -> &TokenProto { self.token.as_ref().unwrap_or_else(|| TokenProto::default_instance()) }
    pub fn mut_token(&mut self) -> &mut TokenProto { if self.token.is_none() { self.token.set_default(); } self.token.as_mut().unwrap() }
    pub fn set_token(&mut self, v: TokenProto) { self.token = ::protobuf::SingularPtrField::some(v); }
}

impl ::protobuf::Message for BaseHeaderProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.block)?; },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.token)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.block.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(ref v) = self.token.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.block.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.token.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("BaseHeaderProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<BaseHeaderProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(BaseHeaderProto::new)
    }
}

impl ::protobuf::Clear for BaseHeaderProto {
    fn clear(&mut self) { self.block.clear(); self.token.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for BaseHeaderProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ClientOperationHeaderProto {
    baseHeader: ::protobuf::SingularPtrField<BaseHeaderProto>,
    clientName: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ClientOperationHeaderProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_baseHeader(&self) -> &BaseHeaderProto { self.baseHeader.as_ref().unwrap_or_else(|| BaseHeaderProto::default_instance()) }
    pub fn mut_baseHeader(&mut self) -> &mut BaseHeaderProto { if self.baseHeader.is_none() { self.baseHeader.set_default(); } self.baseHeader.as_mut().unwrap() }
    pub fn set_baseHeader(&mut self, v: BaseHeaderProto) { self.baseHeader = ::protobuf::SingularPtrField::some(v); }

    pub fn get_clientName(&self) -> &str { match self.clientName.as_ref() { Some(v) => v, None => "" } }
    pub fn set_clientName(&mut self, v: ::std::string::String) { self.clientName = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for ClientOperationHeaderProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.baseHeader)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.clientName)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.baseHeader.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(ref v) = self.clientName.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.baseHeader.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.clientName.as_ref() { os.write_string(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ClientOperationHeaderProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ClientOperationHeaderProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ClientOperationHeaderProto::new)
    }
}

impl ::protobuf::Clear for ClientOperationHeaderProto {
    fn clear(&mut self) { self.baseHeader.clear(); self.clientName.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for ClientOperationHeaderProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct OpReadBlockProto {
    header: ::protobuf::SingularPtrField<ClientOperationHeaderProto>,
    pub offset: ::std::option::Option<u64>,
    pub len: ::std::option::Option<u64>,
    pub sendChecksums: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl OpReadBlockProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_header(&self) -> &ClientOperationHeaderProto { self.header.as_ref().unwrap_or_else(|| ClientOperationHeaderProto::default_instance()) }
    pub fn mut_header(&mut self) -> &mut ClientOperationHeaderProto { if self.header.is_none() { self.header.set_default(); } self.header.as_mut().unwrap() }
    pub fn set_header(&mut self, v: ClientOperationHeaderProto) { self.header = ::protobuf::SingularPtrField::some(v); }

    pub fn get_offset(&self) -> u64 { self.offset.unwrap_or(0) }
    pub fn set_offset(&mut self, v: u64) { self.offset = Some(v); }
    pub fn get_len(&self) -> u64 { self.len.unwrap_or(0) }
    pub fn set_len(&mut self, v: u64) { self.len = Some(v); }
    pub fn get_sendChecksums(&self) -> bool { self.sendChecksums.unwrap_or(true) }
    pub fn set_sendChecksums(&mut self, v: bool) { self.sendChecksums = Some(v); }
}

impl ::protobuf::Message for OpReadBlockProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.header)?; },
                2 => { self.offset = Some(is.read_uint64()?); },
                3 => { self.len = Some(is.read_uint64()?); },
                4 => { self.sendChecksums = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.header.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(v) = self.offset { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.len { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(_v) = self.sendChecksums { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.header.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.offset { os.write_uint64(2, v)?; }
        if let Some(v) = self.len { os.write_uint64(3, v)?; }
        if let Some(v) = self.sendChecksums { os.write_bool(4, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("OpReadBlockProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<OpReadBlockProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(OpReadBlockProto::new)
    }
}

impl ::protobuf::Clear for OpReadBlockProto {
    fn clear(&mut self) {
        self.header.clear(); self.offset = None; self.len = None; self.sendChecksums = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for OpReadBlockProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ReadOpChecksumInfoProto {
    checksum: ::protobuf::SingularPtrField<ChecksumProto>,
    pub chunkOffset: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ReadOpChecksumInfoProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_checksum(&self) -> &ChecksumProto { self.checksum.as_ref().unwrap_or_else(|| ChecksumProto::default_instance()) }
    pub fn mut_checksum(&mut self) -> &mut ChecksumProto { if self.checksum.is_none() { self.checksum.set_default(); } self.checksum.as_mut().unwrap() }
    pub fn set_checksum(&mut self, v: ChecksumProto) { self.checksum = ::protobuf::SingularPtrField::some(v); }
    pub fn get_chunkOffset(&self) -> u64 { self.chunkOffset.unwrap_or(0) }
}

impl ::protobuf::Message for ReadOpChecksumInfoProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.checksum)?; },
                2 => { self.chunkOffset = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.checksum.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(v) = self.chunkOffset { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.checksum.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.chunkOffset { os.write_uint64(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ReadOpChecksumInfoProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ReadOpChecksumInfoProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ReadOpChecksumInfoProto::new)
    }
}

impl ::protobuf::Clear for ReadOpChecksumInfoProto {
    fn clear(&mut self) { self.checksum.clear(); self.chunkOffset = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for ReadOpChecksumInfoProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct BlockOpResponseProto {
    pub status: ::std::option::Option<Status>,
    readOpChecksumInfo: ::protobuf::SingularPtrField<ReadOpChecksumInfoProto>,
    message: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl BlockOpResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_status(&self) -> Status { self.status.unwrap_or(Status::SUCCESS) }
    pub fn set_status(&mut self, v: Status) { self.status = Some(v); }

    pub fn get_readOpChecksumInfo(&self) -> &ReadOpChecksumInfoProto { self.readOpChecksumInfo.as_ref().unwrap_or_else(|| ReadOpChecksumInfoProto::default_instance()) }
    pub fn has_readOpChecksumInfo(&self) -> bool { self.readOpChecksumInfo.is_some() }
    pub fn mut_readOpChecksumInfo(&mut self) -> &mut ReadOpChecksumInfoProto { if self.readOpChecksumInfo.is_none() { self.readOpChecksumInfo.set_default(); } self.readOpChecksumInfo.as_mut().unwrap() }

    pub fn get_message(&self) -> &str { match self.message.as_ref() { Some(v) => v, None => "" } }
    pub fn take_message(&mut self) -> ::std::string::String { self.message.take().unwrap_or_default() }
}

impl ::protobuf::Message for BlockOpResponseProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.status = Some(is.read_enum()?); },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.readOpChecksumInfo)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.message)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.status { my_size += ::protobuf::rt::enum_size(1, v); }
        if let Some(ref v) = self.readOpChecksumInfo.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        if let Some(ref v) = self.message.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.status { os.write_enum(1, v.value())?; }
        if let Some(ref v) = self.readOpChecksumInfo.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.message.as_ref() { os.write_string(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("BlockOpResponseProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<BlockOpResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(BlockOpResponseProto::new)
    }
}

impl ::protobuf::Clear for BlockOpResponseProto {
    fn clear(&mut self) { self.status = None; self.readOpChecksumInfo.clear(); self.message.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for BlockOpResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct PacketHeaderProto {
    pub offsetInBlock: ::std::option::Option<i64>,
    pub seqno: ::std::option::Option<i64>,
    pub lastPacketInBlock: ::std::option::Option<bool>,
    pub dataLen: ::std::option::Option<i32>,
    pub syncBlock: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl PacketHeaderProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_offsetInBlock(&self) -> i64 { self.offsetInBlock.unwrap_or(0) }
    pub fn get_seqno(&self) -> i64 { self.seqno.unwrap_or(0) }
    pub fn get_lastPacketInBlock(&self) -> bool { self.lastPacketInBlock.unwrap_or(false) }
    pub fn get_dataLen(&self) -> i32 { self.dataLen.unwrap_or(0) }
    pub fn set_dataLen(&mut self, v: i32) { self.dataLen = Some(v); }
}

impl ::protobuf::Message for PacketHeaderProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.offsetInBlock = Some(is.read_sint64()?); },
                2 => { self.seqno = Some(is.read_sint64()?); },
                3 => { self.lastPacketInBlock = Some(is.read_bool()?); },
                4 => { self.dataLen = Some(is.read_sint32()?); },
                5 => { self.syncBlock = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.offsetInBlock { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeSint64); }
        if let Some(v) = self.seqno { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeSint64); }
        if let Some(_v) = self.lastPacketInBlock { my_size += 2; }
        if let Some(v) = self.dataLen { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeSint32); }
        if let Some(_v) = self.syncBlock { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.offsetInBlock { os.write_sint64(1, v)?; }
        if let Some(v) = self.seqno { os.write_sint64(2, v)?; }
        if let Some(v) = self.lastPacketInBlock { os.write_bool(3, v)?; }
        if let Some(v) = self.dataLen { os.write_sint32(4, v)?; }
        if let Some(v) = self.syncBlock { os.write_bool(5, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("PacketHeaderProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<PacketHeaderProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PacketHeaderProto::new)
    }
}

impl ::protobuf::Clear for PacketHeaderProto {
    fn clear(&mut self) {
        self.offsetInBlock = None; self.seqno = None; self.lastPacketInBlock = None;
        self.dataLen = None; self.syncBlock = None; self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for PacketHeaderProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
pub enum ClientReadStatusProto_Status {
    SUCCESS = 0,
    ERROR = 1,
    ERROR_CHECKSUM = 2,
}

impl ::protobuf::ProtobufEnum for ClientReadStatusProto_Status {
    fn value(&self) -> i32 { *self as i32 }
    fn from_i32(value: i32) -> Option<Self> {
        match value { 0 => Some(Self::SUCCESS), 1 => Some(Self::ERROR), 2 => Some(Self::ERROR_CHECKSUM), _ => None }
    }
    fn values() -> &'static [Self] {
        static values: &[ClientReadStatusProto_Status] = &[ClientReadStatusProto_Status::SUCCESS, ClientReadStatusProto_Status::ERROR, ClientReadStatusProto_Status::ERROR_CHECKSUM];
        values
    }
    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>("ClientReadStatusProto.Status", file_descriptor_proto_for("datatransfer.proto")))
    }
}
impl ::std::default::Default for ClientReadStatusProto_Status { fn default() -> Self { Self::SUCCESS } }
impl ::protobuf::reflect::ProtobufValue for ClientReadStatusProto_Status {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self)) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ClientReadStatusProto {
    pub status: ::std::option::Option<ClientReadStatusProto_Status>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ClientReadStatusProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_status(&self) -> ClientReadStatusProto_Status { self.status.unwrap_or(ClientReadStatusProto_Status::SUCCESS) }
    pub fn set_status(&mut self, v: ClientReadStatusProto_Status) { self.status = Some(v); }
}

impl ::protobuf::Message for ClientReadStatusProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.status = Some(is.read_enum()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.status { my_size += ::protobuf::rt::enum_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.status { os.write_enum(1, v.value())?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ClientReadStatusProto", Vec::new(), file_descriptor_proto_for("datatransfer.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ClientReadStatusProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ClientReadStatusProto::new)
    }
}

impl ::protobuf::Clear for ClientReadStatusProto {
    fn clear(&mut self) { self.status = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for ClientReadStatusProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
