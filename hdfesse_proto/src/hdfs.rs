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
//! Generated file from `hdfs.proto`

use crate::support::file_descriptor_proto_for;
use crate::Security::TokenProto;

macro_rules! simple_enum {
    ($name:ident { $($variant:ident = $val:expr),* $(,)? } default $default:ident) => {
        #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
        pub enum $name { $($variant = $val),* }

        impl ::protobuf::ProtobufEnum for $name {
            fn value(&self) -> i32 { *self as i32 }
            fn from_i32(value: i32) -> Option<Self> {
                match value { $($val => Some(Self::$variant),)* _ => None }
            }
            fn values() -> &'static [Self] {
                static values: &[$name] = &[$($name::$variant),*];
                values
            }
            fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
                static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
                descriptor.get(|| ::protobuf::reflect::EnumDescriptor::new_pb_name::<Self>(stringify!($name), file_descriptor_proto_for("hdfs.proto")))
            }
        }
        impl ::std::default::Default for $name { fn default() -> Self { Self::$default } }
        impl ::protobuf::reflect::ProtobufValue for $name {
            fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self)) }
        }
    };
}

simple_enum!(HdfsFileStatusProto_FileType {
    IS_DIR = 1, IS_FILE = 2, IS_SYMLINK = 3,
} default IS_FILE);

simple_enum!(DatanodeInfoProto_AdminState {
    NORMAL = 0, DECOMMISSION_INPROGRESS = 1, DECOMMISSIONED = 2,
    ENTERING_MAINTENANCE = 3, IN_MAINTENANCE = 4,
} default NORMAL);

simple_enum!(StorageTypeProto {
    DISK = 1, SSD = 2, ARCHIVE = 3, RAM_DISK = 4, PROVIDED = 5, NVDIMM = 6,
} default DISK);

simple_enum!(CipherSuiteProto {
    UNKNOWN = 1, AES_CTR_NOPADDING = 2,
} default UNKNOWN);

simple_enum!(CryptoProtocolVersionProto {
    UNKNOWN_PROTOCOL_VERSION = 1, ENCRYPTION_ZONES = 2,
} default UNKNOWN_PROTOCOL_VERSION);

simple_enum!(ErasureCodingPolicyState {
    DISABLED = 1, ENABLED = 2, REMOVED = 3,
} default ENABLED);

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ExtendedBlockProto {
    poolId: ::protobuf::SingularField<::std::string::String>,
    pub blockId: ::std::option::Option<u64>,
    pub numBytes: ::std::option::Option<u64>,
    pub generationStamp: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ExtendedBlockProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_poolId(&self) -> &str { match self.poolId.as_ref() { Some(v) => v, None => "" } }
    pub fn set_poolId(&mut self, v: ::std::string::String) { self.poolId = ::protobuf::SingularField::some(v); }
    pub fn get_blockId(&self) -> u64 { self.blockId.unwrap_or(0) }
    pub fn set_blockId(&mut self, v: u64) { self.blockId = Some(v); }
    pub fn get_numBytes(&self) -> u64 { self.numBytes.unwrap_or(0) }
    pub fn set_numBytes(&mut self, v: u64) { self.numBytes = Some(v); }
    pub fn get_generationStamp(&self) -> u64 { self.generationStamp.unwrap_or(0) }
    pub fn set_generationStamp(&mut self, v: u64) { self.generationStamp = Some(v); }
}

impl ::protobuf::Message for ExtendedBlockProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.poolId)?; },
                2 => { self.blockId = Some(is.read_uint64()?); },
                3 => { self.numBytes = Some(is.read_uint64()?); },
                4 => { self.generationStamp = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.poolId.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(v) = self.blockId { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.numBytes { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.generationStamp { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.poolId.as_ref() { os.write_string(1, v)?; }
        if let Some(v) = self.blockId { os.write_uint64(2, v)?; }
        if let Some(v) = self.numBytes { os.write_uint64(3, v)?; }
        if let Some(v) = self.generationStamp { os.write_uint64(4, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ExtendedBlockProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ExtendedBlockProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ExtendedBlockProto::new)
    }
}

impl ::protobuf::Clear for ExtendedBlockProto {
    fn clear(&mut self) {
        self.poolId.clear(); self.blockId = None; self.numBytes = None; self.generationStamp = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for ExtendedBlockProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct DatanodeIDProto {
    ipAddr: ::protobuf::SingularField<::std::string::String>,
    hostName: ::protobuf::SingularField<::std::string::String>,
    datanodeUuid: ::protobuf::SingularField<::std::string::String>,
    pub xferPort: ::std::option::Option<u32>,
    pub infoPort: ::std::option::Option<u32>,
    pub ipcPort: ::std::option::Option<u32>,
    pub infoSecurePort: ::std::option::Option<u32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl DatanodeIDProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_ipAddr(&self) -> &str { match self.ipAddr.as_ref() { Some(v) => v, None => "" } }
    pub fn set_ipAddr(&mut self, v: ::std::string::String) { self.ipAddr = ::protobuf::SingularField::some(v); }
    pub fn get_hostName(&self) -> &str { match self.hostName.as_ref() { Some(v) => v, None => "" } }
    pub fn set_hostName(&mut self, v: ::std::string::String) { self.hostName = ::protobuf::SingularField::some(v); }
    pub fn get_datanodeUuid(&self) -> &str { match self.datanodeUuid.as_ref() { Some(v) => v, None => "" } }
    pub fn set_datanodeUuid(&mut self, v: ::std::string::String) { self.datanodeUuid = ::protobuf::SingularField::some(v); }
    pub fn get_xferPort(&self) -> u32 { self.xferPort.unwrap_or(0) }
    pub fn get_infoPort(&self) -> u32 { self.infoPort.unwrap_or(0) }
    pub fn get_ipcPort(&self) -> u32 { self.ipcPort.unwrap_or(0) }
    pub fn get_infoSecurePort(&self) -> u32 { self.infoSecurePort.unwrap_or(0) }
}

impl ::protobuf::Message for DatanodeIDProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.ipAddr)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.hostName)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.datanodeUuid)?; },
                4 => { self.xferPort = Some(is.read_uint32()?); },
                5 => { self.infoPort = Some(is.read_uint32()?); },
                6 => { self.ipcPort = Some(is.read_uint32()?); },
                7 => { self.infoSecurePort = Some(is.read_uint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.ipAddr.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.hostName.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        if let Some(ref v) = self.datanodeUuid.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        if let Some(v) = self.xferPort { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.infoPort { my_size += ::protobuf::rt::value_size(5, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.ipcPort { my_size += ::protobuf::rt::value_size(6, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.infoSecurePort { my_size += ::protobuf::rt::value_size(7, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.ipAddr.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.hostName.as_ref() { os.write_string(2, v)?; }
        if let Some(ref v) = self.datanodeUuid.as_ref() { os.write_string(3, v)?; }
        if let Some(v) = self.xferPort { os.write_uint32(4, v)?; }
        if let Some(v) = self.infoPort { os.write_uint32(5, v)?; }
        if let Some(v) = self.ipcPort { os.write_uint32(6, v)?; }
        if let Some(v) = self.infoSecurePort { os.write_uint32(7, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("DatanodeIDProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<DatanodeIDProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DatanodeIDProto::new)
    }
}

impl ::protobuf::Clear for DatanodeIDProto {
    fn clear(&mut self) {
        self.ipAddr.clear(); self.hostName.clear(); self.datanodeUuid.clear();
        self.xferPort = None; self.infoPort = None; self.ipcPort = None; self.infoSecurePort = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for DatanodeIDProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct DatanodeInfoProto {
    id: ::protobuf::SingularPtrField<DatanodeIDProto>,
    pub capacity: ::std::option::Option<u64>,
    pub dfsUsed: ::std::option::Option<u64>,
    pub remaining: ::std::option::Option<u64>,
    location: ::protobuf::SingularField<::std::string::String>,
    pub adminState: ::std::option::Option<DatanodeInfoProto_AdminState>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl DatanodeInfoProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_id(&self) -> &DatanodeIDProto { self.id.as_ref().unwrap_or_else(|| DatanodeIDProto::default_instance()) }
    pub fn mut_id(&mut self) -> &mut DatanodeIDProto { if self.id.is_none() { self.id.set_default(); } self.id.as_mut().unwrap() }
    pub fn set_id(&mut self, v: DatanodeIDProto) { self.id = ::protobuf::SingularPtrField::some(v); }
    pub fn get_capacity(&self) -> u64 { self.capacity.unwrap_or(0) }
    pub fn get_dfsUsed(&self) -> u64 { self.dfsUsed.unwrap_or(0) }
    pub fn get_remaining(&self) -> u64 { self.remaining.unwrap_or(0) }
    pub fn get_location(&self) -> &str { match self.location.as_ref() { Some(v) => v, None => "" } }
    pub fn get_adminState(&self) -> DatanodeInfoProto_AdminState { self.adminState.unwrap_or(DatanodeInfoProto_AdminState::NORMAL) }
}

impl ::protobuf::Message for DatanodeInfoProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.id)?; },
                2 => { self.capacity = Some(is.read_uint64()?); },
                3 => { self.dfsUsed = Some(is.read_uint64()?); },
                4 => { self.remaining = Some(is.read_uint64()?); },
                6 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.location)?; },
                10 => { self.adminState = Some(is.read_enum()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.id.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(v) = self.capacity { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.dfsUsed { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.remaining { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.location.as_ref() { my_size += ::protobuf::rt::string_size(6, v); }
        if let Some(v) = self.adminState { my_size += ::protobuf::rt::enum_size(10, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.id.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.capacity { os.write_uint64(2, v)?; }
        if let Some(v) = self.dfsUsed { os.write_uint64(3, v)?; }
        if let Some(v) = self.remaining { os.write_uint64(4, v)?; }
        if let Some(ref v) = self.location.as_ref() { os.write_string(6, v)?; }
        if let Some(v) = self.adminState { os.write_enum(10, v.value())?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("DatanodeInfoProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<DatanodeInfoProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DatanodeInfoProto::new)
    }
}

impl ::protobuf::Clear for DatanodeInfoProto {
    fn clear(&mut self) {
        self.id.clear(); self.capacity = None; self.dfsUsed = None; self.remaining = None;
        self.location.clear(); self.adminState = None; self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for DatanodeInfoProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct LocatedBlockProto {
    b: ::protobuf::SingularPtrField<ExtendedBlockProto>,
    pub offset: ::std::option::Option<u64>,
    locs: ::protobuf::RepeatedField<DatanodeInfoProto>,
    pub corrupt: ::std::option::Option<bool>,
    blockToken: ::protobuf::SingularPtrField<TokenProto>,
    storageTypes: ::std::vec::Vec<i32>,
    storageIDs: ::protobuf::RepeatedField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl LocatedBlockProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_b(&self) -> &ExtendedBlockProto { self.b.as_ref().unwrap_or_else(|| ExtendedBlockProto::default_instance()) }
    pub fn set_b(&mut self, v: ExtendedBlockProto) { self.b = ::protobuf::SingularPtrField::some(v); }
    pub fn get_offset(&self) -> u64 { self.offset.unwrap_or(0) }
    pub fn get_locs(&self) -> &[DatanodeInfoProto] { &self.locs }
    pub fn mut_locs(&mut self) -> &mut ::protobuf::RepeatedField<DatanodeInfoProto> { &mut self.locs }
    pub fn get_corrupt(&self) -> bool { self.corrupt.unwrap_or(false) }
    pub fn get_blockToken(&self) -> &TokenProto { self.blockToken.as_ref().unwrap_or_else(|| TokenProto::default_instance()) }
    pub fn get_storageTypes(&self) -> &[i32] { &self.storageTypes }
    pub fn get_storageIDs(&self) -> &[::std::string::String] { &self.storageIDs }
}

impl ::protobuf::Message for LocatedBlockProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.b)?; },
                2 => { self.offset = Some(is.read_uint64()?); },
                3 => { ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.locs)?; },
                4 => { self.corrupt = Some(is.read_bool()?); },
                5 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.blockToken)?; },
                6 => { ::protobuf::rt::read_repeated_enum_into(wire_type, is, &mut self.storageTypes)?; },
                7 => { ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.storageIDs)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.b.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        if let Some(v) = self.offset { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        for value in &self.locs { my_size += ::protobuf::rt::message_size(3, value); }
        if let Some(_v) = self.corrupt { my_size += 2; }
        if let Some(ref v) = self.blockToken.as_ref() { my_size += ::protobuf::rt::message_size(5, v); }
        my_size += 1 * self.storageTypes.len() as u32 + ::protobuf::rt::vec_packed_varint_size(6, &self.storageTypes);
        for value in &self.storageIDs { my_size += ::protobuf::rt::string_size(7, value); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.b.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.offset { os.write_uint64(2, v)?; }
        for v in &self.locs { os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.corrupt { os.write_bool(4, v)?; }
        if let Some(ref v) = self.blockToken.as_ref() { os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        os.write_packed_enum(6, &self.storageTypes)?;
        for v in &self.storageIDs { os.write_string(7, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("LocatedBlockProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<LocatedBlockProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(LocatedBlockProto::new)
    }
}

impl ::protobuf::Clear for LocatedBlockProto {
    fn clear(&mut self) {
        self.b.clear(); self.offset = None; self.locs.clear(); self.corrupt = None;
        self.blockToken.clear(); self.storageTypes.clear(); self.storageIDs.clear();
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for LocatedBlockProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct LocatedBlocksProto {
    pub fileLength: ::std::option::Option<u64>,
    blocks: ::protobuf::RepeatedField<LocatedBlockProto>,
    pub underConstruction: ::std::option::Option<bool>,
    lastBlock: ::protobuf::SingularPtrField<LocatedBlockProto>,
    pub isLastBlockComplete: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl LocatedBlocksProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_fileLength(&self) -> u64 { self.fileLength.unwrap_or(0) }
    pub fn get_blocks(&self) -> &[LocatedBlockProto] { &self.blocks }
    pub fn mut_blocks(&mut self) -> &mut ::protobuf::RepeatedField<LocatedBlockProto> { &mut self.blocks }
    pub fn get_underConstruction(&self) -> bool { self.underConstruction.unwrap_or(false) }
    pub fn get_lastBlock(&self) -> &LocatedBlockProto { self.lastBlock.as_ref().unwrap_or_else(|| LocatedBlockProto::default_instance()) }
    pub fn has_lastBlock(&self) -> bool { self.lastBlock.is_some() }
    pub fn get_isLastBlockComplete(&self) -> bool { self.isLastBlockComplete.unwrap_or(false) }
}

impl ::protobuf::Message for LocatedBlocksProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.fileLength = Some(is.read_uint64()?); },
                2 => { ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.blocks)?; },
                3 => { self.underConstruction = Some(is.read_bool()?); },
                4 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.lastBlock)?; },
                5 => { self.isLastBlockComplete = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.fileLength { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        for value in &self.blocks { my_size += ::protobuf::rt::message_size(2, value); }
        if let Some(_v) = self.underConstruction { my_size += 2; }
        if let Some(ref v) = self.lastBlock.as_ref() { my_size += ::protobuf::rt::message_size(4, v); }
        if let Some(_v) = self.isLastBlockComplete { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.fileLength { os.write_uint64(1, v)?; }
        for v in &self.blocks { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.underConstruction { os.write_bool(3, v)?; }
        if let Some(ref v) = self.lastBlock.as_ref() { os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.isLastBlockComplete { os.write_bool(5, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("LocatedBlocksProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<LocatedBlocksProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(LocatedBlocksProto::new)
    }
}

impl ::protobuf::Clear for LocatedBlocksProto {
    fn clear(&mut self) {
        self.fileLength = None; self.blocks.clear(); self.underConstruction = None;
        self.lastBlock.clear(); self.isLastBlockComplete = None; self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for LocatedBlocksProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct FileEncryptionInfoProto {
    pub suite: ::std::option::Option<CipherSuiteProto>,
    pub cryptoProtocolVersion: ::std::option::Option<CryptoProtocolVersionProto>,
    key: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    iv: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    keyName: ::protobuf::SingularField<::std::string::String>,
    ezKeyVersionName: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl FileEncryptionInfoProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_suite(&self) -> CipherSuiteProto { self.suite.unwrap_or(CipherSuiteProto::UNKNOWN) }
    pub fn get_cryptoProtocolVersion(&self) -> CryptoProtocolVersionProto { self.cryptoProtocolVersion.unwrap_or(CryptoProtocolVersionProto::UNKNOWN_PROTOCOL_VERSION) }
    pub fn get_key(&self) -> &[u8] { match self.key.as_ref() { Some(v) => v, None => &[] } }
    pub fn get_iv(&self) -> &[u8] { match self.iv.as_ref() { Some(v) => v, None => &[] } }
    pub fn get_keyName(&self) -> &str { match self.keyName.as_ref() { Some(v) => v, None => "" } }
    pub fn get_ezKeyVersionName(&self) -> &str { match self.ezKeyVersionName.as_ref() { Some(v) => v, None => "" } }
}

impl ::protobuf::Message for FileEncryptionInfoProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.suite = Some(is.read_enum()?); },
                2 => { self.cryptoProtocolVersion = Some(is.read_enum()?); },
                3 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.key)?; },
                4 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.iv)?; },
                5 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.keyName)?; },
                6 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.ezKeyVersionName)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.suite { my_size += ::protobuf::rt::enum_size(1, v); }
        if let Some(v) = self.cryptoProtocolVersion { my_size += ::protobuf::rt::enum_size(2, v); }
        if let Some(ref v) = self.key.as_ref() { my_size += ::protobuf::rt::bytes_size(3, v); }
        if let Some(ref v) = self.iv.as_ref() { my_size += ::protobuf::rt::bytes_size(4, v); }
        if let Some(ref v) = self.keyName.as_ref() { my_size += ::protobuf::rt::string_size(5, v); }
        if let Some(ref v) = self.ezKeyVersionName.as_ref() { my_size += ::protobuf::rt::string_size(6, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.suite { os.write_enum(1, v.value())?; }
        if let Some(v) = self.cryptoProtocolVersion { os.write_enum(2, v.value())?; }
        if let Some(ref v) = self.key.as_ref() { os.write_bytes(3, v)?; }
        if let Some(ref v) = self.iv.as_ref() { os.write_bytes(4, v)?; }
        if let Some(ref v) = self.keyName.as_ref() { os.write_string(5, v)?; }
        if let Some(ref v) = self.ezKeyVersionName.as_ref() { os.write_string(6, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("FileEncryptionInfoProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<FileEncryptionInfoProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FileEncryptionInfoProto::new)
    }
}

impl ::protobuf::Clear for FileEncryptionInfoProto {
    fn clear(&mut self) {
        self.suite = None; self.cryptoProtocolVersion = None; self.key.clear(); self.iv.clear();
        self.keyName.clear(); self.ezKeyVersionName.clear(); self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for FileEncryptionInfoProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ECSchemaOptionEntryProto {
    key: ::protobuf::SingularField<::std::string::String>,
    value: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ECSchemaOptionEntryProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_key(&self) -> &str { match self.key.as_ref() { Some(v) => v, None => "" } }
    pub fn get_value(&self) -> &str { match self.value.as_ref() { Some(v) => v, None => "" } }
}

impl ::protobuf::Message for ECSchemaOptionEntryProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.key)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.value)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.key.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.value.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.key.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.value.as_ref() { os.write_string(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ECSchemaOptionEntryProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ECSchemaOptionEntryProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ECSchemaOptionEntryProto::new)
    }
}

impl ::protobuf::Clear for ECSchemaOptionEntryProto {
    fn clear(&mut self) { self.key.clear(); self.value.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for ECSchemaOptionEntryProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ECSchemaProto {
    codecName: ::protobuf::SingularField<::std::string::String>,
    pub dataUnits: ::std::option::Option<i32>,
    pub parityUnits: ::std::option::Option<i32>,
    options: ::protobuf::RepeatedField<ECSchemaOptionEntryProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ECSchemaProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_codecName(&self) -> &str { match self.codecName.as_ref() { Some(v) => v, None => "" } }
    pub fn get_dataUnits(&self) -> i32 { self.dataUnits.unwrap_or(0) }
    pub fn get_parityUnits(&self) -> i32 { self.parityUnits.unwrap_or(0) }
    pub fn get_options(&self) -> &[ECSchemaOptionEntryProto] { &self.options }
}

impl ::protobuf::Message for ECSchemaProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.codecName)?; },
                2 => { self.dataUnits = Some(is.read_int32()?); },
                3 => { self.parityUnits = Some(is.read_int32()?); },
                4 => { ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.options)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.codecName.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(v) = self.dataUnits { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.parityUnits { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        for value in &self.options { my_size += ::protobuf::rt::message_size(4, value); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.codecName.as_ref() { os.write_string(1, v)?; }
        if let Some(v) = self.dataUnits { os.write_int32(2, v)?; }
        if let Some(v) = self.parityUnits { os.write_int32(3, v)?; }
        for v in &self.options { os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ECSchemaProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ECSchemaProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ECSchemaProto::new)
    }
}

impl ::protobuf::Clear for ECSchemaProto {
    fn clear(&mut self) {
        self.codecName.clear(); self.dataUnits = None; self.parityUnits = None;
        self.options.clear(); self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for ECSchemaProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ErasureCodingPolicyProto {
    name: ::protobuf::SingularField<::std::string::String>,
    schema: ::protobuf::SingularPtrField<ECSchemaProto>,
    pub cellSize: ::std::option::Option<u32>,
    pub id: ::std::option::Option<u32>,
    pub state: ::std::option::Option<ErasureCodingPolicyState>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ErasureCodingPolicyProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_name(&self) -> &str { match self.name.as_ref() { Some(v) => v, None => "" } }
    pub fn get_schema(&self) -> &ECSchemaProto { self.schema.as_ref().unwrap_or_else(|| ECSchemaProto::default_instance()) }
    pub fn get_cellSize(&self) -> u32 { self.cellSize.unwrap_or(0) }
    pub fn get_id(&self) -> u32 { self.id.unwrap_or(0) }
    pub fn get_state(&self) -> ErasureCodingPolicyState { self.state.unwrap_or(ErasureCodingPolicyState::ENABLED) }
}

impl ::protobuf::Message for ErasureCodingPolicyProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.name)?; },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.schema)?; },
                3 => { self.cellSize = Some(is.read_uint32()?); },
                4 => { self.id = Some(is.read_uint32()?); },
                5 => { self.state = Some(is.read_enum()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.name.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.schema.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        if let Some(v) = self.cellSize { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.id { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.state { my_size += ::protobuf::rt::enum_size(5, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.name.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.schema.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.cellSize { os.write_uint32(3, v)?; }
        if let Some(v) = self.id { os.write_uint32(4, v)?; }
        if let Some(v) = self.state { os.write_enum(5, v.value())?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ErasureCodingPolicyProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ErasureCodingPolicyProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ErasureCodingPolicyProto::new)
    }
}

impl ::protobuf::Clear for ErasureCodingPolicyProto {
    fn clear(&mut self) {
        self.name.clear(); self.schema.clear(); self.cellSize = None; self.id = None;
        self.state = None; self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for ErasureCodingPolicyProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct HdfsFileStatusProto {
    pub fileType: ::std::option::Option<HdfsFileStatusProto_FileType>,
    path: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub length: ::std::option::Option<u64>,
    permission: ::protobuf::SingularPtrField<crate::acl::FsPermissionProto>,
    owner: ::protobuf::SingularField<::std::string::String>,
    group: ::protobuf::SingularField<::std::string::String>,
    pub modification_time: ::std::option::Option<u64>,
    pub access_time: ::std::option::Option<u64>,
    symlink: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub block_replication: ::std::option::Option<u32>,
    pub blocksize: ::std::option::Option<u64>,
    locations: ::protobuf::SingularPtrField<LocatedBlocksProto>,
    pub file_id: ::std::option::Option<u64>,
    pub children_num: ::std::option::Option<i32>,
    file_encryption_info: ::protobuf::SingularPtrField<FileEncryptionInfoProto>,
    pub storage_policy: ::std::option::Option<u32>,
    ec_policy: ::protobuf::SingularPtrField<ErasureCodingPolicyProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl HdfsFileStatusProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_fileType(&self) -> HdfsFileStatusProto_FileType { self.fileType.unwrap_or(HdfsFileStatusProto_FileType::IS_FILE) }
    pub fn get_path(&self) -> &[u8] { match self.path.as_ref() { Some(v) => v, None => &[] } }
    pub fn get_length(&self) -> u64 { self.length.unwrap_or(0) }
    pub fn get_permission(&self) -> &crate::acl::FsPermissionProto { self.permission.as_ref().unwrap_or_else(|| crate::acl::FsPermissionProto::default_instance()) }
    pub fn get_owner(&self) -> &str { match self.owner.as_ref() { Some(v) => v, None => "" } }
    pub fn get_group(&self) -> &str { match self.group.as_ref() { Some(v) => v, None => "" } }
    pub fn get_modification_time(&self) -> u64 { self.modification_time.unwrap_or(0) }
    pub fn get_access_time(&self) -> u64 { self.access_time.unwrap_or(0) }
    pub fn get_symlink(&self) -> &[u8] { match self.symlink.as_ref() { Some(v) => v, None => &[] } }
    pub fn has_symlink(&self) -> bool { self.symlink.is_some() }
    pub fn get_block_replication(&self) -> u32 { self.block_replication.unwrap_or(0) }
    pub fn get_blocksize(&self) -> u64 { self.blocksize.unwrap_or(0) }
    pub fn get_locations(&self) -> &LocatedBlocksProto { self.locations.as_ref().unwrap_or_else(|| LocatedBlocksProto::default_instance()) }
    pub fn has_locations(&self) -> bool { self.locations.is_some() }
    pub fn get_file_id(&self) -> u64 { self.file_id.unwrap_or(0) }
    pub fn get_children_num(&self) -> i32 { self.children_num.unwrap_or(-1) }
    pub fn get_file_encryption_info(&self) -> &FileEncryptionInfoProto { self.file_encryption_info.as_ref().unwrap_or_else(|| FileEncryptionInfoProto::default_instance()) }
    pub fn has_file_encryption_info(&self) -> bool { self.file_encryption_info.is_some() }
    pub fn get_storage_policy(&self) -> u32 { self.storage_policy.unwrap_or(0) }
    pub fn get_ec_policy(&self) -> &ErasureCodingPolicyProto { self.ec_policy.as_ref().unwrap_or_else(|| ErasureCodingPolicyProto::default_instance()) }
    pub fn has_ec_policy(&self) -> bool { self.ec_policy.is_some() }
}

impl ::protobuf::Message for HdfsFileStatusProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.fileType = Some(is.read_enum()?); },
                2 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.path)?; },
                3 => { self.length = Some(is.read_uint64()?); },
                4 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.permission)?; },
                5 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.owner)?; },
                6 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.group)?; },
                7 => { self.modification_time = Some(is.read_uint64()?); },
                8 => { self.access_time = Some(is.read_uint64()?); },
                9 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.symlink)?; },
                10 => { self.block_replication = Some(is.read_uint32()?); },
                11 => { self.blocksize = Some(is.read_uint64()?); },
                12 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.locations)?; },
                13 => { self.file_id = Some(is.read_uint64()?); },
                14 => { self.children_num = Some(is.read_int32()?); },
                15 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.file_encryption_info)?; },
                16 => { self.storage_policy = Some(is.read_uint32()?); },
                17 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.ec_policy)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.fileType { my_size += ::protobuf::rt::enum_size(1, v); }
        if let Some(ref v) = self.path.as_ref() { my_size += ::protobuf::rt::bytes_size(2, v); }
        if let Some(v) = self.length { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.permission.as_ref() { my_size += ::protobuf::rt::message_size(4, v); }
        if let Some(ref v) = self.owner.as_ref() { my_size += ::protobuf::rt::string_size(5, v); }
        if let Some(ref v) = self.group.as_ref() { my_size += ::protobuf::rt::string_size(6, v); }
        if let Some(v) = self.modification_time { my_size += ::protobuf::rt::value_size(7, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.access_time { my_size += ::protobuf::rt::value_size(8, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.symlink.as_ref() { my_size += ::protobuf::rt::bytes_size(9, v); }
        if let Some(v) = self.block_replication { my_size += ::protobuf::rt::value_size(10, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.blocksize { my_size += ::protobuf::rt::value_size(11, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.locations.as_ref() { my_size += ::protobuf::rt::message_size(12, v); }
        if let Some(v) = self.file_id { my_size += ::protobuf::rt::value_size(13, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.children_num { my_size += ::protobuf::rt::value_size(14, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.file_encryption_info.as_ref() { my_size += ::protobuf::rt::message_size(15, v); }
        if let Some(v) = self.storage_policy { my_size += ::protobuf::rt::value_size(16, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(ref v) = self.ec_policy.as_ref() { my_size += ::protobuf::rt::message_size(17, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.fileType { os.write_enum(1, v.value())?; }
        if let Some(ref v) = self.path.as_ref() { os.write_bytes(2, v)?; }
        if let Some(v) = self.length { os.write_uint64(3, v)?; }
        if let Some(ref v) = self.permission.as_ref() { os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.owner.as_ref() { os.write_string(5, v)?; }
        if let Some(ref v) = self.group.as_ref() { os.write_string(6, v)?; }
        if let Some(v) = self.modification_time { os.write_uint64(7, v)?; }
        if let Some(v) = self.access_time { os.write_uint64(8, v)?; }
        if let Some(ref v) = self.symlink.as_ref() { os.write_bytes(9, v)?; }
        if let Some(v) = self.block_replication { os.write_uint32(10, v)?; }
        if let Some(v) = self.blocksize { os.write_uint64(11, v)?; }
        if let Some(ref v) = self.locations.as_ref() { os.write_tag(12, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.file_id { os.write_uint64(13, v)?; }
        if let Some(v) = self.children_num { os.write_int32(14, v)?; }
        if let Some(ref v) = self.file_encryption_info.as_ref() { os.write_tag(15, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.storage_policy { os.write_uint32(16, v)?; }
        if let Some(ref v) = self.ec_policy.as_ref() { os.write_tag(17, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("HdfsFileStatusProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<HdfsFileStatusProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(HdfsFileStatusProto::new)
    }
}

impl ::protobuf::Clear for HdfsFileStatusProto {
    fn clear(&mut self) {
        self.fileType = None; self.path.clear(); self.length = None; self.permission.clear();
        self.owner.clear(); self.group.clear(); self.modification_time = None; self.access_time = None;
        self.symlink.clear(); self.block_replication = None; self.blocksize = None; self.locations.clear();
        self.file_id = None; self.children_num = None; self.file_encryption_info.clear();
        self.storage_policy = None; self.ec_policy.clear(); self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for HdfsFileStatusProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct ContentSummaryProto {
    pub length: ::std::option::Option<u64>,
    pub fileCount: ::std::option::Option<u64>,
    pub directoryCount: ::std::option::Option<u64>,
    pub quota: ::std::option::Option<u64>,
    pub spaceConsumed: ::std::option::Option<u64>,
    pub spaceQuota: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl ContentSummaryProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_length(&self) -> u64 { self.length.unwrap_or(0) }
    pub fn get_fileCount(&self) -> u64 { self.fileCount.unwrap_or(0) }
    pub fn get_directoryCount(&self) -> u64 { self.directoryCount.unwrap_or(0) }
    pub fn get_quota(&self) -> u64 { self.quota.unwrap_or(0) }
    pub fn get_spaceConsumed(&self) -> u64 { self.spaceConsumed.unwrap_or(0) }
    pub fn get_spaceQuota(&self) -> u64 { self.spaceQuota.unwrap_or(0) }
}

impl ::protobuf::Message for ContentSummaryProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.length = Some(is.read_uint64()?); },
                2 => { self.fileCount = Some(is.read_uint64()?); },
                3 => { self.directoryCount = Some(is.read_uint64()?); },
                4 => { self.quota = Some(is.read_uint64()?); },
                5 => { self.spaceConsumed = Some(is.read_uint64()?); },
                6 => { self.spaceQuota = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.length { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.fileCount { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.directoryCount { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.quota { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.spaceConsumed { my_size += ::protobuf::rt::value_size(5, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.spaceQuota { my_size += ::protobuf::rt::value_size(6, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.length { os.write_uint64(1, v)?; }
        if let Some(v) = self.fileCount { os.write_uint64(2, v)?; }
        if let Some(v) = self.directoryCount { os.write_uint64(3, v)?; }
        if let Some(v) = self.quota { os.write_uint64(4, v)?; }
        if let Some(v) = self.spaceConsumed { os.write_uint64(5, v)?; }
        if let Some(v) = self.spaceQuota { os.write_uint64(6, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("ContentSummaryProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<ContentSummaryProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ContentSummaryProto::new)
    }
}

impl ::protobuf::Clear for ContentSummaryProto {
    fn clear(&mut self) {
        self.length = None; self.fileCount = None; self.directoryCount = None;
        self.quota = None; self.spaceConsumed = None; self.spaceQuota = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for ContentSummaryProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct FsServerDefaultsProto {
    pub blockSize: ::std::option::Option<u64>,
    pub bytesPerChecksum: ::std::option::Option<u32>,
    pub writePacketSize: ::std::option::Option<u32>,
    pub replication: ::std::option::Option<u32>,
    pub fileBufferSize: ::std::option::Option<u32>,
    pub encryptDataTransfer: ::std::option::Option<bool>,
    pub trashInterval: ::std::option::Option<u64>,
    pub checksumType: ::std::option::Option<crate::datatransfer::ChecksumTypeProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl FsServerDefaultsProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_blockSize(&self) -> u64 { self.blockSize.unwrap_or(0) }
    pub fn get_bytesPerChecksum(&self) -> u32 { self.bytesPerChecksum.unwrap_or(0) }
    pub fn get_writePacketSize(&self) -> u32 { self.writePacketSize.unwrap_or(0) }
    pub fn get_replication(&self) -> u32 { self.replication.unwrap_or(0) }
    pub fn get_fileBufferSize(&self) -> u32 { self.fileBufferSize.unwrap_or(0) }
    pub fn get_encryptDataTransfer(&self) -> bool { self.encryptDataTransfer.unwrap_or(false) }
    pub fn get_trashInterval(&self) -> u64 { self.trashInterval.unwrap_or(0) }
    pub fn get_checksumType(&self) -> crate::datatransfer::ChecksumTypeProto { self.checksumType.unwrap_or(crate::datatransfer::ChecksumTypeProto::CHECKSUM_CRC32C) }
}

impl ::protobuf::Message for FsServerDefaultsProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.blockSize = Some(is.read_uint64()?); },
                2 => { self.bytesPerChecksum = Some(is.read_uint32()?); },
                3 => { self.writePacketSize = Some(is.read_uint32()?); },
                4 => { self.replication = Some(is.read_uint32()?); },
                5 => { self.fileBufferSize = Some(is.read_uint32()?); },
                6 => { self.encryptDataTransfer = Some(is.read_bool()?); },
                7 => { self.trashInterval = Some(is.read_uint64()?); },
                8 => { self.checksumType = Some(is.read_enum()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.blockSize { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.bytesPerChecksum { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.writePacketSize { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.replication { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.fileBufferSize { my_size += ::protobuf::rt::value_size(5, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(_v) = self.encryptDataTransfer { my_size += 2; }
        if let Some(v) = self.trashInterval { my_size += ::protobuf::rt::value_size(7, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.checksumType { my_size += ::protobuf::rt::enum_size(8, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.blockSize { os.write_uint64(1, v)?; }
        if let Some(v) = self.bytesPerChecksum { os.write_uint32(2, v)?; }
        if let Some(v) = self.writePacketSize { os.write_uint32(3, v)?; }
        if let Some(v) = self.replication { os.write_uint32(4, v)?; }
        if let Some(v) = self.fileBufferSize { os.write_uint32(5, v)?; }
        if let Some(v) = self.encryptDataTransfer { os.write_bool(6, v)?; }
        if let Some(v) = self.trashInterval { os.write_uint64(7, v)?; }
        if let Some(v) = self.checksumType { os.write_enum(8, v.value())?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("FsServerDefaultsProto", Vec::new(), file_descriptor_proto_for("hdfs.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<FsServerDefaultsProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FsServerDefaultsProto::new)
    }
}

impl ::protobuf::Clear for FsServerDefaultsProto {
    fn clear(&mut self) {
        self.blockSize = None; self.bytesPerChecksum = None; self.writePacketSize = None;
        self.replication = None; self.fileBufferSize = None; self.encryptDataTransfer = None;
        self.trashInterval = None; self.checksumType = None; self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for FsServerDefaultsProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
