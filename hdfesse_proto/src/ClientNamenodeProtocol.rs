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
//! Generated file from `ClientNamenodeProtocol.proto`

use crate::support::file_descriptor_proto_for;
use crate::acl::FsPermissionProto;
use crate::hdfs::{ContentSummaryProto, ExtendedBlockProto, FsServerDefaultsProto, HdfsFileStatusProto, LocatedBlockProto, LocatedBlocksProto};

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetFileInfoRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetFileInfoRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for GetFileInfoRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetFileInfoRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetFileInfoRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetFileInfoRequestProto::new)
    }
}
impl ::protobuf::Clear for GetFileInfoRequestProto {
    fn clear(&mut self) { self.src.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetFileInfoRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetFileInfoResponseProto {
    fs: ::protobuf::SingularPtrField<HdfsFileStatusProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetFileInfoResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_fs(&self) -> &HdfsFileStatusProto { self.fs.as_ref().unwrap_or_else(|| HdfsFileStatusProto::default_instance()) }
    pub fn has_fs(&self) -> bool { self.fs.is_some() }
}

impl ::protobuf::Message for GetFileInfoResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.fs)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.fs.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.fs.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetFileInfoResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetFileInfoResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetFileInfoResponseProto::new)
    }
}
impl ::protobuf::Clear for GetFileInfoResponseProto {
    fn clear(&mut self) { self.fs.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetFileInfoResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetListingRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    startAfter: ::protobuf::SingularField<::std::vec::Vec<u8>>,
    pub needLocation: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetListingRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_startAfter(&self) -> &[u8] { match self.startAfter.as_ref() { Some(v) => v, None => &[] } }
    pub fn set_startAfter(&mut self, v: ::std::vec::Vec<u8>) { self.startAfter = ::protobuf::SingularField::some(v); }
    pub fn get_needLocation(&self) -> bool { self.needLocation.unwrap_or(false) }
    pub fn set_needLocation(&mut self, v: bool) { self.needLocation = Some(v); }
}

impl ::protobuf::Message for GetListingRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_bytes_into(wire_type, is, &mut self.startAfter)?; },
                3 => { self.needLocation = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.startAfter.as_ref() { my_size += ::protobuf::rt::bytes_size(2, v); }
        if let Some(_v) = self.needLocation { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.startAfter.as_ref() { os.write_bytes(2, v)?; }
        if let Some(v) = self.needLocation { os.write_bool(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetListingRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetListingRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetListingRequestProto::new)
    }
}
impl ::protobuf::Clear for GetListingRequestProto {
    fn clear(&mut self) { self.src.clear(); self.startAfter.clear(); self.needLocation = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetListingRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct DirectoryListingProto {
    partialListing: ::protobuf::RepeatedField<HdfsFileStatusProto>,
    pub remainingEntries: ::std::option::Option<u32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl DirectoryListingProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_partialListing(&self) -> &[HdfsFileStatusProto] { &self.partialListing }
    pub fn mut_partialListing(&mut self) -> &mut ::protobuf::RepeatedField<HdfsFileStatusProto> { &mut self.partialListing }
    pub fn get_remainingEntries(&self) -> u32 { self.remainingEntries.unwrap_or(0) }
}

impl ::protobuf::Message for DirectoryListingProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.partialListing)?; },
                2 => { self.remainingEntries = Some(is.read_uint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.partialListing { my_size += ::protobuf::rt::message_size(1, value); }
        if let Some(v) = self.remainingEntries { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.partialListing { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.remainingEntries { os.write_uint32(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("DirectoryListingProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<DirectoryListingProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DirectoryListingProto::new)
    }
}
impl ::protobuf::Clear for DirectoryListingProto {
    fn clear(&mut self) { self.partialListing.clear(); self.remainingEntries = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for DirectoryListingProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetListingResponseProto {
    dirList: ::protobuf::SingularPtrField<DirectoryListingProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetListingResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_dirList(&self) -> &DirectoryListingProto { self.dirList.as_ref().unwrap_or_else(|| DirectoryListingProto::default_instance()) }
    pub fn has_dirList(&self) -> bool { self.dirList.is_some() }
}

impl ::protobuf::Message for GetListingResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.dirList)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.dirList.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.dirList.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetListingResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetListingResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetListingResponseProto::new)
    }
}
impl ::protobuf::Clear for GetListingResponseProto {
    fn clear(&mut self) { self.dirList.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetListingResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct RenameRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    dst: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl RenameRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_dst(&self) -> &str { match self.dst.as_ref() { Some(v) => v, None => "" } }
    pub fn set_dst(&mut self, v: ::std::string::String) { self.dst = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for RenameRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.dst)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.dst.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.dst.as_ref() { os.write_string(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("RenameRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<RenameRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(RenameRequestProto::new)
    }
}
impl ::protobuf::Clear for RenameRequestProto {
    fn clear(&mut self) { self.src.clear(); self.dst.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for RenameRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct RenameResponseProto {
    pub result: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl RenameResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_result(&self) -> bool { self.result.unwrap_or(false) }
}

impl ::protobuf::Message for RenameResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.result = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(_v) = self.result { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.result { os.write_bool(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("RenameResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<RenameResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(RenameResponseProto::new)
    }
}
impl ::protobuf::Clear for RenameResponseProto {
    fn clear(&mut self) { self.result = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for RenameResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct Rename2RequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    dst: ::protobuf::SingularField<::std::string::String>,
    pub overwriteDest: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl Rename2RequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_dst(&self) -> &str { match self.dst.as_ref() { Some(v) => v, None => "" } }
    pub fn set_dst(&mut self, v: ::std::string::String) { self.dst = ::protobuf::SingularField::some(v); }
    pub fn get_overwriteDest(&self) -> bool { self.overwriteDest.unwrap_or(false) }
    pub fn set_overwriteDest(&mut self, v: bool) { self.overwriteDest = Some(v); }
}

impl ::protobuf::Message for Rename2RequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.dst)?; },
                3 => { self.overwriteDest = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.dst.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        if let Some(_v) = self.overwriteDest { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.dst.as_ref() { os.write_string(2, v)?; }
        if let Some(v) = self.overwriteDest { os.write_bool(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("Rename2RequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<Rename2RequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Rename2RequestProto::new)
    }
}
impl ::protobuf::Clear for Rename2RequestProto {
    fn clear(&mut self) { self.src.clear(); self.dst.clear(); self.overwriteDest = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for Rename2RequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct Rename2ResponseProto {
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl Rename2ResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
}

impl ::protobuf::Message for Rename2ResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let my_size = ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("Rename2ResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<Rename2ResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Rename2ResponseProto::new)
    }
}
impl ::protobuf::Clear for Rename2ResponseProto {
    fn clear(&mut self) { self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for Rename2ResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct DeleteRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    pub recursive: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl DeleteRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_recursive(&self) -> bool { self.recursive.unwrap_or(false) }
    pub fn set_recursive(&mut self, v: bool) { self.recursive = Some(v); }
}

impl ::protobuf::Message for DeleteRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { self.recursive = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(_v) = self.recursive { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(v) = self.recursive { os.write_bool(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("DeleteRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<DeleteRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DeleteRequestProto::new)
    }
}
impl ::protobuf::Clear for DeleteRequestProto {
    fn clear(&mut self) { self.src.clear(); self.recursive = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for DeleteRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct DeleteResponseProto {
    pub result: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl DeleteResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_result(&self) -> bool { self.result.unwrap_or(false) }
}

impl ::protobuf::Message for DeleteResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.result = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(_v) = self.result { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.result { os.write_bool(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("DeleteResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<DeleteResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DeleteResponseProto::new)
    }
}
impl ::protobuf::Clear for DeleteResponseProto {
    fn clear(&mut self) { self.result = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for DeleteResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct MkdirsRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    masked: ::protobuf::SingularPtrField<FsPermissionProto>,
    pub createParent: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl MkdirsRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_masked(&self) -> &FsPermissionProto { self.masked.as_ref().unwrap_or_else(|| FsPermissionProto::default_instance()) }
    pub fn mut_masked(&mut self) -> &mut FsPermissionProto { if self.masked.is_none() { self.masked.set_default(); } self.masked.as_mut().unwrap() }
    pub fn set_masked(&mut self, v: FsPermissionProto) { self.masked = ::protobuf::SingularPtrField::some(v); }
    pub fn get_createParent(&self) -> bool { self.createParent.unwrap_or(false) }
    pub fn set_createParent(&mut self, v: bool) { self.createParent = Some(v); }
}

impl ::protobuf::Message for MkdirsRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.masked)?; },
                3 => { self.createParent = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.masked.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        if let Some(_v) = self.createParent { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.masked.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.createParent { os.write_bool(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("MkdirsRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<MkdirsRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MkdirsRequestProto::new)
    }
}
impl ::protobuf::Clear for MkdirsRequestProto {
    fn clear(&mut self) { self.src.clear(); self.masked.clear(); self.createParent = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for MkdirsRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct MkdirsResponseProto {
    pub result: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl MkdirsResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_result(&self) -> bool { self.result.unwrap_or(false) }
}

impl ::protobuf::Message for MkdirsResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.result = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(_v) = self.result { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.result { os.write_bool(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("MkdirsResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<MkdirsResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MkdirsResponseProto::new)
    }
}
impl ::protobuf::Clear for MkdirsResponseProto {
    fn clear(&mut self) { self.result = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for MkdirsResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetReplicationRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    pub replication: ::std::option::Option<u32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetReplicationRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_replication(&self) -> u32 { self.replication.unwrap_or(0) }
    pub fn set_replication(&mut self, v: u32) { self.replication = Some(v); }
}

impl ::protobuf::Message for SetReplicationRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { self.replication = Some(is.read_uint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(v) = self.replication { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(v) = self.replication { os.write_uint32(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetReplicationRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetReplicationRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetReplicationRequestProto::new)
    }
}
impl ::protobuf::Clear for SetReplicationRequestProto {
    fn clear(&mut self) { self.src.clear(); self.replication = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetReplicationRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetReplicationResponseProto {
    pub result: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetReplicationResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_result(&self) -> bool { self.result.unwrap_or(false) }
}

impl ::protobuf::Message for SetReplicationResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.result = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(_v) = self.result { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.result { os.write_bool(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetReplicationResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetReplicationResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetReplicationResponseProto::new)
    }
}
impl ::protobuf::Clear for SetReplicationResponseProto {
    fn clear(&mut self) { self.result = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetReplicationResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetPermissionRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    permission: ::protobuf::SingularPtrField<FsPermissionProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetPermissionRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_permission(&self) -> &FsPermissionProto { self.permission.as_ref().unwrap_or_else(|| FsPermissionProto::default_instance()) }
    pub fn mut_permission(&mut self) -> &mut FsPermissionProto { if self.permission.is_none() { self.permission.set_default(); } self.permission.as_mut().unwrap() }
    pub fn set_permission(&mut self, v: FsPermissionProto) { self.permission = ::protobuf::SingularPtrField::some(v); }
}

impl ::protobuf::Message for SetPermissionRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.permission)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.permission.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.permission.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetPermissionRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetPermissionRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetPermissionRequestProto::new)
    }
}
impl ::protobuf::Clear for SetPermissionRequestProto {
    fn clear(&mut self) { self.src.clear(); self.permission.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetPermissionRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetPermissionResponseProto {
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetPermissionResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
}

impl ::protobuf::Message for SetPermissionResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let my_size = ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetPermissionResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetPermissionResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetPermissionResponseProto::new)
    }
}
impl ::protobuf::Clear for SetPermissionResponseProto {
    fn clear(&mut self) { self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetPermissionResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetOwnerRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    username: ::protobuf::SingularField<::std::string::String>,
    groupname: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetOwnerRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_username(&self) -> &str { match self.username.as_ref() { Some(v) => v, None => "" } }
    pub fn set_username(&mut self, v: ::std::string::String) { self.username = ::protobuf::SingularField::some(v); }
    pub fn get_groupname(&self) -> &str { match self.groupname.as_ref() { Some(v) => v, None => "" } }
    pub fn set_groupname(&mut self, v: ::std::string::String) { self.groupname = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for SetOwnerRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.username)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.groupname)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.username.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        if let Some(ref v) = self.groupname.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.username.as_ref() { os.write_string(2, v)?; }
        if let Some(ref v) = self.groupname.as_ref() { os.write_string(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetOwnerRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetOwnerRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetOwnerRequestProto::new)
    }
}
impl ::protobuf::Clear for SetOwnerRequestProto {
    fn clear(&mut self) { self.src.clear(); self.username.clear(); self.groupname.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetOwnerRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct SetOwnerResponseProto {
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl SetOwnerResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
}

impl ::protobuf::Message for SetOwnerResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let my_size = ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("SetOwnerResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<SetOwnerResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(SetOwnerResponseProto::new)
    }
}
impl ::protobuf::Clear for SetOwnerResponseProto {
    fn clear(&mut self) { self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for SetOwnerResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetBlockLocationsRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    pub offset: ::std::option::Option<u64>,
    pub length: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetBlockLocationsRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_offset(&self) -> u64 { self.offset.unwrap_or(0) }
    pub fn set_offset(&mut self, v: u64) { self.offset = Some(v); }
    pub fn get_length(&self) -> u64 { self.length.unwrap_or(0) }
    pub fn set_length(&mut self, v: u64) { self.length = Some(v); }
}

impl ::protobuf::Message for GetBlockLocationsRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { self.offset = Some(is.read_uint64()?); },
                3 => { self.length = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(v) = self.offset { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.length { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(v) = self.offset { os.write_uint64(2, v)?; }
        if let Some(v) = self.length { os.write_uint64(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetBlockLocationsRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetBlockLocationsRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetBlockLocationsRequestProto::new)
    }
}
impl ::protobuf::Clear for GetBlockLocationsRequestProto {
    fn clear(&mut self) { self.src.clear(); self.offset = None; self.length = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetBlockLocationsRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetBlockLocationsResponseProto {
    locations: ::protobuf::SingularPtrField<LocatedBlocksProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetBlockLocationsResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_locations(&self) -> &LocatedBlocksProto { self.locations.as_ref().unwrap_or_else(|| LocatedBlocksProto::default_instance()) }
    pub fn has_locations(&self) -> bool { self.locations.is_some() }
}

impl ::protobuf::Message for GetBlockLocationsResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.locations)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.locations.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.locations.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetBlockLocationsResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetBlockLocationsResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetBlockLocationsResponseProto::new)
    }
}
impl ::protobuf::Clear for GetBlockLocationsResponseProto {
    fn clear(&mut self) { self.locations.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetBlockLocationsResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetServerDefaultsRequestProto {
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetServerDefaultsRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
}

impl ::protobuf::Message for GetServerDefaultsRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let my_size = ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetServerDefaultsRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetServerDefaultsRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetServerDefaultsRequestProto::new)
    }
}
impl ::protobuf::Clear for GetServerDefaultsRequestProto {
    fn clear(&mut self) { self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetServerDefaultsRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetServerDefaultsResponseProto {
    serverDefaults: ::protobuf::SingularPtrField<FsServerDefaultsProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetServerDefaultsResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_serverDefaults(&self) -> &FsServerDefaultsProto { self.serverDefaults.as_ref().unwrap_or_else(|| FsServerDefaultsProto::default_instance()) }
    pub fn has_serverDefaults(&self) -> bool { self.serverDefaults.is_some() }
}

impl ::protobuf::Message for GetServerDefaultsResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.serverDefaults)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.serverDefaults.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.serverDefaults.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetServerDefaultsResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetServerDefaultsResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetServerDefaultsResponseProto::new)
    }
}
impl ::protobuf::Clear for GetServerDefaultsResponseProto {
    fn clear(&mut self) { self.serverDefaults.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetServerDefaultsResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetContentSummaryRequestProto {
    path: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetContentSummaryRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_path(&self) -> &str { match self.path.as_ref() { Some(v) => v, None => "" } }
    pub fn set_path(&mut self, v: ::std::string::String) { self.path = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for GetContentSummaryRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.path)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.path.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.path.as_ref() { os.write_string(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetContentSummaryRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetContentSummaryRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetContentSummaryRequestProto::new)
    }
}
impl ::protobuf::Clear for GetContentSummaryRequestProto {
    fn clear(&mut self) { self.path.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetContentSummaryRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetContentSummaryResponseProto {
    summary: ::protobuf::SingularPtrField<ContentSummaryProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetContentSummaryResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_summary(&self) -> &ContentSummaryProto { self.summary.as_ref().unwrap_or_else(|| ContentSummaryProto::default_instance()) }
    pub fn has_summary(&self) -> bool { self.summary.is_some() }
}

impl ::protobuf::Message for GetContentSummaryResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.summary)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.summary.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.summary.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetContentSummaryResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetContentSummaryResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetContentSummaryResponseProto::new)
    }
}
impl ::protobuf::Clear for GetContentSummaryResponseProto {
    fn clear(&mut self) { self.summary.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetContentSummaryResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetFsStatusRequestProto {
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetFsStatusRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
}

impl ::protobuf::Message for GetFsStatusRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let my_size = ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetFsStatusRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetFsStatusRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetFsStatusRequestProto::new)
    }
}
impl ::protobuf::Clear for GetFsStatusRequestProto {
    fn clear(&mut self) { self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for GetFsStatusRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct GetFsStatusResponseProto {
    pub capacity: ::std::option::Option<u64>,
    pub used: ::std::option::Option<u64>,
    pub remaining: ::std::option::Option<u64>,
    pub under_replicated: ::std::option::Option<u64>,
    pub corrupt_blocks: ::std::option::Option<u64>,
    pub missing_blocks: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl GetFsStatusResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_capacity(&self) -> u64 { self.capacity.unwrap_or(0) }
    pub fn get_used(&self) -> u64 { self.used.unwrap_or(0) }
    pub fn get_remaining(&self) -> u64 { self.remaining.unwrap_or(0) }
    pub fn get_under_replicated(&self) -> u64 { self.under_replicated.unwrap_or(0) }
    pub fn get_corrupt_blocks(&self) -> u64 { self.corrupt_blocks.unwrap_or(0) }
    pub fn get_missing_blocks(&self) -> u64 { self.missing_blocks.unwrap_or(0) }
}

impl ::protobuf::Message for GetFsStatusResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.capacity = Some(is.read_uint64()?); },
                2 => { self.used = Some(is.read_uint64()?); },
                3 => { self.remaining = Some(is.read_uint64()?); },
                4 => { self.under_replicated = Some(is.read_uint64()?); },
                5 => { self.corrupt_blocks = Some(is.read_uint64()?); },
                6 => { self.missing_blocks = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.capacity { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.used { my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.remaining { my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.under_replicated { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.corrupt_blocks { my_size += ::protobuf::rt::value_size(5, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.missing_blocks { my_size += ::protobuf::rt::value_size(6, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.capacity { os.write_uint64(1, v)?; }
        if let Some(v) = self.used { os.write_uint64(2, v)?; }
        if let Some(v) = self.remaining { os.write_uint64(3, v)?; }
        if let Some(v) = self.under_replicated { os.write_uint64(4, v)?; }
        if let Some(v) = self.corrupt_blocks { os.write_uint64(5, v)?; }
        if let Some(v) = self.missing_blocks { os.write_uint64(6, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("GetFsStatusResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<GetFsStatusResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(GetFsStatusResponseProto::new)
    }
}
impl ::protobuf::Clear for GetFsStatusResponseProto {
    fn clear(&mut self) {
        self.capacity = None; self.used = None; self.remaining = None;
        self.under_replicated = None; self.corrupt_blocks = None; self.missing_blocks = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for GetFsStatusResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct CreateRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    masked: ::protobuf::SingularPtrField<FsPermissionProto>,
    clientName: ::protobuf::SingularField<::std::string::String>,
    pub createFlag: ::std::option::Option<u32>,
    pub createParent: ::std::option::Option<bool>,
    pub replication: ::std::option::Option<u32>,
    pub blockSize: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl CreateRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_masked(&self) -> &FsPermissionProto { self.masked.as_ref().unwrap_or_else(|| FsPermissionProto::default_instance()) }
    pub fn set_masked(&mut self, v: FsPermissionProto) { self.masked = ::protobuf::SingularPtrField::some(v); }
    pub fn get_clientName(&self) -> &str { match self.clientName.as_ref() { Some(v) => v, None => "" } }
    pub fn set_clientName(&mut self, v: ::std::string::String) { self.clientName = ::protobuf::SingularField::some(v); }
    pub fn get_createFlag(&self) -> u32 { self.createFlag.unwrap_or(0) }
    pub fn set_createFlag(&mut self, v: u32) { self.createFlag = Some(v); }
    pub fn get_createParent(&self) -> bool { self.createParent.unwrap_or(false) }
    pub fn set_createParent(&mut self, v: bool) { self.createParent = Some(v); }
    pub fn get_replication(&self) -> u32 { self.replication.unwrap_or(0) }
    pub fn set_replication(&mut self, v: u32) { self.replication = Some(v); }
    pub fn get_blockSize(&self) -> u64 { self.blockSize.unwrap_or(0) }
    pub fn set_blockSize(&mut self, v: u64) { self.blockSize = Some(v); }
}

impl ::protobuf::Message for CreateRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.masked)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.clientName)?; },
                4 => { self.createFlag = Some(is.read_uint32()?); },
                5 => { self.createParent = Some(is.read_bool()?); },
                6 => { self.replication = Some(is.read_uint32()?); },
                7 => { self.blockSize = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.masked.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        if let Some(ref v) = self.clientName.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        if let Some(v) = self.createFlag { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(_v) = self.createParent { my_size += 2; }
        if let Some(v) = self.replication { my_size += ::protobuf::rt::value_size(6, v, ::protobuf::wire_format::WireTypeVarint); }
        if let Some(v) = self.blockSize { my_size += ::protobuf::rt::value_size(7, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.masked.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.clientName.as_ref() { os.write_string(3, v)?; }
        if let Some(v) = self.createFlag { os.write_uint32(4, v)?; }
        if let Some(v) = self.createParent { os.write_bool(5, v)?; }
        if let Some(v) = self.replication { os.write_uint32(6, v)?; }
        if let Some(v) = self.blockSize { os.write_uint64(7, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("CreateRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<CreateRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CreateRequestProto::new)
    }
}
impl ::protobuf::Clear for CreateRequestProto {
    fn clear(&mut self) {
        self.src.clear(); self.masked.clear(); self.clientName.clear();
        self.createFlag = None; self.createParent = None; self.replication = None; self.blockSize = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for CreateRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct CreateResponseProto {
    fs: ::protobuf::SingularPtrField<HdfsFileStatusProto>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl CreateResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_fs(&self) -> &HdfsFileStatusProto { self.fs.as_ref().unwrap_or_else(|| HdfsFileStatusProto::default_instance()) }
    pub fn has_fs(&self) -> bool { self.fs.is_some() }
}

impl ::protobuf::Message for CreateResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.fs)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.fs.as_ref() { my_size += ::protobuf::rt::message_size(1, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.fs.as_ref() { os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("CreateResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<CreateResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CreateResponseProto::new)
    }
}
impl ::protobuf::Clear for CreateResponseProto {
    fn clear(&mut self) { self.fs.clear(); self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for CreateResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct CompleteRequestProto {
    src: ::protobuf::SingularField<::std::string::String>,
    clientName: ::protobuf::SingularField<::std::string::String>,
    last: ::protobuf::SingularPtrField<ExtendedBlockProto>,
    pub fileId: ::std::option::Option<u64>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl CompleteRequestProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_src(&self) -> &str { match self.src.as_ref() { Some(v) => v, None => "" } }
    pub fn set_src(&mut self, v: ::std::string::String) { self.src = ::protobuf::SingularField::some(v); }
    pub fn get_clientName(&self) -> &str { match self.clientName.as_ref() { Some(v) => v, None => "" } }
    pub fn set_clientName(&mut self, v: ::std::string::String) { self.clientName = ::protobuf::SingularField::some(v); }
    pub fn get_last(&self) -> &ExtendedBlockProto { self.last.as_ref().unwrap_or_else(|| ExtendedBlockProto::default_instance()) }
    pub fn set_last(&mut self, v: ExtendedBlockProto) { self.last = ::protobuf::SingularPtrField::some(v); }
    pub fn get_fileId(&self) -> u64 { self.fileId.unwrap_or(0) }
    pub fn set_fileId(&mut self, v: u64) { self.fileId = Some(v); }
}

impl ::protobuf::Message for CompleteRequestProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.src)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.clientName)?; },
                3 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.last)?; },
                4 => { self.fileId = Some(is.read_uint64()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.src.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.clientName.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        if let Some(ref v) = self.last.as_ref() { my_size += ::protobuf::rt::message_size(3, v); }
        if let Some(v) = self.fileId { my_size += ::protobuf::rt::value_size(4, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.src.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.clientName.as_ref() { os.write_string(2, v)?; }
        if let Some(ref v) = self.last.as_ref() { os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(v) = self.fileId { os.write_uint64(4, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("CompleteRequestProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<CompleteRequestProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CompleteRequestProto::new)
    }
}
impl ::protobuf::Clear for CompleteRequestProto {
    fn clear(&mut self) {
        self.src.clear(); self.clientName.clear(); self.last.clear(); self.fileId = None;
        self.unknown_fields.clear();
    }
}
impl ::protobuf::reflect::ProtobufValue for CompleteRequestProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct CompleteResponseProto {
    pub result: ::std::option::Option<bool>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl CompleteResponseProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_result(&self) -> bool { self.result.unwrap_or(false) }
}

impl ::protobuf::Message for CompleteResponseProto {
    fn is_initialized(&self) -> bool { true }
    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.result = Some(is.read_bool()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(_v) = self.result { my_size += 2; }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }
    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.result { os.write_bool(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("CompleteResponseProto", Vec::new(), file_descriptor_proto_for("ClientNamenodeProtocol.proto")))
    }
    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<CompleteResponseProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CompleteResponseProto::new)
    }
}
impl ::protobuf::Clear for CompleteResponseProto {
    fn clear(&mut self) { self.result = None; self.unknown_fields.clear(); }
}
impl ::protobuf::reflect::ProtobufValue for CompleteResponseProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
