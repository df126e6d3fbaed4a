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
//! Generated file from `acl.proto`

use crate::support::file_descriptor_proto_for;

#[derive(PartialEq,Clone,Default,Debug)]
pub struct FsPermissionProto {
    pub perm: ::std::option::Option<u32>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl FsPermissionProto {
    pub fn new() -> Self { ::std::default::Default::default() }
    pub fn get_perm(&self) -> u32 { self.perm.unwrap_or(0) }
    pub fn set_perm(&mut self, v: u32) { self.perm = Some(v); }
}

impl ::protobuf::Message for FsPermissionProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { self.perm = Some(is.read_uint32()?); },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(v) = self.perm { my_size += ::protobuf::rt::value_size(1, v, ::protobuf::wire_format::WireTypeVarint); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(v) = self.perm { os.write_uint32(1, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("FsPermissionProto", Vec::new(), file_descriptor_proto_for("acl.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<FsPermissionProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FsPermissionProto::new)
    }
}

impl ::protobuf::Clear for FsPermissionProto {
    fn clear(&mut self) {
        self.perm = None;
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for FsPermissionProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
