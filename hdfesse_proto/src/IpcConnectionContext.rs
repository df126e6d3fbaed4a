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
//! Generated file from `IpcConnectionContext.proto`

use crate::support::file_descriptor_proto_for;

#[derive(PartialEq,Clone,Default,Debug)]
pub struct UserInformationProto {
    effectiveUser: ::protobuf::SingularField<::std::string::String>,
    realUser: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl UserInformationProto {
    pub fn new() -> Self { ::std::default::Default::default() }

    pub fn get_effectiveUser(&self) -> &str { match self.effectiveUser.as_ref() { Some(v) => v, None => "" } }
    pub fn has_effectiveUser(&self) -> bool { self.effectiveUser.is_some() }
    pub fn set_effectiveUser(&mut self, v: ::std::string::String) { self.effectiveUser = ::protobuf::SingularField::some(v); }

    pub fn get_realUser(&self) -> &str { match self.realUser.as_ref() { Some(v) => v, None => "" } }
    pub fn has_realUser(&self) -> bool { self.realUser.is_some() }
    pub fn set_realUser(&mut self, v: ::std::string::String) { self.realUser = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for UserInformationProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.effectiveUser)?; },
                2 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.realUser)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.effectiveUser.as_ref() { my_size += ::protobuf::rt::string_size(1, v); }
        if let Some(ref v) = self.realUser.as_ref() { my_size += ::protobuf::rt::string_size(2, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.effectiveUser.as_ref() { os.write_string(1, v)?; }
        if let Some(ref v) = self.realUser.as_ref() { os.write_string(2, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("UserInformationProto", Vec::new(), file_descriptor_proto_for("IpcConnectionContext.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<UserInformationProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(UserInformationProto::new)
    }
}

impl ::protobuf::Clear for UserInformationProto {
    fn clear(&mut self) {
        self.effectiveUser.clear();
        self.realUser.clear();
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for UserInformationProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}

#[derive(PartialEq,Clone,Default,Debug)]
pub struct IpcConnectionContextProto {
    userInfo: ::protobuf::SingularPtrField<UserInformationProto>,
    protocol: ::protobuf::SingularField<::std::string::String>,
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl IpcConnectionContextProto {
    pub fn new() -> Self { ::std::default::Default::default() }

    pub fn get_userInfo(&self) -> &UserInformationProto {
        self.userInfo.as_ref().unwrap_or_else(|| UserInformationProto::default_instance())
    }
    pub fn has_userInfo(&self) -> bool { self.userInfo.is_some() }
    pub fn mut_userInfo(&mut self) -> &mut UserInformationProto {
        if self.userInfo.is_none() { self.userInfo.set_default(); }
        self.userInfo.as_mut().unwrap()
    }
    pub fn set_userInfo(&mut self, v: UserInformationProto) { self.userInfo = ::protobuf::SingularPtrField::some(v); }

    pub fn get_protocol(&self) -> &str { match self.protocol.as_ref() { Some(v) => v, None => "" } }
    pub fn set_protocol(&mut self, v: ::std::string::String) { self.protocol = ::protobuf::SingularField::some(v); }
}

impl ::protobuf::Message for IpcConnectionContextProto {
    fn is_initialized(&self) -> bool { true }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                2 => { ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.userInfo)?; },
                3 => { ::protobuf::rt::read_singular_string_into(wire_type, is, &mut self.protocol)?; },
                _ => { ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?; },
            };
        }
        Ok(())
    }

    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.userInfo.as_ref() { my_size += ::protobuf::rt::message_size(2, v); }
        if let Some(ref v) = self.protocol.as_ref() { my_size += ::protobuf::rt::string_size(3, v); }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.userInfo.as_ref() { os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?; os.write_raw_varint32(v.compute_size())?; v.write_to_with_cached_sizes(os)?; }
        if let Some(ref v) = self.protocol.as_ref() { os.write_string(3, v)?; }
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
        descriptor.get(|| ::protobuf::reflect::MessageDescriptor::new_pb_name::<Self>("IpcConnectionContextProto", Vec::new(), file_descriptor_proto_for("IpcConnectionContext.proto")))
    }

    fn default_instance() -> &'static Self {
        static instance: ::protobuf::rt::LazyV2<IpcConnectionContextProto> = ::protobuf::rt::LazyV2::INIT;
        instance.get(IpcConnectionContextProto::new)
    }
}

impl ::protobuf::Clear for IpcConnectionContextProto {
    fn clear(&mut self) {
        self.userInfo.clear();
        self.protocol.clear();
        self.unknown_fields.clear();
    }
}

impl ::protobuf::reflect::ProtobufValue for IpcConnectionContextProto {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef { ::protobuf::reflect::ReflectValueRef::Message(self) }
}
