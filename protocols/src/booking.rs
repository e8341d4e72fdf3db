//! Messages of `booking.v1.BookingService`.

use crate::payment::PaymentManagerGenericResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OpenStatus {
    Unspecified = 0,
    Received = 1,
    Requested = 2,
    Executed = 3,
    Error = 4,
    Success = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckBookingStatusRequest {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub current_code: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckBookingStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(message, optional, tag = "2")]
    pub booking: ::core::option::Option<BookingStatusRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingStatusRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(int32, tag = "2")]
    pub configuration_booking_id: i32,
    #[prost(string, tag = "3")]
    pub init_booking: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub finish_booking: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub installation_name: ::prost::alloc::string::String,
    #[prost(int32, tag = "6")]
    pub number_locker: i32,
    #[prost(string, tag = "7")]
    pub device_id: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub current_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "9")]
    pub openings: i32,
    #[prost(string, tag = "10")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub email_recipient: ::prost::alloc::string::String,
    #[prost(string, tag = "12")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub updated_at: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteOpenRequest {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub current_code: ::prost::alloc::string::String,
}

/// One progress update of a locker opening.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteOpenResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(enumeration = "OpenStatus", tag = "2")]
    pub status: i32,
}
