pub mod booking;
pub mod chat;
pub mod user;

pub use booking::{
    Booking, BookingStatus, CreateBookingRequest, CreateBookingResponse, DepartmentCode,
    LanguageCode, LocalizedBooking, SlotCode, UiStatus,
};
pub use chat::{ChatMessage, ChatRole};
pub use user::Identity;
