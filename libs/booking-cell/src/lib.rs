pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    BookingError, BookingRecord, BookingSearchQuery, BookingStats, BookingStatus,
    CreateBookingRequest, StatusFilter,
};
pub use services::{
    booking::BookingService,
    lifecycle::BookingLifecycleService,
    search::{booking_stats, filter_bookings},
};
