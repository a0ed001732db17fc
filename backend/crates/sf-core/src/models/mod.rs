pub mod comment;
pub mod denylist;
pub mod envelope;
pub mod identity;
pub mod room_id;
