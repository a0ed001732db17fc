mod comment;
mod denylist;
mod envelope;
mod identity;
mod room_id;
