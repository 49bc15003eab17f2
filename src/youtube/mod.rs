pub mod channels;
pub mod classify;
pub mod fields;
pub mod playlists;
pub mod search;
pub mod videos;
