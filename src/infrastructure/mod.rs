pub mod avatar;
pub mod hashing;
pub mod storage;
